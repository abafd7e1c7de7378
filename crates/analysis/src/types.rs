//! Input types handed to the analysis boundary.

use serde::{Deserialize, Serialize};

/// One uploaded document, as handed to the analyzer.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSource {
    /// Stable identifier, unique within a batch.
    pub id: String,
    /// Display name shown in the UI and exports.
    pub name: String,
    /// MIME type as reported by the upload layer.
    pub mime_type: String,
    /// Raw document bytes.
    pub content: Vec<u8>,
}

impl DocumentSource {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        mime_type: impl Into<String>,
        content: Vec<u8>,
    ) -> Self {
        DocumentSource {
            id: id.into(),
            name: name.into(),
            mime_type: mime_type.into(),
            content,
        }
    }
}
