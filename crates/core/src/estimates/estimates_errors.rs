use thiserror::Error;

/// Errors raised by the estimate services.
#[derive(Error, Debug)]
pub enum EstimateError {
    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    #[error("Duplicate document id: {0}")]
    DuplicateDocument(String),

    #[error("Line item not found: document '{document_id}', index {index}")]
    ItemNotFound { document_id: String, index: usize },

    #[error("Invalid line item: {0}")]
    InvalidItem(String),
}

impl EstimateError {
    pub fn invalid_item(msg: impl Into<String>) -> Self {
        Self::InvalidItem(msg.into())
    }
}
