//! HTTP implementation of the analyzer provider.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use log::debug;
use reqwest::Client;
use serde_json::json;

use costline_core::drafts::DraftEstimate;

use crate::error::AnalysisError;
use crate::provider::DocumentAnalyzer;
use crate::types::DocumentSource;

/// Posts documents to a remote analysis endpoint and returns its draft
/// estimate verbatim.
pub struct HttpAnalyzer {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl HttpAnalyzer {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        HttpAnalyzer {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl DocumentAnalyzer for HttpAnalyzer {
    fn name(&self) -> &'static str {
        "HTTP"
    }

    async fn analyze(&self, source: &DocumentSource) -> Result<DraftEstimate, AnalysisError> {
        let payload = json!({
            "documentId": source.id,
            "displayName": source.name,
            "mimeType": source.mime_type,
            "content": BASE64.encode(&source.content),
        });

        debug!(
            "Posting document {} ({} bytes) to analysis endpoint",
            source.id,
            source.content.len()
        );
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::provider(format!(
                "analysis endpoint returned {status}: {body}"
            )));
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(AnalysisError::EmptyResponse);
        }
        serde_json::from_str(&body).map_err(|parse_error| {
            AnalysisError::Parse(format!(
                "document {}: {parse_error}",
                source.id
            ))
        })
    }
}
