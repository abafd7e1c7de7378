//! Analysis boundary error types.

use thiserror::Error;

use costline_core::estimates::EstimateError;

/// Errors raised at the analysis collaborator boundary.
///
/// All of these are batch-fatal: any one of them aborts the analysis
/// operation and discards results gathered so far. Retry is an explicit
/// user action, never automatic.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Invalid input or request.
    #[error("{0}")]
    InvalidInput(String),

    /// Provider error (non-success status or provider-reported failure).
    #[error("Provider error: {0}")]
    Provider(String),

    /// Transport-level failure reaching the provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The provider returned an empty body.
    #[error("Empty response from analysis provider")]
    EmptyResponse,

    /// The provider body was not parsable as a draft estimate.
    #[error("Failed to parse analysis response: {0}")]
    Parse(String),

    /// Estimate assembly failed (e.g. duplicate document ids).
    #[error("Estimate error: {0}")]
    Estimate(#[from] EstimateError),
}

impl AnalysisError {
    /// Create a new invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new provider error.
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }
}

/// Error code for programmatic handling by the shell.
impl AnalysisError {
    pub fn code(&self) -> &'static str {
        match self {
            AnalysisError::InvalidInput(_) => "INVALID_INPUT",
            AnalysisError::Provider(_) => "PROVIDER_ERROR",
            AnalysisError::Network(_) => "NETWORK_ERROR",
            AnalysisError::EmptyResponse => "EMPTY_RESPONSE",
            AnalysisError::Parse(_) => "PARSE_ERROR",
            AnalysisError::Estimate(_) => "ESTIMATE_ERROR",
        }
    }
}
