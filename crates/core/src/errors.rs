//! Core error types for the Costline engine.
//!
//! Domain-specific errors (estimates) live next to their module; this module
//! defines the root error the rest of the application folds into.

use thiserror::Error;

use crate::estimates::EstimateError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the budget engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Estimate error: {0}")]
    Estimate(#[from] EstimateError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_errors_fold_into_the_root_error() {
        let error: Error = EstimateError::DocumentNotFound("doc-9".to_string()).into();
        assert!(matches!(error, Error::Estimate(_)));
        assert!(error.to_string().contains("doc-9"));
    }
}
