//! Costline Analysis - the boundary to the external document-analysis
//! collaborator.
//!
//! The collaborator turns one construction document into an unvalidated
//! draft estimate. This crate defines the `DocumentAnalyzer` trait, an HTTP
//! provider implementation, and the sequential fail-fast batch service that
//! normalizes each draft through `costline_core` and assembles the
//! project-level estimate. Nothing outside this crate consumes the raw
//! collaborator output.

pub mod error;
pub mod http_provider;
pub mod provider;
pub mod service;
pub mod types;

pub use error::AnalysisError;
pub use http_provider::HttpAnalyzer;
pub use provider::DocumentAnalyzer;
pub use service::AnalysisService;
pub use types::DocumentSource;
