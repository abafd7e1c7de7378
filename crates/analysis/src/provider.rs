//! The analyzer provider trait.

use async_trait::async_trait;

use costline_core::drafts::DraftEstimate;

use crate::error::AnalysisError;
use crate::types::DocumentSource;

/// A provider that turns one document into a draft materials estimate.
///
/// Implementations own prompting, model selection, and transport; callers
/// only ever see the unvalidated `DraftEstimate` or a failure. The draft is
/// consumed exclusively by the core normalizer.
#[async_trait]
pub trait DocumentAnalyzer: Send + Sync {
    /// Short provider name, used in logs.
    fn name(&self) -> &'static str;

    async fn analyze(&self, source: &DocumentSource) -> Result<DraftEstimate, AnalysisError>;
}
