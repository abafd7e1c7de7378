//! Sequential, fail-fast batch analysis.

use std::collections::HashSet;
use std::sync::Arc;

use log::{error, info};

use costline_core::drafts::normalize_document;
use costline_core::estimates::{DocumentEstimate, ProjectEstimate};

use crate::error::AnalysisError;
use crate::provider::DocumentAnalyzer;
use crate::types::DocumentSource;

/// Runs a batch of documents through the analyzer and assembles the
/// project estimate.
pub struct AnalysisService {
    analyzer: Arc<dyn DocumentAnalyzer>,
}

impl AnalysisService {
    pub fn new(analyzer: Arc<dyn DocumentAnalyzer>) -> Self {
        AnalysisService { analyzer }
    }

    /// Analyzes every document in `sources`, strictly one at a time, and
    /// returns the folded project estimate.
    ///
    /// Sequential on purpose: it bounds the load on the shared analysis
    /// service, not a correctness requirement. Fail-fast: the first failure
    /// aborts the batch and discards every draft gathered so far, so no
    /// partial project estimate is ever surfaced.
    pub async fn analyze_batch(
        &self,
        sources: &[DocumentSource],
    ) -> Result<ProjectEstimate, AnalysisError> {
        let mut seen_ids = HashSet::new();
        for source in sources {
            if !seen_ids.insert(source.id.as_str()) {
                return Err(AnalysisError::invalid_input(format!(
                    "duplicate document id in batch: {}",
                    source.id
                )));
            }
        }

        let mut documents: Vec<DocumentEstimate> = Vec::with_capacity(sources.len());
        for (position, source) in sources.iter().enumerate() {
            info!(
                "Analyzing document {}/{} via {}: {}",
                position + 1,
                sources.len(),
                self.analyzer.name(),
                source.name
            );
            let draft = self.analyzer.analyze(source).await.map_err(|failure| {
                error!(
                    "Analysis failed for document {} ({}); aborting batch: {failure}",
                    source.id, source.name
                );
                failure
            })?;
            documents.push(normalize_document(&source.id, &source.name, draft));
        }

        let project = ProjectEstimate::new(documents)?;
        info!(
            "Batch complete: {} documents, grand total {} {}",
            project.estimates.len(),
            project.grand_total,
            project.currency
        );
        Ok(project)
    }
}
