//! Process-lifetime holder of the current project estimate and its view
//! toggles.
//!
//! The session owns the single in-memory `ProjectEstimate` plus the
//! transient `ToggleState`. Every mutation completes its recomputation
//! before returning, so readers never observe a partially-consistent
//! project. The session itself does no locking; the hosting shell decides
//! how it is shared.

use log::info;

use crate::display::display_model::ToggleState;
use crate::estimates::estimate_model::{LineItem, NewLineItem, ProjectEstimate};
use crate::estimates::estimate_service::EstimateService;
use crate::estimates::estimates_errors::EstimateError;

#[derive(Debug, Default)]
pub struct AnalysisSession {
    project: Option<ProjectEstimate>,
    toggles: ToggleState,
    estimate_service: EstimateService,
}

impl AnalysisSession {
    pub fn new() -> Self {
        AnalysisSession::default()
    }

    /// Replaces the project wholesale and discards all view toggles.
    pub fn install_project(&mut self, project: ProjectEstimate) {
        info!(
            "Installing project estimate {} with {} documents (grand total {})",
            project.id,
            project.estimates.len(),
            project.grand_total
        );
        self.project = Some(project);
        self.toggles.clear();
    }

    /// Drops all session state (explicit user reset).
    pub fn reset(&mut self) {
        self.project = None;
        self.toggles.clear();
    }

    pub fn project(&self) -> Option<&ProjectEstimate> {
        self.project.as_ref()
    }

    pub fn toggles(&self) -> &ToggleState {
        &self.toggles
    }

    /// Flips the primary/secondary display flag for one line item and
    /// returns the new flag. The target must exist; the canonical records
    /// are not touched.
    pub fn toggle_unit(&mut self, document_id: &str, index: usize) -> Result<bool, EstimateError> {
        let project = self
            .project
            .as_ref()
            .ok_or_else(|| EstimateError::DocumentNotFound(document_id.to_string()))?;
        let document = project
            .document(document_id)
            .ok_or_else(|| EstimateError::DocumentNotFound(document_id.to_string()))?;
        if index >= document.breakdown.len() {
            return Err(EstimateError::ItemNotFound {
                document_id: document_id.to_string(),
                index,
            });
        }
        Ok(self.toggles.toggle(document_id, index))
    }

    /// Prepends a user-authored line item and re-folds all totals, then
    /// re-keys the document's toggles so existing flags stay on the items
    /// they were set on.
    pub fn add_manual_item(
        &mut self,
        document_id: &str,
        input: NewLineItem,
    ) -> Result<LineItem, EstimateError> {
        let project = self
            .project
            .as_mut()
            .ok_or_else(|| EstimateError::DocumentNotFound(document_id.to_string()))?;
        let item = self
            .estimate_service
            .add_manual_item(project, document_id, input)?;
        self.toggles.shift_after_prepend(document_id);
        Ok(item)
    }
}
