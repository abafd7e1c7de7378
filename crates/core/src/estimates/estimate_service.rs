//! Manual line-item insertion and the re-fold it triggers.

use log::{debug, info};

use crate::estimates::estimate_model::{LineItem, NewLineItem, ProjectEstimate};
use crate::estimates::estimates_errors::EstimateError;

/// Applies user-authored corrections to a project estimate.
///
/// The service only ever prepends items; it never edits or removes them.
/// Every successful insertion completes the full two-level re-fold before
/// returning, so callers never observe a partially-consistent project.
#[derive(Debug, Default, Clone)]
pub struct EstimateService;

impl EstimateService {
    pub fn new() -> Self {
        EstimateService
    }

    /// Validates `input`, prepends it to the target document's breakdown,
    /// and re-folds the document and project totals.
    ///
    /// Returns the stored item. On any validation failure the project is
    /// left untouched.
    pub fn add_manual_item(
        &self,
        project: &mut ProjectEstimate,
        document_id: &str,
        input: NewLineItem,
    ) -> Result<LineItem, EstimateError> {
        Self::validate_input(&input)?;

        let document = project
            .document_mut(document_id)
            .ok_or_else(|| EstimateError::DocumentNotFound(document_id.to_string()))?;

        let item = LineItem::priced(
            input.category.trim(),
            input.material.trim(),
            input.quantity,
            input.unit.trim(),
            input.unit_price,
            input
                .notes
                .as_deref()
                .map(str::trim)
                .filter(|notes| !notes.is_empty())
                .map(str::to_string),
        );
        debug!(
            "Prepending manual item '{}' ({} {} @ {}) to document {}",
            item.material, item.quantity, item.unit, item.unit_price, document_id
        );
        document.prepend_item(item.clone());

        let grand_total = project.refresh_totals();
        info!(
            "Manual insertion applied to document {}; grand total now {}",
            document_id, grand_total
        );
        Ok(item)
    }

    fn validate_input(input: &NewLineItem) -> Result<(), EstimateError> {
        if input.category.trim().is_empty() {
            return Err(EstimateError::invalid_item("category must not be empty"));
        }
        if input.material.trim().is_empty() {
            return Err(EstimateError::invalid_item("material must not be empty"));
        }
        if input.unit.trim().is_empty() {
            return Err(EstimateError::invalid_item("unit must not be empty"));
        }
        if !input.quantity.is_finite() || input.quantity <= 0.0 {
            return Err(EstimateError::invalid_item(format!(
                "quantity must be a positive number, got {}",
                input.quantity
            )));
        }
        if !input.unit_price.is_finite() || input.unit_price < 0.0 {
            return Err(EstimateError::invalid_item(format!(
                "unit price must be a non-negative number, got {}",
                input.unit_price
            )));
        }
        Ok(())
    }
}
