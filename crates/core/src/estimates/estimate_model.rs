//! Canonical estimate records and the folds that keep their derived totals
//! consistent.
//!
//! Records in this module are only produced by the draft normalizer, the
//! estimate service, or their own constructors, all of which re-derive
//! `total_price`, `total_budget`, and `grand_total`. No other code path
//! mutates them, so a constructed record is always internally consistent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::DEFAULT_CURRENCY;
use crate::estimates::estimates_errors::EstimateError;

/// One material entry of a document's breakdown.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub category: String,
    pub material: String,
    pub quantity: f64,
    pub unit: String,
    pub unit_price: f64,
    /// Derived; equals `quantity * unit_price` whenever both were known at
    /// normalization time.
    pub total_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_quantity: Option<f64>,
    /// Present iff `secondary_quantity` is present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_unit: Option<String>,
}

impl LineItem {
    /// Builds an item whose total is derived from quantity and unit price.
    pub fn priced(
        category: impl Into<String>,
        material: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        unit_price: f64,
        notes: Option<String>,
    ) -> Self {
        LineItem {
            category: category.into(),
            material: material.into(),
            quantity,
            unit: unit.into(),
            unit_price,
            total_price: quantity * unit_price,
            notes,
            secondary_quantity: None,
            secondary_unit: None,
        }
    }

    /// The secondary quantity/unit pair, if it is usable for display.
    ///
    /// A missing unit or a zero, negative, or non-finite secondary quantity
    /// disqualifies the pair (a zero quantity would put a division by zero
    /// in the derived rate).
    pub fn secondary_pair(&self) -> Option<(f64, &str)> {
        let quantity = self.secondary_quantity?;
        let unit = self.secondary_unit.as_deref()?;
        if !quantity.is_finite() || quantity <= 0.0 {
            return None;
        }
        Some((quantity, unit))
    }
}

/// User-authored input for manual line-item insertion.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewLineItem {
    pub category: String,
    pub material: String,
    pub quantity: f64,
    pub unit: String,
    pub unit_price: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Direction of a category's recent price movement. Display-only.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

impl TrendDirection {
    /// Lenient parse of the collaborator's trend labels. Anything
    /// unrecognized falls back to `Stable`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "UP" | "RISING" | "INCREASING" => TrendDirection::Up,
            "DOWN" | "FALLING" | "DECREASING" => TrendDirection::Down,
            _ => TrendDirection::Stable,
        }
    }
}

/// Price movement summary for one material category. Display-only; no
/// invariants beyond shape are enforced.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTrend {
    pub category: String,
    pub trend: TrendDirection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage_change: Option<f64>,
    /// Chronological, oldest first, at most `PRICE_HISTORY_LIMIT` entries.
    pub price_history: Vec<f64>,
}

/// The normalized estimate for one uploaded document.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentEstimate {
    pub id: String,
    pub name: String,
    pub project_name: String,
    pub currency: String,
    pub market_region: String,
    /// Insertion order; manual additions prepend.
    pub breakdown: Vec<LineItem>,
    pub category_trends: Vec<CategoryTrend>,
    /// Derived; equals the sum of `breakdown` totals.
    pub total_budget: f64,
}

impl DocumentEstimate {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        project_name: impl Into<String>,
        currency: impl Into<String>,
        market_region: impl Into<String>,
        breakdown: Vec<LineItem>,
        category_trends: Vec<CategoryTrend>,
    ) -> Self {
        let mut document = DocumentEstimate {
            id: id.into(),
            name: name.into(),
            project_name: project_name.into(),
            currency: currency.into(),
            market_region: market_region.into(),
            breakdown,
            category_trends,
            total_budget: 0.0,
        };
        document.refresh_total_budget();
        document
    }

    /// Folds the breakdown's item totals into `total_budget`.
    ///
    /// An empty breakdown folds to 0; the document still counts toward the
    /// project total.
    pub fn refresh_total_budget(&mut self) -> f64 {
        self.total_budget = self.breakdown.iter().map(|item| item.total_price).sum();
        self.total_budget
    }

    /// Inserts an item at the front of the breakdown (most-recent-first).
    pub fn prepend_item(&mut self, item: LineItem) {
        self.breakdown.insert(0, item);
    }
}

/// The aggregate project-level estimate, replaced wholesale on reset.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEstimate {
    pub id: String,
    /// Derived; equals the sum of document budgets.
    pub grand_total: f64,
    /// Copied from the first document, or the default when empty.
    pub currency: String,
    pub estimates: Vec<DocumentEstimate>,
    pub generated_at: DateTime<Utc>,
}

impl ProjectEstimate {
    /// Assembles a project from normalized documents and folds its totals.
    ///
    /// Document ids must be unique within the project.
    pub fn new(estimates: Vec<DocumentEstimate>) -> Result<Self, EstimateError> {
        let mut seen = std::collections::HashSet::new();
        for document in &estimates {
            if !seen.insert(document.id.as_str()) {
                return Err(EstimateError::DuplicateDocument(document.id.clone()));
            }
        }
        let currency = estimates
            .first()
            .map(|document| document.currency.clone())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
        let mut project = ProjectEstimate {
            id: Uuid::new_v4().to_string(),
            grand_total: 0.0,
            currency,
            estimates,
            generated_at: Utc::now(),
        };
        project.refresh_totals();
        Ok(project)
    }

    /// Two-level fold: refreshes every document's `total_budget`, then folds
    /// the results into `grand_total`.
    ///
    /// Always a full re-fold. The cost is bounded by the total line-item
    /// count, and correctness must not depend on partial-update bookkeeping.
    pub fn refresh_totals(&mut self) -> f64 {
        for document in &mut self.estimates {
            document.refresh_total_budget();
        }
        self.grand_total = self
            .estimates
            .iter()
            .map(|document| document.total_budget)
            .sum();
        self.grand_total
    }

    pub fn document(&self, document_id: &str) -> Option<&DocumentEstimate> {
        self.estimates
            .iter()
            .find(|document| document.id == document_id)
    }

    pub fn document_mut(&mut self, document_id: &str) -> Option<&mut DocumentEstimate> {
        self.estimates
            .iter_mut()
            .find(|document| document.id == document_id)
    }
}
