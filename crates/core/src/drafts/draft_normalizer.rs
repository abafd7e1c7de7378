//! Repairs a collaborator draft into a well-formed `DocumentEstimate`.
//!
//! This is the only boundary between the collaborator's raw output and the
//! canonical records; every internal structure is built here with its
//! invariants established. The normalizer is pure: it reads nothing and
//! writes nothing beyond the record it returns.

use log::debug;

use crate::constants::{
    DEFAULT_CURRENCY, DEFAULT_MARKET_REGION, FALLBACK_CATEGORY, FALLBACK_MATERIAL, FALLBACK_UNIT,
    PRICE_HISTORY_LIMIT,
};
use crate::drafts::draft_model::{DraftEstimate, DraftLineItem, DraftTrend};
use crate::estimates::estimate_model::{
    CategoryTrend, DocumentEstimate, LineItem, TrendDirection,
};

/// Normalizes one collaborator draft for the document identified by
/// `document_id` / `display_name`.
///
/// A draft without a breakdown yields a document with an empty breakdown
/// and a zero budget; it never fails the batch. The collaborator's own
/// `totalBudget` is ignored and re-derived from the normalized items.
pub fn normalize_document(
    document_id: &str,
    display_name: &str,
    draft: DraftEstimate,
) -> DocumentEstimate {
    if draft.breakdown.is_none() {
        debug!(
            "Draft for document {} has no breakdown; substituting an empty one",
            document_id
        );
    }
    let breakdown: Vec<LineItem> = draft
        .breakdown
        .unwrap_or_default()
        .into_iter()
        .map(|item| normalize_item(document_id, item))
        .collect();
    let trends: Vec<CategoryTrend> = draft
        .category_trends
        .unwrap_or_default()
        .into_iter()
        .map(normalize_trend)
        .collect();

    DocumentEstimate::new(
        document_id,
        display_name,
        non_empty(draft.project_name).unwrap_or_else(|| display_name.to_string()),
        non_empty(draft.currency).unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        non_empty(draft.market_region).unwrap_or_else(|| DEFAULT_MARKET_REGION.to_string()),
        breakdown,
        trends,
    )
}

fn normalize_item(document_id: &str, draft: DraftLineItem) -> LineItem {
    let quantity = draft
        .quantity
        .filter(|quantity| quantity.is_finite() && *quantity > 0.0);
    let unit_price = draft
        .unit_price
        .filter(|price| price.is_finite() && *price >= 0.0);

    // Supplied totals are never trusted when both factors are known; they
    // only survive as a best-effort fallback for partial items.
    let total_price = match (quantity, unit_price) {
        (Some(quantity), Some(unit_price)) => quantity * unit_price,
        _ => {
            let fallback = draft
                .total_price
                .filter(|total| total.is_finite() && *total >= 0.0)
                .unwrap_or(0.0);
            debug!(
                "Draft item in document {} is missing quantity or unit price; \
                 keeping supplied total {} as fallback",
                document_id, fallback
            );
            fallback
        }
    };

    let (secondary_quantity, secondary_unit) = match (
        draft
            .secondary_quantity
            .filter(|quantity| quantity.is_finite() && *quantity > 0.0),
        non_empty(draft.secondary_unit),
    ) {
        (Some(quantity), Some(unit)) => (Some(quantity), Some(unit)),
        // An incomplete pair is dropped entirely.
        _ => (None, None),
    };

    LineItem {
        category: non_empty(draft.category).unwrap_or_else(|| FALLBACK_CATEGORY.to_string()),
        material: non_empty(draft.material).unwrap_or_else(|| FALLBACK_MATERIAL.to_string()),
        quantity: quantity.unwrap_or(0.0),
        unit: non_empty(draft.unit).unwrap_or_else(|| FALLBACK_UNIT.to_string()),
        unit_price: unit_price.unwrap_or(0.0),
        total_price,
        notes: non_empty(draft.notes),
        secondary_quantity,
        secondary_unit,
    }
}

fn normalize_trend(draft: DraftTrend) -> CategoryTrend {
    let mut price_history = draft.price_history;
    // Chronological, oldest first: when the collaborator over-delivers,
    // keep the most recent entries.
    if price_history.len() > PRICE_HISTORY_LIMIT {
        price_history = price_history.split_off(price_history.len() - PRICE_HISTORY_LIMIT);
    }
    CategoryTrend {
        category: non_empty(draft.category).unwrap_or_else(|| FALLBACK_CATEGORY.to_string()),
        trend: draft
            .trend
            .as_deref()
            .map(TrendDirection::parse)
            .unwrap_or(TrendDirection::Stable),
        percentage_change: draft.percentage_change.filter(|change| change.is_finite()),
        price_history,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}
