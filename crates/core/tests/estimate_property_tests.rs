//! Property-based tests for the budget folds and the dual-unit derivation.
//!
//! These verify that the consistency invariants hold across all valid
//! inputs, using the `proptest` crate for random test case generation.

use proptest::prelude::*;

use costline_core::display::line_display;
use costline_core::estimates::{DocumentEstimate, LineItem, ProjectEstimate};

// =============================================================================
// Generators
// =============================================================================

/// Generates a line item with a derived total and an optional secondary pair.
fn arb_line_item() -> impl Strategy<Value = LineItem> {
    (
        "[A-Za-z ]{3,20}",                      // category
        "[A-Za-z0-9 ]{3,24}",                   // material
        0.01f64..1_000_000.0,                   // quantity
        "[a-z]{1,6}",                           // unit
        0.0f64..100_000.0,                      // unit price
        proptest::option::of((0.01f64..1_000_000.0, "[a-z]{1,6}")),
    )
        .prop_map(
            |(category, material, quantity, unit, unit_price, secondary)| {
                let mut item = LineItem::priced(category, material, quantity, unit, unit_price, None);
                if let Some((secondary_quantity, secondary_unit)) = secondary {
                    item.secondary_quantity = Some(secondary_quantity);
                    item.secondary_unit = Some(secondary_unit);
                }
                item
            },
        )
}

fn arb_document(index: usize) -> impl Strategy<Value = DocumentEstimate> {
    proptest::collection::vec(arb_line_item(), 0..12).prop_map(move |items| {
        DocumentEstimate::new(
            format!("doc-{index}"),
            format!("document-{index}.pdf"),
            "Generated project",
            "USD",
            "National average",
            items,
            vec![],
        )
    })
}

fn arb_project() -> impl Strategy<Value = ProjectEstimate> {
    proptest::collection::vec(proptest::collection::vec(arb_line_item(), 0..12), 0..6).prop_map(
        |per_document_items| {
            let documents = per_document_items
                .into_iter()
                .enumerate()
                .map(|(index, items)| {
                    DocumentEstimate::new(
                        format!("doc-{index}"),
                        format!("document-{index}.pdf"),
                        "Generated project",
                        "USD",
                        "National average",
                        items,
                        vec![],
                    )
                })
                .collect();
            ProjectEstimate::new(documents).expect("generated ids are unique")
        },
    )
}

fn approx_eq(left: f64, right: f64) -> bool {
    let scale = left.abs().max(right.abs()).max(1.0);
    (left - right).abs() <= 1e-9 * scale
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Every document's budget equals the fold of its item totals.
    #[test]
    fn prop_document_budget_folds_item_totals(document in arb_document(0)) {
        let expected: f64 = document.breakdown.iter().map(|item| item.total_price).sum();
        prop_assert_eq!(document.total_budget, expected);
    }

    /// Every item built through the priced constructor satisfies
    /// total == quantity * unit_price.
    #[test]
    fn prop_item_total_is_derived(item in arb_line_item()) {
        prop_assert_eq!(item.total_price, item.quantity * item.unit_price);
    }

    /// The grand total equals the fold of document budgets, including
    /// zero-item documents, and re-folding is idempotent.
    #[test]
    fn prop_grand_total_folds_document_budgets(mut project in arb_project()) {
        let expected: f64 = project.estimates.iter().map(|d| d.total_budget).sum();
        prop_assert_eq!(project.grand_total, expected);

        let refolded = project.refresh_totals();
        prop_assert_eq!(refolded, expected);
    }

    /// The displayed amount (rate * displayed quantity) equals the canonical
    /// total in either representation, and flipping the flag back restores
    /// the original triple exactly.
    #[test]
    fn prop_toggle_invariance_and_idempotence(item in arb_line_item()) {
        let primary = line_display(&item, false);
        let secondary = line_display(&item, true);

        prop_assert!(approx_eq(primary.rate * primary.quantity, item.total_price));
        prop_assert!(approx_eq(secondary.rate * secondary.quantity, item.total_price));

        let restored = line_display(&item, false);
        prop_assert_eq!(primary, restored);
    }
}
