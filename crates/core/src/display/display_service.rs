//! The dual-unit display derivation.
//!
//! This function is the single source of truth for what a line item shows.
//! The on-screen table and both export generators all go through it; no
//! renderer derives quantity, unit, or rate on its own.

use crate::display::display_model::LineDisplay;
use crate::estimates::estimate_model::LineItem;

/// Derives the displayed `(quantity, unit, rate)` triple for `item`.
///
/// With `show_secondary` false, or when the item has no usable secondary
/// pair, the primary representation passes through unchanged. With a valid
/// pair, the rate is back-derived from the canonical `total_price` so the
/// amount column is identical in either representation; `total_price` is
/// never recomputed from the secondary rate.
pub fn line_display(item: &LineItem, show_secondary: bool) -> LineDisplay {
    if show_secondary {
        if let Some((secondary_quantity, secondary_unit)) = item.secondary_pair() {
            return LineDisplay {
                quantity: secondary_quantity,
                unit: secondary_unit.to_string(),
                rate: item.total_price / secondary_quantity,
            };
        }
    }
    LineDisplay {
        quantity: item.quantity,
        unit: item.unit.clone(),
        rate: item.unit_price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_with_secondary() -> LineItem {
        LineItem {
            category: "Flooring".to_string(),
            material: "Oak planks".to_string(),
            quantity: 40.0,
            unit: "box".to_string(),
            unit_price: 62.5,
            total_price: 2500.0,
            notes: None,
            secondary_quantity: Some(92.9),
            secondary_unit: Some("m2".to_string()),
        }
    }

    #[test]
    fn test_primary_representation_passes_through() {
        let item = item_with_secondary();
        let display = line_display(&item, false);
        assert_eq!(display.quantity, 40.0);
        assert_eq!(display.unit, "box");
        assert_eq!(display.rate, 62.5);
    }

    #[test]
    fn test_secondary_rate_is_back_derived_from_total() {
        let item = item_with_secondary();
        let display = line_display(&item, true);
        assert_eq!(display.quantity, 92.9);
        assert_eq!(display.unit, "m2");
        assert!((display.rate - 2500.0 / 92.9).abs() < 1e-12);
    }

    #[test]
    fn test_displayed_amount_is_invariant_under_toggle() {
        let item = item_with_secondary();
        for show_secondary in [false, true] {
            let display = line_display(&item, show_secondary);
            assert!((display.rate * display.quantity - item.total_price).abs() < 1e-9);
        }
    }

    #[test]
    fn test_toggle_round_trip_restores_primary_triple() {
        let item = item_with_secondary();
        let before = line_display(&item, false);
        let _secondary = line_display(&item, true);
        let after = line_display(&item, false);
        assert_eq!(before, after);
    }

    #[test]
    fn test_missing_or_zero_secondary_falls_back_to_primary() {
        let mut no_pair = item_with_secondary();
        no_pair.secondary_quantity = None;
        no_pair.secondary_unit = None;
        assert_eq!(line_display(&no_pair, true), line_display(&no_pair, false));

        let mut zero = item_with_secondary();
        zero.secondary_quantity = Some(0.0);
        assert_eq!(line_display(&zero, true).unit, "box");
        assert_eq!(line_display(&zero, true).rate, 62.5);
    }
}
