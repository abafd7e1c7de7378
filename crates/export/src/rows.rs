//! The shared export view: one derivation pass feeding both artifacts.

use chrono::{DateTime, Utc};

use costline_core::display::{line_display, ToggleState};
use costline_core::estimates::ProjectEstimate;

/// One rendered line: the toggled quantity/unit/rate triple plus the
/// canonical total.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRow {
    pub category: String,
    pub material: String,
    pub quantity: f64,
    pub unit: String,
    pub rate: f64,
    pub total: f64,
    pub notes: Option<String>,
}

/// All rows of one document, with the engine's stored subtotal.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSection {
    pub document_id: String,
    pub document_name: String,
    pub project_name: String,
    pub market_region: String,
    pub subtotal: f64,
    pub rows: Vec<ExportRow>,
}

/// Snapshot of everything the artifacts render.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportView {
    pub grand_total: f64,
    pub currency: String,
    pub generated_at: DateTime<Utc>,
    pub sections: Vec<DocumentSection>,
}

/// Builds the export snapshot for the current toggle state.
///
/// Every row goes through `line_display`, the same derivation the on-screen
/// table uses. Subtotals and the grand total are copied from the project
/// record; the exporters never recompute totals independently of the
/// engine.
pub fn project_view(project: &ProjectEstimate, toggles: &ToggleState) -> ExportView {
    let sections = project
        .estimates
        .iter()
        .map(|document| {
            let rows = document
                .breakdown
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    let display = line_display(item, toggles.is_secondary(&document.id, index));
                    ExportRow {
                        category: item.category.clone(),
                        material: item.material.clone(),
                        quantity: display.quantity,
                        unit: display.unit,
                        rate: display.rate,
                        total: item.total_price,
                        notes: item.notes.clone(),
                    }
                })
                .collect();
            DocumentSection {
                document_id: document.id.clone(),
                document_name: document.name.clone(),
                project_name: document.project_name.clone(),
                market_region: document.market_region.clone(),
                subtotal: document.total_budget,
                rows,
            }
        })
        .collect();

    ExportView {
        grand_total: project.grand_total,
        currency: project.currency.clone(),
        generated_at: project.generated_at,
        sections,
    }
}

/// Money formatting for artifact cells: thousands separators, two decimals.
pub(crate) fn format_money(amount: f64) -> String {
    if !amount.is_finite() {
        return "0.00".to_string();
    }
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u128;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!(
        "{}{}.{:02}",
        if negative { "-" } else { "" },
        grouped,
        fraction
    )
}

/// Quantity formatting: whole numbers without decimals, otherwise two.
pub(crate) fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 && quantity.abs() < 1e15 {
        format!("{}", quantity as i64)
    } else {
        format!("{quantity:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use costline_core::estimates::{DocumentEstimate, LineItem};

    fn project_with_secondary() -> ProjectEstimate {
        let items = vec![
            LineItem {
                category: "Flooring".to_string(),
                material: "Oak planks".to_string(),
                quantity: 40.0,
                unit: "box".to_string(),
                unit_price: 62.5,
                total_price: 2500.0,
                notes: Some("grade A".to_string()),
                secondary_quantity: Some(92.9),
                secondary_unit: Some("m2".to_string()),
            },
            LineItem::priced("Lumber", "2x4 studs", 10.0, "pcs", 5.0, None),
        ];
        let document = DocumentEstimate::new(
            "doc-1",
            "plans.pdf",
            "Riverside warehouse",
            "USD",
            "National average",
            items,
            vec![],
        );
        ProjectEstimate::new(vec![document]).unwrap()
    }

    #[test]
    fn test_rows_follow_toggle_state_while_totals_stay_fixed() {
        let project = project_with_secondary();
        let mut toggles = ToggleState::new();

        let primary = project_view(&project, &toggles);
        assert_eq!(primary.sections[0].rows[0].quantity, 40.0);
        assert_eq!(primary.sections[0].rows[0].unit, "box");

        toggles.toggle("doc-1", 0);
        let secondary = project_view(&project, &toggles);
        let toggled_row = &secondary.sections[0].rows[0];
        assert_eq!(toggled_row.quantity, 92.9);
        assert_eq!(toggled_row.unit, "m2");
        // The amount column is identical in both representations.
        assert_eq!(toggled_row.total, primary.sections[0].rows[0].total);
        assert_eq!(secondary.grand_total, primary.grand_total);
    }

    #[test]
    fn test_subtotals_are_copied_from_the_engine() {
        let mut project = project_with_secondary();
        // Simulate drift: the view must mirror the stored totals, not
        // re-derive them.
        project.estimates[0].total_budget = 1234.5;
        project.grand_total = 1234.5;

        let view = project_view(&project, &ToggleState::new());
        assert_eq!(view.sections[0].subtotal, 1234.5);
        assert_eq!(view.grand_total, 1234.5);
    }

    #[test]
    fn test_format_money_groups_thousands() {
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(6.0), "6.00");
        assert_eq!(format_money(1234.5), "1,234.50");
        assert_eq!(format_money(1_000_000.0), "1,000,000.00");
        assert_eq!(format_money(-56.25), "-56.25");
        assert_eq!(format_money(f64::NAN), "0.00");
    }

    #[test]
    fn test_format_quantity_trims_whole_numbers() {
        assert_eq!(format_quantity(10.0), "10");
        assert_eq!(format_quantity(92.9), "92.90");
    }
}
