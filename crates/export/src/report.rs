//! Paginated tabular PDF report.
//!
//! Built on printpdf's builtin Helvetica faces with a manual page cursor:
//! a leading summary page with the grand total and per-document subtotals,
//! then one table per document.

use log::debug;
use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
};

use costline_core::display::ToggleState;
use costline_core::estimates::ProjectEstimate;

use crate::error::ExportError;
use crate::rows::{format_money, format_quantity, project_view, ExportView};

const PAGE_WIDTH_MM: f64 = 210.0;
const PAGE_HEIGHT_MM: f64 = 297.0;
const MARGIN_MM: f64 = 15.0;
const ROW_STEP_MM: f64 = 5.0;

const COL_CATEGORY_MM: f64 = 15.0;
const COL_MATERIAL_MM: f64 = 55.0;
const COL_QUANTITY_MM: f64 = 108.0;
const COL_RATE_MM: f64 = 145.0;
const COL_TOTAL_MM: f64 = 175.0;

/// Renders the report for the current toggle state and returns the PDF
/// bytes. Read-only with respect to project state.
pub fn render_pdf_report(
    project: &ProjectEstimate,
    toggles: &ToggleState,
) -> Result<Vec<u8>, ExportError> {
    let view = project_view(project, toggles);
    debug!(
        "Rendering PDF report: {} documents, grand total {}",
        view.sections.len(),
        view.grand_total
    );

    let (doc, first_page, first_layer) = PdfDocument::new(
        "Project materials estimate",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "content",
    );
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let mut writer = PageWriter {
        layer: doc.get_page(first_page).get_layer(first_layer),
        doc: &doc,
        y: PAGE_HEIGHT_MM - MARGIN_MM,
    };

    write_summary(&mut writer, &view, &regular, &bold);
    for section_index in 0..view.sections.len() {
        write_section(&mut writer, &view, section_index, &regular, &bold);
    }

    Ok(doc.save_to_bytes()?)
}

/// Cursor over the current page; opens a fresh page when a block would
/// cross the bottom margin.
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f64,
}

impl PageWriter<'_> {
    fn ensure_room(&mut self, needed_mm: f64) {
        if self.y - needed_mm < MARGIN_MM {
            let (page, layer) =
                self.doc
                    .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "content");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT_MM - MARGIN_MM;
        }
    }

    fn line(&mut self, font: &IndirectFontRef, size: f64, cells: &[(f64, String)]) {
        self.ensure_room(ROW_STEP_MM);
        for (x, text) in cells {
            self.layer.use_text(text.clone(), size, Mm(*x), Mm(self.y), font);
        }
        self.y -= ROW_STEP_MM;
    }

    fn gap(&mut self, mm: f64) {
        self.y -= mm;
    }
}

fn write_summary(
    writer: &mut PageWriter<'_>,
    view: &ExportView,
    regular: &IndirectFontRef,
    bold: &IndirectFontRef,
) {
    writer.line(bold, 16.0, &[(MARGIN_MM, "Project materials estimate".to_string())]);
    writer.gap(2.0);
    writer.line(
        regular,
        9.0,
        &[(
            MARGIN_MM,
            format!("Generated {}", view.generated_at.format("%Y-%m-%d %H:%M UTC")),
        )],
    );
    writer.gap(4.0);
    writer.line(
        bold,
        13.0,
        &[(
            MARGIN_MM,
            format!("Grand total: {} {}", view.currency, format_money(view.grand_total)),
        )],
    );
    writer.gap(4.0);

    writer.line(bold, 10.0, &[
        (COL_CATEGORY_MM, "Document".to_string()),
        (COL_TOTAL_MM, "Subtotal".to_string()),
    ]);
    for section in &view.sections {
        writer.line(regular, 9.0, &[
            (COL_CATEGORY_MM, clip(&section.document_name, 60)),
            (COL_TOTAL_MM, format_money(section.subtotal)),
        ]);
    }
}

fn write_section(
    writer: &mut PageWriter<'_>,
    view: &ExportView,
    section_index: usize,
    regular: &IndirectFontRef,
    bold: &IndirectFontRef,
) {
    let section = &view.sections[section_index];

    // Keep the heading and at least a couple of rows together.
    writer.gap(6.0);
    writer.ensure_room(6.0 * ROW_STEP_MM);
    writer.line(bold, 12.0, &[(MARGIN_MM, clip(&section.document_name, 70))]);
    writer.line(
        regular,
        9.0,
        &[(
            MARGIN_MM,
            format!("{} - {}", clip(&section.project_name, 50), section.market_region),
        )],
    );
    writer.gap(1.0);
    writer.line(bold, 9.0, &[
        (COL_CATEGORY_MM, "Category".to_string()),
        (COL_MATERIAL_MM, "Material".to_string()),
        (COL_QUANTITY_MM, "Quantity".to_string()),
        (COL_RATE_MM, "Unit rate".to_string()),
        (COL_TOTAL_MM, "Total".to_string()),
    ]);

    for row in &section.rows {
        writer.line(regular, 9.0, &[
            (COL_CATEGORY_MM, clip(&row.category, 22)),
            (COL_MATERIAL_MM, clip(&row.material, 30)),
            (
                COL_QUANTITY_MM,
                format!("{} {}", format_quantity(row.quantity), clip(&row.unit, 10)),
            ),
            (COL_RATE_MM, format_money(row.rate)),
            (COL_TOTAL_MM, format_money(row.total)),
        ]);
    }

    writer.line(bold, 9.0, &[
        (COL_RATE_MM, "Subtotal".to_string()),
        (COL_TOTAL_MM, format_money(section.subtotal)),
    ]);
}

fn clip(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let mut clipped: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        clipped.push_str("...");
        clipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use costline_core::estimates::{DocumentEstimate, LineItem};

    fn sample_project(items_per_document: usize, documents: usize) -> ProjectEstimate {
        let estimates = (0..documents)
            .map(|doc_index| {
                let items = (0..items_per_document)
                    .map(|item_index| {
                        LineItem::priced(
                            "Lumber",
                            format!("Material {item_index}"),
                            2.0,
                            "pcs",
                            3.5,
                            None,
                        )
                    })
                    .collect();
                DocumentEstimate::new(
                    format!("doc-{doc_index}"),
                    format!("document-{doc_index}.pdf"),
                    "Riverside warehouse",
                    "USD",
                    "National average",
                    items,
                    vec![],
                )
            })
            .collect();
        ProjectEstimate::new(estimates).unwrap()
    }

    #[test]
    fn test_report_bytes_are_a_pdf() {
        let project = sample_project(3, 2);
        let bytes = render_pdf_report(&project, &ToggleState::new()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_long_breakdowns_paginate_without_error() {
        let project = sample_project(120, 3);
        let bytes = render_pdf_report(&project, &ToggleState::new()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 1000);
    }

    #[test]
    fn test_empty_project_still_renders_summary() {
        let project = ProjectEstimate::new(vec![]).unwrap();
        let bytes = render_pdf_report(&project, &ToggleState::new()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_clip_preserves_short_text() {
        assert_eq!(clip("Lumber", 22), "Lumber");
        assert_eq!(clip("abcdefghij", 5), "ab...");
    }
}
