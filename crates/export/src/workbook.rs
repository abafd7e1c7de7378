//! Multi-sheet spreadsheet workbook.
//!
//! One summary sheet (grand total plus per-document subtotal rows) and one
//! detail sheet per document. Numbers are written raw with a money number
//! format; totals come straight from the export view.

use log::debug;
use rust_xlsxwriter::{Format, Workbook, Worksheet};

use costline_core::display::ToggleState;
use costline_core::estimates::ProjectEstimate;

use crate::error::ExportError;
use crate::rows::{project_view, DocumentSection};

/// Excel's hard limit on sheet names.
const SHEET_NAME_MAX: usize = 31;

/// Builds the workbook for the current toggle state and returns the XLSX
/// bytes. Read-only with respect to project state.
pub fn build_workbook(
    project: &ProjectEstimate,
    toggles: &ToggleState,
) -> Result<Vec<u8>, ExportError> {
    let view = project_view(project, toggles);
    debug!(
        "Building workbook: {} documents, grand total {}",
        view.sections.len(),
        view.grand_total
    );

    let bold = Format::new().set_bold();
    let money = Format::new().set_num_format("#,##0.00");
    let money_bold = Format::new().set_bold().set_num_format("#,##0.00");

    let mut workbook = Workbook::new();

    let summary = workbook.add_worksheet();
    summary.set_name("Summary")?;
    summary.set_column_width(0, 42)?;
    summary.set_column_width(1, 18)?;
    summary.write_string_with_format(0, 0, "Project materials estimate", &bold)?;
    summary.write_string(1, 0, "Currency")?;
    summary.write_string(1, 1, &view.currency)?;
    summary.write_string_with_format(2, 0, "Grand total", &bold)?;
    summary.write_number_with_format(2, 1, view.grand_total, &money_bold)?;

    summary.write_string_with_format(4, 0, "Document", &bold)?;
    summary.write_string_with_format(4, 1, "Subtotal", &bold)?;
    for (index, section) in view.sections.iter().enumerate() {
        let row = 5 + index as u32;
        summary.write_string(row, 0, &section.document_name)?;
        summary.write_number_with_format(row, 1, section.subtotal, &money)?;
    }

    for (index, section) in view.sections.iter().enumerate() {
        let sheet = workbook.add_worksheet();
        sheet.set_name(&sheet_name(index, &section.document_name))?;
        write_detail_sheet(sheet, section, &bold, &money, &money_bold)?;
    }

    Ok(workbook.save_to_buffer()?)
}

fn write_detail_sheet(
    sheet: &mut Worksheet,
    section: &DocumentSection,
    bold: &Format,
    money: &Format,
    money_bold: &Format,
) -> Result<(), ExportError> {
    sheet.set_column_width(0, 20)?;
    sheet.set_column_width(1, 28)?;
    sheet.set_column_width(4, 12)?;
    sheet.set_column_width(5, 14)?;
    sheet.set_column_width(6, 30)?;

    sheet.write_string_with_format(0, 0, &section.document_name, bold)?;
    sheet.write_string(1, 0, &section.project_name)?;
    sheet.write_string(2, 0, &section.market_region)?;

    let headers = ["Category", "Material", "Quantity", "Unit", "Unit rate", "Total", "Notes"];
    for (column, header) in headers.iter().enumerate() {
        sheet.write_string_with_format(4, column as u16, *header, bold)?;
    }

    let mut row = 5u32;
    for line in &section.rows {
        sheet.write_string(row, 0, &line.category)?;
        sheet.write_string(row, 1, &line.material)?;
        sheet.write_number(row, 2, line.quantity)?;
        sheet.write_string(row, 3, &line.unit)?;
        sheet.write_number_with_format(row, 4, line.rate, money)?;
        sheet.write_number_with_format(row, 5, line.total, money)?;
        if let Some(notes) = &line.notes {
            sheet.write_string(row, 6, notes)?;
        }
        row += 1;
    }

    sheet.write_string_with_format(row, 4, "Subtotal", bold)?;
    sheet.write_number_with_format(row, 5, section.subtotal, money_bold)?;
    Ok(())
}

/// Sheet names must be unique, non-empty, at most 31 chars, and free of
/// Excel's reserved characters. The numeric prefix guarantees uniqueness.
fn sheet_name(index: usize, document_name: &str) -> String {
    let cleaned: String = document_name
        .chars()
        .map(|c| match c {
            '[' | ']' | ':' | '*' | '?' | '/' | '\\' | '\'' => ' ',
            other => other,
        })
        .collect();
    let prefix = format!("{}. ", index + 1);
    let budget = SHEET_NAME_MAX - prefix.chars().count();
    let trimmed: String = cleaned.trim().chars().take(budget).collect();
    let name = format!("{prefix}{}", trimmed.trim_end());
    if name.trim() == format!("{}.", index + 1) {
        format!("Document {}", index + 1)
    } else {
        name
    }
}
