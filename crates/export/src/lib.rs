//! Costline Export - on-demand artifacts synchronized with the on-screen view.
//!
//! Both generators render the same `ExportView`, built once per export from
//! the canonical project estimate and the session's current toggle state
//! through the core display derivation. Totals and subtotals are copied
//! from the consistency engine's stored values, never re-summed here, so
//! the artifacts cannot drift from the screen.

pub mod error;
pub mod report;
pub mod rows;
pub mod workbook;

pub use error::ExportError;
pub use report::render_pdf_report;
pub use rows::{project_view, DocumentSection, ExportRow, ExportView};
pub use workbook::build_workbook;
