//! Export error types.
//!
//! Export failures are non-fatal to the session: the project state is
//! read-only during rendering and remains untouched.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("PDF rendering failed: {0}")]
    Pdf(#[from] printpdf::Error),

    #[error("Workbook generation failed: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}
