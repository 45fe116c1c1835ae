//! Export error types.

/// Errors that can occur while writing the spreadsheet.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Workbook could not be built or saved
    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Output directory could not be created
    #[error("failed to create output directory: {0}")]
    Io(#[from] std::io::Error),
}
