//! Spreadsheet writer.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use tracing::info;

use crate::domain::Value;

use super::error::ExportError;
use super::row::{COLUMNS, ExportRow};

/// Write `rows` under a bold header row to a new workbook at `path`.
///
/// Any existing file is replaced. Creates parent directories if they
/// don't exist. Empty cells are left blank.
pub fn write_workbook(path: &Path, rows: &[ExportRow]) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let header = Format::new().set_bold();
    for (col, title) in COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, column(col)?, *title, &header)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let row_num = u32::try_from(i + 1).map_err(|_| XlsxError::RowColumnLimitError)?;
        for (col, value) in row.cells().into_iter().enumerate() {
            write_cell(worksheet, row_num, column(col)?, value)?;
        }
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    workbook.save(path)?;
    info!(path = %path.display(), rows = rows.len(), "wrote workbook");

    Ok(())
}

fn column(index: usize) -> Result<u16, XlsxError> {
    u16::try_from(index).map_err(|_| XlsxError::RowColumnLimitError)
}

fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, value: &Value) -> Result<(), XlsxError> {
    match value {
        Value::Text(s) => {
            worksheet.write_string(row, col, s)?;
        }
        Value::Number(n) => {
            worksheet.write_number(row, col, *n)?;
        }
        Value::Empty => {}
    }
    Ok(())
}
