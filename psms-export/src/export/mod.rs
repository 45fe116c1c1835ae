//! Tabular export of crawled projects.
//!
//! One row per (station, project) pair in discovery order, ten fixed
//! columns, written once at the end of the run.

mod error;
mod row;
mod writer;

pub use error::ExportError;
pub use row::{COLUMNS, ExportRow};
pub use writer::write_workbook;
