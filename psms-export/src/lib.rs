//! Placement project export.
//!
//! Logs in to the placement-management API, walks every station allotted
//! to the student down to its projects, and writes one spreadsheet row per
//! project.

pub mod config;
pub mod crawl;
pub mod domain;
pub mod export;
pub mod logging;
pub mod psms;
