//! Crawl driver.
//!
//! Walks station → problem bank → project against a [`PlacementApi`]
//! and gathers export rows, the stations that could not be resolved, and
//! the fetches that failed along the way.
//!
//! [`PlacementApi`]: crate::psms::PlacementApi

mod crawler;
mod report;


pub use crawler::Crawler;
pub use report::{CrawlReport, Degradation, Endpoint};
