//! Placement API (PSMS) client.
//!
//! This module provides the HTTP client for the placement-management API
//! and an in-memory stand-in for it.
//!
//! Key characteristics of the API:
//! - A single login call returns a bearer token that must accompany every
//!   later request, together with JSON `Accept`/`Content-Type` headers
//! - Data is organised as station → problem bank → project; each level is
//!   a separate endpoint keyed by the id from the level above
//! - Field types are loose: ids and figures arrive as numbers or strings,
//!   and fields are omitted or nulled freely

mod api;
mod client;
mod convert;
mod error;
mod fixture;
mod session;
mod types;

pub use api::PlacementApi;
pub use client::{PsmsClient, PsmsConfig};
pub use error::PsmsError;
pub use fixture::{ApiCall, FixtureApi, FixtureSet};
pub use session::Session;
pub use types::{
    DisciplineRecord, FacilityRecord, ProblemBankGridLine, ProblemBankList, ProjectDetail,
    ProjectGridLine, ProjectList, StationPreference,
};
