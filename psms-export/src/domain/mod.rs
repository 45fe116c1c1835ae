//! Domain types for the placement export.
//!
//! Identifiers are validated at construction, so code that holds a
//! `StationId` or `ProjectId` can trust it names a real record.

mod ids;
mod project;
mod station;
mod value;

pub use ids::{InvalidId, ProblemBankId, ProjectId, RawId, StationId};
pub use project::{ProjectSummary, ProjectTerms};
pub use station::StationDetail;
pub use value::{NOT_AVAILABLE, Value};
