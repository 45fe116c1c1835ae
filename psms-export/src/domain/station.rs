//! Station types.

use super::ids::{ProblemBankId, StationId};
use super::value::Value;

/// What the student-preference view knows about a station.
///
/// Only `station_id` is guaranteed. A station without a `problem_bank_id`
/// cannot be expanded into projects.
#[derive(Debug, Clone, PartialEq)]
pub struct StationDetail {
    /// Station id as echoed by the API (falls back to the requested id).
    pub station_id: StationId,
    pub problem_bank_id: Option<ProblemBankId>,
    pub name: Option<String>,
    pub city: Option<String>,
    /// Requirement figure from the preference view. Distinct from the
    /// company requirement served by the problem-bank listing.
    pub total_requirement: Option<Value>,
}

impl StationDetail {
    /// The problem bank to expand, if there is one.
    pub fn resolved_bank(&self) -> Option<&ProblemBankId> {
        self.problem_bank_id.as_ref()
    }
}
