//! Placement API request and response DTOs.
//!
//! These map directly onto the JSON the API exchanges. Nearly every field is
//! an `Option`: the API omits or nulls fields freely, and deciding what a
//! missing field means is left to `convert`.

use serde::{Deserialize, Serialize};

use crate::domain::RawId;

/// Body of `POST /api/Users/login`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest<'a> {
    pub user_id: u32,
    pub user_name: &'a str,
    pub name: &'a str,
    pub role_id: u32,
    pub role_name: &'a str,
    pub password: &'a str,
}

impl<'a> LoginRequest<'a> {
    pub fn new(user_name: &'a str, password: &'a str) -> Self {
        Self {
            user_id: 0,
            user_name,
            name: "",
            role_id: 0,
            role_name: "",
            password,
        }
    }
}

/// Response from `POST /api/Users/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: Option<String>,
}

/// One entry of `stationFinalPreferenceByStudent/{userName}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationPreference {
    pub station_id: Option<RawId>,
}

/// Response shared by the problem-bank listing and the student-preference
/// problem-bank view.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemBankList {
    pub problem_bank_grid_lines: Option<Vec<ProblemBankGridLine>>,
}

/// A problem bank row.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemBankGridLine {
    pub problem_bank_id: Option<RawId>,
    pub station_id: Option<RawId>,
    pub station_name: Option<String>,
    pub station_city: Option<String>,
    pub total_requirement: Option<serde_json::Value>,
}

/// Response from `student/preference/projects`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectList {
    pub project_grid_lines: Option<Vec<ProjectGridLine>>,
}

/// A project row.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectGridLine {
    pub project_id: Option<RawId>,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Response from `ProblemBank/project/{projectId}?expand=all`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    pub project_discipline: Option<Vec<DisciplineRecord>>,
    pub project_facility: Option<Vec<FacilityRecord>>,
}

/// Eligibility terms for a project.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisciplineRecord {
    pub total_requirement: Option<serde_json::Value>,
    #[serde(rename = "cgpamin")]
    pub cgpa_min: Option<serde_json::Value>,
    #[serde(rename = "cgpamax")]
    pub cgpa_max: Option<serde_json::Value>,
    pub discipline_codes: Option<serde_json::Value>,
}

/// Facility terms for a project.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FacilityRecord {
    #[serde(rename = "ugstipend")]
    pub ug_stipend: Option<serde_json::Value>,
}
