//! Conversion from placement API DTOs to domain types.
//!
//! Every function here is total: malformed rows are skipped with a warning
//! rather than failing the whole response, and missing fields become
//! `None` or the `"N/A"` sentinel according to the rules of each endpoint.

use tracing::warn;

use crate::domain::{
    ProblemBankId, ProjectId, ProjectSummary, ProjectTerms, StationDetail, StationId, Value,
};

use super::types::{ProblemBankList, ProjectDetail, ProjectList, StationPreference};

/// Convert the final-preference listing to station ids, in listing order.
pub fn convert_station_ids(preferences: Vec<StationPreference>) -> Vec<StationId> {
    preferences
        .into_iter()
        .filter_map(|p| {
            let raw = p.station_id?;
            match StationId::try_from(raw) {
                Ok(id) => Some(id),
                Err(e) => {
                    warn!(error = %e, "skipping station preference");
                    None
                }
            }
        })
        .collect()
}

/// Convert the student-preference problem-bank view for `requested`.
///
/// Only the first grid line is consulted. Returns `None` when the list is
/// empty or missing.
pub fn convert_station_detail(
    requested: &StationId,
    list: ProblemBankList,
) -> Option<StationDetail> {
    let line = list.problem_bank_grid_lines?.into_iter().next()?;

    let station_id = line
        .station_id
        .and_then(|raw| StationId::try_from(raw).ok())
        .unwrap_or_else(|| requested.clone());

    let problem_bank_id = line
        .problem_bank_id
        .and_then(|raw| ProblemBankId::try_from(raw).ok());

    Some(StationDetail {
        station_id,
        problem_bank_id,
        name: line.station_name,
        city: line.station_city,
        total_requirement: Value::from_json_field(line.total_requirement.as_ref()),
    })
}

/// Extract the company requirement from the problem-bank listing.
///
/// An empty listing or a missing figure is an empty cell.
pub fn convert_company_requirement(list: ProblemBankList) -> Value {
    list.problem_bank_grid_lines
        .and_then(|lines| lines.into_iter().next())
        .and_then(|line| Value::from_json_field(line.total_requirement.as_ref()))
        .unwrap_or(Value::Empty)
}

/// Convert a problem bank's project listing, in listing order.
///
/// Every row becomes a project. Rows without a usable id keep their title
/// and description but carry no `project_id`.
pub fn convert_projects(list: ProjectList) -> Vec<ProjectSummary> {
    list.project_grid_lines
        .unwrap_or_default()
        .into_iter()
        .map(|line| {
            let project_id = match line.project_id.map(ProjectId::try_from) {
                Some(Ok(id)) => Some(id),
                Some(Err(e)) => {
                    warn!(error = %e, title = ?line.title, "project has an invalid id");
                    None
                }
                None => {
                    warn!(title = ?line.title, "project has no id");
                    None
                }
            };
            ProjectSummary {
                project_id,
                title: line.title.unwrap_or_default(),
                description: line.description.unwrap_or_default(),
            }
        })
        .collect()
}

/// Convert a project detail record to its terms.
///
/// Needs both a discipline and a facility record; otherwise, or if any of
/// the five fields is missing, every term is `"N/A"`.
pub fn convert_project_terms(detail: ProjectDetail) -> ProjectTerms {
    let discipline = detail.project_discipline.and_then(|d| d.into_iter().next());
    let facility = detail.project_facility.and_then(|f| f.into_iter().next());

    let (Some(discipline), Some(facility)) = (discipline, facility) else {
        return ProjectTerms::not_available();
    };

    ProjectTerms::resolve(
        Value::from_json_field(discipline.total_requirement.as_ref()),
        Value::from_json_field(discipline.cgpa_min.as_ref()),
        Value::from_json_field(discipline.cgpa_max.as_ref()),
        Value::from_json_field(facility.ug_stipend.as_ref()),
        Value::from_json_field(discipline.discipline_codes.as_ref()),
    )
}
