//! The exported row layout.

use crate::domain::{ProjectSummary, ProjectTerms, StationDetail, StationId, Value};

/// Column headers, in output order.
pub const COLUMNS: [&str; 10] = [
    "Station Name",
    "Station City",
    "Total Company Req",
    "Total Req",
    "Stipend",
    "Branch Eligibility",
    "Project Title",
    "Project Description",
    "Min CGPA",
    "Max CGPA",
];

/// One project joined with its station.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRow {
    /// Station the row came from. Not exported.
    pub station_id: StationId,
    pub station_name: Value,
    pub station_city: Value,
    /// From the problem-bank listing
    pub total_company_req: Value,
    /// From the project's discipline record
    pub total_req: Value,
    pub stipend: Value,
    pub branch_eligibility: Value,
    pub project_title: Value,
    pub project_description: Value,
    pub min_cgpa: Value,
    pub max_cgpa: Value,
}

impl ExportRow {
    pub fn new(
        station: &StationDetail,
        total_company_req: &Value,
        project: &ProjectSummary,
        terms: ProjectTerms,
    ) -> Self {
        Self {
            station_id: station.station_id.clone(),
            station_name: Value::from_text(station.name.as_deref()),
            station_city: Value::from_text(station.city.as_deref()),
            total_company_req: total_company_req.clone(),
            total_req: terms.total_requirement().clone(),
            stipend: terms.stipend().clone(),
            branch_eligibility: terms.branch_eligibility().clone(),
            project_title: Value::Text(project.title.clone()),
            project_description: Value::Text(project.description.clone()),
            min_cgpa: terms.min_cgpa().clone(),
            max_cgpa: terms.max_cgpa().clone(),
        }
    }

    /// Cell values in [`COLUMNS`] order.
    pub fn cells(&self) -> [&Value; COLUMNS.len()] {
        [
            &self.station_name,
            &self.station_city,
            &self.total_company_req,
            &self.total_req,
            &self.stipend,
            &self.branch_eligibility,
            &self.project_title,
            &self.project_description,
            &self.min_cgpa,
            &self.max_cgpa,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ProblemBankId, ProjectId};

    #[test]
    fn column_headers_are_fixed() {
        assert_eq!(
            COLUMNS,
            [
                "Station Name",
                "Station City",
                "Total Company Req",
                "Total Req",
                "Stipend",
                "Branch Eligibility",
                "Project Title",
                "Project Description",
                "Min CGPA",
                "Max CGPA",
            ]
        );
    }

    #[test]
    fn cells_follow_column_order() {
        let station = StationDetail {
            station_id: StationId::new("30").unwrap(),
            problem_bank_id: Some(ProblemBankId::new("501").unwrap()),
            name: Some("Acme Robotics".into()),
            city: None,
            total_requirement: Some(Value::Number(9.0)),
        };
        let project = ProjectSummary {
            project_id: Some(ProjectId::new("1").unwrap()),
            title: "Vision".into(),
            description: "Camera work".into(),
        };
        let terms = ProjectTerms::resolve(
            Some(Value::Number(2.0)),
            Some(Value::Number(6.0)),
            Some(Value::Number(10.0)),
            Some(Value::Number(40000.0)),
            Some(Value::Text("A7".into())),
        );

        let row = ExportRow::new(&station, &Value::Number(12.0), &project, terms);
        let cells: Vec<String> = row.cells().iter().map(|v| v.to_string()).collect();
        assert_eq!(
            cells,
            vec![
                "Acme Robotics",
                "",
                "12",
                "2",
                "40000",
                "A7",
                "Vision",
                "Camera work",
                "6",
                "10"
            ]
        );
    }
}
