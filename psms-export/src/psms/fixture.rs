//! Fixture-backed placement API for tests and offline runs.
//!
//! Serves canned wire responses from memory (or from a JSON file) through
//! the same conversions the HTTP client uses, and records every call.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::config::Credentials;
use crate::domain::{
    ProblemBankId, ProjectId, ProjectSummary, ProjectTerms, StationDetail, StationId, Value,
};

use super::api::PlacementApi;
use super::convert::{
    convert_company_requirement, convert_project_terms, convert_projects, convert_station_detail,
    convert_station_ids,
};
use super::error::PsmsError;
use super::session::Session;
use super::types::{ProblemBankList, ProjectDetail, ProjectList, StationPreference};

/// Canned responses, keyed by the id in each request.
///
/// A request with no matching entry fails with a 404, as does the station
/// listing when `stations` is absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FixtureSet {
    /// Token returned by login. `None` models a 200 without a token.
    pub token: Option<String>,
    /// Non-200 status for the login endpoint.
    pub login_status: Option<u16>,
    pub stations: Option<Vec<StationPreference>>,
    /// Preference-view problem banks, by station id.
    pub station_details: HashMap<String, ProblemBankList>,
    /// Listing-view problem banks, by station id.
    pub company_requirements: HashMap<String, ProblemBankList>,
    /// Project listings, by problem-bank id.
    pub projects: HashMap<String, ProjectList>,
    /// Project details, by project id.
    pub project_details: HashMap<String, ProjectDetail>,
}

/// A call made against a [`FixtureApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    Login,
    StationIds,
    StationDetail(StationId),
    CompanyRequirement(StationId),
    Projects(ProblemBankId),
    ProjectTerms(ProjectId),
}

/// Placement API served from a [`FixtureSet`].
pub struct FixtureApi {
    set: FixtureSet,
    calls: RefCell<Vec<ApiCall>>,
}

impl FixtureApi {
    pub fn new(set: FixtureSet) -> Self {
        Self {
            set,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Load a fixture set from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PsmsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| PsmsError::Api {
            status: 0,
            message: format!("Failed to read fixture file {:?}: {}", path, e),
        })?;
        let set: FixtureSet = serde_json::from_str(&json).map_err(|e| PsmsError::json(e, &json))?;
        Ok(Self::new(set))
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: ApiCall) {
        self.calls.borrow_mut().push(call);
    }

    fn lookup<'a, T>(
        map: &'a HashMap<String, T>,
        what: &str,
        key: &str,
    ) -> Result<&'a T, PsmsError> {
        map.get(key).ok_or_else(|| PsmsError::Api {
            status: 404,
            message: format!("No fixture for {what} {key}"),
        })
    }
}

impl PlacementApi for FixtureApi {
    async fn login(&self, _credentials: &Credentials) -> Result<Session, PsmsError> {
        self.record(ApiCall::Login);

        if let Some(status) = self.set.login_status.filter(|&s| s != 200) {
            return Err(PsmsError::LoginRejected {
                status,
                body: "fixture login rejected".to_string(),
            });
        }

        let token = self.set.token.clone().ok_or(PsmsError::MissingToken)?;
        Session::new(token)
    }

    async fn station_ids(
        &self,
        _session: &Session,
        _username: &str,
    ) -> Result<Vec<StationId>, PsmsError> {
        self.record(ApiCall::StationIds);

        let stations = self.set.stations.clone().ok_or_else(|| PsmsError::Api {
            status: 404,
            message: "No fixture for station list".to_string(),
        })?;
        Ok(convert_station_ids(stations))
    }

    async fn station_detail(
        &self,
        _session: &Session,
        _username: &str,
        station: &StationId,
    ) -> Result<Option<StationDetail>, PsmsError> {
        self.record(ApiCall::StationDetail(station.clone()));

        let list = Self::lookup(&self.set.station_details, "station", station.as_str())?;
        Ok(convert_station_detail(station, list.clone()))
    }

    async fn company_requirement(
        &self,
        _session: &Session,
        station: &StationId,
    ) -> Result<Value, PsmsError> {
        self.record(ApiCall::CompanyRequirement(station.clone()));

        let list = Self::lookup(
            &self.set.company_requirements,
            "company requirement",
            station.as_str(),
        )?;
        Ok(convert_company_requirement(list.clone()))
    }

    async fn projects(
        &self,
        _session: &Session,
        _username: &str,
        problem_bank: &ProblemBankId,
    ) -> Result<Vec<ProjectSummary>, PsmsError> {
        self.record(ApiCall::Projects(problem_bank.clone()));

        let list = Self::lookup(&self.set.projects, "problem bank", problem_bank.as_str())?;
        Ok(convert_projects(list.clone()))
    }

    async fn project_terms(
        &self,
        _session: &Session,
        project: &ProjectId,
    ) -> Result<ProjectTerms, PsmsError> {
        self.record(ApiCall::ProjectTerms(project.clone()));

        let detail = Self::lookup(&self.set.project_details, "project", project.as_str())?;
        Ok(convert_project_terms(detail.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixture(v: serde_json::Value) -> FixtureApi {
        FixtureApi::new(serde_json::from_value(v).unwrap())
    }

    fn creds() -> Credentials {
        Credentials::new("a@b.edu", "pw")
    }

    #[tokio::test]
    async fn login_returns_session() {
        let api = fixture(json!({ "token": "t0k3n" }));
        let session = api.login(&creds()).await.unwrap();
        assert_eq!(session.token(), "t0k3n");
        assert_eq!(api.calls(), vec![ApiCall::Login]);
    }

    #[tokio::test]
    async fn login_without_token() {
        let api = fixture(json!({}));
        assert!(matches!(
            api.login(&creds()).await,
            Err(PsmsError::MissingToken)
        ));
    }

    #[tokio::test]
    async fn login_rejected() {
        let api = fixture(json!({ "token": "t", "loginStatus": 401 }));
        match api.login(&creds()).await {
            Err(PsmsError::LoginRejected { status, .. }) => assert_eq!(status, 401),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[tokio::test]
    async fn unknown_key_is_404() {
        let api = fixture(json!({ "token": "t" }));
        let session = api.login(&creds()).await.unwrap();
        let station = StationId::new("5").unwrap();

        match api.station_detail(&session, "a@b.edu", &station).await {
            Err(PsmsError::Api { status, .. }) => assert_eq!(status, 404),
            other => panic!("unexpected: {other:?}"),
        }
        assert!(api.station_ids(&session, "a@b.edu").await.is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixtures.json");
        std::fs::write(
            &path,
            r#"{ "token": "t", "stations": [{ "stationId": 7 }] }"#,
        )
        .unwrap();

        let api = FixtureApi::from_file(&path).unwrap();
        assert_eq!(api.set.token.as_deref(), Some("t"));
        assert_eq!(api.set.stations.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn missing_file_is_error() {
        assert!(FixtureApi::from_file("/nonexistent/fixtures.json").is_err());
    }
}
