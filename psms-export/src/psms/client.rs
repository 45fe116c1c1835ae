//! Placement API HTTP client.
//!
//! Issues one request at a time and converts responses to domain types.
//! Only a `200 OK` counts as success; the API uses other 2xx codes for
//! bodies we cannot interpret.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

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
use super::types::{
    LoginRequest, LoginResponse, ProblemBankList, ProjectDetail, ProjectList, StationPreference,
};

/// Default base URL for the placement API.
const DEFAULT_BASE_URL: &str = "https://bits-psms-api-prod.azurewebsites.net";

/// Default request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the placement API client.
#[derive(Debug, Clone)]
pub struct PsmsConfig {
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl PsmsConfig {
    /// Create a config pointing at the production API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for PsmsConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Placement API client.
#[derive(Debug, Clone)]
pub struct PsmsClient {
    http: reqwest::Client,
    base_url: String,
}

impl PsmsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: PsmsConfig) -> Result<Self, PsmsError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// GET `path` under `session` and decode a 200 body as `T`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        session: &Session,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, PsmsError> {
        let url = self.url(path);
        debug!(%url, ?query, "GET");

        let response = self
            .http
            .get(&url)
            .headers(session.headers().clone())
            .query(query)
            .send()
            .await?;

        let status = response.status();

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(PsmsError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| PsmsError::json(e, &body))
    }
}

impl PlacementApi for PsmsClient {
    async fn login(&self, credentials: &Credentials) -> Result<Session, PsmsError> {
        let url = self.url("api/Users/login");
        debug!(%url, username = %credentials.username, "POST");

        let response = self
            .http
            .post(&url)
            .json(&LoginRequest::new(
                &credentials.username,
                &credentials.password,
            ))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(PsmsError::LoginRejected {
                status: status.as_u16(),
                body,
            });
        }

        let login: LoginResponse =
            serde_json::from_str(&body).map_err(|e| PsmsError::json(e, &body))?;

        Session::new(login.token.ok_or(PsmsError::MissingToken)?)
    }

    async fn station_ids(
        &self,
        session: &Session,
        username: &str,
    ) -> Result<Vec<StationId>, PsmsError> {
        let path = format!("api/StationAllotment/stationFinalPreferenceByStudent/{username}");
        let preferences: Vec<StationPreference> = self.get_json(session, &path, &[]).await?;
        Ok(convert_station_ids(preferences))
    }

    async fn station_detail(
        &self,
        session: &Session,
        username: &str,
        station: &StationId,
    ) -> Result<Option<StationDetail>, PsmsError> {
        let list: ProblemBankList = self
            .get_json(
                session,
                "api/stationallotment/student/preference/problembanks",
                &[("stationId", station.as_str()), ("userName", username)],
            )
            .await?;
        Ok(convert_station_detail(station, list))
    }

    async fn company_requirement(
        &self,
        session: &Session,
        station: &StationId,
    ) -> Result<Value, PsmsError> {
        let list: ProblemBankList = self
            .get_json(
                session,
                "api/ProblemBank/listview/",
                &[("stationId", station.as_str())],
            )
            .await?;
        Ok(convert_company_requirement(list))
    }

    async fn projects(
        &self,
        session: &Session,
        username: &str,
        problem_bank: &ProblemBankId,
    ) -> Result<Vec<ProjectSummary>, PsmsError> {
        let list: ProjectList = self
            .get_json(
                session,
                "api/stationallotment/student/preference/projects",
                &[("problemBankId", problem_bank.as_str()), ("userName", username)],
            )
            .await?;
        Ok(convert_projects(list))
    }

    async fn project_terms(
        &self,
        session: &Session,
        project: &ProjectId,
    ) -> Result<ProjectTerms, PsmsError> {
        let path = format!("api/ProblemBank/project/{}", project.as_str());
        let detail: ProjectDetail = self.get_json(session, &path, &[("expand", "all")]).await?;
        Ok(convert_project_terms(detail))
    }
}
