//! Station → problem bank → project walk.

use tracing::{debug, info, warn};

use crate::config::Credentials;
use crate::domain::{ProjectSummary, ProjectTerms, StationDetail, StationId, Value};
use crate::export::ExportRow;
use crate::psms::{PlacementApi, PsmsError, Session};

use super::report::{CrawlReport, Endpoint};

/// Walks every allotted station and collects one row per project.
///
/// Requests are issued strictly one after another. Only login can fail the
/// crawl; every later fetch error is logged, recorded in the report, and
/// treated as "no data".
pub struct Crawler<'a, A: PlacementApi> {
    api: &'a A,
    credentials: &'a Credentials,
}

impl<'a, A: PlacementApi> Crawler<'a, A> {
    /// Create a new crawler.
    pub fn new(api: &'a A, credentials: &'a Credentials) -> Self {
        Self { api, credentials }
    }

    /// Log in and crawl every station.
    ///
    /// Returns the login error, if any, before making another call.
    pub async fn run(&self) -> Result<CrawlReport, PsmsError> {
        let session = self.login().await?;
        Ok(self.crawl(&session).await)
    }

    /// Log in with the configured credentials.
    pub async fn login(&self) -> Result<Session, PsmsError> {
        let session = self.api.login(self.credentials).await?;
        info!(username = %self.credentials.username, "login successful");
        Ok(session)
    }

    /// Crawl every station under an existing session.
    pub async fn crawl(&self, session: &Session) -> CrawlReport {
        let mut report = CrawlReport::default();
        let stations = self.station_ids(session, &mut report).await;
        info!(count = stations.len(), "enumerated stations");

        for (index, station) in stations.iter().enumerate() {
            debug!(station = %station, index, total = stations.len(), "crawling station");
            self.crawl_station(session, station, &mut report).await;
        }

        info!(
            rows = report.rows.len(),
            resolved = report.resolved_stations.len(),
            failed = report.failed_stations.len(),
            degraded = report.degradations.len(),
            "crawl finished"
        );

        report
    }

    async fn station_ids(&self, session: &Session, report: &mut CrawlReport) -> Vec<StationId> {
        match self
            .api
            .station_ids(session, &self.credentials.username)
            .await
        {
            Ok(ids) => ids,
            Err(e) => {
                warn!(error = %e, "station list unavailable");
                report.degrade(Endpoint::StationList, "", e.to_string());
                Vec::new()
            }
        }
    }

    async fn crawl_station(&self, session: &Session, station: &StationId, report: &mut CrawlReport) {
        let username = &self.credentials.username;

        let detail = match self.api.station_detail(session, username, station).await {
            Ok(detail) => detail,
            Err(e) => {
                warn!(station = %station, error = %e, "station detail unavailable");
                report.degrade(Endpoint::StationDetail, station.as_str(), e.to_string());
                None
            }
        };

        let company_req = match self.api.company_requirement(session, station).await {
            Ok(value) => value,
            Err(e) => {
                warn!(station = %station, error = %e, "company requirement unavailable");
                report.degrade(Endpoint::CompanyRequirement, station.as_str(), e.to_string());
                Value::Empty
            }
        };

        let Some((detail, bank)) = detail.and_then(|d| {
            let bank = d.resolved_bank().cloned()?;
            Some((d, bank))
        }) else {
            warn!(station = %station, "no problem bank for station");
            report.fail_station(station.clone());
            return;
        };

        if detail.station_id != *station {
            debug!(requested = %station, echoed = %detail.station_id, "station id echoed differently");
        }
        // Rows are keyed by the id we asked about
        let detail = StationDetail {
            station_id: station.clone(),
            ..detail
        };
        report.resolve_station(station.clone());

        info!(
            station = %station,
            name = detail.name.as_deref().unwrap_or_default(),
            city = detail.city.as_deref().unwrap_or_default(),
            total_requirement = ?detail.total_requirement,
            problem_bank = %bank,
            "resolved station"
        );

        let projects = match self.api.projects(session, username, &bank).await {
            Ok(projects) => projects,
            Err(e) => {
                warn!(station = %station, problem_bank = %bank, error = %e, "project list unavailable");
                report.degrade(Endpoint::ProjectList, bank.as_str(), e.to_string());
                Vec::new()
            }
        };

        for project in &projects {
            let terms = self.project_terms(session, project, report).await;
            debug!(title = %project.title, available = terms.is_available(), "project terms");
            report
                .rows
                .push(ExportRow::new(&detail, &company_req, project, terms));
        }

        debug!(station = %station, projects = projects.len(), "station done");
    }

    async fn project_terms(
        &self,
        session: &Session,
        project: &ProjectSummary,
        report: &mut CrawlReport,
    ) -> ProjectTerms {
        let Some(id) = &project.project_id else {
            warn!(title = %project.title, "project has no id, terms unavailable");
            report.degrade(Endpoint::ProjectDetail, project.title.as_str(), "project has no id");
            return ProjectTerms::not_available();
        };

        match self.api.project_terms(session, id).await {
            Ok(terms) => terms,
            Err(e) => {
                warn!(project = %id, error = %e, "project detail unavailable");
                report.degrade(Endpoint::ProjectDetail, id.as_str(), e.to_string());
                ProjectTerms::not_available()
            }
        }
    }
}
