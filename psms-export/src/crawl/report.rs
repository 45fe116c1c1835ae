//! Crawl results.

use std::fmt;

use crate::domain::StationId;
use crate::export::ExportRow;

/// Which fetch a degradation happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    StationList,
    StationDetail,
    CompanyRequirement,
    ProjectList,
    ProjectDetail,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Endpoint::StationList => "station list",
            Endpoint::StationDetail => "station detail",
            Endpoint::CompanyRequirement => "company requirement",
            Endpoint::ProjectList => "project list",
            Endpoint::ProjectDetail => "project detail",
        };
        f.write_str(name)
    }
}

/// A fetch that failed and was replaced by absence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Degradation {
    pub endpoint: Endpoint,
    /// Id the request was about (empty for the station list)
    pub subject: String,
    pub message: String,
}

impl fmt::Display for Degradation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.subject.is_empty() {
            write!(f, "{}: {}", self.endpoint, self.message)
        } else {
            write!(f, "{} {}: {}", self.endpoint, self.subject, self.message)
        }
    }
}

/// Everything a crawl produced.
#[derive(Debug, Clone, Default)]
pub struct CrawlReport {
    /// Rows in discovery order.
    pub rows: Vec<ExportRow>,
    /// Stations that resolved to a problem bank, whether or not it had projects.
    pub resolved_stations: Vec<StationId>,
    /// Stations that could not be resolved, each listed once.
    pub failed_stations: Vec<StationId>,
    /// Fetch failures that were degraded to "no data".
    pub degradations: Vec<Degradation>,
}

impl CrawlReport {
    /// Record an unresolved station. Repeats are ignored.
    pub(crate) fn fail_station(&mut self, station: StationId) {
        if !self.failed_stations.contains(&station) {
            self.failed_stations.push(station);
        }
    }

    /// Record a resolved station. Repeats are ignored.
    pub(crate) fn resolve_station(&mut self, station: StationId) {
        if !self.resolved_stations.contains(&station) {
            self.resolved_stations.push(station);
        }
    }

    pub(crate) fn degrade(
        &mut self,
        endpoint: Endpoint,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.degradations.push(Degradation {
            endpoint,
            subject: subject.into(),
            message: message.into(),
        });
    }

    /// Failed station ids formatted as `[a, b, c]`.
    pub fn failed_list(&self) -> String {
        let ids: Vec<&str> = self.failed_stations.iter().map(|s| s.as_str()).collect();
        format!("[{}]", ids.join(", "))
    }
}
