//! The fetch capability the crawler is written against.

use crate::config::Credentials;
use crate::domain::{
    ProblemBankId, ProjectId, ProjectSummary, ProjectTerms, StationDetail, StationId, Value,
};

use super::error::PsmsError;
use super::session::Session;

/// Operations the placement API offers.
///
/// `Ok` values distinguish "the API answered with nothing" (`None`, an empty
/// `Vec`, [`Value::Empty`], [`ProjectTerms::not_available`]) from `Err`,
/// which means the call itself failed. Callers decide how to degrade.
///
/// Implemented by [`PsmsClient`](super::PsmsClient) over HTTP and by
/// [`FixtureApi`](super::FixtureApi) from canned responses.
#[allow(async_fn_in_trait)]
pub trait PlacementApi {
    /// Log in and obtain a session.
    async fn login(&self, credentials: &Credentials) -> Result<Session, PsmsError>;

    /// Stations in the student's final preference list, in listed order.
    async fn station_ids(
        &self,
        session: &Session,
        username: &str,
    ) -> Result<Vec<StationId>, PsmsError>;

    /// The student-preference view of one station. `None` if the view has
    /// no problem-bank rows.
    async fn station_detail(
        &self,
        session: &Session,
        username: &str,
        station: &StationId,
    ) -> Result<Option<StationDetail>, PsmsError>;

    /// The company requirement from the problem-bank listing.
    async fn company_requirement(
        &self,
        session: &Session,
        station: &StationId,
    ) -> Result<Value, PsmsError>;

    /// Projects listed under a problem bank.
    async fn projects(
        &self,
        session: &Session,
        username: &str,
        problem_bank: &ProblemBankId,
    ) -> Result<Vec<ProjectSummary>, PsmsError>;

    /// Eligibility and stipend terms of one project.
    async fn project_terms(
        &self,
        session: &Session,
        project: &ProjectId,
    ) -> Result<ProjectTerms, PsmsError>;
}
