//! Persistence layer: per-aggregate reader/writer traits and their Diesel
//! implementation over a pooled SQLite connection.

use crate::db::{DbConnection, DbPool};
use crate::domain::{
    admin::{Admin, NewAdmin},
    crime::Crime,
    criminal::{Criminal, NewCriminal, UpdateCriminal},
    dashboard::DashboardTotals,
    event::{CriminalEvent, NewCriminalEvent},
    training::{NewTraining, Training},
    types::{AdminEmail, CriminalId, PublicId},
};
use crate::pagination::PageRequest;
use crate::query::CriminalQuery;
use crate::repository::errors::RepositoryResult;

pub mod admin;
pub mod criminal;
pub mod dashboard;
pub mod errors;
pub mod event;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod training;

/// Number of criminals reported by the dashboard ranking.
pub const TOP_CRIMINALS_LIMIT: i64 = 10;

/// Diesel-backed repository shared by every aggregate.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

#[derive(Debug, Clone)]
pub struct EventListQuery {
    pub criminal_guid: PublicId,
    pub pagination: Option<PageRequest>,
}

impl EventListQuery {
    pub fn new(criminal_guid: PublicId) -> Self {
        Self {
            criminal_guid,
            pagination: None,
        }
    }

    pub fn paginate(mut self, page: PageRequest) -> Self {
        self.pagination = Some(page);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct TrainingListQuery {
    pub pagination: Option<PageRequest>,
}

impl TrainingListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paginate(mut self, page: PageRequest) -> Self {
        self.pagination = Some(page);
        self
    }
}

pub trait CriminalReader {
    fn get_criminal_by_guid(&self, guid: PublicId) -> RepositoryResult<Option<Criminal>>;
    fn list_criminals(&self, query: &CriminalQuery) -> RepositoryResult<(usize, Vec<Criminal>)>;
    /// Crimes belonging to any of the given criminals, oldest first.
    fn list_crimes(&self, criminal_ids: &[CriminalId]) -> RepositoryResult<Vec<Crime>>;
}

pub trait CriminalWriter {
    /// Inserts the criminal together with its crimes in one transaction.
    fn create_criminal(&self, new_criminal: &NewCriminal) -> RepositoryResult<Criminal>;
    /// Applies the patch and, when present, replaces the crime list.
    fn update_criminal(
        &self,
        criminal_id: CriminalId,
        updates: &UpdateCriminal,
    ) -> RepositoryResult<Criminal>;
    /// Removes the criminal and its crimes.
    fn delete_criminal(&self, criminal_id: CriminalId) -> RepositoryResult<()>;
}

pub trait AdminReader {
    fn get_admin_by_email(&self, email: &AdminEmail) -> RepositoryResult<Option<Admin>>;
}

pub trait AdminWriter {
    fn create_admin(&self, new_admin: &NewAdmin) -> RepositoryResult<Admin>;
}

pub trait TrainingReader {
    fn list_trainings(&self, query: TrainingListQuery) -> RepositoryResult<(usize, Vec<Training>)>;
}

pub trait TrainingWriter {
    fn create_training(&self, new_training: &NewTraining) -> RepositoryResult<Training>;
}

pub trait EventReader {
    fn list_events(&self, query: EventListQuery) -> RepositoryResult<(usize, Vec<CriminalEvent>)>;
}

pub trait EventWriter {
    fn create_event(&self, new_event: &NewCriminalEvent) -> RepositoryResult<CriminalEvent>;
}

pub trait DashboardReader {
    fn dashboard_totals(&self) -> RepositoryResult<DashboardTotals>;
}
