//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::admin::{Admin, NewAdmin};
use crate::domain::crime::Crime;
use crate::domain::criminal::{Criminal, NewCriminal, UpdateCriminal};
use crate::domain::dashboard::DashboardTotals;
use crate::domain::event::{CriminalEvent, NewCriminalEvent};
use crate::domain::training::{NewTraining, Training};
use crate::domain::types::{AdminEmail, CriminalId, PublicId};
use crate::query::CriminalQuery;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    AdminReader, AdminWriter, CriminalReader, CriminalWriter, DashboardReader, EventListQuery,
    EventReader, EventWriter, TrainingListQuery, TrainingReader, TrainingWriter,
};

mock! {
    pub Repository {}

    impl CriminalReader for Repository {
        fn get_criminal_by_guid(&self, guid: PublicId) -> RepositoryResult<Option<Criminal>>;
        fn list_criminals(&self, query: &CriminalQuery) -> RepositoryResult<(usize, Vec<Criminal>)>;
        fn list_crimes(&self, criminal_ids: &[CriminalId]) -> RepositoryResult<Vec<Crime>>;
    }

    impl CriminalWriter for Repository {
        fn create_criminal(&self, new_criminal: &NewCriminal) -> RepositoryResult<Criminal>;
        fn update_criminal(
            &self,
            criminal_id: CriminalId,
            updates: &UpdateCriminal,
        ) -> RepositoryResult<Criminal>;
        fn delete_criminal(&self, criminal_id: CriminalId) -> RepositoryResult<()>;
    }

    impl AdminReader for Repository {
        fn get_admin_by_email(&self, email: &AdminEmail) -> RepositoryResult<Option<Admin>>;
    }

    impl AdminWriter for Repository {
        fn create_admin(&self, new_admin: &NewAdmin) -> RepositoryResult<Admin>;
    }

    impl TrainingReader for Repository {
        fn list_trainings(&self, query: TrainingListQuery) -> RepositoryResult<(usize, Vec<Training>)>;
    }

    impl TrainingWriter for Repository {
        fn create_training(&self, new_training: &NewTraining) -> RepositoryResult<Training>;
    }

    impl EventReader for Repository {
        fn list_events(&self, query: EventListQuery) -> RepositoryResult<(usize, Vec<CriminalEvent>)>;
    }

    impl EventWriter for Repository {
        fn create_event(&self, new_event: &NewCriminalEvent) -> RepositoryResult<CriminalEvent>;
    }

    impl DashboardReader for Repository {
        fn dashboard_totals(&self) -> RepositoryResult<DashboardTotals>;
    }
}
