//! Repository implementation for detection events.

use diesel::prelude::*;

use crate::{
    domain::event::{CriminalEvent, NewCriminalEvent},
    models::event::{CriminalEvent as DbCriminalEvent, NewCriminalEvent as DbNewCriminalEvent},
    repository::{
        DieselRepository, EventListQuery, EventReader, EventWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl EventReader for DieselRepository {
    fn list_events(&self, query: EventListQuery) -> RepositoryResult<(usize, Vec<CriminalEvent>)> {
        use crate::schema::criminal_events;

        let mut conn = self.conn()?;
        let criminal_guid = query.criminal_guid.to_string();

        let query_builder = || {
            criminal_events::table
                .filter(criminal_events::criminal_guid.eq(criminal_guid.clone()))
                .filter(criminal_events::is_deleted.eq(false))
                .into_boxed::<diesel::sqlite::Sqlite>()
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder();
        if let Some(page) = &query.pagination {
            items = items.offset(page.offset()).limit(page.page_size());
        }

        let db_events = items
            .order((criminal_events::event_at.desc(), criminal_events::id.desc()))
            .load::<DbCriminalEvent>(&mut conn)?;

        let events = db_events
            .into_iter()
            .map(|e| CriminalEvent::try_from(e).map_err(RepositoryError::from))
            .collect::<RepositoryResult<Vec<_>>>()?;

        Ok((total, events))
    }
}

impl EventWriter for DieselRepository {
    fn create_event(&self, new_event: &NewCriminalEvent) -> RepositoryResult<CriminalEvent> {
        use crate::schema::criminal_events;

        let mut conn = self.conn()?;

        let db_new_event: DbNewCriminalEvent = new_event.into();

        let db_event = diesel::insert_into(criminal_events::table)
            .values(&db_new_event)
            .get_result::<DbCriminalEvent>(&mut conn)?;

        CriminalEvent::try_from(db_event).map_err(RepositoryError::from)
    }
}
