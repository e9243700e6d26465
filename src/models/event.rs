//! Diesel models for detection events.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::event::{
    CriminalEvent as DomainCriminalEvent, NewCriminalEvent as DomainNewCriminalEvent,
};
use crate::domain::types::{EventId, PublicId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::criminal_events)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CriminalEvent {
    pub id: i32,
    pub criminal_guid: String,
    pub event_at: NaiveDateTime,
    pub location: Option<String>,
    pub created_by: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_by: Option<String>,
    pub updated_at: Option<NaiveDateTime>,
    pub is_deleted: bool,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::criminal_events)]
pub struct NewCriminalEvent<'a> {
    pub criminal_guid: String,
    pub event_at: NaiveDateTime,
    pub location: Option<&'a str>,
    pub created_by: &'a str,
    pub created_at: NaiveDateTime,
    pub is_deleted: bool,
}

impl TryFrom<CriminalEvent> for DomainCriminalEvent {
    type Error = TypeConstraintError;

    fn try_from(event: CriminalEvent) -> Result<Self, Self::Error> {
        Ok(Self {
            id: EventId::try_from(event.id)?,
            criminal_guid: event.criminal_guid.parse::<PublicId>()?,
            event_at: event.event_at,
            location: event.location,
            created_by: event.created_by,
            created_at: event.created_at,
        })
    }
}

impl<'a> From<&'a DomainNewCriminalEvent> for NewCriminalEvent<'a> {
    fn from(event: &'a DomainNewCriminalEvent) -> Self {
        Self {
            criminal_guid: event.criminal_guid.to_string(),
            event_at: event.event_at,
            location: event.location.as_deref(),
            created_by: event.created_by.as_str(),
            created_at: event.created_at,
            is_deleted: false,
        }
    }
}
