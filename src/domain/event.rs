//! Detection events reported by camera clients.

use chrono::{NaiveDateTime, Utc};
use serde::Serialize;

use crate::domain::types::{EventId, PublicId};

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct CriminalEvent {
    pub id: EventId,
    pub criminal_guid: PublicId,
    pub event_at: NaiveDateTime,
    pub location: Option<String>,
    pub created_by: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewCriminalEvent {
    pub criminal_guid: PublicId,
    pub event_at: NaiveDateTime,
    pub location: Option<String>,
    pub created_by: String,
    pub created_at: NaiveDateTime,
}

impl NewCriminalEvent {
    /// Builds an event; `event_at` defaults to the current time.
    #[must_use]
    pub fn new(
        criminal_guid: PublicId,
        event_at: Option<NaiveDateTime>,
        location: Option<String>,
        created_by: impl Into<String>,
    ) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            criminal_guid,
            event_at: event_at.unwrap_or(now),
            location: location
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            created_by: created_by.into(),
            created_at: now,
        }
    }
}
