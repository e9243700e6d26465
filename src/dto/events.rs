use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::event::CriminalEvent;
use crate::domain::types::PublicId;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub criminal_guid: PublicId,
    pub event_at: NaiveDateTime,
    pub location: Option<String>,
    pub created_by: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<CriminalEvent> for EventDto {
    fn from(event: CriminalEvent) -> Self {
        Self {
            criminal_guid: event.criminal_guid,
            event_at: event.event_at,
            location: event.location,
            created_by: event.created_by,
            created_at: event.created_at,
        }
    }
}
