use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::domain::event::NewCriminalEvent;
use crate::domain::types::PublicId;
use crate::forms::{FormError, deserialize_optional_timestamp};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Detection event reported by the camera client.
pub struct CreateEventForm {
    pub criminal_guid: String,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub event_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub location: Option<String>,
}

impl CreateEventForm {
    pub fn into_domain(self, created_by: &str) -> Result<NewCriminalEvent, FormError> {
        let guid = self
            .criminal_guid
            .parse::<PublicId>()
            .map_err(|_| FormError::InvalidGuid)?;
        Ok(NewCriminalEvent::new(
            guid,
            self.event_at,
            self.location,
            created_by,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_guid() {
        let form = CreateEventForm {
            criminal_guid: "123".to_string(),
            event_at: None,
            location: None,
        };
        assert!(matches!(form.into_domain("Admin"), Err(FormError::InvalidGuid)));
    }

    #[test]
    fn keeps_reported_time_and_location() {
        let guid = PublicId::new();
        let form: CreateEventForm = serde_json::from_value(serde_json::json!({
            "criminalGuid": guid.to_string(),
            "eventAt": "2024-05-01T09:15:00",
            "location": " Gate 3 "
        }))
        .unwrap();
        let event = form.into_domain("Admin").unwrap();
        assert_eq!(event.criminal_guid, guid);
        assert_eq!(event.event_at.to_string(), "2024-05-01 09:15:00");
        assert_eq!(event.location.as_deref(), Some("Gate 3"));
    }
}
