//! Detection events reported by the camera client.

use crate::ADMIN_ROLE;
use crate::domain::DEFAULT_ACTOR;
use crate::domain::types::PublicId;
use crate::dto::events::EventDto;
use crate::forms::events::CreateEventForm;
use crate::models::auth::AuthenticatedUser;
use crate::pagination::{PageRequest, PagedResult};
use crate::repository::{EventListQuery, EventReader, EventWriter};
use crate::services::auth::ensure_role;
use crate::services::{ServiceError, ServiceResult};

pub fn record_event<R>(repo: &R, form: CreateEventForm) -> ServiceResult<EventDto>
where
    R: EventWriter + ?Sized,
{
    let new_event = form.into_domain(DEFAULT_ACTOR)?;
    let event = repo.create_event(&new_event)?;
    log::info!("Recorded detection event for criminal {}", event.criminal_guid);
    Ok(event.into())
}

/// Events of one criminal, newest first.
pub fn list_events<R>(
    repo: &R,
    user: &AuthenticatedUser,
    criminal_guid: &str,
    page: PageRequest,
) -> ServiceResult<PagedResult<EventDto>>
where
    R: EventReader + ?Sized,
{
    ensure_role(user, ADMIN_ROLE)?;

    let guid = criminal_guid
        .parse::<PublicId>()
        .map_err(|_| ServiceError::BadRequest("Invalid criminal GUID.".to_string()))?;

    let (total, events) = repo.list_events(EventListQuery::new(guid).paginate(page))?;
    Ok(PagedResult::new(events, total, page).map(EventDto::from))
}
