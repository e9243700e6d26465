//! Criminal record workflows: list, read, create, update and delete.

use std::collections::HashMap;

use crate::ADMIN_ROLE;
use crate::domain::crime::Crime;
use crate::domain::criminal::Criminal;
use crate::domain::types::{CriminalId, PublicId};
use crate::dto::criminals::CriminalDto;
use crate::forms::criminals::{
    CreateCriminalForm, CreateCriminalPayload, UpdateCriminalForm, UpdateCriminalPayload,
};
use crate::images::ImageStore;
use crate::models::auth::AuthenticatedUser;
use crate::pagination::PagedResult;
use crate::query::{CriminalQuery, QueryRequest};
use crate::repository::{CriminalReader, CriminalWriter};
use crate::services::auth::ensure_role;
use crate::services::{ServiceError, ServiceResult};
use crate::training_engine::{TrainRequest, TrainingNotifier};

pub const CRIMINAL_NOT_FOUND: &str = "Criminal not found";
pub const GUID_MISMATCH: &str = "GUID mismatch";

fn not_found() -> ServiceError {
    ServiceError::NotFound(CRIMINAL_NOT_FOUND.to_string())
}

fn parse_guid(raw: &str) -> ServiceResult<PublicId> {
    raw.parse::<PublicId>().map_err(|_| not_found())
}

/// Attaches each criminal's crimes, keeping the order of `criminals`.
fn with_crimes<R>(repo: &R, criminals: Vec<Criminal>) -> ServiceResult<Vec<CriminalDto>>
where
    R: CriminalReader + ?Sized,
{
    let ids: Vec<CriminalId> = criminals.iter().map(|c| c.id).collect();

    let mut crimes_by_criminal: HashMap<CriminalId, Vec<Crime>> = HashMap::new();
    for crime in repo.list_crimes(&ids)? {
        crimes_by_criminal
            .entry(crime.criminal_id)
            .or_default()
            .push(crime);
    }

    Ok(criminals
        .into_iter()
        .map(|criminal| {
            let crimes = crimes_by_criminal.remove(&criminal.id).unwrap_or_default();
            CriminalDto::from_parts(criminal, crimes)
        })
        .collect())
}

fn load_one<R>(repo: &R, criminal: Criminal) -> ServiceResult<CriminalDto>
where
    R: CriminalReader + ?Sized,
{
    with_crimes(repo, vec![criminal])?
        .pop()
        .ok_or_else(|| ServiceError::Internal("criminal vanished while loading".to_string()))
}

/// Runs the filter/sort/search/paginate query and projects the page.
pub fn list_criminals<R>(
    repo: &R,
    user: &AuthenticatedUser,
    request: &QueryRequest,
) -> ServiceResult<PagedResult<CriminalDto>>
where
    R: CriminalReader + ?Sized,
{
    ensure_role(user, ADMIN_ROLE)?;

    let query = CriminalQuery::parse(request);
    let (total, criminals) = repo.list_criminals(&query)?;
    let items = with_crimes(repo, criminals)?;

    Ok(PagedResult::new(items, total, query.page()))
}

pub fn get_criminal<R>(repo: &R, user: &AuthenticatedUser, guid: &str) -> ServiceResult<CriminalDto>
where
    R: CriminalReader + ?Sized,
{
    ensure_role(user, ADMIN_ROLE)?;

    let criminal = repo
        .get_criminal_by_guid(parse_guid(guid)?)?
        .ok_or_else(not_found)?;

    load_one(repo, criminal)
}

/// Creates a criminal with its crimes. A photo that cannot be stored is
/// logged and skipped. The training engine is notified once the row exists.
pub fn create_criminal<R, T>(
    repo: &R,
    images: &ImageStore,
    trainer: &T,
    user: &AuthenticatedUser,
    form: CreateCriminalForm,
) -> ServiceResult<CriminalDto>
where
    R: CriminalReader + CriminalWriter + ?Sized,
    T: TrainingNotifier + ?Sized,
{
    ensure_role(user, ADMIN_ROLE)?;

    let CreateCriminalPayload {
        mut criminal,
        image_base64,
    } = CreateCriminalPayload::from_form(form, &user.username)?;

    if let Some(payload) = image_base64 {
        match images.save_criminal_image(criminal.guid, &payload) {
            Ok(url) => criminal.image_url = Some(url),
            Err(e) => log::warn!("Failed to store image for criminal {}: {e}", criminal.guid),
        }
    }

    let created = repo.create_criminal(&criminal)?;
    log::info!("Created criminal {}", created.guid);

    trainer.notify_new_criminal(TrainRequest::from(&created));

    load_one(repo, created)
}

/// Applies a partial update. `route_guid` must match the guid in the body.
pub fn update_criminal<R>(
    repo: &R,
    images: &ImageStore,
    user: &AuthenticatedUser,
    route_guid: &str,
    form: UpdateCriminalForm,
) -> ServiceResult<CriminalDto>
where
    R: CriminalReader + CriminalWriter + ?Sized,
{
    ensure_role(user, ADMIN_ROLE)?;

    let route_guid = route_guid
        .parse::<PublicId>()
        .map_err(|_| ServiceError::BadRequest(GUID_MISMATCH.to_string()))?;

    let UpdateCriminalPayload {
        guid,
        mut updates,
        image_base64,
    } = UpdateCriminalPayload::from_form(form, &user.username)?;

    if guid != route_guid {
        return Err(ServiceError::BadRequest(GUID_MISMATCH.to_string()));
    }

    let existing = repo.get_criminal_by_guid(guid)?.ok_or_else(not_found)?;

    let mut stale_image = None;
    if let Some(payload) = image_base64 {
        match images.save_criminal_image(guid, &payload) {
            Ok(url) => {
                stale_image = existing.image_url.clone().filter(|old| *old != url);
                updates = updates.with_image_url(url);
            }
            Err(e) => log::warn!("Failed to replace image for criminal {guid}: {e}"),
        }
    }

    let updated = repo.update_criminal(existing.id, &updates)?;

    if let Some(old) = stale_image {
        if let Err(e) = images.remove_image(&old) {
            log::warn!("Failed to remove old image {old}: {e}");
        }
    }

    load_one(repo, updated)
}

/// Deletes a criminal, its crimes and, best effort, its photo.
pub fn delete_criminal<R>(
    repo: &R,
    images: &ImageStore,
    user: &AuthenticatedUser,
    guid: &str,
) -> ServiceResult<()>
where
    R: CriminalReader + CriminalWriter + ?Sized,
{
    ensure_role(user, ADMIN_ROLE)?;

    let criminal = repo
        .get_criminal_by_guid(parse_guid(guid)?)?
        .ok_or_else(not_found)?;

    repo.delete_criminal(criminal.id)?;

    if let Some(url) = &criminal.image_url {
        if let Err(e) = images.remove_image(url) {
            log::warn!("Failed to remove image {url}: {e}");
        }
    }

    log::info!("Deleted criminal {}", criminal.guid);
    Ok(())
}
