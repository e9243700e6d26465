//! Training session logging.

use crate::ADMIN_ROLE;
use crate::domain::DEFAULT_ACTOR;
use crate::dto::training::TrainingDto;
use crate::forms::training::CreateTrainingForm;
use crate::models::auth::AuthenticatedUser;
use crate::pagination::{PageRequest, PagedResult};
use crate::repository::{TrainingListQuery, TrainingReader, TrainingWriter};
use crate::services::ServiceResult;
use crate::services::auth::ensure_role;

/// Records a training run reported by the training engine.
pub fn record_training<R>(repo: &R, form: CreateTrainingForm) -> ServiceResult<TrainingDto>
where
    R: TrainingWriter + ?Sized,
{
    let new_training = form.into_domain(DEFAULT_ACTOR)?;
    let training = repo.create_training(&new_training)?;
    log::info!(
        "Recorded training of {} images",
        training.number_of_images_trained.get()
    );
    Ok(training.into())
}

/// Lists training sessions, newest first.
pub fn list_trainings<R>(
    repo: &R,
    user: &AuthenticatedUser,
    page: PageRequest,
) -> ServiceResult<PagedResult<TrainingDto>>
where
    R: TrainingReader + ?Sized,
{
    ensure_role(user, ADMIN_ROLE)?;

    let (total, trainings) = repo.list_trainings(TrainingListQuery::new().paginate(page))?;
    Ok(PagedResult::new(trainings, total, page).map(TrainingDto::from))
}
