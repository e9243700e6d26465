use actix_web::{HttpResponse, Responder, get, post, web};

use crate::forms::training::CreateTrainingForm;
use crate::models::auth::AuthenticatedUser;
use crate::pagination::PageParams;
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::training as training_service;

/// Called anonymously by the training engine after each run.
#[post("/training")]
pub async fn create_training(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreateTrainingForm>,
) -> impl Responder {
    match training_service::record_training(repo.get_ref(), form) {
        Ok(training) => HttpResponse::Created().json(training),
        Err(err) => service_error_response(err, "record training"),
    }
}

#[get("/training")]
pub async fn list_trainings(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    params: web::Query<PageParams>,
) -> impl Responder {
    match training_service::list_trainings(repo.get_ref(), &user, params.into_inner().into()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => service_error_response(err, "list trainings"),
    }
}
