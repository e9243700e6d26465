use actix_web::{HttpResponse, Responder, get, post, web};

use crate::forms::events::CreateEventForm;
use crate::models::auth::AuthenticatedUser;
use crate::pagination::PageParams;
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::events as events_service;

/// Called anonymously by the camera client on every detection.
#[post("/events")]
pub async fn create_event(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreateEventForm>,
) -> impl Responder {
    match events_service::record_event(repo.get_ref(), form) {
        Ok(event) => HttpResponse::Created().json(event),
        Err(err) => service_error_response(err, "record event"),
    }
}

#[get("/{guid}/events")]
pub async fn list_criminal_events(
    guid: web::Path<String>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    params: web::Query<PageParams>,
) -> impl Responder {
    match events_service::list_events(repo.get_ref(), &user, &guid, params.into_inner().into()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => service_error_response(err, "list events"),
    }
}
