//! HTTP handlers mounted under `/api/criminals`.

use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Serialize;

use crate::services::ServiceError;

pub mod auth;
pub mod criminals;
pub mod dashboard;
pub mod detected;
pub mod events;
pub mod training;

pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred.";

/// JSON body of every error response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub message: String,
    pub details: Option<String>,
}

pub fn error_response(status: StatusCode, message: &str, details: Option<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorBody {
        status_code: status.as_u16(),
        message: message.to_string(),
        details,
    })
}

/// Maps a service failure onto a status code. Storage and internal failures
/// are logged and reported without details.
pub fn service_error_response(err: ServiceError, action: &str) -> HttpResponse {
    match err {
        ServiceError::Unauthorized => error_response(StatusCode::UNAUTHORIZED, "Unauthorized", None),
        ServiceError::NotFound(message) => error_response(StatusCode::NOT_FOUND, &message, None),
        ServiceError::BadRequest(message) => {
            error_response(StatusCode::BAD_REQUEST, &message, None)
        }
        ServiceError::Form(message) | ServiceError::TypeConstraint(message) => {
            error_response(StatusCode::BAD_REQUEST, "Invalid request.", Some(message))
        }
        err @ (ServiceError::Repository(_) | ServiceError::Internal(_)) => {
            log::error!("Failed to {action}: {err}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED_ERROR, None)
        }
    }
}

fn bad_payload<E>(err: E) -> actix_web::Error
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    let response = error_response(StatusCode::BAD_REQUEST, "Invalid request.", Some(err.to_string()));
    InternalError::from_response(err, response).into()
}

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    bad_payload(err)
}

fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    bad_payload(err)
}

/// Base paths of the API. The admin console addresses the controller as
/// `/api/Criminals`; matching is case-sensitive, so both spellings are mounted.
pub const API_SCOPES: [&str; 2] = ["/api/criminals", "/api/Criminals"];

/// Every route of the API under one base path. Literal paths are registered
/// before the `/{guid}` catch-alls.
fn api_scope(path: &str) -> actix_web::Scope {
    web::scope(path)
        .service(auth::login)
        .service(dashboard::show_dashboard)
        .service(training::create_training)
        .service(training::list_trainings)
        .service(events::create_event)
        .service(detected::list_all_detected)
        .service(detected::list_detected_for_guid)
        .service(criminals::list_criminals)
        .service(criminals::create_criminal)
        .service(events::list_criminal_events)
        .service(criminals::get_criminal)
        .service(criminals::update_criminal)
        .service(criminals::delete_criminal)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::QueryConfig::default().error_handler(query_error));

    for path in API_SCOPES {
        cfg.service(api_scope(path));
    }
}
