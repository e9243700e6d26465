use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, routes, web};

use crate::forms::auth::LoginForm;
use crate::models::config::JwtSettings;
use crate::repository::DieselRepository;
use crate::routes::{error_response, service_error_response};
use crate::services::ServiceError;
use crate::services::auth::{self as auth_service, INVALID_CREDENTIALS};

#[routes]
#[post("/login")]
#[post("/AdminLogin")]
pub async fn login(
    repo: web::Data<DieselRepository>,
    jwt: web::Data<JwtSettings>,
    web::Json(form): web::Json<LoginForm>,
) -> impl Responder {
    match auth_service::login(repo.get_ref(), jwt.get_ref(), form) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(ServiceError::Unauthorized) => {
            log::info!("Login failed: invalid credentials");
            error_response(StatusCode::UNAUTHORIZED, INVALID_CREDENTIALS, None)
        }
        Err(err) => service_error_response(err, "log in"),
    }
}
