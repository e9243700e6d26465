use actix_web::{HttpResponse, Responder, get, web};

use crate::models::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::dashboard as dashboard_service;

#[get("/dashboard")]
pub async fn show_dashboard(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match dashboard_service::load_dashboard(repo.get_ref(), &user) {
        Ok(dashboard) => HttpResponse::Ok().json(dashboard),
        Err(err) => service_error_response(err, "load dashboard"),
    }
}
