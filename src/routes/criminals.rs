use actix_web::{HttpResponse, Responder, delete, get, post, put, routes, web};

use crate::forms::criminals::{CreateCriminalForm, UpdateCriminalForm};
use crate::images::ImageStore;
use crate::models::auth::AuthenticatedUser;
use crate::query::QueryRequest;
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::criminals as criminals_service;
use crate::training_engine::TrainingEngine;

#[routes]
#[get("")]
#[get("/GetCriminals")]
pub async fn list_criminals(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    params: web::Query<QueryRequest>,
) -> impl Responder {
    match criminals_service::list_criminals(repo.get_ref(), &user, &params) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => service_error_response(err, "list criminals"),
    }
}

#[post("")]
pub async fn create_criminal(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    images: web::Data<ImageStore>,
    trainer: web::Data<TrainingEngine>,
    web::Json(form): web::Json<CreateCriminalForm>,
) -> impl Responder {
    match criminals_service::create_criminal(
        repo.get_ref(),
        images.get_ref(),
        trainer.get_ref(),
        &user,
        form,
    ) {
        Ok(created) => HttpResponse::Created()
            .insert_header(("Location", format!("/api/criminals/{}", created.guid)))
            .json(created),
        Err(err) => service_error_response(err, "create criminal"),
    }
}

#[get("/{guid}")]
pub async fn get_criminal(
    guid: web::Path<String>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match criminals_service::get_criminal(repo.get_ref(), &user, &guid) {
        Ok(criminal) => HttpResponse::Ok().json(criminal),
        Err(err) => service_error_response(err, "load criminal"),
    }
}

#[put("/{guid}")]
pub async fn update_criminal(
    guid: web::Path<String>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    images: web::Data<ImageStore>,
    web::Json(form): web::Json<UpdateCriminalForm>,
) -> impl Responder {
    match criminals_service::update_criminal(repo.get_ref(), images.get_ref(), &user, &guid, form)
    {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(err) => service_error_response(err, "update criminal"),
    }
}

#[delete("/{guid}")]
pub async fn delete_criminal(
    guid: web::Path<String>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    images: web::Data<ImageStore>,
) -> impl Responder {
    match criminals_service::delete_criminal(repo.get_ref(), images.get_ref(), &user, &guid) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => service_error_response(err, "delete criminal"),
    }
}
