use actix_web::{HttpRequest, HttpResponse, Responder, get, web};

use crate::images::{IMAGES_URL_PREFIX, ImageStore};
use crate::routes::service_error_response;
use crate::services::detected as detected_service;

fn detected_base_url(req: &HttpRequest) -> String {
    let info = req.connection_info();
    format!(
        "{}://{}{IMAGES_URL_PREFIX}/detected",
        info.scheme(),
        info.host()
    )
}

#[get("/detected")]
pub async fn list_all_detected(req: HttpRequest, images: web::Data<ImageStore>) -> impl Responder {
    let base_url = detected_base_url(&req);
    match detected_service::list_detected(images.get_ref(), None, &base_url) {
        Ok(folders) => HttpResponse::Ok().json(folders),
        Err(err) => service_error_response(err, "list detected images"),
    }
}

#[get("/detected/{guid}")]
pub async fn list_detected_for_guid(
    req: HttpRequest,
    guid: web::Path<String>,
    images: web::Data<ImageStore>,
) -> impl Responder {
    let base_url = detected_base_url(&req);
    match detected_service::list_detected(images.get_ref(), Some(guid.as_str()), &base_url) {
        Ok(folders) => HttpResponse::Ok().json(folders),
        Err(err) => service_error_response(err, "list detected images"),
    }
}
