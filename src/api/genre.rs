//! Genre API routes

use actix_web::{get, web, HttpResponse};

use crate::core::CatalogService;
use crate::error::CatalogError;

/// Get a genre by provider id
#[get("/{id}")]
pub async fn get_genre(
    path: web::Path<String>,
    service: web::Data<CatalogService>,
) -> Result<HttpResponse, CatalogError> {
    let genre = service.resolve_genre(&path).await?;
    Ok(HttpResponse::Ok().json(genre))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_genre);
}
