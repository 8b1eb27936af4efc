//! Album API routes

use actix_web::{get, web, HttpResponse};

use crate::core::CatalogService;
use crate::error::CatalogError;

/// Get an album by provider id
#[get("/{id}")]
pub async fn get_album(
    path: web::Path<String>,
    service: web::Data<CatalogService>,
) -> Result<HttpResponse, CatalogError> {
    let album = service.resolve_album(&path).await?;
    Ok(HttpResponse::Ok().json(album))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_album);
}
