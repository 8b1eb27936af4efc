//! Artist API routes

use actix_web::{get, web, HttpResponse};

use crate::core::CatalogService;
use crate::error::CatalogError;

/// Get an artist by name, with image and album names resolved
///
/// `GET /artists/jay z` and `GET /artists/jay-z` look up the same artist.
#[get("/{name}")]
pub async fn get_artist(
    path: web::Path<String>,
    service: web::Data<CatalogService>,
) -> Result<HttpResponse, CatalogError> {
    let artist = service.search_artist(&path).await?;
    Ok(HttpResponse::Ok().json(artist))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_artist);
}
