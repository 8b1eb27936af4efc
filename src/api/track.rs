//! Track search API routes

use actix_web::{get, web, HttpResponse};

use crate::core::CatalogService;
use crate::error::CatalogError;
use crate::models::SearchQuery;

/// Search tracks by name, optionally scoped to an artist
///
/// `GET /tracks?name=the takeover&artist=JAY Z`
#[get("")]
pub async fn search_tracks(
    query: web::Query<SearchQuery>,
    service: web::Data<CatalogService>,
) -> Result<HttpResponse, CatalogError> {
    if query.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Track name is required"
        })));
    }

    let tracks = service.search_tracks(&query).await?;
    Ok(HttpResponse::Ok().json(tracks))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(search_tracks);
}
