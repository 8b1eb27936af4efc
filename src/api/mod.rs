//! REST API routes for the catalog proxy

pub mod admin;
pub mod album;
pub mod artist;
pub mod genre;
pub mod track;

use actix_web::web;

/// Configure all API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Health check
        .service(admin::healthcheck)
        // Admin routes
        .service(web::scope("/admin").configure(admin::configure))
        // Album routes
        .service(web::scope("/albums").configure(album::configure))
        // Artist routes
        .service(web::scope("/artists").configure(artist::configure))
        // Genre routes
        .service(web::scope("/genres").configure(genre::configure))
        // Track search routes
        .service(web::scope("/tracks").configure(track::configure));
}
