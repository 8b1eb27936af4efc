//! Health check and runtime administration routes

use actix_web::{get, web, HttpResponse, Responder};

use crate::logging::LogLevel;

/// Health check
#[get("/healthcheck")]
pub async fn healthcheck() -> impl Responder {
    HttpResponse::Ok().body("Health is good")
}

/// Change the log level without restarting.
///
/// Unknown level names apply the configured level; the response names the
/// level that is now active.
#[get("/logging/{level}")]
pub async fn set_log_level(
    path: web::Path<String>,
    log_level: web::Data<LogLevel>,
) -> impl Responder {
    match log_level.set(&path) {
        Ok(applied) => {
            tracing::info!("log level changed to {}", applied);
            HttpResponse::Ok().body(format!("Log level is now set to {}.", applied))
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": e.to_string()
        })),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(set_log_level);
}
