// src/api/handlers/system.rs

use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use crate::api::AppState;
use crate::api::types::HealthResponse;

/// Service health
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health(state: web::Data<AppState>) -> impl Responder {
    let source = state.generator.source();
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        random_source: source.to_string(),
        secure: source.is_cryptographically_secure(),
        time: Utc::now().to_rfc3339(),
    })
}
