//! HTTP route handlers

use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use serde_json::json;
use tracing::warn;

/// Health check endpoint handler
///
/// Reports unhealthy (503) when the storage directory has gone away.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let timestamp = chrono::Utc::now().to_rfc3339();

    match state.registry.health_check().await {
        Ok(()) => HttpResponse::Ok().json(json!({
            "status": "healthy",
            "storage": "ok",
            "timestamp": timestamp,
            "version": crate::VERSION
        })),
        Err(e) => {
            warn!("Health check failed: {}", e);
            HttpResponse::ServiceUnavailable().json(json!({
                "status": "unhealthy",
                "storage": "unavailable",
                "timestamp": timestamp,
                "version": crate::VERSION
            }))
        }
    }
}
