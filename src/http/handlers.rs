//! Request handlers for the service endpoints.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::berries::BerryStatsResponse;
use crate::http::response::ApiError;
use crate::http::server::AppState;

/// Service name reported by the banner endpoints.
pub const SERVICE_NAME: &str = "Poke Berry Stats API";

#[derive(Serialize)]
pub struct ServiceBanner {
    pub status: &'static str,
    pub message: &'static str,
    pub version: &'static str,
}

/// Root endpoint: confirms the service is up.
pub async fn root() -> Json<ServiceBanner> {
    Json(ServiceBanner {
        status: "ok",
        message: "Poke Berry Stats API is running",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Liveness endpoint for orchestration probes.
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Walk the berry catalog and return aggregated growth-time statistics.
pub async fn get_berry_stats(
    State(state): State<AppState>,
) -> Result<Json<BerryStatsResponse>, ApiError> {
    match state.berries.collect_all_berry_stats().await {
        Ok(stats) => Ok(Json(stats)),
        Err(e) => {
            tracing::error!(error = %e, "Failed to collect berry statistics");
            Err(ApiError::from(e))
        }
    }
}
