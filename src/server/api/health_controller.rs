use axum::Extension;
use axum::Json;
use axum::http::StatusCode;
use chrono::Utc;

use crate::server::dtos::health_dto::{HealthResponse, HealthStatus};
use crate::server::services::AddonServices;
use crate::server::{get_app_version, get_uptime_seconds};

/// nothing to ping here, the upstream is checked per request anyways so this is just liveness
/// plus whether the logo table actually has anything in it
pub async fn health_endpoint(
    Extension(services): Extension<AddonServices>,
) -> (StatusCode, Json<HealthResponse>) {
    let logos_loaded = services.logos.len();

    // an empty table still serves, posters just come back blank
    let status = if logos_loaded == 0 {
        HealthStatus::Degraded
    } else {
        HealthStatus::Healthy
    };

    let response = HealthResponse {
        status,
        timestamp: Utc::now(),
        uptime_seconds: get_uptime_seconds(),
        version: get_app_version().to_string(),
        environment: format!("{:?}", services.config.cargo_env).to_lowercase(),
        logos_loaded,
    };

    (StatusCode::OK, Json(response))
}
