pub mod api;
pub mod dtos;
pub mod error;
pub mod extractors;
pub mod services;
pub mod utils;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use axum::{Extension, Router, http::HeaderValue, routing::get};
use once_cell::sync::Lazy;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::AppConfig;
use api::{
    addon_controller::AddonController, health_controller::health_endpoint,
    home_controller::home_page,
};
use services::AddonServices;

static START_TIME: Lazy<Instant> = Lazy::new(Instant::now);

pub fn get_uptime_seconds() -> u64 {
    START_TIME.elapsed().as_secs()
}

pub fn get_app_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub struct ApplicationServer;

impl ApplicationServer {
    pub async fn serve(config: Arc<AppConfig>, services: AddonServices) -> anyhow::Result<()> {
        Lazy::force(&START_TIME);

        let router = Self::router(services).layer(Self::cors_layer(&config.cors_origin));

        let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind to {}", addr))?;

        info!("listening on {}", addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(Self::shutdown_signal())
            .await
            .context("error while serving the addon")?;

        Ok(())
    }

    /// every route with services attached, no cors so tests can drive it directly
    pub fn router(services: AddonServices) -> Router {
        Router::new()
            .route("/", get(home_page))
            .route("/health", get(health_endpoint))
            .merge(AddonController::app())
            .layer(Extension(services))
            .layer(TraceLayer::new_for_http())
    }

    // stremio clients call from whatever origin they're hosted on, so * is the sane default
    fn cors_layer(cors_origin: &str) -> CorsLayer {
        let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

        if cors_origin.trim() == "*" {
            return layer.allow_origin(Any);
        }

        let origins: Vec<HeaderValue> = cors_origin
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!("skipping invalid cors origin {}: {}", origin, e);
                    None
                }
            })
            .collect();

        layer.allow_origin(origins)
    }

    async fn shutdown_signal() {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
        info!("shutdown signal received, stopping server");
    }
}
