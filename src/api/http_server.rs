// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    extract::{DefaultBodyLimit, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::{net::SocketAddr, sync::Arc};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::{analyze::analyze_handler, generate_map::generate_map_handler};
use crate::analysis::Analyzer;
use crate::version;

/// Room for multipart boundaries and the `language` field on top of the image
const MULTIPART_OVERHEAD: usize = 64 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
    pub model_name: String,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(analyzer: Arc<Analyzer>, model_name: &str, max_upload_bytes: usize) -> Self {
        Self {
            analyzer,
            model_name: model_name.to_string(),
            max_upload_bytes,
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    let body_limit = state.max_upload_bytes.saturating_add(MULTIPART_OVERHEAD);

    Router::new()
        // Health check
        .route("/health", get(health_handler))
        // Classification + report
        .route("/analyze", post(analyze_handler))
        // Placeholder lash map
        .route("/generate-map", post(generate_map_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .with_state(state)
}

pub async fn start_server(state: AppState, addr: SocketAddr) -> anyhow::Result<()> {
    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("API server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": version::SERVICE_NAME,
        "version": version::VERSION,
        "model": state.model_name,
    }))
}
