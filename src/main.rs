// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use clap::Parser;
use lash_analyzer::{
    api::{start_server, AppState},
    AppConfig, Analyzer, ModelGateway, OpenAiGateway,
};
use std::{env, sync::Arc};

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up a local .env before clap reads the environment
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let config = AppConfig::parse();
    config.validate()?;
    let addr = config.socket_addr()?;

    tracing::info!(
        "Starting lash analyzer {} (model={}, gateway={})",
        lash_analyzer::version::VERSION,
        config.model,
        config.gateway_url
    );

    let gateway: Arc<dyn ModelGateway> = Arc::new(OpenAiGateway::new(
        &config.gateway_url,
        &config.api_key,
        &config.model,
        config.gateway_timeout(),
    )?);
    let analyzer = Arc::new(Analyzer::with_gateway(gateway));

    let state = AppState::new(analyzer, &config.model, config.max_upload_bytes);
    start_server(state, addr).await
}
