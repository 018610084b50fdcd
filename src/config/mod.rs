// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Service configuration
//!
//! Every flag can also be supplied through the environment (or a `.env`
//! file loaded at startup).

use anyhow::{anyhow, Result};
use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use crate::vision::MAX_IMAGE_SIZE;

/// Lash analyzer HTTP service
#[derive(Parser, Debug, Clone)]
#[command(name = "lash-analyzer")]
#[command(version)]
#[command(about = "Lash photo classification and styling report service", long_about = None)]
pub struct AppConfig {
    /// API key for the model gateway
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Base URL of the OpenAI-compatible model gateway
    #[arg(long, env = "GATEWAY_URL", default_value = "https://api.openai.com")]
    pub gateway_url: String,

    /// Vision model used for both classification and reports
    #[arg(long, env = "MODEL_NAME", default_value = "gpt-4o")]
    pub model: String,

    /// Address to bind the HTTP server to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind the HTTP server to
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Timeout for each model gateway call, in seconds
    #[arg(long, env = "GATEWAY_TIMEOUT_SECS", default_value_t = 120)]
    pub gateway_timeout_secs: u64,

    /// Largest accepted image upload, in bytes
    #[arg(long, env = "MAX_UPLOAD_BYTES", default_value_t = MAX_IMAGE_SIZE)]
    pub max_upload_bytes: usize,
}

impl AppConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| anyhow!("Invalid HOST '{}': {}", self.host, e))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn gateway_timeout(&self) -> Duration {
        Duration::from_secs(self.gateway_timeout_secs)
    }

    /// Reject settings that would make the service unusable
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(anyhow!("OPENAI_API_KEY must not be empty"));
        }
        if self.gateway_timeout_secs == 0 {
            return Err(anyhow!("GATEWAY_TIMEOUT_SECS must be greater than zero"));
        }
        if self.max_upload_bytes == 0 {
            return Err(anyhow!("MAX_UPLOAD_BYTES must be greater than zero"));
        }
        self.socket_addr()?;
        Ok(())
    }
}
