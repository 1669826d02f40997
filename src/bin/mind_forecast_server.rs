// ABOUTME: Server binary for the Mind Forecast API
// ABOUTME: Loads configuration, wires the Gemini provider, and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mind Forecast

//! # Mind Forecast API Server Binary
//!
//! Starts the HTTP API. Requires `GEMINI_API_KEY` for forecast generation;
//! the biorhythm endpoints work without it only insofar as the process will
//! not start without a key, which keeps a misconfigured deployment loud
//! rather than half-working.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use mind_forecast_server::config::ServerConfig;
use mind_forecast_server::llm::{GeminiProvider, LlmProvider};
use mind_forecast_server::routes::ServerResources;
use mind_forecast_server::{logging, server};

#[derive(Parser)]
#[command(name = "mind-forecast-server")]
#[command(about = "Mind Forecast - biorhythm-based daily mood forecast API")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting Mind Forecast API");
    info!("{}", config.summary());

    let provider = Arc::new(GeminiProvider::from_env()?);
    info!(model = provider.default_model(), "Gemini provider ready");

    let resources = Arc::new(ServerResources::new(config, provider));
    server::serve(resources).await?;

    Ok(())
}
