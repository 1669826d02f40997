// ABOUTME: HTTP route registration and shared server state
// ABOUTME: Assembles health, biorhythm, and forecast routes into one router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mind Forecast

//! HTTP routes for the Mind Forecast API.

/// Forecast and biorhythm route handlers
pub mod forecast;

/// Health and readiness endpoints
pub mod health;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::forecast::ForecastService;
use crate::llm::LlmProvider;
use crate::middleware::setup_cors;

pub use forecast::ForecastRoutes;
pub use health::HealthRoutes;

/// Shared state handed to every route handler
pub struct ServerResources {
    /// Server configuration
    pub config: ServerConfig,
    /// Forecast generation service over the configured LLM provider
    pub forecast: ForecastService,
}

impl ServerResources {
    /// Build resources from configuration and a provider
    #[must_use]
    pub fn new(config: ServerConfig, provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            config,
            forecast: ForecastService::new(provider),
        }
    }
}

/// Assemble the full application router with CORS and request tracing
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config);

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(ForecastRoutes::routes(resources))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
