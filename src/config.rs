// ABOUTME: Environment-based server configuration
// ABOUTME: Reads port, CORS origins, and generation model settings from the process environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mind Forecast

//! Environment-only configuration management.
//!
//! Every setting comes from environment variables with sensible defaults;
//! the one required secret (`GEMINI_API_KEY`) is checked where it is used,
//! at provider construction, so the engine-only endpoints keep working
//! without it.

use std::env;

use crate::errors::{AppError, AppResult};

/// Default HTTP port
const DEFAULT_HTTP_PORT: u16 = 8080;

/// Server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP port to bind (`HTTP_PORT`, default 8080)
    pub http_port: u16,
    /// Comma-separated CORS origin allowlist, `*` for any
    /// (`CORS_ALLOWED_ORIGINS`, default `*`)
    pub cors_allowed_origins: String,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a set variable fails to parse (an unset
    /// variable falls back to its default).
    pub fn from_env() -> AppResult<Self> {
        let http_port = match env::var("HTTP_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|e| AppError::config(format!("HTTP_PORT '{raw}' is not a port: {e}")))?,
            Err(_) => DEFAULT_HTTP_PORT,
        };

        let cors_allowed_origins =
            env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_owned());

        Ok(Self {
            http_port,
            cors_allowed_origins,
        })
    }

    /// One-line summary for the startup log
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "http_port={} cors_allowed_origins={}",
            self.http_port, self.cors_allowed_origins
        )
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            cors_allowed_origins: "*".to_owned(),
        }
    }
}
