// ABOUTME: Unified error handling system with standard error codes and HTTP responses
// ABOUTME: Maps every failure kind to a status code and the {error, details} wire shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mind Forecast

//! # Unified Error Handling System
//!
//! Centralized error handling for the Mind Forecast server. Defines the
//! error taxonomy, HTTP status mapping, and the `{error, details}` response
//! body the browser UI consumes on failure.
//!
//! The boundary between "transport failure" ([`ErrorCode::GenerationFailed`])
//! and "malformed content" ([`ErrorCode::MalformedResponse`]) is preserved as
//! distinct codes so clients can message them differently. No error here is
//! fatal to the running application; every failure is recoverable by
//! retrying the user action.

use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Unparseable or out-of-range birth date; blocks submission upstream of
    /// the engine
    #[serde(rename = "INVALID_DATE")]
    InvalidDate,

    /// Transport/credential/remote-service failure calling the narrative
    /// generator
    #[serde(rename = "GENERATION_FAILED")]
    GenerationFailed,

    /// Remote reply lacked a parseable JSON object or failed schema
    /// expectations
    #[serde(rename = "MALFORMED_RESPONSE")]
    MalformedResponse,

    /// Generation service quota or rate limit exhausted
    #[serde(rename = "QUOTA_EXCEEDED")]
    QuotaExceeded,

    /// Local persistence read/write/parse failure
    #[serde(rename = "STORAGE_ERROR")]
    StorageError,

    /// Configuration error encountered
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError,

    /// Required configuration is missing
    #[serde(rename = "CONFIG_MISSING")]
    ConfigMissing,

    /// Anything else
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> StatusCode {
        match self {
            Self::InvalidDate => StatusCode::BAD_REQUEST,
            Self::GenerationFailed | Self::MalformedResponse => StatusCode::BAD_GATEWAY,
            Self::QuotaExceeded => StatusCode::SERVICE_UNAVAILABLE,
            Self::StorageError | Self::ConfigError | Self::ConfigMissing | Self::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidDate => "The provided birth date is invalid",
            Self::GenerationFailed => {
                "Failed to generate your mind forecast. Please try again in a moment"
            }
            Self::MalformedResponse => "The generation service returned an unreadable reply",
            Self::QuotaExceeded => "Generation service quota exceeded",
            Self::StorageError => "Saved data could not be read or written",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigMissing => "Required configuration is missing",
            Self::InternalError => "An internal server error occurred",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    /// Invalid birth date
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidDate, message)
    }

    /// Generation call failed (transport, credentials, or remote error)
    pub fn generation_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::GenerationFailed, message)
    }

    /// Generator reply could not be parsed into a forecast
    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MalformedResponse, message)
    }

    /// Local persistence failure
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response body: `{error, details}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// User-facing error description
    pub error: String,
    /// Technical detail for diagnostics
    pub details: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            error: error.code.description().to_owned(),
            details: error.message.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorResponse::from(&self);
        (self.http_status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn error_code_http_status() {
        assert_eq!(ErrorCode::InvalidDate.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorCode::GenerationFailed.http_status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ErrorCode::MalformedResponse.http_status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ErrorCode::QuotaExceeded.http_status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ErrorCode::StorageError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn error_response_wire_shape() {
        let error = AppError::invalid_date("not a date: 'yesterday'");
        let response = ErrorResponse::from(&error);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["error"], "The provided birth date is invalid");
        assert_eq!(json["details"], "not a date: 'yesterday'");
    }

    #[test]
    fn source_is_chained() {
        let parse_error = "nope".parse::<i32>().unwrap_err();
        let error = AppError::generation_failed("request failed").with_source(parse_error);
        assert!(std::error::Error::source(&error).is_some());
    }
}
