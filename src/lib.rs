// ABOUTME: Main library entry point for the Mind Forecast platform
// ABOUTME: Biorhythm-based daily mood forecast API with LLM narrative generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mind Forecast

#![deny(unsafe_code)]

//! # Mind Forecast Server
//!
//! A daily mood forecast service: given a birth date, compute the classic
//! biorhythm sine-wave model (23/28/33-day cycles), send the snapshot to a
//! generative-AI endpoint for a narrative report (mood score, advice,
//! fashion and playlist suggestions), and serve the result over an HTTP
//! JSON API. A companion CLI runs the same pipeline locally.
//!
//! ## Architecture
//!
//! - **forecast-core** (workspace crate): the pure biorhythm engine and
//!   shared wire models
//! - **llm**: LLM provider abstraction with a Gemini implementation
//! - **forecast**: the request/response contract with the generator,
//!   including JSON-in-prose extraction
//! - **storage**: key-value capability holding the saved birth date and
//!   preferences
//! - **routes** / **server**: axum HTTP API with CORS for the browser UI
//!
//! ## Quick Start
//!
//! ```bash
//! export GEMINI_API_KEY=...
//! mind-forecast-server --http-port 8080
//! ```

/// Environment-based server configuration
pub mod config;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Forecast orchestration and the generator request/response contract
pub mod forecast;

/// LLM provider abstraction and the Gemini implementation
pub mod llm;

/// Structured logging configuration
pub mod logging;

/// HTTP middleware layers (CORS)
pub mod middleware;

/// HTTP route handlers and shared server state
pub mod routes;

/// HTTP server bootstrap
pub mod server;

/// Key-value storage for saved user data
pub mod storage;
