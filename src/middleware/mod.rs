// ABOUTME: HTTP middleware layers for the Mind Forecast server
// ABOUTME: Currently CORS configuration for browser clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mind Forecast

//! HTTP middleware layers.

/// CORS configuration for browser clients
pub mod cors;

pub use cors::setup_cors;
