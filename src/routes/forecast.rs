// ABOUTME: Forecast and biorhythm route handlers
// ABOUTME: REST endpoints for narrative forecast generation and raw biorhythm queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mind Forecast

//! Forecast API routes.
//!
//! - `POST /api/forecast`: run the one-shot narrative generation for a
//!   `{birthDate, biorhythm}` payload; success is a `ForecastData` body,
//!   failure is `{error, details}` with a non-success status.
//! - `GET /api/biorhythm`: expose the pure engine to the UI, returning the
//!   snapshot for a date plus the 7-point weekly trend. Works without a
//!   generation API key.
//!
//! Handlers are stateless and safely concurrent; overlapping forecast
//! requests are not coalesced here, an "in flight" gate is client policy.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::info;

use forecast_core::biorhythm::{
    calculate_biorhythm, calculate_overall_biorhythm, generate_weekly_biorhythm_around,
    interpret_biorhythm_level,
};
use forecast_core::models::{BiorhythmData, ForecastRequest};

use super::ServerResources;
use crate::errors::{AppError, AppResult};
use crate::forecast::parse_birth_date;

/// Query parameters for the biorhythm endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiorhythmQuery {
    /// Birth date as `YYYY-MM-DD`
    pub birth_date: String,
    /// Target date, defaulting to today
    #[serde(default)]
    pub date: Option<String>,
}

/// Interpretation of one biorhythm component
#[derive(Debug, Serialize)]
pub struct LevelView {
    /// Level identifier: low, medium, or high
    pub level: &'static str,
    /// Fixed descriptive label
    pub description: &'static str,
}

/// Per-component level interpretations
#[derive(Debug, Serialize)]
pub struct LevelsView {
    /// Physical component level
    pub physical: LevelView,
    /// Emotional component level
    pub emotional: LevelView,
    /// Intellectual component level
    pub intellectual: LevelView,
}

/// One point of the weekly trend series
#[derive(Debug, Serialize)]
pub struct WeeklyPointView {
    /// Calendar date (`YYYY-MM-DD`)
    pub date: NaiveDate,
    /// Human-readable date label
    pub label: String,
    /// Physical rhythm value
    pub physical: u8,
    /// Emotional rhythm value
    pub emotional: u8,
    /// Intellectual rhythm value
    pub intellectual: u8,
}

/// Response body for the biorhythm endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BiorhythmResponse {
    /// Date the snapshot applies to
    pub date: NaiveDate,
    /// Biorhythm snapshot
    pub biorhythm: BiorhythmData,
    /// Round of the mean of the three components
    pub overall_score: u8,
    /// Per-component level interpretations
    pub levels: LevelsView,
    /// 7-point trend series centered on the snapshot date, oldest first
    pub weekly: Vec<WeeklyPointView>,
}

fn level_view(value: u8) -> LevelView {
    let level = interpret_biorhythm_level(value);
    LevelView {
        level: level.as_str(),
        description: level.description(),
    }
}

/// Forecast routes handler
pub struct ForecastRoutes;

impl ForecastRoutes {
    /// Create all forecast routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/forecast", post(Self::generate_forecast))
            .route("/api/biorhythm", get(Self::get_biorhythm))
            .with_state(resources)
    }

    /// `POST /api/forecast`
    async fn generate_forecast(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<ForecastRequest>,
    ) -> AppResult<impl IntoResponse> {
        let forecast = resources.forecast.generate(&request).await?;
        info!(score = forecast.overall_score, "Generated mind forecast");
        Ok((StatusCode::OK, Json(forecast)))
    }

    /// `GET /api/biorhythm`
    async fn get_biorhythm(
        Query(query): Query<BiorhythmQuery>,
    ) -> AppResult<impl IntoResponse> {
        let birth = parse_birth_date(&query.birth_date)?;
        let date = match query.date.as_deref() {
            Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|e| {
                AppError::invalid_date(format!("'{raw}' is not a YYYY-MM-DD date: {e}"))
            })?,
            None => Local::now().date_naive(),
        };

        let biorhythm = calculate_biorhythm(birth, date);
        let weekly = generate_weekly_biorhythm_around(birth, date)
            .into_iter()
            .map(|point| WeeklyPointView {
                date: point.date,
                label: point.label,
                physical: point.biorhythm.physical,
                emotional: point.biorhythm.emotional,
                intellectual: point.biorhythm.intellectual,
            })
            .collect();

        let response = BiorhythmResponse {
            date,
            biorhythm,
            overall_score: calculate_overall_biorhythm(&biorhythm),
            levels: LevelsView {
                physical: level_view(biorhythm.physical),
                emotional: level_view(biorhythm.emotional),
                intellectual: level_view(biorhythm.intellectual),
            },
            weekly,
        };

        Ok((StatusCode::OK, Json(response)))
    }
}
