// ABOUTME: Forecast orchestration over the LLM provider seam
// ABOUTME: Validates input, builds the prompt, runs the one-shot call, and parses the reply
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mind Forecast

//! # Forecast Contract & Orchestration
//!
//! [`ForecastService`] owns the request/response contract with the narrative
//! generator: validate the birth date, compute the biorhythm snapshot, carry
//! it to the provider as a single one-shot completion, then recover the
//! embedded JSON object from the free-text reply and deserialize it into
//! [`ForecastData`].
//!
//! Error discipline: provider/transport failures surface as
//! `GenerationFailed` (or `QuotaExceeded`), while an un-extractable or
//! un-parseable reply surfaces as `MalformedResponse`. The two kinds stay
//! distinct so callers can message them differently. This layer performs no
//! retry, caching, or rate limiting; overlapping requests are neither
//! prevented nor coalesced.

mod extract;

pub use extract::extract_json_object;

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::{debug, instrument, warn};

use forecast_core::biorhythm::calculate_biorhythm;
use forecast_core::models::{BiorhythmData, ForecastData, ForecastRequest};

use crate::errors::{AppError, AppResult};
use crate::llm::{build_forecast_prompt, prompts, ChatMessage, ChatRequest, LlmProvider};

/// Expected birth date format
const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse and validate a `YYYY-MM-DD` birth date string
///
/// Validation happens here, upstream of the pure engine: the engine itself
/// produces meaningless numbers for garbage dates rather than failing, so
/// nothing unvalidated may reach it. Future dates are rejected.
///
/// # Errors
///
/// Returns `InvalidDate` for unparseable strings and for dates after today.
pub fn parse_birth_date(input: &str) -> AppResult<NaiveDate> {
    let birth = NaiveDate::parse_from_str(input.trim(), BIRTH_DATE_FORMAT)
        .map_err(|e| AppError::invalid_date(format!("'{input}' is not a YYYY-MM-DD date: {e}")))?;

    let today = Local::now().date_naive();
    if birth > today {
        return Err(AppError::invalid_date(format!(
            "birth date '{input}' is in the future"
        )));
    }

    Ok(birth)
}

/// Forecast generation service over a pluggable LLM provider
pub struct ForecastService {
    provider: Arc<dyn LlmProvider>,
}

impl ForecastService {
    /// Create a service over the given provider
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// Generate a forecast for the given request payload
    ///
    /// The birth date is validated but otherwise unused beyond the privacy
    /// instruction baked into the system prompt; the narrative derives from
    /// the biorhythm values the caller supplies.
    ///
    /// # Errors
    ///
    /// `InvalidDate` for a bad birth date, `GenerationFailed`/`QuotaExceeded`
    /// for provider failures, `MalformedResponse` when the reply embeds no
    /// parseable forecast object.
    #[instrument(skip(self, request), fields(provider = self.provider.name()))]
    pub async fn generate(&self, request: &ForecastRequest) -> AppResult<ForecastData> {
        parse_birth_date(&request.birth_date)?;
        self.generate_from_biorhythm(&request.biorhythm).await
    }

    /// Generate a forecast for today from a birth date string
    ///
    /// Computes the biorhythm snapshot for the current local date and runs
    /// the same contract as [`Self::generate`].
    ///
    /// # Errors
    ///
    /// Same failure kinds as [`Self::generate`].
    pub async fn generate_today(&self, birth_date: &str) -> AppResult<ForecastData> {
        let birth = parse_birth_date(birth_date)?;
        let biorhythm = calculate_biorhythm(birth, Local::now().date_naive());
        self.generate_from_biorhythm(&biorhythm).await
    }

    /// Run the one-shot completion and parse the reply
    async fn generate_from_biorhythm(&self, biorhythm: &BiorhythmData) -> AppResult<ForecastData> {
        let chat_request = ChatRequest::new(vec![
            ChatMessage::system(prompts::forecast_system_prompt()),
            ChatMessage::user(build_forecast_prompt(biorhythm)),
        ]);

        // Transport and remote-service failures pass through as-is
        let response = self.provider.complete(&chat_request).await?;

        debug!(
            chars = response.content.len(),
            "Parsing generator reply into forecast"
        );
        Self::parse_reply(&response.content)
    }

    /// Recover the forecast object from the raw generator reply
    fn parse_reply(reply: &str) -> AppResult<ForecastData> {
        let json = extract_json_object(reply).ok_or_else(|| {
            warn!("Generator reply contained no balanced JSON object");
            AppError::malformed_response("no JSON object found in generator reply")
        })?;

        serde_json::from_str(json).map_err(|e| {
            warn!(error = %e, "Generator reply JSON did not match the forecast schema");
            AppError::malformed_response(format!("forecast JSON did not match schema: {e}"))
                .with_source(e)
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn birth_date_must_be_iso_format() {
        assert!(parse_birth_date("1990-05-15").is_ok());
        assert!(parse_birth_date(" 1990-05-15 ").is_ok());
        assert!(parse_birth_date("15/05/1990").is_err());
        assert!(parse_birth_date("yesterday").is_err());
        assert!(parse_birth_date("1990-13-40").is_err());
        assert!(parse_birth_date("").is_err());
    }

    #[test]
    fn future_birth_dates_are_rejected() {
        let error = parse_birth_date("2999-01-01").unwrap_err();
        assert_eq!(error.code, crate::errors::ErrorCode::InvalidDate);
    }
}
