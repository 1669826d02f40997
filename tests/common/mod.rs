// ABOUTME: Shared test helpers for integration tests
// ABOUTME: Mock LLM provider with scripted replies and failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mind Forecast

#![allow(missing_docs)]
#![allow(dead_code)] // not every test binary uses every helper

use async_trait::async_trait;

use mind_forecast_server::errors::{AppError, ErrorCode};
use mind_forecast_server::llm::{ChatRequest, ChatResponse, LlmProvider};

/// Scripted behavior for the mock provider
pub enum MockBehavior {
    /// Reply with the given raw text
    Reply(String),
    /// Fail with the given error code
    Fail(ErrorCode),
}

/// LLM provider double with a scripted one-shot reply
pub struct MockProvider {
    behavior: MockBehavior,
}

impl MockProvider {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            behavior: MockBehavior::Reply(text.into()),
        }
    }

    pub fn failing(code: ErrorCode) -> Self {
        Self {
            behavior: MockBehavior::Fail(code),
        }
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn display_name(&self) -> &'static str {
        "Mock Provider"
    }

    fn default_model(&self) -> &str {
        "mock-model"
    }

    fn available_models(&self) -> &'static [&'static str] {
        &["mock-model"]
    }

    async fn complete(&self, _request: &ChatRequest) -> Result<ChatResponse, AppError> {
        match &self.behavior {
            MockBehavior::Reply(text) => Ok(ChatResponse {
                content: text.clone(),
                model: "mock-model".to_owned(),
                usage: None,
                finish_reason: Some("stop".to_owned()),
            }),
            MockBehavior::Fail(code) => Err(AppError::new(*code, "scripted mock failure")),
        }
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        Ok(matches!(self.behavior, MockBehavior::Reply(_)))
    }
}

/// A complete generator reply wrapped in prose, embedding a full forecast
pub fn full_forecast_reply() -> String {
    format!("Here is your report! {} Hope that helps!", full_forecast_json())
}

/// A full forecast JSON object with both optional sections present
pub fn full_forecast_json() -> &'static str {
    r#"{
        "overallScore": 75,
        "weatherIcon": "☀️",
        "weatherDescription": "Clear",
        "keywords": ["energy", "focus", "connection"],
        "timeBasedAdvice": {
            "morning": {"icon": "🌅", "title": "Morning (6-12)", "description": "Great window for exercise or demanding work."},
            "afternoon": {"icon": "☀️", "title": "Afternoon (12-18)", "description": "Focus peaks; take on creative work."},
            "evening": {"icon": "🌙", "title": "Evening (18-24)", "description": "Emotions are steady; spend time with people you care about."}
        },
        "dailyAdvice": "A balanced day overall; schedule the important things in the morning.",
        "precautions": "Mild fatigue possible in the afternoon, take breaks.",
        "encouragement": "Your energy lifts the people around you. Start the day with confidence!",
        "fashionRecommendation": {
            "style": "Casual chic",
            "colors": ["sky blue", "white", "beige"],
            "items": ["knit cardigan", "denim pants", "sneakers"],
            "description": "Comfortable but polished, matching today's bright energy."
        },
        "playlistRecommendation": {
            "mood": "Fresh and upbeat",
            "genres": ["pop", "indie", "acoustic"],
            "songs": [
                {"title": "Good Day", "artist": "IU"},
                {"title": "Spring Day", "artist": "BTS"}
            ],
            "description": "Songs to recharge a positive mood."
        }
    }"#
}
