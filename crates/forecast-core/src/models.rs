// ABOUTME: Shared wire data models for the Mind Forecast platform
// ABOUTME: Forecast request/response structures, saved user data, and preferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mind Forecast

//! Wire data models shared by the HTTP API, forecast service, and CLI.
//!
//! Everything here serializes camelCase to match the JSON contract consumed
//! by the browser UI. `ForecastData` is externally supplied (produced by the
//! narrative generator); its optional sections may be absent and consumers
//! must degrade gracefully by omitting the corresponding output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Three biorhythm percentages, each an integer in `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiorhythmData {
    /// Physical rhythm (23-day cycle)
    pub physical: u8,
    /// Emotional rhythm (28-day cycle)
    pub emotional: u8,
    /// Intellectual rhythm (33-day cycle)
    pub intellectual: u8,
}

/// Payload sent to the forecast generation endpoint
///
/// The birth date is included only so the generator can be instructed never
/// to reference it in output; the narrative itself is derived from the
/// biorhythm values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRequest {
    /// Birth date as a `YYYY-MM-DD` string
    pub birth_date: String,
    /// Today's biorhythm snapshot
    pub biorhythm: BiorhythmData,
}

/// One advice slot for a time of day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceSlot {
    /// Emoji or short icon string
    pub icon: String,
    /// Slot title (e.g. "Morning (6-12)")
    pub title: String,
    /// Free-text advice
    pub description: String,
}

/// Exactly three named advice slots
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeBasedAdvice {
    /// Morning slot
    pub morning: AdviceSlot,
    /// Afternoon slot
    pub afternoon: AdviceSlot,
    /// Evening slot
    pub evening: AdviceSlot,
}

/// Optional outfit suggestion section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FashionRecommendation {
    /// Overall style name
    pub style: String,
    /// Suggested colors
    pub colors: Vec<String>,
    /// Suggested clothing items
    pub items: Vec<String>,
    /// Free-text description
    pub description: String,
}

/// One playlist entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Song {
    /// Song title
    pub title: String,
    /// Performing artist
    pub artist: String,
}

/// Optional playlist suggestion section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistRecommendation {
    /// Playlist mood description
    pub mood: String,
    /// Suggested genres
    pub genres: Vec<String>,
    /// Suggested songs
    pub songs: Vec<Song>,
    /// Free-text description
    pub description: String,
}

/// Narrative forecast produced by the generation service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastData {
    /// Overall mood score, 0-100
    pub overall_score: u8,
    /// Short icon standing in for the overall mood category
    pub weather_icon: String,
    /// Short description of the overall mood category
    pub weather_description: String,
    /// Ordered short tag strings
    pub keywords: Vec<String>,
    /// Morning/afternoon/evening advice slots
    pub time_based_advice: TimeBasedAdvice,
    /// Free-text daily advice
    pub daily_advice: String,
    /// Free-text precautions
    pub precautions: String,
    /// Free-text encouragement
    pub encouragement: String,
    /// Optional outfit suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fashion_recommendation: Option<FashionRecommendation>,
    /// Optional playlist suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playlist_recommendation: Option<PlaylistRecommendation>,
}

/// Birth date record owned by local persistent storage
///
/// Created when the user opts in to saving, deleted on explicit clear, and
/// never sent to any remote endpoint beyond the date-derived biorhythm
/// numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedUserData {
    /// Birth date as a `YYYY-MM-DD` string
    pub birth_date: String,
    /// When the record was saved
    pub saved_at: DateTime<Utc>,
}

/// UI theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme
    Light,
    /// Dark theme
    Dark,
    /// Follow the platform setting
    #[default]
    Auto,
}

/// Stored user preferences, defaulting to notifications on and auto theme
/// when absent or unparseable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Whether daily notifications are enabled
    pub notifications: bool,
    /// UI theme
    pub theme: Theme,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            notifications: true,
            theme: Theme::Auto,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn forecast_request_uses_camel_case() {
        let request = ForecastRequest {
            birth_date: "1990-05-15".into(),
            biorhythm: BiorhythmData {
                physical: 37,
                emotional: 39,
                intellectual: 93,
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["birthDate"], "1990-05-15");
        assert_eq!(json["biorhythm"]["physical"], 37);
    }

    #[test]
    fn forecast_data_optional_sections_may_be_absent() {
        let json = serde_json::json!({
            "overallScore": 75,
            "weatherIcon": "☀️",
            "weatherDescription": "Clear",
            "keywords": ["energy", "focus"],
            "timeBasedAdvice": {
                "morning": {"icon": "🌅", "title": "Morning", "description": "Go for a run."},
                "afternoon": {"icon": "☀️", "title": "Afternoon", "description": "Deep work."},
                "evening": {"icon": "🌙", "title": "Evening", "description": "Wind down."}
            },
            "dailyAdvice": "A balanced day.",
            "precautions": "Take breaks.",
            "encouragement": "You have got this."
        });
        let forecast: ForecastData = serde_json::from_value(json).unwrap();
        assert_eq!(forecast.overall_score, 75);
        assert!(forecast.fashion_recommendation.is_none());
        assert!(forecast.playlist_recommendation.is_none());
    }

    #[test]
    fn default_preferences_are_notifications_on_auto_theme() {
        let preferences = UserPreferences::default();
        assert!(preferences.notifications);
        assert_eq!(preferences.theme, Theme::Auto);
    }
}
