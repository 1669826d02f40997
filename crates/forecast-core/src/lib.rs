// ABOUTME: Foundation crate for the Mind Forecast platform
// ABOUTME: Biorhythm engine and shared wire models used by server and CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mind Forecast

//! # Forecast Core
//!
//! Dependency-light foundation crate for the Mind Forecast platform:
//!
//! - **biorhythm**: the closed-form sine-wave biorhythm engine
//! - **models**: wire data structures shared by the HTTP API and CLI
//!
//! The engine is pure and total over typed calendar dates; all date-string
//! validation and every fallible operation lives in the server crate.

/// Biorhythm computation: per-cycle sine values, overall score, level
/// interpretation, and the 7-day trend series
pub mod biorhythm;

/// Shared wire data models (forecast request/response, saved user data,
/// preferences)
pub mod models;

pub use biorhythm::{
    calculate_biorhythm, calculate_overall_biorhythm, generate_weekly_biorhythm,
    generate_weekly_biorhythm_around, interpret_biorhythm_level, BiorhythmLevel,
    WeeklyBiorhythmPoint, EMOTIONAL_CYCLE, INTELLECTUAL_CYCLE, PHYSICAL_CYCLE,
};
pub use models::{
    AdviceSlot, BiorhythmData, FashionRecommendation, ForecastData, ForecastRequest,
    PlaylistRecommendation, SavedUserData, Song, Theme, TimeBasedAdvice, UserPreferences,
};
