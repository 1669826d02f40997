// ABOUTME: Classic biorhythm sine-wave engine over calendar day offsets
// ABOUTME: Computes physical/emotional/intellectual percentages, overall score, and weekly trends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mind Forecast

//! # Biorhythm Engine
//!
//! The classic biorhythm model represents physical, emotional, and
//! intellectual state as sine waves of fixed period measured in whole days
//! since birth:
//!
//! ```text
//! value = round(((sin(2π·d / cycle) + 1) / 2) · 100)
//! ```
//!
//! where `d` is the whole-day offset between birth date and target date and
//! `cycle` is 23 (physical), 28 (emotional), or 33 (intellectual) days.
//! Every value is an integer in `[0, 100]`; a day offset of zero yields 50
//! for all three components (`sin(0) = 0`).
//!
//! The engine is pure and deterministic. It operates on typed
//! [`chrono::NaiveDate`] values only, so unparseable input cannot reach it;
//! date-string validation is the caller's responsibility.

use chrono::{Days, Local, NaiveDate};
use std::f64::consts::TAU;

use crate::models::BiorhythmData;

/// Physical rhythm cycle length in days
pub const PHYSICAL_CYCLE: u32 = 23;

/// Emotional rhythm cycle length in days
pub const EMOTIONAL_CYCLE: u32 = 28;

/// Intellectual rhythm cycle length in days
pub const INTELLECTUAL_CYCLE: u32 = 33;

/// Number of points in the weekly trend series (offsets -3..=+3)
const WEEKLY_POINTS: i64 = 7;

/// One biorhythm snapshot with the calendar date it belongs to, for trend
/// display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyBiorhythmPoint {
    /// Calendar date of this point
    pub date: NaiveDate,
    /// Human-readable date label (e.g. "May 15")
    pub label: String,
    /// Biorhythm values for that date
    pub biorhythm: BiorhythmData,
}

/// Qualitative classification of a single 0-100 biorhythm value
///
/// Boundaries are closed on the lower end: 70 and 40 belong to the higher
/// tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiorhythmLevel {
    /// Value below 40
    Low,
    /// Value in 40..=69
    Medium,
    /// Value of 70 or above
    High,
}

impl BiorhythmLevel {
    /// Stable identifier for the level
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Fixed descriptive label for the level
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Low => "Recovering",
            Self::Medium => "Steady",
            Self::High => "Peaking",
        }
    }
}

/// Evaluate one cycle at the given whole-day offset, rescaled to `[0, 100]`
/// and rounded half-up
fn cycle_value(day_offset: i64, cycle: u32) -> u8 {
    let phase = (TAU * day_offset as f64) / f64::from(cycle);
    let value = ((phase.sin() + 1.0) / 2.0) * 100.0;
    value.round() as u8
}

/// Compute the biorhythm snapshot for `target` relative to `birth`
///
/// The day offset is the signed count of whole days between the two dates;
/// targets before the birth date are accepted and follow the same sine
/// curves backwards.
#[must_use]
pub fn calculate_biorhythm(birth: NaiveDate, target: NaiveDate) -> BiorhythmData {
    let day_offset = target.signed_duration_since(birth).num_days();

    BiorhythmData {
        physical: cycle_value(day_offset, PHYSICAL_CYCLE),
        emotional: cycle_value(day_offset, EMOTIONAL_CYCLE),
        intellectual: cycle_value(day_offset, INTELLECTUAL_CYCLE),
    }
}

/// Round of the arithmetic mean of the three components
#[must_use]
pub fn calculate_overall_biorhythm(biorhythm: &BiorhythmData) -> u8 {
    let sum = u32::from(biorhythm.physical)
        + u32::from(biorhythm.emotional)
        + u32::from(biorhythm.intellectual);
    (f64::from(sum) / 3.0).round() as u8
}

/// Classify a single 0-100 value into a [`BiorhythmLevel`]
#[must_use]
pub const fn interpret_biorhythm_level(value: u8) -> BiorhythmLevel {
    if value >= 70 {
        BiorhythmLevel::High
    } else if value >= 40 {
        BiorhythmLevel::Medium
    } else {
        BiorhythmLevel::Low
    }
}

/// Seven-point trend series centered on today's local date
///
/// Offsets -3..=+3 relative to the current date at call time, oldest first.
/// Materialized eagerly; restartable (no internal state).
#[must_use]
pub fn generate_weekly_biorhythm(birth: NaiveDate) -> Vec<WeeklyBiorhythmPoint> {
    generate_weekly_biorhythm_around(birth, Local::now().date_naive())
}

/// Seven-point trend series centered on an explicit date
///
/// Same sequence as [`generate_weekly_biorhythm`] with the center date fixed,
/// so results are deterministic under test.
#[must_use]
pub fn generate_weekly_biorhythm_around(
    birth: NaiveDate,
    center: NaiveDate,
) -> Vec<WeeklyBiorhythmPoint> {
    (0..WEEKLY_POINTS)
        .filter_map(|i| {
            let offset = i - WEEKLY_POINTS / 2;
            let date = if offset < 0 {
                center.checked_sub_days(Days::new(offset.unsigned_abs()))
            } else {
                center.checked_add_days(Days::new(offset.unsigned_abs()))
            }?;
            Some(WeeklyBiorhythmPoint {
                date,
                label: date.format("%b %-d").to_string(),
                biorhythm: calculate_biorhythm(birth, date),
            })
        })
        .collect()
}
