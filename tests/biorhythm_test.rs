// ABOUTME: Integration tests for the biorhythm engine
// ABOUTME: Periodicity, value ranges, level boundaries, and the analytic birthday scenario
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mind Forecast

#![allow(missing_docs)]
// Allow unwrap in tests - tests should panic on failure
#![allow(clippy::unwrap_used)]

use chrono::{Days, NaiveDate};

use forecast_core::biorhythm::{
    calculate_biorhythm, calculate_overall_biorhythm, generate_weekly_biorhythm,
    generate_weekly_biorhythm_around, interpret_biorhythm_level, BiorhythmLevel, EMOTIONAL_CYCLE,
    INTELLECTUAL_CYCLE, PHYSICAL_CYCLE,
};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn add_days(base: NaiveDate, days: u64) -> NaiveDate {
    base.checked_add_days(Days::new(days)).unwrap()
}

#[test]
fn each_cycle_is_periodic() {
    let birth = date("1990-05-15");
    let reference = calculate_biorhythm(birth, birth);

    for n in 1..=10u64 {
        let physical = calculate_biorhythm(birth, add_days(birth, n * u64::from(PHYSICAL_CYCLE)));
        assert_eq!(physical.physical, reference.physical, "physical, n={n}");

        let emotional = calculate_biorhythm(birth, add_days(birth, n * u64::from(EMOTIONAL_CYCLE)));
        assert_eq!(emotional.emotional, reference.emotional, "emotional, n={n}");

        let intellectual =
            calculate_biorhythm(birth, add_days(birth, n * u64::from(INTELLECTUAL_CYCLE)));
        assert_eq!(
            intellectual.intellectual, reference.intellectual,
            "intellectual, n={n}"
        );
    }
}

#[test]
fn birth_day_itself_is_all_fifty() {
    let birth = date("2000-02-29");
    let biorhythm = calculate_biorhythm(birth, birth);
    assert_eq!(
        (biorhythm.physical, biorhythm.emotional, biorhythm.intellectual),
        (50, 50, 50)
    );
}

#[test]
fn values_are_percentages_for_any_offset() {
    let birth = date("1975-01-01");
    for offset in 0..1000 {
        let biorhythm = calculate_biorhythm(birth, add_days(birth, offset));
        assert!(biorhythm.physical <= 100);
        assert!(biorhythm.emotional <= 100);
        assert!(biorhythm.intellectual <= 100);
    }
}

#[test]
fn thirty_fourth_birthday_matches_analytic_values() {
    // 1990-05-15 -> 2024-05-15 is 12419 whole days (34 years including 9
    // leap days). Analytically:
    //   physical:     12419 mod 23 = 22 -> sin(2π·22/23) ≈ -0.2698 -> 37
    //   emotional:    12419 mod 28 = 15 -> sin(2π·15/28) ≈ -0.2225 -> 39
    //   intellectual: 12419 mod 33 = 11 -> sin(2π·11/33) ≈  0.8660 -> 93
    let birth = date("1990-05-15");
    let target = date("2024-05-15");
    assert_eq!(target.signed_duration_since(birth).num_days(), 12419);

    let biorhythm = calculate_biorhythm(birth, target);
    assert_eq!(biorhythm.physical, 37);
    assert_eq!(biorhythm.emotional, 39);
    assert_eq!(biorhythm.intellectual, 93);
    assert_eq!(calculate_overall_biorhythm(&biorhythm), 56);
}

#[test]
fn overall_score_is_round_of_mean() {
    let biorhythm = calculate_biorhythm(date("1990-05-15"), date("1990-05-15"));
    assert_eq!(calculate_overall_biorhythm(&biorhythm), 50);
}

#[test]
fn level_classification_boundaries() {
    assert_eq!(interpret_biorhythm_level(70), BiorhythmLevel::High);
    assert_eq!(interpret_biorhythm_level(69), BiorhythmLevel::Medium);
    assert_eq!(interpret_biorhythm_level(40), BiorhythmLevel::Medium);
    assert_eq!(interpret_biorhythm_level(39), BiorhythmLevel::Low);
}

#[test]
fn weekly_series_is_seven_ascending_days_around_center() {
    let birth = date("1990-05-15");
    let center = date("2024-05-15");
    let series = generate_weekly_biorhythm_around(birth, center);

    assert_eq!(series.len(), 7);
    for (i, point) in series.iter().enumerate() {
        let expected = add_days(date("2024-05-12"), i as u64);
        assert_eq!(point.date, expected);
        assert_eq!(point.biorhythm, calculate_biorhythm(birth, point.date));
    }
    // Center point carries the analytic birthday values
    assert_eq!(series[3].biorhythm.physical, 37);
}

#[test]
fn weekly_series_without_explicit_center_uses_seven_consecutive_days() {
    let series = generate_weekly_biorhythm(date("1990-05-15"));
    assert_eq!(series.len(), 7);
    for window in series.windows(2) {
        assert_eq!(
            window[1].date.signed_duration_since(window[0].date).num_days(),
            1
        );
    }
}
