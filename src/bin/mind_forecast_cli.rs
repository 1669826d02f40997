// ABOUTME: Command-line client for the Mind Forecast platform
// ABOUTME: Runs the biorhythm engine and forecast pipeline locally with file-backed persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mind Forecast

//! # Mind Forecast CLI
//!
//! Runs the same pipeline as the server, locally:
//!
//! - `biorhythm` prints a snapshot and the weekly trend (no network)
//! - `forecast` calls Gemini directly and renders the narrative report
//! - `prefs` shows or updates stored preferences
//! - `clear` deletes all saved data
//!
//! The saved birth date lives in a JSON document under the user data
//! directory and is reused by `forecast` when `--birth-date` is omitted.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use forecast_core::biorhythm::{
    calculate_biorhythm, calculate_overall_biorhythm, generate_weekly_biorhythm_around,
    interpret_biorhythm_level,
};
use forecast_core::models::{ForecastData, Theme};
use mind_forecast_server::forecast::{parse_birth_date, ForecastService};
use mind_forecast_server::llm::GeminiProvider;
use mind_forecast_server::storage::{FileStore, UserDataStore};

#[derive(Parser)]
#[command(name = "mind-forecast-cli")]
#[command(about = "Mind Forecast - biorhythm and daily mood forecast from the terminal")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the biorhythm snapshot and weekly trend for a birth date
    Biorhythm {
        /// Birth date as YYYY-MM-DD (defaults to the saved one)
        #[arg(long)]
        birth_date: Option<String>,
        /// Target date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Generate today's narrative mind forecast (requires GEMINI_API_KEY)
    Forecast {
        /// Birth date as YYYY-MM-DD (defaults to the saved one)
        #[arg(long)]
        birth_date: Option<String>,
        /// Save the birth date for future runs
        #[arg(long)]
        save: bool,
    },
    /// Show or update stored preferences
    Prefs {
        /// Set the theme: light, dark, or auto
        #[arg(long)]
        theme: Option<String>,
        /// Enable or disable notifications
        #[arg(long)]
        notifications: Option<bool>,
    },
    /// Delete the saved birth date and preferences
    Clear,
}

fn storage_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mind-forecast")
        .join("user.json")
}

fn resolve_birth_date(
    explicit: Option<String>,
    store: &UserDataStore<FileStore>,
) -> Result<String> {
    if let Some(birth_date) = explicit {
        return Ok(birth_date);
    }
    store
        .saved_birth_date()
        .ok_or_else(|| anyhow!("no saved birth date; pass --birth-date YYYY-MM-DD"))
}

fn print_biorhythm(birth: NaiveDate, date: NaiveDate) {
    let biorhythm = calculate_biorhythm(birth, date);
    let overall = calculate_overall_biorhythm(&biorhythm);

    println!("Biorhythm for {date}");
    for (name, value) in [
        ("Physical", biorhythm.physical),
        ("Emotional", biorhythm.emotional),
        ("Intellectual", biorhythm.intellectual),
    ] {
        let level = interpret_biorhythm_level(value);
        println!("  {name:<13} {value:>3}%  ({})", level.description());
    }
    println!("  {:<13} {overall:>3}%", "Overall");

    println!("\nWeekly trend");
    for point in generate_weekly_biorhythm_around(birth, date) {
        let marker = if point.date == date { "*" } else { " " };
        println!(
            " {marker} {:<8} P {:>3}%  E {:>3}%  I {:>3}%",
            point.label,
            point.biorhythm.physical,
            point.biorhythm.emotional,
            point.biorhythm.intellectual,
        );
    }
}

fn print_forecast(forecast: &ForecastData) {
    println!(
        "{} {} — overall {}/100",
        forecast.weather_icon, forecast.weather_description, forecast.overall_score
    );
    if !forecast.keywords.is_empty() {
        println!("Keywords: {}", forecast.keywords.join(", "));
    }

    let advice = &forecast.time_based_advice;
    for slot in [&advice.morning, &advice.afternoon, &advice.evening] {
        println!("\n{} {}\n  {}", slot.icon, slot.title, slot.description);
    }

    println!("\nAdvice: {}", forecast.daily_advice);
    println!("Watch out: {}", forecast.precautions);
    println!("\n{}", forecast.encouragement);

    if let Some(fashion) = &forecast.fashion_recommendation {
        println!("\nOutfit: {} — {}", fashion.style, fashion.description);
        println!("  Colors: {}", fashion.colors.join(", "));
        println!("  Items:  {}", fashion.items.join(", "));
    }
    if let Some(playlist) = &forecast.playlist_recommendation {
        println!("\nPlaylist ({}): {}", playlist.mood, playlist.description);
        for song in &playlist.songs {
            println!("  - {} — {}", song.title, song.artist);
        }
    }
}

fn parse_theme(raw: &str) -> Result<Theme> {
    match raw.to_lowercase().as_str() {
        "light" => Ok(Theme::Light),
        "dark" => Ok(Theme::Dark),
        "auto" => Ok(Theme::Auto),
        other => Err(anyhow!("unknown theme '{other}' (light, dark, auto)")),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let store = UserDataStore::new(FileStore::new(storage_path()));

    match args.command {
        Command::Biorhythm { birth_date, date } => {
            let birth = parse_birth_date(&resolve_birth_date(birth_date, &store)?)?;
            let date = match date.as_deref() {
                Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")?,
                None => Local::now().date_naive(),
            };
            print_biorhythm(birth, date);
        }
        Command::Forecast { birth_date, save } => {
            let birth_date = resolve_birth_date(birth_date, &store)?;
            parse_birth_date(&birth_date)?;

            if save {
                store.save_birth_date(&birth_date)?;
                println!("Saved birth date to {}\n", storage_path().display());
            }

            let provider = Arc::new(GeminiProvider::from_env()?);
            let service = ForecastService::new(provider);
            let forecast = service.generate_today(&birth_date).await?;
            print_forecast(&forecast);
        }
        Command::Prefs {
            theme,
            notifications,
        } => {
            let mut preferences = store.preferences();
            let mut changed = false;
            if let Some(raw) = theme {
                preferences.theme = parse_theme(&raw)?;
                changed = true;
            }
            if let Some(enabled) = notifications {
                preferences.notifications = enabled;
                changed = true;
            }
            if changed {
                store.save_preferences(&preferences)?;
            }
            println!(
                "notifications: {}  theme: {:?}",
                preferences.notifications, preferences.theme
            );
        }
        Command::Clear => {
            store.clear_saved_data()?;
            println!("Saved data cleared");
        }
    }

    Ok(())
}
