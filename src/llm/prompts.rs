// ABOUTME: Prompt construction for the daily mind forecast generator
// ABOUTME: Builds the system instruction and per-request prompt from a biorhythm snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mind Forecast

//! Prompt construction for forecast generation.
//!
//! The system instruction fixes the coach persona and the privacy policy:
//! the generator receives the birth date only so it can be told never to
//! reference it. The per-request prompt carries the biorhythm values and the
//! exact JSON shape the reply must embed; the reply is treated as free text
//! and the object is recovered by [`crate::forecast::extract_json_object`].

use forecast_core::models::BiorhythmData;

/// System instruction for the forecast generator
#[must_use]
pub const fn forecast_system_prompt() -> &'static str {
    "You are the 'Mind Forecast' AI coach. You write a warm, personalized \
     daily report from a user's biorhythm data.\n\
     \n\
     Privacy rules (absolute):\n\
     - Never include the birth date or any personally identifying information in your response\n\
     - Never mention the user's age or birth year\n\
     - Base everything only on the biorhythm analysis\n\
     \n\
     Guidelines:\n\
     1. Warm, friendly tone\n\
     2. Concrete, actionable advice\n\
     3. Reframe negatives positively\n\
     4. Focus on today only"
}

/// Build the per-request prompt from today's biorhythm snapshot
#[must_use]
pub fn build_forecast_prompt(biorhythm: &BiorhythmData) -> String {
    format!(
        "Today's biorhythm:\n\
         - Physical rhythm: {physical}%\n\
         - Emotional rhythm: {emotional}%\n\
         - Intellectual rhythm: {intellectual}%\n\
         \n\
         Respond with exactly one JSON object of this shape:\n\
         \n\
         {{\n\
           \"overallScore\": 75,\n\
           \"weatherIcon\": \"☀️\",\n\
           \"weatherDescription\": \"Clear\",\n\
           \"keywords\": [\"energy\", \"focus\", \"connection\"],\n\
           \"timeBasedAdvice\": {{\n\
             \"morning\": {{\"icon\": \"🌅\", \"title\": \"Morning (6-12)\", \"description\": \"...\"}},\n\
             \"afternoon\": {{\"icon\": \"☀️\", \"title\": \"Afternoon (12-18)\", \"description\": \"...\"}},\n\
             \"evening\": {{\"icon\": \"🌙\", \"title\": \"Evening (18-24)\", \"description\": \"...\"}}\n\
           }},\n\
           \"dailyAdvice\": \"...\",\n\
           \"precautions\": \"...\",\n\
           \"encouragement\": \"...\",\n\
           \"fashionRecommendation\": {{\n\
             \"style\": \"...\",\n\
             \"colors\": [\"...\"],\n\
             \"items\": [\"...\"],\n\
             \"description\": \"...\"\n\
           }},\n\
           \"playlistRecommendation\": {{\n\
             \"mood\": \"...\",\n\
             \"genres\": [\"...\"],\n\
             \"songs\": [{{\"title\": \"...\", \"artist\": \"...\"}}],\n\
             \"description\": \"...\"\n\
           }}\n\
         }}\n\
         \n\
         Notes:\n\
         - Fashion suggestions should be realistic, practical items\n\
         - The playlist should match the mood the biorhythm suggests\n\
         - Every recommendation must tie back to today's biorhythm values",
        physical = biorhythm.physical,
        emotional = biorhythm.emotional,
        intellectual = biorhythm.intellectual,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_carries_biorhythm_values() {
        let prompt = build_forecast_prompt(&BiorhythmData {
            physical: 37,
            emotional: 39,
            intellectual: 93,
        });
        assert!(prompt.contains("Physical rhythm: 37%"));
        assert!(prompt.contains("Emotional rhythm: 39%"));
        assert!(prompt.contains("Intellectual rhythm: 93%"));
        assert!(prompt.contains("\"overallScore\""));
    }

    #[test]
    fn system_prompt_forbids_identifying_output() {
        let prompt = forecast_system_prompt();
        assert!(prompt.contains("Never include the birth date"));
    }
}
