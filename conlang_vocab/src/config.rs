//! Scoring configuration for suggestion ranking and report limits

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::types::Frequency;

/// Weights and limits used by the gap analyzer
///
/// Every score term is additive. `Default` holds the stock weights; a JSON
/// file only needs the fields it overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Multiplier applied to a word's priority (default: 10)
    pub priority_weight: f64,
    /// Points at a 100% category gap, scaled linearly (default: 30)
    pub category_gap_weight: f64,
    pub very_high_frequency_bonus: f64,
    pub high_frequency_bonus: f64,
    pub medium_frequency_bonus: f64,
    pub essential_bonus: f64,
    pub universal_bonus: f64,
    pub communication_bonus: f64,
    pub social_bonus: f64,
    /// Bonus for words tied to the active cultural context (default: 15)
    pub cultural_bonus: f64,
    /// Suggestions produced by a full analysis (default: 20)
    pub default_suggestion_count: usize,
    /// Stock count for suggestions by category (default: 10)
    pub category_suggestion_count: usize,
    /// Stock priority floor for suggestions by priority (default: 7)
    pub priority_suggestion_min: u8,
    /// Stock count for suggestions by priority (default: 15)
    pub priority_suggestion_count: usize,
    /// Missing words listed per category report (default: 5)
    pub top_missing_per_category: usize,
    /// Missing words listed per priority report (default: 10)
    pub priority_missing_cap: usize,
    /// Maximum entries returned as critical gaps (default: 10)
    pub critical_gap_limit: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            priority_weight: 10.0,
            category_gap_weight: 30.0,
            very_high_frequency_bonus: 20.0,
            high_frequency_bonus: 10.0,
            medium_frequency_bonus: 5.0,
            essential_bonus: 25.0,
            universal_bonus: 15.0,
            communication_bonus: 10.0,
            social_bonus: 8.0,
            cultural_bonus: 15.0,
            default_suggestion_count: 20,
            category_suggestion_count: 10,
            priority_suggestion_min: 7,
            priority_suggestion_count: 15,
            top_missing_per_category: 5,
            priority_missing_cap: 10,
            critical_gap_limit: 10,
        }
    }
}

impl ScoringConfig {
    /// Load a config from a JSON file, falling back to defaults for absent fields
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Parse a config from JSON text
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Score bonus for a usage frequency (0 for low)
    pub fn frequency_bonus(&self, frequency: Frequency) -> f64 {
        match frequency {
            Frequency::VeryHigh => self.very_high_frequency_bonus,
            Frequency::High => self.high_frequency_bonus,
            Frequency::Medium => self.medium_frequency_bonus,
            Frequency::Low => 0.0,
        }
    }
}
