//! Ranked word suggestions with short justifications
//!
//! Candidates are the culturally-filtered reference words the user does not
//! know yet, scored by [`suggestion_score`] and explained by up to two clauses.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::ScoringConfig;
use crate::culture::is_culturally_important;
use crate::types::{CulturalContext, WordEntry};

use super::analyzer::CategoryGapReport;
use super::scoring::suggestion_score;

/// A reference word recommended to the user
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(flatten)]
    pub word: WordEntry,
    /// Additive recommendation score (higher = learn sooner)
    pub score: f64,
    /// Human-readable justification
    pub reasoning: String,
}

const MAX_REASONS: usize = 2;

/// Build the justification for a suggested word
pub fn generate_reasoning(word: &WordEntry, category_gap: f64, context: &CulturalContext) -> String {
    let mut reasons: Vec<String> = Vec::new();

    if word.priority >= 9 {
        reasons.push("Essential for basic communication".to_string());
    } else if word.priority >= 7 {
        reasons.push("Important for daily conversation".to_string());
    } else if word.priority >= 5 {
        reasons.push("Useful for expanded vocabulary".to_string());
    }

    if category_gap >= 70.0 {
        reasons.push(format!("Major gap in {} category", word.category));
    } else if category_gap >= 40.0 {
        reasons.push(format!("Filling gap in {}", word.category));
    }

    if word.has_tag("universal") {
        reasons.push("Universal concept across cultures".to_string());
    }

    if is_culturally_important(word, context) {
        reasons.push(format!("Culturally significant for {} context", context));
    }

    if reasons.is_empty() {
        return "Broadens general vocabulary".to_string();
    }
    reasons.truncate(MAX_REASONS);
    reasons.join("; ")
}

/// Score every unknown word and return the best `count`, highest first
///
/// Gap percentages come from `categories`; a category without a report
/// contributes no gap boost. Equal scores keep catalog order.
pub fn rank_suggestions(
    filtered: &[WordEntry],
    known_labels: &HashSet<String>,
    categories: &IndexMap<String, CategoryGapReport>,
    context: &CulturalContext,
    config: &ScoringConfig,
    count: usize,
) -> Vec<Suggestion> {
    let category_gap = |category: &str| {
        categories
            .get(category)
            .map(|report| report.gap_percentage)
            .unwrap_or(0.0)
    };

    let mut scored: Vec<(f64, &WordEntry)> = filtered
        .iter()
        .filter(|w| !known_labels.contains(&w.label_key()))
        .map(|w| (suggestion_score(w, category_gap(&w.category), context, config), w))
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.truncate(count);

    tracing::debug!("Ranked {} suggestions (requested {})", scored.len(), count);

    scored
        .into_iter()
        .map(|(score, word)| Suggestion {
            word: word.clone(),
            score,
            reasoning: generate_reasoning(word, category_gap(&word.category), context),
        })
        .collect()
}
