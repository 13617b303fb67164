//! Coverage metrics and suggestion scoring
//!
//! - Category gap percentage, priority bucket and status
//! - Per-priority completion rates
//! - Priority-weighted completion score (weight = priority squared)
//! - Additive per-word suggestion score

use std::collections::HashSet;

use crate::config::ScoringConfig;
use crate::culture::is_culturally_important;
use crate::types::{CulturalContext, WordEntry};

use super::analyzer::{CategoryGapReport, CoverageStatus, GapPriority, PriorityGapReport};

/// `missing / available * 100`, 0 when nothing is available
pub fn gap_percentage(missing: usize, available: usize) -> f64 {
    if available == 0 {
        return 0.0;
    }
    (missing as f64 / available as f64 * 100.0).clamp(0.0, 100.0)
}

/// Bucket a category's missing words by urgency
///
/// Critical when any missing word is tagged `essential` or the average
/// missing priority is 8 or more; high from 6, medium from 4.
pub fn classify_gap_priority(missing: &[&WordEntry]) -> GapPriority {
    if missing.is_empty() {
        return GapPriority::Low;
    }
    if missing.iter().any(|w| w.has_tag("essential")) {
        return GapPriority::Critical;
    }

    let total: u32 = missing.iter().map(|w| u32::from(w.priority)).sum();
    let average = total as f64 / missing.len() as f64;

    if average >= 8.0 {
        GapPriority::Critical
    } else if average >= 6.0 {
        GapPriority::High
    } else if average >= 4.0 {
        GapPriority::Medium
    } else {
        GapPriority::Low
    }
}

/// Coverage label for a category gap: critical at 80%, needs-attention at 60%,
/// developing at 40%, good at 20%, excellent below
pub fn classify_status(gap_percentage: f64) -> CoverageStatus {
    if gap_percentage >= 80.0 {
        CoverageStatus::Critical
    } else if gap_percentage >= 60.0 {
        CoverageStatus::NeedsAttention
    } else if gap_percentage >= 40.0 {
        CoverageStatus::Developing
    } else if gap_percentage >= 20.0 {
        CoverageStatus::Good
    } else {
        CoverageStatus::Excellent
    }
}

/// Build the report for one category from its culturally-filtered words
pub fn category_report(
    category: &str,
    total_words: usize,
    available: &[WordEntry],
    known_labels: &HashSet<String>,
    config: &ScoringConfig,
) -> CategoryGapReport {
    let missing: Vec<&WordEntry> = available
        .iter()
        .filter(|w| !known_labels.contains(&w.label_key()))
        .collect();

    let gap = gap_percentage(missing.len(), available.len());

    // sort_by is stable, ties keep catalog order
    let mut ranked = missing.clone();
    ranked.sort_by(|a, b| b.priority.cmp(&a.priority));
    let top_missing = ranked
        .into_iter()
        .take(config.top_missing_per_category)
        .cloned()
        .collect();

    CategoryGapReport {
        category: category.to_string(),
        total_words,
        total_available: available.len(),
        user_has: available.len() - missing.len(),
        missing_count: missing.len(),
        gap_percentage: gap,
        priority: classify_gap_priority(&missing),
        top_missing,
        status: classify_status(gap),
    }
}

/// Build the report for one exact priority level
pub fn priority_report(
    level: u8,
    filtered: &[WordEntry],
    known_labels: &HashSet<String>,
    config: &ScoringConfig,
) -> PriorityGapReport {
    let at_level: Vec<&WordEntry> = filtered.iter().filter(|w| w.priority == level).collect();
    let missing: Vec<&WordEntry> = at_level
        .iter()
        .copied()
        .filter(|w| !known_labels.contains(&w.label_key()))
        .collect();

    let available = at_level.len();
    let user_has = available - missing.len();

    PriorityGapReport {
        priority: level,
        total_available: available,
        user_has,
        missing_count: missing.len(),
        missing: missing
            .into_iter()
            .take(config.priority_missing_cap)
            .cloned()
            .collect(),
        completion_rate: completion_rate(user_has, available),
    }
}

/// Rounded percentage covered, 100 when nothing is available
pub fn completion_rate(user_has: usize, available: usize) -> u8 {
    if available == 0 {
        return 100;
    }
    (user_has as f64 / available as f64 * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Priority-weighted completion score
///
/// Levels with no available words are skipped. Each remaining level weighs
/// `priority^2`, so high-priority coverage dominates. 0 when no level counts.
pub fn completion_score(priorities: &[PriorityGapReport]) -> u8 {
    let mut weighted = 0.0;
    let mut total_weight = 0.0;

    for report in priorities.iter().filter(|p| p.total_available > 0) {
        let weight = f64::from(report.priority).powi(2);
        weighted += weight * f64::from(report.completion_rate);
        total_weight += weight;
    }

    if total_weight == 0.0 {
        return 0;
    }
    (weighted / total_weight).round().clamp(0.0, 100.0) as u8
}

/// Additive suggestion score for one candidate word
pub fn suggestion_score(
    word: &WordEntry,
    category_gap: f64,
    context: &CulturalContext,
    config: &ScoringConfig,
) -> f64 {
    let mut score = f64::from(word.priority) * config.priority_weight;
    score += category_gap / 100.0 * config.category_gap_weight;
    score += config.frequency_bonus(word.frequency);

    if word.has_tag("essential") {
        score += config.essential_bonus;
    }
    if word.has_tag("universal") {
        score += config.universal_bonus;
    }
    if word.has_tag("communication") {
        score += config.communication_bonus;
    }
    if word.has_tag("social") {
        score += config.social_bonus;
    }
    if is_culturally_important(word, context) {
        score += config.cultural_bonus;
    }

    score
}
