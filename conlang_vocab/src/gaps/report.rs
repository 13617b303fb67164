//! Plain-text rendering of an analysis

use super::analyzer::{AnalysisResult, CategoryGapReport};

/// Lowest priority level listed in the report
const REPORT_MIN_PRIORITY: u8 = 7;
const REPORT_CATEGORY_COUNT: usize = 5;

/// Render a multi-line summary of `result`
///
/// Header with timestamp and counts, the completion score, completion for
/// priority levels 10 down to 7 that have available words, and the categories
/// with the largest gaps.
pub fn render_report(result: &AnalysisResult) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("Vocabulary Gap Analysis Report".to_string());
    lines.push("==============================".to_string());
    lines.push(format!(
        "Generated: {}",
        result.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    lines.push(format!("Cultural context: {}", result.cultural_context));
    lines.push(format!("User vocabulary: {} words", result.user_word_count));
    lines.push(format!(
        "Reference words: {} available of {} total",
        result.available_words, result.total_reference_words
    ));
    lines.push(String::new());
    lines.push(format!("Overall completion score: {}%", result.completion_score));
    lines.push(String::new());

    lines.push("Priority coverage:".to_string());
    for report in result
        .priorities
        .iter()
        .filter(|p| p.priority >= REPORT_MIN_PRIORITY && p.total_available > 0)
    {
        lines.push(format!(
            "  Priority {:>2}: {:>3}% complete ({}/{} words)",
            report.priority, report.completion_rate, report.user_has, report.total_available
        ));
    }
    lines.push(String::new());

    lines.push("Largest category gaps:".to_string());
    for report in largest_gaps(result, REPORT_CATEGORY_COUNT) {
        lines.push(format!(
            "  {}: {:.0}% missing ({}/{}) - {}",
            report.category,
            report.gap_percentage,
            report.missing_count,
            report.total_available,
            report.status
        ));
    }

    lines.join("\n")
}

/// Categories by descending gap percentage, catalog order on ties
fn largest_gaps(result: &AnalysisResult, count: usize) -> Vec<&CategoryGapReport> {
    let mut reports: Vec<&CategoryGapReport> = result.categories.values().collect();
    reports.sort_by(|a, b| b.gap_percentage.total_cmp(&a.gap_percentage));
    reports.truncate(count);
    reports
}
