//! Vocabulary gap analysis system
//!
//! Compares a user's vocabulary against a reference word database: coverage per
//! category and per priority level, a priority-weighted completion score, and
//! ranked suggestions of what to learn next.

pub mod analyzer;
pub mod report;
pub mod scoring;
pub mod suggestions;

// Public exports
pub use analyzer::{
    AnalysisId, AnalysisResult, CategoryGapReport, CoverageStatus, GapAnalyzer, GapPriority,
    PriorityGapReport,
};
pub use report::render_report;
pub use scoring::{completion_score, suggestion_score};
pub use suggestions::{generate_reasoning, Suggestion};
