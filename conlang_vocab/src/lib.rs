//! Conlang Vocabulary Tools
//!
//! Helps constructed-language authors decide which words to coin next:
//! - Gap Analysis: coverage of a reference catalog per category and priority
//! - Suggestions: ranked, explained recommendations for missing words
//! - Reports: plain-text and JSON summaries
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use conlang_vocab::{CulturalContext, GapAnalyzer, InMemoryWordDatabase};
//!
//! fn main() -> conlang_vocab::Result<()> {
//!     let db = InMemoryWordDatabase::from_json_file("words.json")?;
//!     let vocabulary = conlang_vocab::load_user_vocabulary("my-language.json")?;
//!
//!     let mut analyzer = GapAnalyzer::new();
//!     analyzer.initialize(Arc::new(db), vocabulary, CulturalContext::from("maritime"));
//!
//!     let result = analyzer.analyze_vocabulary_gaps()?;
//!     println!("Completion: {}%", result.completion_score);
//!     for suggestion in analyzer.generate_smart_suggestions(5)? {
//!         println!("{} - {}", suggestion.word.english, suggestion.reasoning);
//!     }
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod culture;
pub mod database;
pub mod errors;
pub mod gaps;
pub mod types;

// Re-export main types
pub use config::ScoringConfig;

pub use culture::{associated_tags, filter_by_culture, is_culturally_important};

pub use database::{load_user_vocabulary, DatabaseMetadata, InMemoryWordDatabase, WordDatabase};

pub use errors::{Result, VocabError};

pub use gaps::{
    AnalysisId, AnalysisResult, CategoryGapReport, CoverageStatus, GapAnalyzer, GapPriority,
    PriorityGapReport, Suggestion,
};

pub use types::{
    CulturalContext, CulturalScope, Frequency, UserVocabularyEntry, WordEntry, MAX_PRIORITY,
    MIN_PRIORITY,
};

/// Version of the vocabulary tools crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the vocabulary tools system
pub fn init() {
    tracing::info!("Conlang Vocabulary Tools v{}", VERSION);
}
