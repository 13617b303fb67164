//! Vocabulary gap analyzer core types
//!
//! Provides the report data structures and [`GapAnalyzer`], which compares a
//! user's vocabulary against a reference database and ranks what to learn next.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::ScoringConfig;
use crate::culture;
use crate::database::WordDatabase;
use crate::errors::{Result, VocabError};
use crate::types::{
    normalize_label, CulturalContext, UserVocabularyEntry, WordEntry, MAX_PRIORITY, MIN_PRIORITY,
};

use super::suggestions::{rank_suggestions, Suggestion};
use super::{report, scoring};

/// Unique identifier for one analysis run
///
/// UUID v4 wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalysisId(uuid::Uuid);

impl AnalysisId {
    /// Create a new random AnalysisId
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for AnalysisId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AnalysisId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How urgently a category's missing words need attention
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GapPriority {
    Low,
    Medium,
    High,
    /// Missing essential words, or missing words averaging priority 8+
    Critical,
}

/// Qualitative coverage of a category, derived from its gap percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CoverageStatus {
    /// 80% or more missing
    Critical,
    NeedsAttention,
    Developing,
    Good,
    /// Less than 20% missing
    Excellent,
}

impl std::fmt::Display for GapPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GapPriority::Low => "low",
            GapPriority::Medium => "medium",
            GapPriority::High => "high",
            GapPriority::Critical => "critical",
        };
        f.write_str(s)
    }
}

impl std::fmt::Display for CoverageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CoverageStatus::Critical => "critical",
            CoverageStatus::NeedsAttention => "needs-attention",
            CoverageStatus::Developing => "developing",
            CoverageStatus::Good => "good",
            CoverageStatus::Excellent => "excellent",
        };
        f.write_str(s)
    }
}

/// Coverage of one semantic category
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryGapReport {
    pub category: String,
    /// Words in the category before cultural filtering
    pub total_words: usize,
    /// Words in the category that pass the cultural filter
    pub total_available: usize,
    pub user_has: usize,
    pub missing_count: usize,
    /// `missing / available * 100`, 0 when nothing is available
    pub gap_percentage: f64,
    pub priority: GapPriority,
    /// Highest-priority missing words, stable on ties
    pub top_missing: Vec<WordEntry>,
    pub status: CoverageStatus,
}

/// Coverage of one priority level
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriorityGapReport {
    pub priority: u8,
    pub total_available: usize,
    pub user_has: usize,
    pub missing_count: usize,
    /// Missing words at this level (capped)
    pub missing: Vec<WordEntry>,
    /// Rounded percentage covered, 100 when nothing is available
    pub completion_rate: u8,
}

/// Output of a full gap analysis
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub id: AnalysisId,
    pub timestamp: DateTime<Utc>,
    /// Reference words before cultural filtering
    pub total_reference_words: usize,
    /// Reference words after cultural filtering
    pub available_words: usize,
    pub user_word_count: usize,
    pub cultural_context: CulturalContext,
    /// Category reports in catalog order
    pub categories: IndexMap<String, CategoryGapReport>,
    /// Priority reports from 10 down to 1
    pub priorities: Vec<PriorityGapReport>,
    pub suggestions: Vec<Suggestion>,
    /// Priority-weighted coverage, 0 to 100
    pub completion_score: u8,
}

impl AnalysisResult {
    /// Report for one category, if it exists
    pub fn category(&self, name: &str) -> Option<&CategoryGapReport> {
        self.categories.get(name)
    }

    /// Report for one priority level (1..=10)
    pub fn priority(&self, level: u8) -> Option<&PriorityGapReport> {
        self.priorities.iter().find(|p| p.priority == level)
    }
}

/// Vocabulary gap analyzer
///
/// Main API for comparing a user vocabulary with a reference database.
/// The most recent [`AnalysisResult`] is cached until the next analysis or
/// re-initialization. The cache is not guarded against concurrent mutation;
/// one logical caller per instance.
pub struct GapAnalyzer {
    /// Reference catalog (read-only)
    database: Option<Arc<dyn WordDatabase>>,
    /// Snapshot of the user's words
    user_vocabulary: Vec<UserVocabularyEntry>,
    /// Normalized english labels of `user_vocabulary`
    known_labels: HashSet<String>,
    cultural_context: CulturalContext,
    scoring_config: ScoringConfig,
    last_result: Option<AnalysisResult>,
}

impl GapAnalyzer {
    /// Create an analyzer with no database and default scoring
    pub fn new() -> Self {
        Self {
            database: None,
            user_vocabulary: Vec::new(),
            known_labels: HashSet::new(),
            cultural_context: CulturalContext::All,
            scoring_config: ScoringConfig::default(),
            last_result: None,
        }
    }

    /// Set custom scoring configuration (builder pattern)
    pub fn with_scoring_config(mut self, config: ScoringConfig) -> Self {
        self.scoring_config = config;
        self.last_result = None;
        self
    }

    /// Replace the database, user vocabulary and cultural context.
    ///
    /// Drops any cached result; no analysis runs until requested.
    pub fn initialize(
        &mut self,
        database: Arc<dyn WordDatabase>,
        user_vocabulary: Vec<UserVocabularyEntry>,
        cultural_context: CulturalContext,
    ) {
        self.known_labels = user_vocabulary
            .iter()
            .map(|entry| normalize_label(&entry.english))
            .collect();
        self.database = Some(database);
        self.user_vocabulary = user_vocabulary;
        self.cultural_context = cultural_context;
        self.last_result = None;
    }

    /// Whether a reference database has been supplied
    pub fn is_initialized(&self) -> bool {
        self.database.is_some()
    }

    /// Active culture filter
    pub fn cultural_context(&self) -> &CulturalContext {
        &self.cultural_context
    }

    /// Vocabulary snapshot taken at initialization
    pub fn user_vocabulary(&self) -> &[UserVocabularyEntry] {
        &self.user_vocabulary
    }

    /// Weights and limits in use
    pub fn scoring_config(&self) -> &ScoringConfig {
        &self.scoring_config
    }

    /// The cached result of the most recent analysis, if any
    pub fn last_result(&self) -> Option<&AnalysisResult> {
        self.last_result.as_ref()
    }

    /// Case-insensitive check against the user vocabulary
    pub fn user_has_word(&self, english: &str) -> bool {
        self.known_labels.contains(&normalize_label(english))
    }

    /// Keep the words relevant under the active context, in order
    pub fn filter_by_culture(&self, words: &[WordEntry]) -> Vec<WordEntry> {
        culture::filter_by_culture(words, &self.cultural_context)
    }

    /// Whether `word` carries a tag tied to the active context
    pub fn is_culturally_important(&self, word: &WordEntry) -> bool {
        culture::is_culturally_important(word, &self.cultural_context)
    }

    /// Run a full gap analysis and cache the result
    ///
    /// Fails with [`VocabError::UninitializedDatabase`] when no database was
    /// supplied.
    pub fn analyze_vocabulary_gaps(&mut self) -> Result<&AnalysisResult> {
        let database = Arc::clone(self.database()?);

        let all_words = database.all_words();
        let filtered = self.filter_by_culture(&all_words);
        tracing::debug!(
            "Cultural filter '{}' kept {} of {} reference words",
            self.cultural_context,
            filtered.len(),
            all_words.len()
        );

        let categories = self.category_reports(&*database);
        let priorities = self.priority_reports(&filtered);
        let suggestions = rank_suggestions(
            &filtered,
            &self.known_labels,
            &categories,
            &self.cultural_context,
            &self.scoring_config,
            self.scoring_config.default_suggestion_count,
        );
        let completion_score = scoring::completion_score(&priorities);

        tracing::info!(
            "Vocabulary analysis: {} user words, {} available reference words, completion {}%",
            self.user_vocabulary.len(),
            filtered.len(),
            completion_score
        );

        let result = AnalysisResult {
            id: AnalysisId::new(),
            timestamp: Utc::now(),
            total_reference_words: all_words.len(),
            available_words: filtered.len(),
            user_word_count: self.user_vocabulary.len(),
            cultural_context: self.cultural_context.clone(),
            categories,
            priorities,
            suggestions,
            completion_score,
        };

        let cached: &AnalysisResult = self.last_result.insert(result);
        Ok(cached)
    }

    /// Return the cached result, running an analysis first if none exists
    pub fn cached_or_analyze(&mut self) -> Result<&AnalysisResult> {
        if self.last_result.is_none() {
            self.analyze_vocabulary_gaps()?;
        }
        self.last_result.as_ref().ok_or(VocabError::UninitializedDatabase)
    }

    /// Rank words the user does not know yet, best first
    ///
    /// Full analyses use [`ScoringConfig::default_suggestion_count`] (20).
    ///
    /// Category gap boosts come from the cached analysis. Without one, the
    /// category reports are computed on the spot (and not cached).
    pub fn generate_smart_suggestions(&self, count: usize) -> Result<Vec<Suggestion>> {
        let database = self.database()?;
        let filtered = self.filter_by_culture(&database.all_words());

        let fresh;
        let categories = match &self.last_result {
            Some(result) => &result.categories,
            None => {
                fresh = self.category_reports(&**database);
                &fresh
            }
        };

        Ok(rank_suggestions(
            &filtered,
            &self.known_labels,
            categories,
            &self.cultural_context,
            &self.scoring_config,
            count,
        ))
    }

    /// Cached suggestions belonging to `category`
    ///
    /// Callers without a preference pass
    /// [`ScoringConfig::category_suggestion_count`] (10).
    pub fn get_suggestions_by_category(
        &mut self,
        category: &str,
        count: usize,
    ) -> Result<Vec<Suggestion>> {
        self.get_suggestions_filtered(Some(category), None, count)
    }

    /// Cached suggestions at or above `min_priority`
    ///
    /// Stock arguments are [`ScoringConfig::priority_suggestion_min`] (7) and
    /// [`ScoringConfig::priority_suggestion_count`] (15).
    pub fn get_suggestions_by_priority(
        &mut self,
        min_priority: u8,
        count: usize,
    ) -> Result<Vec<Suggestion>> {
        self.get_suggestions_filtered(None, Some(min_priority), count)
    }

    /// Cached suggestions matching every given filter, at most `count`
    ///
    /// Filters apply before the count, so a high-scoring word outside the
    /// filters never takes a slot.
    pub fn get_suggestions_filtered(
        &mut self,
        category: Option<&str>,
        min_priority: Option<u8>,
        count: usize,
    ) -> Result<Vec<Suggestion>> {
        let result = self.cached_or_analyze()?;
        Ok(result
            .suggestions
            .iter()
            .filter(|s| category.map_or(true, |c| s.word.category == c))
            .filter(|s| min_priority.map_or(true, |p| s.word.priority >= p))
            .take(count)
            .cloned()
            .collect())
    }

    /// Most urgent missing words, highest priority first
    ///
    /// Union of up to 5 missing words from each of priority levels 10 and 9
    /// and up to 3 top-missing words from each critical category,
    /// de-duplicated by english label.
    pub fn get_critical_gaps(&mut self) -> Result<Vec<WordEntry>> {
        let limit = self.scoring_config.critical_gap_limit;
        let result = self.cached_or_analyze()?;

        let mut gaps: Vec<WordEntry> = Vec::new();
        for report in result.priorities.iter().filter(|p| p.priority >= 9) {
            gaps.extend(report.missing.iter().take(5).cloned());
        }
        for report in result
            .categories
            .values()
            .filter(|c| c.priority == GapPriority::Critical)
        {
            gaps.extend(report.top_missing.iter().take(3).cloned());
        }

        let mut seen = HashSet::new();
        gaps.retain(|w| seen.insert(w.label_key()));
        gaps.sort_by(|a, b| b.priority.cmp(&a.priority));
        gaps.truncate(limit);

        Ok(gaps)
    }

    /// Human-readable multi-line summary of the cached analysis
    pub fn generate_analysis_report(&mut self) -> Result<String> {
        let result = self.cached_or_analyze()?;
        Ok(report::render_report(result))
    }

    fn database(&self) -> Result<&Arc<dyn WordDatabase>> {
        self.database.as_ref().ok_or(VocabError::UninitializedDatabase)
    }

    /// Category reports in catalog order, then any unlisted categories
    fn category_reports(&self, database: &dyn WordDatabase) -> IndexMap<String, CategoryGapReport> {
        let mut names = database.categories();
        for word in database.all_words() {
            if !names.contains(&word.category) {
                tracing::warn!(
                    "Category '{}' of '{}' is missing from the catalog metadata",
                    word.category,
                    word.english
                );
                names.push(word.category);
            }
        }

        let mut reports = IndexMap::new();
        for name in names {
            if reports.contains_key(&name) {
                continue;
            }
            let words = database.words_by_category(&name);
            let available = self.filter_by_culture(&words);
            let report = scoring::category_report(
                &name,
                words.len(),
                &available,
                &self.known_labels,
                &self.scoring_config,
            );
            reports.insert(name, report);
        }
        reports
    }

    /// Priority reports from 10 down to 1
    fn priority_reports(&self, filtered: &[WordEntry]) -> Vec<PriorityGapReport> {
        (MIN_PRIORITY..=MAX_PRIORITY)
            .rev()
            .map(|level| {
                scoring::priority_report(level, filtered, &self.known_labels, &self.scoring_config)
            })
            .collect()
    }
}

impl Default for GapAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
