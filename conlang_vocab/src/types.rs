//! Core data types shared across the analyzer
//!
//! - [`WordEntry`]: one reference word with its metadata
//! - [`Frequency`]: how often a concept comes up in everyday speech
//! - [`CulturalScope`]: which cultures a reference word belongs to
//! - [`CulturalContext`]: the culture filter chosen by the user
//! - [`UserVocabularyEntry`]: a word the user already authored

use std::collections::BTreeSet;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lowest and highest priority a reference word may carry.
pub const MIN_PRIORITY: u8 = 1;
pub const MAX_PRIORITY: u8 = 10;

/// Normalizes an english label for comparisons (trimmed, lowercase).
pub fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Usage frequency of a reference concept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    VeryHigh,
    High,
    Medium,
    #[default]
    Low,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Frequency::VeryHigh => "very_high",
            Frequency::High => "high",
            Frequency::Medium => "medium",
            Frequency::Low => "low",
        };
        f.write_str(s)
    }
}

/// Cultural association of a reference word
///
/// In JSON this is either the string `"all"`, a single culture name, or an
/// array of culture names.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "RawScope", into = "RawScope")]
pub enum CulturalScope {
    /// Relevant to every culture
    #[default]
    All,
    /// Belongs to one culture
    One(String),
    /// Belongs to several cultures
    Many(BTreeSet<String>),
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawScope {
    Single(String),
    Set(BTreeSet<String>),
}

impl From<RawScope> for CulturalScope {
    fn from(raw: RawScope) -> Self {
        match raw {
            RawScope::Single(s) if s == "all" => CulturalScope::All,
            RawScope::Single(s) => CulturalScope::One(s),
            RawScope::Set(set) => CulturalScope::Many(set),
        }
    }
}

impl From<CulturalScope> for RawScope {
    fn from(scope: CulturalScope) -> Self {
        match scope {
            CulturalScope::All => RawScope::Single("all".to_string()),
            CulturalScope::One(s) => RawScope::Single(s),
            CulturalScope::Many(set) => RawScope::Set(set),
        }
    }
}

impl CulturalScope {
    /// Whether a word with this scope is relevant under `context`
    pub fn admits(&self, context: &CulturalContext) -> bool {
        let name = match context {
            CulturalContext::All => return true,
            CulturalContext::Named(name) => name,
        };
        match self {
            CulturalScope::All => true,
            CulturalScope::One(culture) => culture == name,
            CulturalScope::Many(cultures) => cultures.contains(name),
        }
    }
}

/// Culture filter selected by the user
///
/// Parses from text: `"all"` (any case) or an empty string mean no filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CulturalContext {
    #[default]
    All,
    Named(String),
}

impl CulturalContext {
    pub fn is_all(&self) -> bool {
        matches!(self, CulturalContext::All)
    }
}

impl From<&str> for CulturalContext {
    fn from(s: &str) -> Self {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            CulturalContext::All
        } else {
            CulturalContext::Named(trimmed.to_string())
        }
    }
}

impl From<String> for CulturalContext {
    fn from(s: String) -> Self {
        CulturalContext::from(s.as_str())
    }
}

impl From<CulturalContext> for String {
    fn from(context: CulturalContext) -> Self {
        context.to_string()
    }
}

impl FromStr for CulturalContext {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CulturalContext::from(s))
    }
}

impl fmt::Display for CulturalContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CulturalContext::All => f.write_str("all"),
            CulturalContext::Named(name) => f.write_str(name),
        }
    }
}

/// A reference vocabulary word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// English gloss, also the identity used for matching
    pub english: String,
    /// Semantic category (e.g. "greetings", "body", "kinship")
    pub category: String,
    /// Importance from 1 (niche) to 10 (core vocabulary)
    pub priority: u8,
    #[serde(default)]
    pub frequency: Frequency,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub cultural: CulturalScope,
}

impl WordEntry {
    /// Create a word with default frequency, no tags and universal scope
    pub fn new(english: impl Into<String>, category: impl Into<String>, priority: u8) -> Self {
        Self {
            english: english.into(),
            category: category.into(),
            priority,
            frequency: Frequency::default(),
            tags: BTreeSet::new(),
            cultural: CulturalScope::All,
        }
    }

    /// Set the usage frequency
    pub fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Add semantic tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Restrict the word to a cultural scope
    pub fn with_cultural(mut self, cultural: CulturalScope) -> Self {
        self.cultural = cultural;
        self
    }

    /// Exact, case-sensitive tag lookup
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Normalized english label
    pub fn label_key(&self) -> String {
        normalize_label(&self.english)
    }
}

/// A word the user has already authored for their language
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserVocabularyEntry {
    pub english: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// The word in the constructed language
    #[serde(default)]
    pub conlang: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl UserVocabularyEntry {
    pub fn new(english: impl Into<String>, conlang: impl Into<String>) -> Self {
        Self {
            english: english.into(),
            conlang: conlang.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cultural_scope_from_json() {
        let all: CulturalScope = serde_json::from_str(r#""all""#).unwrap();
        assert_eq!(all, CulturalScope::All);

        let one: CulturalScope = serde_json::from_str(r#""maritime""#).unwrap();
        assert_eq!(one, CulturalScope::One("maritime".to_string()));

        let many: CulturalScope = serde_json::from_str(r#"["desert", "mountain"]"#).unwrap();
        match many {
            CulturalScope::Many(set) => {
                assert!(set.contains("desert"));
                assert!(set.contains("mountain"));
            }
            other => panic!("Expected Many, got {:?}", other),
        }
    }

    #[test]
    fn test_scope_admits() {
        let maritime = CulturalContext::from("maritime");
        assert!(CulturalScope::All.admits(&maritime));
        assert!(CulturalScope::One("maritime".into()).admits(&maritime));
        assert!(!CulturalScope::One("desert".into()).admits(&maritime));

        let set: BTreeSet<String> = ["maritime".to_string(), "forest".to_string()].into();
        assert!(CulturalScope::Many(set).admits(&maritime));

        assert!(CulturalScope::One("desert".into()).admits(&CulturalContext::All));
    }

    #[test]
    fn test_context_parsing() {
        assert_eq!(CulturalContext::from("ALL"), CulturalContext::All);
        assert_eq!(CulturalContext::from("  "), CulturalContext::All);
        assert_eq!(
            CulturalContext::from(" desert "),
            CulturalContext::Named("desert".to_string())
        );
        assert_eq!(CulturalContext::from("desert").to_string(), "desert");
    }

    #[test]
    fn test_word_entry_defaults_from_json() {
        let word: WordEntry =
            serde_json::from_str(r#"{"english": "stone", "category": "nature", "priority": 4}"#)
                .unwrap();
        assert_eq!(word.frequency, Frequency::Low);
        assert!(word.tags.is_empty());
        assert_eq!(word.cultural, CulturalScope::All);
    }

    #[test]
    fn test_frequency_snake_case() {
        let f: Frequency = serde_json::from_str(r#""very_high""#).unwrap();
        assert_eq!(f, Frequency::VeryHigh);
        assert_eq!(f.to_string(), "very_high");
    }

    #[test]
    fn test_word_entry_builders() {
        let word = WordEntry::new("boat", "tools", 6)
            .with_frequency(Frequency::High)
            .with_tags(["fishing", "travel"])
            .with_cultural(CulturalScope::One("maritime".to_string()));

        assert_eq!(word.frequency, Frequency::High);
        assert!(word.has_tag("fishing"));
        assert!(!word.has_tag("Fishing"));
        assert_eq!(word.cultural, CulturalScope::One("maritime".to_string()));
    }

    #[test]
    fn test_label_key_normalizes() {
        let word = WordEntry::new("  Hello ", "greetings", 9);
        assert_eq!(word.label_key(), "hello");
    }
}
