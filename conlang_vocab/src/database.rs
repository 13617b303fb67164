//! Reference word database abstraction
//!
//! The analyzer only reads the database through [`WordDatabase`], so callers
//! can plug in their own catalog. [`InMemoryWordDatabase`] covers the common
//! case of a JSON catalog loaded once at startup.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, VocabError};
use crate::types::{UserVocabularyEntry, WordEntry, MAX_PRIORITY, MIN_PRIORITY};

/// Read-only reference database consumed by the gap analyzer
pub trait WordDatabase: Send + Sync {
    /// Every reference word, in catalog order
    fn all_words(&self) -> Vec<WordEntry>;

    /// Words of one category, in catalog order
    fn words_by_category(&self, category: &str) -> Vec<WordEntry>;

    /// Ordered category names from the catalog metadata
    fn categories(&self) -> Vec<String>;
}

/// Catalog metadata as stored in JSON
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DatabaseMetadata {
    #[serde(default)]
    pub categories: Vec<String>,
}

#[derive(Deserialize)]
struct DatabaseFile {
    #[serde(default)]
    metadata: Option<DatabaseMetadata>,
    words: Vec<WordEntry>,
}

/// In-memory reference database
#[derive(Clone, Debug)]
pub struct InMemoryWordDatabase {
    words: Vec<WordEntry>,
    metadata: DatabaseMetadata,
}

impl InMemoryWordDatabase {
    /// Build a database, validating every entry.
    ///
    /// An empty `categories` list is derived from the words in first-seen order.
    pub fn new(words: Vec<WordEntry>, categories: Vec<String>) -> Result<Self> {
        for word in &words {
            validate_word(word)?;
        }

        let categories = if categories.is_empty() {
            derive_categories(&words)
        } else {
            categories
        };

        Ok(Self {
            words,
            metadata: DatabaseMetadata { categories },
        })
    }

    /// Parse `{ "metadata": { "categories": [...] }, "words": [...] }`
    pub fn from_json_str(text: &str) -> Result<Self> {
        let file: DatabaseFile = serde_json::from_str(text)?;
        let categories = file.metadata.map(|m| m.categories).unwrap_or_default();
        Self::new(file.words, categories)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let db = Self::from_json_str(&text)?;
        tracing::debug!(
            "Loaded {} reference words in {} categories from {}",
            db.words.len(),
            db.metadata.categories.len(),
            path.display()
        );
        Ok(db)
    }

    pub fn metadata(&self) -> &DatabaseMetadata {
        &self.metadata
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordDatabase for InMemoryWordDatabase {
    fn all_words(&self) -> Vec<WordEntry> {
        self.words.clone()
    }

    fn words_by_category(&self, category: &str) -> Vec<WordEntry> {
        self.words
            .iter()
            .filter(|w| w.category == category)
            .cloned()
            .collect()
    }

    fn categories(&self) -> Vec<String> {
        self.metadata.categories.clone()
    }
}

fn validate_word(word: &WordEntry) -> Result<()> {
    if word.english.trim().is_empty() {
        return Err(VocabError::InvalidWord(format!(
            "empty english label in category '{}'",
            word.category
        )));
    }
    if !(MIN_PRIORITY..=MAX_PRIORITY).contains(&word.priority) {
        return Err(VocabError::InvalidWord(format!(
            "'{}' has priority {} (expected {}..={})",
            word.english, word.priority, MIN_PRIORITY, MAX_PRIORITY
        )));
    }
    Ok(())
}

fn derive_categories(words: &[WordEntry]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for word in words {
        if !categories.contains(&word.category) {
            categories.push(word.category.clone());
        }
    }
    categories
}

/// Load a user vocabulary (JSON array of entries)
pub fn load_user_vocabulary(path: impl AsRef<Path>) -> Result<Vec<UserVocabularyEntry>> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
        "metadata": { "categories": ["greetings", "nature"] },
        "words": [
            { "english": "hello", "category": "greetings", "priority": 9,
              "frequency": "very_high", "tags": ["essential"] },
            { "english": "bye", "category": "greetings", "priority": 3 },
            { "english": "sea", "category": "nature", "priority": 6,
              "cultural": ["maritime", "coastal"] }
        ]
    }"#;

    #[test]
    fn test_from_json_str() {
        let db = InMemoryWordDatabase::from_json_str(CATALOG).unwrap();
        assert_eq!(db.len(), 3);
        assert_eq!(db.categories(), vec!["greetings", "nature"]);
        assert_eq!(db.words_by_category("greetings").len(), 2);
        assert!(db.words_by_category("kinship").is_empty());
    }

    #[test]
    fn test_categories_derived_without_metadata() {
        let words = vec![
            WordEntry::new("tree", "nature", 5),
            WordEntry::new("mother", "kinship", 9),
            WordEntry::new("rock", "nature", 4),
        ];
        let db = InMemoryWordDatabase::new(words, Vec::new()).unwrap();
        assert_eq!(db.categories(), vec!["nature", "kinship"]);
    }

    #[test]
    fn test_rejects_out_of_range_priority() {
        let words = vec![WordEntry::new("hello", "greetings", 11)];
        let err = InMemoryWordDatabase::new(words, Vec::new()).unwrap_err();
        assert!(matches!(err, VocabError::InvalidWord(_)));

        let words = vec![WordEntry::new("hello", "greetings", 0)];
        assert!(InMemoryWordDatabase::new(words, Vec::new()).is_err());
    }

    #[test]
    fn test_rejects_empty_label() {
        let words = vec![WordEntry::new("  ", "greetings", 5)];
        assert!(InMemoryWordDatabase::new(words, Vec::new()).is_err());
    }

    #[test]
    fn test_load_files() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("words.json");
        std::fs::write(&db_path, CATALOG).unwrap();
        let db = InMemoryWordDatabase::from_json_file(&db_path).unwrap();
        assert_eq!(db.len(), 3);

        let vocab_path = dir.path().join("vocab.json");
        std::fs::write(
            &vocab_path,
            r#"[{"english": "hello", "conlang": "sala"}, {"english": "sea"}]"#,
        )
        .unwrap();
        let vocab = load_user_vocabulary(&vocab_path).unwrap();
        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab[0].conlang, "sala");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = InMemoryWordDatabase::from_json_file("/nonexistent/words.json").unwrap_err();
        assert!(matches!(err, VocabError::Io(_)));
    }
}
