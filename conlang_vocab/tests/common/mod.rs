//! Common fixtures for conlang-vocab integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use conlang_vocab::{
    CulturalContext, CulturalScope, Frequency, GapAnalyzer, InMemoryWordDatabase,
    UserVocabularyEntry, WordDatabase, WordEntry,
};

/// One "greetings" category: hello (p9, very_high, essential) and bye (p3).
pub fn greetings_database() -> Arc<dyn WordDatabase> {
    let words = vec![
        WordEntry::new("hello", "greetings", 9)
            .with_frequency(Frequency::VeryHigh)
            .with_tags(["essential"]),
        WordEntry::new("bye", "greetings", 3),
    ];
    Arc::new(InMemoryWordDatabase::new(words, vec!["greetings".to_string()]).unwrap())
}

/// A mixed catalog across several categories and cultures.
pub fn mixed_database() -> Arc<dyn WordDatabase> {
    let words = vec![
        WordEntry::new("I", "pronouns", 10)
            .with_frequency(Frequency::VeryHigh)
            .with_tags(["essential", "universal"]),
        WordEntry::new("you", "pronouns", 10)
            .with_frequency(Frequency::VeryHigh)
            .with_tags(["essential", "universal"]),
        WordEntry::new("we", "pronouns", 9).with_frequency(Frequency::High),
        WordEntry::new("hello", "greetings", 9)
            .with_frequency(Frequency::VeryHigh)
            .with_tags(["essential", "communication", "social"]),
        WordEntry::new("thanks", "greetings", 8).with_tags(["social"]),
        WordEntry::new("water", "nature", 10)
            .with_frequency(Frequency::VeryHigh)
            .with_tags(["universal", "water"]),
        WordEntry::new("sea", "nature", 7)
            .with_tags(["sea"])
            .with_cultural(CulturalScope::One("maritime".into())),
        WordEntry::new("sand", "nature", 6)
            .with_tags(["sand"])
            .with_cultural(CulturalScope::One("desert".into())),
        WordEntry::new("oasis", "nature", 5)
            .with_tags(["oasis"])
            .with_cultural(CulturalScope::Many(
                ["desert".to_string(), "steppe".to_string()].into(),
            )),
        WordEntry::new("net", "tools", 5)
            .with_tags(["fishing"])
            .with_cultural(CulturalScope::One("maritime".into())),
        WordEntry::new("boat", "tools", 7)
            .with_tags(["boat"])
            .with_cultural(CulturalScope::Many(
                ["maritime".to_string(), "riverine".to_string()].into(),
            )),
        WordEntry::new("knife", "tools", 6).with_frequency(Frequency::Medium),
        WordEntry::new("mother", "kinship", 9)
            .with_frequency(Frequency::High)
            .with_tags(["universal"]),
        WordEntry::new("father", "kinship", 9)
            .with_frequency(Frequency::High)
            .with_tags(["universal"]),
        WordEntry::new("cousin", "kinship", 4),
        WordEntry::new("eleven", "numbers", 2),
        WordEntry::new("twelve", "numbers", 1),
    ];
    let categories = ["pronouns", "greetings", "nature", "tools", "kinship", "numbers"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    Arc::new(InMemoryWordDatabase::new(words, categories).unwrap())
}

pub fn vocabulary(labels: &[&str]) -> Vec<UserVocabularyEntry> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| UserVocabularyEntry::new(*label, format!("w{}", i)))
        .collect()
}

pub fn analyzer_with(
    database: Arc<dyn WordDatabase>,
    labels: &[&str],
    culture: &str,
) -> GapAnalyzer {
    let mut analyzer = GapAnalyzer::new();
    analyzer.initialize(database, vocabulary(labels), CulturalContext::from(culture));
    analyzer
}
