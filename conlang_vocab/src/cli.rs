//! Command-line interface for the vocabulary gap analyzer.
//!
//! # Examples
//!
//! Print the text report:
//!
//! ```bash
//! $ vocab-gaps --database words.json --vocabulary my-lang.json report
//! ```
//!
//! Top ten suggestions for a seafaring culture:
//!
//! ```bash
//! $ vocab-gaps -d words.json -v my-lang.json --culture maritime suggest --count 10
//! ```
//!
//! Full analysis as JSON:
//!
//! ```bash
//! $ vocab-gaps -d words.json analyze --pretty
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::{
    load_user_vocabulary, CulturalContext, GapAnalyzer, InMemoryWordDatabase, ScoringConfig,
    Suggestion,
};

/// CLI arguments for the analyzer.
#[derive(Parser, Debug)]
#[command(name = "vocab-gaps", version, about = "Find the words your conlang is missing")]
struct Cli {
    /// Reference word catalog (JSON)
    #[arg(short, long)]
    database: PathBuf,

    /// Words already in your language (JSON array); empty when omitted
    #[arg(short, long)]
    vocabulary: Option<PathBuf>,

    /// Cultural context filter, e.g. maritime, desert, forest
    #[arg(short, long, default_value = "all")]
    culture: CulturalContext,

    /// Scoring weights override (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

/// Actions available via CLI.
#[derive(Subcommand, Debug)]
enum Action {
    /// Print a human-readable gap report
    Report,

    /// Print the full analysis as JSON
    Analyze {
        #[arg(long)]
        pretty: bool,
    },

    /// Print ranked word suggestions
    Suggest {
        /// Number of suggestions; defaults to the scoring config's count for the mode
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Only suggestions from this category
        #[arg(long)]
        category: Option<String>,

        /// Only suggestions at or above this priority
        #[arg(long)]
        min_priority: Option<u8>,
    },

    /// Print the most urgent missing words
    Critical,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_analyzer(cli: &Cli) -> anyhow::Result<GapAnalyzer> {
    let database = InMemoryWordDatabase::from_json_file(&cli.database)
        .with_context(|| format!("loading word database {}", cli.database.display()))?;

    let vocabulary = match &cli.vocabulary {
        Some(path) => load_user_vocabulary(path)
            .with_context(|| format!("loading vocabulary {}", path.display()))?,
        None => Vec::new(),
    };

    let config = match &cli.config {
        Some(path) => ScoringConfig::from_json_file(path)
            .with_context(|| format!("loading scoring config {}", path.display()))?,
        None => ScoringConfig::default(),
    };

    let mut analyzer = GapAnalyzer::new().with_scoring_config(config);
    analyzer.initialize(Arc::new(database), vocabulary, cli.culture.clone());
    Ok(analyzer)
}

fn print_suggestions(suggestions: &[Suggestion]) {
    if suggestions.is_empty() {
        println!("No suggestions: every matching reference word is covered.");
        return;
    }
    for (i, s) in suggestions.iter().enumerate() {
        println!(
            "{:>3}. {:<20} [{}, p{}] score {:.1}",
            i + 1,
            s.word.english,
            s.word.category,
            s.word.priority,
            s.score
        );
        println!("     {}", s.reasoning);
    }
}

/// Picks suggestions for the `suggest` action. Filters apply before `count`.
fn select_suggestions(
    analyzer: &mut GapAnalyzer,
    count: Option<usize>,
    category: Option<&str>,
    min_priority: Option<u8>,
) -> crate::Result<Vec<Suggestion>> {
    let config = analyzer.scoring_config();
    match (category, min_priority) {
        (None, None) => {
            let count = count.unwrap_or(config.default_suggestion_count);
            analyzer.analyze_vocabulary_gaps()?;
            analyzer.generate_smart_suggestions(count)
        }
        (Some(_), _) => {
            let count = count.unwrap_or(config.category_suggestion_count);
            analyzer.get_suggestions_filtered(category, min_priority, count)
        }
        (None, Some(_)) => {
            let count = count.unwrap_or(config.priority_suggestion_count);
            analyzer.get_suggestions_filtered(None, min_priority, count)
        }
    }
}

/// Entry point for the CLI.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    crate::init();

    let mut analyzer = build_analyzer(&cli)?;

    match cli.action {
        Action::Report => {
            println!("{}", analyzer.generate_analysis_report()?);
        }

        Action::Analyze { pretty } => {
            let result = analyzer.analyze_vocabulary_gaps()?;
            let json = if pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            println!("{}", json);
        }

        Action::Suggest {
            count,
            category,
            min_priority,
        } => {
            let suggestions =
                select_suggestions(&mut analyzer, count, category.as_deref(), min_priority)?;
            print_suggestions(&suggestions);
        }

        Action::Critical => {
            let gaps = analyzer.get_critical_gaps()?;
            if gaps.is_empty() {
                println!("No critical gaps.");
            }
            for word in gaps {
                println!("  p{:<2} {:<20} ({})", word.priority, word.english, word.category);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InMemoryWordDatabase, WordEntry};

    fn analyzer(words: Vec<WordEntry>) -> GapAnalyzer {
        let database = InMemoryWordDatabase::new(words, Vec::new()).unwrap();
        let mut analyzer = GapAnalyzer::new();
        analyzer.initialize(Arc::new(database), Vec::new(), CulturalContext::All);
        analyzer
    }

    fn labels(suggestions: &[Suggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.word.english.as_str()).collect()
    }

    #[test]
    fn test_suggest_category_and_priority_filter_before_count() {
        let mut analyzer = analyzer(vec![
            WordEntry::new("low_essential", "t", 5).with_tags(["essential"]),
            WordEntry::new("six", "t", 6),
        ]);

        let picked = select_suggestions(&mut analyzer, Some(1), Some("t"), Some(6)).unwrap();
        assert_eq!(labels(&picked), vec!["six"]);
    }

    #[test]
    fn test_suggest_priority_default_count() {
        let words = (0..20)
            .map(|i| WordEntry::new(format!("w{}", i), "t", 8))
            .collect();
        let mut analyzer = analyzer(words);

        let picked = select_suggestions(&mut analyzer, None, None, Some(7)).unwrap();
        assert_eq!(picked.len(), 15);

        let picked = select_suggestions(&mut analyzer, None, Some("t"), None).unwrap();
        assert_eq!(picked.len(), 10);

        let picked = select_suggestions(&mut analyzer, None, None, None).unwrap();
        assert_eq!(picked.len(), 20);
    }
}
