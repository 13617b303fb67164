//! Error types for vocabulary gap analysis

use thiserror::Error;

/// Main error type for the vocabulary analyzer
#[derive(Error, Debug)]
pub enum VocabError {
    /// Analysis was requested before a reference database was supplied.
    ///
    /// Not retryable: the caller has to initialize the analyzer first.
    #[error("No reference word database: initialize the analyzer before running an analysis")]
    UninitializedDatabase,

    /// A reference word failed validation while building a database
    #[error("Invalid word entry: {0}")]
    InvalidWord(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for vocabulary operations
pub type Result<T> = std::result::Result<T, VocabError>;
