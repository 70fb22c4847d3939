//! Error types for vocab-trainer.

use thiserror::Error;

/// Result type alias using VocabError.
pub type Result<T> = std::result::Result<T, VocabError>;

/// Errors surfaced by the word store, codec and quiz engine.
#[derive(Debug, Error)]
pub enum VocabError {
    #[error("word library is full (limit {limit})")]
    CapacityFull { limit: usize },

    #[error("folder list is full (limit {limit})")]
    FolderCapacityFull { limit: usize },

    #[error("'{english}' already exists in folder '{folder}'")]
    Duplicate { folder: String, english: String },

    #[error("malformed record at line {line}")]
    MalformedRecord { line: usize },

    #[error("no entry matches '{0}'")]
    NotFound(String),

    #[error("quiz session is already complete")]
    SessionComplete,

    #[error("no words selected for the quiz")]
    EmptySelection,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
