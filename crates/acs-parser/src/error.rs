//! Error types for vocabulary configuration.
//!
//! Parsing player input never fails; only building or loading a vocabulary
//! can report errors.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for vocabulary operations.
pub type VocabularyResult<T> = Result<T, VocabularyError>;

/// Errors that can occur while building or loading a vocabulary.
#[derive(Debug, Error)]
pub enum VocabularyError {
    /// A verb phrase was empty or whitespace-only.
    #[error("empty phrase for action {0}")]
    EmptyPhrase(String),

    /// A verb phrase has more words than the resolver looks at.
    #[error("phrase {phrase:?} has more than {max} words")]
    PhraseTooLong {
        /// The offending phrase.
        phrase: String,
        /// The word limit.
        max: usize,
    },

    /// A phrase was mapped to the reserved blank-input action.
    #[error("phrase {0:?} cannot map to the none action")]
    ReservedAction(String),

    /// A custom command verb names a built-in action.
    #[error("custom command {0:?} clashes with a built-in action")]
    ReservedCommand(String),

    /// A direction name is not one of the known directions.
    #[error("unknown direction: {0}")]
    UnknownDirection(String),

    /// The vocabulary file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The vocabulary file is not valid JSON for the expected shape.
    #[error("invalid vocabulary file: {0}")]
    Json(#[from] serde_json::Error),
}
