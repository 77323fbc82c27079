//! # Error Types

/// Errors from pairsmith operations.
#[derive(Debug, thiserror::Error)]
pub enum PairsmithError {
    /// The vocabulary cannot be trained on.
    ///
    /// Raised for an empty vocabulary, a word with no symbols,
    /// or an entry with a zero frequency.
    #[error("invalid vocabulary: {0}")]
    InvalidVocabulary(String),

    /// A negative round budget.
    #[error("invalid round budget ({rounds}): must be >= 0")]
    InvalidRoundBudget {
        /// The rejected round count.
        rounds: i64,
    },

    /// Malformed loader input.
    #[error("parse error on line {line}: {message}")]
    Parse {
        /// The 1-based input line.
        line: usize,

        /// What was wrong with it.
        message: String,
    },

    /// The word split pattern did not compile.
    #[error(transparent)]
    Pattern(#[from] regex::Error),

    /// JSON rendering failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for pairsmith operations.
pub type PSResult<T> = core::result::Result<T, PairsmithError>;
