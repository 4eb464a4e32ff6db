//! Error types for honq.
//!
//! Nothing in a pipeline fails while it is being iterated. Errors surface
//! only when a stage is constructed, right next to the chain call that
//! caused them.

use thiserror::Error;

/// Errors that can occur while building a query pipeline.
#[derive(Error, Debug)]
pub enum HonqError {
    /// I/O error reported by an operation that touches the filesystem eagerly.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A pattern-based stage was given no patterns at all.
    #[error("Empty pattern set: {context} requires at least one pattern")]
    EmptyPatternSet {
        /// The chain call that received the empty list.
        context: String,
    },

    /// The combined pattern failed to compile as a regular expression.
    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The full regular expression source that was rejected.
        pattern: String,
        /// Compiler diagnostic.
        message: String,
    },
}

/// Result type alias for honq operations.
pub type Result<T> = std::result::Result<T, HonqError>;

impl HonqError {
    /// Create a new empty pattern set error.
    pub fn empty_pattern_set<S: Into<String>>(context: S) -> Self {
        Self::EmptyPatternSet {
            context: context.into(),
        }
    }

    /// Create a new invalid pattern error.
    pub fn invalid_pattern<P: Into<String>, M: Into<String>>(pattern: P, message: M) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Whether this error was caused by the caller's patterns.
    #[must_use]
    pub fn is_pattern_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyPatternSet { .. } | Self::InvalidPattern { .. }
        )
    }
}
