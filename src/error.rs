//! Batch-level error type.
//!
//! These errors abort an entire batch call before any per-pair work runs.
//! Per-pair degenerate conditions (a name that tokenizes to nothing, a
//! token missing from the vocabulary) are not errors; they are represented
//! as `None` values in the output records.

use thiserror::Error;

/// Errors that can occur when validating a batch call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The two name sequences have different lengths.
    #[error("name sequences must have the same length: got {left} and {right}")]
    LengthMismatch { left: usize, right: usize },

    /// The vocabulary key and value columns have different lengths.
    #[error("vocabulary key and value columns must have the same length: got {keys} keys and {values} values")]
    VocabularyMismatch { keys: usize, values: usize },

    /// A vocabulary key appears more than once.
    #[error("duplicate vocabulary key: '{0}'")]
    DuplicateVocabularyKey(String),
}
