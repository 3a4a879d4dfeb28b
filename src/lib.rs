//! nmatch - token-alignment fuzzy matching for name strings
//!
//! Computes fuzzy similarity between pairs of free-text names for record
//! linkage and deduplication across datasets with inconsistent spelling,
//! ordering or formatting.
//!
//! # How it works
//! - Tokenize each name (delimiter splitting or alphabetic-run extraction)
//! - Find the minimum-cost one-to-one correspondence between the two
//!   token sets (permutation search with pruning; assignment-solver
//!   fallback for unusually long names)
//! - Score the correspondence with character-level edit distance
//!   (Levenshtein or OSA)
//! - Classify each aligned pair with length-scaled typo tolerance and
//!   optionally attach corpus frequencies
//!
//! # Example
//! ```
//! use nmatch::{match_names_with_frequency, FrequencyTable, MatchOptions};
//!
//! let vocabulary = FrequencyTable::from_columns(&["john", "jon"], &[5, 2]).unwrap();
//! let records = match_names_with_frequency(
//!     &["John Smith", "Maria Garcia"],
//!     &["Smith, Jon", "garcia maria"],
//!     &MatchOptions::default(),
//!     Some(&vocabulary),
//! ).unwrap();
//!
//! assert_eq!(records[0].total_distance, Some(1));
//! assert_eq!(records[1].total_distance, Some(2)); // casing differs
//! ```
//!
//! This is not a general string-similarity library: there is no phonetic
//! matching and no n-gram similarity. It is a token-bag alignment scorer
//! for names with at most a handful of tokens each.

pub mod algorithms;
pub mod align;
pub mod classify;
pub mod error;
pub mod frequency;
pub mod matcher;
pub mod tokenize;

pub use algorithms::{levenshtein, osa, EditDistance, Levenshtein, Osa};
pub use align::{align as align_tokens, AlignedPair, Alignment, MAX_PERMUTATION_TOKENS};
pub use classify::is_token_match;
pub use error::MatchError;
pub use frequency::{FrequencyTable, FREQUENCY_SLOTS};
pub use matcher::{
    match_names, match_names_with_frequency, MatchOptions, MatchRecord, MatchSummary, MetricKind,
};
pub use tokenize::{tokenize, Token, TokenizeStrategy};
