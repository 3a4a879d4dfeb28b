//! Batch orchestration.
//!
//! Drives Tokenizer -> Aligner -> Classifier -> Annotator for every
//! position of two parallel name sequences and assembles one fixed-shape
//! record per pair. Validation is fail-fast: a length mismatch aborts the
//! whole call before any per-pair work, and no partial results are ever
//! produced. Per-pair work is pure and self-contained, so large batches
//! run on a rayon worker pool with one output slot per input position.

use crate::algorithms::{EditDistance, Levenshtein, Osa};
use crate::align::align;
use crate::classify::is_token_match;
use crate::error::MatchError;
use crate::frequency::{annotate, FrequencyTable, FREQUENCY_SLOTS};
use crate::tokenize::{tokenize, Token, TokenizeStrategy};
use serde::{Deserialize, Serialize};

/// Minimum batch size for parallel processing.
///
/// Below this threshold sequential processing is faster than paying the
/// thread pool coordination overhead.
const PARALLEL_THRESHOLD: usize = 100;

/// Which edit-distance metric drives the aligner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    #[default]
    Levenshtein,
    /// Optimal String Alignment (restricted Damerau-Levenshtein).
    Osa,
}

impl MetricKind {
    fn metric(self) -> &'static dyn EditDistance {
        match self {
            MetricKind::Levenshtein => &Levenshtein,
            MetricKind::Osa => &Osa,
        }
    }
}

/// Configuration for a batch call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOptions {
    /// Tokens shorter than this many characters are discarded.
    pub min_token_length: usize,
    /// How names are split into tokens.
    pub strategy: TokenizeStrategy,
    /// Metric used for token-pair distances.
    pub metric: MetricKind,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            min_token_length: 2,
            strategy: TokenizeStrategy::default(),
            metric: MetricKind::default(),
        }
    }
}

/// Alignment statistics for one name pair.
///
/// `total_distance` is `None` when either name tokenized to nothing; the
/// pair is then non-comparable rather than having a real distance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Token count of the first name.
    pub k_x: usize,
    /// Token count of the second name.
    pub k_y: usize,
    /// Number of aligned token pairs, `min(k_x, k_y)`.
    pub k_align: usize,
    /// Minimum total edit distance over all correspondences.
    pub total_distance: Option<usize>,
}

/// Full match record for one name pair, extending [`MatchSummary`] with
/// the classifier count and per-pair frequency annotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub k_x: usize,
    pub k_y: usize,
    pub k_align: usize,
    /// Aligned pairs the classifier accepted as the same word.
    pub n_match: usize,
    pub total_distance: Option<usize>,
    /// Combined corpus frequencies for the first three aligned pairs;
    /// `None` marks a missing slot, never a zero frequency.
    pub frequencies: [Option<u64>; FREQUENCY_SLOTS],
}

/// Compute alignment statistics for parallel batches of name pairs.
///
/// # Errors
/// [`MatchError::LengthMismatch`] if the sequences differ in length;
/// nothing is processed in that case.
///
/// # Example
/// ```
/// use nmatch::{match_names, MatchOptions};
///
/// let records = match_names(
///     &["John Smith"],
///     &["Smith, Jon"],
///     &MatchOptions::default(),
/// ).unwrap();
/// assert_eq!(records[0].k_align, 2);
/// assert_eq!(records[0].total_distance, Some(1));
/// ```
pub fn match_names<S: AsRef<str> + Sync>(
    names_x: &[S],
    names_y: &[S],
    options: &MatchOptions,
) -> Result<Vec<MatchSummary>, MatchError> {
    batch(names_x, names_y, |x, y| match_pair(x, y, options))
}

/// Compute full match records, optionally annotated with corpus
/// frequencies from `vocabulary`.
///
/// The table is shared read-only across all pairs of the call; without a
/// table every frequency slot is `None`.
///
/// # Errors
/// [`MatchError::LengthMismatch`] if the sequences differ in length.
pub fn match_names_with_frequency<S: AsRef<str> + Sync>(
    names_x: &[S],
    names_y: &[S],
    options: &MatchOptions,
    vocabulary: Option<&FrequencyTable>,
) -> Result<Vec<MatchRecord>, MatchError> {
    batch(names_x, names_y, |x, y| {
        match_pair_with_frequency(x, y, options, vocabulary)
    })
}

/// Run `per_pair` over the zipped inputs, in parallel for large batches.
/// Each pair writes only its own output slot, so no synchronization is
/// needed beyond the position index.
fn batch<S, T, F>(names_x: &[S], names_y: &[S], per_pair: F) -> Result<Vec<T>, MatchError>
where
    S: AsRef<str> + Sync,
    T: Send,
    F: Fn(&str, &str) -> T + Send + Sync,
{
    if names_x.len() != names_y.len() {
        return Err(MatchError::LengthMismatch {
            left: names_x.len(),
            right: names_y.len(),
        });
    }

    if names_x.len() >= PARALLEL_THRESHOLD {
        use rayon::prelude::*;
        Ok(names_x
            .par_iter()
            .zip(names_y.par_iter())
            .map(|(x, y)| per_pair(x.as_ref(), y.as_ref()))
            .collect())
    } else {
        Ok(names_x
            .iter()
            .zip(names_y.iter())
            .map(|(x, y)| per_pair(x.as_ref(), y.as_ref()))
            .collect())
    }
}

fn match_pair(x: &str, y: &str, options: &MatchOptions) -> MatchSummary {
    let tokens_x = tokenize(x, options.min_token_length, options.strategy);
    let tokens_y = tokenize(y, options.min_token_length, options.strategy);
    let alignment = align(&tokens_x, &tokens_y, options.metric.metric());

    MatchSummary {
        k_x: tokens_x.len(),
        k_y: tokens_y.len(),
        k_align: tokens_x.len().min(tokens_y.len()),
        total_distance: alignment.total_distance(),
    }
}

fn match_pair_with_frequency(
    x: &str,
    y: &str,
    options: &MatchOptions,
    vocabulary: Option<&FrequencyTable>,
) -> MatchRecord {
    let tokens_x = tokenize(x, options.min_token_length, options.strategy);
    let tokens_y = tokenize(y, options.min_token_length, options.strategy);
    let alignment = align(&tokens_x, &tokens_y, options.metric.metric());

    let n_match = count_matches(alignment.pairs(), &tokens_x, &tokens_y);
    let frequencies = match vocabulary {
        Some(table) => annotate(alignment.pairs(), &tokens_x, &tokens_y, table),
        None => [None; FREQUENCY_SLOTS],
    };

    MatchRecord {
        k_x: tokens_x.len(),
        k_y: tokens_y.len(),
        k_align: tokens_x.len().min(tokens_y.len()),
        n_match,
        total_distance: alignment.total_distance(),
        frequencies,
    }
}

fn count_matches(
    pairs: &[crate::align::AlignedPair],
    tokens_x: &[Token],
    tokens_y: &[Token],
) -> usize {
    pairs
        .iter()
        .filter(|p| {
            is_token_match(
                tokens_x[p.x_index].len(),
                tokens_y[p.y_index].len(),
                p.distance,
            )
        })
        .count()
}
