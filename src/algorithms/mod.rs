//! Edit-distance metrics over token texts.
//!
//! Each metric is implemented as a standalone function for composability,
//! plus a unit struct implementing [`EditDistance`] so the aligner can be
//! driven through a trait object.

pub mod levenshtein;
pub mod osa;

pub use levenshtein::{levenshtein, Levenshtein};
pub use osa::{osa, Osa};

/// Trait for integer edit-distance metrics.
///
/// Implementations must be symmetric and return zero iff the inputs are
/// equal. `Send + Sync` so a metric can be shared across rayon workers.
pub trait EditDistance: Send + Sync {
    fn distance(&self, a: &str, b: &str) -> usize;

    /// Name of the metric for debugging/logging.
    fn name(&self) -> &'static str;
}
