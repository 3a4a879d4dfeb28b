//! Corpus-frequency lookup and annotation.
//!
//! A [`FrequencyTable`] maps token text to its occurrence count in a
//! reference corpus. It is built once per batch call, passed explicitly
//! down the call chain (never a process-wide global), and read-only for
//! the lifetime of the call, so rayon workers can share it freely.
//!
//! Annotation keeps "missing" and "frequency zero" distinct: a token
//! absent from the table produces `None`, never `Some(0)`.

use crate::align::AlignedPair;
use crate::error::MatchError;
use crate::tokenize::Token;
use ahash::AHashMap;

/// Number of aligned pairs that receive a frequency slot in the output.
pub const FREQUENCY_SLOTS: usize = 3;

/// Read-only mapping from token text to corpus occurrence count.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: AHashMap<String, u64>,
}

impl FrequencyTable {
    /// Build a table from parallel key/value columns.
    ///
    /// # Errors
    /// - [`MatchError::VocabularyMismatch`] if the columns differ in length
    /// - [`MatchError::DuplicateVocabularyKey`] if a key repeats
    pub fn from_columns<S: AsRef<str>>(keys: &[S], values: &[u64]) -> Result<Self, MatchError> {
        if keys.len() != values.len() {
            return Err(MatchError::VocabularyMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }

        let mut counts = AHashMap::with_capacity(keys.len());
        for (key, &value) in keys.iter().zip(values) {
            let key = key.as_ref();
            if counts.insert(key.to_string(), value).is_some() {
                return Err(MatchError::DuplicateVocabularyKey(key.to_string()));
            }
        }

        Ok(Self { counts })
    }

    /// Occurrence count for a token, or `None` if it is not in the corpus.
    #[must_use]
    pub fn get(&self, token: &str) -> Option<u64> {
        self.counts.get(token).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl FromIterator<(String, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

/// Combined frequencies for the first [`FREQUENCY_SLOTS`] aligned pairs.
///
/// Pairs are taken in alignment order, independent of how the classifier
/// judged them. A slot is `Some(sum)` only when both token texts are
/// present in the table; otherwise (either text missing, or fewer aligned
/// pairs than slots) it is `None`.
#[must_use]
pub fn annotate(
    pairs: &[AlignedPair],
    xs: &[Token],
    ys: &[Token],
    table: &FrequencyTable,
) -> [Option<u64>; FREQUENCY_SLOTS] {
    let mut slots = [None; FREQUENCY_SLOTS];
    for (slot, pair) in slots.iter_mut().zip(pairs) {
        let fx = table.get(xs[pair.x_index].text());
        let fy = table.get(ys[pair.y_index].text());
        if let (Some(fx), Some(fy)) = (fx, fy) {
            *slot = Some(fx + fy);
        }
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Levenshtein;
    use crate::align::align;
    use crate::tokenize::{tokenize, TokenizeStrategy};

    fn table(entries: &[(&str, u64)]) -> FrequencyTable {
        entries
            .iter()
            .map(|&(k, v)| (k.to_string(), v))
            .collect()
    }

    #[test]
    fn test_from_columns() {
        let table = FrequencyTable::from_columns(&["john", "jon"], &[5, 2]).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("john"), Some(5));
        assert_eq!(table.get("jon"), Some(2));
        assert_eq!(table.get("smith"), None);
    }

    #[test]
    fn test_from_columns_length_mismatch() {
        let err = FrequencyTable::from_columns(&["john", "jon"], &[5]).unwrap_err();
        assert_eq!(err, MatchError::VocabularyMismatch { keys: 2, values: 1 });
    }

    #[test]
    fn test_from_columns_duplicate_key() {
        let err = FrequencyTable::from_columns(&["john", "john"], &[5, 2]).unwrap_err();
        assert_eq!(err, MatchError::DuplicateVocabularyKey("john".to_string()));
    }

    #[test]
    fn test_annotate_sums_both_frequencies() {
        let xs = tokenize("john", 2, TokenizeStrategy::AlphabeticRun);
        let ys = tokenize("jon", 2, TokenizeStrategy::AlphabeticRun);
        let alignment = align(&xs, &ys, &Levenshtein);
        let table = table(&[("john", 5), ("jon", 2)]);

        let slots = annotate(alignment.pairs(), &xs, &ys, &table);
        assert_eq!(slots, [Some(7), None, None]);
    }

    #[test]
    fn test_missing_token_is_none_not_zero() {
        let xs = tokenize("john", 2, TokenizeStrategy::AlphabeticRun);
        let ys = tokenize("smith", 2, TokenizeStrategy::AlphabeticRun);
        // "smith" absent: the slot must be missing even though "john" has
        // a count, and a zero count must still produce Some.
        let table = table(&[("john", 5), ("doe", 0)]);
        let alignment = align(&xs, &ys, &Levenshtein);
        let slots = annotate(alignment.pairs(), &xs, &ys, &table);
        assert_eq!(slots, [None, None, None]);

        let ys = tokenize("doe", 2, TokenizeStrategy::AlphabeticRun);
        let alignment = align(&xs, &ys, &Levenshtein);
        let slots = annotate(alignment.pairs(), &xs, &ys, &table);
        assert_eq!(slots, [Some(5), None, None]);
    }

    #[test]
    fn test_slots_follow_alignment_order() {
        let xs = tokenize("anna maria lopez diaz", 2, TokenizeStrategy::AlphabeticRun);
        let ys = tokenize("anna maria lopez diaz", 2, TokenizeStrategy::AlphabeticRun);
        let alignment = align(&xs, &ys, &Levenshtein);
        let table = table(&[("anna", 10), ("maria", 20), ("lopez", 30), ("diaz", 40)]);

        // Four aligned pairs, but only the first three get slots
        let slots = annotate(alignment.pairs(), &xs, &ys, &table);
        assert_eq!(slots, [Some(20), Some(40), Some(60)]);
    }

    #[test]
    fn test_fewer_pairs_than_slots() {
        let xs = tokenize("anna", 2, TokenizeStrategy::AlphabeticRun);
        let ys = tokenize("anna", 2, TokenizeStrategy::AlphabeticRun);
        let alignment = align(&xs, &ys, &Levenshtein);
        let slots = annotate(alignment.pairs(), &xs, &ys, &table(&[("anna", 10)]));
        assert_eq!(slots, [Some(20), None, None]);
    }
}
