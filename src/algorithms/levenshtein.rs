//! Levenshtein (edit) distance.
//!
//! Classical dynamic program over insert/delete/substitute, each cost 1.
//! Uses two rolling rows instead of a full matrix, giving O(min(m,n))
//! working memory and O(m*n) time. Distances are computed over Unicode
//! scalar values, not bytes.

use super::EditDistance;
use smallvec::SmallVec;

/// Levenshtein distance calculator.
///
/// # Complexity
/// - Time: O(m*n) where m and n are string lengths
/// - Space: O(min(m,n)) via the two-row optimization
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levenshtein;

impl EditDistance for Levenshtein {
    fn distance(&self, a: &str, b: &str) -> usize {
        levenshtein(a, b)
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}

/// Compute the Levenshtein distance between two strings.
///
/// # Example
/// ```
/// use nmatch::algorithms::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("smith", "smith"), 0);
/// ```
#[inline]
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Keep the shorter string on the column axis so the rows stay small
    let (target, source) = if m < n {
        (&a_chars[..], &b_chars[..])
    } else {
        (&b_chars[..], &a_chars[..])
    };
    let width = target.len();

    let mut prev_row: SmallVec<[usize; 64]> = (0..=width).collect();
    let mut curr_row: SmallVec<[usize; 64]> = smallvec::smallvec![0; width + 1];

    for (i, &sc) in source.iter().enumerate() {
        curr_row[0] = i + 1;

        for j in 1..=width {
            let cost = if sc == target[j - 1] { 0 } else { 1 };
            curr_row[j] = (prev_row[j] + 1) // deletion
                .min(curr_row[j - 1] + 1) // insertion
                .min(prev_row[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[width]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_basic() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", "abc"), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("saturday", "sunday"), 3);
    }

    #[test]
    fn test_levenshtein_single_edits() {
        assert_eq!(levenshtein("john", "jon"), 1); // deletion
        assert_eq!(levenshtein("jon", "john"), 1); // insertion
        assert_eq!(levenshtein("smith", "smyth"), 1); // substitution
    }

    #[test]
    fn test_levenshtein_counts_swap_as_two_edits() {
        // No transposition operation in plain Levenshtein
        assert_eq!(levenshtein("ab", "ba"), 2);
    }

    #[test]
    fn test_levenshtein_unicode() {
        assert_eq!(levenshtein("rené", "rene"), 1);
        assert_eq!(levenshtein("müller", "mueller"), 2);
    }
}
