//! Optimal String Alignment (OSA) distance.
//!
//! Levenshtein extended with a single adjacent-character transposition
//! operation per cell, checked against the state two rows back. This is
//! the *restricted* Damerau-Levenshtein variant: it never applies more
//! than one edit to the same substring, so it can exceed the unrestricted
//! metric on some inputs (e.g. "ca" -> "abc" is 3 here, 2 unrestricted).
//! That restriction is intentional and must not be "corrected".

use super::EditDistance;
use smallvec::SmallVec;

/// OSA distance calculator.
///
/// # Complexity
/// - Time: O(m*n) where m and n are string lengths
/// - Space: O(n) via three rolling rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Osa;

impl EditDistance for Osa {
    fn distance(&self, a: &str, b: &str) -> usize {
        osa(a, b)
    }

    fn name(&self) -> &'static str {
        "osa"
    }
}

/// Compute the OSA (restricted Damerau-Levenshtein) distance.
///
/// # Example
/// ```
/// use nmatch::algorithms::osa;
///
/// assert_eq!(osa("ab", "ba"), 1); // adjacent swap is one edit
/// assert_eq!(osa("kitten", "sitting"), 3);
/// ```
#[inline]
#[must_use]
pub fn osa(a: &str, b: &str) -> usize {
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

    // Transposition detection needs the row two back, so three rows rotate
    let mut prev2_row: SmallVec<[usize; 64]> = smallvec::smallvec![0; n + 1];
    let mut prev_row: SmallVec<[usize; 64]> = (0..=n).collect();
    let mut curr_row: SmallVec<[usize; 64]> = smallvec::smallvec![0; n + 1];

    for i in 1..=m {
        curr_row[0] = i;

        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };

            curr_row[j] = (prev_row[j] + 1) // deletion
                .min(curr_row[j - 1] + 1) // insertion
                .min(prev_row[j - 1] + cost); // substitution

            if i > 1
                && j > 1
                && a_chars[i - 1] == b_chars[j - 2]
                && a_chars[i - 2] == b_chars[j - 1]
            {
                curr_row[j] = curr_row[j].min(prev2_row[j - 2] + 1); // transposition
            }
        }

        std::mem::swap(&mut prev2_row, &mut prev_row);
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}
