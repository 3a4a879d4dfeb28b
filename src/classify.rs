//! Token-pair match classification.
//!
//! Decides whether two aligned tokens plausibly refer to the same word,
//! with an edit-distance tolerance that scales with the longer token's
//! length: short words must match exactly, long words may absorb a few
//! typos before they stop looking like the same word.

/// Classify a token pair as match / no-match.
///
/// `len_x` and `len_y` are the character counts of the two tokens,
/// `distance` their edit distance. The allowed distance depends on
/// `max(len_x, len_y)`:
///
/// | longer token | allowed distance |
/// |--------------|------------------|
/// | <= 3         | 0                |
/// | 4            | <= 1             |
/// | 5 - 8        | <= 2             |
/// | >= 9         | <= 3             |
#[inline]
#[must_use]
pub fn is_token_match(len_x: usize, len_y: usize, distance: usize) -> bool {
    let len_max = len_x.max(len_y);
    match len_max {
        0..=3 => distance == 0,
        4 => distance <= 1,
        5..=8 => distance <= 2,
        _ => distance <= 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_tokens_require_exact_match() {
        assert!(is_token_match(3, 3, 0));
        assert!(!is_token_match(3, 3, 1));
        assert!(!is_token_match(1, 2, 1));
    }

    #[test]
    fn test_length_four_allows_one_edit() {
        assert!(is_token_match(4, 4, 1));
        assert!(!is_token_match(4, 4, 2));
        // max(3, 4) = 4, so the longer side sets the tolerance
        assert!(is_token_match(3, 4, 1));
    }

    #[test]
    fn test_mid_length_allows_two_edits() {
        assert!(is_token_match(5, 5, 2));
        assert!(is_token_match(6, 6, 2));
        assert!(!is_token_match(6, 6, 3));
        assert!(is_token_match(8, 2, 2));
        assert!(!is_token_match(8, 8, 3));
    }

    #[test]
    fn test_long_tokens_allow_three_edits() {
        assert!(is_token_match(9, 9, 3));
        assert!(is_token_match(10, 4, 3));
        assert!(!is_token_match(12, 12, 4));
    }

    #[test]
    fn test_zero_distance_always_matches() {
        for len in 0..16 {
            assert!(is_token_match(len, len, 0));
        }
    }
}
