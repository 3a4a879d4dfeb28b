//! Token alignment.
//!
//! Finds the minimum-total-cost one-to-one correspondence between the
//! tokens of the shorter sequence and an equal-size subset of the longer,
//! under a chosen edit-distance metric. Tokens of the longer sequence
//! beyond the matching are never scored.
//!
//! The search enumerates permutations of the longer index set in
//! lexicographic order with branch-and-bound pruning, which is exact but
//! factorial in the longer token count. Names rarely exceed a handful of
//! tokens; past [`MAX_PERMUTATION_TOKENS`] the aligner switches to an
//! augmenting-path assignment solver with the same minimal total.

use crate::algorithms::EditDistance;
use crate::tokenize::Token;

/// Longest sequence the permutation search will take on. Beyond this the
/// O(l!) enumeration is replaced by the O(m^2 * l) assignment solver.
pub const MAX_PERMUTATION_TOKENS: usize = 8;

/// One aligned token pair. Indices refer to the original `xs`/`ys`
/// sequences handed to [`align`], regardless of which side was permuted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedPair {
    pub x_index: usize,
    pub y_index: usize,
    /// Edit distance between the two token texts under the chosen metric.
    pub distance: usize,
}

/// Result of aligning two token sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alignment {
    /// A minimum-cost correspondence was found.
    Aligned {
        /// `min(k_x, k_y)` pairs in shorter-sequence order.
        pairs: Vec<AlignedPair>,
        /// Sum of the per-pair distances; minimal over all correspondences.
        total_distance: usize,
    },

    /// At least one side tokenized to nothing; no distance exists.
    Incomparable,
}

impl Alignment {
    /// Total distance, or `None` for a non-comparable pair.
    #[must_use]
    pub fn total_distance(&self) -> Option<usize> {
        match self {
            Alignment::Aligned { total_distance, .. } => Some(*total_distance),
            Alignment::Incomparable => None,
        }
    }

    /// The aligned pairs; empty for a non-comparable pair.
    #[must_use]
    pub fn pairs(&self) -> &[AlignedPair] {
        match self {
            Alignment::Aligned { pairs, .. } => pairs,
            Alignment::Incomparable => &[],
        }
    }

    #[must_use]
    pub fn is_incomparable(&self) -> bool {
        matches!(self, Alignment::Incomparable)
    }
}

/// Align two token sequences under the given metric.
///
/// Returns [`Alignment::Incomparable`] without searching if either side is
/// empty, so a name that fails to tokenize never aborts a batch.
///
/// # Example
/// ```
/// use nmatch::algorithms::Levenshtein;
/// use nmatch::align::align;
/// use nmatch::tokenize::{tokenize, TokenizeStrategy};
///
/// let xs = tokenize("york new", 2, TokenizeStrategy::AlphabeticRun);
/// let ys = tokenize("new york", 2, TokenizeStrategy::AlphabeticRun);
/// assert_eq!(align(&xs, &ys, &Levenshtein).total_distance(), Some(0));
/// ```
#[must_use]
pub fn align(xs: &[Token], ys: &[Token], metric: &dyn EditDistance) -> Alignment {
    if xs.is_empty() || ys.is_empty() {
        return Alignment::Incomparable;
    }

    // Permute the longer side; on equal lengths, permute y as the
    // original formulation does.
    let swapped = xs.len() > ys.len();
    let (short, long) = if swapped { (ys, xs) } else { (xs, ys) };
    let m = short.len();
    let l = long.len();

    // Pairwise distances computed once; candidates are scored by lookup.
    let cost: Vec<Vec<usize>> = short
        .iter()
        .map(|s| long.iter().map(|t| metric.distance(s.text(), t.text())).collect())
        .collect();

    let assignment = if l <= MAX_PERMUTATION_TOKENS {
        permutation_search(&cost, m, l)
    } else {
        min_cost_assignment(&cost, m, l)
    };

    let mut pairs = Vec::with_capacity(m);
    let mut total_distance = 0;
    for (j, &i) in assignment.iter().enumerate() {
        let distance = cost[j][i];
        total_distance += distance;
        let (x_index, y_index) = if swapped { (i, j) } else { (j, i) };
        pairs.push(AlignedPair { x_index, y_index, distance });
    }

    Alignment::Aligned { pairs, total_distance }
}

/// Exhaustive permutation search over the longer index set.
///
/// Candidates are visited in lexicographic order. A candidate is abandoned
/// as soon as its partial sum reaches the best known total, and the whole
/// search stops once a zero-total candidate is found. Returns the best
/// assignment: for each shorter-side position, the longer-side index.
fn permutation_search(cost: &[Vec<usize>], m: usize, l: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..l).collect();
    let mut best_total = usize::MAX;
    let mut best = indices[..m].to_vec();

    loop {
        let mut total = 0;
        let mut j = 0;
        while j < m && total < best_total {
            total += cost[j][indices[j]];
            j += 1;
        }

        if j == m && total < best_total {
            best_total = total;
            best.copy_from_slice(&indices[..m]);
            if best_total == 0 {
                break;
            }
        }

        if !next_permutation(&mut indices) {
            break;
        }
    }

    best
}

/// Rearrange `arr` into the next lexicographic permutation, returning
/// `false` (and leaving the slice sorted ascending) after the last one.
/// Same contract as C++ `std::next_permutation`.
fn next_permutation(arr: &mut [usize]) -> bool {
    if arr.len() < 2 {
        return false;
    }

    let mut i = arr.len() - 1;
    while i > 0 && arr[i - 1] >= arr[i] {
        i -= 1;
    }
    if i == 0 {
        arr.reverse();
        return false;
    }

    let mut j = arr.len() - 1;
    while arr[j] <= arr[i - 1] {
        j -= 1;
    }
    arr.swap(i - 1, j);
    arr[i..].reverse();
    true
}

/// Minimum-cost assignment of `m` rows to distinct columns of an `m x l`
/// cost matrix (`m <= l`), via the augmenting-path shortest-path method
/// with row/column potentials. Returns the assigned column per row.
fn min_cost_assignment(cost: &[Vec<usize>], m: usize, l: usize) -> Vec<usize> {
    const INF: i64 = i64::MAX / 2;

    // 1-indexed; column 0 is the virtual start of each augmenting path.
    let mut u = vec![0i64; m + 1];
    let mut v = vec![0i64; l + 1];
    let mut col_row = vec![0usize; l + 1];
    let mut way = vec![0usize; l + 1];

    for i in 1..=m {
        col_row[0] = i;
        let mut j0 = 0usize;
        let mut minv = vec![INF; l + 1];
        let mut used = vec![false; l + 1];

        loop {
            used[j0] = true;
            let i0 = col_row[j0];
            let mut delta = INF;
            let mut j1 = 0usize;

            for j in 1..=l {
                if !used[j] {
                    let reduced = cost[i0 - 1][j - 1] as i64 - u[i0] - v[j];
                    if reduced < minv[j] {
                        minv[j] = reduced;
                        way[j] = j0;
                    }
                    if minv[j] < delta {
                        delta = minv[j];
                        j1 = j;
                    }
                }
            }

            for j in 0..=l {
                if used[j] {
                    u[col_row[j]] += delta;
                    v[j] -= delta;
                } else {
                    minv[j] -= delta;
                }
            }

            j0 = j1;
            if col_row[j0] == 0 {
                break;
            }
        }

        // Walk the path backwards, flipping assignments.
        loop {
            let j1 = way[j0];
            col_row[j0] = col_row[j1];
            j0 = j1;
            if j0 == 0 {
                break;
            }
        }
    }

    let mut assignment = vec![0usize; m];
    for j in 1..=l {
        if col_row[j] != 0 {
            assignment[col_row[j] - 1] = j - 1;
        }
    }
    assignment
}
