//! Conflict counting and fitness evaluation
//!
//! Pure functions over a placement slice (one column index per row).
//! Fitness counts non-attacking row pairs; the maximum `n*(n-1)/2` is
//! reached exactly when no two queens attack each other.

/// Number of unordered row pairs for a board of size `n`: `n*(n-1)/2`
///
/// This is the maximal fitness value, attained by conflict-free placements.
pub fn max_pairs(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Whether the queens in rows `i` and `j` attack each other
fn attacks(cols: &[usize], i: usize, j: usize) -> bool {
    cols[i] == cols[j] || cols[i].abs_diff(cols[j]) == i.abs_diff(j)
}

/// Count unordered row pairs sharing a column or a diagonal
///
/// Runs in O(n^2) over the placement length.
pub fn conflicts(cols: &[usize]) -> usize {
    let n = cols.len();
    let mut count = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            if attacks(cols, i, j) {
                count += 1;
            }
        }
    }
    count
}

/// Fitness of a placement: `max_pairs(n) - conflicts(cols)`
pub fn fitness(cols: &[usize]) -> usize {
    max_pairs(cols.len()) - conflicts(cols)
}

/// Rows participating in at least one conflict, in ascending order
pub fn conflicted_rows(cols: &[usize]) -> Vec<usize> {
    let n = cols.len();
    (0..n)
        .filter(|&i| (0..n).any(|j| j != i && attacks(cols, i, j)))
        .collect()
}
