//! Lazy enumeration of stop orderings.
//!
//! Orderings are index permutations of `0..k` in **lexicographic** order:
//! every ordering starting with index 0 comes first (the rest permuted the
//! same way, recursively), then every ordering starting with 1, and so on.
//! For `k = 3`:
//!
//! ```text
//! [0,1,2] [0,2,1] [1,0,2] [1,2,0] [2,0,1] [2,1,0]
//! ```
//!
//! The composer breaks length ties by this order, so it is part of the
//! routing contract.  `k = 0` yields exactly one empty ordering.

/// Iterator over all orderings of `0..k`.  Create a new one to restart.
#[derive(Clone, Debug)]
pub struct Permutations {
    next: Option<Vec<usize>>,
}

impl Permutations {
    pub fn new(k: usize) -> Self {
        Self { next: Some((0..k).collect()) }
    }

    /// `k!`, or `None` on overflow.
    pub fn total(k: usize) -> Option<usize> {
        (1..=k).try_fold(1usize, |acc, n| acc.checked_mul(n))
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let current = self.next.take()?;
        self.next = successor(&current);
        Some(current)
    }
}

/// Next ordering in lexicographic order, or `None` after the last.
fn successor(current: &[usize]) -> Option<Vec<usize>> {
    let mut next = current.to_vec();
    let pivot = next.windows(2).rposition(|w| w[0] < w[1])?;
    let swap = next.iter().rposition(|&v| v > next[pivot])?;
    next.swap(pivot, swap);
    next[pivot + 1..].reverse();
    Some(next)
}
