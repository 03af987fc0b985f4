//! Lexicographic enumeration of permutations.
//!
//! `Permutations::new(k)` yields every ordering of `0..k` exactly once,
//! starting from the identity and ending with the reversal, in the same
//! order as `itertools::permutations` over a sorted input. The sequence is
//! lazy (one `Vec` per step) and can be restarted with [`Permutations::reset`].

/// `k!`, saturating at `usize::MAX`
pub fn factorial(k: usize) -> usize {
    (1..=k).fold(1_usize, |acc, x| acc.saturating_mul(x))
}

/// Lazy, restartable iterator over all permutations of `0..k`
#[derive(Debug, Clone)]
pub struct Permutations {
    current: Vec<usize>,
    started: bool,
    done: bool,
}

impl Permutations {
    pub fn new(k: usize) -> Self {
        Self {
            current: (0..k).collect(),
            started: false,
            done: false,
        }
    }

    /// Rewind to the identity permutation
    pub fn reset(&mut self) {
        let k = self.current.len();
        self.current = (0..k).collect();
        self.started = false;
        self.done = false;
    }

    /// Rearrange `current` into the next permutation in lexicographic
    /// order. Returns false if `current` was the last one.
    fn advance(&mut self) -> bool {
        let xx = &mut self.current;
        let n = xx.len();
        if n < 2 {
            return false;
        }

        // longest non-increasing suffix starts at `pivot + 1`
        let mut pivot = n - 1;
        while pivot > 0 && xx[pivot - 1] >= xx[pivot] {
            pivot -= 1;
        }
        if pivot == 0 {
            return false;
        }
        let pivot = pivot - 1;

        let mut succ = n - 1;
        while xx[succ] <= xx[pivot] {
            succ -= 1;
        }
        xx.swap(pivot, succ);
        xx[(pivot + 1)..].reverse();
        true
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.current.clone());
        }
        if self.advance() {
            Some(self.current.clone())
        } else {
            self.done = true;
            None
        }
    }
}
