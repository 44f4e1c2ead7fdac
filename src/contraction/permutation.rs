//! Lazy permutation generator.

use alloc::vec::Vec;

/// Iterator over all orderings of `0..n` in lexicographic order.
///
/// Each ordering is computed from the previous one, so only one is held in
/// memory at a time. `n == 0` yields a single empty ordering.
#[derive(Debug, Clone)]
pub struct Permutations {
    current: Option<Vec<usize>>,
}

impl Permutations {
    pub fn new(n: usize) -> Self {
        Self {
            current: Some((0..n).collect()),
        }
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let current = self.current.take()?;
        let mut following = current.clone();
        if next_permutation(&mut following) {
            self.current = Some(following);
        }
        Some(current)
    }
}

/// Advances `items` to the next lexicographic ordering.
///
/// Returns false (leaving `items` untouched) when it is already the last one.
pub fn next_permutation<T: Ord>(items: &mut [T]) -> bool {
    let n = items.len();
    if n < 2 {
        return false;
    }

    // Longest non-increasing suffix starts at `pivot + 1`
    let mut pivot = n - 1;
    while pivot > 0 && items[pivot - 1] >= items[pivot] {
        pivot -= 1;
    }
    if pivot == 0 {
        return false;
    }
    let pivot = pivot - 1;

    let mut successor = n - 1;
    while items[successor] <= items[pivot] {
        successor -= 1;
    }

    items.swap(pivot, successor);
    items[pivot + 1..].reverse();
    true
}
