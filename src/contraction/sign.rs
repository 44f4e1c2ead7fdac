//! Permutation parity.

use alloc::vec::Vec;
use core::fmt;
use core::ops::{Mul, MulAssign, Neg};

use serde::{Deserialize, Serialize};

/// A factor of +1 or -1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Sign {
    #[default]
    Plus,
    Minus,
}

impl Sign {
    /// Plus for an even count, minus for an odd one.
    #[inline]
    pub fn from_parity(count: usize) -> Self {
        if count % 2 == 0 { Sign::Plus } else { Sign::Minus }
    }

    /// Returns +1 or -1.
    #[inline]
    pub fn value(&self) -> i8 {
        match self {
            Sign::Plus => 1,
            Sign::Minus => -1,
        }
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        matches!(self, Sign::Plus)
    }
}

impl Mul for Sign {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        if self == rhs { Sign::Plus } else { Sign::Minus }
    }
}

impl MulAssign for Sign {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self {
        self * Sign::Minus
    }
}

impl core::iter::Product for Sign {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Sign::Plus, Mul::mul)
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::Plus => write!(f, "+"),
            Sign::Minus => write!(f, "-"),
        }
    }
}

/// Sign a group of `n` operator pairs contributes to the base sign.
///
/// A non-empty group gives (-1)^(n-1); an empty group gives +1.
#[inline]
pub fn group_sign(n: usize) -> Sign {
    match n {
        0 => Sign::Plus,
        n => Sign::from_parity(n - 1),
    }
}

/// Parity of `seq` relative to its ascending order.
///
/// Equal elements are not inversions, so only relative order matters.
pub fn permutation_sign<T: Ord + Clone>(seq: &[T]) -> Sign {
    Sign::from_parity(count_inversions(seq))
}

/// Counts pairs `i < j` with `seq[i] > seq[j]`.
///
/// Merge sort, O(n log n).
pub fn count_inversions<T: Ord + Clone>(seq: &[T]) -> usize {
    let mut buffer = seq.to_vec();
    let mut scratch = Vec::with_capacity(seq.len());
    sort_counting(&mut buffer, &mut scratch)
}

fn sort_counting<T: Ord + Clone>(items: &mut [T], scratch: &mut Vec<T>) -> usize {
    let n = items.len();
    if n < 2 {
        return 0;
    }

    let mid = n / 2;
    let mut inversions = sort_counting(&mut items[..mid], scratch);
    inversions += sort_counting(&mut items[mid..], scratch);

    scratch.clear();
    let (mut i, mut j) = (0, mid);
    while i < mid && j < n {
        if items[j] < items[i] {
            // every remaining element of the left half is greater
            inversions += mid - i;
            scratch.push(items[j].clone());
            j += 1;
        } else {
            scratch.push(items[i].clone());
            i += 1;
        }
    }
    scratch.extend_from_slice(&items[i..mid]);
    scratch.extend_from_slice(&items[j..n]);
    items.clone_from_slice(scratch);

    inversions
}
