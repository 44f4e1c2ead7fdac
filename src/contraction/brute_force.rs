//! Reference enumeration over every creation ordering.
//!
//! Generates the n! orderings lazily and filters each one as it arrives.
//! Total work is O(n! * n); memory stays O(n) apart from the yielded terms.

use alloc::vec::Vec;

use super::delta::DeltaPairs;
use super::operator::Operator;
use super::permutation::Permutations;
use super::sign::{Sign, permutation_sign};

/// Lazy iterator over the legitimate contractions of two operator lists.
#[derive(Debug, Clone)]
pub struct Contractions<'a> {
    creation: &'a [Operator],
    annihilation: &'a [Operator],
    /// Base sign times the signs of both original orders.
    initial_sign: Sign,
    orderings: Permutations,
    /// Orderings inspected so far.
    visited: u64,
}

impl<'a> Contractions<'a> {
    /// Expects lists already checked with [`check_roles`](super::check_roles).
    pub(crate) fn new(
        creation: &'a [Operator],
        annihilation: &'a [Operator],
        base_sign: Sign,
    ) -> Self {
        Self {
            creation,
            annihilation,
            initial_sign: initial_sign(creation, annihilation, base_sign),
            orderings: Permutations::new(creation.len()),
            visited: 0,
        }
    }

    /// Number of orderings inspected so far, accepted or not.
    pub fn visited(&self) -> u64 {
        self.visited
    }

    fn accept(&self, order: &[usize]) -> bool {
        order
            .iter()
            .zip(self.annihilation)
            .all(|(&i, a)| self.creation[i].can_pair_with(a))
    }
}

impl Iterator for Contractions<'_> {
    type Item = DeltaPairs;

    fn next(&mut self) -> Option<DeltaPairs> {
        loop {
            let order = self.orderings.next()?;
            self.visited += 1;

            if !self.accept(&order) {
                continue;
            }

            let permuted: Vec<&Operator> = order.iter().map(|&i| &self.creation[i]).collect();
            let sign = self.initial_sign * ordering_sign(permuted.iter().copied());
            return Some(DeltaPairs::from_operators(permuted, self.annihilation, sign));
        }
    }
}

/// Base sign times the parities of the original creation and annihilation orders.
pub(crate) fn initial_sign(creation: &[Operator], annihilation: &[Operator], base_sign: Sign) -> Sign {
    base_sign * ordering_sign(creation.iter()) * ordering_sign(annihilation.iter())
}

/// Parity of the symbols of `operators` relative to alphabetical order.
pub(crate) fn ordering_sign<'a>(operators: impl Iterator<Item = &'a Operator>) -> Sign {
    let symbols: Vec<char> = operators.map(Operator::symbol).collect();
    permutation_sign(&symbols)
}
