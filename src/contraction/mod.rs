//! Enumeration of full contractions between creation and annihilation operators.
//!
//! Implements two strategies that produce the same terms in the same order:
//! - Brute force: lazy n! permutation scan, the reference
//! - Backtracking: depth-first assignment with early pruning

mod backtrack;
mod brute_force;
mod delta;
mod operator;
mod permutation;
mod sign;

pub use backtrack::{SearchStats, backtrack_contractions};
pub use brute_force::Contractions;
pub use delta::{DeltaPair, DeltaPairs};
pub use operator::{Operator, OperatorSet, Role, check_roles};
pub use permutation::{Permutations, next_permutation};
pub use sign::{Sign, count_inversions, group_sign, permutation_sign};

use alloc::vec::Vec;

use crate::error::WickResult;

/// Strategy for enumerating contractions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum ContractionStrategy {
    /// Scan every ordering of the creation operators.
    BruteForce,
    /// Depth-first search that prunes forbidden partial pairings.
    Backtracking,
    /// Choose automatically (currently backtracking).
    #[default]
    Auto,
}

impl ContractionStrategy {
    /// Resolves `Auto` to a concrete strategy.
    pub fn resolve(self) -> Self {
        match self {
            ContractionStrategy::Auto => ContractionStrategy::Backtracking,
            other => other,
        }
    }
}

/// Lazily enumerates the contractions of explicit operator lists.
///
/// Fails if the lists differ in length or hold operators of the wrong role.
pub fn contractions<'a>(
    creation: &'a [Operator],
    annihilation: &'a [Operator],
    base_sign: Sign,
) -> WickResult<Contractions<'a>> {
    check_roles(creation, annihilation)?;
    Ok(Contractions::new(creation, annihilation, base_sign))
}

/// Collects every legitimate contraction of explicit operator lists.
///
/// The sign of each term is `base_sign` times the parities of the original
/// creation order, the original annihilation order and the permuted creation
/// order, each taken relative to alphabetical order.
pub fn contract(
    creation: &[Operator],
    annihilation: &[Operator],
    base_sign: Sign,
    strategy: ContractionStrategy,
) -> WickResult<Vec<DeltaPairs>> {
    check_roles(creation, annihilation)?;

    let result = match strategy.resolve() {
        ContractionStrategy::BruteForce => {
            let mut scan = Contractions::new(creation, annihilation, base_sign);
            let found: Vec<DeltaPairs> = scan.by_ref().collect();
            tracing::trace!(visited = scan.visited(), found = found.len(), "brute force scan finished");
            found
        }
        _ => backtrack_contractions(creation, annihilation, base_sign).0,
    };

    Ok(result)
}
