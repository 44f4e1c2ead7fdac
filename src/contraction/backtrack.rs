//! Backtracking contraction search.
//!
//! Assigns creation operators to annihilation slots one position at a time
//! and abandons a branch as soon as a slot receives a forbidden partner.
//! Candidates are tried in ascending original position, so the output order
//! is identical to the lexicographic brute-force enumeration.

use alloc::vec;
use alloc::vec::Vec;

use super::brute_force::{initial_sign, ordering_sign};
use super::delta::DeltaPairs;
use super::operator::Operator;
use super::sign::Sign;

/// Backtracking search state.
struct SearchState<'a> {
    creation: &'a [Operator],
    annihilation: &'a [Operator],
    initial_sign: Sign,

    /// Creation positions already placed.
    used: Vec<bool>,
    /// Creation positions assigned to slots `0..depth`.
    order: Vec<usize>,
    /// Completed contractions.
    found: Vec<DeltaPairs>,
    /// Number of nodes explored.
    nodes_explored: u64,
    /// Number of rejected partial assignments.
    pruned: u64,
}

/// Statistics of a finished search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    pub nodes_explored: u64,
    pub pruned: u64,
}

/// Finds every legitimate contraction by pruned depth-first search.
///
/// # Arguments
/// * `creation` - Creation operators, in original order
/// * `annihilation` - Annihilation operators, held fixed
/// * `base_sign` - Product of the per-group signs
pub fn backtrack_contractions(
    creation: &[Operator],
    annihilation: &[Operator],
    base_sign: Sign,
) -> (Vec<DeltaPairs>, SearchStats) {
    let n = creation.len();

    let mut state = SearchState {
        creation,
        annihilation,
        initial_sign: initial_sign(creation, annihilation, base_sign),
        used: vec![false; n],
        order: Vec::with_capacity(n),
        found: Vec::new(),
        nodes_explored: 0,
        pruned: 0,
    };

    search(&mut state);

    tracing::trace!(
        nodes_explored = state.nodes_explored,
        pruned = state.pruned,
        found = state.found.len(),
        "backtracking search finished"
    );

    let stats = SearchStats {
        nodes_explored: state.nodes_explored,
        pruned: state.pruned,
    };
    (state.found, stats)
}

/// Recursive depth-first search over slot assignments.
fn search(state: &mut SearchState) {
    state.nodes_explored += 1;

    let creation = state.creation;
    let depth = state.order.len();

    // Base case: every slot filled
    if depth == creation.len() {
        let permuted: Vec<&Operator> = state.order.iter().map(|&i| &creation[i]).collect();
        let sign = state.initial_sign * ordering_sign(permuted.iter().copied());
        let delta = DeltaPairs::from_operators(permuted, state.annihilation, sign);
        state.found.push(delta);
        return;
    }

    let slot = state.annihilation[depth];

    for i in 0..creation.len() {
        if state.used[i] {
            continue;
        }

        if !creation[i].can_pair_with(&slot) {
            state.pruned += 1;
            continue;
        }

        state.used[i] = true;
        state.order.push(i);
        search(state);
        state.order.pop();
        state.used[i] = false;
    }
}
