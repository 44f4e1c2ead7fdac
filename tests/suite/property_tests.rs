//! Property tests against an independent reference enumeration.

use cc_wick::contraction::{ContractionStrategy, DeltaPairs, Sign};
use cc_wick::{OccupationClass, OccupationConvention, WickConfig, parse_operators, wick, wick_with_config};
use proptest::prelude::*;

/// One group: pairs of (creation symbol, annihilation symbol).
fn arb_group() -> impl Strategy<Value = Vec<(char, char)>> {
    let symbol = prop::sample::select(vec!['a', 'b', 'c', 'i', 'j', 'k', 'p', 'q']);
    prop::collection::vec((symbol.clone(), symbol), 0..=2)
}

/// Renders groups as an expression, interleaving creation and annihilation tokens.
fn render(groups: &[Vec<(char, char)>]) -> String {
    groups
        .iter()
        .map(|group| {
            group
                .iter()
                .map(|(c, a)| format!("{}+{}", c, a))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn arb_expression() -> impl Strategy<Value = (String, Vec<Vec<(char, char)>>)> {
    prop::collection::vec(arb_group(), 1..=3).prop_map(|groups| (render(&groups), groups))
}

fn inversions(seq: &[char]) -> usize {
    let mut count = 0;
    for i in 0..seq.len() {
        for j in (i + 1)..seq.len() {
            if seq[i] > seq[j] {
                count += 1;
            }
        }
    }
    count
}

fn parity(count: usize) -> Sign {
    if count % 2 == 0 { Sign::Plus } else { Sign::Minus }
}

/// All orderings of `items`, by recursive insertion.
fn all_orderings(items: &[usize]) -> Vec<Vec<usize>> {
    match items.split_first() {
        None => vec![vec![]],
        Some((&head, rest)) => {
            let mut out = Vec::new();
            for tail in all_orderings(rest) {
                for k in 0..=tail.len() {
                    let mut ordering = tail.clone();
                    ordering.insert(k, head);
                    out.push(ordering);
                }
            }
            out
        }
    }
}

type Flat = Vec<(char, usize, OccupationClass)>;

fn flatten(groups: &[Vec<(char, char)>]) -> (Flat, Flat) {
    let convention = OccupationConvention::default();
    let mut creation = Vec::new();
    let mut annihilation = Vec::new();
    for (g, group) in groups.iter().enumerate() {
        for &(c, a) in group {
            creation.push((c, g, convention.classify(c)));
            annihilation.push((a, g, convention.classify(a)));
        }
    }
    (creation, annihilation)
}

/// Number of legitimate orderings, counted without the crate.
fn reference_count(groups: &[Vec<(char, char)>]) -> usize {
    let (creation, annihilation) = flatten(groups);
    let indices: Vec<usize> = (0..creation.len()).collect();

    all_orderings(&indices)
        .into_iter()
        .filter(|ordering| {
            ordering.iter().zip(&annihilation).all(|(&i, a)| {
                let c = creation[i];
                c.1 != a.1 && c.2.weight() * a.2.weight() >= 0
            })
        })
        .count()
}

fn base_sign(groups: &[Vec<(char, char)>]) -> Sign {
    groups
        .iter()
        .filter(|g| !g.is_empty())
        .map(|g| parity(g.len() - 1))
        .product()
}

proptest! {
    #[test]
    fn count_matches_reference((expression, groups) in arb_expression()) {
        let terms = wick(&expression, None).unwrap();
        prop_assert_eq!(terms.len(), reference_count(&groups));
    }

    #[test]
    fn identical_inputs_identical_outputs((expression, _groups) in arb_expression()) {
        let first = wick(&expression, None).unwrap();
        let second = wick(&expression, None).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn sign_law_holds((expression, groups) in arb_expression()) {
        let notation = parse_operators(&expression).unwrap();
        let original_creation = notation.creation_symbols();
        let original_annihilation = notation.annihilation_symbols();
        let initial = base_sign(&groups)
            * parity(inversions(&original_creation))
            * parity(inversions(&original_annihilation));

        for term in wick(&expression, None).unwrap() {
            let permuted: Vec<char> = term.pairs().iter().map(|p| p.creation).collect();
            let annihilated: Vec<char> = term.pairs().iter().map(|p| p.annihilation).collect();

            prop_assert_eq!(&annihilated, &original_annihilation);
            prop_assert_eq!(term.sign(), initial * parity(inversions(&permuted)));
        }
    }

    #[test]
    fn strategies_agree((expression, _groups) in arb_expression()) {
        let brute = WickConfig::new().with_strategy(ContractionStrategy::BruteForce);
        let backtrack = WickConfig::new().with_strategy(ContractionStrategy::Backtracking);

        let reference: Vec<DeltaPairs> = wick_with_config(&expression, None, &brute).unwrap();
        let pruned: Vec<DeltaPairs> = wick_with_config(&expression, None, &backtrack).unwrap();
        prop_assert_eq!(reference, pruned);
    }
}
