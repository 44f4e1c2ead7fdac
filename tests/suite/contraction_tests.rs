//! Contraction engine tests.

use cc_wick::contraction::{
    ContractionStrategy, DeltaPairs, Operator, Sign, backtrack_contractions, contract, contractions,
};
use cc_wick::launch::wick_notation;
use cc_wick::notation::parse_operators;
use cc_wick::{
    MissingSymbolPolicy, OccupationClass, OccupationConvention, OccupationMap, WickConfig,
    WickError, wick, wick_with_config,
};
use pretty_assertions::assert_eq;

fn general_operators(n: usize) -> (Vec<Operator>, Vec<Operator>) {
    // Every operator in its own group, so every ordering is legitimate
    let symbols = ['p', 'q', 'r', 's', 't', 'u'];
    let creation = (0..n)
        .map(|i| Operator::creation(symbols[i], i, OccupationClass::General))
        .collect();
    let annihilation = (0..n)
        .map(|i| Operator::annihilation(symbols[i], n + i, OccupationClass::General))
        .collect();
    (creation, annihilation)
}

#[test]
fn test_lazy_enumeration_is_partial() {
    let (creation, annihilation) = general_operators(6);
    let mut lazy = contractions(&creation, &annihilation, Sign::Plus).unwrap();

    let first: Vec<DeltaPairs> = lazy.by_ref().take(3).collect();
    assert_eq!(first.len(), 3);
    assert_eq!(lazy.visited(), 3);
    assert_eq!(lazy.count(), 720 - 3);
}

#[test]
fn test_unrestricted_count_is_factorial() {
    let (creation, annihilation) = general_operators(4);
    let terms = contract(&creation, &annihilation, Sign::Plus, ContractionStrategy::BruteForce).unwrap();
    assert_eq!(terms.len(), 24);

    let plus = terms.iter().filter(|t| t.sign() == Sign::Plus).count();
    assert_eq!(plus, 12);
}

#[test]
fn test_base_sign_flips_every_term() {
    let (creation, annihilation) = general_operators(3);

    let plus = contract(&creation, &annihilation, Sign::Plus, ContractionStrategy::Auto).unwrap();
    let minus = contract(&creation, &annihilation, Sign::Minus, ContractionStrategy::Auto).unwrap();

    for (p, m) in plus.iter().zip(&minus) {
        assert_eq!(p.pairs(), m.pairs());
        assert_eq!(p.sign(), -m.sign());
    }
}

#[test]
fn test_backtracking_explores_less() {
    let notation = parse_operators("a+b+ji,i+j+ba").unwrap();
    let config = WickConfig::new();
    let terms = wick_notation(&notation, None, &config).unwrap();
    assert_eq!(terms.len(), 4);

    let creation = [
        Operator::creation('a', 0, OccupationClass::Virtual),
        Operator::creation('i', 1, OccupationClass::Occupied),
    ];
    let annihilation = [
        Operator::annihilation('i', 0, OccupationClass::Occupied),
        Operator::annihilation('a', 1, OccupationClass::Virtual),
    ];
    let (found, stats) = backtrack_contractions(&creation, &annihilation, Sign::Plus);
    assert_eq!(found.len(), 1);
    // root, one surviving branch per slot
    assert_eq!(stats.nodes_explored, 3);
}

#[test]
fn test_length_mismatch() {
    let (creation, _) = general_operators(2);
    let (_, annihilation) = general_operators(1);

    assert_eq!(
        contract(&creation, &annihilation, Sign::Plus, ContractionStrategy::Auto),
        Err(WickError::LengthMismatch { creation: 2, annihilation: 1 })
    );
}

#[test]
fn test_custom_convention() {
    // With occupied starting at 'a', a and b become occupied and may meet i
    let convention = OccupationConvention::new('a', 'p');
    let config = WickConfig::new().with_convention(convention);

    assert!(wick("a+i,b+c", None).unwrap().is_empty());
    assert_eq!(wick_with_config("a+i,b+c", None, &config).unwrap().len(), 1);
}

#[test]
fn test_reject_missing_symbol() {
    let map = OccupationMap::new()
        .with('a', OccupationClass::Virtual)
        .with('c', OccupationClass::Virtual);
    let config = WickConfig::new().with_missing_symbol(MissingSymbolPolicy::Reject);

    assert_eq!(
        wick_with_config("a+c,b+d", Some(&map), &config),
        Err(WickError::UnknownSymbol { symbol: 'b' })
    );

    // the default fills b and d from the convention
    assert_eq!(wick("a+c,b+d", Some(&map)).unwrap().len(), 1);
}

#[test]
fn test_map_from_convention() {
    let notation = parse_operators("a+b+ji,i+j+ba").unwrap();
    let map = OccupationConvention::default().map_for(notation.symbols());
    let config = WickConfig::safe();

    assert_eq!(
        wick_notation(&notation, Some(&map), &config).unwrap(),
        wick("a+b+ji,i+j+ba", None).unwrap()
    );
}

#[test]
fn test_serialize_delta_pairs() {
    let terms = wick("a+c,b+d", None).unwrap();
    let json = serde_json::to_string(&terms[0]).unwrap();
    let decoded: DeltaPairs = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded, terms[0]);
    assert!(json.contains("\"Minus\""));
}
