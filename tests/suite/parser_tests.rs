//! Parser tests for operator expressions.

use cc_wick::notation::{parse_operators, parse_operators_chain, parse_operators_strict};
use cc_wick::WickError;
use pretty_assertions::assert_eq;

#[test]
fn test_parse_single_group() {
    let notation = parse_operators("a+b+ji").unwrap();
    assert_eq!(notation.num_groups(), 1);
    assert_eq!(notation.creation_symbols(), vec!['a', 'b']);
    assert_eq!(notation.annihilation_symbols(), vec!['j', 'i']);
}

#[test]
fn test_parse_three_groups() {
    let notation = parse_operators("a+b+ji,i+a,j+b").unwrap();
    assert_eq!(notation.num_groups(), 3);
    assert_eq!(notation.num_creation(), 4);
    assert_eq!(notation.num_annihilation(), 4);
}

#[test]
fn test_creation_extracted_before_annihilation() {
    // "ab+c" -> creation b; the remainder "ac" gives annihilation a, c
    let notation = parse_operators("ab+c").unwrap();
    assert_eq!(notation.creation_symbols(), vec!['b']);
    assert_eq!(notation.annihilation_symbols(), vec!['a', 'c']);
}

#[test]
fn test_uppercase_is_ignored() {
    let notation = parse_operators("A+a+I").unwrap();
    assert_eq!(notation.creation_symbols(), vec!['a']);
    assert!(notation.annihilation_symbols().is_empty());
}

#[test]
fn test_display_normalizes() {
    let notation = parse_operators("ja+, b+ i").unwrap();
    assert_eq!(notation.to_string(), "a+j,b+i");
}

#[test]
fn test_strict_reports_position() {
    let result = parse_operators_strict("a+i,j+2b");
    assert_eq!(
        result.unwrap_err(),
        WickError::InvalidCharacter { group: 1, position: 2, character: '2' }
    );
}

#[test]
fn test_parse_chain() {
    let notations = parse_operators_chain("a+i,i+a;b+j,j+b;").unwrap();
    assert_eq!(notations.len(), 3);
    assert!(notations[2].is_empty());
}
