//! Operator expression parser.
//!
//! Parses strings like "a+i+ji,b+jb" into structured OperatorNotation.

use alloc::string::String;
use alloc::vec::Vec;

use super::group::OperatorGroup;
use super::notation::OperatorNotation;
use crate::error::{WickError, WickResult};

/// Parses an operator expression, ignoring characters outside the grammar.
///
/// # Grammar
///
/// ```text
/// expression  ::= group (',' group)*
/// group       ::= (creation | annihilation)*
/// creation    ::= symbol '+'
/// annihilation::= symbol
/// symbol      ::= [a-z]
/// ```
///
/// Creation tokens are extracted first and removed from the group text;
/// annihilation symbols are then read from what is left, in order.
///
/// # Examples
///
/// ```ignore
/// let notation = parse_operators("a+i")?;          // single excitation
/// let notation = parse_operators("a+b+ji,i+a")?;   // two groups
/// ```
pub fn parse_operators(expression: &str) -> WickResult<OperatorNotation> {
    parse_with(expression, false)
}

/// Parses an operator expression, rejecting characters outside the grammar.
///
/// Ascii whitespace is still allowed anywhere.
pub fn parse_operators_strict(expression: &str) -> WickResult<OperatorNotation> {
    parse_with(expression, true)
}

pub(crate) fn parse_with(expression: &str, strict: bool) -> WickResult<OperatorNotation> {
    let mut groups = Vec::new();

    for (group_id, group_str) in expression.split(',').enumerate() {
        if strict {
            check_group(group_id, group_str)?;
        }
        groups.push(parse_group(group_str));
    }

    Ok(OperatorNotation::new(groups).with_original(expression))
}

/// Parses a single group in two passes.
fn parse_group(s: &str) -> OperatorGroup {
    let mut group = OperatorGroup::new();
    let mut remainder = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    // Pass 1: creation tokens
    while let Some(c) = chars.next() {
        if c.is_ascii_lowercase() && chars.peek() == Some(&'+') {
            chars.next();
            group.push_creation(c);
        } else {
            remainder.push(c);
        }
    }

    // Pass 2: annihilation symbols from the remainder
    for c in remainder.chars().filter(char::is_ascii_lowercase) {
        group.push_annihilation(c);
    }

    group
}

/// Rejects any character that neither pass would consume.
fn check_group(group: usize, s: &str) -> WickResult<()> {
    let mut previous: Option<char> = None;

    for (position, c) in s.chars().enumerate() {
        let valid = match c {
            'a'..='z' => true,
            '+' => matches!(previous, Some('a'..='z')),
            ' ' | '\t' | '\n' | '\r' => true,
            _ => false,
        };

        if !valid {
            return Err(WickError::InvalidCharacter {
                group,
                position,
                character: c,
            });
        }

        // A consumed '+' cannot mark a second creation
        previous = if c == '+' { None } else { Some(c) };
    }

    Ok(())
}

/// Parses several `;`-separated expressions.
///
/// Format: "a+i,i+a; b+j,j+b"
pub fn parse_operators_chain(expressions: &str) -> WickResult<Vec<OperatorNotation>> {
    expressions
        .split(';')
        .map(|s| parse_operators(s.trim()))
        .collect()
}
