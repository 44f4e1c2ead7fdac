//! Contraction entry points.
//!
//! Orchestrates parsing, occupation lookup, operator assembly and the search.

use alloc::string::String;
use alloc::vec::Vec;

use super::config::WickConfig;
use crate::contraction::{DeltaPairs, OperatorSet, contract};
use crate::error::{WickError, WickResult};
use crate::notation::{OperatorNotation, parse_operators, parse_operators_strict};
use crate::occupation::{OccupationMap, OccupationResolver};

/// Contracts an operator expression with the default configuration.
///
/// # Arguments
/// * `expression` - Comma-separated operator groups (e.g., "a+i,i+a")
/// * `occupations` - Optional explicit occupation classes; symbols it omits
///   fall back to the alphabetic convention
///
/// # Example
///
/// ```ignore
/// let terms = wick("a+i,j+b", None)?;
/// let latex = render_expression(&terms);
/// ```
pub fn wick(expression: &str, occupations: Option<&OccupationMap>) -> WickResult<Vec<DeltaPairs>> {
    wick_with_config(expression, occupations, &WickConfig::default())
}

/// Contracts an operator expression with an explicit configuration.
pub fn wick_with_config(
    expression: &str,
    occupations: Option<&OccupationMap>,
    config: &WickConfig,
) -> WickResult<Vec<DeltaPairs>> {
    let notation = if config.strict {
        parse_operators_strict(expression)?
    } else {
        parse_operators(expression)?
    };

    wick_notation(&notation, occupations, config)
}

/// Contracts a pre-parsed expression.
///
/// Useful when the same expression is contracted under several occupation maps.
pub fn wick_notation(
    notation: &OperatorNotation,
    occupations: Option<&OccupationMap>,
    config: &WickConfig,
) -> WickResult<Vec<DeltaPairs>> {
    let resolver = OccupationResolver::new(occupations, config.convention, config.missing_symbol);
    let operators = OperatorSet::assemble(notation, &resolver)?;

    if operators.len() > config.max_operators {
        return Err(WickError::TooManyOperators {
            count: operators.len(),
            limit: config.max_operators,
        });
    }

    tracing::debug!(
        groups = notation.num_groups(),
        operators = operators.len(),
        base_sign = operators.base_sign.value(),
        strategy = ?config.strategy,
        "contracting operator expression"
    );

    let terms = contract(
        &operators.creation,
        &operators.annihilation,
        operators.base_sign,
        config.strategy,
    )?;

    tracing::debug!(terms = terms.len(), "contraction finished");

    Ok(terms)
}

/// Concatenates the signed fragments of all terms into one expression.
pub fn render_expression(terms: &[DeltaPairs]) -> String {
    terms.iter().map(DeltaPairs::to_latex).collect()
}
