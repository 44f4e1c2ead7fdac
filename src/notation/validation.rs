//! Validation for parsed operator expressions.

use super::notation::OperatorNotation;
use crate::error::{WickError, WickResult};

/// Validates an operator expression for contraction.
///
/// Checks:
/// - Every group holds as many creation as annihilation operators
pub fn validate_notation(notation: &OperatorNotation) -> WickResult<()> {
    validate_group_counts(notation)?;
    Ok(())
}

/// Validates that creation and annihilation counts match per group.
fn validate_group_counts(notation: &OperatorNotation) -> WickResult<()> {
    for (group, operators) in notation.groups().iter().enumerate() {
        if !operators.is_balanced() {
            return Err(WickError::GroupCountMismatch {
                group,
                creation: operators.creation().len(),
                annihilation: operators.annihilation().len(),
            });
        }
    }
    Ok(())
}
