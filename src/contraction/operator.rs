//! Second-quantized operators and their assembly from parsed groups.

use alloc::vec::Vec;
use core::fmt;

use serde::{Deserialize, Serialize};

use super::sign::{Sign, group_sign};
use crate::error::{WickError, WickResult};
use crate::notation::{OperatorNotation, validate_notation};
use crate::occupation::{OccupationClass, OccupationResolver};

/// Whether an operator creates or annihilates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Creation,
    Annihilation,
}

impl Role {
    pub fn name(&self) -> &'static str {
        match self {
            Role::Creation => "creation",
            Role::Annihilation => "annihilation",
        }
    }
}

/// A single creation or annihilation operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Operator {
    symbol: char,
    group: usize,
    role: Role,
    occupation: OccupationClass,
}

impl Operator {
    pub fn new(symbol: char, group: usize, role: Role, occupation: OccupationClass) -> Self {
        Self {
            symbol,
            group,
            role,
            occupation,
        }
    }

    pub fn creation(symbol: char, group: usize, occupation: OccupationClass) -> Self {
        Self::new(symbol, group, Role::Creation, occupation)
    }

    pub fn annihilation(symbol: char, group: usize, occupation: OccupationClass) -> Self {
        Self::new(symbol, group, Role::Annihilation, occupation)
    }

    #[inline]
    pub fn symbol(&self) -> char {
        self.symbol
    }

    #[inline]
    pub fn group(&self) -> usize {
        self.group
    }

    #[inline]
    pub fn role(&self) -> Role {
        self.role
    }

    #[inline]
    pub fn occupation(&self) -> OccupationClass {
        self.occupation
    }

    #[inline]
    pub fn is_creation(&self) -> bool {
        self.role == Role::Creation
    }

    /// Returns true if `self` may be contracted with `other`.
    ///
    /// Operators of the same group never contract, and neither do an
    /// occupied and a virtual operator.
    #[inline]
    pub fn can_pair_with(&self, other: &Operator) -> bool {
        self.group != other.group && self.occupation.is_compatible_with(other.occupation)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.role {
            Role::Creation => write!(f, "{}+", self.symbol),
            Role::Annihilation => write!(f, "{}", self.symbol),
        }
    }
}

/// Flattened operators of a whole expression, ready for contraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorSet {
    /// Creation operators in group order.
    pub creation: Vec<Operator>,
    /// Annihilation operators in group order.
    pub annihilation: Vec<Operator>,
    /// Product of the per-group signs.
    pub base_sign: Sign,
}

impl OperatorSet {
    /// Builds operators from a parsed expression.
    ///
    /// Fails if any group is unbalanced or a symbol cannot be classified.
    pub fn assemble(
        notation: &OperatorNotation,
        occupations: &OccupationResolver<'_>,
    ) -> WickResult<Self> {
        validate_notation(notation)?;

        let n = notation.num_creation();
        let mut creation = Vec::with_capacity(n);
        let mut annihilation = Vec::with_capacity(n);
        let mut base_sign = Sign::Plus;

        for (group, operators) in notation.groups().iter().enumerate() {
            base_sign *= group_sign(operators.len());

            for (&c, &a) in operators.creation().iter().zip(operators.annihilation()) {
                creation.push(Operator::creation(c, group, occupations.resolve(c)?));
                annihilation.push(Operator::annihilation(a, group, occupations.resolve(a)?));
            }
        }

        Ok(Self {
            creation,
            annihilation,
            base_sign,
        })
    }

    /// Number of creation operators.
    #[inline]
    pub fn len(&self) -> usize {
        self.creation.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.creation.is_empty()
    }
}

/// Checks that two lists can be paired position by position.
pub fn check_roles(creation: &[Operator], annihilation: &[Operator]) -> WickResult<()> {
    if creation.len() != annihilation.len() {
        return Err(WickError::LengthMismatch {
            creation: creation.len(),
            annihilation: annihilation.len(),
        });
    }

    let misplaced = |ops: &[Operator], expected: Role| {
        ops.iter()
            .enumerate()
            .find(|(_, op)| op.role != expected)
            .map(|(position, op)| WickError::RoleMismatch {
                symbol: op.symbol,
                position,
                expected: expected.name(),
            })
    };

    if let Some(err) = misplaced(creation, Role::Creation) {
        return Err(err);
    }
    if let Some(err) = misplaced(annihilation, Role::Annihilation) {
        return Err(err);
    }

    Ok(())
}
