//! Complete operator expression representation.

use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use super::group::OperatorGroup;

/// Parsed operator expression.
///
/// Holds the groups in input order; the position of a group is its group id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorNotation {
    /// Operator groups, indexed by group id.
    groups: Vec<OperatorGroup>,
    /// Original expression string (if available).
    original: Option<String>,
}

impl OperatorNotation {
    /// Creates a notation from parsed groups.
    pub fn new(groups: Vec<OperatorGroup>) -> Self {
        Self {
            groups,
            original: None,
        }
    }

    /// Sets the original expression string.
    pub fn with_original(mut self, original: impl Into<String>) -> Self {
        self.original = Some(original.into());
        self
    }

    /// Returns the original expression string.
    pub fn original(&self) -> Option<&str> {
        self.original.as_deref()
    }

    #[inline]
    pub fn groups(&self) -> &[OperatorGroup] {
        &self.groups
    }

    #[inline]
    pub fn num_groups(&self) -> usize {
        self.groups.len()
    }

    /// Total number of creation operators across all groups.
    pub fn num_creation(&self) -> usize {
        self.groups.iter().map(|g| g.creation().len()).sum()
    }

    /// Total number of annihilation operators across all groups.
    pub fn num_annihilation(&self) -> usize {
        self.groups.iter().map(|g| g.annihilation().len()).sum()
    }

    /// Returns true if no group holds any operator.
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(OperatorGroup::is_empty)
    }

    /// Returns all distinct symbols, sorted.
    pub fn symbols(&self) -> BTreeSet<char> {
        self.groups.iter().flat_map(OperatorGroup::symbols).collect()
    }

    /// Creation symbols of all groups, in group order.
    pub fn creation_symbols(&self) -> Vec<char> {
        self.groups
            .iter()
            .flat_map(|g| g.creation().iter().copied())
            .collect()
    }

    /// Annihilation symbols of all groups, in group order.
    pub fn annihilation_symbols(&self) -> Vec<char> {
        self.groups
            .iter()
            .flat_map(|g| g.annihilation().iter().copied())
            .collect()
    }
}

impl fmt::Display for OperatorNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", group)?;
        }
        Ok(())
    }
}
