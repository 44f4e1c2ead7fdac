//! A group of operators originating from one factor.

use alloc::vec::Vec;
use core::fmt;

/// Creation and annihilation symbols that came from the same factor.
///
/// For example, in `a+i+ji,b+jb` the first group holds creation symbols
/// `a`, `i` and annihilation symbols `j`, `i`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OperatorGroup {
    /// Creation symbols in input order.
    creation: Vec<char>,
    /// Annihilation symbols in input order.
    annihilation: Vec<char>,
}

impl OperatorGroup {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a group from explicit symbol lists.
    pub fn from_symbols(
        creation: impl IntoIterator<Item = char>,
        annihilation: impl IntoIterator<Item = char>,
    ) -> Self {
        Self {
            creation: creation.into_iter().collect(),
            annihilation: annihilation.into_iter().collect(),
        }
    }

    pub fn push_creation(&mut self, symbol: char) {
        self.creation.push(symbol);
    }

    pub fn push_annihilation(&mut self, symbol: char) {
        self.annihilation.push(symbol);
    }

    #[inline]
    pub fn creation(&self) -> &[char] {
        &self.creation
    }

    #[inline]
    pub fn annihilation(&self) -> &[char] {
        &self.annihilation
    }

    /// Returns true if both lists have the same length.
    #[inline]
    pub fn is_balanced(&self) -> bool {
        self.creation.len() == self.annihilation.len()
    }

    /// Number of creation/annihilation pairs in a balanced group.
    #[inline]
    pub fn len(&self) -> usize {
        self.creation.len()
    }

    /// Returns true if the group holds no operators at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.creation.is_empty() && self.annihilation.is_empty()
    }

    /// Iterates over every symbol, creation symbols first.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.creation.iter().chain(self.annihilation.iter()).copied()
    }
}

/// Renders the group in creation-block form, e.g. `a+i+ji`.
impl fmt::Display for OperatorGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.creation {
            write!(f, "{}+", c)?;
        }
        for c in &self.annihilation {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
