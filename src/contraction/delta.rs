//! Signed products of Kronecker deltas.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::operator::Operator;
use super::sign::Sign;

/// One contracted pair: a creation symbol and an annihilation symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeltaPair {
    pub creation: char,
    pub annihilation: char,
}

impl DeltaPair {
    pub fn new(creation: char, annihilation: char) -> Self {
        Self {
            creation,
            annihilation,
        }
    }

    /// LaTeX Kronecker delta, e.g. `\delta_{ai}`.
    pub fn to_latex(&self) -> String {
        alloc::format!("\\delta_{{{}{}}}", self.creation, self.annihilation)
    }
}

/// Two-symbol subscript, creation symbol first.
impl fmt::Display for DeltaPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.creation, self.annihilation)
    }
}

/// The delta product of one full contraction, with its sign.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeltaPairs {
    pairs: SmallVec<[DeltaPair; 8]>,
    sign: Sign,
}

impl DeltaPairs {
    /// Creates a product from explicit pairs.
    pub fn new(pairs: impl IntoIterator<Item = DeltaPair>, sign: Sign) -> Self {
        Self {
            pairs: pairs.into_iter().collect(),
            sign,
        }
    }

    /// Zips creation and annihilation operators position by position.
    pub fn from_operators<'a>(
        creation: impl IntoIterator<Item = &'a Operator>,
        annihilation: &[Operator],
        sign: Sign,
    ) -> Self {
        let pairs = creation
            .into_iter()
            .zip(annihilation)
            .map(|(c, a)| DeltaPair::new(c.symbol(), a.symbol()));
        Self::new(pairs, sign)
    }

    #[inline]
    pub fn pairs(&self) -> &[DeltaPair] {
        &self.pairs
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pair subscripts as strings, e.g. `["ai", "bj"]`.
    pub fn pair_strings(&self) -> Vec<String> {
        self.pairs.iter().map(|p| alloc::format!("{}", p)).collect()
    }

    /// Renders the signed fragment, e.g. ` - \delta_{ai}\delta_{bj}`.
    pub fn to_latex(&self) -> String {
        alloc::format!("{}", self)
    }
}

impl fmt::Display for DeltaPairs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " {} ", self.sign)?;
        for pair in &self.pairs {
            write!(f, "\\delta_{{{}}}", pair)?;
        }
        Ok(())
    }
}
