//! Occupation class of a single symbol.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Occupation domain of an orbital symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OccupationClass {
    /// Occupied (hole) orbital.
    Occupied,
    /// Virtual (particle) orbital.
    Virtual,
    /// Orbital spanning both domains.
    General,
}

impl OccupationClass {
    /// Signed weight used for compatibility tests: +1, -1 or 0.
    #[inline]
    pub fn weight(&self) -> i8 {
        match self {
            OccupationClass::Occupied => 1,
            OccupationClass::Virtual => -1,
            OccupationClass::General => 0,
        }
    }

    /// Returns false only for an occupied/virtual pair.
    #[inline]
    pub fn is_compatible_with(&self, other: OccupationClass) -> bool {
        self.weight() * other.weight() >= 0
    }
}

impl fmt::Display for OccupationClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OccupationClass::Occupied => write!(f, "occupied"),
            OccupationClass::Virtual => write!(f, "virtual"),
            OccupationClass::General => write!(f, "general"),
        }
    }
}
