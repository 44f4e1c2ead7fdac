//! Alphabetic occupation convention.

use serde::{Deserialize, Serialize};

use super::class::OccupationClass;
use super::map::OccupationMap;

/// Classifies symbols by alphabetic thresholds.
///
/// Symbols before `occupied_start` are virtual, symbols from `occupied_start`
/// up to (excluding) `general_start` are occupied, the rest are general.
/// The default is the usual coupled-cluster labelling: `a`-`h` virtual,
/// `i`-`o` occupied, `p`-`z` general.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupationConvention {
    /// First occupied symbol.
    pub occupied_start: char,
    /// First general symbol.
    pub general_start: char,
}

impl Default for OccupationConvention {
    fn default() -> Self {
        Self {
            occupied_start: 'i',
            general_start: 'p',
        }
    }
}

impl OccupationConvention {
    /// Creates a convention with custom thresholds.
    pub fn new(occupied_start: char, general_start: char) -> Self {
        Self {
            occupied_start,
            general_start,
        }
    }

    /// Classifies a single symbol.
    pub fn classify(&self, symbol: char) -> OccupationClass {
        if symbol >= self.general_start {
            OccupationClass::General
        } else if symbol >= self.occupied_start {
            OccupationClass::Occupied
        } else {
            OccupationClass::Virtual
        }
    }

    /// Builds an explicit map for the given symbols.
    pub fn map_for(&self, symbols: impl IntoIterator<Item = char>) -> OccupationMap {
        symbols
            .into_iter()
            .map(|symbol| (symbol, self.classify(symbol)))
            .collect()
    }
}
