//! Explicit symbol to occupation mappings.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use super::class::OccupationClass;
use super::convention::OccupationConvention;
use crate::error::{WickError, WickResult};

/// Caller-supplied occupation classes, keyed by symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupationMap {
    classes: HashMap<char, OccupationClass>,
}

impl OccupationMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the class of a symbol, returning the previous one.
    pub fn insert(&mut self, symbol: char, class: OccupationClass) -> Option<OccupationClass> {
        self.classes.insert(symbol, class)
    }

    /// Builder-style insert.
    pub fn with(mut self, symbol: char, class: OccupationClass) -> Self {
        self.insert(symbol, class);
        self
    }

    #[inline]
    pub fn get(&self, symbol: char) -> Option<OccupationClass> {
        self.classes.get(&symbol).copied()
    }

    #[inline]
    pub fn contains(&self, symbol: char) -> bool {
        self.classes.contains_key(&symbol)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl FromIterator<(char, OccupationClass)> for OccupationMap {
    fn from_iter<I: IntoIterator<Item = (char, OccupationClass)>>(iter: I) -> Self {
        Self {
            classes: iter.into_iter().collect(),
        }
    }
}

/// What to do with a symbol that an explicit map does not mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MissingSymbolPolicy {
    /// Classify it with the configured convention.
    #[default]
    UseConvention,
    /// Treat it as a general orbital.
    General,
    /// Fail with [`WickError::UnknownSymbol`].
    Reject,
}

/// Resolves symbols against an optional explicit map and a fallback convention.
#[derive(Debug, Clone, Copy)]
pub struct OccupationResolver<'a> {
    map: Option<&'a OccupationMap>,
    convention: OccupationConvention,
    policy: MissingSymbolPolicy,
}

impl<'a> OccupationResolver<'a> {
    pub fn new(
        map: Option<&'a OccupationMap>,
        convention: OccupationConvention,
        policy: MissingSymbolPolicy,
    ) -> Self {
        Self {
            map,
            convention,
            policy,
        }
    }

    /// Resolves using the convention only.
    pub fn convention(convention: OccupationConvention) -> Self {
        Self::new(None, convention, MissingSymbolPolicy::UseConvention)
    }

    /// Returns the occupation class of `symbol`.
    ///
    /// Without an explicit map the convention always applies and the policy
    /// is not consulted.
    pub fn resolve(&self, symbol: char) -> WickResult<OccupationClass> {
        let Some(map) = self.map else {
            return Ok(self.convention.classify(symbol));
        };

        if let Some(class) = map.get(symbol) {
            return Ok(class);
        }

        match self.policy {
            MissingSymbolPolicy::UseConvention => Ok(self.convention.classify(symbol)),
            MissingSymbolPolicy::General => Ok(OccupationClass::General),
            MissingSymbolPolicy::Reject => Err(WickError::UnknownSymbol { symbol }),
        }
    }
}
