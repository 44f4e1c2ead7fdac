//! Configuration for contraction runs.

use serde::{Deserialize, Serialize};

use crate::contraction::ContractionStrategy;
use crate::occupation::{MissingSymbolPolicy, OccupationConvention};

/// Default bound on the number of creation operators.
pub const DEFAULT_MAX_OPERATORS: usize = 12;

/// Configuration options for contraction runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WickConfig {
    /// Strategy for enumerating contractions.
    pub strategy: ContractionStrategy,
    /// Occupation convention for symbols without an explicit class.
    pub convention: OccupationConvention,
    /// Handling of symbols an explicit occupation map omits.
    pub missing_symbol: MissingSymbolPolicy,
    /// Whether to reject characters outside the operator grammar.
    pub strict: bool,
    /// Upper bound on creation operators (the search is factorial).
    pub max_operators: usize,
}

impl Default for WickConfig {
    fn default() -> Self {
        Self {
            strategy: ContractionStrategy::Auto,
            convention: OccupationConvention::default(),
            missing_symbol: MissingSymbolPolicy::UseConvention,
            strict: false,
            max_operators: DEFAULT_MAX_OPERATORS,
        }
    }
}

impl WickConfig {
    /// Creates a new config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the contraction strategy.
    pub fn with_strategy(mut self, strategy: ContractionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the occupation convention.
    pub fn with_convention(mut self, convention: OccupationConvention) -> Self {
        self.convention = convention;
        self
    }

    /// Sets the policy for symbols missing from an explicit map.
    pub fn with_missing_symbol(mut self, policy: MissingSymbolPolicy) -> Self {
        self.missing_symbol = policy;
        self
    }

    /// Enables or disables strict parsing.
    pub fn with_strict(mut self, enabled: bool) -> Self {
        self.strict = enabled;
        self
    }

    /// Sets the operator limit.
    pub fn with_max_operators(mut self, limit: usize) -> Self {
        self.max_operators = limit;
        self
    }

    /// Creates a config optimized for speed.
    pub fn fast() -> Self {
        Self {
            strategy: ContractionStrategy::Backtracking,
            ..Self::default()
        }
    }

    /// Creates a config for checking inputs and results (strict, reference scan).
    pub fn safe() -> Self {
        Self {
            strategy: ContractionStrategy::BruteForce,
            missing_symbol: MissingSymbolPolicy::Reject,
            strict: true,
            ..Self::default()
        }
    }
}
