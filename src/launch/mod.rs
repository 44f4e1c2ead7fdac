//! Launch module for contraction runs.
//!
//! Provides the high-level API from an operator expression to delta terms.

mod config;
mod executor;

pub use config::{DEFAULT_MAX_OPERATORS, WickConfig};
pub use executor::{render_expression, wick, wick_notation, wick_with_config};
