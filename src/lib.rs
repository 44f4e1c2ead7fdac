//! # cc-wick
//!
//! Wick contractions of grouped creation/annihilation operators, for
//! deriving coupled-cluster style expressions symbolically.
//!
//! ## Features
//!
//! - Operator expression parsing (`a+b+ji,i+a`)
//! - Occupied/virtual/general classification with injectable conventions
//! - Exclusion of same-group and occupied/virtual pairings
//! - Permutation parity signs
//! - Lazy brute-force enumeration and a pruned backtracking search
//! - LaTeX rendering of signed Kronecker-delta products
//!
//! ## Example
//!
//! ```ignore
//! use cc_wick::{render_expression, wick};
//!
//! let terms = wick("a+b+ji,i+a,j+b", None)?;
//! println!("{}", render_expression(&terms));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod contraction;
pub mod error;
pub mod launch;
pub mod notation;
pub mod occupation;

pub use contraction::{ContractionStrategy, DeltaPair, DeltaPairs, Operator, Role, Sign, contract};
pub use error::{WickError, WickResult};
pub use launch::{WickConfig, render_expression, wick, wick_with_config};
pub use notation::{OperatorGroup, OperatorNotation, parse_operators};
pub use occupation::{MissingSymbolPolicy, OccupationClass, OccupationConvention, OccupationMap};
