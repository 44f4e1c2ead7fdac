//! Occupation domains of orbital symbols.
//!
//! Every symbol belongs to one of three domains:
//! - Occupied (hole) orbitals, conventionally `i`..`o`
//! - Virtual (particle) orbitals, conventionally `a`..`h`
//! - General orbitals, conventionally `p` and later
//!
//! Occupied and virtual operators can never be contracted with each other.

mod class;
mod convention;
mod map;

pub use class::OccupationClass;
pub use convention::OccupationConvention;
pub use map::{MissingSymbolPolicy, OccupationMap, OccupationResolver};
