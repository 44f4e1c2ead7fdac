//! Operator expression parsing and representation.
//!
//! Supports the grouped second-quantized operator grammar:
//! - Single group: `a+i+ji` (two creation, two annihilation)
//! - Several groups: `a+i,i+a,b+j+jb`
//! - Chains of expressions: `a+i,i+a; b+j,j+b`

mod group;
mod notation;
mod parser;
pub mod validation;

pub use group::OperatorGroup;
pub use notation::OperatorNotation;
pub use parser::{parse_operators, parse_operators_chain, parse_operators_strict};
pub use validation::validate_notation;
