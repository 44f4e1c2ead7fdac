//! Error types for operator parsing and contraction.

use alloc::string::String;

/// Errors that can occur while parsing operators or enumerating contractions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum WickError {
    /// Invalid operator expression.
    #[cfg_attr(feature = "std", error("parse error: {message}"))]
    ParseError { message: String },

    /// Character rejected by strict parsing.
    #[cfg_attr(feature = "std", error("invalid character '{character}' at position {position} in group {group}"))]
    InvalidCharacter {
        group: usize,
        position: usize,
        character: char,
    },

    /// A group holds a different number of creation and annihilation operators.
    #[cfg_attr(feature = "std", error("group {group} has {creation} creation and {annihilation} annihilation operators"))]
    GroupCountMismatch {
        group: usize,
        creation: usize,
        annihilation: usize,
    },

    /// The creation and annihilation lists handed to the engine differ in length.
    #[cfg_attr(feature = "std", error("cannot pair {creation} creation operators with {annihilation} annihilation operators"))]
    LengthMismatch { creation: usize, annihilation: usize },

    /// An operator sits on the wrong side of a pairing.
    #[cfg_attr(feature = "std", error("operator '{symbol}' at position {position} is not a {expected} operator"))]
    RoleMismatch {
        symbol: char,
        position: usize,
        expected: &'static str,
    },

    /// Symbol missing from an explicit occupation map.
    #[cfg_attr(feature = "std", error("no occupation class for symbol '{symbol}'"))]
    UnknownSymbol { symbol: char },

    /// Factorial enumeration refused.
    #[cfg_attr(feature = "std", error("{count} creation operators exceeds the limit of {limit}"))]
    TooManyOperators { count: usize, limit: usize },
}

impl WickError {
    pub fn parse(message: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
        }
    }
}

/// Result type for contraction operations.
pub type WickResult<T> = core::result::Result<T, WickError>;
