//! Error type shared by the parsing front-ends of the arbiter.
//!
//! Rule violations are never errors: the gatekeeper answers them with a
//! plain `bool` and the session with a `MoveOutcome`. `ArbiterError` only
//! covers text that could not be turned into engine values (coordinates,
//! FEN records, promotion names).

use std::error::Error;
use std::fmt;

pub type ArbiterResult<T> = Result<T, ArbiterError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArbiterError {
    /// A square coordinate such as `e4` did not parse.
    InvalidAlgebraic(String),
    /// A FEN record was malformed or described an impossible position.
    InvalidFen(String),
    /// A promotion name other than queen/rook/bishop/knight.
    InvalidPromotion(String),
}

impl fmt::Display for ArbiterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArbiterError::InvalidAlgebraic(msg) => write!(f, "invalid algebraic square: {msg}"),
            ArbiterError::InvalidFen(msg) => write!(f, "invalid FEN: {msg}"),
            ArbiterError::InvalidPromotion(name) => {
                write!(f, "invalid promotion choice: {name}")
            }
        }
    }
}

impl Error for ArbiterError {}

#[cfg(test)]
mod tests {
    use super::ArbiterError;

    #[test]
    fn display_carries_context() {
        let err = ArbiterError::InvalidAlgebraic("z9".to_owned());
        assert_eq!(err.to_string(), "invalid algebraic square: z9");

        let err = ArbiterError::InvalidPromotion("king".to_owned());
        assert_eq!(err.to_string(), "invalid promotion choice: king");
    }
}
