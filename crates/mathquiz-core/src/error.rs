//! Quiz error types.
//!
//! Library functions return these so callers can tell a bad level selection
//! apart from an exhausted equation pool without string matching.

use thiserror::Error;

/// Errors that can occur while configuring or running a quiz session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    /// The level selector was not one of the known levels.
    #[error("unknown level '{0}', choose a number between 1 and 5")]
    InvalidLevel(String),

    /// A number pool must hold at least two values to draw distinct operands.
    #[error("number pool {start}..={end} must contain at least two values")]
    PoolTooSmall { start: i64, end: i64 },

    /// A number pool reaches past the operand limit.
    #[error("number pool {start}..={end} exceeds the operand limit")]
    PoolOutOfRange { start: i64, end: i64 },

    /// A level was configured without any operators.
    #[error("operator set must not be empty")]
    EmptyOperators,

    /// Every equation the level can produce has already been used.
    #[error("no unused equation left for level {level} after {attempts} draws and a full scan")]
    PoolExhausted { level: u8, attempts: u32 },

    /// An answer was recorded before any equation was presented.
    #[error("no equation has been presented yet")]
    NoCurrentEquation,
}

impl QuizError {
    /// Returns `true` if the session cannot produce any more equations.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, QuizError::PoolExhausted { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhausted_is_classified() {
        let err = QuizError::PoolExhausted {
            level: 1,
            attempts: 10,
        };
        assert!(err.is_exhausted());
        assert!(!QuizError::EmptyOperators.is_exhausted());
        assert_eq!(
            err.to_string(),
            "no unused equation left for level 1 after 10 draws and a full scan"
        );
    }
}
