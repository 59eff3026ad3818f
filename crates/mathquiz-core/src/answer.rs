//! Control words and answer status.
//!
//! The session and the interactive driver both classify raw input through
//! [`ControlWord::parse`], so "is this an answer or a signal" has exactly one
//! definition.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reserved input that is a signal rather than an answer attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlWord {
    Stop,
    Quit,
    /// An empty (or whitespace-only) line.
    Blank,
}

impl ControlWord {
    /// Classify raw input, ignoring surrounding whitespace and case.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "stop" => Some(ControlWord::Stop),
            "quit" => Some(ControlWord::Quit),
            "" => Some(ControlWord::Blank),
            _ => None,
        }
    }

    /// `stop` and `quit` end the game; a blank line does not.
    pub fn terminates(&self) -> bool {
        matches!(self, ControlWord::Stop | ControlWord::Quit)
    }
}

/// Returns `true` if `raw` must never be recorded as an answer.
pub fn is_control_word(raw: &str) -> bool {
    ControlWord::parse(raw).is_some()
}

/// Returns `true` if `raw` asks to end the current game.
pub fn is_stop_word(raw: &str) -> bool {
    ControlWord::parse(raw).is_some_and(|w| w.terminates())
}

/// How an equation was answered over the course of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerStatus {
    /// One answer, and it was right.
    Correct,
    /// At least one answer, but not a single correct first attempt.
    Incorrect,
    /// Shown, never attempted.
    NotAnswered,
}

impl fmt::Display for AnswerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerStatus::Correct => write!(f, "correct"),
            AnswerStatus::Incorrect => write!(f, "incorrect"),
            AnswerStatus::NotAnswered => write!(f, "not answered"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_and_whitespace_insensitive() {
        assert_eq!(ControlWord::parse(" Stop "), Some(ControlWord::Stop));
        assert_eq!(ControlWord::parse("QUIT"), Some(ControlWord::Quit));
        assert_eq!(ControlWord::parse(""), Some(ControlWord::Blank));
        assert_eq!(ControlWord::parse("\t"), Some(ControlWord::Blank));
        assert_eq!(ControlWord::parse("8"), None);
        assert_eq!(ControlWord::parse("stopp"), None);
    }

    #[test]
    fn blank_does_not_terminate() {
        assert!(is_control_word(""));
        assert!(!is_stop_word(""));
        assert!(is_stop_word("quit"));
        assert!(is_stop_word("  STOP"));
        assert!(!is_stop_word("42"));
    }
}
