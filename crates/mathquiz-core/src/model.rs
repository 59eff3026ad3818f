//! Core data model types for mathquiz.
//!
//! An [`Equation`] is one arithmetic problem together with every answer the
//! player submitted for it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::answer::{is_control_word, AnswerStatus};

/// Arithmetic operators an equation can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    /// Supported by the model, but no built-in level selects it.
    Divide,
}

impl Operator {
    /// The symbol used in the canonical string form.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    /// Apply the operator with integer arithmetic.
    ///
    /// Division truncates. Returns `None` on overflow or division by zero.
    pub fn checked_apply(&self, left: i64, right: i64) -> Option<i64> {
        match self {
            Operator::Add => left.checked_add(right),
            Operator::Subtract => left.checked_sub(right),
            Operator::Multiply => left.checked_mul(right),
            Operator::Divide => left.checked_div(right),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "+" | "add" => Ok(Operator::Add),
            "-" | "subtract" | "sub" => Ok(Operator::Subtract),
            "*" | "multiply" | "mul" => Ok(Operator::Multiply),
            "/" | "divide" | "div" => Ok(Operator::Divide),
            other => Err(format!("unknown operator: {other}")),
        }
    }
}

/// A single arithmetic problem and the raw answers submitted for it.
///
/// Two equations are equal when their canonical strings (`"5 + 3"`) match,
/// so `2 + 3` and `3 + 2` are different problems.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Equation {
    /// Left operand.
    pub left: i64,
    /// Right operand.
    pub right: i64,
    /// Operator joining the operands.
    pub operator: Operator,
    /// Raw answers in submission order. Control words are never stored.
    #[serde(default)]
    answers: Vec<String>,
}

impl Equation {
    /// Build an equation exactly as given, with no answers recorded.
    ///
    /// No corrections are applied. Operands drawn from a [`NumberPool`] and
    /// passed through the generator's correction pass always have a result;
    /// hand-built ones such as `1 / 0` do not, see [`Equation::result`].
    ///
    /// [`NumberPool`]: crate::level::NumberPool
    pub fn new(left: i64, operator: Operator, right: i64) -> Self {
        Self {
            left,
            right,
            operator,
            answers: Vec::new(),
        }
    }

    /// The exact integer result, or `None` for a zero divisor or overflow.
    pub fn checked_result(&self) -> Option<i64> {
        self.operator.checked_apply(self.left, self.right)
    }

    /// The exact integer result.
    ///
    /// # Panics
    ///
    /// Panics if the equation divides by zero or overflows `i64`. Generated
    /// equations never do: pools are bounded by `OPERAND_LIMIT` and zero
    /// divisors are replaced.
    pub fn result(&self) -> i64 {
        match self.checked_result() {
            Some(result) => result,
            None => panic!("{self} has no integer result"),
        }
    }

    /// Prompt text shown to the player.
    pub fn question(&self) -> String {
        format!("what does {self} equal?")
    }

    /// Answers recorded so far.
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// Record a raw answer unless it is a control word.
    ///
    /// Returns `true` if the answer was stored.
    pub fn record_answer(&mut self, raw: &str) -> bool {
        if is_control_word(raw) {
            return false;
        }
        self.answers.push(raw.to_string());
        true
    }

    /// Whether `answer` is the string form of the result.
    pub fn is_correct(&self, answer: &str) -> bool {
        self.checked_result()
            .is_some_and(|result| answer == result.to_string())
    }

    /// Exactly one answer, and it was right.
    pub fn answered_correctly(&self) -> bool {
        matches!(self.answers.as_slice(), [only] if self.is_correct(only))
    }

    pub fn not_answered(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn answered_incorrectly(&self) -> bool {
        !self.answered_correctly() && !self.not_answered()
    }

    /// Collapse the three predicates into one status.
    pub fn status(&self) -> AnswerStatus {
        if self.not_answered() {
            AnswerStatus::NotAnswered
        } else if self.answered_correctly() {
            AnswerStatus::Correct
        } else {
            AnswerStatus::Incorrect
        }
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.operator, self.right)
    }
}

impl PartialEq for Equation {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for Equation {}

impl Hash for Equation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}
