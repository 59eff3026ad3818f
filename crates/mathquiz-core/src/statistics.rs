//! First-try scoring and aggregate statistics.
//!
//! Only "usable" equations (at least one recorded answer) count towards the
//! score, and only a single correct first answer counts as correct.

use serde::{Deserialize, Serialize};

use crate::answer::AnswerStatus;
use crate::model::Equation;

/// Fraction of usable equations answered correctly on the first try.
///
/// Returns `None` when nothing was attempted; there is no score to report,
/// which is different from a score of zero.
pub fn percentage_correct(equations: &[Equation]) -> Option<f64> {
    let usable = equations.iter().filter(|e| !e.not_answered()).count();
    if usable == 0 {
        return None;
    }
    let correct = equations.iter().filter(|e| e.answered_correctly()).count();
    Some(correct as f64 / usable as f64)
}

/// Convert a fraction to a whole percentage, rounding half away from zero.
pub fn whole_percent(fraction: f64) -> i64 {
    (fraction * 100.0).round() as i64
}

/// Counts for a finished (or in-progress) session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Equations presented.
    pub total: usize,
    /// Correct on the first and only attempt.
    pub correct: usize,
    /// Attempted, but not correct first time.
    pub incorrect: usize,
    /// Shown, never attempted.
    pub not_answered: usize,
    /// `correct / (correct + incorrect)`, absent when nothing was attempted.
    pub percentage_correct: Option<f64>,
}

impl SessionSummary {
    pub fn from_equations(equations: &[Equation]) -> Self {
        let mut summary = Self {
            total: equations.len(),
            correct: 0,
            incorrect: 0,
            not_answered: 0,
            percentage_correct: percentage_correct(equations),
        };
        for equation in equations {
            match equation.status() {
                AnswerStatus::Correct => summary.correct += 1,
                AnswerStatus::Incorrect => summary.incorrect += 1,
                AnswerStatus::NotAnswered => summary.not_answered += 1,
            }
        }
        summary
    }

    /// Equations that count towards the score.
    pub fn usable(&self) -> usize {
        self.correct + self.incorrect
    }
}
