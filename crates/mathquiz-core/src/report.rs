//! End-of-session result lines.

use std::fmt;

use crate::answer::AnswerStatus;
use crate::model::Equation;
use crate::statistics::{percentage_correct, whole_percent};

/// One line of the end-of-session report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    Correct {
        equation: String,
        result: i64,
    },
    Incorrect {
        equation: String,
        answers: Vec<String>,
        result: i64,
    },
    NotAnswered {
        equation: String,
    },
}

impl ReportLine {
    pub fn for_equation(equation: &Equation) -> Self {
        let text = equation.to_string();
        match equation.status() {
            AnswerStatus::Correct => ReportLine::Correct {
                equation: text,
                result: equation.result(),
            },
            AnswerStatus::Incorrect => ReportLine::Incorrect {
                equation: text,
                answers: equation.answers().to_vec(),
                result: equation.result(),
            },
            AnswerStatus::NotAnswered => ReportLine::NotAnswered { equation: text },
        }
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportLine::Correct { equation, result } => {
                write!(f, "Correct: {equation} equals {result}")
            }
            ReportLine::Incorrect {
                equation,
                answers,
                result,
            } => write!(
                f,
                "This was a tough one. You gave {} answers ({}) for {equation}. {result} was correct",
                answers.len(),
                answers.join(", ")
            ),
            ReportLine::NotAnswered { equation } => write!(f, "{equation} was not answered"),
        }
    }
}

/// The headline score sentence.
pub fn score_line(fraction: f64) -> String {
    format!(
        "You answered {} percent correct on the first try.",
        whole_percent(fraction)
    )
}

/// Score line (only when a score exists) followed by one line per equation,
/// in presentation order.
pub fn format_results(equations: &[Equation]) -> Vec<String> {
    let mut lines = Vec::with_capacity(equations.len() + 1);
    if let Some(fraction) = percentage_correct(equations) {
        lines.push(score_line(fraction));
    }
    lines.extend(
        equations
            .iter()
            .map(|e| ReportLine::for_equation(e).to_string()),
    );
    lines
}
