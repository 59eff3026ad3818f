//! Difficulty levels and their number pools.
//!
//! | Level | Pool      | Operators               |
//! |-------|-----------|-------------------------|
//! | 1     | 0..=30    | add                     |
//! | 2     | 0..=30    | subtract                |
//! | 3     | 0..=30    | add, subtract           |
//! | 4     | 0..=100   | add, subtract           |
//! | 5     | 0..=1000  | add, subtract, multiply |

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::QuizError;
use crate::model::Operator;

/// Largest operand magnitude a pool may hold.
///
/// Keeps every sum, difference and product of two operands inside `i64`.
pub const OPERAND_LIMIT: i64 = 1 << 30;

/// An inclusive, ascending range of integers operands are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumberPool {
    start: i64,
    end: i64,
}

impl NumberPool {
    /// Create a pool `start..=end`. Two distinct values are needed per draw,
    /// and both bounds must lie within `±OPERAND_LIMIT`.
    pub fn new(start: i64, end: i64) -> Result<Self, QuizError> {
        if end <= start {
            return Err(QuizError::PoolTooSmall { start, end });
        }
        if start < -OPERAND_LIMIT || end > OPERAND_LIMIT {
            return Err(QuizError::PoolOutOfRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    /// Number of values in the pool. Bounded by `2 * OPERAND_LIMIT + 1`.
    pub(crate) fn len(&self) -> usize {
        (self.end - self.start) as usize + 1
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.start..=self.end).contains(&value)
    }

    /// Values in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = i64> {
        self.start..=self.end
    }

    /// First non-zero value in iteration order.
    ///
    /// A pool has at least two distinct values, so this is only `None` for a
    /// pool that could not have been constructed.
    pub fn first_nonzero(&self) -> Option<i64> {
        self.iter().find(|&n| n != 0)
    }
}

impl fmt::Display for NumberPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// The number pool and operator set a level draws from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelConfig {
    pool: NumberPool,
    operators: Vec<Operator>,
}

impl LevelConfig {
    pub fn new(pool: NumberPool, operators: Vec<Operator>) -> Result<Self, QuizError> {
        if operators.is_empty() {
            return Err(QuizError::EmptyOperators);
        }
        Ok(Self { pool, operators })
    }

    pub fn pool(&self) -> &NumberPool {
        &self.pool
    }

    /// Never empty.
    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }
}

/// A difficulty level, 1 through 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Level(u8);

impl Level {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(number: u8) -> Result<Self, QuizError> {
        if (Self::MIN..=Self::MAX).contains(&number) {
            Ok(Self(number))
        } else {
            Err(QuizError::InvalidLevel(number.to_string()))
        }
    }

    /// Every level in ascending order.
    pub fn all() -> impl Iterator<Item = Level> {
        (Self::MIN..=Self::MAX).map(Level)
    }

    pub fn number(&self) -> u8 {
        self.0
    }

    /// The built-in pool and operator set for this level.
    pub fn config(&self) -> LevelConfig {
        use Operator::{Add, Multiply, Subtract};

        let (end, operators) = match self.0 {
            1 => (30, vec![Add]),
            2 => (30, vec![Subtract]),
            3 => (30, vec![Add, Subtract]),
            4 => (100, vec![Add, Subtract]),
            _ => (1000, vec![Add, Subtract, Multiply]),
        };
        LevelConfig {
            pool: NumberPool { start: 0, end },
            operators,
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Level {
    type Err = QuizError;

    /// Accepts exactly `"1"` through `"5"`, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.len() != 1 {
            return Err(QuizError::InvalidLevel(trimmed.to_string()));
        }
        trimmed
            .parse::<u8>()
            .ok()
            .and_then(|n| Level::new(n).ok())
            .ok_or_else(|| QuizError::InvalidLevel(trimmed.to_string()))
    }
}
