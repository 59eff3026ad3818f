//! Equation generation.
//!
//! A generator draws two distinct operands and one operator, then runs the
//! correction pass: a zero divisor is replaced by the pool's first non-zero
//! value, and subtraction operands are ordered so the result is never
//! negative. Corrections happen after the draw rather than by rejection
//! sampling, so generation always terminates.
//!
//! [`candidates`] walks the same space in a fixed order, for callers that
//! need to know whether any unused equation is left at all.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

use crate::level::{LevelConfig, NumberPool};
use crate::model::{Equation, Operator};

/// Anything that can produce candidate equations for a level.
pub trait EquationSource {
    /// Produce one corrected candidate. Duplicate checks are the caller's job.
    fn generate(&mut self, config: &LevelConfig) -> Equation;
}

/// Apply the post-draw corrections and build the equation.
pub fn corrected(left: i64, operator: Operator, right: i64, pool: &NumberPool) -> Equation {
    let (left, right) = match operator {
        Operator::Divide if right == 0 => (left, pool.first_nonzero().unwrap_or(right)),
        Operator::Subtract if left < right => (right, left),
        _ => (left, right),
    };
    Equation::new(left, operator, right)
}

/// Every corrected equation a level can produce, in a fixed order.
///
/// Operands ascend left-major, operators follow the level's order. Corrections
/// can map two draws to the same equation, so the sequence may repeat.
pub fn candidates(config: &LevelConfig) -> impl Iterator<Item = Equation> + '_ {
    let pool = config.pool();
    let operators = config.operators();
    pool.iter().flat_map(move |left| {
        pool.iter()
            .filter(move |&right| right != left)
            .flat_map(move |right| {
                operators
                    .iter()
                    .map(move |&operator| corrected(left, operator, right, pool))
            })
    })
}

/// Uniform random generator backed by a seedable [`StdRng`].
#[derive(Debug, Clone)]
pub struct RandomGenerator {
    rng: StdRng,
}

impl RandomGenerator {
    /// Seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic generator for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl EquationSource for RandomGenerator {
    fn generate(&mut self, config: &LevelConfig) -> Equation {
        let pool = config.pool();
        let operators = config.operators();

        // Two distinct positions, without replacement.
        let picks = index::sample(&mut self.rng, pool.len(), 2);
        let left = pool.start() + picks.index(0) as i64;
        let right = pool.start() + picks.index(1) as i64;

        let operator = operators[self.rng.random_range(0..operators.len())];
        corrected(left, operator, right, pool)
    }
}

/// Replays a fixed script of draws, cycling when it runs out.
///
/// Draws still go through [`corrected`], so a scripted `3 - 5` comes out as
/// `5 - 3` exactly as a random one would.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    script: VecDeque<(i64, Operator, i64)>,
}

impl ScriptedSource {
    pub fn new(draws: impl IntoIterator<Item = (i64, Operator, i64)>) -> Self {
        Self {
            script: draws.into_iter().collect(),
        }
    }
}

impl EquationSource for ScriptedSource {
    fn generate(&mut self, config: &LevelConfig) -> Equation {
        let (left, operator, right) = match self.script.pop_front() {
            Some(draw) => {
                self.script.push_back(draw);
                draw
            }
            None => (config.pool().start(), config.operators()[0], config.pool().end()),
        };
        corrected(left, operator, right, config.pool())
    }
}
