//! Session tracking: unique equations per run, answers, and results.

use std::collections::HashSet;

use uuid::Uuid;

use crate::error::QuizError;
use crate::generator::{candidates, EquationSource, RandomGenerator};
use crate::level::{Level, LevelConfig};
use crate::model::Equation;
use crate::report;
use crate::statistics::{self, SessionSummary};

/// Default number of draws before a session gives up on finding a new equation.
pub const DEFAULT_MAX_REGENERATIONS: u32 = 1000;

/// One quiz run at a fixed level.
///
/// Equations are kept in presentation order and no two share a canonical
/// string.
#[derive(Debug)]
pub struct Session<G = RandomGenerator> {
    id: Uuid,
    level: Level,
    config: LevelConfig,
    equations: Vec<Equation>,
    seen: HashSet<String>,
    generator: G,
    max_regenerations: u32,
}

impl Session<RandomGenerator> {
    /// A session at `level` with an entropy-seeded generator.
    pub fn new(level: Level) -> Self {
        Self::with_generator(level, RandomGenerator::from_entropy())
    }
}

impl<G: EquationSource> Session<G> {
    /// A session at `level` using the built-in level table.
    pub fn with_generator(level: Level, generator: G) -> Self {
        Self::with_level_config(level, level.config(), generator)
    }

    /// A session with an explicit pool and operator set.
    pub fn with_level_config(level: Level, config: LevelConfig, generator: G) -> Self {
        let id = Uuid::new_v4();
        tracing::info!(
            session_id = %id,
            level = level.number(),
            pool = %config.pool(),
            "session started"
        );
        Self {
            id,
            level,
            config,
            equations: Vec::new(),
            seen: HashSet::new(),
            generator,
            max_regenerations: DEFAULT_MAX_REGENERATIONS,
        }
    }

    /// Cap the draws per [`next_equation`](Self::next_equation) call. At least one.
    pub fn with_max_regenerations(mut self, attempts: u32) -> Self {
        self.max_regenerations = attempts.max(1);
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn level_config(&self) -> &LevelConfig {
        &self.config
    }

    /// Equations in presentation order.
    pub fn equations(&self) -> &[Equation] {
        &self.equations
    }

    /// The equation most recently presented.
    pub fn current(&self) -> Option<&Equation> {
        self.equations.last()
    }

    /// Draw, reject duplicates, record and return the next equation.
    ///
    /// Every draw goes through the generator's correction pass. Once the
    /// retry budget is spent the level's candidates are scanned in a fixed
    /// order, so [`QuizError::PoolExhausted`] means every equation the level
    /// can produce has been used. On that error the session is left untouched.
    pub fn next_equation(&mut self) -> Result<&Equation, QuizError> {
        for attempt in 1..=self.max_regenerations {
            let candidate = self.generator.generate(&self.config);
            if !self.seen.contains(&candidate.to_string()) {
                tracing::debug!(
                    session_id = %self.id,
                    equation = %candidate,
                    attempt,
                    "equation accepted"
                );
                return Ok(self.accept(candidate));
            }
            tracing::debug!(
                session_id = %self.id,
                equation = %candidate,
                attempt,
                "duplicate equation, regenerating"
            );
        }

        let unused =
            candidates(&self.config).find(|candidate| !self.seen.contains(&candidate.to_string()));
        if let Some(candidate) = unused {
            tracing::debug!(
                session_id = %self.id,
                equation = %candidate,
                attempts = self.max_regenerations,
                "random draws spent, equation taken from scan"
            );
            return Ok(self.accept(candidate));
        }

        tracing::warn!(
            session_id = %self.id,
            level = self.level.number(),
            used = self.equations.len(),
            "equation pool exhausted"
        );
        Err(QuizError::PoolExhausted {
            level: self.level.number(),
            attempts: self.max_regenerations,
        })
    }

    fn accept(&mut self, equation: Equation) -> &Equation {
        self.seen.insert(equation.to_string());
        self.equations.push(equation);
        let index = self.equations.len() - 1;
        &self.equations[index]
    }

    /// Record a raw answer against the current equation.
    ///
    /// Control words are ignored; returns whether the answer was stored.
    pub fn record_answer(&mut self, raw: &str) -> Result<bool, QuizError> {
        let current = self
            .equations
            .last_mut()
            .ok_or(QuizError::NoCurrentEquation)?;
        Ok(current.record_answer(raw))
    }

    pub fn percentage_correct(&self) -> Option<f64> {
        statistics::percentage_correct(&self.equations)
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary::from_equations(&self.equations)
    }

    pub fn format_results(&self) -> Vec<String> {
        report::format_results(&self.equations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::ScriptedSource;
    use crate::level::NumberPool;
    use crate::model::Operator;

    fn level(n: u8) -> Level {
        Level::new(n).unwrap()
    }

    #[test]
    fn duplicates_are_regenerated() {
        let source = ScriptedSource::new([
            (3, Operator::Add, 5),
            (3, Operator::Add, 5),
            (5, Operator::Add, 3),
        ]);
        let mut session = Session::with_generator(level(1), source);

        assert_eq!(session.next_equation().unwrap().to_string(), "3 + 5");
        assert_eq!(session.next_equation().unwrap().to_string(), "5 + 3");
        assert_eq!(session.equations().len(), 2);
    }

    #[test]
    fn corrected_duplicates_are_caught() {
        // 2 - 7 corrects to 7 - 2, which is already used.
        let source = ScriptedSource::new([
            (7, Operator::Subtract, 2),
            (2, Operator::Subtract, 7),
            (9, Operator::Subtract, 1),
        ]);
        let mut session = Session::with_generator(level(2), source);
        session.next_equation().unwrap();
        assert_eq!(session.next_equation().unwrap().to_string(), "9 - 1");
    }

    #[test]
    fn random_sessions_never_repeat() {
        let mut session = Session::with_generator(level(1), RandomGenerator::seeded(5));
        for _ in 0..200 {
            session.next_equation().unwrap();
        }
        let unique: HashSet<String> = session.equations().iter().map(|e| e.to_string()).collect();
        assert_eq!(unique.len(), 200);
    }

    #[test]
    fn exhausted_pool_fails_without_mutating() {
        let config = LevelConfig::new(NumberPool::new(0, 1).unwrap(), vec![Operator::Add]).unwrap();
        let mut session =
            Session::with_level_config(level(1), config, RandomGenerator::seeded(1))
                .with_max_regenerations(200);

        session.next_equation().unwrap();
        session.next_equation().unwrap();
        let err = session.next_equation().unwrap_err();
        assert_eq!(
            err,
            QuizError::PoolExhausted {
                level: 1,
                attempts: 200
            }
        );
        assert_eq!(session.equations().len(), 2);
    }

    #[test]
    fn answers_go_to_current_equation() {
        let source = ScriptedSource::new([(3, Operator::Add, 5), (10, Operator::Add, 20)]);
        let mut session = Session::with_generator(level(1), source);

        assert_eq!(session.record_answer("8"), Err(QuizError::NoCurrentEquation));

        session.next_equation().unwrap();
        assert_eq!(session.record_answer(" Stop "), Ok(false));
        assert_eq!(session.record_answer("8"), Ok(true));
        session.next_equation().unwrap();

        assert_eq!(session.equations()[0].answers(), ["8"]);
        assert!(session.current().unwrap().not_answered());
    }

    #[test]
    fn spent_budget_falls_back_to_scan() {
        let source = ScriptedSource::new([(1, Operator::Add, 2)]);
        let mut session = Session::with_generator(level(1), source).with_max_regenerations(0);
        assert_eq!(session.next_equation().unwrap().to_string(), "1 + 2");
        assert_eq!(session.next_equation().unwrap().to_string(), "0 + 1");
        assert_eq!(session.next_equation().unwrap().to_string(), "0 + 2");
    }

    #[test]
    fn level_two_exhausts_only_when_every_equation_is_used() {
        let mut session = Session::with_generator(level(2), RandomGenerator::seeded(21));
        for _ in 0..465 {
            let eq = session.next_equation().unwrap();
            assert!(eq.result() >= 0, "{eq} went negative");
        }

        let err = session.next_equation().unwrap_err();
        assert!(err.is_exhausted());
        assert_eq!(session.equations().len(), 465);
        let unique: HashSet<String> = session.equations().iter().map(|e| e.to_string()).collect();
        assert_eq!(unique.len(), 465);
    }

    #[test]
    fn tiny_budget_still_reaches_every_equation() {
        let mut session =
            Session::with_generator(level(2), RandomGenerator::seeded(3)).with_max_regenerations(1);
        let mut served = 0;
        while session.next_equation().is_ok() {
            served += 1;
        }
        assert_eq!(served, 465);
    }
}
