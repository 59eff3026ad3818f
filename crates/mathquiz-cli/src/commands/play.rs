//! The `mathquiz play` command.

use std::io;
use std::path::PathBuf;

use anyhow::Result;

use mathquiz_core::config::load_config_from;
use mathquiz_core::generator::RandomGenerator;
use mathquiz_core::level::Level;

use crate::game::Game;

pub fn execute(level: Option<Level>, seed: Option<u64>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let level = match level {
        Some(level) => Some(level),
        None => config.default_level()?,
    };

    let generator = match seed {
        Some(seed) => RandomGenerator::seeded(seed),
        None => RandomGenerator::from_entropy(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut game = Game::new(
        stdin.lock(),
        stdout.lock(),
        config.level_failed_responses.clone(),
        seed,
    );

    if let Some(session) = game.run(level, generator, config.max_regenerations)? {
        for equation in session.equations() {
            tracing::debug!(
                session_id = %session.id(),
                equation = %equation,
                status = %equation.status(),
                answers = equation.answers().len(),
                "equation result"
            );
        }
        let summary = session.summary();
        tracing::info!(
            session_id = %session.id(),
            total = summary.total,
            correct = summary.correct,
            incorrect = summary.incorrect,
            not_answered = summary.not_answered,
            "session finished"
        );
    }

    Ok(())
}
