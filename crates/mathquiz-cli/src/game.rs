//! Line-oriented interactive driver.
//!
//! Works over any `BufRead`/`Write` pair so the whole conversation can be
//! scripted in tests. All scoring and formatting comes from the core
//! session; this module only moves lines in and out.

use std::io::{BufRead, Write};

use anyhow::Result;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use mathquiz_core::answer::is_stop_word;
use mathquiz_core::generator::EquationSource;
use mathquiz_core::level::Level;
use mathquiz_core::session::Session;

const PREAMBLE: [&str; 3] = [
    "Are you ready for some math fun!",
    "type 'stop' to end game at any time",
    "let's try this out",
];
const LEVEL_PROMPT: &str = "what level would you like to play? Choose a number between 1 and 5";
const ANSWER_PROMPT: &str = "->";

pub struct Game<R, W> {
    input: R,
    output: W,
    taunts: Vec<String>,
    rng: StdRng,
}

impl<R: BufRead, W: Write> Game<R, W> {
    pub fn new(input: R, output: W, taunts: Vec<String>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            input,
            output,
            taunts,
            rng,
        }
    }

    /// Next trimmed line, or `None` once input is closed.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn ask(&mut self, question: &str) -> Result<()> {
        writeln!(self.output, "{question}")?;
        write!(self.output, "{ANSWER_PROMPT}")?;
        self.output.flush()?;
        Ok(())
    }

    pub fn preamble(&mut self) -> Result<()> {
        for line in PREAMBLE {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    /// Ask until the player names a valid level.
    ///
    /// Returns `None` if input closes or the player stops first.
    pub fn choose_level(&mut self) -> Result<Option<Level>> {
        writeln!(self.output, "{LEVEL_PROMPT}")?;
        self.output.flush()?;
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if is_stop_word(&line) {
                return Ok(None);
            }
            match line.parse::<Level>() {
                Ok(level) => return Ok(Some(level)),
                Err(e) => {
                    tracing::debug!("rejected level input: {e}");
                    if let Some(taunt) = self.taunts.choose(&mut self.rng) {
                        writeln!(self.output, "{taunt}")?;
                    }
                    self.output.flush()?;
                }
            }
        }
    }

    /// Ask equations until the player stops, input closes, or the level
    /// runs out of fresh equations.
    pub fn play<G: EquationSource>(&mut self, session: &mut Session<G>) -> Result<()> {
        loop {
            let (question, result) = match session.next_equation() {
                Ok(equation) => (equation.question(), equation.result().to_string()),
                Err(e) if e.is_exhausted() => {
                    writeln!(
                        self.output,
                        "You've seen every equation this level has. Nice work!"
                    )?;
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            };

            self.ask(&question)?;
            loop {
                let Some(answer) = self.read_line()? else {
                    writeln!(self.output)?;
                    return Ok(());
                };
                session.record_answer(&answer)?;
                if answer == result {
                    writeln!(self.output, "Good Job")?;
                    break;
                }
                if is_stop_word(&answer) {
                    return Ok(());
                }
                writeln!(self.output, "try again")?;
                self.ask(&question)?;
            }
        }
    }

    /// Score line (if any), a blank line, then one line per equation.
    pub fn print_results<G: EquationSource>(&mut self, session: &Session<G>) -> Result<()> {
        let mut lines = session.format_results().into_iter();
        if session.percentage_correct().is_some() {
            if let Some(score) = lines.next() {
                writeln!(self.output, "{score}")?;
            }
        }
        writeln!(self.output)?;
        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        self.output.flush()?;
        Ok(())
    }

    /// Full game: preamble, level selection (unless given), rounds, results.
    ///
    /// Returns the finished session, or `None` if no level was chosen.
    pub fn run<G: EquationSource>(
        &mut self,
        level: Option<Level>,
        generator: G,
        max_regenerations: u32,
    ) -> Result<Option<Session<G>>> {
        self.preamble()?;
        let level = match level {
            Some(level) => level,
            None => match self.choose_level()? {
                Some(level) => level,
                None => return Ok(None),
            },
        };

        let mut session =
            Session::with_generator(level, generator).with_max_regenerations(max_regenerations);
        self.play(&mut session)?;
        self.print_results(&session)?;
        Ok(Some(session))
    }
}
