use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::{debug, info};

use crate::{
    game::{Game, GameState},
    narration,
    weather::WeatherSource,
};

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won { day: u32 },
    Lost { day: u32 },
    /// Input closed before the game reached an end.
    Abandoned { day: u32 },
}

/// Drives a [`Game`] from line-based input, writing narration as it goes.
pub struct Session<W, R, O> {
    game: Game<W>,
    input: R,
    output: O,
}

impl<W, R, O> Session<W, R, O>
where
    W: WeatherSource,
    R: BufRead,
    O: Write,
{
    pub fn new(game: Game<W>, input: R, output: O) -> Self {
        Self {
            game,
            input,
            output,
        }
    }

    pub fn run(&mut self) -> Result<Outcome> {
        info!(
            "session started with bloom threshold {} and plant {:?}",
            self.game.rules().bloom_threshold,
            self.game.plant()
        );
        writeln!(self.output, "{}", narration::BANNER)?;

        let outcome = loop {
            writeln!(
                self.output,
                "{}",
                narration::status(self.game.day(), self.game.plant())
            )?;
            write!(self.output, "{}", narration::PROMPT)?;
            self.output.flush().context("Failed to flush output")?;

            let mut buf = Vec::new();
            let read = self
                .input
                .read_until(b'\n', &mut buf)
                .context("Failed to read player input")?;
            if read == 0 {
                writeln!(self.output)?;
                writeln!(self.output, "{}", narration::INPUT_CLOSED)?;
                debug!("input closed on day {}", self.game.day());
                break Outcome::Abandoned {
                    day: self.game.day(),
                };
            }

            // Undecodable bytes still count as an unrecognized turn.
            let line = String::from_utf8_lossy(&buf);
            let report = self.game.play_turn(&line)?;
            for text in narration::turn(&report) {
                writeln!(self.output, "{text}")?;
            }

            match report.state {
                GameState::Playing => continue,
                GameState::Won => break Outcome::Won { day: report.day },
                GameState::Lost => break Outcome::Lost { day: report.day },
            }
        };

        self.output.flush()?;
        info!("session finished: {outcome:?}");
        Ok(outcome)
    }
}
