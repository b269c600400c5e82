//! The human protagonist at the keyboard.

use std::io::{BufRead, Write};
use std::time::Duration;

use crate::board::Board;
use crate::core::{AreaId, PieceId};
use crate::rules::{GameSummary, KillOutcome, ProtagonistPolicy, RoundReport};

use super::narrator::Narrator;
use super::prompt::choose;
use super::ConsoleError;

/// Reads the protagonist's choices from `input` and narrates to `output`.
#[derive(Debug)]
pub struct ConsolePlayer<R, W> {
    input: R,
    narrator: Narrator<W>,
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    /// Create a console player with the given narration delay.
    pub fn new(input: R, output: W, delay: Duration) -> Self {
        Self {
            input,
            narrator: Narrator::new(output, delay),
        }
    }

    /// Print the banner and rules.
    pub fn intro(&mut self, antagonist_count: usize) -> Result<(), ConsoleError> {
        Ok(self.narrator.intro(antagonist_count)?)
    }

    /// Print the closing lines.
    pub fn epilogue(&mut self, summary: &GameSummary) -> Result<(), ConsoleError> {
        Ok(self.narrator.epilogue(summary)?)
    }

    /// Consume the player, returning the output stream.
    pub fn into_output(self) -> W {
        self.narrator.into_inner()
    }
}

impl<R: BufRead, W: Write> ProtagonistPolicy for ConsolePlayer<R, W> {
    type Error = ConsoleError;

    fn choose_area(&mut self, round: u32, board: &Board) -> Result<AreaId, ConsoleError> {
        self.narrator.turn_header(round)?;
        self.narrator.board(board)?;
        self.narrator.narrate("Doctor, which area do you want to protect?")?;

        let areas: Vec<usize> = AreaId::all(board.area_count()).map(AreaId::number).collect();
        let number = choose(&mut self.input, &mut self.narrator, &areas)?;
        Ok(AreaId::new(number - 1))
    }

    fn choose_accusation(
        &mut self,
        kill: &KillOutcome,
        options: &[PieceId],
    ) -> Result<Option<PieceId>, ConsoleError> {
        self.narrator.kill(kill)?;
        self.narrator.narrate("Given the facts, would you like to execute anyone?")?;
        if choose(&mut self.input, &mut self.narrator, &["y", "n"])? == "n" {
            return Ok(None);
        }

        self.narrator.narrate("Very well, which soul shall be reaped?")?;
        Ok(Some(choose(&mut self.input, &mut self.narrator, options)?))
    }

    fn round_finished(&mut self, report: &RoundReport) -> Result<(), ConsoleError> {
        if let Some(piece) = report.accused {
            self.narrator.execution(piece)?;
        }
        Ok(())
    }
}
