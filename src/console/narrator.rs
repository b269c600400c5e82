//! Paced narration for the console.
//!
//! Text is printed character by character with a configurable delay. A zero
//! delay prints immediately, which is what tests use.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::board::Board;
use crate::core::PieceId;
use crate::rules::{GameResult, GameSummary, KillOutcome};

const BANNER: &str = r#"
*** ::::::::::::::::::::::::::::::::::::: ***
*** ::                                 :: ***
*** ::   // VULCAN MURDER MYSTERY //   :: ***
*** ::     .====.        ___ .==.   o  :: ***
*** ::     |::::|  .===, |:| |::| =/ \=:: ***
*** :: .___|::::|  |:::| |:| |::| | 0 |:: ***
*** :: |:::|====|  |:::|-----|::| |:::|:: ***
*** :: |===|::::|  |===::::::|::| |___|:: ***
*** :: ![]:!:[]:!  ! []::::x:|[]| || ||:: ***
*** ::---------------------------------:: ***
*** ::                                 :: ***
*** ::  --  --  --  --  --  --  --  -- :: ***
*** ::                                 :: ***
*** ::---------------------------------:: ***
*** ::::::::::::::::::::::::::::::::::::: ***
"#;

const RULES: [&str; 8] = [
    "Here is the sequence of play:",
    "  - The game is played in rounds",
    "  - Each round consists of the visitors moving to different areas",
    "  - Next, the murderers move to an area",
    "  - You then move to an area",
    "  - The power goes out, and the murderers pick one victim",
    "  - You can then pick anyone to accuse of murder",
    "  - The game continues until all visitors are dead or all murderers are found",
];

/// Writes the chronicler's voice to an output stream.
#[derive(Debug)]
pub struct Narrator<W> {
    out: W,
    delay: Duration,
}

impl<W: Write> Narrator<W> {
    /// Create a narrator with a per-character delay.
    pub fn new(out: W, delay: Duration) -> Self {
        Self { out, delay }
    }

    /// Consume the narrator, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print without pacing.
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }

    /// Speak a line as the chronicler.
    pub fn narrate(&mut self, text: &str) -> io::Result<()> {
        self.slow_print(">>>", 1.0)?;
        self.pause(0.5);
        self.slow_print(&format!(" CHRONICLEUR: {text}\n"), 0.5)?;
        self.pause(1.0);
        Ok(())
    }

    /// Banner and the rules of play.
    pub fn intro(&mut self, antagonist_count: usize) -> io::Result<()> {
        self.print(BANNER)?;
        self.print("\n")?;
        self.narrate("Upon Red Mountain sits Vulcan, a statue to honor Birmingham's ironworkers.")?;
        self.narrate(&format!(
            "On this night, {} taken advantage of the winter storm",
            murderer_phrase(antagonist_count)
        ))?;
        self.narrate("...and are murdering visitors one by one")?;
        self.narrate("You are the Doctor, and alone can you keep the murderers from killing")?;
        for line in RULES {
            self.narrate(line)?;
        }
        Ok(())
    }

    /// The `TURN n` header.
    pub fn turn_header(&mut self, round: u32) -> io::Result<()> {
        self.slow_print(&turn_header(round), 0.1)
    }

    /// Every area and its occupants.
    pub fn board(&mut self, board: &Board) -> io::Result<()> {
        self.print(&render_board(board))
    }

    /// Announce the antagonists' action.
    pub fn kill(&mut self, kill: &KillOutcome) -> io::Result<()> {
        match kill {
            KillOutcome::NoKill => self.narrate("The group has not dwindled in number."),
            KillOutcome::Killed { victim, suspects, .. } => {
                self.narrate(&format!("\u{271E} {victim} has met their fate \u{271E}"))?;
                self.narrate(&format!("I suspect {}", join(suspects.as_slice())))
            }
        }
    }

    /// Announce an accusation.
    pub fn execution(&mut self, piece: PieceId) -> io::Result<()> {
        self.narrate(&format!("\u{271E} {piece} has been strangled to death \u{271E}"))
    }

    /// Closing lines for a finished game.
    pub fn epilogue(&mut self, summary: &GameSummary) -> io::Result<()> {
        match summary.result {
            GameResult::Won => {
                self.narrate("You've choked out the lives of all the murderers. Good job.")?;
                self.narrate(&format!("And it only took {} turns!", summary.turns))?;
                self.narrate(&format!(
                    "You saved {} out of {} visitors, not counting yourself.",
                    summary.surviving_visitors, summary.initial_visitors
                ))
            }
            GameResult::Lost => {
                self.narrate("You're devoured alone by the murderers. No one hears your scream.")?;
                self.narrate(&format!("You lost after {} turns", summary.turns))
            }
        }
    }

    fn slow_print(&mut self, text: &str, speed: f64) -> io::Result<()> {
        if self.delay.is_zero() {
            return self.print(text);
        }
        let mut buf = [0u8; 4];
        for c in text.chars() {
            self.out.write_all(c.encode_utf8(&mut buf).as_bytes())?;
            self.out.flush()?;
            self.pause(speed);
        }
        Ok(())
    }

    fn pause(&self, speed: f64) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay.mul_f64(speed));
        }
    }
}

/// How the intro names the murderers.
#[must_use]
pub fn murderer_phrase(count: usize) -> String {
    match count {
        1 => "a murderer has".to_string(),
        2 => "a duo of murderers have".to_string(),
        3 => "a trio of murderers have".to_string(),
        n => format!("{n} murderers have"),
    }
}

/// The boxed turn header.
#[must_use]
pub fn turn_header(round: u32) -> String {
    format!("\n*** ::::::::::::::\n*** :: TURN {round:>3} ::\n*** ::::::::::::::\n")
}

/// One `AREA n: a, b` line per area, 1-based.
#[must_use]
pub fn render_board(board: &Board) -> String {
    board
        .areas()
        .map(|(area, occupants)| format!("*** AREA {:>2}: {}\n", area.number(), join(occupants)))
        .collect()
}

/// Comma-separated list.
pub(crate) fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}
