//! Validated console input.
//!
//! The player is shown the acceptable options and asked again until the
//! entry matches one of them. Only matched options ever reach the engine.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::core::InvalidChoice;

use super::narrator::{join, Narrator};

/// Match raw input against the offered options by their display text.
pub fn parse_choice<T: Display + Clone>(raw: &str, options: &[T]) -> Result<T, InvalidChoice> {
    let entry = raw.trim();
    options
        .iter()
        .find(|opt| opt.to_string() == entry)
        .cloned()
        .ok_or_else(|| InvalidChoice::Unrecognized {
            input: entry.to_string(),
        })
}

/// Ask until the player enters one of `options`.
///
/// End of input is reported as `UnexpectedEof`.
pub fn choose<R, W, T>(input: &mut R, narrator: &mut Narrator<W>, options: &[T]) -> io::Result<T>
where
    R: BufRead,
    W: Write,
    T: Display + Clone,
{
    let prompt = format!("input [{}]: ", join(options));
    let mut line = String::new();
    loop {
        narrator.print(&prompt)?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }

        match parse_choice(&line, options) {
            Ok(choice) => return Ok(choice),
            Err(err) => {
                debug!(error = %err, "rejected console input");
                narrator.narrate("I don't quite catch your meaning?")?;
            }
        }
    }
}
