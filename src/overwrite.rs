//! Overwrite policy: decide whether an existing output file may be replaced.
//!
//! The decision is kept apart from the act of asking. [`OverwritePolicy`] is
//! a pure function of the force flag, the path's existence and whatever a
//! [`Confirm`] implementation answers; [`TerminalConfirm`] is the interactive
//! implementation used by the CLI and works over any reader/writer pair.
//!
//! ```text
//! force?        → write
//! missing path? → write
//! otherwise     → ask "Overwrite <path>? ('y'/'N')", default no
//! ```

use std::io::{BufRead, Write};
use std::path::Path;
use tracing::warn;

/// Something that can answer a yes/no question.
pub trait Confirm {
    /// Ask `question`; `default` is returned when the user just presses enter.
    fn confirm(&mut self, question: &str, default: bool) -> bool;
}

/// Whether existing outputs may be replaced without asking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverwritePolicy {
    pub force: bool,
}

impl OverwritePolicy {
    pub fn new(force: bool) -> Self {
        Self { force }
    }

    /// Decide whether `path` should be written.
    pub fn should_write(&self, path: &Path, confirm: &mut dyn Confirm) -> bool {
        if self.force || !path.exists() {
            return true;
        }
        confirm.confirm(&format!("Overwrite {}?", path.display()), false)
    }
}

/// Interpret a typed answer. `None` means the answer was not understood.
pub fn parse_answer(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" | "1" => Some(true),
        "no" | "n" | "false" | "0" => Some(false),
        _ => None,
    }
}

/// Interactive prompt over a reader/writer pair (stdin/stdout in the CLI).
///
/// Re-asks until the answer is understood. An empty line selects the default;
/// end of input also selects the default so a closed stdin cannot loop forever.
pub struct TerminalConfirm<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl TerminalConfirm<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for TerminalConfirm<R, W> {
    fn confirm(&mut self, question: &str, default: bool) -> bool {
        let choices = if default { "('Y'/'n')" } else { "('y'/'N')" };
        loop {
            // Prompt write errors are ignored; a read error answers the default.
            let _ = write!(self.output, "{question} {choices} ");
            let _ = self.output.flush();

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => return default,
                Ok(_) => {}
            }
            if line.trim().is_empty() {
                return default;
            }
            match parse_answer(&line) {
                Some(answer) => return answer,
                None => warn!("Invalid input."),
            }
        }
    }
}

/// Answers every question the same way.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl Confirm for FixedAnswer {
    fn confirm(&mut self, _question: &str, _default: bool) -> bool {
        self.0
    }
}
