//! # Console
//!
//! The loop never touches the terminal directly. It talks to a [`Console`],
//! which knows how to clear the display, show a screen and hand back the next
//! line, and show a one-off notice.
//!
//! - [`StdConsole`] uses stdout/stdin.
//! - [`ScriptedConsole`] replays prepared lines and records what was shown,
//!   which is what the tests (and any non-interactive caller) use.
use std::{
    collections::VecDeque,
    io::{self, BufRead, Write},
};

/// Display and input capabilities required by [`crate::utils::Terminal`].
pub trait Console {
    /// Clears the display. Errors are reported but never stop the loop.
    fn clear(&mut self) -> io::Result<()>;

    /// Shows `screen` and blocks until a line is available.
    ///
    /// Returns `Ok(None)` once input is exhausted. The returned line carries no
    /// line terminator. An `InvalidData` error means the line was consumed but
    /// couldn't be decoded; the loop asks again.
    fn present(&mut self, screen: &str) -> io::Result<Option<String>>;

    /// Shows a message outside of the usual screen.
    fn notify(&mut self, message: &str);
}

/// Drops a trailing `\n` or `\r\n`, leaving any other whitespace alone.
pub fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

cfg_if::cfg_if! {
    if #[cfg(windows)] {
        fn clear_screen() -> io::Result<()> {
            let status = std::process::Command::new("cmd").args(["/C", "cls"]).status()?;
            if status.success() {
                Ok(())
            } else {
                Err(io::Error::other(format!("cls exited with {status}")))
            }
        }
    } else {
        fn clear_screen() -> io::Result<()> {
            let mut out = io::stdout().lock();
            // Erase the screen, then move the cursor home.
            out.write_all(b"\x1B[2J\x1B[1;1H")?;
            out.flush()
        }
    }
}

/// The real terminal.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn clear(&mut self) -> io::Result<()> {
        clear_screen()
    }

    fn present(&mut self, screen: &str) -> io::Result<Option<String>> {
        let mut out = io::stdout().lock();
        out.write_all(screen.as_bytes())?;
        out.flush()?;

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(strip_line_ending(&line).to_string())),
        }
    }

    fn notify(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// A console fed from a fixed list of lines.
///
/// Every screen it was asked to present and every notice is recorded, and
/// every clear is counted. Read errors can be scripted between lines, and
/// clearing can be made to fail.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<Result<String, io::ErrorKind>>,
    fail_clear: bool,
    pub screens: Vec<String>,
    pub notices: Vec<String>,
    pub clears: usize,
}

impl ScriptedConsole {
    pub fn new<S: Into<String>>(inputs: impl IntoIterator<Item = S>) -> Self {
        Self {
            inputs: inputs.into_iter().map(|line| Ok(line.into())).collect(),
            ..Self::default()
        }
    }

    /// Queues one more line.
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.inputs.push_back(Ok(line.into()));
        self
    }

    /// Queues a read failing with `kind`.
    pub fn read_error(mut self, kind: io::ErrorKind) -> Self {
        self.inputs.push_back(Err(kind));
        self
    }

    /// Makes every `clear` fail.
    pub fn failing_clear(mut self) -> Self {
        self.fail_clear = true;
        self
    }

    /// Entries (lines or errors) not consumed yet.
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        if self.fail_clear {
            return Err(io::Error::other("no tty"));
        }
        Ok(())
    }

    fn present(&mut self, screen: &str) -> io::Result<Option<String>> {
        self.screens.push(screen.to_string());
        match self.inputs.pop_front() {
            Some(Ok(line)) => Ok(Some(strip_line_ending(&line).to_string())),
            Some(Err(kind)) => Err(io::Error::new(kind, "scripted read error")),
            None => Ok(None),
        }
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending("quit\n"), "quit");
        assert_eq!(strip_line_ending("quit\r\n"), "quit");
        assert_eq!(strip_line_ending(" quit \n"), " quit ");
        assert_eq!(strip_line_ending("quit"), "quit");
        assert_eq!(strip_line_ending("\n"), "");
    }

    #[test]
    fn test_scripted_console_replays_and_records() {
        let mut console = ScriptedConsole::new(["first\n", "second"]);
        assert_eq!(console.remaining(), 2);

        assert!(console.clear().is_ok());
        assert_eq!(console.present("a > ").unwrap(), Some("first".to_string()));
        assert_eq!(console.present("b > ").unwrap(), Some("second".to_string()));
        assert_eq!(console.present("c > ").unwrap(), None);
        console.notify("bye");

        assert_eq!(console.screens, vec!["a > ", "b > ", "c > "]);
        assert_eq!(console.notices, vec!["bye"]);
        assert_eq!(console.clears, 1);
        assert_eq!(console.remaining(), 0);
    }

    #[test]
    fn test_scripted_console_errors() {
        let mut console = ScriptedConsole::new(["a"])
            .read_error(io::ErrorKind::InvalidData)
            .line("b")
            .failing_clear();
        assert_eq!(console.remaining(), 3);

        assert!(console.clear().is_err());
        assert_eq!(console.present("1").unwrap(), Some("a".to_string()));
        let err = console.present("2").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert_eq!(console.present("3").unwrap(), Some("b".to_string()));
        assert_eq!(console.clears, 1);
    }
}
