//! # Terminal Input Helper
//!
//! Repeatedly prompts the user until the input converts to the wanted type and
//! satisfies every [`Condition`].
//!
//! Each round clears the display, shows the screen built by
//! [`get_screen`](crate::utils::get_screen) (with the last error, if any),
//! reads one line and then:
//!
//! 1. `quit` stops right away with [`PromptError::Quit`], before any check.
//! 2. The line is converted; a failure becomes the next error.
//! 3. The value goes through the conditions; the first failure becomes the
//!    next error.
//! 4. Otherwise the value is returned.
//!
//! ## Example: integer in a range
//! ```rust,no_run
//! use prompter::utils::{Condition, Converter, Terminal};
//!
//! let mut terminal = Terminal::new();
//! let threads = terminal
//!     .ask_for(
//!         "How many threads should the scan use?",
//!         "threads",
//!         &[Condition::new(|n: &u8| (1..=16).contains(n)).message("pick 1 to 16")],
//!         &Converter::parse(),
//!         None,
//!     )
//!     .unwrap_or_else(|e| std::process::exit(e.exit_code()));
//! println!("Threads: {}", threads);
//! ```
//!
//! ## Example: scripted input
//! ```rust
//! use prompter::utils::{Condition, ScriptedConsole, Terminal};
//!
//! let mut terminal = Terminal::with_console(ScriptedConsole::new(["123", "abc"]));
//! let word = terminal
//!     .ask(
//!         "Type a word",
//!         "word",
//!         &[Condition::new(|s: &String| s.chars().all(char::is_alphabetic))],
//!     )
//!     .unwrap();
//! assert_eq!(word, "abc");
//! assert_eq!(terminal.console().screens[1], "Type a word\n\ninvalid input\n\nword > ");
//! ```
use std::io;
use thiserror::Error;

use crate::utils::{
    console::{Console, StdConsole},
    convert::Converter,
    sanitize::{Condition, ValidationError, try_meeting_conditions},
    screen::{QUIT_COMMAND, QUIT_NOTICE, get_screen},
};

/// Shown after a line that could not be decoded.
pub const UNREADABLE_LINE: &str = "couldn't read line, try again";

/// Why the loop stopped without a value.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The user typed `quit`.
    #[error("quit requested")]
    Quit,
    /// Input ended before an acceptable line was read.
    #[error("input closed before a valid answer was given")]
    Closed,
    #[error("couldn't read line: {0}")]
    Io(#[from] io::Error),
}

impl PromptError {
    /// Process exit code for a binary that stops on this error.
    ///
    /// Quitting is a normal exit.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Quit => 0,
            Self::Closed | Self::Io(_) => 1,
        }
    }
}

/// Runs the validation loop over a [`Console`].
#[derive(Debug, Default)]
pub struct Terminal<C: Console = StdConsole> {
    console: C,
}

impl Terminal<StdConsole> {
    /// A terminal bound to stdin/stdout.
    pub fn new() -> Self {
        Self {
            console: StdConsole::new(),
        }
    }
}

impl<C: Console> Terminal<C> {
    pub fn with_console(console: C) -> Self {
        Self { console }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Asks until a line converts with `converter` and passes `conditions`.
    ///
    /// `cast_message` replaces the converter's default failure message when
    /// given and not empty.
    pub fn ask_for<T>(
        &mut self,
        text: &str,
        prompt: &str,
        conditions: &[Condition<T>],
        converter: &Converter<T>,
        cast_message: Option<&str>,
    ) -> Result<T, PromptError> {
        let mut error = String::new();
        loop {
            if let Err(e) = self.console.clear() {
                log::warn!("couldn't clear the screen: {}", e);
            }

            let screen = get_screen(text, prompt, &error);
            let answer = match self.console.present(&screen) {
                Ok(answer) => answer,
                // The bad line is already consumed, ask again.
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    log::debug!("unreadable line: {}", e);
                    error = UNREADABLE_LINE.to_string();
                    continue;
                }
                Err(e) => return Err(PromptError::Io(e)),
            };
            let Some(answer) = answer else {
                log::debug!("input closed while asking for {}", converter.name());
                return Err(PromptError::Closed);
            };

            if answer == QUIT_COMMAND {
                log::info!("user quit at prompt {:?}", prompt);
                self.console.notify(QUIT_NOTICE);
                return Err(PromptError::Quit);
            }

            match Self::validate(&answer, conditions, converter, cast_message) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    log::debug!("rejected answer: {}", e);
                    error = e.to_string();
                }
            }
        }
    }

    /// [`Terminal::ask_for`] with the answer kept as a string.
    pub fn ask(
        &mut self,
        text: &str,
        prompt: &str,
        conditions: &[Condition<String>],
    ) -> Result<String, PromptError> {
        self.ask_for(text, prompt, conditions, &Converter::identity(), None)
    }

    fn validate<T>(
        answer: &str,
        conditions: &[Condition<T>],
        converter: &Converter<T>,
        cast_message: Option<&str>,
    ) -> Result<T, ValidationError> {
        let value = converter.convert(answer, cast_message)?;
        try_meeting_conditions(&value, conditions)?;
        Ok(value)
    }
}
