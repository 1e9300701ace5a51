//! # Prompter
//!
//! A small input validation helper for interactive CLI applications: show a
//! screen, read a line, convert it, check it, and ask again with an error
//! message until the answer is acceptable or the user types `quit`.
//!
//! ## Features
//!
//! - **Conversion** - Any [`FromStr`](std::str::FromStr) type or custom function,
//!   with a default `input must be a/an <type>` message
//! - **Conditions** - Ordered predicates with bound arguments and their own
//!   messages; the first failure wins
//! - **Menus** - Closed option lists, optionally described as JSON (`serde` feature)
//! - **Pluggable console** - stdin/stdout or scripted input for tests
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! prompter = { version = "0.1.0" }
//! prompter = { version = "0.1.0", features = ["serde"] }
//! ```
//!
//! ## Usage Examples
//!
//! ### Typed input with conditions
//!
//! ```rust,no_run
//! use prompter::utils::{Condition, Converter, PromptError, Terminal};
//!
//! let mut terminal = Terminal::new();
//! let port = terminal.ask_for(
//!     "Which port should be scanned?",
//!     "port",
//!     &[Condition::new(|p: &u16| *p != 0).message("port 0 is reserved")],
//!     &Converter::parse(),
//!     Some("a port is a number between 1 and 65535"),
//! );
//!
//! match port {
//!     Ok(port) => println!("Port: {}", port),
//!     Err(PromptError::Quit) => std::process::exit(0),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```
//!
//! ### Menu
//!
//! ```rust,no_run
//! use prompter::utils::{Menu, Terminal};
//!
//! let menu = Menu::new("Choose scan type (quick/deep/custom):", ["quick", "deep", "custom"])
//!     .prompt("type")
//!     .message("unknown scan type");
//! let choice = Terminal::new().get_option(&menu);
//! ```
//!
//! ## Quitting
//!
//! Typing `quit` at any prompt shows `FORCE QUIT` and returns
//! [`PromptError::Quit`](utils::PromptError::Quit) before any conversion or
//! check. Binaries that want the whole program to stop call
//! `std::process::exit(err.exit_code())`.
//!
//! ## Architecture
//!
//! - **`utils::convert`** - raw text to typed values
//! - **`utils::sanitize`** - conditions and their evaluation
//! - **`utils::screen`** - screen formatting
//! - **`utils::console`** - display/input capabilities
//! - **`utils::terminal`** - the validation loop
//! - **`utils::menu`** - closed option prompts

pub mod utils;
