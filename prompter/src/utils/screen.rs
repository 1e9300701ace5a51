//! # Screen
//!
//! Formatting of the text shown before each read, and the quit keyword.
//!
//! ```rust
//! use prompter::utils::get_screen;
//!
//! assert_eq!(get_screen("text", "prompt", ""), "text\n\nprompt > ");
//! ```

/// Typing this exact line at any prompt stops the loop.
pub const QUIT_COMMAND: &str = "quit";

/// Shown when the user quits.
pub const QUIT_NOTICE: &str = "FORCE QUIT";

/// Builds the screen shown before reading a line.
///
/// `text`, then the error (if any) after a blank line, then the prompt label
/// after another blank line, followed by `" > "`.
pub fn get_screen(text: &str, prompt: &str, error: &str) -> String {
    let mut screen = String::from(text);
    if !error.is_empty() {
        screen.push_str("\n\n");
        screen.push_str(error);
    }
    screen.push_str("\n\n");
    screen.push_str(prompt);
    screen.push_str(" > ");
    screen
}
