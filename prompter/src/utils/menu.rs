//! # Menus
//!
//! A [`Menu`] is a closed set of options. [`Terminal::get_option`] keeps asking
//! until the answer is one of them.
//!
//! With the `serde` feature a menu can be described as JSON; `prompt` and
//! `message` are optional there.
//!
//! ```rust
//! use prompter::utils::{Menu, ScriptedConsole, Terminal};
//!
//! let menu = Menu::new("1) scan\n2) exit", ["1", "2"]).prompt("choice");
//! let mut terminal = Terminal::with_console(ScriptedConsole::new(["3", "2"]));
//! assert_eq!(terminal.get_option(&menu).unwrap(), "2");
//! ```
use crate::utils::{
    console::Console,
    sanitize::{Condition, DEFAULT_MESSAGE},
    terminal::{PromptError, Terminal},
};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Menu {
    pub text: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub prompt: String,
    #[cfg_attr(feature = "serde", serde(default = "default_message"))]
    pub message: String,
    pub options: Vec<String>,
}

#[cfg(feature = "serde")]
fn default_message() -> String {
    DEFAULT_MESSAGE.to_string()
}

impl Menu {
    pub fn new<S: Into<String>>(
        text: impl Into<String>,
        options: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            text: text.into(),
            prompt: String::new(),
            message: DEFAULT_MESSAGE.to_string(),
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// The single membership condition the menu stands for.
    pub fn condition(&self) -> Condition<String> {
        Condition::one_of(&self.options).message(self.message.clone())
    }
}

impl<C: Console> Terminal<C> {
    /// Asks until the answer is one of the menu's options.
    pub fn get_option(&mut self, menu: &Menu) -> Result<String, PromptError> {
        self.ask(&menu.text, &menu.prompt, &[menu.condition()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::console::ScriptedConsole;

    #[test]
    fn test_menu_defaults() {
        let menu = Menu::new("pick", ["a", "b"]);
        assert_eq!(menu.prompt, "");
        assert_eq!(menu.message, "invalid input");
        assert_eq!(menu.options, vec!["a", "b"]);
    }

    #[test]
    fn test_get_option_rejects_unknown() {
        let menu = Menu::new("Fruit?", ["banana", "orange"])
            .prompt("fruit")
            .message("not on the menu");
        let mut terminal =
            Terminal::with_console(ScriptedConsole::new(["watermelon", "orange"]));

        assert_eq!(terminal.get_option(&menu).unwrap(), "orange");
        let console = terminal.into_console();
        assert_eq!(
            console.screens,
            vec![
                "Fruit?\n\nfruit > ",
                "Fruit?\n\nnot on the menu\n\nfruit > ",
            ]
        );
    }

    #[test]
    fn test_get_option_quit() {
        let menu = Menu::new("Fruit?", ["quit"]);
        let mut terminal = Terminal::with_console(ScriptedConsole::new(["quit"]));
        assert!(matches!(terminal.get_option(&menu), Err(PromptError::Quit)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_menu_from_json() {
        let menu: Menu =
            serde_json::from_str(r#"{"text": "Continue?", "options": ["y", "n"]}"#).unwrap();
        assert_eq!(menu, Menu::new("Continue?", ["y", "n"]));

        let menu: Menu = serde_json::from_str(
            r#"{"text": "t", "prompt": "p", "message": "m", "options": []}"#,
        )
        .unwrap();
        assert_eq!(menu.prompt, "p");
        assert_eq!(menu.message, "m");
        assert!(menu.options.is_empty());
    }
}
