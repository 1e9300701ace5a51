pub mod console;
pub use console::{Console, ScriptedConsole, StdConsole};

pub mod convert;
pub use convert::{CastFailure, Converter, try_casting};

pub mod menu;
pub use menu::Menu;

pub mod sanitize;
pub use sanitize::{Condition, DEFAULT_MESSAGE, ValidationError, try_meeting_conditions};

pub mod screen;
pub use screen::{QUIT_COMMAND, QUIT_NOTICE, get_screen};

pub mod terminal;
pub use terminal::{PromptError, Terminal, UNREADABLE_LINE};
