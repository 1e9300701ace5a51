//! # Input Conversion
//!
//! Turns the raw line typed by the user into a typed value. A conversion never
//! panics and never raises: failures come back as a [`CastFailure`] holding the
//! untouched input and a message ready to be shown on the next screen.
//!
//! ## Example
//! ```rust
//! use prompter::utils::Converter;
//!
//! let ints = Converter::<i32>::parse();
//! assert_eq!(ints.convert("1", None).unwrap(), 1);
//!
//! let failure = ints.convert("s", Some("s isn't an int")).unwrap_err();
//! assert_eq!(failure.input, "s");
//! assert_eq!(failure.message, "s isn't an int");
//!
//! assert_eq!(ints.default_message(), "input must be an i32");
//! ```
use std::{fmt::Debug, str::FromStr};
use thiserror::Error;

/// Raised when raw input could not be converted to the target type.
///
/// `input` is the original line, unchanged. `message` is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CastFailure {
    pub input: String,
    pub message: String,
}

/// A named conversion from raw text to `T`.
///
/// The name is what the default failure message talks about, so it should be
/// the name the user knows the type by (`i32`, `bool`, `date`, ...).
pub struct Converter<T> {
    name: String,
    cast: Box<dyn Fn(&str) -> Option<T>>,
}

impl<T> Debug for Converter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Converter").field("name", &self.name).finish()
    }
}

impl<T> Converter<T> {
    /// Builds a converter from any fallible function.
    pub fn new(name: impl Into<String>, cast: impl Fn(&str) -> Option<T> + 'static) -> Self {
        Self {
            name: name.into(),
            cast: Box::new(cast),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `input must be a/an <name>`, with `an` when the name starts with a vowel.
    pub fn default_message(&self) -> String {
        let article = match self.name.chars().next() {
            Some(c) if "aeiou".contains(c.to_ascii_lowercase()) => "an",
            _ => "a",
        };
        format!("input must be {} {}", article, self.name)
    }

    /// Converts `raw`, falling back to [`Converter::default_message`] when no
    /// message is supplied or the supplied one is empty.
    pub fn convert(&self, raw: &str, message: Option<&str>) -> Result<T, CastFailure> {
        (self.cast)(raw).ok_or_else(|| CastFailure {
            input: raw.to_string(),
            message: match message {
                Some(m) if !m.is_empty() => m.to_string(),
                _ => self.default_message(),
            },
        })
    }
}

impl<T: FromStr + 'static> Converter<T> {
    /// Converter backed by [`FromStr`], named after the last path segment of
    /// the type (`alloc::string::String` becomes `String`).
    pub fn parse() -> Self {
        Self::new(short_type_name::<T>(), |raw| raw.parse::<T>().ok())
    }
}

impl Converter<String> {
    /// Keeps the input as it is. Always succeeds.
    pub fn identity() -> Self {
        Self::new("string", |raw| Some(raw.to_string()))
    }
}

impl Default for Converter<String> {
    fn default() -> Self {
        Self::identity()
    }
}

/// One-shot conversion through [`FromStr`] with an explicit failure message.
pub fn try_casting<T: FromStr + 'static>(raw: &str, message: &str) -> Result<T, CastFailure> {
    Converter::<T>::parse().convert(raw, Some(message))
}

fn short_type_name<T>() -> String {
    let full = std::any::type_name::<T>();
    // Generic arguments keep their own paths, only strip the outer one.
    let head = full.split('<').next().unwrap_or(full);
    let short = head.rsplit("::").next().unwrap_or(head);
    format!("{}{}", short, &full[head.len()..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_casting_success() {
        let res: Result<i64, _> = try_casting("1", "no error");
        assert_eq!(res, Ok(1));
    }

    #[test]
    fn test_try_casting_fail_keeps_input() {
        let res: Result<i64, _> = try_casting("s", "s isn't an int");
        let err = res.unwrap_err();
        assert_eq!(err.input, "s");
        assert_eq!(err.message, "s isn't an int");
        assert_eq!(format!("{}", err), "s isn't an int");
    }

    #[test]
    fn test_default_message_article() {
        assert_eq!(
            Converter::<i32>::parse().default_message(),
            "input must be an i32"
        );
        assert_eq!(
            Converter::<u8>::parse().default_message(),
            "input must be an u8"
        );
        assert_eq!(
            Converter::<bool>::parse().default_message(),
            "input must be a bool"
        );
        assert_eq!(
            Converter::<f64>::parse().default_message(),
            "input must be a f64"
        );
        assert_eq!(
            Converter::<String>::parse().default_message(),
            "input must be a String"
        );
        assert_eq!(
            Converter::new("Email", |_| None::<()>).default_message(),
            "input must be an Email"
        );
    }

    #[test]
    fn test_convert_empty_message_uses_default() {
        let err = Converter::<u16>::parse().convert("-1", Some("")).unwrap_err();
        assert_eq!(err.message, "input must be an u16");

        let err = Converter::<bool>::parse().convert("maybe", None).unwrap_err();
        assert_eq!(err.message, "input must be a bool");
        assert_eq!(err.input, "maybe");
    }

    #[test]
    fn test_identity_never_fails() {
        let conv = Converter::identity();
        assert_eq!(conv.convert("", None), Ok(String::new()));
        assert_eq!(conv.convert("  spaced ", None), Ok("  spaced ".to_string()));
        assert_eq!(conv.name(), "string");
    }

    #[test]
    fn test_custom_converter() {
        let even = Converter::new("even number", |raw: &str| {
            raw.parse::<u32>().ok().filter(|n| n % 2 == 0)
        });
        assert_eq!(even.convert("4", None), Ok(4));
        let err = even.convert("3", None).unwrap_err();
        assert_eq!(err.message, "input must be an even number");
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name::<String>(), "String");
        assert_eq!(short_type_name::<i32>(), "i32");
        assert!(short_type_name::<Option<String>>().starts_with("Option<"));
    }
}
