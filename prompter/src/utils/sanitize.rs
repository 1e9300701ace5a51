//! # Conditions
//!
//! A [`Condition`] is a predicate over an already converted value plus the
//! message shown when the predicate rejects it. Conditions are checked in
//! order and the first one that fails decides the error; the ones after it are
//! never evaluated.
//!
//! Extra arguments a predicate needs are bound up front with
//! [`Condition::with_args`], so the check itself only ever sees the value.
//!
//! ## Example
//! ```rust
//! use prompter::utils::{Condition, try_meeting_conditions};
//!
//! let conditions = vec![
//!     Condition::new(|s: &String| s.chars().all(char::is_alphabetic)),
//!     Condition::with_args(
//!         |s: &String, (suffix, pool): &(String, String)| {
//!             pool.contains(&format!("{s}{suffix}"))
//!         },
//!         ("a".to_string(), "aa".to_string()),
//!     )
//!     .message("error message"),
//! ];
//!
//! let err = try_meeting_conditions(&"b".to_string(), &conditions).unwrap_err();
//! assert_eq!(err.to_string(), "error message");
//! ```
use std::fmt::Debug;
use thiserror::Error;

use crate::utils::convert::CastFailure;

/// Message used when a condition fails without a message of its own.
pub const DEFAULT_MESSAGE: &str = "invalid input";

/// Why an attempt was rejected. `Display` is exactly the text the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(transparent)]
    Conversion(#[from] CastFailure),
    #[error("{0}")]
    Condition(String),
}

/// A check applied to a converted value.
pub struct Condition<T: ?Sized> {
    predicate: Box<dyn Fn(&T) -> bool>,
    message: Option<String>,
}

impl<T: ?Sized> Debug for Condition<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Condition")
            .field("message", &self.failure_message())
            .finish_non_exhaustive()
    }
}

impl<T: ?Sized> Condition<T> {
    /// Sets the message shown when this condition fails.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn failure_message(&self) -> &str {
        self.message.as_deref().unwrap_or(DEFAULT_MESSAGE)
    }

    pub fn check(&self, value: &T) -> bool {
        (self.predicate)(value)
    }
}

impl<T: ?Sized + 'static> Condition<T> {
    pub fn new(predicate: impl Fn(&T) -> bool + 'static) -> Self {
        Self {
            predicate: Box::new(predicate),
            message: None,
        }
    }

    /// Binds `args` to the predicate; it is called as `predicate(value, &args)`.
    ///
    /// Anything goes for `args`: a tuple for positional extras, a struct for
    /// named ones, or both.
    pub fn with_args<A: 'static>(predicate: impl Fn(&T, &A) -> bool + 'static, args: A) -> Self {
        Self::new(move |value| predicate(value, &args))
    }
}

impl<T: AsRef<str> + ?Sized + 'static> Condition<T> {
    /// Accepts the value only if it is one of `options`.
    pub fn one_of<S: AsRef<str>>(options: impl IntoIterator<Item = S>) -> Self {
        let options: Vec<String> = options
            .into_iter()
            .map(|o| o.as_ref().to_string())
            .collect();
        Self::with_args(
            |value: &T, options: &Vec<String>| options.iter().any(|o| o == value.as_ref()),
            options,
        )
    }
}

/// Runs `conditions` in order against `value`.
///
/// - Stops at the first failing condition and returns its message.
/// - Returns `Ok(())` when every condition holds (including an empty list).
/// - A predicate that panics is not caught.
pub fn try_meeting_conditions<T: ?Sized>(
    value: &T,
    conditions: &[Condition<T>],
) -> Result<(), ValidationError> {
    for condition in conditions {
        if !condition.check(value) {
            return Err(ValidationError::Condition(
                condition.failure_message().to_string(),
            ));
        }
    }
    Ok(())
}
