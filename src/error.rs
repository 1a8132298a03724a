//! Error types for decoding Lua table literals.
//!
//! Every grammar violation the decoder meets is fatal to that decode call and
//! surfaces as [`Error::Parse`]. There are no warnings and no partial results.
//!
//! ## Error Context
//!
//! Parse errors carry:
//! - The 1-based line and column of the lookahead character when decoding stopped
//! - A short human-readable message (`"malformed number"`, `"input is empty"`, ...)
//! - The offending fragment of input, where one exists
//!
//! ## Examples
//!
//! ```rust
//! use serde_luatable::{load, Error};
//!
//! let result = load("{ [nil] = 1 }");
//! assert!(result.is_err());
//!
//! if let Err(err) = result {
//!     assert!(err.is_parse());
//!     assert_eq!(err.message(), "table keys cannot be nil");
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The input is not a well-formed table literal.
    #[error(
        "Parse error at line {line}, column {col}: {msg}{}",
        .fragment.as_deref().map(|f| format!(" (near {:?})", f)).unwrap_or_default()
    )]
    Parse {
        line: usize,
        col: usize,
        msg: String,
        fragment: Option<String>,
    },

    /// IO error while reading input
    #[error("IO error: {0}")]
    Io(String),

    /// Conversion of a decoded value into a Rust type failed
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a parse error at the given position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_luatable::Error;
    ///
    /// let err = Error::parse(3, 7, "input is empty");
    /// assert!(err.to_string().contains("line 3, column 7"));
    /// ```
    pub fn parse(line: usize, col: usize, msg: &str) -> Self {
        Error::Parse {
            line,
            col,
            msg: msg.to_string(),
            fragment: None,
        }
    }

    /// Creates a parse error that also records the offending input fragment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_luatable::Error;
    ///
    /// let err = Error::parse_with_fragment(1, 4, "malformed number", "-x");
    /// assert!(err.to_string().contains("near \"-x\""));
    /// ```
    pub fn parse_with_fragment(line: usize, col: usize, msg: &str, fragment: &str) -> Self {
        Error::Parse {
            line,
            col,
            msg: msg.to_string(),
            fragment: Some(fragment.to_string()),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reader failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` if this error was raised by the decoder.
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }

    /// Returns the bare message without position information.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Error::Parse { msg, .. } => msg,
            Error::Io(msg) | Error::Custom(msg) => msg,
        }
    }

    /// Returns the offending input fragment of a parse error, if recorded.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        match self {
            Error::Parse { fragment, .. } => fragment.as_deref(),
            _ => None,
        }
    }

    /// Returns the `(line, column)` of a parse error.
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Error::Parse { line, col, .. } => Some((*line, *col)),
            _ => None,
        }
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = Error::parse(2, 5, "table keys cannot be nil");
        assert_eq!(
            err.to_string(),
            "Parse error at line 2, column 5: table keys cannot be nil"
        );
        assert_eq!(err.fragment(), None);
        assert_eq!(err.position(), Some((2, 5)));
    }

    #[test]
    fn test_fragment_display() {
        let err = Error::parse_with_fragment(1, 3, "malformed number", "0x");
        assert_eq!(
            err.to_string(),
            "Parse error at line 1, column 3: malformed number (near \"0x\")"
        );
        assert_eq!(err.fragment(), Some("0x"));
    }

    #[test]
    fn test_non_parse_errors() {
        let err = Error::custom("bad field");
        assert!(!err.is_parse());
        assert_eq!(err.message(), "bad field");
        assert_eq!(err.position(), None);
        assert!(Error::io("closed").to_string().starts_with("IO error"));
    }
}
