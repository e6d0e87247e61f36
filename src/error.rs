//! Error types for TOML parsing and rendering.
//!
//! Every failure is fatal: the first error aborts the parse or the render and
//! is handed back to the caller. There is no partially built document and no
//! partially written output.
//!
//! ## Error Categories
//!
//! - **Syntax errors**: [`Error::UnexpectedToken`] and [`Error::Incomplete`], both
//!   carrying the line on which the parser stopped. `Incomplete` is reserved for
//!   input that ends in the middle of a construct, so a truncated file can be told
//!   apart from a malformed one.
//! - **Structure errors**: [`Error::ConflictEntry`] when a key or header reuses an
//!   occupied path.
//! - **Layout errors**: [`Error::NullInArrayOfTable`], [`Error::EmptyArrayOfTableInMap`]
//!   and [`Error::UnsupportedKind`], raised by the writer.
//!
//! ## Examples
//!
//! ```rust
//! use toml_tree::{parse_document, Error};
//!
//! let err = parse_document("a = 1\na = 2").unwrap_err();
//! assert!(matches!(err, Error::ConflictEntry { .. }));
//!
//! let err = parse_document("s = \"never closed").unwrap_err();
//! assert!(matches!(err, Error::Incomplete { line: 1 }));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised while parsing or rendering TOML.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A character appeared where the grammar forbids it.
    #[error("Unexpected token {token:?} at line {line}")]
    UnexpectedToken { token: char, line: usize },

    /// Input ended in the middle of a string, array, table or header.
    #[error("Incomplete input at line {line}")]
    Incomplete { line: usize },

    /// A key or table header redeclares an already occupied path.
    #[error("Conflicting entry at path '{path}'")]
    ConflictEntry { path: String },

    /// An integer literal does not fit in a signed 64-bit integer.
    #[error("Integer out of range at line {line}")]
    NumberOutOfRange { line: usize },

    /// A date-time literal has the right shape but names an impossible instant.
    #[error("Invalid date-time '{text}' at line {line}")]
    InvalidDateTime { text: String, line: usize },

    /// A null element sits in an array of tables without an inline or block hint.
    #[error("Null element in array of tables at path '{path}'")]
    NullInArrayOfTable { path: String },

    /// A map holds an empty array of tables after its first array-of-table value.
    #[error("Empty array of tables must be the first array of tables in a map")]
    EmptyArrayOfTableInMap,

    /// The value cannot be represented as TOML.
    #[error("Unsupported kind: {0}")]
    UnsupportedKind(String),

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates the error for a bad character, or [`Error::Incomplete`] when the
    /// parser is already at end of input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toml_tree::Error;
    ///
    /// assert_eq!(Error::unexpected(Some('?'), 3), Error::UnexpectedToken { token: '?', line: 3 });
    /// assert_eq!(Error::unexpected(None, 3), Error::Incomplete { line: 3 });
    /// ```
    pub fn unexpected(token: Option<char>, line: usize) -> Self {
        match token {
            Some(token) => Error::UnexpectedToken { token, line },
            None => Error::Incomplete { line },
        }
    }

    /// Creates an incomplete-input error.
    pub fn incomplete(line: usize) -> Self {
        Error::Incomplete { line }
    }

    /// Creates a conflict error for the dotted path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toml_tree::Error;
    ///
    /// let err = Error::conflict(&["server".to_string(), "port".to_string()]);
    /// assert_eq!(err.to_string(), "Conflicting entry at path 'server.port'");
    /// ```
    pub fn conflict(path: &[String]) -> Self {
        Error::ConflictEntry {
            path: join_path(path),
        }
    }

    pub fn null_in_array_of_table(path: &[String]) -> Self {
        Error::NullInArrayOfTable {
            path: join_path(path),
        }
    }

    pub fn invalid_date_time(text: &str, line: usize) -> Self {
        Error::InvalidDateTime {
            text: text.to_string(),
            line,
        }
    }

    /// Creates an unsupported kind error for shapes that have no TOML form.
    pub fn unsupported_kind(msg: &str) -> Self {
        Error::UnsupportedKind(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for source or sink failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Line number attached to the error, if it came from the parser.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::UnexpectedToken { line, .. }
            | Error::Incomplete { line }
            | Error::NumberOutOfRange { line }
            | Error::InvalidDateTime { line, .. } => Some(*line),
            _ => None,
        }
    }
}

fn join_path(path: &[String]) -> String {
    path.join(".")
}

impl From<fmt::Error> for Error {
    fn from(_: fmt::Error) -> Self {
        Error::Io("formatter error".to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
