//! Error types for parsing and value extraction.
//!
//! Every failure is terminal: a parse either yields a complete [`Value`](crate::Value)
//! tree or exactly one [`Error`]. Errors raised by the parser carry the 1-based line and
//! column of the offending position.
//!
//! ## Error Categories
//!
//! - **Input errors**: empty input, a character that cannot start a value
//! - **Literal errors**: a broken `true`/`false`/`null` keyword or an unparsable number
//! - **Structural errors**: missing `:`, `}` or `]`, unterminated strings, non-string keys
//! - **Extraction errors**: projecting a value as the wrong kind, typed extraction failures
//! - **I/O errors**: failures while loading a document
//!
//! Use [`Error::kind`] to classify an error without destructuring it:
//!
//! ```rust
//! use sjson::{parse, ErrorKind};
//!
//! let err = parse(r#"{"a" 1}"#).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::MissingColon);
//! assert!(err.to_string().contains("line 1"));
//! ```

use crate::value::Kind;
use std::fmt;
use thiserror::Error;

/// Represents every way parsing or extracting a value can fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The input is empty or contains only whitespace.
    #[error("Empty input: expected a value")]
    EmptyInput,

    /// The current character does not begin any value.
    #[error("Invalid syntax at line {line}, column {col}: unexpected character {found:?}")]
    InvalidSyntax { line: usize, col: usize, found: char },

    /// A `true`, `false` or `null` keyword did not match the input.
    #[error("Unexpected literal at line {line}, column {col}: expecting {expected}")]
    UnexpectedLiteral {
        line: usize,
        col: usize,
        expected: &'static str,
    },

    /// A numeric literal did not parse under its integer or float interpretation.
    #[error("Invalid number \"{text}\" at line {line}, column {col}")]
    InvalidNumber {
        line: usize,
        col: usize,
        text: String,
    },

    /// An object key was a value of some kind other than string.
    #[error("Invalid key at line {line}, column {col}: keys must be strings, found {found}")]
    NonStringKey { line: usize, col: usize, found: Kind },

    /// No `:` between an object key and its value.
    #[error("Missing colon at line {line}, column {col}: expecting ':' between key and value")]
    MissingColon { line: usize, col: usize },

    /// An object was not closed by `}`.
    #[error("Missing close brace at line {line}, column {col}: expecting '}}'")]
    MissingCloseBrace { line: usize, col: usize },

    /// A list was not closed by `]`.
    #[error("Missing close bracket at line {line}, column {col}: expecting ']'")]
    MissingCloseBracket { line: usize, col: usize },

    /// The input ended before the closing quote of a string. The position is that of
    /// the opening quote.
    #[error("Unterminated string starting at line {line}, column {col}: expecting closing {quote}")]
    UnterminatedString { line: usize, col: usize, quote: char },

    /// The input ended where a value was required.
    #[error("Unexpected end of input at line {line}, column {col}: expecting {expected}")]
    UnexpectedEof {
        line: usize,
        col: usize,
        expected: &'static str,
    },

    /// Text remained after the top-level value (strict mode only).
    #[error("Trailing characters at line {line}, column {col}: unexpected {found:?} after value")]
    TrailingCharacters { line: usize, col: usize, found: char },

    /// Lists and objects were nested deeper than the configured limit.
    #[error("Nesting limit of {limit} exceeded at line {line}, column {col}")]
    DepthLimitExceeded {
        line: usize,
        col: usize,
        limit: usize,
    },

    /// A value was projected as a kind it does not hold.
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: Kind, found: Kind },

    /// IO error while loading a document
    #[error("IO error: {0}")]
    Io(String),

    /// Free-form error: typed extraction failures and byte input that is not UTF-8
    #[error("Error: {0}")]
    Custom(String),
}

/// The classification of an [`Error`], without its payload.
///
/// # Examples
///
/// ```rust
/// use sjson::{parse, ErrorKind};
///
/// assert_eq!(parse("").unwrap_err().kind(), ErrorKind::EmptyInput);
/// assert_eq!(parse("[1,2").unwrap_err().kind(), ErrorKind::MissingCloseBracket);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyInput,
    InvalidSyntax,
    UnexpectedLiteral,
    InvalidNumber,
    NonStringKey,
    MissingColon,
    MissingCloseBrace,
    MissingCloseBracket,
    UnterminatedString,
    UnexpectedEof,
    TrailingCharacters,
    DepthLimitExceeded,
    TypeMismatch,
    Io,
    Custom,
}

impl Error {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyInput => ErrorKind::EmptyInput,
            Error::InvalidSyntax { .. } => ErrorKind::InvalidSyntax,
            Error::UnexpectedLiteral { .. } => ErrorKind::UnexpectedLiteral,
            Error::InvalidNumber { .. } => ErrorKind::InvalidNumber,
            Error::NonStringKey { .. } => ErrorKind::NonStringKey,
            Error::MissingColon { .. } => ErrorKind::MissingColon,
            Error::MissingCloseBrace { .. } => ErrorKind::MissingCloseBrace,
            Error::MissingCloseBracket { .. } => ErrorKind::MissingCloseBracket,
            Error::UnterminatedString { .. } => ErrorKind::UnterminatedString,
            Error::UnexpectedEof { .. } => ErrorKind::UnexpectedEof,
            Error::TrailingCharacters { .. } => ErrorKind::TrailingCharacters,
            Error::DepthLimitExceeded { .. } => ErrorKind::DepthLimitExceeded,
            Error::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Error::Io(_) => ErrorKind::Io,
            Error::Custom(_) => ErrorKind::Custom,
        }
    }

    /// Returns the `(line, column)` the error was raised at, if it came from the parser.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sjson::parse;
    ///
    /// let err = parse("[1,\n  x]").unwrap_err();
    /// assert_eq!(err.position(), Some((2, 3)));
    /// ```
    #[must_use]
    pub const fn position(&self) -> Option<(usize, usize)> {
        match *self {
            Error::InvalidSyntax { line, col, .. }
            | Error::UnexpectedLiteral { line, col, .. }
            | Error::InvalidNumber { line, col, .. }
            | Error::NonStringKey { line, col, .. }
            | Error::MissingColon { line, col }
            | Error::MissingCloseBrace { line, col }
            | Error::MissingCloseBracket { line, col }
            | Error::UnterminatedString { line, col, .. }
            | Error::UnexpectedEof { line, col, .. }
            | Error::TrailingCharacters { line, col, .. }
            | Error::DepthLimitExceeded { line, col, .. } => Some((line, col)),
            Error::EmptyInput
            | Error::TypeMismatch { .. }
            | Error::Io(_)
            | Error::Custom(_) => None,
        }
    }

    /// Creates a type mismatch error for a checked projection that hit the wrong kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sjson::{Error, Kind};
    ///
    /// let err = Error::type_mismatch(Kind::Integer, Kind::Float);
    /// assert_eq!(err.to_string(), "Type mismatch: expected integer, found float");
    /// ```
    pub fn type_mismatch(expected: Kind, found: Kind) -> Self {
        Error::TypeMismatch { expected, found }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for document loading failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::io(&err.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
