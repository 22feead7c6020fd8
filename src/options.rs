//! Configuration options for parsing.
//!
//! This module provides types to tune how strictly documents are read:
//!
//! - [`ParseOptions`]: Main configuration struct
//! - [`TrailingInput`]: What to do with text after the top-level value
//!
//! ## Examples
//!
//! ```rust
//! use sjson::{parse_with_options, ErrorKind, ParseOptions, Value};
//!
//! // Lenient by default: text after the value is left unread
//! let value = parse_with_options("1 2", &ParseOptions::new()).unwrap();
//! assert_eq!(value, Value::Integer(1));
//!
//! // Strict mode rejects it
//! let err = parse_with_options("1 2", &ParseOptions::strict()).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::TrailingCharacters);
//! ```

/// Nesting limit applied by [`ParseOptions::default`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Handling of input that follows the top-level value.
///
/// Only non-whitespace text counts; trailing whitespace is always accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TrailingInput {
    /// Stop after the first complete value and leave the rest unread.
    #[default]
    Ignore,
    /// Fail with [`Error::TrailingCharacters`](crate::Error::TrailingCharacters).
    Reject,
}

/// Configuration options for parsing.
///
/// # Examples
///
/// ```rust
/// use sjson::{ParseOptions, TrailingInput};
///
/// let options = ParseOptions::new()
///     .with_trailing(TrailingInput::Reject)
///     .with_max_depth(16);
/// assert_eq!(options.max_depth, Some(16));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    pub trailing: TrailingInput,
    /// Maximum nesting of lists and objects, or `None` for no limit.
    pub max_depth: Option<usize>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            trailing: TrailingInput::default(),
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl ParseOptions {
    /// Creates default options (trailing input ignored, nesting limited to 128).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sjson::{ParseOptions, TrailingInput};
    ///
    /// let options = ParseOptions::new();
    /// assert_eq!(options.trailing, TrailingInput::Ignore);
    /// assert_eq!(options.max_depth, Some(128));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that reject any non-whitespace text after the top-level value.
    #[must_use]
    pub fn strict() -> Self {
        ParseOptions {
            trailing: TrailingInput::Reject,
            ..Default::default()
        }
    }

    /// Sets the handling of text after the top-level value.
    #[must_use]
    pub fn with_trailing(mut self, trailing: TrailingInput) -> Self {
        self.trailing = trailing;
        self
    }

    /// Sets the maximum nesting depth of lists and objects.
    ///
    /// A depth of `0` accepts only scalar documents.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Removes the nesting limit.
    ///
    /// Deeply nested input then recurses without bound.
    #[must_use]
    pub fn without_depth_limit(mut self) -> Self {
        self.max_depth = None;
        self
    }
}
