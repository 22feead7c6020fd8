//! # sjson
//!
//! A schema-free parser for JSON-style documents.
//!
//! ## What it does
//!
//! `sjson` turns UTF-8 text into a tree of dynamically-typed [`Value`]s without asking
//! the caller to declare a target type first. Each node is one of seven kinds: null,
//! integer (`i32`), float (`f32`), string, boolean, list or object.
//!
//! ## Key Features
//!
//! - **Schema-free**: inspect the tree with checked accessors, no downcasting
//! - **Lenient input**: `'single'` or `"double"` quoted strings, trailing commas before
//!   `}` and `]`
//! - **Classified errors**: every failure is one [`ErrorKind`] with a line and column
//! - **Typed extraction**: optionally hand the tree to any `serde::Deserialize` type
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use sjson::{parse, Value};
//!
//! let value = parse(r#"
//!     {
//!         "type": "image",
//!         "src": 'res/assets/guy.png',
//!         "position": [12, 0, 0],
//!         "opacity": 0.75,
//!     }
//! "#).unwrap();
//!
//! assert_eq!(value.get("type").and_then(Value::as_str), Some("image"));
//! assert_eq!(value.get("opacity").and_then(Value::as_float), Some(0.75));
//!
//! let position = value.get("position").and_then(Value::as_list).unwrap();
//! assert_eq!(position[0], Value::Integer(12));
//! ```
//!
//! ### Numbers
//!
//! A literal containing `.`, `e` or `E` is a float, anything else an integer. Accessors
//! never convert between the two:
//!
//! ```rust
//! use sjson::parse;
//!
//! assert_eq!(parse("1e3").unwrap().as_float(), Some(1000.0));
//! assert_eq!(parse("1000").unwrap().as_float(), None);
//! ```
//!
//! ### Errors
//!
//! ```rust
//! use sjson::{parse, ErrorKind};
//!
//! assert_eq!(parse("   ").unwrap_err().kind(), ErrorKind::EmptyInput);
//! assert_eq!(parse("tru").unwrap_err().kind(), ErrorKind::UnexpectedLiteral);
//! assert_eq!(parse("{1: 2}").unwrap_err().kind(), ErrorKind::NonStringKey);
//! ```
//!
//! ## Logging
//!
//! Entry points emit [`tracing`] events (`trace` on every parse, `debug` on file loads
//! and failures). Install a subscriber in the application to see them.

pub mod de;
pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod parser;
pub mod value;

pub use de::ValueDeserializer;
pub use error::{Error, ErrorKind, Result};
pub use map::ObjectMap;
pub use options::{ParseOptions, TrailingInput};
pub use parser::Parser;
pub use value::{Kind, Value};

use serde::de::DeserializeOwned;
use std::io;
use std::path::Path;

/// Parse a complete document into a [`Value`] tree with default options.
///
/// # Examples
///
/// ```rust
/// use sjson::{parse, Value};
///
/// assert_eq!(parse("null").unwrap(), Value::Null);
/// assert_eq!(parse("'x'").unwrap(), parse("\"x\"").unwrap());
/// ```
///
/// # Errors
///
/// Returns the first error met; see [`ErrorKind`] for the classification.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(text: &str) -> Result<Value> {
    parse_with_options(text, &ParseOptions::default())
}

/// Parse a complete document into a [`Value`] tree with custom options.
///
/// # Examples
///
/// ```rust
/// use sjson::{parse_with_options, ErrorKind, ParseOptions};
///
/// let options = ParseOptions::new().with_max_depth(1);
/// assert!(parse_with_options("[1, 2]", &options).is_ok());
///
/// let err = parse_with_options("[[1]]", &options).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::DepthLimitExceeded);
/// ```
///
/// # Errors
///
/// Returns the first error met; see [`ErrorKind`] for the classification.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_with_options(text: &str, options: &ParseOptions) -> Result<Value> {
    tracing::trace!(
        len = text.len(),
        trailing = ?options.trailing,
        max_depth = ?options.max_depth,
        "parsing document"
    );

    let result = Parser::with_options(text, options.clone()).parse();
    if let Err(err) = &result {
        tracing::debug!(kind = ?err.kind(), position = ?err.position(), "parse failed: {}", err);
    }
    result
}

/// Read a file and parse its contents.
///
/// Lines are joined without separators: every `\n`, `\r\n` and lone `\r` terminator is
/// dropped. Newlines written literally inside a quoted string are therefore lost;
/// use the `\n` escape to keep them.
///
/// # Examples
///
/// ```rust
/// use sjson::{parse_file, Value};
///
/// let path = std::env::temp_dir().join("sjson_doc_parse_file.json");
/// std::fs::write(&path, "{\n  \"frames\": [1,\n 2]\n}\n").unwrap();
///
/// let value = parse_file(&path).unwrap();
/// assert_eq!(
///     value.get("frames"),
///     Some(&Value::List(vec![Value::Integer(1), Value::Integer(2)]))
/// );
/// # std::fs::remove_file(&path).ok();
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read or is not UTF-8, and any parse
/// error otherwise.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;

    let mut text = String::with_capacity(contents.len());
    for line in contents.split(|c: char| c == '\r' || c == '\n') {
        text.push_str(line);
    }

    tracing::debug!(
        path = %path.display(),
        bytes = contents.len(),
        joined = text.len(),
        "loaded document"
    );
    parse(&text)
}

/// Parse a document from bytes, validating UTF-8 first.
///
/// # Examples
///
/// ```rust
/// use sjson::{parse_slice, Value};
///
/// assert_eq!(parse_slice(b"[true]").unwrap(), Value::List(vec![Value::Boolean(true)]));
/// assert!(parse_slice(&[0xff, 0xfe]).is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::Custom`] if the bytes are not valid UTF-8, and any parse error
/// otherwise.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_slice(bytes: &[u8]) -> Result<Value> {
    let text = std::str::from_utf8(bytes).map_err(Error::custom)?;
    parse(text)
}

/// Read a whole stream and parse it. Unlike [`parse_file`], line breaks are kept.
///
/// # Examples
///
/// ```rust
/// use sjson::{parse_reader, Value};
/// use std::io::Cursor;
///
/// let value = parse_reader(Cursor::new("'two\nlines'")).unwrap();
/// assert_eq!(value, Value::from("two\nlines"));
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, and any parse error otherwise.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_reader<R: io::Read>(mut reader: R) -> Result<Value> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse(&text)
}

/// Deserialize an instance of type `T` from a parsed [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use sjson::{from_value, sjson};
///
/// #[derive(Deserialize, Debug, PartialEq)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_value(sjson!({ "x": 1, "y": 2 })).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns [`Error::Custom`] if the tree does not fit `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(ValueDeserializer::new(value))
}

/// Parse text and deserialize an instance of type `T` from the resulting tree.
///
/// # Examples
///
/// ```rust
/// use sjson::from_str;
///
/// let frames: Vec<i32> = from_str("[1, 2, 3,]").unwrap();
/// assert_eq!(frames, vec![1, 2, 3]);
/// ```
///
/// # Errors
///
/// Returns any parse error, or [`Error::Custom`] if the tree does not fit `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(text: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(parse(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sjson;
    use serde::Deserialize;
    use std::io::Cursor;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    fn scratch_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("sjson_{}_{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_parse_file_joins_lines() {
        let path = scratch_file("joined.json", "{\r\n  \"a\": [1,\r\n 2],\n  \"b\": 'x'\n}");
        let value = parse_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(value, sjson!({ "a": [1, 2], "b": "x" }));
    }

    #[test]
    fn test_parse_file_drops_newlines_inside_strings() {
        let path = scratch_file("multiline.json", "\"first\nsecond\"\n");
        let value = parse_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(value, Value::from("firstsecond"));
    }

    #[test]
    fn test_parse_file_splits_on_lone_carriage_return() {
        let path = scratch_file("cr_only.json", "['a\rb',\r 'c']\r");
        let value = parse_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(value, sjson!(["ab", "c"]));
    }

    #[test]
    fn test_parse_file_missing() {
        let path = std::env::temp_dir().join("sjson_definitely_missing.json");
        let err = parse_file(path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_parse_file_empty() {
        let path = scratch_file("empty.json", "\n\n");
        let err = parse_file(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert_eq!(err, Error::EmptyInput);
    }

    #[test]
    fn test_parse_reader_keeps_newlines() {
        let value = parse_reader(Cursor::new("['a\nb']")).unwrap();
        assert_eq!(value, Value::List(vec![Value::from("a\nb")]));
    }

    #[test]
    fn test_parse_slice_rejects_invalid_utf8() {
        let err = parse_slice(&[b'"', 0xc3, 0x28, b'"']).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Custom);
    }

    #[test]
    fn test_from_str() {
        let point: Point = from_str("{'x': 1, 'y': -2}").unwrap();
        assert_eq!(point, Point { x: 1, y: -2 });

        let err = from_str::<Point>("{'x': 1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingCloseBrace);
    }

    #[test]
    fn test_parse_with_strict_options() {
        let options = ParseOptions::strict();
        assert!(parse_with_options("[1] ", &options).is_ok());
        assert_eq!(
            parse_with_options("[1] [2]", &options).unwrap_err().kind(),
            ErrorKind::TrailingCharacters
        );
        assert_eq!(parse("[1] [2]").unwrap(), sjson!([1]));
    }
}
