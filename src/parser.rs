//! Recursive-descent parsing.
//!
//! This module provides the [`Parser`], which reads a complete text buffer into a
//! [`Value`] tree through a single forward-only cursor.
//!
//! ## Overview
//!
//! - **Dispatch on one character**: `{`, `[`, a quote, a number character, or the first
//!   letter of `true`, `false` or `null` selects the routine for the next value
//! - **Shared cursor**: nested lists and objects recurse through `&mut self`, so every
//!   routine advances the same position and nothing is ever re-read
//! - **Lenient extensions**: strings may use `'` as well as `"`, and a trailing comma
//!   before `}` or `]` is accepted
//!
//! Most users should use the functions in the crate root:
//!
//! ```rust
//! use sjson::{parse, Value};
//!
//! let value = parse("{'tags': ['a', 'b',], 'count': 2}").unwrap();
//! assert_eq!(value.get("count"), Some(&Value::Integer(2)));
//! ```
//!
//! Driving the parser directly exposes how much input was consumed:
//!
//! ```rust
//! use sjson::{Parser, Value};
//!
//! let mut parser = Parser::from_str("[1] trailing");
//! assert_eq!(parser.parse().unwrap(), Value::List(vec![Value::Integer(1)]));
//! assert_eq!(parser.remaining(), " trailing");
//! ```

use crate::options::{ParseOptions, TrailingInput};
use crate::{Error, ObjectMap, Result, Value};

/// Characters that may start a number.
const NUMBER_START: &str = "-0123456789.";

/// Characters a number may contain. There is no `+`, so `1e+5` stops scanning at the `+`.
const NUMBER_CHARS: &str = "-0123456789.eE";

/// The parser state: input, cursor and nesting depth.
///
/// Created via [`Parser::from_str`] or [`Parser::with_options`]. Each parser owns its
/// cursor, so separate parsers can run on separate threads without coordination.
pub struct Parser<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
    depth: usize,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `input` with default options.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'a str) -> Self {
        Self::with_options(input, ParseOptions::default())
    }

    /// Creates a parser over `input` with the given options.
    pub fn with_options(input: &'a str, options: ParseOptions) -> Self {
        Parser {
            input,
            position: 0,
            line: 1,
            column: 1,
            depth: 0,
            options,
        }
    }

    /// Byte offset of the cursor.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// The input the cursor has not consumed yet.
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        &self.input[self.position..]
    }

    /// Parses one value starting at the cursor.
    ///
    /// Leading whitespace is skipped. With [`TrailingInput::Reject`] the rest of the
    /// input must be whitespace; otherwise the cursor stops right after the value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if only whitespace remains, or the first error met
    /// while reading the value. No partial value is returned.
    pub fn parse(&mut self) -> Result<Value> {
        self.skip_whitespace();
        if self.at_end() {
            return Err(Error::EmptyInput);
        }

        let value = self.parse_value()?;

        if self.options.trailing == TrailingInput::Reject {
            self.skip_whitespace();
            if let Some(found) = self.peek_char() {
                return Err(Error::TrailingCharacters {
                    line: self.line,
                    col: self.column,
                    found,
                });
            }
        }

        Ok(value)
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\r' | '\n' | '\t') = self.peek_char() {
            self.next_char();
        }
    }

    fn parse_value(&mut self) -> Result<Value> {
        match self.peek_char() {
            Some('{') => self.parse_object(),
            Some('[') => self.parse_list(),
            Some(quote @ ('"' | '\'')) => self.parse_string(quote).map(Value::String),
            Some(ch) if NUMBER_START.contains(ch) => self.parse_number(),
            Some('t') => self.parse_literal("true", Value::Boolean(true)),
            Some('f') => self.parse_literal("false", Value::Boolean(false)),
            Some('n') => self.parse_literal("null", Value::Null),
            Some(found) => Err(Error::InvalidSyntax {
                line: self.line,
                col: self.column,
                found,
            }),
            None => Err(Error::UnexpectedEof {
                line: self.line,
                col: self.column,
                expected: "value",
            }),
        }
    }

    fn parse_literal(&mut self, keyword: &'static str, value: Value) -> Result<Value> {
        let (line, col) = (self.line, self.column);
        for expected in keyword.chars() {
            match self.next_char() {
                Some(ch) if ch == expected => {}
                _ => {
                    return Err(Error::UnexpectedLiteral {
                        line,
                        col,
                        expected: keyword,
                    })
                }
            }
        }
        Ok(value)
    }

    fn parse_number(&mut self) -> Result<Value> {
        let (line, col) = (self.line, self.column);
        let start = self.position;
        while let Some(ch) = self.peek_char() {
            if !NUMBER_CHARS.contains(ch) {
                break;
            }
            self.next_char();
        }

        let text = &self.input[start..self.position];
        let is_float = text.contains(|c: char| matches!(c, '.' | 'e' | 'E'));
        let value = if is_float {
            text.parse::<f32>().ok().map(Value::Float)
        } else {
            text.parse::<i32>().ok().map(Value::Integer)
        };

        value.ok_or_else(|| Error::InvalidNumber {
            line,
            col,
            text: text.to_string(),
        })
    }

    fn parse_string(&mut self, quote: char) -> Result<String> {
        let (line, col) = (self.line, self.column);
        self.next_char(); // consume opening quote
        let mut result = String::new();

        while let Some(ch) = self.next_char() {
            match ch {
                c if c == quote => return Ok(result),
                '\\' => match self.next_char() {
                    Some('n') => result.push('\n'),
                    Some('t') => result.push('\t'),
                    Some('r') => result.push('\r'),
                    Some('f') => result.push('\u{000C}'),
                    // Unknown escapes keep the escaped character
                    Some(other) => result.push(other),
                    None => break,
                },
                other => result.push(other),
            }
        }

        Err(Error::UnterminatedString { line, col, quote })
    }

    fn enter_container(&mut self) -> Result<()> {
        if let Some(limit) = self.options.max_depth {
            if self.depth >= limit {
                return Err(Error::DepthLimitExceeded {
                    line: self.line,
                    col: self.column,
                    limit,
                });
            }
        }
        self.depth += 1;
        Ok(())
    }

    fn parse_object(&mut self) -> Result<Value> {
        self.enter_container()?;
        self.next_char(); // consume '{'
        self.skip_whitespace();

        let mut map = ObjectMap::new();
        loop {
            // Closes empty objects and objects with a trailing comma
            match self.peek_char() {
                Some('}') => break,
                None => return Err(self.missing_close_brace()),
                Some(_) => {}
            }

            let (line, col) = (self.line, self.column);
            let key = match self.parse_value()? {
                Value::String(key) => key,
                other => {
                    return Err(Error::NonStringKey {
                        line,
                        col,
                        found: other.kind(),
                    })
                }
            };

            self.skip_whitespace();
            if self.peek_char() != Some(':') {
                return Err(Error::MissingColon {
                    line: self.line,
                    col: self.column,
                });
            }
            self.next_char(); // consume ':'
            self.skip_whitespace();

            let value = self.parse_value()?;
            map.insert(key, value);

            self.skip_whitespace();
            if self.peek_char() != Some(',') {
                break;
            }
            self.next_char(); // consume ','
            self.skip_whitespace();
        }

        if self.peek_char() != Some('}') {
            return Err(self.missing_close_brace());
        }
        self.next_char(); // consume '}'
        self.depth -= 1;

        Ok(Value::Object(map))
    }

    fn parse_list(&mut self) -> Result<Value> {
        self.enter_container()?;
        self.next_char(); // consume '['
        self.skip_whitespace();

        let mut list = Vec::new();
        loop {
            match self.peek_char() {
                Some(']') => break,
                None => return Err(self.missing_close_bracket()),
                Some(_) => {}
            }

            list.push(self.parse_value()?);

            self.skip_whitespace();
            if self.peek_char() != Some(',') {
                break;
            }
            self.next_char(); // consume ','
            self.skip_whitespace();
        }

        if self.peek_char() != Some(']') {
            return Err(self.missing_close_bracket());
        }
        self.next_char(); // consume ']'
        self.depth -= 1;

        Ok(Value::List(list))
    }

    fn missing_close_brace(&self) -> Error {
        Error::MissingCloseBrace {
            line: self.line,
            col: self.column,
        }
    }

    fn missing_close_bracket(&self) -> Error {
        Error::MissingCloseBracket {
            line: self.line,
            col: self.column,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn check(input: &str, expected: Value) {
        let value = Parser::from_str(input).parse().unwrap();
        assert_eq!(value, expected);
    }

    fn check_err(input: &str, expected: ErrorKind) {
        let err = Parser::from_str(input).parse().unwrap_err();
        assert_eq!(err.kind(), expected, "input {:?} gave {}", input, err);
    }

    #[test]
    fn test_literals() {
        check("null", Value::Null);
        check("true", Value::Boolean(true));
        check("false", Value::Boolean(false));
        check("  \r\n\ttrue", Value::Boolean(true));
    }

    #[test]
    fn test_literal_mismatch() {
        check_err("tru", ErrorKind::UnexpectedLiteral);
        check_err("nul", ErrorKind::UnexpectedLiteral);
        check_err("fals", ErrorKind::UnexpectedLiteral);
        check_err("trux", ErrorKind::UnexpectedLiteral);
        check_err("nil", ErrorKind::UnexpectedLiteral);
    }

    #[test]
    fn test_literal_advances_exactly() {
        let mut parser = Parser::from_str("truex");
        assert_eq!(parser.parse().unwrap(), Value::Boolean(true));
        assert_eq!(parser.position(), 4);
        assert_eq!(parser.remaining(), "x");
    }

    #[test]
    fn test_integer_classification() {
        check("123", Value::Integer(123));
        check("-7", Value::Integer(-7));
        check("0", Value::Integer(0));
        check("2147483647", Value::Integer(i32::MAX));
        check("-2147483648", Value::Integer(i32::MIN));
    }

    #[test]
    fn test_float_classification() {
        check("1.5", Value::Float(1.5));
        check("1e3", Value::Float(1000.0));
        check("2E2", Value::Float(200.0));
        check("-0.25", Value::Float(-0.25));
        check(".5", Value::Float(0.5));
        check("1.0", Value::Float(1.0));
    }

    #[test]
    fn test_float_overflow_saturates() {
        check("1e39", Value::Float(f32::INFINITY));
        check("-1e39", Value::Float(f32::NEG_INFINITY));
        check("[1e39, 1]", Value::List(vec![Value::Float(f32::INFINITY), Value::Integer(1)]));
    }

    #[test]
    fn test_invalid_numbers() {
        check_err("-", ErrorKind::InvalidNumber);
        check_err(".", ErrorKind::InvalidNumber);
        check_err("1-2", ErrorKind::InvalidNumber);
        check_err("1.2.3", ErrorKind::InvalidNumber);
        check_err("2147483648", ErrorKind::InvalidNumber);
        check_err("1e", ErrorKind::InvalidNumber);
    }

    #[test]
    fn test_exponent_plus_sign_is_not_scanned() {
        let err = Parser::from_str("1e+5").parse().unwrap_err();
        assert_eq!(
            err,
            Error::InvalidNumber {
                line: 1,
                col: 1,
                text: "1e".to_string()
            }
        );
    }

    #[test]
    fn test_strings() {
        check(r#""hello""#, Value::from("hello"));
        check("'hello'", Value::from("hello"));
        check(r#""""#, Value::from(""));
        check(r#"'say "hi"'"#, Value::from(r#"say "hi""#));
        check(r#""it's""#, Value::from("it's"));
        check(r#""olá_こんにちは 💩""#, Value::from("olá_こんにちは 💩"));
    }

    #[test]
    fn test_string_escapes() {
        check(r#""a\nb""#, Value::from("a\nb"));
        check(r#""a\tb\rc\fd""#, Value::from("a\tb\rc\u{000C}d"));
        check(r#""quote: \" done""#, Value::from("quote: \" done"));
        check(r#"'it\'s'"#, Value::from("it's"));
        check(r#""back\\slash""#, Value::from("back\\slash"));
    }

    #[test]
    fn test_unknown_escape_passes_through() {
        check(r#""\q\b\/""#, Value::from("qb/"));
        check(r#""\u0041""#, Value::from("u0041"));
    }

    #[test]
    fn test_unterminated_string() {
        check_err(r#""abc"#, ErrorKind::UnterminatedString);
        check_err(r#""abc\"#, ErrorKind::UnterminatedString);
        check_err(r#"'abc""#, ErrorKind::UnterminatedString);

        let err = Parser::from_str(r#"["ok", "open]"#).parse().unwrap_err();
        assert_eq!(
            err,
            Error::UnterminatedString {
                line: 1,
                col: 8,
                quote: '"'
            }
        );
    }

    #[test]
    fn test_empty_input() {
        check_err("", ErrorKind::EmptyInput);
        check_err(" \r\n\t ", ErrorKind::EmptyInput);
    }

    #[test]
    fn test_invalid_syntax() {
        check_err("x", ErrorKind::InvalidSyntax);
        check_err("}", ErrorKind::InvalidSyntax);
        check_err("[1,,2]", ErrorKind::InvalidSyntax);
        check_err(r#"{"a":}"#, ErrorKind::InvalidSyntax);
        check_err("+1", ErrorKind::InvalidSyntax);

        let err = Parser::from_str("  @").parse().unwrap_err();
        assert_eq!(
            err,
            Error::InvalidSyntax {
                line: 1,
                col: 3,
                found: '@'
            }
        );
    }

    #[test]
    fn test_lists() {
        check("[]", Value::List(vec![]));
        check("[ ]", Value::List(vec![]));
        check(
            "[1, 'two', null]",
            Value::List(vec![Value::Integer(1), Value::from("two"), Value::Null]),
        );
        check(
            "[[], [[]]]",
            Value::List(vec![
                Value::List(vec![]),
                Value::List(vec![Value::List(vec![])]),
            ]),
        );
        check(
            "[1 , 2 ,3]",
            Value::List(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]),
        );
    }

    #[test]
    fn test_list_trailing_comma() {
        check(
            "[1,2,]",
            Value::List(vec![Value::Integer(1), Value::Integer(2)]),
        );
        check("[1,\n]", Value::List(vec![Value::Integer(1)]));
    }

    #[test]
    fn test_list_structural_errors() {
        check_err("[1,2", ErrorKind::MissingCloseBracket);
        check_err("[1,", ErrorKind::MissingCloseBracket);
        check_err("[", ErrorKind::MissingCloseBracket);
        check_err("[1 2]", ErrorKind::MissingCloseBracket);
        check_err("[1}", ErrorKind::MissingCloseBracket);
    }

    #[test]
    fn test_objects() {
        check("{}", Value::Object(ObjectMap::new()));

        let value = Parser::from_str(r#"{"a": 1, 'b': [true], "c": {"d": null}}"#)
            .parse()
            .unwrap();
        assert_eq!(value.get("a"), Some(&Value::Integer(1)));
        assert_eq!(
            value.get("b"),
            Some(&Value::List(vec![Value::Boolean(true)]))
        );
        assert_eq!(value.get("c").and_then(|c| c.get("d")), Some(&Value::Null));
    }

    #[test]
    fn test_object_last_write_wins() {
        let value = Parser::from_str(r#"{"a":1,"a":2}"#).parse().unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj.get("a"), Some(&Value::Integer(2)));
    }

    #[test]
    fn test_object_trailing_comma() {
        let value = Parser::from_str(r#"{"a": 1,}"#).parse().unwrap();
        assert_eq!(value.as_object().map(ObjectMap::len), Some(1));
    }

    #[test]
    fn test_object_structural_errors() {
        check_err(r#"{"a" 1}"#, ErrorKind::MissingColon);
        check_err(r#"{"a""#, ErrorKind::MissingColon);
        check_err(r#"{"a": 1"#, ErrorKind::MissingCloseBrace);
        check_err(r#"{"a": 1,"#, ErrorKind::MissingCloseBrace);
        check_err(r#"{"a": 1 "b": 2}"#, ErrorKind::MissingCloseBrace);
        check_err("{", ErrorKind::MissingCloseBrace);
        check_err(r#"{"a":"#, ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_non_string_keys() {
        let err = Parser::from_str("{1: 2}").parse().unwrap_err();
        assert_eq!(
            err,
            Error::NonStringKey {
                line: 1,
                col: 2,
                found: crate::Kind::Integer
            }
        );
        check_err("{null: 1}", ErrorKind::NonStringKey);
        check_err("{[]: 1}", ErrorKind::NonStringKey);
        check_err("{key: 1}", ErrorKind::InvalidSyntax);
    }

    #[test]
    fn test_error_positions_span_lines() {
        let err = Parser::from_str("{\n  \"a\": 1,\n  \"b\" 2\n}")
            .parse()
            .unwrap_err();
        assert_eq!(err, Error::MissingColon { line: 3, col: 7 });
    }

    #[test]
    fn test_trailing_input() {
        let mut parser = Parser::from_str("12 34");
        assert_eq!(parser.parse().unwrap(), Value::Integer(12));
        assert_eq!(parser.remaining(), " 34");

        let mut parser = Parser::with_options("12 34", ParseOptions::strict());
        assert_eq!(
            parser.parse().unwrap_err(),
            Error::TrailingCharacters {
                line: 1,
                col: 4,
                found: '3'
            }
        );

        let mut parser = Parser::with_options("[1]  \n", ParseOptions::strict());
        assert!(parser.parse().is_ok());
    }

    #[test]
    fn test_depth_limit() {
        let options = ParseOptions::new().with_max_depth(2);
        assert!(Parser::with_options("[[1]]", options.clone()).parse().is_ok());

        let err = Parser::with_options("[[[1]]]", options.clone())
            .parse()
            .unwrap_err();
        assert_eq!(
            err,
            Error::DepthLimitExceeded {
                line: 1,
                col: 3,
                limit: 2
            }
        );

        let err = Parser::with_options(r#"{"a": {"b": {}}}"#, options)
            .parse()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DepthLimitExceeded);

        let options = ParseOptions::new().with_max_depth(1);
        assert!(Parser::with_options("[[],[],[]]", options).parse().is_err());

        // Siblings do not accumulate depth
        assert!(Parser::with_options("[[],[],[]]", ParseOptions::new().with_max_depth(2))
            .parse()
            .is_ok());
        assert!(Parser::with_options("1", ParseOptions::new().with_max_depth(0))
            .parse()
            .is_ok());
    }

    #[test]
    fn test_default_depth_limit_stops_deep_nesting() {
        let deep = "[".repeat(10_000);
        check_err(&deep, ErrorKind::DepthLimitExceeded);

        let nested = format!("{}{}", "[".repeat(128), "]".repeat(128));
        assert!(Parser::from_str(&nested).parse().is_ok());
    }
}
