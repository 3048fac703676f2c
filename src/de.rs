//! JSON text parsing.
//!
//! This module provides the [`Parser`], a strict single-pass recursive-descent
//! parser producing [`Value`] trees.
//!
//! ## Overview
//!
//! - **Lossless numbers**: integer literals become [`Value::Integer`], literals
//!   with a fraction or exponent become [`Value::Decimal`] with their scale
//! - **Error reporting**: every failure is a [`Error::Malformed`] carrying the
//!   line, column and byte offset where parsing stopped
//! - **Bounded nesting**: arrays and objects may nest at most
//!   [`JsonOptions::max_depth`] levels
//! - **Duplicate keys**: the last value wins and the key keeps the position
//!   of its first occurrence
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use jsondoc::{from_str, Error};
//!
//! let value = from_str(r#"{"price": 19.990, "qty": 3}"#).unwrap();
//! assert_eq!(value.to_json_string(), r#"{"price":19.990,"qty":3}"#);
//!
//! let err = from_str("{\n  \"a\": tru\n}").unwrap_err();
//! assert!(matches!(err, Error::Malformed { line: 2, .. }));
//! ```

use crate::{Array, Decimal, Error, JsonOptions, Object, Result, Value};
use num_bigint::BigInt;
use std::str::FromStr;

/// The JSON parser.
///
/// Created via [`Parser::new`] and consumed by [`Parser::parse`].
pub struct Parser<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str, options: &JsonOptions) -> Self {
        Parser {
            input,
            position: 0,
            line: 1,
            column: 1,
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    /// Parses exactly one document. Anything but whitespace after it is an
    /// error.
    pub fn parse(mut self) -> Result<Value> {
        self.skip_whitespace();
        let value = self.parse_value()?;
        self.skip_whitespace();
        if !self.at_end() {
            return Err(self.error("trailing characters after document"));
        }
        Ok(value)
    }

    fn error(&self, msg: &str) -> Error {
        Error::malformed(self.line, self.column, self.position, msg)
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn peek_byte(&self) -> Option<u8> {
        self.input.as_bytes().get(self.position).copied()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.input[self.position..].chars().next()?;
        self.position += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek_byte() {
            self.next_char();
        }
    }

    fn expect(&mut self, expected: u8) -> Result<()> {
        if self.peek_byte() == Some(expected) {
            self.next_char();
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    fn unexpected(&self) -> Error {
        match self.input[self.position..].chars().next() {
            Some(ch) => self.error(&format!("unexpected character '{}'", ch.escape_debug())),
            None => self.error("unexpected end of input"),
        }
    }

    fn parse_value(&mut self) -> Result<Value> {
        match self.peek_byte() {
            Some(b'n') => self.parse_keyword("null", Value::Null),
            Some(b't') => self.parse_keyword("true", Value::Boolean(true)),
            Some(b'f') => self.parse_keyword("false", Value::Boolean(false)),
            Some(b'"') => Ok(Value::String(self.parse_string()?)),
            Some(b'[') => self.parse_array().map(Value::Array),
            Some(b'{') => self.parse_object().map(Value::Object),
            Some(b'-' | b'0'..=b'9') => self.parse_number(),
            _ => Err(self.unexpected()),
        }
    }

    fn parse_keyword(&mut self, keyword: &str, value: Value) -> Result<Value> {
        for expected in keyword.bytes() {
            self.expect(expected)?;
        }
        Ok(value)
    }

    fn enter(&mut self) -> Result<()> {
        if self.depth >= self.max_depth {
            return Err(self.error(&format!(
                "nesting deeper than {} levels",
                self.max_depth
            )));
        }
        self.depth += 1;
        Ok(())
    }

    fn parse_array(&mut self) -> Result<Array> {
        self.enter()?;
        self.expect(b'[')?;
        let mut arr = Array::new();

        self.skip_whitespace();
        if self.peek_byte() == Some(b']') {
            self.next_char();
            self.depth -= 1;
            return Ok(arr);
        }

        loop {
            self.skip_whitespace();
            arr.add(self.parse_value()?);
            self.skip_whitespace();
            match self.peek_byte() {
                Some(b',') => {
                    self.next_char();
                }
                Some(b']') => {
                    self.next_char();
                    break;
                }
                _ => return Err(self.unexpected()),
            }
        }

        self.depth -= 1;
        Ok(arr)
    }

    fn parse_object(&mut self) -> Result<Object> {
        self.enter()?;
        self.expect(b'{')?;
        let mut obj = Object::new();

        self.skip_whitespace();
        if self.peek_byte() == Some(b'}') {
            self.next_char();
            self.depth -= 1;
            return Ok(obj);
        }

        loop {
            self.skip_whitespace();
            if self.peek_byte() != Some(b'"') {
                return Err(self.unexpected());
            }
            let key = self.parse_string()?;
            self.skip_whitespace();
            self.expect(b':')?;
            self.skip_whitespace();
            let value = self.parse_value()?;
            obj.set(key, value);
            self.skip_whitespace();
            match self.peek_byte() {
                Some(b',') => {
                    self.next_char();
                }
                Some(b'}') => {
                    self.next_char();
                    break;
                }
                _ => return Err(self.unexpected()),
            }
        }

        self.depth -= 1;
        Ok(obj)
    }

    fn parse_string(&mut self) -> Result<String> {
        self.expect(b'"')?;
        let mut result = String::new();

        loop {
            let ch = match self.next_char() {
                Some(ch) => ch,
                None => return Err(self.error("unterminated string")),
            };
            match ch {
                '"' => return Ok(result),
                '\\' => {
                    let escaped = self.parse_escape()?;
                    result.push(escaped);
                }
                c if c < '\u{0020}' => {
                    return Err(self.error("unescaped control character in string"));
                }
                c => result.push(c),
            }
        }
    }

    fn parse_escape(&mut self) -> Result<char> {
        match self.next_char() {
            Some('"') => Ok('"'),
            Some('\\') => Ok('\\'),
            Some('/') => Ok('/'),
            Some('b') => Ok('\u{0008}'),
            Some('f') => Ok('\u{000C}'),
            Some('n') => Ok('\n'),
            Some('r') => Ok('\r'),
            Some('t') => Ok('\t'),
            Some('u') => self.parse_unicode_escape(),
            Some(_) => Err(self.error("invalid escape sequence")),
            None => Err(self.error("unterminated string")),
        }
    }

    fn parse_unicode_escape(&mut self) -> Result<char> {
        let first = self.parse_hex4()?;
        let code_point = match first {
            0xD800..=0xDBFF => {
                if self.peek_byte() != Some(b'\\') {
                    return Err(self.error("unpaired high surrogate"));
                }
                self.next_char();
                if self.next_char() != Some('u') {
                    return Err(self.error("unpaired high surrogate"));
                }
                let second = self.parse_hex4()?;
                if !(0xDC00..=0xDFFF).contains(&second) {
                    return Err(self.error("unpaired high surrogate"));
                }
                0x10000 + ((u32::from(first) - 0xD800) << 10) + (u32::from(second) - 0xDC00)
            }
            0xDC00..=0xDFFF => return Err(self.error("unpaired low surrogate")),
            other => u32::from(other),
        };
        char::from_u32(code_point).ok_or_else(|| self.error("invalid unicode code point"))
    }

    fn parse_hex4(&mut self) -> Result<u16> {
        let mut value = 0u16;
        for _ in 0..4 {
            let digit = match self.next_char().and_then(|c| c.to_digit(16)) {
                Some(d) => d as u16,
                None => {
                    return Err(self.error(
                        "invalid unicode escape sequence (expected 4 hex digits)",
                    ))
                }
            };
            value = value << 4 | digit;
        }
        Ok(value)
    }

    fn consume_digits(&mut self) -> usize {
        let start = self.position;
        while let Some(b'0'..=b'9') = self.peek_byte() {
            self.next_char();
        }
        self.position - start
    }

    fn parse_number(&mut self) -> Result<Value> {
        let start = self.position;
        let mut is_decimal = false;

        if self.peek_byte() == Some(b'-') {
            self.next_char();
        }
        match self.peek_byte() {
            Some(b'0') => {
                self.next_char();
                if let Some(b'0'..=b'9') = self.peek_byte() {
                    return Err(self.error("leading zeros are not allowed"));
                }
            }
            Some(b'1'..=b'9') => {
                self.consume_digits();
            }
            _ => return Err(self.error("expected digit")),
        }

        if self.peek_byte() == Some(b'.') {
            self.next_char();
            is_decimal = true;
            if self.consume_digits() == 0 {
                return Err(self.error("expected digit after decimal point"));
            }
        }

        if let Some(b'e' | b'E') = self.peek_byte() {
            self.next_char();
            is_decimal = true;
            if let Some(b'+' | b'-') = self.peek_byte() {
                self.next_char();
            }
            if self.consume_digits() == 0 {
                return Err(self.error("expected digit in exponent"));
            }
        }

        let literal = &self.input[start..self.position];
        if is_decimal {
            Decimal::from_str(literal)
                .map(Value::Decimal)
                .map_err(|_| self.error("number exponent out of range"))
        } else {
            BigInt::from_str(literal)
                .map(Value::Integer)
                .map_err(|_| self.error("invalid integer literal"))
        }
    }
}

/// Parses a document from text.
pub fn parse_str(input: &str, options: &JsonOptions) -> Result<Value> {
    Parser::new(input, options).parse()
}

/// Parses a document from UTF-8 bytes.
///
/// Invalid UTF-8 is reported as [`Error::Malformed`] at the first bad byte.
pub fn parse_slice(input: &[u8], options: &JsonOptions) -> Result<Value> {
    match std::str::from_utf8(input) {
        Ok(text) => parse_str(text, options),
        Err(e) => {
            let valid = &input[..e.valid_up_to()];
            let line = 1 + valid.iter().filter(|&&b| b == b'\n').count();
            let line_start = valid
                .iter()
                .rposition(|&b| b == b'\n')
                .map_or(0, |i| i + 1);
            // valid prefix is UTF-8 by construction
            let column = 1 + String::from_utf8_lossy(&valid[line_start..]).chars().count();
            Err(Error::malformed(
                line,
                column,
                e.valid_up_to(),
                "invalid UTF-8",
            ))
        }
    }
}
