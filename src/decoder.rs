//! Lua table literal decoding.
//!
//! This module provides the [`Decoder`], a single-pass recursive-descent reader
//! over the restricted literal dialect game clients write into saved-settings
//! files.
//!
//! ## Overview
//!
//! - **Single pass**: one character of lookahead, no backtracking
//! - **Dispatch on the lookahead**: `{` table, `'`/`"`/`[` string, `-`/digit
//!   number (or `--` line comment), anything else a bare word
//! - **Array coercion**: a table whose keys are `1..=N` in encounter order comes
//!   back as [`Value::Array`]
//! - **Error reporting**: every violation is a fatal [`Error::Parse`] with line
//!   and column
//!
//! ## Usage
//!
//! Most callers use [`load`](crate::load):
//!
//! ```rust
//! use serde_luatable::{load, Value};
//!
//! let value = load("{ 1, 2, -- comment\n 3 }").unwrap();
//! assert_eq!(value, Value::Array(vec![Value::Int(1), Value::Int(2), Value::Int(3)]));
//! ```

use crate::{DecodeOptions, Error, LuaTable, Result, Value};
use tracing::trace;

/// A cursor over one input document.
///
/// Constructed over a single input, consumed by one top-level call, then
/// discarded. Holds only the cursor position, the lookahead character
/// (`None` once input is exhausted) and the current table depth.
pub struct Decoder<'de> {
    input: &'de str,
    position: usize,
    line: usize,
    column: usize,
    ch: Option<char>,
    depth: usize,
    options: DecodeOptions,
}

impl<'de> Decoder<'de> {
    pub fn new(input: &'de str) -> Self {
        Self::with_options(input, DecodeOptions::default())
    }

    pub fn with_options(input: &'de str, options: DecodeOptions) -> Self {
        Decoder {
            input,
            position: 0,
            line: 1,
            column: 1,
            ch: input.chars().next(),
            depth: 0,
            options,
        }
    }

    /// Decodes the document: strips an `Identifier =` prefix when configured,
    /// then decodes exactly one value. Trailing input is left unread.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] on any grammar violation.
    pub fn decode_document(&mut self) -> Result<Value> {
        if self.options.strip_assignment {
            self.skip_assignment_prefix();
        }
        self.decode()
    }

    /// Decodes one value starting at the lookahead character.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] with `"input is empty"` when the input is
    /// exhausted before a value starts, or the error of the construct being
    /// parsed.
    pub fn decode(&mut self) -> Result<Value> {
        self.skip_whitespace();

        match self.peek() {
            None => Err(self.error("input is empty")),
            Some('{') => self.parse_table(),
            Some('\'' | '"' | '[') => self.parse_string().map(Value::String),
            Some(ch) if ch == '-' || ch.is_ascii_digit() => self.parse_number(),
            Some(_) => self.parse_word(),
        }
    }

    /// Decodes a sequence of `Name = value` statements until input runs out.
    ///
    /// Line comments and optional `;` separators between statements are
    /// skipped. Statements whose value is `nil` are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if a statement does not start with an
    /// identifier, lacks its `=`, or its value fails to decode.
    pub fn decode_assignments(&mut self) -> Result<LuaTable> {
        let mut assignments = LuaTable::new();

        loop {
            self.skip_whitespace_and_comments();
            if self.peek().is_none() {
                break;
            }

            let (line, col) = (self.line, self.column);
            let name = match self.parse_word()? {
                Value::String(name) => name,
                other => {
                    return Err(Error::parse_with_fragment(
                        line,
                        col,
                        "expected identifier",
                        other.type_name(),
                    ))
                }
            };

            self.skip_whitespace();
            if self.peek() != Some('=') {
                return Err(self.error_near("expected '='", &name));
            }
            self.bump();

            let value = self.decode()?;
            if !value.is_nil() {
                assignments.insert(Value::String(name), value);
            }

            self.skip_whitespace();
            if self.peek() == Some(';') {
                self.bump();
            }
        }

        Ok(assignments)
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.ch
    }

    fn bump(&mut self) -> Option<char> {
        let current = self.ch?;
        self.position += current.len_utf8();
        if current == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.ch = self.input[self.position..].chars().next();
        Some(current)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().map_or(false, char::is_whitespace) {
            self.bump();
        }
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            self.skip_whitespace();
            if self.input[self.position..].starts_with("--") {
                self.skip_line_comment();
            } else {
                break;
            }
        }
    }

    /// Consumes up to, not including, the next newline.
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            self.bump();
        }
    }

    fn skip_assignment_prefix(&mut self) {
        self.skip_whitespace();

        let input = self.input;
        let rest = &input[self.position..];
        if !rest.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
            return;
        }

        let name_len = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(rest.len());
        let after = rest[name_len..].trim_start();
        if after.starts_with('=') && !after.starts_with("==") {
            let consumed = rest.len() - after.len() + 1;
            for _ in rest[..consumed].chars() {
                self.bump();
            }
        }
    }

    fn error(&self, msg: &str) -> Error {
        Error::parse(self.line, self.column, msg)
    }

    fn error_near(&self, msg: &str, fragment: &str) -> Error {
        Error::parse_with_fragment(self.line, self.column, msg, fragment)
    }

    fn parse_table(&mut self) -> Result<Value> {
        if self.depth >= self.options.max_depth {
            return Err(self.error("maximum nesting depth exceeded"));
        }
        self.depth += 1;
        self.bump(); // consume '{'

        let mut table = LuaTable::new();
        let mut idx: i64 = 0;

        loop {
            self.skip_whitespace();

            match self.peek() {
                Some('}') => {
                    self.bump();
                    break;
                }
                Some(',') => {
                    self.bump();
                    continue;
                }
                _ => {}
            }

            // `[[` opens a long string; a single `[` opens a bracket key.
            let mut is_long_string = false;
            if self.peek() == Some('[') {
                self.bump();
                if self.peek() == Some('[') {
                    is_long_string = true;
                }
            }

            let item = self.decode()?;

            self.skip_whitespace();
            if self.peek() == Some(']') {
                self.bump();
                self.skip_whitespace();
            }

            match self.peek() {
                Some('=') => {
                    self.bump();
                    if is_long_string {
                        return Err(self.error("malformed key"));
                    }
                    if item.is_nil() {
                        return Err(self.error("table keys cannot be nil"));
                    }

                    let value = self.decode()?;
                    if !value.is_nil() && !shadowed_by_position(&item, idx) {
                        table.insert(item, value);
                    }
                    continue;
                }
                Some(',') => {
                    self.bump();
                }
                _ => {}
            }

            if !item.is_nil() {
                idx += 1;
                table.insert(Value::Int(idx), item);
            }
        }

        self.depth -= 1;

        let entries = table.len();
        let value = table.into_value();
        trace!(entries, coerced = value.is_array(), "closed table");
        Ok(value)
    }

    fn parse_string(&mut self) -> Result<String> {
        let (line, col) = (self.line, self.column);
        let result = match self.bump() {
            Some('[') => self.parse_long_string(),
            Some(quote) => self.parse_quoted_string(quote),
            None => return Err(self.error("input is empty")),
        };
        result.ok_or_else(|| Error::parse(line, col, "unterminated string"))
    }

    /// Only an escaped terminator is unescaped; any other backslash pair is
    /// kept verbatim.
    fn parse_quoted_string(&mut self, quote: char) -> Option<String> {
        let mut result = String::new();

        while let Some(ch) = self.bump() {
            match ch {
                c if c == quote => return Some(result),
                '\\' => match self.bump()? {
                    c if c == quote => result.push(c),
                    other => {
                        result.push('\\');
                        result.push(other);
                    }
                },
                other => result.push(other),
            }
        }

        None
    }

    /// Any run of `[` opens and any run of `]` closes; levels are not matched.
    fn parse_long_string(&mut self) -> Option<String> {
        while self.peek() == Some('[') {
            self.bump();
        }

        let start = self.position;
        while let Some(ch) = self.peek() {
            if ch == ']' {
                let content = self.input[start..self.position].to_string();
                while self.peek() == Some(']') {
                    self.bump();
                }
                return Some(content);
            }
            self.bump();
        }

        None
    }

    fn parse_number(&mut self) -> Result<Value> {
        let (line, col) = (self.line, self.column);
        let start = self.position;

        if self.peek() == Some('-') {
            self.bump();
            if self.peek() == Some('-') {
                self.skip_line_comment();
                return Ok(Value::Nil);
            }
        }

        if !self.peek().map_or(false, |c| c.is_ascii_digit()) {
            let end = self.position + self.peek().map_or(0, char::len_utf8);
            return Err(Error::parse_with_fragment(
                line,
                col,
                "malformed number",
                &self.input[start..end],
            ));
        }

        self.eat_digits();

        // Only a bare `0` prefix opens a hex literal; `-0x..` stops after `-0`.
        if &self.input[start..self.position] == "0" && matches!(self.peek(), Some('x' | 'X')) {
            self.bump();
            let hex_start = self.position;
            while self.peek().map_or(false, |c| c.is_ascii_hexdigit()) {
                self.bump();
            }

            // Literals past i64::MAX wrap into the negative range.
            return u64::from_str_radix(&self.input[hex_start..self.position], 16)
                .map(|n| Value::Int(n as i64))
                .map_err(|_| {
                    Error::parse_with_fragment(
                        line,
                        col,
                        "malformed number",
                        &self.input[start..self.position],
                    )
                });
        }

        if self.peek() == Some('.') {
            self.bump();
            self.eat_digits();
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            self.bump();
            if matches!(self.peek(), Some('+' | '-')) {
                self.bump();
            }
            self.eat_digits();
        }

        let text = &self.input[start..self.position];
        text.parse::<i64>()
            .map(Value::Int)
            .or_else(|_| text.parse::<f64>().map(Value::Float))
            .map_err(|_| Error::parse_with_fragment(line, col, "malformed number", text))
    }

    fn eat_digits(&mut self) {
        while self.peek().map_or(false, |c| c.is_ascii_digit()) {
            self.bump();
        }
    }

    fn parse_word(&mut self) -> Result<Value> {
        let start = self.position;

        if self
            .peek()
            .map_or(false, |c| c.is_ascii_alphabetic() || c == '_')
        {
            while self
                .peek()
                .map_or(false, |c| c.is_ascii_alphanumeric() || c == '_')
            {
                self.bump();
            }
        }

        match &self.input[start..self.position] {
            "" => {
                let fragment = self.peek().map(String::from).unwrap_or_default();
                Err(self.error_near("unexpected character", &fragment))
            }
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            "nil" => Ok(Value::Nil),
            word => Ok(Value::String(word.to_string())),
        }
    }
}

/// An explicit integer key at or below the running position is dropped.
fn shadowed_by_position(key: &Value, idx: i64) -> bool {
    matches!(key, Value::Int(n) if *n <= idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(input: &str) -> Result<Value> {
        Decoder::new(input).decode()
    }

    #[test]
    fn test_error_position_tracks_lines() {
        let err = decode("{\n  1,\n  -x\n}").unwrap_err();
        assert_eq!(err.message(), "malformed number");
        assert_eq!(err.position(), Some((3, 3)));
        assert_eq!(err.fragment(), Some("-x"));
    }

    #[test]
    fn test_unterminated_string_reports_start() {
        let err = decode("{ a = 'abc").unwrap_err();
        assert_eq!(err.message(), "unterminated string");
        assert_eq!(err.position(), Some((1, 7)));
    }

    #[test]
    fn test_max_depth() {
        let mut decoder =
            Decoder::with_options("{{{1}}}", DecodeOptions::new().with_max_depth(2));
        let err = decoder.decode().unwrap_err();
        assert_eq!(err.message(), "maximum nesting depth exceeded");

        let mut decoder =
            Decoder::with_options("{{{1}}}", DecodeOptions::new().with_max_depth(3));
        assert!(decoder.decode().is_ok());
    }

    #[test]
    fn test_unexpected_character_terminates() {
        let err = decode("{ 1, @ }").unwrap_err();
        assert_eq!(err.message(), "unexpected character");
        assert_eq!(err.fragment(), Some("@"));
    }

    #[test]
    fn test_assignment_prefix_only_when_configured() {
        let options = DecodeOptions::saved_variables();
        let mut decoder = Decoder::with_options("  DB = { 1 }", options);
        assert_eq!(decoder.decode_document().unwrap(), Value::Array(vec![Value::Int(1)]));

        let mut decoder = Decoder::new("DB = { 1 }");
        assert_eq!(decoder.decode_document().unwrap(), Value::from("DB"));
    }

    #[test]
    fn test_assignment_prefix_ignores_comparison() {
        let options = DecodeOptions::saved_variables();
        let mut decoder = Decoder::with_options("x == 1", options);
        assert_eq!(decoder.decode_document().unwrap(), Value::from("x"));
    }

    #[test]
    fn test_shadowed_by_position() {
        assert!(shadowed_by_position(&Value::Int(2), 2));
        assert!(shadowed_by_position(&Value::Int(-1), 0));
        assert!(!shadowed_by_position(&Value::Int(3), 2));
        assert!(!shadowed_by_position(&Value::Bool(true), 5));
        assert!(!shadowed_by_position(&Value::from("1"), 5));
    }

    #[test]
    fn test_minus_zero_does_not_open_hex() {
        assert_eq!(decode("-0x10").unwrap(), Value::Int(0));
        assert_eq!(
            decode("{-0x10}").unwrap(),
            Value::Array(vec![Value::Int(0), Value::from("x10")])
        );
    }

    #[test]
    fn test_hex_wraps_past_i64() {
        assert_eq!(decode("0xFFFFFFFFFFFFFFFF").unwrap(), Value::Int(-1));
        assert_eq!(decode("0x8000000000000000").unwrap(), Value::Int(i64::MIN));
        assert_eq!(
            decode("0x10000000000000000").unwrap_err().message(),
            "malformed number"
        );
    }

    #[test]
    fn test_decode_assignments() {
        let text = "-- header\nFirstDB = { 1, 2 }\nSecondDB = nil;\nThird = 'x'";
        let assignments = Decoder::new(text).decode_assignments().unwrap();
        assert_eq!(assignments.len(), 2);
        assert_eq!(
            assignments.get(&Value::from("FirstDB")),
            Some(&Value::Array(vec![Value::Int(1), Value::Int(2)]))
        );
        assert_eq!(assignments.get(&Value::from("Third")), Some(&Value::from("x")));
    }

    #[test]
    fn test_decode_assignments_requires_equals() {
        let err = Decoder::new("Name { }").decode_assignments().unwrap_err();
        assert_eq!(err.message(), "expected '='");
        assert_eq!(err.fragment(), Some("Name"));
    }
}
