//! Accepted Notation
//!
//! This module documents the table-literal dialect the [`Decoder`](crate::Decoder)
//! reads. It is the subset of Lua constructor syntax that game clients emit when
//! they write saved settings to disk, plus the quirks of reading it in a single
//! forward pass.
//!
//! # Values
//!
//! | Form | Example | Decodes to |
//! |------|---------|------------|
//! | Table constructor | `{ ... }` | `Array` or `Table` |
//! | Quoted string | `"text"`, `'text'` | `String` |
//! | Long string | `[[text]]` | `String` |
//! | Integer | `42`, `-7`, `0x1F` | `Int` |
//! | Float | `3.14`, `1e3`, `-2.5E-3` | `Float` |
//! | Keywords | `true`, `false`, `nil` | `Bool`, `Nil` |
//! | Bare word | `foo_bar` | `String` |
//! | Line comment | `-- text` | nothing |
//!
//! # Tables
//!
//! Entries are separated by `,`. Extra or trailing separators are ignored.
//! Three entry forms are accepted:
//!
//! ```text
//! { "positional", [1] = "bracket key", name = "bare key" }
//! ```
//!
//! **Rules**:
//! - Positional entries are numbered `1, 2, 3, ...` in order of appearance
//! - An explicit integer key at or below the current positional number is
//!   dropped; it never overwrites a positional entry
//! - Entries whose value is `nil` are dropped
//! - A `nil` key is an error
//! - A later explicit key overwrites an earlier one, keeping the earlier position
//!
//! ```rust
//! use serde_luatable::{load, lua};
//!
//! assert_eq!(load("{ 1, 2, [1] = 99 }").unwrap(), lua!([1, 2]));
//! assert_eq!(load("{ a = 1, b = nil, a = 3 }").unwrap(), lua!({ "a" => 3 }));
//! assert!(load("{ [nil] = 1 }").is_err());
//! ```
//!
//! ## Array coercion
//!
//! A table comes back as an `Array` when it is non-empty and its keys, read in
//! the order they were first written, are exactly `1, 2, 3, ..., N`. Otherwise it
//! stays a `Table`. `true`/`false` keys are never positions.
//!
//! ```rust
//! use serde_luatable::{load, Value};
//!
//! assert!(load("{ [1] = 'a', [2] = 'b' }").unwrap().is_array());
//! assert!(load("{ [2] = 'b', [1] = 'a' }").unwrap().is_table());
//! assert!(load("{ [true] = 'a', [2] = 'b' }").unwrap().is_table());
//! assert!(load("{}").unwrap().is_table());
//! ```
//!
//! # Strings
//!
//! Quoted strings only unescape the quote that delimits them. Every other
//! backslash pair is kept as written, so `\n` stays two characters:
//!
//! ```rust
//! use serde_luatable::{load, Value};
//!
//! assert_eq!(load(r#""a\"b""#).unwrap(), Value::from("a\"b"));
//! assert_eq!(load(r#""a\nb""#).unwrap(), Value::from("a\\nb"));
//! assert_eq!(load(r#"'it\'s'"#).unwrap(), Value::from("it's"));
//! ```
//!
//! Long strings open on any run of `[` and close on the first `]`, swallowing
//! the rest of the closing run. Levels (`[==[ ... ]==]`) are not matched and
//! there is no escape processing:
//!
//! ```rust
//! use serde_luatable::{load, Value};
//!
//! assert_eq!(load("[[hello]]").unwrap(), Value::from("hello"));
//! assert_eq!(load("[[[nested[[text]]]").unwrap(), Value::from("nested[[text"));
//! ```
//!
//! A long string cannot be a key: `{ [[k]] = 1 }` is an error.
//!
//! # Numbers
//!
//! An optional `-`, then digits. A literal that starts with exactly `0` and
//! continues with `x`/`X` reads hex digits; with a leading `-` the literal ends
//! after `-0`. Otherwise an optional `.fraction` and `e`/`E` exponent with
//! optional sign follow. Text that parses as an integer is an `Int`, anything
//! else a `Float`. Decimal integers beyond the 64-bit range fall back to
//! `Float`; hex literals up to 16 digits wrap into the signed range.
//!
//! ```rust
//! use serde_luatable::{load, Value};
//!
//! assert_eq!(load("0x1F").unwrap(), Value::Int(31));
//! assert_eq!(load("0xFFFFFFFFFFFFFFFF").unwrap(), Value::Int(-1));
//! assert_eq!(load("-0x10").unwrap(), Value::Int(0));
//! assert_eq!(load("3.14").unwrap(), Value::Float(3.14));
//! assert_eq!(load("1e3").unwrap(), Value::Float(1000.0));
//! assert!(load("-x").is_err());
//! ```
//!
//! # Comments
//!
//! `--` starts a comment running to the end of the line. It is recognised
//! wherever a value may start and contributes nothing:
//!
//! ```rust
//! use serde_luatable::{load, lua};
//!
//! assert_eq!(load("{1, 2, -- comment\n 3}").unwrap(), lua!([1, 2, 3]));
//! ```
//!
//! # Errors
//!
//! | Message | Cause |
//! |---------|-------|
//! | `input is empty` | Input ended where a value was required (includes unclosed `{`) |
//! | `table keys cannot be nil` | `[nil] = v` or `nil = v` |
//! | `malformed key` | A long string followed by `=` |
//! | `malformed number` | `-` not followed by a digit or `-`; incomplete exponent or hex |
//! | `unterminated string` | Input ended inside a string |
//! | `unexpected character` | A character no rule accepts |
//! | `maximum nesting depth exceeded` | Tables nested beyond [`DecodeOptions::max_depth`](crate::DecodeOptions) |
//! | `expected identifier` | An assignment statement starting with `true`, `false` or `nil` |
//! | `expected '='` | An assignment statement missing its `=` |
//!
//! # Limitations
//!
//! - **Long brackets**: level markers are not matched
//! - **Escapes**: only the delimiting quote is unescaped
//! - **Keys**: tables cannot be keys
//! - **Comments**: only `--` line comments; `--[[ ]]` block comments run to end of line
//! - **Encoding**: this crate reads only; it never writes the notation back

// This module contains only documentation; no implementation code
