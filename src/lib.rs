//! # serde_luatable
//!
//! A decoder for Lua table literals as game clients write them into saved-settings
//! files, with a Serde bridge for pulling typed data back out.
//!
//! ## What does it read?
//!
//! Settings files hold nested table constructors built from `{ ... }`, quoted and
//! `[[bracketed]]` strings, decimal/hex/float numbers, `true`/`false`/`nil`,
//! bare-word keys and `--` line comments:
//!
//! ```text
//! MyAddonDB = {
//!     ["profileKeys"] = {
//!         ["Thrall - Durotan"] = "Default",
//!     },
//!     version = 12, -- bumped on schema change
//!     minimap = { hide = false, angle = 0x5A },
//! }
//! ```
//!
//! ## Key Features
//!
//! - **Single pass**: one character of lookahead, no backtracking, no grammar library
//! - **Array coercion**: tables keyed `1..=N` in order come back as [`Value::Array`]
//! - **Distinct booleans**: `true` is never mistaken for the integer `1`
//! - **Serde bridge**: [`from_str`] deserializes straight into your own types
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_luatable::{load, Value};
//!
//! let value = load(r#"{ "a", "b", enabled = true }"#).unwrap();
//! assert_eq!(value.get(1), Some(&Value::from("a")));
//! assert_eq!(value.get("enabled"), Some(&Value::Bool(true)));
//! ```
//!
//! ### Whole settings files
//!
//! ```rust
//! use serde_luatable::{load_assignments, Value};
//!
//! let vars = load_assignments("FooDB = { 1, 2 }\nBarDB = 'x'\n").unwrap();
//! assert_eq!(vars.get(&Value::from("BarDB")), Some(&Value::from("x")));
//! ```
//!
//! ### Typed access
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_luatable::from_str;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Minimap { hide: bool, angle: i64 }
//!
//! let minimap: Minimap = from_str("{ hide = false, angle = 0x5A }").unwrap();
//! assert_eq!(minimap, Minimap { hide: false, angle: 90 });
//! ```
//!
//! ## Logging
//!
//! Decoding emits [`tracing`] events at `debug` and `trace` level. No subscriber
//! is installed by this crate.
//!
//! ## Grammar
//!
//! See the [`syntax`] module for the accepted notation and its quirks.

pub mod de;
pub mod decoder;
pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod syntax;
pub mod value;

pub use de::ValueDeserializer;
pub use decoder::Decoder;
pub use error::{Error, Result};
pub use map::LuaTable;
pub use options::DecodeOptions;
pub use value::Value;

use serde::de::DeserializeOwned;
use std::io;
use tracing::debug;

/// Decodes one table literal (or any single value) from `text`.
///
/// # Examples
///
/// ```rust
/// use serde_luatable::{load, Value};
///
/// assert_eq!(load("0x1F").unwrap(), Value::Int(31));
/// assert_eq!(load("{ 1, 2, [1] = 99 }").unwrap(), Value::Array(vec![Value::Int(1), Value::Int(2)]));
/// assert!(load("").is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`] if `text` is not a well-formed literal.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn load(text: &str) -> Result<Value> {
    load_with_options(text, &DecodeOptions::default())
}

/// Decodes `text` with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_luatable::{load_with_options, DecodeOptions, Value};
///
/// let value = load_with_options("Saved = { 'x' }", &DecodeOptions::saved_variables()).unwrap();
/// assert_eq!(value, Value::Array(vec![Value::from("x")]));
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`] if `text` is not a well-formed literal or nests
/// deeper than `options.max_depth`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn load_with_options(text: &str, options: &DecodeOptions) -> Result<Value> {
    debug!(len = text.len(), "decoding table literal");
    Decoder::with_options(text, options.clone())
        .decode_document()
        .map_err(|err| {
            debug!(error = %err, "decode failed");
            err
        })
}

/// Decodes a file of `Name = value` statements into a table keyed by name.
///
/// # Errors
///
/// Returns [`Error::Parse`] if any statement is malformed.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn load_assignments(text: &str) -> Result<LuaTable> {
    debug!(len = text.len(), "decoding assignment file");
    Decoder::new(text).decode_assignments().map_err(|err| {
        debug!(error = %err, "decode failed");
        err
    })
}

/// Deserializes a `T` from an already decoded [`Value`].
///
/// # Errors
///
/// Returns [`Error::Custom`] if the value does not fit `T`.
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(ValueDeserializer::new(value))
}

/// Decodes `text` and deserializes the result into a `T`.
///
/// # Examples
///
/// ```rust
/// use serde_luatable::from_str;
///
/// let nums: Vec<i32> = from_str("{ 1, 2, 3 }").unwrap();
/// assert_eq!(nums, vec![1, 2, 3]);
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`] for malformed input, or [`Error::Custom`] if the
/// decoded value does not fit `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(text: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_str_with_options(text, &DecodeOptions::default())
}

/// Like [`from_str`], with custom decode options.
///
/// # Errors
///
/// See [`from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options<T>(text: &str, options: &DecodeOptions) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(load_with_options(text, options)?)
}

/// Deserializes a `T` from UTF-8 bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, are not a well-formed
/// literal, or do not fit `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}

/// Deserializes a `T` from a reader, typically an open settings file.
///
/// # Examples
///
/// ```rust
/// use serde_luatable::from_reader;
/// use std::io::Cursor;
///
/// let file = Cursor::new(b"{ 'a', 'b' }");
/// let names: Vec<String> = from_reader(file).unwrap();
/// assert_eq!(names, vec!["a", "b"]);
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, otherwise as [`from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}
