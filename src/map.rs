//! Ordered table type for decoded Lua tables.
//!
//! This module provides [`LuaTable`], a wrapper around [`IndexMap`] keyed by
//! [`Value`]. Entries stay in encounter order, which the decoder relies on when
//! it decides whether a table literal is really a sequence.
//!
//! ## Examples
//!
//! ```rust
//! use serde_luatable::{LuaTable, Value};
//!
//! let mut table = LuaTable::new();
//! table.insert(Value::from("name"), Value::from("Alice"));
//! table.insert(Value::from(2), Value::from(30));
//!
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.get(&Value::from("name")).and_then(|v| v.as_str()), Some("Alice"));
//! ```

use crate::Value;
use indexmap::IndexMap;
use std::hash::{Hash, Hasher};

/// An insertion-ordered map of [`Value`] keys to [`Value`]s.
///
/// Equality is order-sensitive: two tables are equal when they hold the same
/// entries in the same order.
///
/// # Examples
///
/// ```rust
/// use serde_luatable::{LuaTable, Value};
///
/// let mut table = LuaTable::new();
/// table.insert(Value::from("first"), Value::from(1));
/// table.insert(Value::from("second"), Value::from(2));
///
/// let keys: Vec<_> = table.keys().filter_map(|k| k.as_str()).collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LuaTable(IndexMap<Value, Value>);

impl LuaTable {
    #[must_use]
    pub fn new() -> Self {
        LuaTable(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        LuaTable(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the table.
    ///
    /// An existing key keeps its position and has its value replaced; the old
    /// value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_luatable::{LuaTable, Value};
    ///
    /// let mut table = LuaTable::new();
    /// assert!(table.insert(Value::from("key"), Value::from(42)).is_none());
    /// assert!(table.insert(Value::from("key"), Value::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &Value) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the table, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, Value, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the table, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, Value, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Value, Value> {
        self.0.iter()
    }

    /// Returns `true` if the keys, read in insertion order, are exactly
    /// `1, 2, 3, ..., N` and the table is non-empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_luatable::{LuaTable, Value};
    ///
    /// let table: LuaTable = vec![
    ///     (Value::from(1), Value::from("a")),
    ///     (Value::from(2), Value::from("b")),
    /// ]
    /// .into_iter()
    /// .collect();
    /// assert!(table.is_sequence());
    ///
    /// let shuffled: LuaTable = vec![
    ///     (Value::from(2), Value::from("b")),
    ///     (Value::from(1), Value::from("a")),
    /// ]
    /// .into_iter()
    /// .collect();
    /// assert!(!shuffled.is_sequence());
    /// ```
    #[must_use]
    pub fn is_sequence(&self) -> bool {
        if self.0.is_empty() {
            return false;
        }

        // Booleans are never sequence positions, checked ahead of the run.
        if self.0.keys().take(2).any(Value::is_bool) {
            return false;
        }

        self.0.keys().enumerate().all(|(i, key)| match key {
            Value::Int(n) => i64::try_from(i + 1).map_or(false, |pos| *n == pos),
            _ => false,
        })
    }

    /// Converts the table into the value the decoder exposes: an
    /// [`Value::Array`] when [`is_sequence`](Self::is_sequence) holds, a
    /// [`Value::Table`] otherwise.
    #[must_use]
    pub fn into_value(self) -> Value {
        if self.is_sequence() {
            Value::Array(self.0.into_values().collect())
        } else {
            Value::Table(self)
        }
    }
}

impl PartialEq for LuaTable {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().eq(other.0.iter())
    }
}

impl Eq for LuaTable {}

impl Hash for LuaTable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.0.len());
        for (key, value) in &self.0 {
            key.hash(state);
            value.hash(state);
        }
    }
}

impl IntoIterator for LuaTable {
    type Item = (Value, Value);
    type IntoIter = indexmap::map::IntoIter<Value, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a LuaTable {
    type Item = (&'a Value, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Value, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(Value, Value)> for LuaTable {
    fn from_iter<T: IntoIterator<Item = (Value, Value)>>(iter: T) -> Self {
        LuaTable(IndexMap::from_iter(iter))
    }
}
