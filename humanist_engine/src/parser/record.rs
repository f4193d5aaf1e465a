use std::collections::HashMap;

use crate::constant::CATCH_ALL;

/// A single field of a parsed [`Record`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Set by a flag option.
    Bool(bool),
    /// A single argument, a literal run, or a joined variadic run.
    Text(String),
    /// A fixed group, a variadic run, or the promotion of a repeated option.
    List(Vec<String>),
}

impl Value {
    /// The flag value, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The text value, if this is a `Text`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(t) => Some(t.as_str()),
            _ => None,
        }
    }

    /// The items, if this is a `List`.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    fn into_items(self) -> Vec<String> {
        match self {
            Value::Bool(b) => vec![b.to_string()],
            Value::Text(t) => vec![t],
            Value::List(items) => items,
        }
    }

    // Repeated keys: lists absorb, scalars promote to a list, flags stay put.
    fn merge(&mut self, other: Value) {
        match self {
            Value::Bool(_) => {
                // Only reachable with a non-bool when a custom parser re-types a flag's key.
                if !matches!(other, Value::Bool(_)) {
                    *self = other;
                }
            }
            Value::List(items) => items.extend(other.into_items()),
            Value::Text(_) => {
                let previous = std::mem::replace(self, Value::List(Vec::default()));
                let mut items = previous.into_items();
                items.extend(other.into_items());
                *self = Value::List(items);
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<Vec<String>> for Value {
    fn from(value: Vec<String>) -> Self {
        Value::List(value)
    }
}

impl From<Vec<&str>> for Value {
    fn from(value: Vec<&str>) -> Self {
        Value::List(value.into_iter().map(str::to_string).collect())
    }
}

/// The fields produced by one parse.
///
/// Always holds the [`CATCH_ALL`] key (a `List`), plus one key per option that occurred.
/// Option keys use the name declared in the option table, regardless of how the token was cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    values: HashMap<String, Value>,
}

impl Default for Record {
    fn default() -> Self {
        Self::new()
    }
}

impl Record {
    /// An empty record: only the catch-all key, with no tokens.
    pub fn new() -> Self {
        Self {
            values: HashMap::from([(CATCH_ALL.to_string(), Value::List(Vec::default()))]),
        }
    }

    /// Assign `value` to `key`, merging with any previous value.
    ///
    /// * An absent key stores `value` as-is.
    /// * A `List` is extended by `value` (or by its items, if `value` is a `List`).
    /// * A `Text` is promoted to a `List` of the previous text followed by `value`.
    /// * A `Bool` stays `true` when assigned another `Bool`.
    pub fn assign(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();

        match self.values.get_mut(&key) {
            Some(current) => current.merge(value),
            None => {
                self.values.insert(key, value);
            }
        }
    }

    /// Overwrite `key` with `value`, discarding any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    /// Append a token to the catch-all list.
    pub fn push_rest(&mut self, token: impl Into<String>) {
        match self.values.get_mut(CATCH_ALL) {
            Some(Value::List(items)) => items.push(token.into()),
            _ => {
                self.values
                    .insert(CATCH_ALL.to_string(), Value::List(vec![token.into()]));
            }
        }
    }

    /// The value under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Whether `key` is present.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Whether the flag `key` was set.
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.values.get(key), Some(Value::Bool(true)))
    }

    /// The `Text` under `key`.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    /// The `List` under `key`.
    pub fn list(&self, key: &str) -> Option<&[String]> {
        self.values.get(key).and_then(Value::as_list)
    }

    /// The tokens nothing else claimed, in input order.
    pub fn rest(&self) -> &[String] {
        self.list(CATCH_ALL).unwrap_or(&[])
    }

    /// The number of keys, including the catch-all.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for records built by [`Record::new`], which hold the catch-all key.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the keys and values, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Consume the record into its underlying map.
    pub fn into_map(self) -> HashMap<String, Value> {
        self.values
    }
}
