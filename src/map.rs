//! Storage for object members.
//!
//! Every `{...}` in a document becomes an [`ObjectMap`]. The parser inserts members in
//! the order it reads them, so the map records two facts about a document:
//!
//! - the position of each key is where that key first appeared
//! - the value of each key is the one written last
//!
//! A document such as `{"z": 1, "a": 2, "z": 3}` therefore yields two members, `z` then
//! `a`, with `z` holding `3`. Nothing about the earlier `z` value survives.
//!
//! ```rust
//! use sjson::{parse, Value};
//!
//! let value = parse(r#"{"z": 1, "a": 2, "z": 3}"#).unwrap();
//! let members: Vec<(&str, &Value)> = value
//!     .as_object()
//!     .unwrap()
//!     .iter()
//!     .map(|(k, v)| (k.as_str(), v))
//!     .collect();
//! assert_eq!(members, vec![("z", &Value::Integer(3)), ("a", &Value::Integer(2))]);
//! ```

use crate::Value;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Members of an object value, keyed by string.
///
/// Keys are unique. Re-inserting a key overwrites its value without moving it, which
/// is the duplicate-key rule the parser relies on. Conversions to and from `HashMap`
/// are provided for callers that do not care about member order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectMap(IndexMap<String, Value>);

impl ObjectMap {
    /// Creates an empty `ObjectMap`.
    #[must_use]
    pub fn new() -> Self {
        ObjectMap(IndexMap::new())
    }

    /// Creates an empty `ObjectMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ObjectMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the value is replaced and the old value
    /// is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sjson::{ObjectMap, Value};
    ///
    /// let mut map = ObjectMap::new();
    /// assert!(map.insert("key".to_string(), Value::from(42)).is_none());
    /// assert_eq!(map.insert("key".to_string(), Value::from(43)), Some(Value::from(42)));
    /// ```
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl From<HashMap<String, Value>> for ObjectMap {
    fn from(map: HashMap<String, Value>) -> Self {
        ObjectMap(map.into_iter().collect())
    }
}

impl From<ObjectMap> for HashMap<String, Value> {
    fn from(map: ObjectMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for ObjectMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ObjectMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for ObjectMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        ObjectMap(IndexMap::from_iter(iter))
    }
}
