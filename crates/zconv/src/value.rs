//! Format-neutral document model shared by every codec

mod de;
mod ser;

use indexmap::map::{IntoIter, Iter, Keys, Values};
use indexmap::IndexMap;
use std::ops::Index;

/// Key that wraps non-mapping documents
pub const DATA_KEY: &str = "data";

/// A parsed JSON, YAML or XML document
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Explicitly empty content
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    /// Ordered sequence
    Array(Array),
    /// Insertion-ordered mapping with unique keys
    Object(Object),
}

impl Value {
    /// Returns true if the value is `Null`
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true if the value is an array
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Returns true if the value is an object
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// True for null, booleans, numbers and strings
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Self::Array(_) | Self::Object(_))
    }

    /// Returns the boolean, if this is a `Bool`
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number, if this is a `Number`
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string slice, if this is a `String`
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the array, if this is an `Array`
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns the object, if this is an `Object`
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Mutable access to the array, if this is an `Array`
    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Mutable access to the object, if this is an `Object`
    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Returns the mapping itself, or wraps any other value as `{"data": value}`
    pub fn into_document(self) -> Object {
        match self {
            Self::Object(obj) => obj,
            other => {
                let mut obj = Object::with_capacity(1);
                obj.insert(DATA_KEY, other);
                obj
            }
        }
    }

    /// Counts mapping entries plus every scalar below this value.
    pub fn node_count(&self) -> usize {
        match self {
            Self::Object(obj) => obj.len() + obj.values().map(Self::node_count).sum::<usize>(),
            Self::Array(arr) => arr.iter().map(Self::node_count).sum(),
            _ => 1,
        }
    }

    /// Scalar text used for XML text and attribute content.
    ///
    /// Returns `None` for arrays and objects.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::Null => Some(String::new()),
            Self::Bool(b) => Some(b.to_string()),
            Self::Number(n) => Some(number_text(*n)),
            Self::String(s) => Some(s.clone()),
            Self::Array(_) | Self::Object(_) => None,
        }
    }
}

/// Largest integer magnitude an `f64` holds exactly
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Integral value of `n` when it round-trips through `i64` exactly
#[allow(clippy::as_conversions, clippy::cast_possible_truncation)]
pub(crate) fn exact_integer(n: f64) -> Option<i64> {
    if n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_EXACT_INT {
        Some(n as i64)
    } else {
        None
    }
}

fn number_text(n: f64) -> String {
    match exact_integer(n) {
        Some(int) => int.to_string(),
        None => n.to_string(),
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for Value {
    #[allow(clippy::as_conversions, clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<u64> for Value {
    #[allow(clippy::as_conversions, clippy::cast_precision_loss)]
    fn from(value: u64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Self::Array(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Self::Object(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Self::Array(Array(values))
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(map: IndexMap<String, Value>) -> Self {
        Self::Object(Object(map))
    }
}

/// An insertion-ordered mapping.
///
/// Equality compares key sets and values and ignores order; iteration always
/// follows insertion order so serializers stay deterministic.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object(pub(crate) IndexMap<String, Value>);

impl Object {
    /// Creates an empty object
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Creates an empty object with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self(IndexMap::with_capacity(capacity))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the value stored under `key`
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Mutable access to the value stored under `key`
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    /// Inserts a key-value pair.
    ///
    /// A duplicate key keeps its original position and takes the new value;
    /// the previous value is returned.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Removes a key, keeping the order of the remaining entries
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Returns true if `key` is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Keys in insertion order
    pub fn keys(&self) -> Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Values in insertion order
    pub fn values(&self) -> Values<'_, String, Value> {
        self.0.values()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.0.iter()
    }

    /// First entry in insertion order
    pub fn first(&self) -> Option<(&String, &Value)> {
        self.0.first()
    }
}

impl Index<&str> for Object {
    type Output = Value;

    #[allow(clippy::indexing_slicing)]
    fn index(&self, key: &str) -> &Self::Output {
        &self.0[key]
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<IndexMap<String, Value>> for Object {
    fn from(map: IndexMap<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(IndexMap::from_iter(iter))
    }
}

/// An ordered sequence of values
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Array(pub(crate) Vec<Value>);

impl Array {
    /// Creates an empty array
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Creates an empty array with room for `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no items
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the item at `index`
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    /// Mutable access to the item at `index`
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.0.get_mut(index)
    }

    /// Appends an item
    pub fn push(&mut self, value: impl Into<Value>) {
        self.0.push(value.into());
    }

    /// Items in order
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }
}

impl Index<usize> for Array {
    type Output = Value;

    #[allow(clippy::indexing_slicing)]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<Vec<Value>> for Array {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(Vec::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(entries: &[(&str, Value)]) -> Object {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_scalar_classification() {
        assert!(Value::Null.is_scalar());
        assert!(Value::Bool(true).is_scalar());
        assert!(Value::from("x").is_scalar());
        assert!(!Value::Array(Array::new()).is_scalar());
        assert!(!Value::Object(Object::new()).is_scalar());
    }

    #[test]
    fn test_object_equality_ignores_order() {
        let a = object(&[("x", 1i32.into()), ("y", 2i32.into())]);
        let b = object(&[("y", 2i32.into()), ("x", 1i32.into())]);
        assert_eq!(a, b);

        let keys: Vec<_> = a.keys().collect();
        assert_eq!(keys, vec!["x", "y"]);
    }

    #[test]
    fn test_array_equality_is_ordered() {
        let a: Value = vec![Value::from(1i32), Value::from(2i32)].into();
        let b: Value = vec![Value::from(2i32), Value::from(1i32)].into();
        assert_ne!(a, b);
    }

    #[test]
    fn test_duplicate_insert_keeps_position() {
        let mut obj = Object::new();
        obj.insert("a", 1i32);
        obj.insert("b", 2i32);
        let previous = obj.insert("a", 3i32);

        assert_eq!(previous, Some(Value::Number(1.0)));
        assert_eq!(obj.first(), Some((&"a".to_string(), &Value::Number(3.0))));
        assert_eq!(obj.len(), 2);
    }

    #[test]
    fn test_mutable_access() {
        let mut value = Value::Object(object(&[("list", Value::from(vec![Value::Null]))]));
        if let Some(list) = value
            .as_object_mut()
            .and_then(|obj| obj.get_mut("list"))
            .and_then(Value::as_array_mut)
        {
            list.push("x");
        }
        let len = value
            .as_object()
            .and_then(|obj| obj.get("list"))
            .and_then(Value::as_array)
            .map(Array::len);
        assert_eq!(len, Some(2));
        assert!(value.as_array_mut().is_none());
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut obj = object(&[("a", Value::Null), ("b", Value::Null), ("c", Value::Null)]);
        obj.remove("a");
        let keys: Vec<_> = obj.keys().collect();
        assert_eq!(keys, vec!["b", "c"]);
    }

    #[test]
    fn test_into_document_wraps_non_mappings() {
        let doc = Value::from(vec![Value::from(1i32)]).into_document();
        assert_eq!(doc.len(), 1);
        assert!(doc.get(DATA_KEY).is_some_and(Value::is_array));

        let mapping = object(&[("k", "v".into())]);
        assert_eq!(Value::Object(mapping.clone()).into_document(), mapping);
    }

    #[test]
    fn test_node_count() {
        let value = Value::Object(object(&[
            ("a", 1i32.into()),
            ("b", vec![Value::Null, Value::from("x")].into()),
        ]));
        // two entries + scalar a + two array items
        assert_eq!(value.node_count(), 5);
        assert_eq!(Value::Null.node_count(), 1);
    }

    #[test]
    fn test_to_text() {
        assert_eq!(Value::Null.to_text(), Some(String::new()));
        assert_eq!(Value::Number(5.0).to_text(), Some("5".to_string()));
        assert_eq!(Value::Number(-2.5).to_text(), Some("-2.5".to_string()));
        assert_eq!(Value::Bool(false).to_text(), Some("false".to_string()));
        assert_eq!(Value::Array(Array::new()).to_text(), None);
    }

    #[test]
    fn test_exact_integer_bounds() {
        assert_eq!(exact_integer(42.0), Some(42));
        assert_eq!(exact_integer(0.5), None);
        assert_eq!(exact_integer(f64::NAN), None);
        assert_eq!(exact_integer(1e300), None);
    }
}
