//! Named objects: ordered, uniquely keyed attribute maps with an optional name.
//!
//! Attributes are stored as `Vec<(String, Value)>` in first-insertion order.
//! Overwriting a key keeps its slot; lookups are linear.
//!
//! # Typed getters
//!
//! Every typed getter comes in two forms. The strict form (`get_int`) fails
//! with [`MessageError::MissingAttribute`] when the attribute is absent or
//! holds another variant; the defaulted form (`get_int_or`) returns the
//! supplied default in both cases and never fails.
//!
//! Numeric getters widen along this table and nowhere else:
//!
//! | getter        | `Int`                          | `Double` |
//! |---------------|--------------------------------|----------|
//! | `get_int`     | yes, narrowed to low 32 bits   | no       |
//! | `get_long`    | yes                            | no       |
//! | `get_double`  | yes                            | yes      |
//!
//! Only the variant decides whether a getter succeeds. `get_int` on an `Int`
//! outside the `i32` range keeps the low 32 bits (`3000000000` reads as
//! `-1294967296`); use `get_long` for wide values. Booleans, strings and
//! containers are never coerced.

use crate::array::MessageArray;
use crate::error::{MessageError, Result};
use crate::name;
use crate::value::{Value, ValueKind};

/// A message object with named attributes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MessageObject {
    name: Option<String>,
    attributes: Vec<(String, Value)>,
}

impl MessageObject {
    /// Create an empty object, named or anonymous.
    ///
    /// Fails with `InvalidName` if `name` is given and is not an identifier.
    pub fn new(name: Option<&str>) -> Result<Self> {
        if let Some(name) = name {
            name::checked(name)?;
        }
        Ok(Self {
            name: name.map(String::from),
            attributes: Vec::new(),
        })
    }

    /// Create an empty object carrying `name`.
    pub fn named(name: &str) -> Result<Self> {
        Self::new(Some(name))
    }

    /// Create an empty anonymous object.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|(key, _)| key == name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// True only if the attribute is present and holds a value of `kind`.
    pub fn has_kind(&self, name: &str, kind: ValueKind) -> bool {
        self.get(name).is_some_and(|v| v.kind() == kind)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.attributes
            .iter_mut()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Returns the attribute, or `default` when it is absent.
    ///
    /// An attribute explicitly set to null is present: the result is
    /// [`Value::Null`], not `default`.
    pub fn get_or<'a>(&'a self, name: &str, default: &'a Value) -> &'a Value {
        self.get(name).unwrap_or(default)
    }

    /// Returns the attribute, or `default` when it is absent or null.
    pub fn get_value_or<'a>(&'a self, name: &str, default: &'a Value) -> &'a Value {
        match self.get(name) {
            Some(Value::Null) | None => default,
            Some(value) => value,
        }
    }

    /// Insert or overwrite an attribute.
    ///
    /// Overwriting keeps the attribute at its original position. Fails with
    /// `InvalidName` before touching the object if `name` is not an identifier.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        name::checked(name)?;
        let value = value.into();
        match self.position(name) {
            Some(idx) => self.attributes[idx].1 = value,
            None => self.attributes.push((name.to_string(), value)),
        }
        Ok(())
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Result<Self> {
        self.set(name, value)?;
        Ok(self)
    }

    /// Remove an attribute, returning its value. Absent names are a no-op.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let idx = self.position(name)?;
        Some(self.attributes.remove(idx).1)
    }

    /// Attribute names in insertion order.
    pub fn attribute_names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.attributes.iter().map(|(key, _)| key.as_str())
    }

    /// Attributes in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Value)> + '_ {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    fn typed<'a, T>(&'a self, name: &str, extract: impl FnOnce(&'a Value) -> Option<T>) -> Result<T> {
        self.get(name)
            .and_then(extract)
            .ok_or_else(|| MessageError::MissingAttribute(name.to_string()))
    }

    /// Narrows with `as`, so values outside `i32` wrap.
    pub fn get_int(&self, name: &str) -> Result<i32> {
        self.typed(name, as_int)
    }

    pub fn get_int_or(&self, name: &str, default: i32) -> i32 {
        self.get(name).and_then(as_int).unwrap_or(default)
    }

    pub fn get_long(&self, name: &str) -> Result<i64> {
        self.typed(name, Value::as_i64)
    }

    pub fn get_long_or(&self, name: &str, default: i64) -> i64 {
        self.get(name).and_then(Value::as_i64).unwrap_or(default)
    }

    /// Accepts both `Int` and `Double` attributes.
    pub fn get_double(&self, name: &str) -> Result<f64> {
        self.typed(name, Value::as_f64)
    }

    pub fn get_double_or(&self, name: &str, default: f64) -> f64 {
        self.get(name).and_then(Value::as_f64).unwrap_or(default)
    }

    pub fn get_bool(&self, name: &str) -> Result<bool> {
        self.typed(name, Value::as_bool)
    }

    pub fn get_bool_or(&self, name: &str, default: bool) -> bool {
        self.get(name).and_then(Value::as_bool).unwrap_or(default)
    }

    pub fn get_string(&self, name: &str) -> Result<&str> {
        self.typed(name, Value::as_str)
    }

    pub fn get_string_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.get(name).and_then(Value::as_str).unwrap_or(default)
    }

    pub fn get_object(&self, name: &str) -> Result<&MessageObject> {
        self.typed(name, Value::as_object)
    }

    pub fn get_object_or<'a>(&'a self, name: &str, default: &'a MessageObject) -> &'a MessageObject {
        self.get(name).and_then(Value::as_object).unwrap_or(default)
    }

    pub fn get_array(&self, name: &str) -> Result<&MessageArray> {
        self.typed(name, Value::as_array)
    }

    pub fn get_array_or<'a>(&'a self, name: &str, default: &'a MessageArray) -> &'a MessageArray {
        self.get(name).and_then(Value::as_array).unwrap_or(default)
    }
}

fn as_int(value: &Value) -> Option<i32> {
    value.as_i64().map(|n| n as i32)
}
