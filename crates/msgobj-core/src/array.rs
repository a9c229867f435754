//! Positional message arrays with an optional name.

use crate::error::Result;
use crate::name;
use crate::value::Value;

/// An ordered sequence of values, optionally named as a whole.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MessageArray {
    name: Option<String>,
    items: Vec<Value>,
}

impl MessageArray {
    /// Create an empty array, named or anonymous.
    pub fn new(name: Option<&str>) -> Result<Self> {
        if let Some(name) = name {
            name::checked(name)?;
        }
        Ok(Self {
            name: name.map(String::from),
            items: Vec::new(),
        })
    }

    pub fn named(name: &str) -> Result<Self> {
        Self::new(Some(name))
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Append a value.
    pub fn add(&mut self, value: impl Into<Value>) {
        self.items.push(value.into());
    }

    /// Builder form of [`add`](Self::add).
    pub fn with(mut self, value: impl Into<Value>) -> Self {
        self.add(value);
        self
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a MessageArray {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for MessageArray {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<V: Into<Value>> Extend<V> for MessageArray {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        self.items.extend(iter.into_iter().map(Into::into));
    }
}
