//! A complete top-level message: one object or one array.

use crate::array::MessageArray;
use crate::object::MessageObject;
use crate::value::Value;

/// A parsed or hand-built message document.
///
/// The wire grammar only admits a container at the top level, so a message is
/// either an object (`Login{user="x"}`) or an array (`Batch[...]`).
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Object(MessageObject),
    Array(MessageArray),
}

impl Message {
    /// The container's name, if it has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Message::Object(obj) => obj.name(),
            Message::Array(arr) => arr.name(),
        }
    }

    pub fn as_object(&self) -> Option<&MessageObject> {
        match self {
            Message::Object(obj) => Some(obj),
            Message::Array(_) => None,
        }
    }

    pub fn as_array(&self) -> Option<&MessageArray> {
        match self {
            Message::Array(arr) => Some(arr),
            Message::Object(_) => None,
        }
    }

    pub fn into_object(self) -> Option<MessageObject> {
        match self {
            Message::Object(obj) => Some(obj),
            Message::Array(_) => None,
        }
    }

    pub fn into_array(self) -> Option<MessageArray> {
        match self {
            Message::Array(arr) => Some(arr),
            Message::Object(_) => None,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Message::Object(obj) => Value::Object(obj),
            Message::Array(arr) => Value::Array(arr),
        }
    }
}

impl From<MessageObject> for Message {
    fn from(obj: MessageObject) -> Self {
        Message::Object(obj)
    }
}

impl From<MessageArray> for Message {
    fn from(arr: MessageArray) -> Self {
        Message::Array(arr)
    }
}
