//! Canonical writer: message tree → minimal wire text.
//!
//! Objects are written as `name{key=value,...}` in insertion order, arrays as
//! `name[value,...]`, with the name omitted for anonymous containers. No
//! whitespace is inserted, so the output is the smallest text the parser
//! reads back into an equal tree.
//!
//! Scalars:
//! - strings are quoted, with a backslash in front of `"`, `\`, CR, LF and tab
//! - integers use plain decimal (`itoa`)
//! - doubles use the shortest round-tripping form (`ryu`), which always
//!   carries a `.` or an exponent, so `1.0` never comes back as an `Int`
//! - non-finite doubles have no literal form. [`write_message`] and the
//!   functions built on it fail with `NonFiniteDouble`; the `Display` impls
//!   write `null` instead

use crate::array::MessageArray;
use crate::error::{MessageError, Result};
use crate::message::Message;
use crate::object::MessageObject;
use crate::value::Value;
use std::fmt::{self, Write};
use tracing::warn;

/// Write `message` in canonical form to a text sink.
///
/// Fails with `NonFiniteDouble` before writing anything if the tree holds a
/// NaN or infinite double.
pub fn write_message<W: Write + ?Sized>(out: &mut W, message: &Message) -> Result<()> {
    let non_finite = match message {
        Message::Object(obj) => obj.iter().find_map(|(_, v)| non_finite_double(v)),
        Message::Array(arr) => arr.iter().find_map(non_finite_double),
    };
    if let Some(d) = non_finite {
        return Err(MessageError::NonFiniteDouble(d));
    }
    match message {
        Message::Object(obj) => write_object(out, obj)?,
        Message::Array(arr) => write_array(out, arr)?,
    }
    Ok(())
}

/// Render `message` in canonical form.
pub fn to_string(message: &Message) -> Result<String> {
    let mut out = String::new();
    write_message(&mut out, message)?;
    Ok(out)
}

/// Write `message` in canonical form to a byte sink.
pub fn to_writer<W: std::io::Write>(mut writer: W, message: &Message) -> Result<()> {
    let text = to_string(message)?;
    writer.write_all(text.as_bytes())?;
    Ok(())
}

fn non_finite_double(value: &Value) -> Option<f64> {
    match value {
        Value::Double(d) if !d.is_finite() => Some(*d),
        Value::Object(obj) => obj.iter().find_map(|(_, v)| non_finite_double(v)),
        Value::Array(arr) => arr.iter().find_map(non_finite_double),
        _ => None,
    }
}

fn write_name<W: Write + ?Sized>(out: &mut W, name: Option<&str>) -> fmt::Result {
    match name {
        Some(name) => out.write_str(name),
        None => Ok(()),
    }
}

pub(crate) fn write_object<W: Write + ?Sized>(out: &mut W, obj: &MessageObject) -> fmt::Result {
    write_name(out, obj.name())?;
    out.write_char('{')?;
    for (i, (key, value)) in obj.iter().enumerate() {
        if i > 0 {
            out.write_char(',')?;
        }
        out.write_str(key)?;
        out.write_char('=')?;
        write_value(out, value)?;
    }
    out.write_char('}')
}

pub(crate) fn write_array<W: Write + ?Sized>(out: &mut W, arr: &MessageArray) -> fmt::Result {
    write_name(out, arr.name())?;
    out.write_char('[')?;
    for (i, value) in arr.iter().enumerate() {
        if i > 0 {
            out.write_char(',')?;
        }
        write_value(out, value)?;
    }
    out.write_char(']')
}

pub(crate) fn write_value<W: Write + ?Sized>(out: &mut W, value: &Value) -> fmt::Result {
    match value {
        Value::Null => out.write_str("null"),
        Value::Bool(b) => out.write_str(if *b { "true" } else { "false" }),
        Value::Int(n) => out.write_str(itoa::Buffer::new().format(*n)),
        Value::Double(d) if d.is_finite() => out.write_str(ryu::Buffer::new().format_finite(*d)),
        Value::Double(d) => {
            warn!(value = %d, "non-finite double written as null");
            out.write_str("null")
        }
        Value::String(s) => write_quoted(out, s),
        Value::Object(obj) => write_object(out, obj),
        Value::Array(arr) => write_array(out, arr),
    }
}

fn write_quoted<W: Write + ?Sized>(out: &mut W, s: &str) -> fmt::Result {
    out.write_char('"')?;
    for c in s.chars() {
        if matches!(c, '"' | '\\' | '\r' | '\n' | '\t') {
            out.write_char('\\')?;
        }
        out.write_char(c)?;
    }
    out.write_char('"')
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Object(obj) => write_object(f, obj),
            Message::Array(arr) => write_array(f, arr),
        }
    }
}

impl fmt::Display for MessageObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_object(f, self)
    }
}

impl fmt::Display for MessageArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_array(f, self)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self)
    }
}
