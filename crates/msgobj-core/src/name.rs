//! Identifier grammar shared by container names and attribute names.
//!
//! A valid name is one letter or underscore followed by any number of
//! letters, underscores or ASCII digits. A letter is any character in the
//! Unicode `L` general category, in either case. Marks, letter-like numbers
//! and symbols (`\u{0345}`, `\u{2160}`, `\u{24B6}`) are not letters.

use crate::error::{MessageError, Result};
use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// Check whether `name` matches the identifier grammar.
///
/// # Examples
///
/// ```
/// use msgobj_core::verify_name;
///
/// assert!(verify_name("Foo_1"));
/// assert!(verify_name("_x"));
/// assert!(!verify_name("1abc"));
/// assert!(!verify_name("a-b"));
/// ```
pub fn verify_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_name_start(first) => chars.all(is_name_continue),
        _ => false,
    }
}

pub(crate) fn is_name_start(c: char) -> bool {
    c == '_' || is_letter(c)
}

fn is_letter(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic();
    }
    c.general_category_group() == GeneralCategoryGroup::Letter
}

pub(crate) fn is_name_continue(c: char) -> bool {
    is_name_start(c) || c.is_ascii_digit()
}

/// Validate a name, turning a failure into `MessageError::InvalidName`.
pub(crate) fn checked(name: &str) -> Result<()> {
    if verify_name(name) {
        Ok(())
    } else {
        Err(MessageError::InvalidName(name.to_string()))
    }
}
