//! Error types for building, parsing and writing messages.

use thiserror::Error;

/// Errors that can occur while building, parsing, reading or writing messages.
///
/// Malformed input is reported as `Syntax`, `UnexpectedEof` or
/// `NestingTooDeep`; see [`is_syntax`](Self::is_syntax).
#[derive(Error, Debug)]
pub enum MessageError {
    /// A container or attribute name does not match the identifier grammar.
    #[error("Invalid name: {0:?}")]
    InvalidName(String),

    /// The token sequence does not match the message grammar.
    #[error("Message syntax error: {0}")]
    Syntax(String),

    /// The token stream ended where the grammar required more tokens.
    #[error("Unexpected end of input")]
    UnexpectedEof,

    /// A strict getter found the attribute absent or holding another type.
    #[error("{0} missing or invalid type")]
    MissingAttribute(String),

    /// Containers were nested deeper than the configured limit.
    #[error("Nesting deeper than {max} levels")]
    NestingTooDeep { max: usize },

    /// A double with no text form (NaN or an infinity) was handed to the writer.
    #[error("Non-finite double {0} cannot be written")]
    NonFiniteDouble(f64),

    /// Reading the input or writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The text sink rejected a write.
    #[error("Formatting error")]
    Fmt(#[from] std::fmt::Error),
}

impl MessageError {
    pub(crate) fn syntax(message: impl Into<String>) -> Self {
        MessageError::Syntax(message.into())
    }

    /// True for grammar violations, including premature end of input.
    pub fn is_syntax(&self) -> bool {
        matches!(
            self,
            MessageError::Syntax(_) | MessageError::UnexpectedEof | MessageError::NestingTooDeep { .. }
        )
    }

    pub fn is_eof(&self) -> bool {
        matches!(self, MessageError::UnexpectedEof)
    }
}

/// Convenience alias used throughout msgobj-core.
pub type Result<T> = std::result::Result<T, MessageError>;
