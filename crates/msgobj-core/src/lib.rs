//! # msgobj-core
//!
//! Typed message objects for game client/server traffic, with a
//! recursive-descent parser and a canonical writer for their text form.
//!
//! A message is a named or anonymous object of attributes, or an array of
//! values, nested to any depth:
//!
//! ```text
//! WelcomeResponse{session="c0ffee",player=Player{id=7,ratio=0.5},tags=["a","b"]}
//! ```
//!
//! ## Quick start
//!
//! ```rust
//! use msgobj_core::{from_str, Message, MessageObject};
//!
//! let msg = from_str(r#"Login { user = "alice", version = 2 }"#).unwrap();
//! let login = msg.as_object().unwrap();
//! assert_eq!(login.name(), Some("Login"));
//! assert_eq!(login.get_string("user").unwrap(), "alice");
//! assert_eq!(login.get_int_or("retries", 3), 3);
//!
//! let reply = MessageObject::named("Pong").unwrap().with("ms", 12).unwrap();
//! assert_eq!(Message::from(reply).to_string(), "Pong{ms=12}");
//! ```
//!
//! ## Modules
//!
//! - [`value`]: `Value`, the closed set of attribute/element types
//! - [`object`]: `MessageObject` and its strict/defaulted typed getters
//! - [`array`]: `MessageArray`
//! - [`token`] / [`tokenizer`]: the token pull interface and the text tokenizer
//! - [`parser`]: token stream → message tree
//! - [`writer`]: message tree → canonical text
//! - [`error`]: error types

pub mod array;
pub mod error;
mod json;
pub mod message;
pub mod name;
pub mod object;
pub mod parser;
pub mod token;
pub mod tokenizer;
pub mod value;
pub mod writer;

pub use array::MessageArray;
pub use error::{MessageError, Result};
pub use message::Message;
pub use name::verify_name;
pub use object::MessageObject;
pub use parser::{ParseOptions, Parser};
pub use token::{Symbol, Token, TokenStream};
pub use tokenizer::Tokenizer;
pub use value::{Value, ValueKind};
pub use writer::{to_string, to_writer, write_message};

use std::io::Read;

/// Parse one message from a token stream.
///
/// Tokens after the message are left in the stream.
pub fn parse<S: TokenStream>(tokens: S) -> Result<Message> {
    Parser::new(tokens).parse_message()
}

/// Parse a complete message from text.
///
/// The text must hold exactly one message; anything after it is a syntax
/// error.
pub fn from_str(input: &str) -> Result<Message> {
    from_str_with_options(input, ParseOptions::default())
}

pub fn from_str_with_options(input: &str, options: ParseOptions) -> Result<Message> {
    let mut parser = Parser::with_options(Tokenizer::new(input), options);
    let message = parser.parse_message()?;
    parser.expect_end()?;
    Ok(message)
}

/// Read all of `reader` and parse it as one message.
pub fn from_reader<R: Read>(mut reader: R) -> Result<Message> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    from_str(&input)
}
