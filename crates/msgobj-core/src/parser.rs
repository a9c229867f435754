//! Recursive-descent parser from a [`TokenStream`] to a [`Message`] tree.
//!
//! Three productions call each other:
//!
//! - `parse_value`: a top-level container, `[IDENT] ('{' ... '}' | '[' ... ']')`
//! - `parse_object_body`: `IDENT '=' element` entries up to `}`
//! - `parse_array_body`: elements up to `]`
//!
//! An element is a number, a string, one of the identifiers `null`, `true`,
//! `false`, or a nested container. Any other identifier in element position
//! is the name of the container that must follow it, which is how
//! `attr = OBJ { }` gives the nested object the name `OBJ`. The literal
//! identifiers name a container only when `{` or `[` follows directly.
//!
//! # Comma discipline
//!
//! Each body tracks whether a value was read since the opening bracket or
//! the last comma. A comma without a preceding value, a value without a
//! separating comma, and a closing bracket straight after a comma are all
//! syntax errors, so `A{,x=1}`, `A{x=1 y=2}` and `A{x=1,}` are rejected.
//!
//! End of input inside any production is reported as
//! [`MessageError::UnexpectedEof`], separately from grammar violations.

use crate::array::MessageArray;
use crate::error::{MessageError, Result};
use crate::message::Message;
use crate::object::MessageObject;
use crate::token::{Symbol, Token, TokenStream};
use crate::value::Value;
use tracing::{debug, trace};

/// Default limit on container nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum container nesting; deeper input fails with `NestingTooDeep`.
    pub max_depth: usize,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Tracks comma placement inside one object or array body.
#[derive(Default)]
struct Separators {
    value_found: bool,
    after_comma: bool,
}

impl Separators {
    fn value(&mut self) -> Result<()> {
        if self.value_found {
            return Err(MessageError::syntax("Missing comma between values"));
        }
        self.value_found = true;
        self.after_comma = false;
        Ok(())
    }

    fn comma(&mut self) -> Result<()> {
        if !self.value_found {
            return Err(MessageError::syntax("Invalid object content."));
        }
        self.value_found = false;
        self.after_comma = true;
        Ok(())
    }

    fn close(&self) -> Result<()> {
        if self.after_comma {
            return Err(MessageError::syntax("Invalid object content."));
        }
        Ok(())
    }
}

/// Message parser holding the token source and one token of lookahead.
pub struct Parser<S> {
    tokens: S,
    lookahead: Option<Token>,
    depth: usize,
    options: ParseOptions,
}

impl<S: TokenStream> Parser<S> {
    pub fn new(tokens: S) -> Self {
        Self::with_options(tokens, ParseOptions::default())
    }

    pub fn with_options(tokens: S, options: ParseOptions) -> Self {
        Self {
            tokens,
            lookahead: None,
            depth: 0,
            options,
        }
    }

    /// Parse one top-level message.
    ///
    /// Tokens after the closing bracket are left unread, so consecutive
    /// messages on one stream can be parsed by calling this repeatedly.
    pub fn parse_message(&mut self) -> Result<Message> {
        self.depth = 0;
        match self.parse_value() {
            Ok(message) => {
                trace!(name = ?message.name(), array = message.as_array().is_some(), "parsed message");
                Ok(message)
            }
            Err(err) => {
                debug!(error = %err, "message parse failed");
                Err(err)
            }
        }
    }

    /// Parse the next message, or return `None` if the stream is at its end.
    pub fn next_message(&mut self) -> Result<Option<Message>> {
        if matches!(self.peek()?, Token::Eof) {
            return Ok(None);
        }
        self.parse_message().map(Some)
    }

    /// Fail unless the stream has been fully consumed.
    pub fn expect_end(&mut self) -> Result<()> {
        match self.next()? {
            Token::Eof => Ok(()),
            other => Err(MessageError::syntax(format!("Unexpected trailing token: {other}"))),
        }
    }

    fn next(&mut self) -> Result<Token> {
        match self.lookahead.take() {
            Some(token) => Ok(token),
            None => self.tokens.next_token(),
        }
    }

    fn peek(&mut self) -> Result<&Token> {
        if self.lookahead.is_none() {
            self.lookahead = Some(self.tokens.next_token()?);
        }
        Ok(self.lookahead.get_or_insert(Token::Eof))
    }

    /// Next token inside a production, where end of input is an error.
    fn next_required(&mut self) -> Result<Token> {
        match self.next()? {
            Token::Eof => Err(MessageError::UnexpectedEof),
            token => Ok(token),
        }
    }

    fn opens_container(&mut self) -> Result<bool> {
        let token = self.peek()?;
        Ok(token.is_symbol(Symbol::LeftBrace) || token.is_symbol(Symbol::LeftBracket))
    }

    fn enter(&mut self) -> Result<()> {
        if self.depth >= self.options.max_depth {
            return Err(MessageError::NestingTooDeep {
                max: self.options.max_depth,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn parse_value(&mut self) -> Result<Message> {
        match self.next_required()? {
            Token::Identifier(name) => self.parse_named(name),
            Token::Symbol(Symbol::LeftBrace) => self.parse_object_body(None).map(Message::Object),
            Token::Symbol(Symbol::LeftBracket) => self.parse_array_body(None).map(Message::Array),
            other => Err(MessageError::syntax(format!("Unexpected token: {other}"))),
        }
    }

    /// A container introduced by `name`; the next token must open it.
    fn parse_named(&mut self, name: String) -> Result<Message> {
        match self.next_required()? {
            Token::Symbol(Symbol::LeftBrace) => self.parse_object_body(Some(&name)).map(Message::Object),
            Token::Symbol(Symbol::LeftBracket) => self.parse_array_body(Some(&name)).map(Message::Array),
            other => Err(MessageError::syntax(format!(
                "{{ or [ expected after {name}, found {other}"
            ))),
        }
    }

    /// One attribute value or array element.
    fn parse_element(&mut self) -> Result<Value> {
        match self.next_required()? {
            Token::Identifier(id) => {
                let literal = match id.as_str() {
                    "null" => Some(Value::Null),
                    "true" => Some(Value::Bool(true)),
                    "false" => Some(Value::Bool(false)),
                    _ => None,
                };
                match literal {
                    // `null{...}` is a container that happens to be named `null`
                    Some(value) if !self.opens_container()? => Ok(value),
                    _ => self.parse_named(id).map(Message::into_value),
                }
            }
            Token::Symbol(Symbol::LeftBrace) => self.parse_object_body(None).map(Value::Object),
            Token::Symbol(Symbol::LeftBracket) => self.parse_array_body(None).map(Value::Array),
            Token::Integer(n) => Ok(Value::Int(n)),
            Token::Double(d) => Ok(Value::Double(d)),
            Token::String(s) => Ok(Value::String(s)),
            other => Err(MessageError::syntax(format!("Unexpected token: {other}"))),
        }
    }

    /// Entries after the opening `{`, through the closing `}`.
    fn parse_object_body(&mut self, name: Option<&str>) -> Result<MessageObject> {
        self.enter()?;
        let mut obj = MessageObject::new(name)?;
        let mut separators = Separators::default();

        loop {
            match self.next_required()? {
                Token::Symbol(Symbol::RightBrace) => {
                    separators.close()?;
                    break;
                }
                Token::Symbol(Symbol::Comma) => separators.comma()?,
                Token::Identifier(key) => {
                    separators.value()?;
                    let eq = self.next_required()?;
                    if !eq.is_symbol(Symbol::Equals) {
                        return Err(MessageError::syntax(format!(
                            "= expected after {key}, found {eq}"
                        )));
                    }
                    let value = self.parse_element()?;
                    obj.set(&key, value)?;
                }
                other => return Err(MessageError::syntax(format!("Unexpected token: {other}"))),
            }
        }

        self.leave();
        Ok(obj)
    }

    /// Elements after the opening `[`, through the closing `]`.
    fn parse_array_body(&mut self, name: Option<&str>) -> Result<MessageArray> {
        self.enter()?;
        let mut arr = MessageArray::new(name)?;
        let mut separators = Separators::default();

        loop {
            match self.peek()? {
                Token::Symbol(Symbol::RightBracket) => {
                    self.next()?;
                    separators.close()?;
                    break;
                }
                Token::Symbol(Symbol::Comma) => {
                    self.next()?;
                    separators.comma()?;
                }
                Token::Eof => return Err(MessageError::UnexpectedEof),
                _ => {
                    separators.value()?;
                    let value = self.parse_element()?;
                    arr.add(value);
                }
            }
        }

        self.leave();
        Ok(arr)
    }
}
