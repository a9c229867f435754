//! Text tokenizer for the message wire form.
//!
//! Turns source text into the [`Token`]s the parser consumes:
//!
//! - Symbols `{ } [ ] , =`
//! - Identifiers (`[letter_][letter_digit]*`), including `null`, `true`, `false`;
//!   the parser decides which identifiers are literals
//! - Double-quoted strings. A backslash escapes the following character;
//!   `\n`, `\r` and `\t` decode to control characters, anything else
//!   (including a raw line break) stands for itself
//! - Numbers: `-?digits`, optionally with `.digits` and/or an exponent. A
//!   leading `.` is allowed (`.1`, `-.1`). A `.` or exponent makes the token a
//!   `Double`; otherwise it is an `Integer`
//!
//! Whitespace between tokens is skipped.

use crate::error::{MessageError, Result};
use crate::name::{is_name_continue, is_name_start};
use crate::token::{Symbol, Token, TokenStream};
use std::iter::Peekable;
use std::str::CharIndices;

/// Tokenizer over an in-memory string.
pub struct Tokenizer<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
    line: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            line: 1,
        }
    }

    /// The 1-based line the tokenizer is currently on.
    pub fn line(&self) -> usize {
        self.line
    }

    fn bump(&mut self) -> Option<char> {
        let (_, c) = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    /// Byte offset of the next unread character.
    fn offset(&mut self) -> usize {
        self.chars.peek().map_or(self.input.len(), |&(i, _)| i)
    }

    fn error(&self, message: impl std::fmt::Display) -> MessageError {
        MessageError::syntax(format!("{message} at line {}", self.line))
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn read_identifier(&mut self) -> Token {
        let input = self.input;
        let start = self.offset();
        while self.peek_char().is_some_and(is_name_continue) {
            self.bump();
        }
        let end = self.offset();
        Token::Identifier(input[start..end].to_string())
    }

    fn read_string(&mut self) -> Result<Token> {
        // Opening quote
        self.bump();
        let mut out = String::new();
        loop {
            match self.bump() {
                Some('"') => return Ok(Token::String(out)),
                Some('\\') => match self.bump() {
                    Some('n') => out.push('\n'),
                    Some('r') => out.push('\r'),
                    Some('t') => out.push('\t'),
                    Some(other) => out.push(other),
                    None => return Err(self.error("Unterminated string")),
                },
                Some(c) => out.push(c),
                None => return Err(self.error("Unterminated string")),
            }
        }
    }

    fn eat_digits(&mut self) -> usize {
        let mut count = 0;
        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
            count += 1;
        }
        count
    }

    fn read_number(&mut self) -> Result<Token> {
        let input = self.input;
        let start = self.offset();
        if self.peek_char() == Some('-') {
            self.bump();
        }
        let mut digits = self.eat_digits();
        let mut is_double = false;

        if self.peek_char() == Some('.') {
            self.bump();
            is_double = true;
            digits += self.eat_digits();
        }
        if digits == 0 {
            let end = self.offset();
            return Err(self.error(format!("Invalid number {:?}", &input[start..end])));
        }

        if matches!(self.peek_char(), Some('e' | 'E')) {
            self.bump();
            is_double = true;
            if matches!(self.peek_char(), Some('+' | '-')) {
                self.bump();
            }
            if self.eat_digits() == 0 {
                let end = self.offset();
                return Err(self.error(format!("Invalid exponent {:?}", &input[start..end])));
            }
        }

        let end = self.offset();
        let text = &input[start..end];
        if is_double {
            text.parse::<f64>()
                .map(Token::Double)
                .map_err(|_| self.error(format!("Invalid number {text:?}")))
        } else {
            text.parse::<i64>()
                .map(Token::Integer)
                .map_err(|_| self.error(format!("Integer out of range {text:?}")))
        }
    }
}

impl TokenStream for Tokenizer<'_> {
    fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();
        let Some(c) = self.peek_char() else {
            return Ok(Token::Eof);
        };

        if let Some(symbol) = Symbol::from_char(c) {
            self.bump();
            return Ok(Token::Symbol(symbol));
        }
        if c == '"' {
            return self.read_string();
        }
        if c == '-' || c == '.' || c.is_ascii_digit() {
            return self.read_number();
        }
        if is_name_start(c) {
            return Ok(self.read_identifier());
        }
        Err(self.error(format!("Unexpected character {c:?}")))
    }
}
