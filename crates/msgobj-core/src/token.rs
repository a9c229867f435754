//! Tokens and the pull interface the parser reads them through.

use crate::error::Result;
use std::fmt;

/// One of the six punctuation symbols of the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `,`
    Comma,
    /// `=`
    Equals,
}

impl Symbol {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '{' => Some(Symbol::LeftBrace),
            '}' => Some(Symbol::RightBrace),
            '[' => Some(Symbol::LeftBracket),
            ']' => Some(Symbol::RightBracket),
            ',' => Some(Symbol::Comma),
            '=' => Some(Symbol::Equals),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::LeftBrace => '{',
            Symbol::RightBrace => '}',
            Symbol::LeftBracket => '[',
            Symbol::RightBracket => ']',
            Symbol::Comma => ',',
            Symbol::Equals => '=',
        }
    }
}

/// A classified lexical token with its payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Identifier(String),
    Symbol(Symbol),
    /// String literal, already unescaped.
    String(String),
    Integer(i64),
    Double(f64),
    Eof,
}

impl Token {
    pub(crate) fn is_symbol(&self, symbol: Symbol) -> bool {
        matches!(self, Token::Symbol(s) if *s == symbol)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Identifier(name) => write!(f, "IDENTIFIER {name}"),
            Token::Symbol(symbol) => write!(f, "SYMBOL {}", symbol.as_char()),
            Token::String(s) => write!(f, "STRING {s:?}"),
            Token::Integer(n) => write!(f, "INTEGER {n}"),
            Token::Double(d) => write!(f, "DOUBLE {d}"),
            Token::Eof => f.write_str("EOF"),
        }
    }
}

/// A source of tokens pulled one at a time by the parser.
///
/// Once the input is exhausted, every further call returns [`Token::Eof`].
/// Failures of the underlying source (lexical or I/O) are returned as errors.
pub trait TokenStream {
    fn next_token(&mut self) -> Result<Token>;
}

impl<S: TokenStream + ?Sized> TokenStream for &mut S {
    fn next_token(&mut self) -> Result<Token> {
        (**self).next_token()
    }
}

/// A pre-tokenized stream, mostly useful for feeding external tokenizers'
/// output or hand-built sequences to the parser.
impl TokenStream for std::vec::IntoIter<Token> {
    fn next_token(&mut self) -> Result<Token> {
        Ok(self.next().unwrap_or(Token::Eof))
    }
}
