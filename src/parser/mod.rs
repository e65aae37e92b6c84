use std::mem;

use crate::ast::{Document, Span};
use crate::lexer::{Lexer, SpannedToken, Token};
use crate::LiveryError;

mod document;
mod value;

pub use value::{is_enum_literal, ENUM_LITERALS};

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    peek: SpannedToken,
    last_end: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Result<Self, LiveryError> {
        let mut lexer = Lexer::new(input);
        let peek = lexer.next_spanned()?;
        Ok(Self {
            lexer,
            peek,
            last_end: 0,
        })
    }

    pub(crate) fn bump(&mut self) -> Result<SpannedToken, LiveryError> {
        let next = self.lexer.next_spanned()?;
        let curr = mem::replace(&mut self.peek, next);
        self.last_end = curr.span.end;
        Ok(curr)
    }

    pub(crate) fn peek(&self) -> &Token {
        &self.peek.token
    }

    pub(crate) fn peek_span(&self) -> Span {
        self.peek.span
    }

    /// End offset of the last consumed token.
    pub(crate) fn last_end(&self) -> usize {
        self.last_end
    }

    pub(crate) fn expect(&mut self, expected: Token) -> Result<SpannedToken, LiveryError> {
        if *self.peek() != expected {
            return Err(self.unexpected(&expected.to_string(), None));
        }
        self.bump()
    }

    pub(crate) fn expect_ident(&mut self, what: &str) -> Result<String, LiveryError> {
        if !matches!(self.peek(), Token::Ident(_)) {
            return Err(self.unexpected(what, None));
        }
        match self.bump()?.token {
            Token::Ident(name) => Ok(name),
            _ => unreachable!(),
        }
    }

    /// Error describing the lookahead token as not matching `expected`.
    pub(crate) fn unexpected(&self, expected: &str, hint: Option<&str>) -> LiveryError {
        let SpannedToken { token, line, column, .. } = &self.peek;
        if *token == Token::Eof {
            LiveryError::UnexpectedEof {
                expected: expected.to_string(),
                line: *line,
                column: *column,
                hint: hint.map(Into::into),
                code: Some(201),
            }
        } else {
            LiveryError::SyntaxError {
                expected: expected.to_string(),
                found: token.to_string(),
                line: *line,
                column: *column,
                hint: hint.map(Into::into),
                code: Some(202),
            }
        }
    }

    pub fn parse_document(&mut self) -> Result<Document, LiveryError> {
        document::parse_document(self)
    }
}

/// Parse a whole livery file.
pub fn parse(input: &str) -> Result<Document, LiveryError> {
    Parser::new(input)?.parse_document()
}
