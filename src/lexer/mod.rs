// Author: Dustin Pilgrim
// License: MIT

use std::fmt;
use std::str::Chars;

use crate::ast::Span;
use crate::LiveryError;

mod scanner;
mod tokenizer;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // --- literals ---
    Ident(String),
    String(String),
    Float(f64),
    Int(i64),
    Bool(bool),

    // --- structure ---
    Equals,
    Comma,
    Semicolon,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    // --- keywords ---
    Local,

    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Ident(name) => write!(f, "identifier '{}'", name),
            Token::String(s) => write!(f, "string {:?}", s),
            Token::Float(n) => write!(f, "number {:?}", n),
            Token::Int(n) => write!(f, "number {}", n),
            Token::Bool(b) => write!(f, "'{}'", b),
            Token::Equals => f.write_str("'='"),
            Token::Comma => f.write_str("','"),
            Token::Semicolon => f.write_str("';'"),
            Token::LBrace => f.write_str("'{'"),
            Token::RBrace => f.write_str("'}'"),
            Token::LBracket => f.write_str("'['"),
            Token::RBracket => f.write_str("']'"),
            Token::Local => f.write_str("'local'"),
            Token::Eof => f.write_str("end of input"),
        }
    }
}

/// A token together with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
    pub line: usize,
    pub column: usize,
}

pub struct Lexer<'a> {
    input: Chars<'a>,
    peek: Option<char>,
    line: usize,
    column: usize,
    offset: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer {
            input: input.chars(),
            peek: None,
            line: 1,
            column: 0,
            offset: 0,
        };
        lexer.peek = lexer.input.next();
        lexer
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Byte offset of the next unread character.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Next token with its span. Whitespace and comments are skipped.
    pub fn next_spanned(&mut self) -> Result<SpannedToken, LiveryError> {
        tokenizer::next_token(self)
    }

    pub fn next_token(&mut self) -> Result<Token, LiveryError> {
        self.next_spanned().map(|t| t.token)
    }

    /// Lex the whole input, ending with a single `Eof` token.
    pub fn tokenize(mut self) -> Result<Vec<SpannedToken>, LiveryError> {
        let mut tokens = Vec::new();
        loop {
            let tok = self.next_spanned()?;
            let done = tok.token == Token::Eof;
            tokens.push(tok);
            if done {
                return Ok(tokens);
            }
        }
    }
}

#[cfg(test)]
mod tests;
