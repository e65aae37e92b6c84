use super::*;
use super::scanner::{bump, peek_second, skip_whitespace_and_comments};
use crate::utils::SUBSTITUTE;

pub(super) fn next_token(lexer: &mut Lexer) -> Result<SpannedToken, LiveryError> {
    skip_whitespace_and_comments(lexer)?;

    let start = lexer.offset;
    let line = lexer.line;
    let column = lexer.column + 1;

    let token = match lexer.peek {
        Some('=') => tokenize_symbol(lexer, Token::Equals),
        Some(',') => tokenize_symbol(lexer, Token::Comma),
        Some(';') => tokenize_symbol(lexer, Token::Semicolon),
        Some('{') => tokenize_symbol(lexer, Token::LBrace),
        Some('}') => tokenize_symbol(lexer, Token::RBrace),
        Some('[') => tokenize_symbol(lexer, Token::LBracket),
        Some(']') => tokenize_symbol(lexer, Token::RBracket),
        Some('"') => tokenize_string(lexer, line, column)?,
        Some(c) if c.is_ascii_digit() => tokenize_number(lexer, line, column)?,
        // A sign is only part of a number when a digit follows it directly.
        Some('+') | Some('-') if peek_second(lexer).is_some_and(|c| c.is_ascii_digit()) => {
            tokenize_number(lexer, line, column)?
        }
        Some(c) if c.is_ascii_alphabetic() => tokenize_identifier_or_keyword(lexer),
        Some(ch) => return Err(tokenize_unexpected_char(lexer, ch, line, column)),
        None => Token::Eof,
    };

    Ok(SpannedToken {
        token,
        span: Span::new(start, lexer.offset),
        line,
        column,
    })
}

fn tokenize_symbol(lexer: &mut Lexer, token: Token) -> Token {
    bump(lexer);
    token
}

fn tokenize_string(lexer: &mut Lexer, line: usize, column: usize) -> Result<Token, LiveryError> {
    bump(lexer); // consume opening '"'
    let mut content = String::new();

    let unclosed = |hint: &str| LiveryError::UnclosedString {
        line,
        column,
        hint: Some(hint.into()),
        code: Some(103),
    };

    loop {
        match bump(lexer) {
            Some('"') => break,
            Some('\n') => return Err(unclosed("Strings cannot span lines")),
            Some('\\') => {
                let at = (lexer.line, lexer.column);
                match bump(lexer) {
                    Some(escape) => tokenize_escape(lexer, escape, at, &mut content)?,
                    None => return Err(unclosed("Trailing backslash in string")),
                }
            }
            Some(ch) => content.push(ch),
            None => return Err(unclosed("String literal not closed")),
        }
    }

    Ok(Token::String(content))
}

/// Decode the escape introduced by `escape` into `content`. `at` is the
/// position of the backslash.
///
/// Byte escapes (`\ddd`, `\xXX`) must name an ASCII character; higher
/// bytes have no single-character meaning in UTF-8 text.
fn tokenize_escape(
    lexer: &mut Lexer,
    escape: char,
    (line, column): (usize, usize),
    content: &mut String,
) -> Result<(), LiveryError> {
    let invalid = |sequence: String, hint: &str| LiveryError::InvalidEscape {
        sequence,
        line,
        column,
        hint: Some(hint.into()),
        code: Some(106),
    };

    let escaped = match escape {
        'n' | '\n' => '\n',
        't' => '\t',
        'r' => '\r',
        'a' => '\u{7}',
        'b' => '\u{8}',
        'f' => '\u{c}',
        'v' => '\u{b}',
        '\\' | '"' | '\'' => escape,
        'z' => {
            while lexer.peek.is_some_and(char::is_whitespace) {
                bump(lexer);
            }
            return Ok(());
        }
        d if d.is_ascii_digit() => {
            let mut digits = d.to_string();
            while digits.len() < 3 && lexer.peek.is_some_and(|c| c.is_ascii_digit()) {
                digits.push(bump(lexer).unwrap_or('0'));
            }
            let value = digits.bytes().fold(0u32, |n, b| n * 10 + u32::from(b - b'0'));
            ascii_escape(value).ok_or_else(|| {
                invalid(format!("\\{}", digits), "Byte escapes above 127 are not valid UTF-8")
            })?
        }
        'x' => {
            let mut hex = String::new();
            while hex.len() < 2 && lexer.peek.is_some_and(|c| c.is_ascii_hexdigit()) {
                hex.push(bump(lexer).unwrap_or('0'));
            }
            let value = u32::from_str_radix(&hex, 16).ok().filter(|_| hex.len() == 2);
            value.and_then(ascii_escape).ok_or_else(|| {
                invalid(format!("\\x{}", hex), "Use two hex digits naming an ASCII character")
            })?
        }
        'u' => {
            let mut sequence = String::from("\\u");
            if lexer.peek == Some('{') {
                sequence.push('{');
                bump(lexer);
                while lexer.peek.is_some_and(|c| c.is_ascii_hexdigit()) {
                    sequence.push(bump(lexer).unwrap_or('0'));
                }
                if lexer.peek == Some('}') {
                    sequence.push('}');
                    bump(lexer);
                }
            }
            let hex = sequence.trim_start_matches("\\u{").trim_end_matches('}');
            let decoded = sequence
                .ends_with('}')
                .then(|| u32::from_str_radix(hex, 16).ok())
                .flatten()
                .and_then(char::from_u32);
            decoded.ok_or_else(|| invalid(sequence.clone(), "Write unicode escapes as \\u{XXXX}"))?
        }
        other => {
            return Err(invalid(format!("\\{}", other), "Unknown escape sequence"));
        }
    };

    content.push(escaped);
    Ok(())
}

fn ascii_escape(value: u32) -> Option<char> {
    char::from_u32(value).filter(char::is_ascii)
}

fn tokenize_number(lexer: &mut Lexer, line: usize, column: usize) -> Result<Token, LiveryError> {
    let mut literal = String::new();

    if let Some(sign @ ('+' | '-')) = lexer.peek {
        literal.push(sign);
        bump(lexer);
    }
    push_digits(lexer, &mut literal);

    // Longest match: `1.5` is one float, never an int followed by junk.
    let is_float = lexer.peek == Some('.') && peek_second(lexer).is_some_and(|c| c.is_ascii_digit());

    let invalid = |literal: &str, hint: Option<&str>| LiveryError::InvalidNumber {
        literal: literal.to_string(),
        line,
        column,
        hint: hint.map(Into::into),
        code: Some(102),
    };

    if is_float {
        literal.push('.');
        bump(lexer);
        push_digits(lexer, &mut literal);
        literal.parse::<f64>().map(Token::Float).map_err(|_| invalid(&literal, None))
    } else {
        literal
            .parse::<i64>()
            .map(Token::Int)
            .map_err(|_| invalid(&literal, Some("Integer does not fit in 64 bits")))
    }
}

fn push_digits(lexer: &mut Lexer, literal: &mut String) {
    while let Some(ch) = lexer.peek {
        if ch.is_ascii_digit() {
            literal.push(ch);
            bump(lexer);
        } else {
            break;
        }
    }
}

fn tokenize_identifier_or_keyword(lexer: &mut Lexer) -> Token {
    let mut ident = String::new();

    while let Some(ch) = lexer.peek {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            ident.push(ch);
            bump(lexer);
        } else {
            break;
        }
    }

    match ident.as_str() {
        "true" => Token::Bool(true),
        "false" => Token::Bool(false),
        "local" => Token::Local,
        _ => Token::Ident(ident),
    }
}

fn tokenize_unexpected_char(lexer: &mut Lexer, ch: char, line: usize, column: usize) -> LiveryError {
    bump(lexer);
    if ch == SUBSTITUTE {
        return LiveryError::InvalidEncoding {
            line,
            column,
            hint: Some("Non-UTF-8 bytes may only appear inside strings and comments".into()),
            code: Some(107),
        };
    }
    let hint = match ch {
        '+' | '-' => "Signs must be written directly before a number",
        '\'' => "Strings use double quotes",
        _ => "Unexpected character in input",
    };
    LiveryError::UnexpectedCharacter {
        character: ch,
        line,
        column,
        hint: Some(hint.into()),
        code: Some(104),
    }
}
