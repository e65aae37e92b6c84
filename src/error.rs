use std::fmt;

/// Coarse classification used when reporting per-file failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lex,
    Parse,
    Type,
    Io,
    Config,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Lex => "lex error",
            ErrorKind::Parse => "parse error",
            ErrorKind::Type => "type error",
            ErrorKind::Io => "io error",
            ErrorKind::Config => "config error",
        };
        f.write_str(name)
    }
}

/// The main error type for livery lexing, parsing and rewriting.
#[derive(Debug, Clone, PartialEq)]
pub enum LiveryError {
    /// Raised for characters that cannot start any token.
    UnexpectedCharacter {
        character: char,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a string literal is not closed.
    UnclosedString {
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a `--[[` block comment runs to end of input.
    UnclosedComment {
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised for escapes with no character meaning, such as `\q` or `\200`.
    InvalidEscape {
        sequence: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised for bytes that are not valid UTF-8 where the text matters.
    InvalidEncoding {
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    InvalidNumber {
        literal: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    SyntaxError {
        expected: String,
        found: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    UnexpectedEof {
        expected: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    TypeError {
        message: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    ConfigError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl LiveryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LiveryError::UnexpectedCharacter { .. }
            | LiveryError::UnclosedString { .. }
            | LiveryError::UnclosedComment { .. }
            | LiveryError::InvalidEscape { .. }
            | LiveryError::InvalidEncoding { .. }
            | LiveryError::InvalidNumber { .. } => ErrorKind::Lex,
            LiveryError::SyntaxError { .. } | LiveryError::UnexpectedEof { .. } => ErrorKind::Parse,
            LiveryError::TypeError { .. } => ErrorKind::Type,
            LiveryError::FileError { .. } => ErrorKind::Io,
            LiveryError::ConfigError { .. } => ErrorKind::Config,
        }
    }

    /// Line and column for errors raised while reading source text.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            LiveryError::UnexpectedCharacter { line, column, .. }
            | LiveryError::UnclosedString { line, column, .. }
            | LiveryError::UnclosedComment { line, column, .. }
            | LiveryError::InvalidEscape { line, column, .. }
            | LiveryError::InvalidEncoding { line, column, .. }
            | LiveryError::InvalidNumber { line, column, .. }
            | LiveryError::SyntaxError { line, column, .. }
            | LiveryError::UnexpectedEof { line, column, .. }
            | LiveryError::TypeError { line, column, .. } => Some((*line, *column)),
            LiveryError::FileError { .. } | LiveryError::ConfigError { .. } => None,
        }
    }
}

fn suffix(hint: &Option<String>, code: &Option<u32>) -> String {
    format!(
        "{}{}",
        hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
        code.map_or(String::new(), |c| format!(" Code: {}", c))
    )
}

impl fmt::Display for LiveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiveryError::UnexpectedCharacter { character, line, column, hint, code } =>
                write!(f, "[LIVERY] Unexpected character '{}' at {}:{}{}",
                    character, line, column, suffix(hint, code)),
            LiveryError::UnclosedString { line, column, hint, code } =>
                write!(f, "[LIVERY] Unclosed string starting at {}:{}{}",
                    line, column, suffix(hint, code)),
            LiveryError::UnclosedComment { line, column, hint, code } =>
                write!(f, "[LIVERY] Unclosed block comment starting at {}:{}{}",
                    line, column, suffix(hint, code)),
            LiveryError::InvalidEscape { sequence, line, column, hint, code } =>
                write!(f, "[LIVERY] Invalid escape '{}' at {}:{}{}",
                    sequence, line, column, suffix(hint, code)),
            LiveryError::InvalidEncoding { line, column, hint, code } =>
                write!(f, "[LIVERY] Invalid UTF-8 at {}:{}{}",
                    line, column, suffix(hint, code)),
            LiveryError::InvalidNumber { literal, line, column, hint, code } =>
                write!(f, "[LIVERY] Invalid number '{}' at {}:{}{}",
                    literal, line, column, suffix(hint, code)),
            LiveryError::SyntaxError { expected, found, line, column, hint, code } =>
                write!(f, "[LIVERY] Syntax Error at {}:{}: expected {}, found {}{}",
                    line, column, expected, found, suffix(hint, code)),
            LiveryError::UnexpectedEof { expected, line, column, hint, code } =>
                write!(f, "[LIVERY] Unexpected EOF at {}:{}: expected {}{}",
                    line, column, expected, suffix(hint, code)),
            LiveryError::TypeError { message, line, column, hint, code } =>
                write!(f, "[LIVERY] Type Error at {}:{}: {}{}",
                    line, column, message, suffix(hint, code)),
            LiveryError::FileError { message, path, hint, code } =>
                write!(f, "[LIVERY] File Error '{}': {}{}",
                    path, message, suffix(hint, code)),
            LiveryError::ConfigError { message, hint, code } =>
                write!(f, "[LIVERY] Config Error: {}{}",
                    message, suffix(hint, code)),
        }
    }
}

impl std::error::Error for LiveryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_hint_and_code() {
        let err = LiveryError::SyntaxError {
            expected: "'='".into(),
            found: "'}'".into(),
            line: 3,
            column: 7,
            hint: Some("Properties are written as name = value".into()),
            code: Some(202),
        };
        assert_eq!(
            err.to_string(),
            "[LIVERY] Syntax Error at 3:7: expected '=', found '}' Hint: Properties are written as name = value Code: 202"
        );
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert_eq!(err.position(), Some((3, 7)));
    }

    #[test]
    fn test_file_error_has_no_position() {
        let err = LiveryError::FileError {
            message: "denied".into(),
            path: "a/description.lua".into(),
            hint: None,
            code: Some(301),
        };
        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(err.position(), None);
        assert_eq!(err.to_string(), "[LIVERY] File Error 'a/description.lua': denied Code: 301");
    }

    #[test]
    fn test_encoding_errors_are_lex_errors() {
        let escape = LiveryError::InvalidEscape {
            sequence: "\\200".into(),
            line: 4,
            column: 9,
            hint: None,
            code: Some(106),
        };
        assert_eq!(escape.kind(), ErrorKind::Lex);
        assert_eq!(escape.to_string(), "[LIVERY] Invalid escape '\\200' at 4:9 Code: 106");

        let encoding = LiveryError::InvalidEncoding { line: 2, column: 15, hint: None, code: Some(107) };
        assert_eq!(encoding.kind(), ErrorKind::Lex);
        assert_eq!(encoding.position(), Some((2, 15)));
        assert_eq!(encoding.to_string(), "[LIVERY] Invalid UTF-8 at 2:15 Code: 107");
    }
}
