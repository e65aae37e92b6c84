use super::*;

/// Advance the character iterator and update line/column/offset tracking
pub(super) fn bump(lexer: &mut Lexer) -> Option<char> {
    let curr = lexer.peek;
    if let Some(c) = curr {
        if c == '\n' {
            lexer.line += 1;
            lexer.column = 0;
        } else {
            lexer.column += 1;
        }
        lexer.offset += c.len_utf8();
    }
    lexer.peek = lexer.input.next();
    curr
}

/// Does the unread input start with `pat`?
pub(super) fn starts_with(lexer: &Lexer, pat: &str) -> bool {
    let mut expected = pat.chars();
    if lexer.peek != expected.next() {
        return false;
    }
    let mut rest = lexer.input.clone();
    expected.all(|c| rest.next() == Some(c))
}

/// The character after the current one
pub(super) fn peek_second(lexer: &Lexer) -> Option<char> {
    lexer.input.clone().next()
}

/// Skip whitespace, `--` line comments and `--[[ ... --]]` block comments
pub(super) fn skip_whitespace_and_comments(lexer: &mut Lexer) -> Result<(), LiveryError> {
    while let Some(c) = lexer.peek {
        match c {
            c if c.is_whitespace() || c == '\u{feff}' => {
                bump(lexer);
            }
            '-' if starts_with(lexer, "--[[") => skip_block_comment(lexer)?,
            '-' if starts_with(lexer, "--") => {
                while let Some(ch) = bump(lexer) {
                    if ch == '\n' {
                        break;
                    }
                }
            }
            _ => break,
        }
    }
    Ok(())
}

// Not nesting-aware: the first `--]]` closes the comment.
fn skip_block_comment(lexer: &mut Lexer) -> Result<(), LiveryError> {
    let line = lexer.line;
    let column = lexer.column + 1;

    for _ in 0..4 {
        bump(lexer);
    }

    loop {
        if starts_with(lexer, "--]]") {
            for _ in 0..4 {
                bump(lexer);
            }
            return Ok(());
        }
        if bump(lexer).is_none() {
            return Err(LiveryError::UnclosedComment {
                line,
                column,
                hint: Some("Close block comments with --]]".into()),
                code: Some(105),
            });
        }
    }
}
