#[cfg(test)]
use super::*;
use crate::error::ErrorKind;

#[test]
fn test_full_livery_example() {
    let input = r#"
livery = {
    {"F16_bl50_main_1", DIFFUSE, "f16_bl50_main_1", false};
}
name = "Aggressor"
countries = {"USA", "UKR"}
"#;

    let mut lexer = Lexer::new(input);

    let expected_tokens = vec![
        Token::Ident("livery".into()),
        Token::Equals,
        Token::LBrace,
        Token::LBrace,
        Token::String("F16_bl50_main_1".into()),
        Token::Comma,
        Token::Ident("DIFFUSE".into()),
        Token::Comma,
        Token::String("f16_bl50_main_1".into()),
        Token::Comma,
        Token::Bool(false),
        Token::RBrace,
        Token::Semicolon,
        Token::RBrace,
        Token::Ident("name".into()),
        Token::Equals,
        Token::String("Aggressor".into()),
        Token::Ident("countries".into()),
        Token::Equals,
        Token::LBrace,
        Token::String("USA".into()),
        Token::Comma,
        Token::String("UKR".into()),
        Token::RBrace,
        Token::Eof,
    ];

    for expected in expected_tokens {
        let tok = lexer.next_token();
        assert_eq!(tok, Ok(expected));
    }
}

#[test]
fn test_numbers_prefer_longest_match() {
    let input = "1 1.5 -2 +3 -0.25 10.0";
    let mut lexer = Lexer::new(input);

    let expected_tokens = vec![
        Token::Int(1),
        Token::Float(1.5),
        Token::Int(-2),
        Token::Int(3),
        Token::Float(-0.25),
        Token::Float(10.0),
        Token::Eof,
    ];

    for expected in expected_tokens {
        assert_eq!(lexer.next_token(), Ok(expected));
    }
}

#[test]
fn test_detached_sign_is_rejected() {
    let mut lexer = Lexer::new("x = - 1");
    assert_eq!(lexer.next_token(), Ok(Token::Ident("x".into())));
    assert_eq!(lexer.next_token(), Ok(Token::Equals));

    let err = lexer.next_token().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Lex);
    assert!(matches!(err, LiveryError::UnexpectedCharacter { character: '-', line: 1, column: 5, .. }));
}

#[test]
fn test_integer_overflow_is_invalid_number() {
    let mut lexer = Lexer::new("99999999999999999999");
    let err = lexer.next_token().unwrap_err();
    assert!(matches!(err, LiveryError::InvalidNumber { ref literal, .. } if literal == "99999999999999999999"));
}

#[test]
fn test_line_comments_are_skipped() {
    let input = "-- header\nname = \"x\" -- trailing\n--\norder = 7";
    let mut lexer = Lexer::new(input);

    let expected_tokens = vec![
        Token::Ident("name".into()),
        Token::Equals,
        Token::String("x".into()),
        Token::Ident("order".into()),
        Token::Equals,
        Token::Int(7),
        Token::Eof,
    ];

    for expected in expected_tokens {
        assert_eq!(lexer.next_token(), Ok(expected));
    }
}

#[test]
fn test_block_comments_are_skipped() {
    let input = r#"--[[
countries = {"RUS"}
--]]
a = 1 --[[ inline --]] b = 2"#;
    let mut lexer = Lexer::new(input);

    let expected_tokens = vec![
        Token::Ident("a".into()),
        Token::Equals,
        Token::Int(1),
        Token::Ident("b".into()),
        Token::Equals,
        Token::Int(2),
        Token::Eof,
    ];

    for expected in expected_tokens {
        assert_eq!(lexer.next_token(), Ok(expected));
    }
}

#[test]
fn test_block_comment_ends_only_at_dashed_brackets() {
    let input = "--[[\nold = t[a[1]] was replaced\n]] still a comment\n--]]\nx = 1";
    let mut lexer = Lexer::new(input);

    assert_eq!(lexer.next_token(), Ok(Token::Ident("x".into())));
    assert_eq!(lexer.line(), 5);
    assert_eq!(lexer.next_token(), Ok(Token::Equals));
    assert_eq!(lexer.next_token(), Ok(Token::Int(1)));
    assert_eq!(lexer.next_token(), Ok(Token::Eof));
}

#[test]
fn test_bare_brackets_do_not_close_block_comment() {
    let err = Lexer::new("--[[ t[a[1]] ]]\nx = 1").next_token().unwrap_err();
    assert!(matches!(err, LiveryError::UnclosedComment { line: 1, column: 1, .. }));
}

#[test]
fn test_unclosed_block_comment() {
    let mut lexer = Lexer::new("a = 1\n  --[[ never closed\n");
    lexer.next_token().unwrap();
    lexer.next_token().unwrap();
    lexer.next_token().unwrap();

    let err = lexer.next_token().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Lex);
    assert!(matches!(err, LiveryError::UnclosedComment { line: 2, column: 3, .. }));
}

#[test]
fn test_comment_marker_inside_string_is_text() {
    let mut lexer = Lexer::new(r#"name = "Su-27 -- ""#);
    lexer.next_token().unwrap();
    lexer.next_token().unwrap();
    assert_eq!(lexer.next_token(), Ok(Token::String("Su-27 -- ".into())));
}

#[test]
fn test_string_escapes() {
    let input = r#"escaped = "\n\t\\\"x""#;
    let mut lexer = Lexer::new(input);

    let expected_tokens = vec![
        Token::Ident("escaped".into()),
        Token::Equals,
        Token::String("\n\t\\\"x".into()),
        Token::Eof,
    ];

    for expected in expected_tokens {
        let tok = lexer.next_token().expect("Failed to get token");
        assert_eq!(tok, expected);
    }
}

#[test]
fn test_numeric_and_unicode_escapes() {
    let mut lexer = Lexer::new(r#""\65\x41\u{41}" "\0651" "\a\b\f\v" "\u{416}\u{1F6E9}" "a\z
        b""#);

    assert_eq!(lexer.next_token(), Ok(Token::String("AAA".into())));
    assert_eq!(lexer.next_token(), Ok(Token::String("A1".into())));
    assert_eq!(lexer.next_token(), Ok(Token::String("\u{7}\u{8}\u{c}\u{b}".into())));
    assert_eq!(lexer.next_token(), Ok(Token::String("Ж\u{1F6E9}".into())));
    assert_eq!(lexer.next_token(), Ok(Token::String("ab".into())));
}

#[test]
fn test_invalid_escapes_are_lex_errors() {
    let cases = [
        (r#""x\q""#, "\\q"),
        (r#""x\200""#, "\\200"),
        (r#""x\xE9""#, "\\xE9"),
        (r#""x\x4""#, "\\x4"),
        (r#""x\u{D800}""#, "\\u{D800}"),
        (r#""x\u41""#, "\\u"),
    ];

    for (input, expected) in cases {
        let err = Lexer::new(input).next_token().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Lex, "{}", input);
        match err {
            LiveryError::InvalidEscape { sequence, line, column, .. } => {
                assert_eq!(sequence, expected);
                assert_eq!((line, column), (1, 3));
            }
            other => panic!("Expected InvalidEscape for {}, got {:?}", input, other),
        }
    }
}

#[test]
fn test_unclosed_string() {
    let mut lexer = Lexer::new("name = \"open");
    lexer.next_token().unwrap();
    lexer.next_token().unwrap();

    let err = lexer.next_token().unwrap_err();
    assert!(matches!(err, LiveryError::UnclosedString { line: 1, column: 8, .. }));
}

#[test]
fn test_string_cannot_span_lines() {
    let mut lexer = Lexer::new("\"first\nsecond\"");
    assert!(matches!(lexer.next_token(), Err(LiveryError::UnclosedString { line: 1, column: 1, .. })));
}

#[test]
fn test_local_keyword_and_identifiers() {
    let mut lexer = Lexer::new("local name_ru = default_diff");

    let expected_tokens = vec![
        Token::Local,
        Token::Ident("name_ru".into()),
        Token::Equals,
        Token::Ident("default_diff".into()),
        Token::Eof,
    ];

    for expected in expected_tokens {
        assert_eq!(lexer.next_token(), Ok(expected));
    }
}

#[test]
fn test_spans_are_byte_offsets() {
    let input = "\u{feff}ключ = 1\nname = \"Ж\"";
    // The BOM is skipped, the Cyrillic identifier is not valid.
    let mut lexer = Lexer::new(input);
    assert!(matches!(lexer.next_token(), Err(LiveryError::UnexpectedCharacter { character: 'к', .. })));

    let input = "\u{feff}name = \"Ж\"";
    let tokens = Lexer::new(input).tokenize().expect("tokenize");
    assert_eq!(tokens[0].span, Span::new(3, 7));
    assert_eq!(tokens[0].span.slice(input), "name");
    assert_eq!(tokens[2].span.slice(input), "\"Ж\"");
    assert_eq!(tokens[3].token, Token::Eof);
    assert_eq!(tokens[3].span, Span::new(input.len(), input.len()));
}

#[test]
fn test_token_positions() {
    let tokens = Lexer::new("a = {\n  1,\n}").tokenize().expect("tokenize");
    let positions: Vec<(usize, usize)> = tokens.iter().map(|t| (t.line, t.column)).collect();
    assert_eq!(positions, vec![(1, 1), (1, 3), (1, 5), (2, 3), (2, 4), (3, 1), (3, 2)]);
}
