/// Stands in for each byte that is not valid UTF-8, see [`decode_lossless`].
pub const SUBSTITUTE: char = '\u{1a}';

/// Decode `bytes` as UTF-8, replacing every invalid byte with one
/// [`SUBSTITUTE`]. Byte offsets in the returned text match offsets in
/// `bytes`; the offsets of the replaced bytes are returned alongside.
pub fn decode_lossless(bytes: &[u8]) -> (String, Vec<usize>) {
    let mut text = String::with_capacity(bytes.len());
    let mut invalid = Vec::new();

    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
        for _ in chunk.invalid() {
            invalid.push(text.len());
            text.push(SUBSTITUTE);
        }
    }
    (text, invalid)
}

/// Quote `s` as a double-quoted literal the lexer reads back unchanged.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\u{7}' => out.push_str("\\a"),
            '\u{8}' => out.push_str("\\b"),
            '\u{b}' => out.push_str("\\v"),
            '\u{c}' => out.push_str("\\f"),
            // Three digits so a following digit is not read into the escape.
            c if c.is_ascii_control() => out.push_str(&format!("\\{:03}", c as u32)),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

/// Float literal with a decimal point, never in exponent form.
pub fn format_float(n: f64) -> String {
    let s = n.to_string();
    if s.contains('.') {
        s
    } else {
        format!("{}.0", s)
    }
}

/// 1-based line and column of byte `offset` in `source`.
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let before = &source[..offset.min(source.len())];
    let line = before.matches('\n').count() + 1;
    let column = before
        .rsplit('\n')
        .next()
        .map_or(0, |last| last.chars().count())
        + 1;
    (line, column)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{Lexer, Token};

    #[test]
    fn test_quote_round_trips_through_lexer() {
        let raw = "say \"hi\"\\\n\tdone";
        let quoted = quote(raw);
        assert_eq!(Lexer::new(&quoted).next_token(), Ok(Token::String(raw.into())));
    }

    #[test]
    fn test_control_characters_quote_as_decimal_escapes() {
        let raw = "\u{0}7\u{1b}\u{7}\u{7f}";
        let quoted = quote(raw);
        assert_eq!(quoted, "\"\\0007\\027\\a\\127\"");
        assert_eq!(Lexer::new(&quoted).next_token(), Ok(Token::String(raw.into())));
    }

    #[test]
    fn test_decode_lossless_keeps_offsets() {
        let bytes = b"a = \"\xCF\xF0\"\n\xD0\x96";
        let (text, invalid) = decode_lossless(bytes);
        assert_eq!(text.len(), bytes.len());
        assert_eq!(invalid, vec![5, 6]);
        assert_eq!(text, "a = \"\u{1a}\u{1a}\"\nЖ");
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(1.0), "1.0");
        assert_eq!(format_float(-0.25), "-0.25");
        assert_eq!(format_float(1e-7), "0.0000001");
        assert_eq!(format_float(1e23), "100000000000000000000000.0");
    }

    #[test]
    fn test_line_col() {
        let src = "a = 1\nbb = {\n  \"x\"}";
        assert_eq!(line_col(src, 0), (1, 1));
        assert_eq!(line_col(src, 6), (2, 1));
        assert_eq!(line_col(src, 15), (3, 3));
    }
}
