use super::*;
use crate::ast::Property;

pub(super) fn parse_document(parser: &mut Parser) -> Result<Document, LiveryError> {
    let mut properties = Vec::new();

    loop {
        match parser.peek() {
            Token::Eof => break,
            Token::Ident(_) | Token::Local => {
                properties.push(parse_property(parser)?);
                // Lua tolerates a statement separator here.
                if *parser.peek() == Token::Semicolon {
                    parser.bump()?;
                }
            }
            _ => {
                return Err(parser.unexpected(
                    "property name",
                    Some("Top-level entries are written as name = value"),
                ));
            }
        }
    }

    Ok(Document { properties })
}

fn parse_property(parser: &mut Parser) -> Result<Property, LiveryError> {
    let start = parser.peek_span().start;

    let local = *parser.peek() == Token::Local;
    if local {
        parser.bump()?;
    }

    let key = parser.expect_ident("property name")?;
    parser.expect(Token::Equals)?;
    let value = value::parse_value(parser)?;

    Ok(Property {
        key,
        value,
        local,
        span: Span::new(start, parser.last_end()),
    })
}
