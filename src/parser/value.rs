use super::*;
use crate::ast::Value;

/// Bare identifiers accepted in value position.
pub const ENUM_LITERALS: &[&str] = &[
    "ROUGHNESS_METALLIC",
    "DECAL",
    "RROUGHNESS_METALLIC",
    "DIFFUSE",
    "default_diff",
    "FROM_PATHS",
    "SPECULAR",
];

pub fn is_enum_literal(name: &str) -> bool {
    ENUM_LITERALS.contains(&name)
}

pub(super) fn parse_value(parser: &mut Parser) -> Result<Value, LiveryError> {
    match parser.peek() {
        Token::String(_) | Token::Float(_) | Token::Int(_) | Token::Bool(_) => parse_scalar_value(parser),
        Token::LBrace => parse_list_value(parser),
        Token::LBracket => parse_indexed_value(parser),
        Token::Ident(name) if is_enum_literal(name) => parse_enum_value(parser),
        Token::Ident(_) => Err(parser.unexpected(
            "value",
            Some("Only literals and texture enums (DIFFUSE, DECAL, SPECULAR, ...) may appear here"),
        )),
        _ => Err(parser.unexpected("value", None)),
    }
}

fn parse_scalar_value(parser: &mut Parser) -> Result<Value, LiveryError> {
    let value = match parser.bump()?.token {
        Token::String(s) => Value::String(s),
        Token::Float(n) => Value::Float(n),
        Token::Int(n) => Value::Int(n),
        Token::Bool(b) => Value::Bool(b),
        _ => unreachable!(),
    };
    Ok(value)
}

fn parse_enum_value(parser: &mut Parser) -> Result<Value, LiveryError> {
    if let Token::Ident(name) = parser.bump()?.token {
        Ok(Value::Enum(name))
    } else {
        unreachable!()
    }
}

fn parse_list_value(parser: &mut Parser) -> Result<Value, LiveryError> {
    parser.bump()?; // consume {
    let mut items = Vec::new();

    if *parser.peek() == Token::RBrace {
        parser.bump()?;
        return Ok(Value::List(items));
    }

    loop {
        items.push(parse_value(parser)?);

        match parser.peek() {
            Token::Comma | Token::Semicolon => {
                parser.bump()?;
                // trailing separator
                if *parser.peek() == Token::RBrace {
                    parser.bump()?;
                    break;
                }
            }
            Token::RBrace => {
                parser.bump()?;
                break;
            }
            _ => {
                return Err(parser.unexpected(
                    "',', ';' or '}'",
                    Some("List entries are separated by commas or semicolons"),
                ));
            }
        }
    }

    Ok(Value::List(items))
}

fn parse_indexed_value(parser: &mut Parser) -> Result<Value, LiveryError> {
    parser.bump()?; // consume [
    let key = parse_value(parser)?;
    parser.expect(Token::RBracket)?;
    parser.expect(Token::Equals)?;
    let value = parse_value(parser)?;
    Ok(Value::Indexed(Box::new(key), Box::new(value)))
}
