use crate::ast::{Span, Value};
use crate::utils::{format_float, quote};

/// `<key> = {` newline, each entry followed by `, `, then newline `}` newline.
pub fn render_property(key: &str, entries: &[Value]) -> String {
    let mut out = format!("{} = {{\n", key);
    for entry in entries {
        render_value(entry, &mut out);
        out.push_str(", ");
    }
    out.push_str("\n}\n");
    out
}

pub fn render_value(value: &Value, out: &mut String) {
    match value {
        Value::String(s) => out.push_str(&quote(s)),
        Value::Float(n) => out.push_str(&format_float(*n)),
        Value::Int(n) => out.push_str(&n.to_string()),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Enum(name) => out.push_str(name),
        Value::List(items) => {
            out.push('{');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                render_value(item, out);
            }
            out.push('}');
        }
        Value::Indexed(key, value) => {
            out.push('[');
            render_value(key, out);
            out.push_str("] = ");
            render_value(value, out);
        }
    }
}

/// Replace `span` in `source` with `block`.
pub fn splice(source: &str, span: Span, block: &str) -> String {
    let mut out = String::with_capacity(source.len() - span.len() + block.len());
    out.push_str(&source[..span.start]);
    out.push_str(block);
    out.push_str(&source[span.end..]);
    out
}

/// Replace `span` in raw `source` bytes with `block`.
pub fn splice_bytes(source: &[u8], span: Span, block: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(source.len() - span.len() + block.len());
    out.extend_from_slice(&source[..span.start]);
    out.extend_from_slice(block.as_bytes());
    out.extend_from_slice(&source[span.end..]);
    out
}
