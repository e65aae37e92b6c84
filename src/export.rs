// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use serde_json::json;

use crate::ast::{Document, Value};
use crate::parser;
use crate::utils::{decode_lossless, line_col};
use crate::LiveryError;

/// Export a livery document to JSON format.
///
/// Converts every value to its JSON equivalent:
/// - Strings, numbers, booleans → direct mapping
/// - Lists → arrays
/// - Indexed entries → `{"index": key, "value": value}`
/// - Enum literals → `{"enum": "DIFFUSE"}`
///
/// Properties are exported as an array of `{"key", "value"}` entries so
/// duplicate keys and source order survive; `local` ones carry
/// `"local": true`.
///
/// # Examples
/// ```
/// use livery_cfg::export::export_document_to_json;
///
/// let doc = livery_cfg::parse(r#"countries = {"USA"}"#).unwrap();
/// let json = export_document_to_json(&doc).unwrap();
/// assert!(json.contains("\"countries\""));
/// ```
pub fn export_document_to_json(doc: &Document) -> Result<String, LiveryError> {
    fn value_to_json(v: &Value) -> serde_json::Value {
        match v {
            Value::String(s) => json!(s),
            Value::Float(n) => json!(n),
            Value::Int(n) => json!(n),
            Value::Bool(b) => json!(b),
            Value::List(items) => json!(items.iter().map(value_to_json).collect::<Vec<_>>()),
            Value::Indexed(key, value) => json!({
                "index": value_to_json(key),
                "value": value_to_json(value),
            }),
            Value::Enum(name) => json!({ "enum": name }),
        }
    }

    let properties = doc
        .properties
        .iter()
        .map(|p| {
            let mut entry = json!({
                "key": p.key,
                "value": value_to_json(&p.value),
            });
            if p.local {
                entry["local"] = json!(true);
            }
            entry
        })
        .collect::<Vec<_>>();

    serde_json::to_string_pretty(&json!({ "properties": properties })).map_err(|e| {
        LiveryError::ConfigError {
            message: format!("Failed to serialize document: {}", e),
            hint: None,
            code: Some(500),
        }
    })
}

/// Export a livery file directly to JSON.
///
/// Convenience function that reads, parses, and exports in one call.
///
/// # Errors
/// Returns error if file doesn't exist or is not a valid livery table.
/// Text that is not UTF-8 cannot be exported and is a lex error.
pub fn export_livery_file(path: &str) -> Result<String, LiveryError> {
    let bytes = fs::read(path).map_err(|e| LiveryError::FileError {
        message: format!("Failed to read file: {}", e),
        path: path.to_string(),
        hint: None,
        code: Some(301),
    })?;

    let (input, invalid) = decode_lossless(&bytes);
    if let Some(&offset) = invalid.first() {
        let (line, column) = line_col(&input, offset);
        return Err(LiveryError::InvalidEncoding {
            line,
            column,
            hint: Some("Save the file as UTF-8 to export it".into()),
            code: Some(107),
        });
    }

    let doc = parser::parse(&input)?;
    export_document_to_json(&doc)
}
