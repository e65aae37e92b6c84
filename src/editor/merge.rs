use std::collections::HashSet;

use crate::ast::Value;
use crate::reference::ReferenceSet;

/// Append every reference token missing from `entries`.
///
/// Existing entries keep their order and position. Only string entries
/// count as present. Returns the appended tokens in reference order.
pub fn merge_entries(entries: &mut Vec<Value>, reference: &ReferenceSet) -> Vec<String> {
    let present: HashSet<&str> = entries.iter().filter_map(Value::as_str).collect();

    let added: Vec<String> = reference
        .iter()
        .filter(|token| !present.contains(token))
        .map(str::to_string)
        .collect();

    entries.extend(added.iter().cloned().map(Value::String));
    added
}
