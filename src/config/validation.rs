use super::*;
use crate::parser::is_enum_literal;

impl EditorConfig {
    /// Reject settings the editor could never act on.
    pub fn validate(&self) -> Result<(), LiveryError> {
        if !is_identifier(&self.target_key) {
            return Err(invalid(
                format!("target_key '{}' is not a property name", self.target_key),
                "Use a bare name such as countries",
                450,
            ));
        }

        let name = &self.descriptor_name;
        if name.is_empty() || name.contains(['/', '\\']) {
            return Err(invalid(
                format!("descriptor_name '{}' must be a plain file name", name),
                "Use a file name such as description.lua",
                451,
            ));
        }

        Ok(())
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let starts_ok = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    starts_ok
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !matches!(name, "true" | "false" | "local")
        && !is_enum_literal(name)
}

fn invalid(message: String, hint: &str, code: u32) -> LiveryError {
    LiveryError::ConfigError {
        message,
        hint: Some(hint.into()),
        code: Some(code),
    }
}
