// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::batch::{process_tree, BatchReport};
use crate::editor::{LiveryEditor, DEFAULT_TARGET};
use crate::reference::ReferenceSet;
use crate::LiveryError;

mod validation;

pub const DEFAULT_DESCRIPTOR: &str = "description.lua";

/// Settings for a patch run, usually loaded from a JSON file.
///
/// Every field is optional in the file:
///
/// ```json
/// {
///   "target_key": "countries",
///   "descriptor_name": "description.lua",
///   "reference": ["USA", "CAN"],
///   "liveries_root": "~/Saved Games/DCS/Liveries"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    pub target_key: String,
    pub descriptor_name: String,
    pub reference: ReferenceSet,
    pub liveries_root: Option<PathBuf>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            target_key: DEFAULT_TARGET.to_string(),
            descriptor_name: DEFAULT_DESCRIPTOR.to_string(),
            reference: ReferenceSet::dcs_countries(),
            liveries_root: None,
        }
    }
}

impl EditorConfig {
    /// Load and validate a JSON config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LiveryError> {
        let content = fs::read_to_string(&path).map_err(|e| LiveryError::FileError {
            message: format!("Failed to read config: {}", e),
            path: path.as_ref().to_string_lossy().to_string(),
            hint: Some("Check that the file exists and is readable".into()),
            code: Some(301),
        })?;
        Self::from_str(&content)
    }

    /// Load from the primary path, falling back to `fallback` when the
    /// primary file cannot be read. Invalid contents never fall back.
    pub fn from_file_with_fallback<P: AsRef<Path>>(primary: P, fallback: P) -> Result<Self, LiveryError> {
        match Self::from_file(&primary) {
            Ok(config) => Ok(config),
            Err(LiveryError::FileError { .. }) => Self::from_file(&fallback).map_err(|e| match e {
                LiveryError::FileError { message, .. } => LiveryError::FileError {
                    message: format!(
                        "Failed to load config from primary path '{}' or fallback path '{}': {}",
                        primary.as_ref().display(),
                        fallback.as_ref().display(),
                        message
                    ),
                    path: format!(
                        "{} (fallback: {})",
                        primary.as_ref().display(),
                        fallback.as_ref().display()
                    ),
                    hint: Some("Check that at least one of the config files exists".into()),
                    code: Some(301),
                },
                other => other,
            }),
            Err(other) => Err(other),
        }
    }

    pub fn from_str(content: &str) -> Result<Self, LiveryError> {
        let config: EditorConfig = serde_json::from_str(content).map_err(|e| LiveryError::ConfigError {
            message: format!("Invalid config at line {} column {}: {}", e.line(), e.column(), e),
            hint: None,
            code: Some(401),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn editor(&self) -> LiveryEditor {
        LiveryEditor::new(self.target_key.clone(), self.reference.clone())
    }

    /// `liveries_root` with a leading `~/` expanded.
    pub fn resolved_root(&self) -> Result<Option<PathBuf>, LiveryError> {
        self.liveries_root.as_deref().map(expand_home).transpose()
    }

    /// Patch every livery under `liveries_root`.
    pub fn run(&self) -> Result<BatchReport, LiveryError> {
        let root = self.resolved_root()?.ok_or_else(|| LiveryError::ConfigError {
            message: "No liveries_root configured".into(),
            hint: Some("Set liveries_root to the DCS Liveries folder".into()),
            code: Some(403),
        })?;
        Ok(process_tree(&root, &self.editor(), &self.descriptor_name))
    }
}

fn expand_home(path: &Path) -> Result<PathBuf, LiveryError> {
    match path.strip_prefix("~") {
        Ok(rest) => {
            let home = dirs::home_dir().ok_or_else(|| LiveryError::ConfigError {
                message: "Could not determine home directory for ~ expansion".into(),
                hint: Some("Set HOME or use an absolute liveries_root".into()),
                code: Some(402),
            })?;
            Ok(home.join(rest))
        }
        Err(_) => Ok(path.to_path_buf()),
    }
}
