// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::editor::{LiveryEditor, Outcome};
use crate::LiveryError;

/// What happened to a single descriptor file.
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    Patched { added: Vec<String> },
    UpToDate,
    MissingTarget,
    /// No descriptor file at that path.
    Missing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    pub path: PathBuf,
    pub error: LiveryError,
}

/// Per-file results of a run over a liveries tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BatchReport {
    pub patched: Vec<PathBuf>,
    pub up_to_date: Vec<PathBuf>,
    pub missing_target: Vec<PathBuf>,
    pub missing_file: Vec<PathBuf>,
    pub failures: Vec<Failure>,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn total(&self) -> usize {
        self.patched.len()
            + self.up_to_date.len()
            + self.missing_target.len()
            + self.missing_file.len()
            + self.failures.len()
    }

    fn record(&mut self, path: PathBuf, result: Result<FileOutcome, LiveryError>) {
        match result {
            Ok(FileOutcome::Patched { added }) => {
                info!(message = "Patched livery.", path = %path.display(), added = added.len());
                self.patched.push(path);
            }
            Ok(FileOutcome::UpToDate) => {
                debug!(message = "Livery already up to date.", path = %path.display());
                self.up_to_date.push(path);
            }
            Ok(FileOutcome::MissingTarget) => {
                debug!(message = "Livery has no target property.", path = %path.display());
                self.missing_target.push(path);
            }
            Ok(FileOutcome::Missing) => {
                debug!(message = "No descriptor file.", path = %path.display());
                self.missing_file.push(path);
            }
            Err(error) => self.fail(path, error),
        }
    }

    fn fail(&mut self, path: PathBuf, error: LiveryError) {
        warn!(message = "Failed to process livery.", path = %path.display(), kind = %error.kind(), %error);
        self.failures.push(Failure { path, error });
    }
}

/// Patch one descriptor file in place.
///
/// The file is handled as bytes, so descriptors in a legacy code page are
/// rewritten without touching anything outside the target property.
///
/// The new text goes to a temporary file next to the original, which is
/// then renamed over it; on any error the original file is left as it was.
pub fn rewrite_file(path: &Path, editor: &LiveryEditor) -> Result<FileOutcome, LiveryError> {
    let source = match fs::read(path) {
        Ok(source) => source,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(FileOutcome::Missing),
        Err(e) => return Err(file_error(path, "Failed to read file", e, 301)),
    };

    match editor.apply_bytes(&source)? {
        Outcome::MissingTarget => Ok(FileOutcome::MissingTarget),
        Outcome::UpToDate => Ok(FileOutcome::UpToDate),
        Outcome::Patched { added, text } => {
            write_atomic(path, &text)?;
            Ok(FileOutcome::Patched { added })
        }
    }
}

fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), LiveryError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)
        .map_err(|e| file_error(path, "Failed to create temporary file", e, 303))?;
    tmp.write_all(contents)
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| file_error(path, "Failed to write temporary file", e, 303))?;

    // Keep the descriptor's mode rather than the temp file's 0600.
    let permissions = fs::metadata(path)
        .map_err(|e| file_error(path, "Failed to read file metadata", e, 301))?
        .permissions();
    tmp.as_file()
        .set_permissions(permissions)
        .map_err(|e| file_error(path, "Failed to copy permissions", e, 303))?;

    tmp.persist(path)
        .map_err(|e| file_error(path, "Failed to replace file", e.error, 304))?;
    Ok(())
}

/// Process every `<root>/<aircraft>/<livery>/<descriptor_name>`.
///
/// Each file is handled on its own: a failure is logged and recorded and
/// the walk moves on.
pub fn process_tree(root: &Path, editor: &LiveryEditor, descriptor_name: &str) -> BatchReport {
    let mut report = BatchReport::default();

    let aircraft = match subdirectories(root) {
        Ok(dirs) => dirs,
        Err(error) => {
            report.fail(root.to_path_buf(), error);
            return report;
        }
    };

    for plane in aircraft {
        let liveries = match subdirectories(&plane) {
            Ok(dirs) => dirs,
            Err(error) => {
                report.fail(plane, error);
                continue;
            }
        };

        for livery in liveries {
            let path = livery.join(descriptor_name);
            let result = rewrite_file(&path, editor);
            report.record(path, result);
        }
    }

    info!(
        message = "Finished processing liveries.",
        root = %root.display(),
        patched = report.patched.len(),
        up_to_date = report.up_to_date.len(),
        failed = report.failures.len(),
    );
    report
}

/// Sorted child directories of `dir`.
fn subdirectories(dir: &Path) -> Result<Vec<PathBuf>, LiveryError> {
    let entries = fs::read_dir(dir).map_err(|e| file_error(dir, "Failed to read directory", e, 302))?;

    let mut dirs = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| file_error(dir, "Failed to read directory entry", e, 302))?
            .path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

fn file_error(path: &Path, message: &str, err: io::Error, code: u32) -> LiveryError {
    LiveryError::FileError {
        message: format!("{}: {}", message, err),
        path: path.to_string_lossy().to_string(),
        hint: None,
        code: Some(code),
    }
}
