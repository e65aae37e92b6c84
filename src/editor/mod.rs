// Author: Dustin Pilgrim
// License: MIT

use crate::ast::{Document, Span, Value};
use crate::parser;
use crate::reference::ReferenceSet;
use crate::utils::{decode_lossless, line_col};
use crate::LiveryError;

mod merge;
mod render;

pub use merge::merge_entries;
pub use render::{render_property, render_value, splice, splice_bytes};

/// Property the stock editor patches.
pub const DEFAULT_TARGET: &str = "countries";

/// Result of running the editor over one file's contents, either as text
/// or, from [`LiveryEditor::apply_bytes`], as raw bytes.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T = String> {
    /// The document has no target property; nothing to do.
    MissingTarget,
    /// Every reference token is already listed.
    UpToDate,
    Patched { added: Vec<String>, text: T },
}

impl Outcome {
    /// The rewritten file text, if anything changed.
    pub fn text(&self) -> Option<&str> {
        match self {
            Outcome::Patched { text, .. } => Some(text),
            _ => None,
        }
    }
}

impl Outcome<Vec<u8>> {
    /// The rewritten file contents, if anything changed.
    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            Outcome::Patched { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// A merge that still has to be spliced into the source.
enum Merge {
    MissingTarget,
    UpToDate,
    Block { added: Vec<String>, span: Span, block: String },
}

/// Merges a reference set into one list-valued property and splices the
/// regenerated property back into the source text.
///
/// Only the bytes of the target property change; the splice range comes
/// from the span the parser recorded, so comments and other properties
/// mentioning the target name are never touched.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveryEditor {
    target_key: String,
    reference: ReferenceSet,
}

impl LiveryEditor {
    pub fn new(target_key: impl Into<String>, reference: ReferenceSet) -> Self {
        Self {
            target_key: target_key.into(),
            reference,
        }
    }

    /// Editor for the `countries` property.
    pub fn countries(reference: ReferenceSet) -> Self {
        Self::new(DEFAULT_TARGET, reference)
    }

    pub fn target_key(&self) -> &str {
        &self.target_key
    }

    pub fn reference(&self) -> &ReferenceSet {
        &self.reference
    }

    /// Parse `source` and patch it.
    pub fn apply(&self, source: &str) -> Result<Outcome, LiveryError> {
        let mut doc = parser::parse(source)?;
        self.apply_document(&mut doc, source)
    }

    /// Patch an already parsed document. `source` must be the text `doc`
    /// was parsed from; `doc` is updated with the merged list.
    pub fn apply_document(&self, doc: &mut Document, source: &str) -> Result<Outcome, LiveryError> {
        Ok(match self.merge(doc, source)? {
            Merge::MissingTarget => Outcome::MissingTarget,
            Merge::UpToDate => Outcome::UpToDate,
            Merge::Block { added, span, block } => Outcome::Patched {
                added,
                text: splice(source, span, &block),
            },
        })
    }

    /// Patch file contents that need not be valid UTF-8.
    ///
    /// Bytes outside the target property are copied through unchanged, so
    /// descriptors saved in a legacy code page keep their names and
    /// comments. Invalid bytes inside the target property, or outside any
    /// string or comment, are a lex error.
    pub fn apply_bytes(&self, source: &[u8]) -> Result<Outcome<Vec<u8>>, LiveryError> {
        let (text, invalid) = decode_lossless(source);
        let mut doc = parser::parse(&text)?;

        Ok(match self.merge(&mut doc, &text)? {
            Merge::MissingTarget => Outcome::MissingTarget,
            Merge::UpToDate => Outcome::UpToDate,
            Merge::Block { added, span, block } => {
                if let Some(&offset) = invalid.iter().find(|&&o| span.start <= o && o < span.end) {
                    let (line, column) = line_col(&text, offset);
                    return Err(LiveryError::InvalidEncoding {
                        line,
                        column,
                        hint: Some(format!("Save '{}' as UTF-8 before merging", self.target_key)),
                        code: Some(107),
                    });
                }
                Outcome::Patched {
                    added,
                    text: splice_bytes(source, span, &block),
                }
            }
        })
    }

    fn merge(&self, doc: &mut Document, source: &str) -> Result<Merge, LiveryError> {
        let Some(property) = doc.find_mut(&self.target_key) else {
            return Ok(Merge::MissingTarget);
        };

        let entries = match &mut property.value {
            Value::List(items) => items,
            other => {
                let (line, column) = line_col(source, property.span.start);
                return Err(LiveryError::TypeError {
                    message: format!("'{}' must be a list, found {}", property.key, other.type_name()),
                    line,
                    column,
                    hint: Some(format!("Write it as {} = {{\"USA\"}}", property.key)),
                    code: Some(250),
                });
            }
        };

        let added = merge_entries(entries, &self.reference);
        if added.is_empty() {
            return Ok(Merge::UpToDate);
        }

        Ok(Merge::Block {
            block: render_property(&property.key, entries),
            span: property.span,
            added,
        })
    }
}
