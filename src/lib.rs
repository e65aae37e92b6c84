pub mod ast;
pub mod batch;
pub mod config;
pub mod editor;
pub mod error;
pub mod export;
pub mod lexer;
pub mod parser;
pub mod reference;
pub mod utils;

pub use ast::{Document, Property, Span, Value};
pub use config::EditorConfig;
pub use editor::{LiveryEditor, Outcome};
pub use error::{ErrorKind, LiveryError};
pub use parser::parse;
pub use reference::ReferenceSet;
