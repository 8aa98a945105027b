pub mod document;
pub mod loader;

pub use crate::types::identifiers::{DocumentName, DocumentVersion};
pub use document::{decode_content, Document, DocumentError};
pub use loader::{load_directory, LoaderError, DEFAULT_EXTENSION};
