use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Caller-supplied document identity, unique within a corpus.
///
/// Names are taken verbatim: no case folding or path normalization, since the
/// name is what gets reported back in a ranking.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentName(String);

#[derive(Debug, Error)]
pub enum DocumentNameError {
    #[error("Path has no file name component")]
    MissingFileName,
    #[error("Path involves invalid UTF-8")]
    InvalidUtf8,
}

impl DocumentName {
    pub fn new(name: impl Into<String>) -> Self {
        DocumentName(name.into())
    }

    /// Name a document after the base name of its source file.
    pub fn from_path(source: &Path) -> Result<Self, DocumentNameError> {
        let file_name = source
            .file_name()
            .ok_or(DocumentNameError::MissingFileName)?;
        let name = file_name.to_str().ok_or(DocumentNameError::InvalidUtf8)?;

        Ok(DocumentName(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentName {
    fn from(name: &str) -> Self {
        DocumentName::new(name)
    }
}

impl From<String> for DocumentName {
    fn from(name: String) -> Self {
        DocumentName(name)
    }
}

/// Content hash version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentVersion(String);

impl DocumentVersion {
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);

        DocumentVersion(format!("sha256:{}", hex::encode(hasher.finalize())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
