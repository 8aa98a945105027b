use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::normalize::Normalizer;
use crate::types::identifiers::{DocumentName, DocumentVersion};

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Content must be valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Decode raw file bytes as document text, rejecting invalid UTF-8.
pub fn decode_content(raw_content: Vec<u8>) -> Result<String, DocumentError> {
    Ok(String::from_utf8(raw_content)?)
}

/// The atomic unit of a corpus: raw text plus its normalized tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub name: DocumentName,
    pub version: DocumentVersion,
    pub content: String,
    pub tokens: Vec<String>,
}

impl Document {
    /// Build a Document from already-decoded text.
    ///
    /// Tokens are derived here and never change afterwards.
    pub fn new(name: DocumentName, content: String, normalizer: &Normalizer) -> Self {
        let version = DocumentVersion::from_content(content.as_bytes());
        let tokens = normalizer.normalize(&content);

        Document {
            name,
            version,
            content,
            tokens,
        }
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Occurrences of `term` in the token sequence.
    pub fn term_count(&self, term: &str) -> usize {
        self.tokens.iter().filter(|t| t.as_str() == term).count()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.tokens.iter().any(|t| t == term)
    }

    /// Fraction of this document's tokens equal to `term`; 0 for a document
    /// without tokens.
    pub fn term_frequency(&self, term: &str) -> f64 {
        let total = self.token_count();
        if total == 0 {
            return 0.0;
        }
        self.term_count(term) as f64 / total as f64
    }
}
