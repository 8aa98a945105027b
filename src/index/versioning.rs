use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::normalize::Language;
use crate::types::identifiers::{DocumentName, DocumentVersion};

/// What loading does when two inputs share a document name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// The later input replaces the earlier one's content. The document keeps
    /// the position of its first occurrence.
    #[default]
    LastWins,
    /// Loading fails with `IndexError::DuplicateDocumentName`.
    Reject,
}

/// IDF formula applied by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdfVariant {
    /// `ln(N / (1 + df))`. Goes negative for terms present in most documents,
    /// and those terms then subtract from a score.
    #[default]
    Unclamped,
    /// `max(0, ln(N / (1 + df)))`. Opt-in; changes observable rankings.
    ZeroFloored,
}

// Key point:
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub version: String,
    pub language: Language,
    pub extra_stop_words: Vec<String>,
    pub duplicate_policy: DuplicatePolicy,
    pub idf: IdfVariant,
}

impl SearchConfig {
    pub fn v0() -> Self {
        Self {
            version: "1".into(),
            language: Language::Spanish,
            extra_stop_words: Vec::new(),
            duplicate_policy: DuplicatePolicy::LastWins,
            idf: IdfVariant::Unclamped,
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    pub fn with_idf(mut self, idf: IdfVariant) -> Self {
        self.idf = idf;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::v0()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestDocumentEntry {
    pub name: DocumentName,
    pub version: DocumentVersion,
    pub token_count: usize,
}

/// Summary of a loaded corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusManifest {
    pub corpus_version: String,
    pub config: SearchConfig,
    pub loaded_at: DateTime<Utc>, // informational only
    pub document_count: usize,
    pub documents: Vec<ManifestDocumentEntry>,
}
