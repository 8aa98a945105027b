use std::collections::HashMap;

use chrono::Utc;
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::{debug, warn};

use crate::document::Document;
use crate::index::versioning::{
    CorpusManifest, DuplicatePolicy, ManifestDocumentEntry, SearchConfig,
};
use crate::normalize::Normalizer;
use crate::types::identifiers::{DocumentName, DocumentVersion};

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("Duplicate document name: {0}")]
    DuplicateDocumentName(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Fingerprint of a raw corpus under a given configuration.
///
/// Hashes the configuration followed by, per input entry in input order, the
/// name's byte length, the name and the content version. Duplicates are
/// hashed as given. The length prefix keeps names containing separators from
/// aliasing another corpus.
pub fn corpus_version<N, T>(config: &SearchConfig, raw_docs: &[(N, T)]) -> Result<String, IndexError>
where
    N: AsRef<str>,
    T: AsRef<str>,
{
    let mut hasher = Sha256::new();

    let config_json = serde_json::to_vec(config)?;
    hasher.update((config_json.len() as u64).to_le_bytes());
    hasher.update(&config_json);

    hasher.update((raw_docs.len() as u64).to_le_bytes());
    for (name, text) in raw_docs {
        let name = name.as_ref().as_bytes();
        let version = DocumentVersion::from_content(text.as_ref().as_bytes());
        hasher.update((name.len() as u64).to_le_bytes());
        hasher.update(name);
        // Versions are fixed width: "sha256:" + 64 hex digits
        hasher.update(version.as_str().as_bytes());
    }

    Ok(format!("sha256:{}", hex::encode(hasher.finalize())))
}

/// Normalized token sequences for every document of a corpus.
///
/// Read-only once loaded. Frequencies are computed on demand by scanning the
/// documents; there is no inverted index.
#[derive(Debug, Clone)]
pub struct CorpusIndex {
    documents: Vec<Document>,
    positions: HashMap<DocumentName, usize>,
    manifest: CorpusManifest,
}

impl CorpusIndex {
    pub fn load<N, T>(raw_docs: &[(N, T)], config: &SearchConfig) -> Result<Self, IndexError>
    where
        N: AsRef<str>,
        T: AsRef<str>,
    {
        let normalizer = Normalizer::from_config(config);
        Self::load_with(raw_docs, &normalizer, config)
    }

    /// Load with an explicit normalizer, e.g. a custom stop-word set.
    pub fn load_with<N, T>(
        raw_docs: &[(N, T)],
        normalizer: &Normalizer,
        config: &SearchConfig,
    ) -> Result<Self, IndexError>
    where
        N: AsRef<str>,
        T: AsRef<str>,
    {
        let version = corpus_version(config, raw_docs)?;

        let mut documents: Vec<Document> = Vec::with_capacity(raw_docs.len());
        let mut positions = HashMap::with_capacity(raw_docs.len());

        for (name, text) in raw_docs {
            let name = DocumentName::new(name.as_ref());
            let doc = Document::new(name.clone(), text.as_ref().to_string(), normalizer);

            match positions.get(&name).copied() {
                Some(pos) => match config.duplicate_policy {
                    DuplicatePolicy::Reject => {
                        return Err(IndexError::DuplicateDocumentName(name.as_str().to_string()));
                    }
                    DuplicatePolicy::LastWins => {
                        warn!(document = %name, "Duplicate document name, later content replaces earlier");
                        documents[pos] = doc;
                    }
                },
                None => {
                    positions.insert(name, documents.len());
                    documents.push(doc);
                }
            }
        }

        let entries = documents
            .iter()
            .map(|doc| ManifestDocumentEntry {
                name: doc.name.clone(),
                version: doc.version.clone(),
                token_count: doc.token_count(),
            })
            .collect();

        // Note: loaded_at is strictly informational
        let manifest = CorpusManifest {
            corpus_version: version,
            config: config.clone(),
            loaded_at: Utc::now(),
            document_count: documents.len(),
            documents: entries,
        };

        debug!(
            corpus_version = %manifest.corpus_version,
            inputs = raw_docs.len(),
            documents = documents.len(),
            "Corpus loaded"
        );

        Ok(CorpusIndex {
            documents,
            positions,
            manifest,
        })
    }

    /// Number of documents, including those without any tokens.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Number of documents containing `term` at least once.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.documents.iter().filter(|doc| doc.contains(term)).count()
    }

    /// Document frequency for each distinct term, in first-occurrence order.
    pub fn document_frequencies(&self, terms: &[String]) -> Vec<(String, usize)> {
        let mut frequencies: Vec<(String, usize)> = Vec::new();
        for term in terms {
            if frequencies.iter().any(|(t, _)| t == term) {
                continue;
            }
            frequencies.push((term.clone(), self.document_frequency(term)));
        }
        frequencies
    }

    /// Fraction of `name`'s tokens equal to `term`. Zero for a document with
    /// no tokens and for an unknown name.
    pub fn term_frequency(&self, name: &str, term: &str) -> f64 {
        self.get(name).map_or(0.0, |doc| doc.term_frequency(term))
    }

    pub fn get(&self, name: &str) -> Option<&Document> {
        let pos = self.positions.get(&DocumentName::new(name))?;
        self.documents.get(*pos)
    }

    /// Documents in corpus load order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn manifest(&self) -> &CorpusManifest {
        &self.manifest
    }

    pub fn corpus_version(&self) -> &str {
        &self.manifest.corpus_version
    }

    pub fn config(&self) -> &SearchConfig {
        &self.manifest.config
    }
}
