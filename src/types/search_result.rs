use serde::{Deserialize, Serialize};

use crate::index::IndexError;

/// One ranked document in the output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub name: String,
    pub score: f64,
}

/// Corpus statistics for one distinct query term.
///
/// `idf` is `None` when no document contains the term; such a term
/// contributes nothing to any score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermStat {
    pub term: String,
    /// How many times the term occurs in the normalized query.
    pub occurrences: usize,
    pub document_frequency: usize,
    pub idf: Option<f64>,
}

/// Metadata describing how a ranking was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchMetadata {
    pub query: String,
    pub query_terms: Vec<String>,
    pub terms: Vec<TermStat>,

    pub documents_considered: usize,
    pub documents_matched: usize,
}

/// The final result of a search: hits ordered by score descending, ties in
/// corpus load order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub hits: Vec<SearchHit>,
    pub search: SearchMetadata,
}

impl SearchResult {
    /// The first `n` hits (all of them when fewer exist).
    pub fn top(&self, n: usize) -> &[SearchHit] {
        &self.hits[..n.min(self.hits.len())]
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Ranking as plain `(name, score)` pairs.
    pub fn pairs(&self) -> Vec<(&str, f64)> {
        self.hits
            .iter()
            .map(|hit| (hit.name.as_str(), hit.score))
            .collect()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error(transparent)]
    Index(#[from] IndexError),
}
