//! Deterministic TF-IDF ranking engine for small local text corpora.
//!
//! `corpus-rank` normalizes text (case folding, accent stripping, stop-word
//! removal), indexes a corpus of named documents and ranks them against a
//! free-text query with TF-IDF. All operations are deterministic: identical
//! inputs always produce identical, bit-for-bit equal rankings.
//!
//! The crate never touches storage or presentation. Callers hand it an
//! already-loaded corpus and a query string; [`document::loader`] is an
//! optional helper for building that corpus from a directory of text files.

pub mod document;
pub mod index;
pub mod normalize;
pub mod selection;
pub mod types;

pub use index::{CorpusIndex, IndexError, SearchConfig};
pub use normalize::{Language, Normalizer, StopWords};
pub use selection::SearchEngine;
pub use types::{SearchError, SearchHit, SearchResult};
