//! Text normalization: case folding, accent stripping, tokenization and
//! stop-word removal.
//!
//! Documents and queries go through the same pipeline, so a query term
//! matches a document term exactly when both fold to the same token.

pub mod normalizer;
pub mod stopwords;

pub use normalizer::{fold, normalize, tokenize, Normalizer};
pub use stopwords::{Language, StopWords};
