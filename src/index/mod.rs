pub mod corpus;
pub mod versioning;

pub use corpus::{corpus_version, CorpusIndex, IndexError};
pub use versioning::{
    CorpusManifest, DuplicatePolicy, IdfVariant, ManifestDocumentEntry, SearchConfig,
};
