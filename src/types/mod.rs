pub mod identifiers;
pub mod search_result;

pub use identifiers::{DocumentName, DocumentNameError, DocumentVersion};
pub use search_result::{SearchError, SearchHit, SearchMetadata, SearchResult, TermStat};
