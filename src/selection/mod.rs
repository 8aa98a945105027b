pub mod ordering;
pub mod ranking;

use tracing::debug;

use crate::index::{corpus_version, CorpusIndex, IndexError, SearchConfig};
use crate::normalize::Normalizer;
use crate::types::search_result::{SearchError, SearchMetadata, SearchResult};
pub use ordering::rank_hits;
pub use ranking::{idf, ScoreBreakdown, Scorer, TfIdfScorer};

/// Single entry point: corpus in, query in, ranking out.
///
/// The loaded corpus is reused across calls while its version (content plus
/// configuration) is unchanged.
pub struct SearchEngine<S = TfIdfScorer> {
	config: SearchConfig,
	normalizer: Normalizer,
	scorer: S,
	index: Option<CorpusIndex>,
}

impl SearchEngine<TfIdfScorer> {
	pub fn new(config: SearchConfig) -> Self {
		let scorer = TfIdfScorer::new(config.idf);
		Self::with_scorer(config, scorer)
	}
}

impl Default for SearchEngine<TfIdfScorer> {
	fn default() -> Self {
		Self::new(SearchConfig::v0())
	}
}

impl<S> SearchEngine<S>
where
	S: Scorer,
{
	/// Build an engine around a custom scorer. When the scorer reports an
	/// IDF variant, it overrides `config.idf` so the manifest and corpus
	/// version describe the scoring actually applied.
	pub fn with_scorer(mut config: SearchConfig, scorer: S) -> Self {
		if let Some(variant) = scorer.idf_variant() {
			config.idf = variant;
		}
		let normalizer = Normalizer::from_config(&config);
		Self {
			config,
			normalizer,
			scorer,
			index: None,
		}
	}

	/// Replace the normalizer, e.g. to use an arbitrary stop-word set.
	/// Drops any loaded corpus since its tokens came from the old one.
	pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
		self.normalizer = normalizer;
		self.index = None;
		self
	}

	pub fn config(&self) -> &SearchConfig {
		&self.config
	}

	pub fn normalizer(&self) -> &Normalizer {
		&self.normalizer
	}

	pub fn index(&self) -> Option<&CorpusIndex> {
		self.index.as_ref()
	}

	/// Index `raw_corpus`, or keep the current index if it was built from the
	/// same corpus. A failed load leaves the previous index in place.
	pub fn load<N, T>(&mut self, raw_corpus: &[(N, T)]) -> Result<&CorpusIndex, IndexError>
	where
		N: AsRef<str>,
		T: AsRef<str>,
	{
		let version = corpus_version(&self.config, raw_corpus)?;

		let index = match self.index.take() {
			Some(index) if index.corpus_version() == version => {
				debug!(corpus_version = %version, "Corpus unchanged, reusing index");
				index
			}
			previous => match CorpusIndex::load_with(raw_corpus, &self.normalizer, &self.config) {
				Ok(index) => index,
				Err(e) => {
					self.index = previous;
					return Err(e);
				}
			},
		};

		let index: &CorpusIndex = self.index.insert(index);
		Ok(index)
	}

	/// Rank the loaded corpus against `raw_query`. With no corpus loaded the
	/// result is empty.
	pub fn query(&self, raw_query: &str) -> SearchResult {
		let query_terms = self.normalizer.normalize(raw_query);

		let Some(index) = &self.index else {
			return SearchResult {
				hits: Vec::new(),
				search: SearchMetadata {
					query: raw_query.to_string(),
					query_terms,
					terms: Vec::new(),
					documents_considered: 0,
					documents_matched: 0,
				},
			};
		};

		// 1. Scoring Phase
		let breakdown = self.scorer.score(&query_terms, index);

		// 2. Ordering Phase
		let hits = rank_hits(index, &breakdown.scores);

		debug!(
			query = raw_query,
			terms = query_terms.len(),
			documents = index.document_count(),
			hits = hits.len(),
			"Search completed"
		);

		let search = SearchMetadata {
			query: raw_query.to_string(),
			query_terms,
			terms: breakdown.terms,
			documents_considered: index.document_count(),
			documents_matched: hits.len(),
		};

		SearchResult { hits, search }
	}

	/// Load (or reuse) `raw_corpus`, then rank it against `raw_query`.
	pub fn search<N, T>(
		&mut self,
		raw_corpus: &[(N, T)],
		raw_query: &str,
	) -> Result<SearchResult, SearchError>
	where
		N: AsRef<str>,
		T: AsRef<str>,
	{
		self.load(raw_corpus)?;
		Ok(self.query(raw_query))
	}
}
