use tracing::{debug, trace};

use crate::index::{CorpusIndex, IdfVariant};
use crate::types::search_result::TermStat;

/// Per-document accumulated scores for one query, indexed by corpus position,
/// plus the statistics of every distinct query term.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub scores: Vec<f64>,
    pub terms: Vec<TermStat>,
}

pub trait Scorer {
    fn score(&self, query_terms: &[String], index: &CorpusIndex) -> ScoreBreakdown;

    /// IDF formula this scorer applies, if it uses one of the configured
    /// variants. The engine records it in its configuration.
    fn idf_variant(&self) -> Option<IdfVariant> {
        None
    }
}

/// `ln(N / (1 + df))` under the given variant.
pub fn idf(document_count: usize, document_frequency: usize, variant: IdfVariant) -> f64 {
    let raw = (document_count as f64 / (1 + document_frequency) as f64).ln();
    match variant {
        IdfVariant::Unclamped => raw,
        IdfVariant::ZeroFloored => raw.max(0.0),
    }
}

/// v0: TF-IDF Scorer
///
/// The outer loop runs over every query token occurrence, so a term repeated
/// in the query adds its contribution once per repetition. Document
/// frequencies are computed once per call over the distinct terms.
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfScorer {
    variant: IdfVariant,
}

impl TfIdfScorer {
    pub fn new(variant: IdfVariant) -> Self {
        Self { variant }
    }
}

impl Scorer for TfIdfScorer {
    fn score(&self, query_terms: &[String], index: &CorpusIndex) -> ScoreBreakdown {
        let document_count = index.document_count();
        let mut scores = vec![0.0_f64; document_count];

        let frequencies = index.document_frequencies(query_terms);
        debug!(?frequencies, "Document frequencies for query terms");

        let terms: Vec<TermStat> = frequencies
            .into_iter()
            .map(|(term, df)| {
                let occurrences = query_terms.iter().filter(|t| **t == term).count();
                let idf = (df > 0).then(|| idf(document_count, df, self.variant));
                TermStat {
                    term,
                    occurrences,
                    document_frequency: df,
                    idf,
                }
            })
            .collect();

        for token in query_terms {
            let Some(idf) = terms
                .iter()
                .find(|stat| stat.term == *token)
                .and_then(|stat| stat.idf)
            else {
                debug!(term = %token, "Term not found in any document");
                continue;
            };
            debug!(term = %token, idf, "Scoring term");

            for (pos, doc) in index.documents().iter().enumerate() {
                if !doc.contains(token) {
                    continue;
                }
                let tf = doc.term_frequency(token);
                let contribution = tf * idf;
                trace!(document = %doc.name, term = %token, tf, contribution, "TF-IDF contribution");
                scores[pos] += contribution;
            }
        }

        ScoreBreakdown { scores, terms }
    }

    fn idf_variant(&self) -> Option<IdfVariant> {
        Some(self.variant)
    }
}
