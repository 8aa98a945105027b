use std::cmp::Ordering;

use crate::index::CorpusIndex;
use crate::types::search_result::SearchHit;

/// Turn per-position scores into ranked hits.
///
/// Documents whose accumulated score is exactly zero are dropped; negative
/// scores are kept. Sorting is stable, so equal scores stay in corpus load
/// order.
pub fn rank_hits(index: &CorpusIndex, scores: &[f64]) -> Vec<SearchHit> {
    let mut hits: Vec<SearchHit> = index
        .documents()
        .iter()
        .zip(scores)
        .filter(|(_, score)| **score != 0.0)
        .map(|(doc, score)| SearchHit {
            name: doc.name.as_str().to_string(),
            score: *score,
        })
        .collect();

    // Descending score; Vec::sort_by is stable
    hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    debug_assert!(hits.windows(2).all(|w| w[0].score >= w[1].score));

    hits
}
