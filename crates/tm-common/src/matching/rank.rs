use std::cmp::Ordering;

use crate::{RankedResult, ScoredCandidate};

/// Order scored candidates by composite score descending and truncate to
/// `top_k`.
///
/// The sort is stable, so candidates with equal composites keep their
/// caller-supplied relative order and ties never reorder across runs.
/// `total_processed` is the number of candidates submitted to the ranking
/// call, independent of truncation and of malformed-candidate exclusion.
pub fn rank(
    mut scored: Vec<ScoredCandidate>,
    top_k: usize,
    total_processed: usize,
) -> RankedResult {
    scored.sort_by(|a, b| {
        b.composite
            .partial_cmp(&a.composite)
            .unwrap_or(Ordering::Equal)
    });
    scored.truncate(top_k);

    RankedResult {
        entries: scored,
        total_processed,
    }
}
