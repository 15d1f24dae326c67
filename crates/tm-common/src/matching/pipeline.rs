use tracing::debug;

use super::{rank::rank, scoring::ScoringPolicy};
use crate::embedding::{cosine_similarity, TextEmbedder};
use crate::{Candidate, MatchError, RankedResult};

/// One stateless ranking call: embed query + candidates in a single batch,
/// score similarity per candidate, blend per the active policy, sort and
/// truncate.
///
/// - Empty candidate list returns immediately without touching the encoder.
/// - Candidates with nothing embeddable are excluded from embedding and from
///   the ranked list, but still count toward `total_processed`.
/// - An embedding failure fails the whole call; there is no local retry.
pub fn run_ranking(
    embedder: &dyn TextEmbedder,
    policy: &ScoringPolicy,
    query_text: &str,
    candidates: &[Candidate],
    top_k: usize,
) -> Result<RankedResult, MatchError> {
    if candidates.is_empty() {
        return Ok(RankedResult::empty());
    }

    let mut embeddable: Vec<(usize, String)> = Vec::with_capacity(candidates.len());
    for (idx, candidate) in candidates.iter().enumerate() {
        match candidate.embed_text() {
            Some(text) => embeddable.push((idx, text)),
            None => debug!(
                candidate_id = %candidate.id,
                "candidate has no embeddable text; excluded from ranking"
            ),
        }
    }

    if embeddable.is_empty() {
        return Ok(RankedResult {
            entries: Vec::new(),
            total_processed: candidates.len(),
        });
    }

    // One model invocation for the query and every candidate.
    let mut texts: Vec<&str> = Vec::with_capacity(embeddable.len() + 1);
    texts.push(query_text);
    texts.extend(embeddable.iter().map(|(_, text)| text.as_str()));
    let embeddings = embedder.embed_batch(&texts)?;

    let query_embedding = &embeddings[0];
    let scored = embeddable
        .iter()
        .zip(&embeddings[1..])
        .map(|((idx, _), embedding)| {
            let similarity = cosine_similarity(&query_embedding.vector, &embedding.vector);
            policy.score(&candidates[*idx], similarity)
        })
        .collect();

    Ok(rank(scored, top_k, candidates.len()))
}
