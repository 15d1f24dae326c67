use super::Embedding;

/// Cosine similarity between two vectors.
///
/// Returns 0.0 when either vector has zero norm (empty-text embeddings) and
/// on dimension mismatch, which is logged. Callers never see a division by
/// zero or an error from here.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        tracing::warn!(
            a_len = a.len(),
            b_len = b.len(),
            "embedding dimension mismatch; returning zero similarity"
        );
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

/// Full query x candidate similarity matrix; `result[q][c]` scores query `q`
/// against candidate `c`. The single-query ranking pipeline reads row 0.
pub fn similarity_matrix(queries: &[Embedding], candidates: &[Embedding]) -> Vec<Vec<f32>> {
    queries
        .iter()
        .map(|query| {
            candidates
                .iter()
                .map(|candidate| cosine_similarity(&query.vector, &candidate.vector))
                .collect()
        })
        .collect()
}
