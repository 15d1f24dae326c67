pub mod config;
pub mod hash_encoder;
pub mod model;
pub mod similarity;

pub use config::EmbedderConfig;
pub use hash_encoder::HashEncoder;
pub use model::{ModelCell, ModelPhase};
pub use similarity::{cosine_similarity, similarity_matrix};

use std::sync::Arc;
use tracing::warn;

/// A fixed-length vector representation of one input text.
///
/// Every embedding produced within one ranking call shares the dimension of
/// the encoder that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Embedding {
    pub vector: Vec<f32>,
}

impl Embedding {
    pub fn dimension(&self) -> usize {
        self.vector.len()
    }
}

/// Abstract interface over the sentence encoder.
///
/// Implementations:
/// - HashEncoder: feature hashing (deterministic, no model artifact)
/// - ONNX / remote inference services slot in behind the same seam.
///
/// `name()` and `version()` identify the encoder generation in logs, so a
/// model swap is visible in recorded rankings.
pub trait TextEmbedder: Send + Sync + std::fmt::Debug {
    /// Implementation name ("hash", "onnx", ...).
    fn name(&self) -> &'static str;

    /// Encoder generation; bump when token design or weights change.
    fn version(&self) -> &str;

    /// Embedding dimension, constant for the encoder's lifetime.
    fn dimension(&self) -> usize;

    /// Embed all texts in a single model invocation.
    ///
    /// Output length equals input length and `output[i]` corresponds to
    /// `texts[i]`. Empty strings embed to the zero vector rather than
    /// erroring; cosine similarity against it is defined as 0. A failed
    /// invocation fails the whole ranking call; partial or zeroed batches
    /// must never be returned silently.
    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Embedding>, crate::MatchError>;
}

/// Encoder factory. Unknown names fall back to the hash encoder.
pub fn create_embedder(name: &str, config: EmbedderConfig) -> Arc<dyn TextEmbedder> {
    match name {
        "hash" => Arc::new(HashEncoder::new(config)),
        other => {
            warn!(embedder = other, "unknown embedder name; using hash");
            Arc::new(HashEncoder::new(config))
        }
    }
}

/// Read encoder selection and config from the environment
/// (`TM_EMBEDDER`, `TM_EMBED_DIMENSION`).
pub fn create_embedder_from_env() -> Arc<dyn TextEmbedder> {
    let name = std::env::var("TM_EMBEDDER").unwrap_or_else(|_| "hash".into());
    create_embedder(&name, EmbedderConfig::from_env())
}
