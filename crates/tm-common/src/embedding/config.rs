#[derive(Debug, Clone)]
pub struct EmbedderConfig {
    /// Embedding dimension. Mirrors the 384 of the MiniLM-class sentence
    /// encoders the hash encoder stands in for.
    pub dimension: usize,
}

impl Default for EmbedderConfig {
    fn default() -> Self {
        Self { dimension: 384 }
    }
}

impl EmbedderConfig {
    pub fn from_env() -> Self {
        Self {
            dimension: std::env::var("TM_EMBED_DIMENSION")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(384),
        }
    }
}
