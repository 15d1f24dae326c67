use super::{Embedding, EmbedderConfig, TextEmbedder};
use siphasher::sip::SipHasher13;
use std::hash::{Hash, Hasher};

/// Fixed seeds for deterministic hashing.
/// Changing either value changes every embedding; bump `version()` with it.
const HASH_SEED_K0: u64 = 0x7461_6c65_6e74_6d61;
const HASH_SEED_K1: u64 = 0x7463_6820_7631_2e30;

/// Feature-hashing sentence encoder.
///
/// - No model artifact to load; "inference" is a token walk
/// - O(n) in token count, deterministic across processes and platforms
/// - SipHash-1-3 with fixed seeds keeps vectors stable across Rust versions
///
/// Stands in for a pretrained sentence encoder wherever one is not deployed;
/// the rest of the pipeline only sees the `TextEmbedder` seam.
#[derive(Debug)]
pub struct HashEncoder {
    config: EmbedderConfig,
}

impl HashEncoder {
    pub fn new(config: EmbedderConfig) -> Self {
        let mut cfg = config;
        cfg.dimension = cfg.dimension.max(1);
        Self { config: cfg }
    }

    /// Hash a token to a dimension index, deterministically.
    fn hash_token(&self, token: &str) -> usize {
        let mut hasher = SipHasher13::new_with_keys(HASH_SEED_K0, HASH_SEED_K1);
        token.hash(&mut hasher);
        (hasher.finish() as usize) % self.config.dimension
    }

    fn embed_one(&self, text: &str) -> Embedding {
        let mut vector = vec![0.0f32; self.config.dimension];

        for token in tokenize(text) {
            let idx = self.hash_token(&token);
            // Sign hashing keeps expected dot products of unrelated texts
            // near zero instead of accumulating positive mass.
            let sign = if self.hash_token(&format!("{token}_sign")) % 2 == 0 {
                1.0
            } else {
                -1.0
            };
            vector[idx] += sign;
        }

        // L2 normalize; the all-zero vector (empty text) stays all-zero.
        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }

        Embedding { vector }
    }
}

impl TextEmbedder for HashEncoder {
    fn name(&self) -> &'static str {
        "hash"
    }

    fn version(&self) -> &str {
        "v1"
    }

    fn dimension(&self) -> usize {
        self.config.dimension
    }

    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Embedding>, crate::MatchError> {
        Ok(texts.iter().map(|text| self.embed_one(text)).collect())
    }
}

/// Lowercased word tokens. `+` and `#` stay inside tokens so "c++" and "c#"
/// survive; everything else non-alphanumeric splits.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#'))
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}
