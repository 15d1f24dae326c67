use std::sync::{Arc, PoisonError, RwLock};

use tracing::info;

use super::TextEmbedder;
use crate::MatchError;

/// Where the process-wide encoder is in its two-phase lifecycle.
///
/// Inference is only reachable from `Ready`; every other phase yields
/// `MatchError::ModelUnavailable`. Once `Ready`, the encoder is read-only and
/// concurrent inference needs no mutual exclusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelPhase {
    Uninitialized,
    Loading,
    Ready,
}

impl ModelPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelPhase::Uninitialized => "uninitialized",
            ModelPhase::Loading => "loading",
            ModelPhase::Ready => "ready",
        }
    }
}

enum CellState {
    Uninitialized,
    Loading,
    Ready(Arc<dyn TextEmbedder>),
}

/// Process-wide holder for the loaded encoder.
///
/// The lock guards only the phase transitions at startup; after `install`
/// every reader clones the `Arc` and the encoder is shared lock-free between
/// in-flight ranking calls.
pub struct ModelCell {
    state: RwLock<CellState>,
}

impl ModelCell {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(CellState::Uninitialized),
        }
    }

    pub fn phase(&self) -> ModelPhase {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        match *state {
            CellState::Uninitialized => ModelPhase::Uninitialized,
            CellState::Loading => ModelPhase::Loading,
            CellState::Ready(_) => ModelPhase::Ready,
        }
    }

    /// Mark the cell as loading. Requests arriving between this and
    /// `install` see `ModelUnavailable` rather than undefined behavior.
    pub fn begin_loading(&self) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if matches!(*state, CellState::Uninitialized) {
            *state = CellState::Loading;
        }
    }

    /// Install the loaded encoder, moving the cell to `Ready`.
    pub fn install(&self, embedder: Arc<dyn TextEmbedder>) {
        info!(
            embedder = embedder.name(),
            version = embedder.version(),
            dimension = embedder.dimension(),
            "embedding model ready"
        );
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        *state = CellState::Ready(embedder);
    }

    /// Load the encoder selected by the environment. The hash encoder loads
    /// instantly; the `Loading` hop is kept so heavier backends slot in
    /// without changing callers.
    pub fn load_from_env(&self) {
        self.begin_loading();
        self.install(super::create_embedder_from_env());
    }

    /// The ready encoder, or `ModelUnavailable` naming the current phase.
    pub fn embedder(&self) -> Result<Arc<dyn TextEmbedder>, MatchError> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        match &*state {
            CellState::Ready(embedder) => Ok(Arc::clone(embedder)),
            other => {
                let phase = match other {
                    CellState::Uninitialized => ModelPhase::Uninitialized,
                    CellState::Loading => ModelPhase::Loading,
                    CellState::Ready(_) => unreachable!(),
                };
                Err(MatchError::ModelUnavailable(phase.as_str().into()))
            }
        }
    }
}

impl Default for ModelCell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::{EmbedderConfig, HashEncoder};

    #[test]
    fn starts_uninitialized_and_refuses_inference() {
        let cell = ModelCell::new();

        assert_eq!(cell.phase(), ModelPhase::Uninitialized);
        match cell.embedder() {
            Err(MatchError::ModelUnavailable(phase)) => assert_eq!(phase, "uninitialized"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn loading_phase_still_refuses_inference() {
        let cell = ModelCell::new();
        cell.begin_loading();

        assert_eq!(cell.phase(), ModelPhase::Loading);
        assert!(cell.embedder().is_err());
    }

    #[test]
    fn install_makes_the_encoder_available() {
        let cell = ModelCell::new();
        cell.begin_loading();
        cell.install(Arc::new(HashEncoder::new(EmbedderConfig::default())));

        assert_eq!(cell.phase(), ModelPhase::Ready);
        let embedder = cell.embedder().expect("ready");
        assert_eq!(embedder.name(), "hash");
        assert_eq!(embedder.dimension(), 384);
    }
}
