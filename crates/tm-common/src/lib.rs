pub mod api;
pub mod embedding;
pub mod error;
pub mod heuristics;
pub mod logging;
pub mod matching;

pub use error::MatchError;

// Commonly used data models for ranking calls. Candidates are built fresh
// from caller input per request; nothing here outlives a single call.

/// An entity being ranked: an active employee or an inbound resume.
///
/// `text` carries free text (resume body); employees usually arrive with
/// `skills` only, and the embeddable text is synthesised from them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub text: Option<String>,
    pub skills: Vec<String>,
    pub current_allocation_percent: Option<f64>,
}

impl Candidate {
    /// The text handed to the embedding model, or `None` when the candidate
    /// has nothing embeddable (excluded from ranking, still counted in
    /// `total_processed`).
    pub fn embed_text(&self) -> Option<String> {
        if let Some(text) = &self.text {
            if !text.trim().is_empty() {
                return Some(text.clone());
            }
        }
        if !self.skills.is_empty() {
            return Some(self.skills.join(" "));
        }
        None
    }
}

/// A candidate after scoring. Immutable once built; the ranker only reorders.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub id: String,
    pub name: String,
    /// Raw cosine similarity against the query embedding.
    pub similarity: f32,
    /// Policy composite; the sort key.
    pub composite: f64,
    pub matched_skills: Vec<String>,
    pub explanation: String,
}

/// Final output of one ranking call.
///
/// `total_processed` counts every submitted candidate, including ones
/// excluded as malformed, so callers can tell "fewer results than requested"
/// from "more candidates existed than shown".
#[derive(Debug, Clone, PartialEq)]
pub struct RankedResult {
    pub entries: Vec<ScoredCandidate>,
    pub total_processed: usize,
}

impl RankedResult {
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            total_processed: 0,
        }
    }
}
