use serde::Serialize;

use crate::{RankedResult, ScoredCandidate};

/// One ranked candidate in the wire format shared by both ranking endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCandidateDto {
    pub id: String,
    pub name: String,
    pub score: f64,
    pub matched_skills: Vec<String>,
    pub explanation: String,
}

impl RankedCandidateDto {
    fn from_scored(scored: &ScoredCandidate, score: f64) -> Self {
        Self {
            id: scored.id.clone(),
            name: scored.name.clone(),
            score,
            matched_skills: scored.matched_skills.clone(),
            explanation: scored.explanation.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsMatchResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    pub top_candidates: Vec<RankedCandidateDto>,
    pub total_processed: usize,
    /// Always false here: this response came from the real ranking engine,
    /// unlike the heuristic endpoints which mark themselves as fallbacks.
    pub fallback: bool,
}

impl SkillsMatchResponse {
    /// Employee matching returns the raw composite, unrounded.
    pub fn from_result(project_id: Option<String>, result: &RankedResult) -> Self {
        Self {
            project_id,
            top_candidates: result
                .entries
                .iter()
                .map(|entry| RankedCandidateDto::from_scored(entry, entry.composite))
                .collect(),
            total_processed: result.total_processed,
            fallback: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankResumesResponse {
    pub top_candidates: Vec<RankedCandidateDto>,
    pub total_processed: usize,
}

impl RankResumesResponse {
    /// Resume ranking rounds the percent score to one decimal place.
    pub fn from_result(result: &RankedResult) -> Self {
        Self {
            top_candidates: result
                .entries
                .iter()
                .map(|entry| RankedCandidateDto::from_scored(entry, round1(entry.composite)))
                .collect(),
            total_processed: result.total_processed,
        }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with(composite: f64) -> RankedResult {
        RankedResult {
            entries: vec![ScoredCandidate {
                id: "c1".into(),
                name: "Dana".into(),
                similarity: 0.5,
                composite,
                matched_skills: vec!["python".into()],
                explanation: "why".into(),
            }],
            total_processed: 4,
        }
    }

    #[test]
    fn employee_response_keeps_raw_score() {
        let response = SkillsMatchResponse::from_result(Some("proj-1".into()), &result_with(0.6449));

        assert_eq!(response.top_candidates[0].score, 0.6449);
        assert_eq!(response.total_processed, 4);
        assert!(!response.fallback);
    }

    #[test]
    fn resume_response_rounds_to_one_decimal() {
        let response = RankResumesResponse::from_result(&result_with(64.49));

        assert_eq!(response.top_candidates[0].score, 64.5);
    }

    #[test]
    fn serializes_camel_case_field_names() {
        let response = SkillsMatchResponse::from_result(None, &result_with(0.5));
        let json = serde_json::to_value(&response).expect("serialize");

        assert!(json.get("topCandidates").is_some());
        assert!(json.get("totalProcessed").is_some());
        assert!(json.get("projectId").is_none());
        assert!(json["topCandidates"][0].get("matchedSkills").is_some());
    }
}
