use axum::{extract::State, Json};

use tm_common::api::rank_request::{
    RankResumesRequest, SkillsMatchRequest, DEFAULT_EMPLOYEE_TOP_K, RESUME_TOP_K_CAP,
};
use tm_common::api::rank_response::{RankResumesResponse, SkillsMatchResponse};
use tm_common::matching::{run_ranking, ScoringPolicy};
use tm_common::Candidate;

use crate::error::ApiError;
use crate::SharedState;

const EMPLOYEE_TOP_K_MAX: usize = 100;

/// Rank active employees against a required-skill query.
///
/// Scores are the raw composite; `fallback` is always false because this is
/// the real engine, not one of the heuristic endpoints.
pub async fn skills_match(
    State(state): State<SharedState>,
    Json(request): Json<SkillsMatchRequest>,
) -> Result<Json<SkillsMatchResponse>, ApiError> {
    if request.required_skills.is_empty() {
        return Err(ApiError::BadRequest("requiredSkills must not be empty".into()));
    }

    let top_k = request
        .top_k
        .unwrap_or(DEFAULT_EMPLOYEE_TOP_K)
        .clamp(1, EMPLOYEE_TOP_K_MAX);

    // Resolve the encoder before any work: no model, no ranking.
    let embedder = state.model.embedder()?;

    let query_text = request.required_skills.join(" ");
    let policy = ScoringPolicy::EmployeeMatch {
        required_skills: request.required_skills,
    };
    let candidates: Vec<Candidate> = request.employees.into_iter().map(Candidate::from).collect();

    let result = run_ranking(embedder.as_ref(), &policy, &query_text, &candidates, top_k)?;

    Ok(Json(SkillsMatchResponse::from_result(
        request.project_id,
        &result,
    )))
}

/// Rank inbound resumes against an ideal profile. Capped at 10 results;
/// scores are percent values rounded to one decimal.
pub async fn rank_resumes(
    State(state): State<SharedState>,
    Json(request): Json<RankResumesRequest>,
) -> Result<Json<RankResumesResponse>, ApiError> {
    let query_text = request.ideal_profile.query_text();
    if query_text.trim().is_empty() {
        return Err(ApiError::BadRequest("ideal_profile has no usable text".into()));
    }

    let top_k = request
        .top_k
        .unwrap_or(RESUME_TOP_K_CAP)
        .clamp(1, RESUME_TOP_K_CAP);

    let embedder = state.model.embedder()?;

    let policy = ScoringPolicy::ResumeRank {
        key_skills: request.ideal_profile.key_skills.clone(),
    };
    let candidates: Vec<Candidate> = request.resumes.into_iter().map(Candidate::from).collect();

    let result = run_ranking(embedder.as_ref(), &policy, &query_text, &candidates, top_k)?;

    Ok(Json(RankResumesResponse::from_result(&result)))
}
