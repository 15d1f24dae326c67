use axum::Json;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use tm_common::heuristics::{
    insight::{attrition_insight, AttritionInsight},
    onboarding::{generate_checklist, OnboardingTask},
    policy::{answer_query, PolicySource},
    questions::{generate_questions as build_questions, InterviewQuestion},
};

use crate::error::ApiError;

// Heuristic endpoints: deterministic rule/table output, always marked
// `fallback: true` to distinguish them from the ranking engine's responses.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingRequest {
    #[serde(default)]
    pub request_id: Option<String>,
    pub job_title: String,
    #[serde(default)]
    pub job_description: Option<String>,
    #[serde(default)]
    pub constraints: Option<OnboardingConstraints>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingConstraints {
    #[serde(default)]
    pub max_tasks: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingResponse {
    pub request_id: String,
    pub fallback: bool,
    pub generated_checklist: Vec<OnboardingTask>,
    pub rationale: String,
    pub sources: Vec<SourceRef>,
}

#[derive(Debug, Serialize)]
pub struct SourceRef {
    pub r#type: &'static str,
    pub snippet: String,
}

pub async fn generate_onboarding(
    Json(request): Json<OnboardingRequest>,
) -> Result<Json<OnboardingResponse>, ApiError> {
    if request.job_title.trim().is_empty() {
        return Err(ApiError::BadRequest("jobTitle must not be empty".into()));
    }

    let max_tasks = request.constraints.and_then(|c| c.max_tasks);
    let plan = generate_checklist(&request.job_title, max_tasks);

    let sources = request
        .job_description
        .as_deref()
        .map(|description| {
            vec![SourceRef {
                r#type: "job_description",
                snippet: description.chars().take(200).collect(),
            }]
        })
        .unwrap_or_default();

    Ok(Json(OnboardingResponse {
        request_id: request
            .request_id
            .unwrap_or_else(|| Ulid::new().to_string()),
        fallback: true,
        generated_checklist: plan.tasks,
        rationale: plan.rationale,
        sources,
    }))
}

#[derive(Debug, Deserialize)]
pub struct QuestionsRequest {
    pub job_title: String,
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<InterviewQuestion>,
    pub fallback: bool,
}

pub async fn generate_questions(
    Json(request): Json<QuestionsRequest>,
) -> Result<Json<QuestionsResponse>, ApiError> {
    if request.job_title.trim().is_empty() {
        return Err(ApiError::BadRequest("job_title must not be empty".into()));
    }

    let questions = build_questions(&request.job_title, &request.required_skills, request.limit);

    Ok(Json(QuestionsResponse {
        questions,
        fallback: true,
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyQueryRequest {
    pub query: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PolicyQueryResponse {
    pub answer: String,
    pub sources: Vec<PolicySource>,
    pub confidence: f64,
    pub fallback: bool,
}

pub async fn query_policy(
    Json(request): Json<PolicyQueryRequest>,
) -> Result<Json<PolicyQueryResponse>, ApiError> {
    if request.query.trim().is_empty() {
        return Err(ApiError::BadRequest("query must not be empty".into()));
    }

    let answer = answer_query(&request.query);

    Ok(Json(PolicyQueryResponse {
        answer: answer.answer,
        sources: answer.sources,
        confidence: answer.confidence,
        fallback: true,
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightRequest {
    pub employee_id: String,
    #[serde(default)]
    pub review_scores: Vec<f64>,
    #[serde(default)]
    pub current_allocation_percent: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightResponse {
    pub employee_id: String,
    #[serde(flatten)]
    pub insight: AttritionInsight,
    pub fallback: bool,
}

pub async fn perf_insight(
    Json(request): Json<InsightRequest>,
) -> Result<Json<InsightResponse>, ApiError> {
    let insight = attrition_insight(&request.review_scores, request.current_allocation_percent);

    Ok(Json(InsightResponse {
        employee_id: request.employee_id,
        insight,
        fallback: true,
    }))
}
