use serde::Deserialize;

use crate::Candidate;

/// Employee-matching request: a required-skill query plus the employee pool
/// to rank. Default top-K when the caller does not ask for one.
pub const DEFAULT_EMPLOYEE_TOP_K: usize = 5;

/// Resume ranking always returns at most this many candidates.
pub const RESUME_TOP_K_CAP: usize = 10;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsMatchRequest {
    #[serde(default)]
    pub project_id: Option<String>,
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub top_k: Option<usize>,
    pub employees: Vec<EmployeeInput>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub current_allocation_percent: Option<f64>,
}

impl From<EmployeeInput> for Candidate {
    fn from(value: EmployeeInput) -> Self {
        Candidate {
            id: value.id,
            name: value.name,
            text: None,
            skills: value.skills,
            current_allocation_percent: value.current_allocation_percent,
        }
    }
}

/// Resume-ranking request. Field names mirror the upstream caller's wire
/// format: the profile/resume envelope is snake_case, resume fields camelCase.
#[derive(Debug, Clone, Deserialize)]
pub struct RankResumesRequest {
    pub ideal_profile: IdealProfile,
    pub resumes: Vec<ResumeInput>,
    #[serde(default)]
    pub top_k: Option<usize>,
}

/// The "ideal candidate" bundle synthesised from a job description.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdealProfile {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub key_skills: Vec<String>,
    #[serde(default)]
    pub experience_years: Option<f64>,
}

impl IdealProfile {
    /// Query text for embedding: title, summary and skills in one string.
    pub fn query_text(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(title) = &self.title {
            parts.push(title.clone());
        }
        if let Some(summary) = &self.summary {
            parts.push(summary.clone());
        }
        if !self.key_skills.is_empty() {
            parts.push(self.key_skills.join(" "));
        }
        parts.join(" ")
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeInput {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub resume_text: Option<String>,
}

impl From<ResumeInput> for Candidate {
    fn from(value: ResumeInput) -> Self {
        Candidate {
            id: value.id,
            name: value.name,
            text: value.resume_text,
            skills: Vec::new(),
            current_allocation_percent: None,
        }
    }
}
