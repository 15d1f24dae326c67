use super::skills::{detect_skills_in_text, intersect_skill_tokens};
use super::weights::{
    EMPLOYEE_WEIGHTS, EXCELLENT_BAND_MIN, EXCELLENT_SKILLS_NAMED, GOOD_BAND_MIN, GOOD_SKILLS_NAMED,
    MODERATE_SKILLS_NAMED,
};
use crate::{Candidate, ScoredCandidate};

/// Which composite formula and skill-match rule apply to a ranking call.
///
/// Both policies share the Vectorizer, Similarity Engine and Ranker; only the
/// blend and the matched-skill detection differ.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoringPolicy {
    /// Internal staffing: blend similarity with remaining availability,
    /// match skills by exact token intersection.
    EmployeeMatch { required_skills: Vec<String> },
    /// Inbound resumes: percent-scaled similarity, skills detected by
    /// substring containment in the resume text.
    ResumeRank { key_skills: Vec<String> },
}

impl ScoringPolicy {
    pub fn score(&self, candidate: &Candidate, similarity: f32) -> ScoredCandidate {
        match self {
            ScoringPolicy::EmployeeMatch { required_skills } => {
                score_employee(candidate, similarity, required_skills)
            }
            ScoringPolicy::ResumeRank { key_skills } => {
                score_resume(candidate, similarity, key_skills)
            }
        }
    }
}

fn score_employee(
    candidate: &Candidate,
    similarity: f32,
    required_skills: &[String],
) -> ScoredCandidate {
    // Missing allocation contributes 0 to the availability term rather than
    // failing the candidate.
    let availability = candidate
        .current_allocation_percent
        .map(|pct| (100.0 - pct) / 100.0)
        .unwrap_or(0.0);

    let composite = EMPLOYEE_WEIGHTS.similarity * f64::from(similarity)
        + EMPLOYEE_WEIGHTS.availability * availability;

    let matched_skills = intersect_skill_tokens(required_skills, &candidate.skills);

    let explanation = match candidate.current_allocation_percent {
        Some(pct) => format!(
            "Semantic similarity {:.2}, availability {:.2} (current allocation {}%)",
            similarity, availability, pct
        ),
        None => format!(
            "Semantic similarity {:.2}, availability {:.2} (allocation unknown)",
            similarity, availability
        ),
    };

    ScoredCandidate {
        id: candidate.id.clone(),
        name: candidate.name.clone(),
        similarity,
        composite,
        matched_skills,
        explanation,
    }
}

fn score_resume(candidate: &Candidate, similarity: f32, key_skills: &[String]) -> ScoredCandidate {
    let composite = f64::from(similarity) * 100.0;

    let text = candidate.embed_text().unwrap_or_default();
    let matched_skills = detect_skills_in_text(key_skills, &text);
    let explanation = resume_explanation(composite, &matched_skills);

    ScoredCandidate {
        id: candidate.id.clone(),
        name: candidate.name.clone(),
        similarity,
        composite,
        matched_skills,
        explanation,
    }
}

/// Band wording for resume scores. Lower bounds are inclusive: exactly 70.0
/// reads as an excellent match.
fn resume_explanation(score: f64, matched: &[String]) -> String {
    let (framing, named) = if score >= EXCELLENT_BAND_MIN {
        (
            "Excellent match: strong alignment with the ideal profile",
            EXCELLENT_SKILLS_NAMED,
        )
    } else if score >= GOOD_BAND_MIN {
        (
            "Good match: solid overlap with the ideal profile",
            GOOD_SKILLS_NAMED,
        )
    } else {
        (
            "Moderate match: partial overlap with the ideal profile",
            MODERATE_SKILLS_NAMED,
        )
    };

    if matched.is_empty() {
        format!("{framing}; no target skills found in the resume text")
    } else {
        let shown = matched
            .iter()
            .take(named)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        format!("{framing}; skills found: {shown}")
    }
}
