use serde::Serialize;

pub const DEFAULT_QUESTION_LIMIT: usize = 8;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewQuestion {
    /// Skill the question probes; absent for role-level questions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill: Option<String>,
    pub question: String,
    pub category: &'static str,
}

/// Question-bank entries keyed by lowercase skill token.
const SKILL_BANK: &[(&str, &str)] = &[
    ("python", "Walk through a Python service you built: how did you structure modules and manage dependencies?"),
    ("javascript", "How do you keep asynchronous JavaScript code readable and testable?"),
    ("typescript", "Where has TypeScript's type system caught a real bug for you, and where has it gotten in the way?"),
    ("react", "How do you decide between component state, context, and an external store in a React app?"),
    ("nodejs", "Describe how you have profiled and fixed an event-loop bottleneck in a Node.js service."),
    ("rust", "Tell us about a borrow-checker fight you lost and what design change resolved it."),
    ("go", "How do you structure error handling and retries in a Go service under load?"),
    ("sql", "Describe a slow query you diagnosed: how did you read the plan and what fixed it?"),
    ("docker", "What goes into your production Dockerfiles that a tutorial image leaves out?"),
    ("kubernetes", "How do you roll out a risky change across a Kubernetes fleet?"),
    ("aws", "Which AWS services have you run in production, and what surprised you about operating them?"),
];

const GENERIC_TECHNICAL: &[&str] = &[
    "Describe the production incident you learned the most from.",
    "How do you decide a piece of code needs a test, and what kind?",
];

const BEHAVIORAL: &[&str] = &[
    "Tell us about a time you disagreed with a teammate on a technical decision. How was it resolved?",
    "Describe a project that slipped. What did you change about how you plan?",
];

/// Interview questions for a role: per-skill bank hits first, then generic
/// technical and behavioral fills, capped at `limit`.
pub fn generate_questions(
    job_title: &str,
    required_skills: &[String],
    limit: Option<usize>,
) -> Vec<InterviewQuestion> {
    let limit = limit.unwrap_or(DEFAULT_QUESTION_LIMIT);
    let mut questions: Vec<InterviewQuestion> = Vec::new();

    for skill in required_skills {
        let token = skill.trim().to_lowercase();
        if let Some((_, question)) = SKILL_BANK.iter().find(|(name, _)| *name == token) {
            questions.push(InterviewQuestion {
                skill: Some(token),
                question: (*question).into(),
                category: "technical",
            });
        } else if !token.is_empty() {
            questions.push(InterviewQuestion {
                skill: Some(token.clone()),
                question: format!(
                    "Describe your hands-on experience with {token}: a project where it mattered and what you would do differently."
                ),
                category: "technical",
            });
        }
    }

    for question in GENERIC_TECHNICAL {
        questions.push(InterviewQuestion {
            skill: None,
            question: (*question).into(),
            category: "technical",
        });
    }

    questions.push(InterviewQuestion {
        skill: None,
        question: format!("What attracts you to this {job_title} role?"),
        category: "behavioral",
    });
    for question in BEHAVIORAL {
        questions.push(InterviewQuestion {
            skill: None,
            question: (*question).into(),
            category: "behavioral",
        });
    }

    questions.truncate(limit);
    questions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn known_skills_hit_the_bank() {
        let questions = generate_questions("Backend Engineer", &skills(&["Python", "SQL"]), None);

        assert_eq!(questions[0].skill.as_deref(), Some("python"));
        assert!(questions[0].question.contains("Python service"));
        assert_eq!(questions[1].skill.as_deref(), Some("sql"));
    }

    #[test]
    fn unknown_skills_get_a_templated_question() {
        let questions = generate_questions("Engineer", &skills(&["cobol"]), None);

        assert_eq!(questions[0].skill.as_deref(), Some("cobol"));
        assert!(questions[0].question.contains("cobol"));
    }

    #[test]
    fn behavioral_questions_mention_the_role() {
        let questions = generate_questions("Staff Engineer", &[], None);

        assert!(questions
            .iter()
            .any(|q| q.category == "behavioral" && q.question.contains("Staff Engineer")));
    }

    #[test]
    fn limit_caps_the_list() {
        let questions = generate_questions(
            "Engineer",
            &skills(&["python", "react", "sql", "go", "rust"]),
            Some(4),
        );

        assert_eq!(questions.len(), 4);
    }
}
