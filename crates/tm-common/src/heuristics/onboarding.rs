use serde::Serialize;

pub const DEFAULT_MAX_TASKS: usize = 12;

#[derive(Debug, Clone, Serialize)]
pub struct OnboardingTask {
    pub phase: &'static str,
    pub title: String,
    pub description: String,
    pub duration: &'static str,
    pub order: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct OnboardingPlan {
    pub tasks: Vec<OnboardingTask>,
    pub rationale: String,
}

/// Role profile detected from job-title keywords; drives which checklist
/// blocks apply.
#[derive(Debug, Clone, Copy)]
struct RoleProfile {
    engineer: bool,
    senior: bool,
    manager: bool,
}

impl RoleProfile {
    fn detect(job_title: &str) -> Self {
        let title = job_title.to_lowercase();
        Self {
            engineer: ["engineer", "developer", "programmer"]
                .iter()
                .any(|word| title.contains(word)),
            senior: title.contains("senior") || title.contains("lead"),
            manager: title.contains("manager"),
        }
    }
}

/// Phase-based onboarding checklist from job-title keywords, capped at
/// `max_tasks`.
pub fn generate_checklist(job_title: &str, max_tasks: Option<usize>) -> OnboardingPlan {
    let role = RoleProfile::detect(job_title);
    let mut tasks: Vec<OnboardingTask> = Vec::new();
    let mut order = 0;
    let mut push = |tasks: &mut Vec<OnboardingTask>,
                    phase: &'static str,
                    title: &str,
                    description: &str,
                    duration: &'static str| {
        tasks.push(OnboardingTask {
            phase,
            title: title.into(),
            description: description.into(),
            duration,
            order,
        });
        order += 1;
    };

    push(
        &mut tasks,
        "day1",
        "Account setup and access",
        "Create email, Slack, and repository access. Set up 2FA and security keys.",
        "1h",
    );
    push(
        &mut tasks,
        "day1",
        "Team introductions",
        "Meet your immediate team members and understand team structure.",
        "2h",
    );

    if role.engineer {
        push(
            &mut tasks,
            "week1",
            "Development environment setup",
            "Install IDE, dependencies, and run local development server. Clone repos and run tests.",
            "4h",
        );
        push(
            &mut tasks,
            "week1",
            "Codebase walkthrough",
            "Review architecture, coding standards, PR process, and CI/CD pipeline.",
            "3h",
        );
    }

    if role.manager {
        push(
            &mut tasks,
            "week1",
            "1:1s with direct reports",
            "Schedule and conduct introductory meetings with each team member.",
            "1w",
        );
    }

    if role.engineer {
        let complexity = if role.senior { "medium" } else { "small" };
        push(
            &mut tasks,
            "month1",
            &format!("Complete first {complexity} feature"),
            &format!(
                "Pick up a {complexity}-sized ticket, implement, test, and deploy with mentor guidance."
            ),
            if role.senior { "2w" } else { "1w" },
        );
    }

    push(
        &mut tasks,
        "month1",
        "Company-wide knowledge sessions",
        "Attend sessions on company values, product roadmap, and cross-team collaboration.",
        "6h",
    );

    if role.senior {
        push(
            &mut tasks,
            "month3",
            "Technical design document",
            "Write and present a technical design for a new feature or improvement.",
            "1w",
        );
    }

    push(
        &mut tasks,
        "month3",
        "90-day review and goal setting",
        "Reflect on onboarding experience and set goals for next quarter with manager.",
        "2h",
    );

    tasks.truncate(max_tasks.unwrap_or(DEFAULT_MAX_TASKS));

    let rationale = format!(
        "Heuristic-based generation: role={}, engineer={}, senior={}, manager={}. Generated {} phase-based tasks.",
        job_title,
        role.engineer,
        role.senior,
        role.manager,
        tasks.len()
    );

    OnboardingPlan { tasks, rationale }
}
