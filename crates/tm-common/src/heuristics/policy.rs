use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PolicySource {
    pub doc: &'static str,
    pub page: u32,
    pub snippet: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PolicyAnswer {
    pub answer: String,
    pub sources: Vec<PolicySource>,
    pub confidence: f64,
}

struct PolicyEntry {
    keywords: &'static [&'static str],
    answer: &'static str,
    source: PolicySource,
    confidence: f64,
}

/// Small keyword-matched policy table. A retrieval pipeline would replace
/// this wholesale; the lookup shape is what callers depend on.
const POLICY_TABLE: &[PolicyEntry] = &[
    PolicyEntry {
        keywords: &["leave", "paid", "vacation", "pto"],
        answer: "According to our demo policy, engineers receive 18 paid leave days per year.",
        source: PolicySource {
            doc: "policy_handbook_demo.pdf",
            page: 3,
            snippet: "Paid leaves: All full-time employees receive 18 days of paid leave annually...",
        },
        confidence: 0.75,
    },
    PolicyEntry {
        keywords: &["remote", "wfh", "work from home"],
        answer: "Employees may work remotely up to three days per week with manager approval.",
        source: PolicySource {
            doc: "policy_handbook_demo.pdf",
            page: 7,
            snippet: "Remote work: Up to three days per week remote, subject to manager approval...",
        },
        confidence: 0.7,
    },
    PolicyEntry {
        keywords: &["probation", "probationary"],
        answer: "New hires complete a three-month probationary period with a review at the end.",
        source: PolicySource {
            doc: "policy_handbook_demo.pdf",
            page: 2,
            snippet: "Probation: The first three months of employment constitute a probationary period...",
        },
        confidence: 0.7,
    },
];

/// Answer a policy question by keyword match over the table. Unknown topics
/// return the no-answer stub with zero confidence.
pub fn answer_query(query: &str) -> PolicyAnswer {
    let query = query.to_lowercase();

    for entry in POLICY_TABLE {
        if entry.keywords.iter().any(|keyword| query.contains(keyword)) {
            return PolicyAnswer {
                answer: entry.answer.into(),
                sources: vec![entry.source.clone()],
                confidence: entry.confidence,
            };
        }
    }

    PolicyAnswer {
        answer: "I don't have enough information to answer that question in demo mode.".into(),
        sources: Vec::new(),
        confidence: 0.0,
    }
}
