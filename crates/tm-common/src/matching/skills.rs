use std::collections::HashSet;

/// Case-insensitive exact token intersection between a query's required
/// skills and a candidate's skill tokens. Returns lowercased matches, sorted
/// for stable output.
pub fn intersect_skill_tokens(required: &[String], possessed: &[String]) -> Vec<String> {
    let required_set: HashSet<String> = required.iter().map(|s| s.trim().to_lowercase()).collect();
    let possessed_set: HashSet<String> =
        possessed.iter().map(|s| s.trim().to_lowercase()).collect();

    let mut matched: Vec<String> = required_set
        .intersection(&possessed_set)
        .filter(|s| !s.is_empty())
        .cloned()
        .collect();
    matched.sort();
    matched
}

/// Permissive substring detection of target skills inside free resume text.
///
/// Each skill is tried as its lowercase form, with hyphens removed and with
/// hyphens replaced by spaces; the haystack is the lowercased text plus a
/// collapsed variant with `.` and `-` stripped, so "nodejs" finds "Node.js".
/// Deliberately not tokenized: a skill that happens to be a substring of an
/// unrelated word still counts. Matches keep the target-skill order.
pub fn detect_skills_in_text(target_skills: &[String], text: &str) -> Vec<String> {
    let haystack = text.to_lowercase();
    let collapsed: String = haystack.chars().filter(|c| *c != '.' && *c != '-').collect();

    target_skills
        .iter()
        .map(|skill| skill.trim().to_lowercase())
        .filter(|skill| !skill.is_empty())
        .filter(|skill| {
            let variants = [skill.clone(), skill.replace('-', ""), skill.replace('-', " ")];
            variants
                .iter()
                .any(|needle| haystack.contains(needle) || collapsed.contains(needle))
        })
        .collect()
}
