use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactor {
    pub feature: &'static str,
    pub impact: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttritionInsight {
    pub attrition_risk: f64,
    pub top_factors: Vec<RiskFactor>,
    pub explain: String,
}

/// Rule-based attrition estimate from recent review scores (1-5 scale) and
/// the current allocation percent. Baseline 0.5; low reviews raise risk, high
/// reviews lower it, heavy allocation nudges it up. Clamped to [0, 1].
pub fn attrition_insight(review_scores: &[f64], current_allocation_percent: Option<f64>) -> AttritionInsight {
    let avg_score = if review_scores.is_empty() {
        3.0
    } else {
        review_scores.iter().sum::<f64>() / review_scores.len() as f64
    };

    let allocation_factor = current_allocation_percent.unwrap_or(50.0) / 100.0;

    let mut risk: f64 = 0.5;
    if avg_score < 2.5 {
        risk += 0.3;
    }
    if avg_score > 4.0 {
        risk -= 0.3;
    }
    if allocation_factor > 0.8 {
        risk += 0.1;
    }
    risk = risk.clamp(0.0, 1.0);

    AttritionInsight {
        attrition_risk: (risk * 100.0).round() / 100.0,
        top_factors: vec![
            RiskFactor {
                feature: "avgReviewScore",
                impact: if avg_score < 3.0 { 0.3 } else { -0.2 },
            },
            RiskFactor {
                feature: "recentAllocations",
                impact: if allocation_factor > 0.8 { 0.1 } else { -0.05 },
            },
        ],
        explain: format!(
            "Rule-based: avg score={:.1}, allocation={}%",
            avg_score,
            (allocation_factor * 100.0).round()
        ),
    }
}
