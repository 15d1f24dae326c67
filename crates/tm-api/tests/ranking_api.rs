use axum::{body::Body, http::Request, http::StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use tm_common::embedding::{cosine_similarity, create_embedder, EmbedderConfig, TextEmbedder};

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

/// Similarity the default encoder assigns to a pair of texts; used to
/// cross-check the transport plumbing against the engine primitives.
fn encoder_similarity(a: &str, b: &str) -> f32 {
    let encoder = create_embedder("hash", EmbedderConfig::default());
    let embeddings = encoder.embed_batch(&[a, b]).expect("embed");
    cosine_similarity(&embeddings[0].vector, &embeddings[1].vector)
}

#[tokio::test]
async fn skills_match_blends_similarity_and_availability() {
    let app = tm_api::create_router(tm_api::test_state());

    let payload = json!({
        "projectId": "proj-1",
        "requiredSkills": ["python", "react"],
        "employees": [{
            "id": "e1",
            "name": "Dana Ruiz",
            "skills": ["python", "django"],
            "currentAllocationPercent": 50
        }]
    });
    let response = app
        .oneshot(post_json("/ai/skills-match", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["projectId"], "proj-1");
    assert_eq!(body["fallback"], false);
    assert_eq!(body["totalProcessed"], 1);

    let top = &body["topCandidates"][0];
    assert_eq!(top["id"], "e1");
    assert_eq!(top["matchedSkills"], json!(["python"]));
    assert!(top["explanation"]
        .as_str()
        .unwrap()
        .contains("current allocation 50%"));

    let similarity = encoder_similarity("python react", "python django");
    let expected = 0.7 * f64::from(similarity) + 0.3 * 0.5;
    assert!((top["score"].as_f64().unwrap() - expected).abs() < 1e-9);
}

#[tokio::test]
async fn skills_match_with_no_employees_skips_ranking() {
    let app = tm_api::create_router(tm_api::test_state());

    let payload = json!({
        "requiredSkills": ["python"],
        "employees": []
    });
    let response = app
        .oneshot(post_json("/ai/skills-match", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["topCandidates"], json!([]));
    assert_eq!(body["totalProcessed"], 0);
    assert_eq!(body["fallback"], false);
}

#[tokio::test]
async fn skills_match_returns_all_when_top_k_exceeds_pool() {
    let app = tm_api::create_router(tm_api::test_state());

    let payload = json!({
        "requiredSkills": ["python"],
        "topK": 5,
        "employees": [
            {"id": "e1", "name": "A", "skills": ["python"]},
            {"id": "e2", "name": "B", "skills": ["java"]},
            {"id": "e3", "name": "C", "skills": ["python", "sql"]}
        ]
    });
    let response = app
        .oneshot(post_json("/ai/skills-match", &payload))
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(body["topCandidates"].as_array().unwrap().len(), 3);
    assert_eq!(body["totalProcessed"], 3);
}

#[tokio::test]
async fn rank_resumes_detects_skills_and_rounds_scores() {
    let app = tm_api::create_router(tm_api::test_state());

    let resume_text = "Experienced React and Node.js developer";
    let payload = json!({
        "ideal_profile": {"keySkills": ["react", "nodejs"]},
        "resumes": [{"id": "r1", "name": "Sam Okafor", "resumeText": resume_text}]
    });
    let response = app
        .oneshot(post_json("/ai/rank-resumes", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["totalProcessed"], 1);

    let top = &body["topCandidates"][0];
    assert_eq!(top["matchedSkills"], json!(["react", "nodejs"]));

    let similarity = encoder_similarity("react nodejs", resume_text);
    let expected = (f64::from(similarity) * 100.0 * 10.0).round() / 10.0;
    assert!((top["score"].as_f64().unwrap() - expected).abs() < 1e-9);
}

#[tokio::test]
async fn rank_resumes_caps_results_at_ten() {
    let app = tm_api::create_router(tm_api::test_state());

    let resumes: Vec<Value> = (0..12)
        .map(|i| {
            json!({
                "id": format!("r{i}"),
                "name": format!("Candidate {i}"),
                "resumeText": format!("Engineer number {i} who writes software")
            })
        })
        .collect();
    let payload = json!({
        "ideal_profile": {"title": "Software Engineer", "keySkills": ["software"]},
        "resumes": resumes,
        "top_k": 50
    });
    let response = app
        .oneshot(post_json("/ai/rank-resumes", &payload))
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(body["topCandidates"].as_array().unwrap().len(), 10);
    assert_eq!(body["totalProcessed"], 12);
}

#[tokio::test]
async fn rank_resumes_excludes_textless_resumes_but_counts_them() {
    let app = tm_api::create_router(tm_api::test_state());

    let payload = json!({
        "ideal_profile": {"keySkills": ["go"]},
        "resumes": [
            {"id": "r1", "name": "Has Text", "resumeText": "Go developer"},
            {"id": "r2", "name": "No Text"}
        ]
    });
    let response = app
        .oneshot(post_json("/ai/rank-resumes", &payload))
        .await
        .unwrap();

    let body = body_json(response).await;
    let ids: Vec<&str> = body["topCandidates"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect();

    assert_eq!(ids, vec!["r1"]);
    assert_eq!(body["totalProcessed"], 2);
}

#[tokio::test]
async fn rank_resumes_keeps_tied_candidates_in_submission_order() {
    let app = tm_api::create_router(tm_api::test_state());

    // Identical resume text embeds identically, so the composites tie.
    let payload = json!({
        "ideal_profile": {"keySkills": ["python"]},
        "resumes": [
            {"id": "first", "name": "First", "resumeText": "Python engineer"},
            {"id": "second", "name": "Second", "resumeText": "Python engineer"},
            {"id": "third", "name": "Third", "resumeText": "Python engineer"}
        ]
    });
    let response = app
        .oneshot(post_json("/ai/rank-resumes", &payload))
        .await
        .unwrap();

    let body = body_json(response).await;
    let ids: Vec<&str> = body["topCandidates"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect();

    assert_eq!(ids, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn rank_resumes_rejects_empty_profile() {
    let app = tm_api::create_router(tm_api::test_state());

    let payload = json!({
        "ideal_profile": {},
        "resumes": [{"id": "r1", "name": "Sam", "resumeText": "text"}]
    });
    let response = app
        .oneshot(post_json("/ai/rank-resumes", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn identical_requests_rank_identically() {
    let payload = json!({
        "requiredSkills": ["python", "sql"],
        "employees": [
            {"id": "e1", "name": "A", "skills": ["python"], "currentAllocationPercent": 20},
            {"id": "e2", "name": "B", "skills": ["sql"], "currentAllocationPercent": 20},
            {"id": "e3", "name": "C", "skills": ["rust"], "currentAllocationPercent": 0}
        ]
    });

    let first = tm_api::create_router(tm_api::test_state())
        .oneshot(post_json("/ai/skills-match", &payload))
        .await
        .unwrap();
    let second = tm_api::create_router(tm_api::test_state())
        .oneshot(post_json("/ai/skills-match", &payload))
        .await
        .unwrap();

    assert_eq!(body_json(first).await, body_json(second).await);
}
