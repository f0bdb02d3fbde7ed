//! Integration tests for [`coalens_client::ApiClient`] against an in-process
//! stub of the analysis backend.
//!
//! The stub reproduces the backend's observable contract: published-only
//! public listings, the privileged `/all` listing with drafts, 404s shaped
//! as `{"detail": "..."}`, and 422s shaped as the validation envelope.

use std::sync::{Arc, Mutex};

use axum::{
  Json, Router,
  extract::{Multipart, Path, State},
  http::{HeaderMap, StatusCode},
  response::IntoResponse,
  routing::{get, patch, post},
};
use coalens_client::{ApiClient, ApiConfig, ApiError, CoaSubmission};
use coalens_core::{
  coa::{CoaData, PublicAnalysisResult},
  review::{ReviewStatus, StrainAnalysisReview},
};
use serde_json::json;
use uuid::Uuid;

// ─── Stub backend ─────────────────────────────────────────────────────────────

#[derive(Clone)]
struct StubReview {
  result: PublicAnalysisResult,
  status: ReviewStatus,
}

type Reviews = Arc<Mutex<Vec<StubReview>>>;

fn sample_result(strain_name: &str) -> PublicAnalysisResult {
  PublicAnalysisResult {
    id:         Uuid::new_v4(),
    data:       CoaData {
      strain_name:              strain_name.to_string(),
      thca:                     24.5,
      delta_9_thc:              0.2,
      cbd:                      0.1,
      pesticides_passed:        true,
      heavy_metals_passed:      true,
      residual_solvents_passed: true,
    },
    summary:    format!("{strain_name} looks clean."),
    total_thc:  21.69,
    created_at: "2025-06-01T12:00:00Z".to_string(),
  }
}

fn not_found() -> (StatusCode, Json<serde_json::Value>) {
  (
    StatusCode::NOT_FOUND,
    Json(json!({ "detail": "Published review not found" })),
  )
}

fn validation_error(msg: &str) -> (StatusCode, Json<serde_json::Value>) {
  (
    StatusCode::UNPROCESSABLE_ENTITY,
    Json(json!({
      "detail": [{ "loc": ["body"], "msg": msg, "type": "value_error" }]
    })),
  )
}

async fn healthz() -> Json<serde_json::Value> {
  Json(json!({ "status": "ok" }))
}

async fn list_published(State(reviews): State<Reviews>) -> Json<Vec<PublicAnalysisResult>> {
  let reviews = reviews.lock().unwrap();
  Json(
    reviews
      .iter()
      .filter(|r| r.status.is_published())
      .map(|r| r.result.clone())
      .collect(),
  )
}

async fn list_all(
  State(reviews): State<Reviews>,
  headers: HeaderMap,
) -> Result<Json<Vec<StrainAnalysisReview>>, StatusCode> {
  // Privileged listing: require a bearer token.
  if !headers.contains_key("authorization") {
    return Err(StatusCode::UNAUTHORIZED);
  }
  let reviews = reviews.lock().unwrap();
  Ok(Json(
    reviews
      .iter()
      .map(|r| StrainAnalysisReview {
        id:              r.result.id,
        strain_name:     r.result.data.strain_name.clone(),
        thca_percentage: r.result.data.thca,
        status:          r.status,
        created_at:      r.result.created_at.clone(),
      })
      .collect(),
  ))
}

async fn get_one(
  State(reviews): State<Reviews>,
  Path(id): Path<Uuid>,
) -> axum::response::Response {
  let reviews = reviews.lock().unwrap();
  match reviews
    .iter()
    .find(|r| r.result.id == id && r.status.is_published())
  {
    Some(r) => Json(r.result.clone()).into_response(),
    None => not_found().into_response(),
  }
}

async fn approve_one(State(reviews): State<Reviews>, Path(id): Path<Uuid>) -> StatusCode {
  let mut reviews = reviews.lock().unwrap();
  match reviews.iter_mut().find(|r| r.result.id == id) {
    Some(r) => {
      r.status = ReviewStatus::Published;
      StatusCode::NO_CONTENT
    }
    None => StatusCode::NOT_FOUND,
  }
}

async fn delete_one(State(reviews): State<Reviews>, Path(id): Path<Uuid>) -> StatusCode {
  let mut reviews = reviews.lock().unwrap();
  let before = reviews.len();
  reviews.retain(|r| r.result.id != id);
  if reviews.len() < before {
    StatusCode::NO_CONTENT
  } else {
    StatusCode::NOT_FOUND
  }
}

async fn analyze(
  State(reviews): State<Reviews>,
  mut multipart: Multipart,
) -> axum::response::Response {
  let mut text = None;
  let mut pdf_len = 0usize;
  while let Some(field) = multipart.next_field().await.unwrap() {
    match field.name() {
      Some("coa_text") => text = Some(field.text().await.unwrap()),
      Some("coa_pdf") => pdf_len = field.bytes().await.unwrap().len(),
      _ => {}
    }
  }

  if text.is_none() && pdf_len == 0 {
    return validation_error("no COA content provided").into_response();
  }

  // Sentinel for the missing-id contract violation.
  if text.as_deref() == Some("no-id") {
    return Json(json!({ "summary": "analysis ran but id was lost" })).into_response();
  }

  let result = sample_result("Stub OG");
  reviews.lock().unwrap().push(StubReview {
    result: result.clone(),
    status: ReviewStatus::Published,
  });
  Json(result).into_response()
}

async fn generate_blog(Json(body): Json<serde_json::Value>) -> axum::response::Response {
  let strain_id = body["strain_id"].as_i64().unwrap_or(0);
  if strain_id == 0 {
    return validation_error("Strain not found").into_response();
  }
  Json(json!({
    "id": 1,
    "strain_id": strain_id,
    "title": "The Ultimate Guide to Stub OG",
    "content": "Full post body.",
    "tags": ["cannabis", "thca", "stub-og"]
  }))
  .into_response()
}

async fn analyze_pdf(mut multipart: Multipart) -> Json<serde_json::Value> {
  let mut len = 0usize;
  while let Some(field) = multipart.next_field().await.unwrap() {
    if field.name() == Some("file") {
      len = field.bytes().await.unwrap().len();
    }
  }
  Json(json!({ "text": format!("extracted {len} bytes") }))
}

/// Bind the stub on an ephemeral port and return its base URL plus a handle
/// on the shared review list.
async fn spawn_stub() -> (String, Reviews) {
  let reviews: Reviews = Arc::new(Mutex::new(Vec::new()));

  let app = Router::new()
    .route("/_healthz", get(healthz))
    .route("/routes/analyze", post(analyze))
    .route("/routes/blog/generate", post(generate_blog))
    .route("/routes/public/reviews/", get(list_published))
    .route("/routes/public/reviews/all", get(list_all))
    .route(
      "/routes/public/reviews/{id}",
      get(get_one).delete(delete_one),
    )
    .route("/routes/public/reviews/{id}/approve", patch(approve_one))
    .route("/routes/test/analyze_pdf", post(analyze_pdf))
    .with_state(reviews.clone());

  let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
    .await
    .expect("binding stub listener");
  let base_url = format!("http://{}", listener.local_addr().unwrap());
  tokio::spawn(async move {
    axum::serve(listener, app).await.unwrap();
  });

  (base_url, reviews)
}

fn client(base_url: &str) -> ApiClient {
  ApiClient::new(ApiConfig {
    base_url:   base_url.to_string(),
    auth_token: Some("test-token".to_string()),
  })
  .unwrap()
}

fn seed(reviews: &Reviews, strain_name: &str, status: ReviewStatus) -> Uuid {
  let result = sample_result(strain_name);
  let id = result.id;
  reviews
    .lock()
    .unwrap()
    .push(StubReview { result, status });
  id
}

// ─── Health ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn health_check_reports_ok() {
  let (base, _) = spawn_stub().await;
  let health = client(&base).check_health().await.unwrap();
  assert_eq!(health.status, "ok");
}

// ─── Reviews ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn get_published_review_returns_requested_token() {
  let (base, reviews) = spawn_stub().await;
  let id = seed(&reviews, "Gelato 41", ReviewStatus::Published);

  let fetched = client(&base).get_published_review(id).await.unwrap();
  assert_eq!(fetched.id, id);
  assert_eq!(fetched.data.strain_name, "Gelato 41");
}

#[tokio::test]
async fn published_listing_excludes_drafts() {
  let (base, reviews) = spawn_stub().await;
  seed(&reviews, "Published A", ReviewStatus::Published);
  seed(&reviews, "Draft B", ReviewStatus::Draft);

  let listed = client(&base).list_published_reviews().await.unwrap();
  assert_eq!(listed.len(), 1);
  assert_eq!(listed[0].data.strain_name, "Published A");
}

#[tokio::test]
async fn approve_moves_draft_into_published_listing() {
  let (base, reviews) = spawn_stub().await;
  let id = seed(&reviews, "Draft B", ReviewStatus::Draft);
  let api = client(&base);

  assert!(api.list_published_reviews().await.unwrap().is_empty());

  api.approve_review(id).await.unwrap();

  let listed = api.list_published_reviews().await.unwrap();
  assert_eq!(listed.len(), 1);
  assert_eq!(listed[0].id, id);

  let all = api.list_all_reviews().await.unwrap();
  assert!(all.iter().all(|r| r.status.is_published()));
}

#[tokio::test]
async fn delete_removes_review_and_fetch_fails() {
  let (base, reviews) = spawn_stub().await;
  let id = seed(&reviews, "Gelato 41", ReviewStatus::Published);
  let api = client(&base);

  api.delete_review(id).await.unwrap();

  assert!(api.list_published_reviews().await.unwrap().is_empty());
  assert!(api.list_all_reviews().await.unwrap().is_empty());

  let err = api.get_published_review(id).await.unwrap_err();
  match err {
    ApiError::Api { status, message } => {
      assert_eq!(status, StatusCode::NOT_FOUND);
      assert_eq!(message, "Published review not found");
    }
    other => panic!("expected Api error, got {other:?}"),
  }
}

#[tokio::test]
async fn privileged_listing_requires_auth() {
  let (base, reviews) = spawn_stub().await;
  seed(&reviews, "Draft B", ReviewStatus::Draft);

  let anon = ApiClient::new(ApiConfig {
    base_url:   base.clone(),
    auth_token: None,
  })
  .unwrap();

  let err = anon.list_all_reviews().await.unwrap_err();
  match err {
    ApiError::Api { status, .. } => assert_eq!(status, StatusCode::UNAUTHORIZED),
    other => panic!("expected Api error, got {other:?}"),
  }

  assert_eq!(client(&base).list_all_reviews().await.unwrap().len(), 1);
}

// ─── Analysis ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn analyze_with_text_returns_shareable_result() {
  let (base, _) = spawn_stub().await;
  let api = client(&base);

  let result = api
    .analyze_coa(CoaSubmission::from_text("THCa: 24.5%, Delta-9: 0.2%"))
    .await
    .unwrap();

  // The id is the shareable handle: fetching it back yields the same result.
  let fetched = api.get_published_review(result.id).await.unwrap();
  assert_eq!(fetched.id, result.id);
}

#[tokio::test]
async fn empty_submission_is_rejected_before_any_request() {
  // Point at a closed port: if the client issued a request this would be a
  // transport error, not the local rejection.
  let api = ApiClient::new(ApiConfig {
    base_url:   "http://127.0.0.1:1".to_string(),
    auth_token: None,
  })
  .unwrap();

  let err = api.analyze_coa(CoaSubmission::default()).await.unwrap_err();
  assert!(matches!(err, ApiError::EmptySubmission));

  let err = api
    .analyze_coa(CoaSubmission::from_text("   "))
    .await
    .unwrap_err();
  assert!(matches!(err, ApiError::EmptySubmission));
}

#[tokio::test]
async fn missing_result_id_is_a_distinct_error() {
  let (base, _) = spawn_stub().await;
  let err = client(&base)
    .analyze_coa(CoaSubmission::from_text("no-id"))
    .await
    .unwrap_err();
  assert!(matches!(err, ApiError::MissingResultId));
}

#[tokio::test]
async fn transport_failure_is_reported_as_transport() {
  // Bind then immediately drop a listener so the port is closed.
  let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
  let base = format!("http://{}", listener.local_addr().unwrap());
  drop(listener);

  let api = ApiClient::new(ApiConfig {
    base_url:   base,
    auth_token: None,
  })
  .unwrap();

  let err = api
    .analyze_coa(CoaSubmission::from_text("THCa: 24.5%"))
    .await
    .unwrap_err();
  assert!(matches!(err, ApiError::Transport(_)));
}

#[tokio::test]
async fn pdf_extraction_returns_text() {
  let (base, _) = spawn_stub().await;
  let extracted = client(&base)
    .analyze_pdf_test("report.pdf", vec![0x25, 0x50, 0x44, 0x46])
    .await
    .unwrap();
  assert_eq!(extracted.text, "extracted 4 bytes");
}

// ─── Blog ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn blog_generation_returns_post() {
  let (base, _) = spawn_stub().await;
  let post = client(&base).generate_blog_post(7).await.unwrap();
  assert_eq!(post.strain_id, 7);
  assert!(post.tags.contains(&"thca".to_string()));
}

#[tokio::test]
async fn validation_message_is_surfaced() {
  let (base, _) = spawn_stub().await;
  let err = client(&base).generate_blog_post(0).await.unwrap_err();
  match err {
    ApiError::Api { message, .. } => assert_eq!(message, "Strain not found"),
    other => panic!("expected Api error, got {other:?}"),
  }
}
