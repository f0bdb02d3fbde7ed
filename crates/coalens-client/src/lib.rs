//! Async HTTP client wrapping the coalens analysis backend.
//!
//! One strongly-typed method per backend operation. Each method maps its
//! typed inputs onto a request, issues it, and hands back either the typed
//! payload or an [`ApiError`]. No retries, no caching; all recovery policy
//! belongs to the caller.

pub mod error;
pub mod submission;

use std::time::Duration;

use coalens_core::{
  blog::{BlogGenerationRequest, BlogPost},
  coa::PublicAnalysisResult,
  health::HealthResponse,
  review::StrainAnalysisReview,
  validation::HttpValidationError,
};
use reqwest::{Client, multipart};
use serde::{Deserialize, de::DeserializeOwned};
use uuid::Uuid;

pub use error::{ApiError, Result};
pub use submission::{CoaSubmission, PdfAttachment};

/// Connection settings for the analysis backend.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url:   String,
  /// Bearer token from the identity provider. `None` sends no auth header.
  pub auth_token: Option<String>,
}

/// Text extracted by the test-only PDF endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractedText {
  pub text: String,
}

/// Async HTTP client for the coalens JSON REST API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
  }

  fn auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    match &self.config.auth_token {
      Some(token) => req.bearer_auth(token),
      None => req,
    }
  }

  /// Read the response: decode the typed payload on success, or build an
  /// [`ApiError::Api`] from the validation envelope on a non-2xx status.
  async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
    let status = resp.status();
    let body = resp.text().await?;
    if !status.is_success() {
      return Err(Self::api_error(status, &body));
    }
    serde_json::from_str(&body).map_err(ApiError::Decode)
  }

  /// Like [`Self::read_json`] but discards any success payload.
  async fn read_unit(resp: reqwest::Response) -> Result<()> {
    let status = resp.status();
    if status.is_success() {
      return Ok(());
    }
    let body = resp.text().await?;
    Err(Self::api_error(status, &body))
  }

  /// Surface the most useful message from an error body.
  ///
  /// The backend usually sends the validation-error envelope, but some
  /// handlers put a bare string under `detail`; fall through to a generic
  /// status message when neither decodes.
  fn api_error(status: reqwest::StatusCode, body: &str) -> ApiError {
    #[derive(Deserialize)]
    struct DetailText {
      detail: String,
    }

    let message = serde_json::from_str::<HttpValidationError>(body)
      .ok()
      .and_then(|envelope| envelope.first_message().map(str::to_string))
      .or_else(|| {
        serde_json::from_str::<DetailText>(body)
          .ok()
          .map(|d| d.detail)
      })
      .unwrap_or_else(|| format!("request failed with status {status}"));
    ApiError::Api { status, message }
  }

  // ── Health ────────────────────────────────────────────────────────────────

  /// `GET /_healthz` — 200 when the backend is up, 500 when not.
  pub async fn check_health(&self) -> Result<HealthResponse> {
    tracing::debug!("GET /_healthz");
    let resp = self.client.get(self.url("/_healthz")).send().await?;
    Self::read_json(resp).await
  }

  // ── Analysis ──────────────────────────────────────────────────────────────

  /// `POST /routes/analyze` — submit a COA as a PDF and/or pasted text.
  ///
  /// Rejects an empty submission locally, before any request is issued. A
  /// success body without an `id` is reported as
  /// [`ApiError::MissingResultId`] rather than a decode failure, so the
  /// caller can surface it distinctly.
  pub async fn analyze_coa(&self, submission: CoaSubmission) -> Result<PublicAnalysisResult> {
    if submission.is_empty() {
      return Err(ApiError::EmptySubmission);
    }
    tracing::debug!("POST /routes/analyze");

    let mut form = multipart::Form::new();
    if let Some(pdf) = submission.pdf {
      let part = multipart::Part::bytes(pdf.bytes)
        .file_name(pdf.file_name)
        .mime_str("application/pdf")?;
      form = form.part("coa_pdf", part);
    }
    if let Some(text) = submission.text {
      form = form.text("coa_text", text);
    }

    let resp = self
      .auth(self.client.post(self.url("/routes/analyze")))
      .multipart(form)
      .send()
      .await?;

    let status = resp.status();
    let body = resp.text().await?;
    if !status.is_success() {
      return Err(Self::api_error(status, &body));
    }

    let value: serde_json::Value = serde_json::from_str(&body).map_err(ApiError::Decode)?;
    if value.get("id").map(|id| id.is_null()).unwrap_or(true) {
      return Err(ApiError::MissingResultId);
    }
    serde_json::from_value(value).map_err(ApiError::Decode)
  }

  /// `POST /routes/test/analyze_pdf` — test-only PDF text extraction.
  pub async fn analyze_pdf_test(
    &self,
    file_name: &str,
    bytes: Vec<u8>,
  ) -> Result<ExtractedText> {
    tracing::debug!("POST /routes/test/analyze_pdf");
    let part = multipart::Part::bytes(bytes)
      .file_name(file_name.to_string())
      .mime_str("application/pdf")?;
    let form = multipart::Form::new().part("file", part);

    let resp = self
      .auth(self.client.post(self.url("/routes/test/analyze_pdf")))
      .multipart(form)
      .send()
      .await?;
    Self::read_json(resp).await
  }

  // ── Reviews ───────────────────────────────────────────────────────────────

  /// `GET /routes/public/reviews/` — published reviews only.
  pub async fn list_published_reviews(&self) -> Result<Vec<PublicAnalysisResult>> {
    tracing::debug!("GET /routes/public/reviews/");
    let resp = self
      .auth(self.client.get(self.url("/routes/public/reviews/")))
      .send()
      .await?;
    Self::read_json(resp).await
  }

  /// `GET /routes/public/reviews/{review_id}`
  pub async fn get_published_review(&self, review_id: Uuid) -> Result<PublicAnalysisResult> {
    tracing::debug!(%review_id, "GET /routes/public/reviews/{{id}}");
    let resp = self
      .auth(
        self
          .client
          .get(self.url(&format!("/routes/public/reviews/{review_id}"))),
      )
      .send()
      .await?;
    Self::read_json(resp).await
  }

  /// `DELETE /routes/public/reviews/{review_id}`
  pub async fn delete_review(&self, review_id: Uuid) -> Result<()> {
    tracing::debug!(%review_id, "DELETE /routes/public/reviews/{{id}}");
    let resp = self
      .auth(
        self
          .client
          .delete(self.url(&format!("/routes/public/reviews/{review_id}"))),
      )
      .send()
      .await?;
    Self::read_unit(resp).await
  }

  /// `GET /routes/public/reviews/all` — privileged: drafts included.
  pub async fn list_all_reviews(&self) -> Result<Vec<StrainAnalysisReview>> {
    tracing::debug!("GET /routes/public/reviews/all");
    let resp = self
      .auth(self.client.get(self.url("/routes/public/reviews/all")))
      .send()
      .await?;
    Self::read_json(resp).await
  }

  /// `PATCH /routes/public/reviews/{review_id}/approve` — privileged.
  pub async fn approve_review(&self, review_id: Uuid) -> Result<()> {
    tracing::debug!(%review_id, "PATCH /routes/public/reviews/{{id}}/approve");
    let resp = self
      .auth(
        self
          .client
          .patch(self.url(&format!("/routes/public/reviews/{review_id}/approve"))),
      )
      .send()
      .await?;
    Self::read_unit(resp).await
  }

  // ── Blog ──────────────────────────────────────────────────────────────────

  /// `POST /routes/blog/generate`
  pub async fn generate_blog_post(&self, strain_id: i64) -> Result<BlogPost> {
    tracing::debug!(strain_id, "POST /routes/blog/generate");
    let resp = self
      .auth(self.client.post(self.url("/routes/blog/generate")))
      .json(&BlogGenerationRequest { strain_id })
      .send()
      .await?;
    Self::read_json(resp).await
  }
}
