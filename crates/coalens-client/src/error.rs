//! Client-side error taxonomy.
//!
//! Three failure classes cross the network boundary: transport failures,
//! non-2xx statuses with a validation-error envelope, and 2xx bodies that do
//! not decode. A fourth, [`ApiError::EmptySubmission`], never reaches the
//! network at all.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
  /// Connection refused, timeout, or a failure reading the response body.
  #[error("failed to connect to the server: {0}")]
  Transport(#[from] reqwest::Error),

  /// Non-success status. `message` is the first validation message from the
  /// response envelope when one decodes, otherwise a generic fallback.
  ///
  /// The backend reports not-found through the same envelope as malformed
  /// input, so no separate not-found variant exists here.
  #[error("{message}")]
  Api { status: StatusCode, message: String },

  /// A 2xx response whose body did not match the declared contract.
  #[error("unexpected response from the server: {0}")]
  Decode(#[source] serde_json::Error),

  /// The analysis response decoded but carried no result id.
  #[error("analysis completed, but no result id was returned")]
  MissingResultId,

  /// Neither a PDF nor pasted text was provided. Rejected locally; no
  /// request is issued.
  #[error("upload a PDF file or paste COA text first")]
  EmptySubmission,
}

pub type Result<T, E = ApiError> = std::result::Result<T, E>;
