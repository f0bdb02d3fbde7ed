//! Backend liveness probe payload.

use serde::{Deserialize, Serialize};

/// Body of `GET /_healthz`. 200 when the backend is up, 500 when not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
  pub status: String,
}
