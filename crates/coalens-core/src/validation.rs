//! Field-level validation failure descriptors.
//!
//! The backend reports every request failure, including not-found, through
//! the same validation-error envelope. The client does not attempt to tell
//! those cases apart beyond surfacing the message text.

use serde::{Deserialize, Serialize};

/// One segment of a validation error location path: a field name or a
/// sequence index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
  Field(String),
  Index(u64),
}

/// A single field-level validation failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationError {
  pub loc: Vec<PathSegment>,
  pub msg: String,
  #[serde(rename = "type")]
  pub kind: String,
}

/// The error envelope carried by non-2xx responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HttpValidationError {
  #[serde(default)]
  pub detail: Option<Vec<ValidationError>>,
}

impl HttpValidationError {
  /// The first available message, if the envelope carries any.
  pub fn first_message(&self) -> Option<&str> {
    self
      .detail
      .as_deref()
      .and_then(|errors| errors.first())
      .map(|e| e.msg.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn loc_mixes_fields_and_indices() {
    let json = r#"{
      "detail": [
        { "loc": ["body", "coa_text", 0], "msg": "field required", "type": "missing" }
      ]
    }"#;
    let envelope: HttpValidationError = serde_json::from_str(json).unwrap();
    let errors = envelope.detail.as_ref().unwrap();
    assert_eq!(errors[0].loc[0], PathSegment::Field("body".into()));
    assert_eq!(errors[0].loc[2], PathSegment::Index(0));
    assert_eq!(envelope.first_message(), Some("field required"));
  }

  #[test]
  fn empty_envelope_has_no_message() {
    let envelope: HttpValidationError = serde_json::from_str("{}").unwrap();
    assert_eq!(envelope.first_message(), None);
  }
}
