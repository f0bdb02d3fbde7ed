//! Moderation-facing review summary.

use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;

/// Moderation state of a review. Exactly two values exist on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
  Draft,
  Published,
}

impl ReviewStatus {
  pub fn is_published(self) -> bool {
    self == ReviewStatus::Published
  }
}

impl fmt::Display for ReviewStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ReviewStatus::Draft => write!(f, "draft"),
      ReviewStatus::Published => write!(f, "published"),
    }
  }
}

impl FromStr for ReviewStatus {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "draft" => Ok(ReviewStatus::Draft),
      "published" => Ok(ReviewStatus::Published),
      other => Err(Error::UnknownStatus(other.to_string())),
    }
  }
}

/// One row of the admin moderation table.
///
/// A flattened projection of [`crate::coa::PublicAnalysisResult`] that the
/// backend produces for the privileged listing; drafts appear here before
/// they are visible anywhere public.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrainAnalysisReview {
  pub id:              Uuid,
  pub strain_name:     String,
  pub thca_percentage: f64,
  pub status:          ReviewStatus,
  pub created_at:      String,
}

impl StrainAnalysisReview {
  /// Calendar date of `created_at`.
  ///
  /// The backend emits ISO-8601 text, sometimes with a UTC offset and
  /// sometimes without, so both forms are accepted.
  pub fn created_date(&self) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(&self.created_at)
      .map(|dt| dt.date_naive())
      .ok()
      .or_else(|| {
        NaiveDateTime::parse_from_str(&self.created_at, "%Y-%m-%dT%H:%M:%S%.f")
          .map(|dt| dt.date())
          .ok()
      })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn status_wire_format_is_lowercase() {
    assert_eq!(
      serde_json::to_string(&ReviewStatus::Published).unwrap(),
      r#""published""#
    );
    let parsed: ReviewStatus = serde_json::from_str(r#""draft""#).unwrap();
    assert_eq!(parsed, ReviewStatus::Draft);
  }

  #[test]
  fn status_from_str_rejects_unknown() {
    assert!("pending".parse::<ReviewStatus>().is_err());
    assert_eq!(
      "published".parse::<ReviewStatus>().unwrap(),
      ReviewStatus::Published
    );
  }
}
