//! Lab measurement snapshot and the published analysis envelope.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Delta-9 THC concentration (percent by dry weight) at or below which a
/// hemp product is federally compliant under the 2018 Farm Bill.
pub const DELTA_9_LEGAL_LIMIT: f64 = 0.3;

/// Chemical data extracted from a Certificate of Analysis lab report.
///
/// All cannabinoid values are percentages; the `*_passed` flags summarise
/// the contaminant panels as the lab reported them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoaData {
  pub strain_name:              String,
  pub thca:                     f64,
  pub delta_9_thc:              f64,
  pub cbd:                      f64,
  pub pesticides_passed:        bool,
  pub heavy_metals_passed:      bool,
  pub residual_solvents_passed: bool,
}

impl CoaData {
  /// Whether the product sits under the federal delta-9 THC limit.
  ///
  /// The backend does not transmit a legality flag, so the banner shown in
  /// the results view is derived here from the measured delta-9 value.
  pub fn federally_legal(&self) -> bool {
    self.delta_9_thc <= DELTA_9_LEGAL_LIMIT
  }

  /// Whether all three contaminant panels passed.
  pub fn all_panels_passed(&self) -> bool {
    self.pesticides_passed && self.heavy_metals_passed && self.residual_solvents_passed
  }
}

/// A completed analysis as returned by the backend.
///
/// `id` is the shareable handle: minted server-side, treated as opaque by
/// everything except the share-link builder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicAnalysisResult {
  pub id:         Uuid,
  pub data:       CoaData,
  pub summary:    String,
  pub total_thc:  f64,
  pub created_at: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn coa(delta_9: f64) -> CoaData {
    CoaData {
      strain_name:              "Gelato 41".into(),
      thca:                     24.5,
      delta_9_thc:              delta_9,
      cbd:                      0.1,
      pesticides_passed:        true,
      heavy_metals_passed:      true,
      residual_solvents_passed: true,
    }
  }

  #[test]
  fn legality_threshold_is_inclusive() {
    assert!(coa(0.2).federally_legal());
    assert!(coa(0.3).federally_legal());
    assert!(!coa(0.31).federally_legal());
  }

  #[test]
  fn analysis_result_round_trips_wire_names() {
    let json = r#"{
      "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
      "data": {
        "strain_name": "Gelato 41",
        "thca": 24.5,
        "delta_9_thc": 0.2,
        "cbd": 0.1,
        "pesticides_passed": true,
        "heavy_metals_passed": true,
        "residual_solvents_passed": false
      },
      "summary": "High-THCa flower.",
      "total_thc": 21.69,
      "created_at": "2025-06-01T12:00:00Z"
    }"#;

    let result: PublicAnalysisResult = serde_json::from_str(json).unwrap();
    assert_eq!(
      result.id.to_string(),
      "7c9e6679-7425-40de-944b-e07fc1f90ae7"
    );
    assert_eq!(result.data.strain_name, "Gelato 41");
    assert!(!result.data.residual_solvents_passed);
    assert!(!result.data.all_panels_passed());
  }
}
