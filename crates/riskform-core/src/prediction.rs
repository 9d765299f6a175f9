//! Wire types for the scoring service's responses, plus the validated
//! confirmation request.

use serde::{Deserialize, Serialize};

use crate::rules::FieldErrors;

/// Binary risk label as the service reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLabel {
    Benign,
    Malignant,
}

impl RiskLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLabel::Benign => "benign",
            RiskLabel::Malignant => "malignant",
        }
    }
}

/// Signed attribution of one input feature to the predicted probability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contribution {
    pub feature: String,
    pub contribution: f64,
}

/// Response body of `POST /api/predict/`.
///
/// Owned by the caller for the duration of one result display and
/// replaced wholesale by the next submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    pub submission_id: u64,
    pub prediction_label: RiskLabel,
    pub probability_malignant: f64,
    /// Service-ordered, most relevant first; the client preserves this
    /// order when rendering.
    pub top_contributions: Vec<Contribution>,
    pub model_version: String,
}

/// Doctor-verified outcome submission, validated at construction so an
/// ill-formed pair never reaches the wire.
#[derive(Debug, Clone, Serialize)]
pub struct ConfirmRequest {
    pub submission_id: u64,
    pub confirmed_label: u8,
}

impl ConfirmRequest {
    /// Field-level validation: the id must be a positive integer and the
    /// label exactly 0 (benign) or 1 (malignant).
    pub fn new(submission_id: i64, confirmed_label: i64) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        if submission_id < 1 {
            errors.insert(
                "submission_id".to_string(),
                "Submission ID must be positive".to_string(),
            );
        }
        if confirmed_label != 0 && confirmed_label != 1 {
            errors.insert(
                "confirmed_label".to_string(),
                "Confirmed label must be 0 (benign) or 1 (malignant)".to_string(),
            );
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Self {
            submission_id: submission_id as u64,
            confirmed_label: confirmed_label as u8,
        })
    }
}

/// Response body of `POST /api/confirm/`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmOutcome {
    pub status: String,
    pub submission_id: u64,
    pub confirmed_label: u8,
}

/// Response body of `GET /api/submissions/{id}/`: a prior prediction
/// plus confirmation metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionDetail {
    pub submission_id: u64,
    pub prediction_label: RiskLabel,
    pub probability_malignant: f64,
    #[serde(default)]
    pub top_contributions: Vec<Contribution>,
    pub model_version: String,
    /// ISO 8601 timestamp string.
    pub submitted_at: String,
    #[serde(default)]
    pub confirmed_label: Option<u8>,
    /// ISO 8601 timestamp string.
    #[serde(default)]
    pub confirmed_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prediction_result_json_roundtrip() {
        let json = r#"{
            "submission_id": 123,
            "prediction_label": "malignant",
            "probability_malignant": 0.873,
            "top_contributions": [
                {"feature": "radius_mean", "contribution": 0.31},
                {"feature": "symmetry_mean", "contribution": -0.12}
            ],
            "model_version": "rf-2.1"
        }"#;
        let parsed: PredictionResult = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.submission_id, 123);
        assert_eq!(parsed.prediction_label, RiskLabel::Malignant);
        assert_eq!(parsed.probability_malignant, 0.873);
        assert_eq!(parsed.top_contributions.len(), 2);
        assert_eq!(parsed.top_contributions[1].contribution, -0.12);
    }

    #[test]
    fn benign_label_parses() {
        let parsed: RiskLabel = serde_json::from_str(r#""benign""#).unwrap();
        assert_eq!(parsed, RiskLabel::Benign);
        assert_eq!(parsed.as_str(), "benign");
    }

    #[test]
    fn confirm_request_valid() {
        let req = ConfirmRequest::new(123, 1).unwrap();
        assert_eq!(req.submission_id, 123);
        assert_eq!(req.confirmed_label, 1);
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"submission_id":123,"confirmed_label":1}"#);
    }

    #[test]
    fn confirm_request_negative_id_rejected() {
        let errors = ConfirmRequest::new(-1, 1).unwrap_err();
        assert!(errors.contains_key("submission_id"));
        assert!(!errors.contains_key("confirmed_label"));
    }

    #[test]
    fn confirm_request_zero_id_rejected() {
        assert!(ConfirmRequest::new(0, 0).is_err());
    }

    #[test]
    fn confirm_request_bad_label_rejected() {
        let errors = ConfirmRequest::new(5, 2).unwrap_err();
        assert!(errors.contains_key("confirmed_label"));
    }

    #[test]
    fn confirm_request_reports_all_violations() {
        let errors = ConfirmRequest::new(-3, 7).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn submission_detail_without_confirmation() {
        let json = r#"{
            "submission_id": 9,
            "prediction_label": "benign",
            "probability_malignant": 0.12,
            "model_version": "rf-2.1",
            "submitted_at": "2026-03-01T09:30:00Z"
        }"#;
        let parsed: SubmissionDetail = serde_json::from_str(json).unwrap();
        assert!(parsed.confirmed_label.is_none());
        assert!(parsed.confirmed_at.is_none());
        assert!(parsed.top_contributions.is_empty());
    }
}
