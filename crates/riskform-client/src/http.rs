//! HTTP client for the risk-scoring service's JSON endpoints.

use riskform_core::prediction::{
    ConfirmOutcome, ConfirmRequest, PredictionResult, SubmissionDetail,
};
use riskform_core::rules::InputRecord;
use riskform_core::schema::{FeatureSchema, FieldDescriptor, SchemaError};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },
    #[error("schema integrity error: {0}")]
    Schema(#[from] SchemaError),
}

impl ApiError {
    /// Single user-visible message for a failed attempt, per the error
    /// policy: the service's own message when it sent one, otherwise a
    /// generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server { message, .. } if !message.is_empty() => message.clone(),
            ApiError::Schema(err) => err.to_string(),
            _ => "The scoring service could not be reached. Please try again.".to_string(),
        }
    }
}

/// Wire shape of `GET /api/schema/`.
#[derive(Deserialize)]
struct SchemaResponse {
    features: Vec<FieldDescriptor>,
}

/// Error payloads arrive as `{"error": "..."}`.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for the scoring service's JSON API.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client for the given service base URL.
    ///
    /// `base_url` should be like `http://localhost:8000` (no trailing slash).
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch and validate the current feature schema.
    ///
    /// Transport or parse failure means no form can be rendered; there
    /// is no partial schema. Retry is the caller's decision.
    pub async fn fetch_schema(&self) -> Result<FeatureSchema, ApiError> {
        let url = format!("{}/api/schema/", self.base_url);
        info!(url = %url, "fetching feature schema");

        let resp = self.client.get(&url).send().await?;
        let body: SchemaResponse = check_status(resp).await?.json().await?;
        let schema = FeatureSchema::from_fields(body.features)?;
        info!(fields = schema.len(), "schema loaded");
        Ok(schema)
    }

    /// Submit a validated input record for scoring.
    pub async fn predict(&self, record: &InputRecord) -> Result<PredictionResult, ApiError> {
        let url = format!("{}/api/predict/", self.base_url);
        info!(url = %url, fields = record.len(), "submitting measurements");

        let resp = self.client.post(&url).json(record).send().await?;
        let result: PredictionResult = check_status(resp).await?.json().await?;
        info!(
            submission_id = result.submission_id,
            label = result.prediction_label.as_str(),
            "prediction received"
        );
        Ok(result)
    }

    /// Submit a doctor-verified outcome for a prior prediction.
    pub async fn confirm(&self, request: &ConfirmRequest) -> Result<ConfirmOutcome, ApiError> {
        let url = format!("{}/api/confirm/", self.base_url);
        info!(
            url = %url,
            submission_id = request.submission_id,
            "confirming outcome"
        );

        let resp = self.client.post(&url).json(request).send().await?;
        let outcome: ConfirmOutcome = check_status(resp).await?.json().await?;
        info!(status = %outcome.status, "confirmation accepted");
        Ok(outcome)
    }

    /// Look up a prior submission with its confirmation metadata.
    pub async fn submission(&self, id: u64) -> Result<SubmissionDetail, ApiError> {
        let url = format!("{}/api/submissions/{}/", self.base_url, id);
        info!(url = %url, "fetching submission");

        let resp = self.client.get(&url).send().await?;
        Ok(check_status(resp).await?.json().await?)
    }

    /// Service liveness probe. Returns the reported status string.
    pub async fn health(&self) -> Result<String, ApiError> {
        let url = format!("{}/api/health/", self.base_url);
        let resp = self.client.get(&url).send().await?;

        #[derive(Deserialize)]
        struct Health {
            status: String,
        }
        let health: Health = check_status(resp).await?.json().await?;
        Ok(health.status)
    }
}

/// Turn a non-2xx response into `ApiError::Server`, extracting the
/// service's `{"error": ...}` message when the body carries one.
async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Server {
        status: status.as_u16(),
        message: extract_error_message(&body),
    })
}

fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|e| e.error)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_trims_trailing_slash() {
        let client = ApiClient::new("http://localhost:8000/".into());
        assert_eq!(client.base_url, "http://localhost:8000");
    }

    #[test]
    fn error_message_extracted_from_json_body() {
        assert_eq!(
            extract_error_message(r#"{"error": "Missing required features: ['radius_mean']"}"#),
            "Missing required features: ['radius_mean']"
        );
    }

    #[test]
    fn non_json_error_body_yields_empty_message() {
        assert_eq!(extract_error_message("<html>502 Bad Gateway</html>"), "");
        assert_eq!(extract_error_message(""), "");
    }

    #[test]
    fn server_error_user_message_prefers_service_text() {
        let err = ApiError::Server {
            status: 400,
            message: "Submission not found".into(),
        };
        assert_eq!(err.user_message(), "Submission not found");
    }

    #[test]
    fn empty_server_message_falls_back_to_generic() {
        let err = ApiError::Server {
            status: 502,
            message: String::new(),
        };
        assert!(err.user_message().contains("Please try again"));
    }

    #[test]
    fn malformed_error_body_stays_a_server_error() {
        // An unparsable error payload never becomes its own error kind;
        // it degrades to a Server error with the generic message.
        let err = ApiError::Server {
            status: 500,
            message: extract_error_message("<html>oops</html>"),
        };
        assert!(matches!(err, ApiError::Server { status: 500, .. }));
        assert!(err.user_message().contains("Please try again"));
    }

    #[test]
    fn schema_response_parses_feature_list() {
        let json = r#"{
            "features": [
                {"name": "radius_mean", "label": "Radius (mean)", "required": true, "min": 0, "max": 50},
                {"name": "symmetry_mean", "label": "Symmetry (mean)"}
            ]
        }"#;
        let body: SchemaResponse = serde_json::from_str(json).unwrap();
        let schema = FeatureSchema::from_fields(body.features).unwrap();
        assert_eq!(schema.len(), 2);
        assert!(schema.fields()[0].required);
        assert!(!schema.fields()[1].required);
    }

    #[test]
    fn duplicate_schema_fields_fail_integrity() {
        let json = r#"{
            "features": [
                {"name": "radius_mean", "label": "A"},
                {"name": "radius_mean", "label": "B"}
            ]
        }"#;
        let body: SchemaResponse = serde_json::from_str(json).unwrap();
        let err: ApiError = FeatureSchema::from_fields(body.features)
            .map_err(ApiError::from)
            .unwrap_err();
        assert!(matches!(err, ApiError::Schema(_)));
    }
}
