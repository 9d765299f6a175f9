//! Submission controllers: the async glue between validated input, the
//! HTTP client, and the core session state machines.
//!
//! Each controller owns one [`Session`], which is the sole in-flight
//! guard: `begin()` moves to `Submitting` synchronously before the
//! network call suspends, so a concurrent second attempt against the
//! same controller is rejected rather than queued. Cancellation is not
//! supported; an in-flight call runs to completion before the machine
//! is available again.

use riskform_core::prediction::{ConfirmOutcome, ConfirmRequest, PredictionResult};
use riskform_core::rules::InputRecord;
use riskform_core::session::{Session, SessionError};
use thiserror::Error;

use crate::http::{ApiClient, ApiError};

#[derive(Error, Debug)]
pub enum SubmitError {
    /// Contract violation: a submission was attempted while one is in
    /// flight. The caller should have disabled the trigger.
    #[error(transparent)]
    Session(#[from] SessionError),
    /// The attempt ran and failed; the session holds the same message.
    #[error("{0}")]
    Failed(String),
}

/// Drives the predict state machine. One instance per form.
pub struct SubmissionController {
    api: ApiClient,
    session: Session<PredictionResult>,
}

impl SubmissionController {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            session: Session::new(),
        }
    }

    pub fn session(&self) -> &Session<PredictionResult> {
        &self.session
    }

    /// Submit a validated record for scoring.
    ///
    /// On success the session enters `Succeeded` holding the result,
    /// discarding any previous one. On failure it enters `Failed` with
    /// a normalized message; the caller's entered values are untouched,
    /// so the user can resubmit without retyping.
    pub async fn submit(&mut self, record: &InputRecord) -> Result<PredictionResult, SubmitError> {
        self.session.begin()?;
        match self.api.predict(record).await {
            Ok(result) => {
                self.session.complete(result.clone());
                Ok(result)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    fn fail(&mut self, err: ApiError) -> SubmitError {
        let message = err.user_message();
        tracing::warn!(error = %err, "prediction submission failed");
        self.session.fail(message.clone());
        SubmitError::Failed(message)
    }
}

/// Drives the confirm state machine, independent of the predict one:
/// each kind of submission has its own single-in-flight discipline.
pub struct ConfirmController {
    api: ApiClient,
    session: Session<ConfirmOutcome>,
}

impl ConfirmController {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            session: Session::new(),
        }
    }

    pub fn session(&self) -> &Session<ConfirmOutcome> {
        &self.session
    }

    /// Submit a doctor-verified outcome. `request` is already
    /// field-validated by construction, so nothing ill-formed can reach
    /// the wire from here.
    pub async fn confirm(&mut self, request: &ConfirmRequest) -> Result<ConfirmOutcome, SubmitError> {
        self.session.begin()?;
        match self.api.confirm(request).await {
            Ok(outcome) => {
                self.session.complete(outcome.clone());
                Ok(outcome)
            }
            Err(err) => {
                let message = err.user_message();
                tracing::warn!(error = %err, "confirmation failed");
                self.session.fail(message.clone());
                Err(SubmitError::Failed(message))
            }
        }
    }
}
