//! Submission session state machine.
//!
//! Replaces framework-reactive loading/success/error flags with an
//! explicit machine: `Idle -> Submitting -> {Succeeded, Failed}` and back
//! to `Submitting` on the next user-initiated attempt. The `Submitting`
//! phase doubles as the single-in-flight guard; a second attempt while
//! one is in flight is a contract violation, never queued.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("a submission is already in flight")]
    InFlight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Transient per-form submission state, generic over the result the
/// service returns (prediction or confirmation outcome).
///
/// One instance per controller; the previous result or error is
/// discarded wholesale when a new attempt begins.
#[derive(Debug)]
pub struct Session<T> {
    phase: Phase,
    error: Option<String>,
    result: Option<T>,
}

impl<T> Default for Session<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Session<T> {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            error: None,
            result: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Last failure message, if the machine is in `Failed`.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Last successful result, if the machine is in `Succeeded`.
    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    /// Enter `Submitting`. Callable from `Idle` or either terminal
    /// phase; the transition happens synchronously, before any network
    /// call suspends. Rejected while already `Submitting`.
    pub fn begin(&mut self) -> Result<(), SessionError> {
        if self.phase == Phase::Submitting {
            return Err(SessionError::InFlight);
        }
        self.phase = Phase::Submitting;
        self.error = None;
        self.result = None;
        Ok(())
    }

    /// Resolve the in-flight attempt successfully.
    pub fn complete(&mut self, result: T) {
        debug_assert_eq!(self.phase, Phase::Submitting);
        self.phase = Phase::Succeeded;
        self.result = Some(result);
    }

    /// Resolve the in-flight attempt with a user-visible message.
    /// No partial result is retained.
    pub fn fail(&mut self, message: impl Into<String>) {
        debug_assert_eq!(self.phase, Phase::Submitting);
        self.phase = Phase::Failed;
        self.error = Some(message.into());
        self.result = None;
    }

    /// Drop back to `Idle`, discarding any result or error. Used when
    /// the owning form unmounts or resets.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.error = None;
        self.result = None;
    }
}
