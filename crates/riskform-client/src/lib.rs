//! HTTP layer for the riskform client: the JSON API client and the
//! controllers that drive the core session state machines.

pub mod controller;
pub mod http;

pub use controller::{ConfirmController, SubmissionController, SubmitError};
pub use http::{ApiClient, ApiError};
