pub mod consent;
pub mod contrib;
pub mod prediction;
pub mod rules;
pub mod schema;
pub mod session;

pub use consent::{ConsentStore, MemoryConsentStore};
pub use contrib::{DisplayContribution, Direction, to_display_model};
pub use prediction::{ConfirmOutcome, ConfirmRequest, Contribution, PredictionResult, RiskLabel, SubmissionDetail};
pub use rules::{FieldErrors, FieldRule, InputRecord, RuleSet};
pub use schema::{FeatureSchema, FieldDescriptor, SchemaError};
pub use session::{Phase, Session, SessionError};
