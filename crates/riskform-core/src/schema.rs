//! Service-declared feature schema and its integrity checks.
//!
//! The scoring service owns the list of accepted input fields; the client
//! fetches it at form-load time and derives validation from it. A schema
//! that fails its own invariants must never reach form rendering, so the
//! only way to obtain a [`FeatureSchema`] is through the fallible
//! constructor.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Payload keys the client itself writes into request/response bodies.
/// A schema field reusing one of these would shadow them, so such a
/// schema is rejected outright.
pub const RESERVED_NAMES: &[&str] = &[
    "submission_id",
    "confirmed_label",
    "prediction_label",
    "probability_malignant",
    "top_contributions",
    "model_version",
    "status",
    "error",
];

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("duplicate field name in schema: {0}")]
    DuplicateName(String),

    #[error("field {name}: min {min} exceeds max {max}")]
    InvertedBounds { name: String, min: f64, max: f64 },

    #[error("field name {0} collides with a reserved payload key")]
    ReservedName(String),
}

/// One schema-declared input field.
///
/// `name` is the payload key; `label` and the remaining optional fields
/// are presentation hints passed through to the form renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(
        rename = "type",
        default = "default_field_type",
        skip_serializing_if = "is_default_field_type"
    )]
    pub field_type: String,
}

fn default_field_type() -> String {
    "number".to_string()
}

fn is_default_field_type(t: &String) -> bool {
    t == "number"
}

/// The ordered field list returned by `GET /api/schema/`, validated.
///
/// Fetched once per form session and held immutably for its lifetime;
/// a refresh re-fetches rather than mutating in place.
#[derive(Debug, Clone)]
pub struct FeatureSchema {
    fields: Vec<FieldDescriptor>,
}

impl FeatureSchema {
    /// Validate and wrap a raw descriptor list.
    ///
    /// Enforces: unique names, `min <= max` where both bounds are
    /// present, and no reserved payload keys as field names.
    pub fn from_fields(fields: Vec<FieldDescriptor>) -> Result<Self, SchemaError> {
        let mut seen: Vec<&str> = Vec::with_capacity(fields.len());
        for field in &fields {
            if seen.contains(&field.name.as_str()) {
                return Err(SchemaError::DuplicateName(field.name.clone()));
            }
            seen.push(&field.name);

            if RESERVED_NAMES.contains(&field.name.as_str()) {
                return Err(SchemaError::ReservedName(field.name.clone()));
            }

            if let Some(min) = field.min
                && let Some(max) = field.max
                && min > max
            {
                return Err(SchemaError::InvertedBounds {
                    name: field.name.clone(),
                    min,
                    max,
                });
            }
        }
        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, required: bool, min: Option<f64>, max: Option<f64>) -> FieldDescriptor {
        FieldDescriptor {
            name: name.to_string(),
            label: name.to_string(),
            required,
            min,
            max,
            placeholder: None,
            step: None,
            field_type: "number".to_string(),
        }
    }

    #[test]
    fn valid_schema_accepted() {
        let schema = FeatureSchema::from_fields(vec![
            field("radius_mean", true, Some(0.0), Some(50.0)),
            field("symmetry_mean", false, None, None),
        ])
        .unwrap();
        assert_eq!(schema.len(), 2);
        assert_eq!(schema.fields()[0].name, "radius_mean");
    }

    #[test]
    fn empty_schema_is_legal() {
        let schema = FeatureSchema::from_fields(vec![]).unwrap();
        assert!(schema.is_empty());
    }

    #[test]
    fn duplicate_name_rejected() {
        let err = FeatureSchema::from_fields(vec![
            field("radius_mean", true, None, None),
            field("radius_mean", false, None, None),
        ])
        .unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateName(name) if name == "radius_mean"));
    }

    #[test]
    fn inverted_bounds_rejected() {
        let err =
            FeatureSchema::from_fields(vec![field("area_mean", true, Some(10.0), Some(1.0))])
                .unwrap_err();
        assert!(matches!(err, SchemaError::InvertedBounds { .. }));
    }

    #[test]
    fn equal_bounds_accepted() {
        // min == max is a degenerate but legal range.
        assert!(
            FeatureSchema::from_fields(vec![field("texture_mean", true, Some(5.0), Some(5.0))])
                .is_ok()
        );
    }

    #[test]
    fn reserved_name_rejected() {
        let err = FeatureSchema::from_fields(vec![field("submission_id", true, None, None)])
            .unwrap_err();
        assert!(matches!(err, SchemaError::ReservedName(_)));
    }

    #[test]
    fn descriptor_deserializes_with_defaults() {
        let json = r#"{"name": "radius_mean", "label": "Radius (mean)"}"#;
        let parsed: FieldDescriptor = serde_json::from_str(json).unwrap();
        assert!(!parsed.required);
        assert!(parsed.min.is_none());
        assert_eq!(parsed.field_type, "number");
    }

    #[test]
    fn descriptor_deserializes_full_form() {
        let json = r#"{
            "name": "radius_mean",
            "label": "Radius (mean)",
            "type": "number",
            "placeholder": "e.g., 14.1",
            "min": 0,
            "max": 50,
            "step": 0.1,
            "required": true
        }"#;
        let parsed: FieldDescriptor = serde_json::from_str(json).unwrap();
        assert!(parsed.required);
        assert_eq!(parsed.min, Some(0.0));
        assert_eq!(parsed.max, Some(50.0));
        assert_eq!(parsed.placeholder.as_deref(), Some("e.g., 14.1"));
    }
}
