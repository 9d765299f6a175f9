//! Rule compiler and validator for schema-driven input.
//!
//! The original relies on the schema arriving at runtime, so validation
//! cannot be written against fixed struct fields. Instead
//! [`RuleSet::compile`] lowers each [`FieldDescriptor`] into a small
//! tagged-union rule, and [`RuleSet::validate`] evaluates the whole set
//! against raw user entry in one exhaustive pass: every violated field is
//! reported, not just the first.
//!
//! Coercion policy: input that does not parse as a finite number counts
//! as missing. Missing is an error for a required field and silently
//! defaults to `0` for an optional one.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::schema::{FeatureSchema, FieldDescriptor};

/// Per-field violation messages, keyed by field name. Resolved entirely
/// client-side; never part of a request body.
pub type FieldErrors = BTreeMap<String, String>;

/// Executable validation for one field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldRule {
    Required { min: Option<f64>, max: Option<f64> },
    Optional { default: f64 },
}

#[derive(Debug, Clone)]
struct CompiledField {
    name: String,
    label: String,
    rule: FieldRule,
}

/// A [`FeatureSchema`] lowered to executable rules, in schema order.
#[derive(Debug, Clone)]
pub struct RuleSet {
    fields: Vec<CompiledField>,
}

impl RuleSet {
    /// Lower a validated schema into rules. Infallible: integrity
    /// (unique names, sane bounds) is enforced when the schema is
    /// constructed, which is the only way to hold a `FeatureSchema`.
    pub fn compile(schema: &FeatureSchema) -> Self {
        let fields = schema
            .fields()
            .iter()
            .map(|f| CompiledField {
                name: f.name.clone(),
                label: f.label.clone(),
                rule: compile_field(f),
            })
            .collect::<Vec<_>>();
        tracing::debug!(rules = fields.len(), "compiled validation rules");
        Self { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validate raw user entry against every rule in one pass.
    ///
    /// `raw` maps field name to the entered text; absent keys and keys
    /// not declared by the schema are both fine (the latter are ignored).
    /// On success the returned record covers exactly the schema's
    /// fields, optional ones defaulted.
    pub fn validate(&self, raw: &BTreeMap<String, String>) -> Result<InputRecord, FieldErrors> {
        let mut values = Vec::with_capacity(self.fields.len());
        let mut errors = FieldErrors::new();

        for field in &self.fields {
            let entered = raw.get(&field.name).and_then(|s| parse_finite(s));
            match &field.rule {
                FieldRule::Required { min, max } => match entered {
                    None => {
                        // Distinguish "left blank" from "not a number" for
                        // the message the user sees.
                        let message = match raw.get(&field.name) {
                            Some(s) if !s.trim().is_empty() => {
                                format!("{} must be a number", field.label)
                            }
                            _ => format!("{} is required", field.label),
                        };
                        errors.insert(field.name.clone(), message);
                    }
                    Some(value) => {
                        if let Some(min) = min
                            && value < *min
                        {
                            errors.insert(
                                field.name.clone(),
                                format!("{} must be at least {}", field.label, min),
                            );
                        } else if let Some(max) = max
                            && value > *max
                        {
                            errors.insert(
                                field.name.clone(),
                                format!("{} must be at most {}", field.label, max),
                            );
                        } else {
                            values.push((field.name.clone(), value));
                        }
                    }
                },
                FieldRule::Optional { default } => {
                    values.push((field.name.clone(), entered.unwrap_or(*default)));
                }
            }
        }

        if errors.is_empty() {
            Ok(InputRecord { values })
        } else {
            Err(errors)
        }
    }
}

fn compile_field(field: &FieldDescriptor) -> FieldRule {
    if field.required {
        FieldRule::Required {
            min: field.min,
            max: field.max,
        }
    } else {
        FieldRule::Optional { default: 0.0 }
    }
}

/// Parse user-entered text as a finite f64. Whitespace is trimmed;
/// NaN and infinities count as unparsable.
fn parse_finite(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Fully validated, schema-complete numeric payload for `POST predict`.
///
/// Serializes as a flat JSON object with keys in schema order. Built on
/// each submission attempt and discarded once the attempt resolves.
#[derive(Debug, Clone, PartialEq)]
pub struct InputRecord {
    values: Vec<(String, f64)>,
}

impl InputRecord {
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(n, v)| (n.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Serialize for InputRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, value) in &self.values {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
