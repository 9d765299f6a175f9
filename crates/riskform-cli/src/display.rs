//! Terminal rendering for schemas, prediction results, and submissions.
//!
//! Results print as a vertical card; contributions as horizontal bars
//! scaled by magnitude, in the order the service ranked them.

use riskform_core::contrib::{self, Direction};
use riskform_core::prediction::{Contribution, PredictionResult, RiskLabel, SubmissionDetail};
use riskform_core::rules::FieldErrors;
use riskform_core::schema::FeatureSchema;

const MAX_BAR_WIDTH: usize = 24;

/// Print the field list the service currently accepts.
pub fn print_schema(schema: &FeatureSchema) {
    println!("Input fields ({}):", schema.len());
    for field in schema.fields() {
        let marker = if field.required { "*" } else { " " };
        let range = match (field.min, field.max) {
            (Some(min), Some(max)) => format!("[{min}, {max}]"),
            (Some(min), None) => format!(">= {min}"),
            (None, Some(max)) => format!("<= {max}"),
            (None, None) => String::new(),
        };
        print!("  {}{:<24} {:<22} {:<12}", marker, field.name, field.label, range);
        if let Some(hint) = &field.placeholder {
            print!("  {hint}");
        }
        println!();
    }
    println!();
    println!("* = required. Optional fields default to 0 when left out.");
}

/// Print a prediction result as a vertical card.
pub fn print_result(result: &PredictionResult) {
    println!("=== Submission #{} ===", result.submission_id);
    println!();
    println!("  {:<26} {}", "prediction", label_text(result.prediction_label));
    println!(
        "  {:<26} {}",
        "probability of malignancy",
        contrib::format_probability(result.probability_malignant)
    );
    println!("  {:<26} {}", "model version", result.model_version);
    println!();
    print_contributions(&result.top_contributions);
}

/// Print a stored submission with its confirmation metadata.
pub fn print_submission(detail: &SubmissionDetail) {
    println!("=== Submission #{} ===", detail.submission_id);
    println!();
    println!("  {:<26} {}", "prediction", label_text(detail.prediction_label));
    println!(
        "  {:<26} {}",
        "probability of malignancy",
        contrib::format_probability(detail.probability_malignant)
    );
    println!("  {:<26} {}", "model version", detail.model_version);
    println!("  {:<26} {}", "submitted at", detail.submitted_at);
    match (detail.confirmed_label, &detail.confirmed_at) {
        (Some(label), Some(at)) => {
            let text = if label == 1 { "malignant" } else { "benign" };
            println!("  {:<26} {} ({})", "confirmed outcome", text, at);
        }
        (Some(label), None) => {
            let text = if label == 1 { "malignant" } else { "benign" };
            println!("  {:<26} {}", "confirmed outcome", text);
        }
        _ => println!("  {:<26} not yet confirmed", "confirmed outcome"),
    }
    println!();
    print_contributions(&detail.top_contributions);
}

fn label_text(label: RiskLabel) -> &'static str {
    match label {
        RiskLabel::Malignant => "MALIGNANT (higher risk)",
        RiskLabel::Benign => "benign (lower risk)",
    }
}

/// Bar chart of feature contributions, service order preserved.
fn print_contributions(contributions: &[Contribution]) {
    let model = contrib::to_display_model(contributions);
    if model.is_empty() {
        println!("No contribution data available for this prediction.");
        return;
    }

    println!("Feature contributions (+ increases risk, - decreases risk):");
    let max_magnitude = model
        .iter()
        .map(|c| c.magnitude)
        .fold(0.0_f64, f64::max);

    for entry in &model {
        let width = if max_magnitude > 0.0 {
            ((entry.magnitude / max_magnitude) * MAX_BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let bar = match entry.direction {
            Direction::IncreasesRisk => "+".repeat(width.max(1)),
            Direction::DecreasesRisk => "-".repeat(width.max(1)),
        };
        println!(
            "  {:<26} {:<25} {}",
            entry.feature_label,
            bar,
            contrib::format_contribution(entry.signed_value)
        );
    }
}

/// Per-field validation errors, one line each, nothing sent anywhere.
pub fn print_field_errors(errors: &FieldErrors) {
    eprintln!("Input is not valid:");
    for (name, message) in errors {
        eprintln!("  {:<24} {}", name, message);
    }
}

/// The research disclaimer shown before first use.
pub fn print_disclaimer() {
    println!("This tool is for research and educational purposes only and is");
    println!("not a medical device or diagnostic tool. It may be inaccurate or");
    println!("incomplete. Do not rely on it to make medical decisions. Always");
    println!("consult a qualified healthcare professional.");
}
