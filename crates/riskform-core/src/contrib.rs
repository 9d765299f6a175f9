//! Display model for feature contributions, plus result formatting.
//!
//! The service already orders contributions by relevance, so the ranker
//! never re-sorts; magnitude exists only for visual scaling.

use crate::prediction::Contribution;

/// Whether a contribution pushes the predicted probability up or down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    IncreasesRisk,
    DecreasesRisk,
}

/// One contribution, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayContribution {
    pub feature_label: String,
    pub signed_value: f64,
    pub magnitude: f64,
    pub direction: Direction,
}

/// Map raw contributions to the display model, preserving service order.
/// Empty input is a "no data" state, not an error.
pub fn to_display_model(contributions: &[Contribution]) -> Vec<DisplayContribution> {
    contributions
        .iter()
        .map(|c| DisplayContribution {
            feature_label: humanize_feature(&c.feature),
            signed_value: c.contribution,
            magnitude: c.contribution.abs(),
            direction: if c.contribution >= 0.0 {
                Direction::IncreasesRisk
            } else {
                Direction::DecreasesRisk
            },
        })
        .collect()
}

/// `radius_mean` -> `Radius Mean`. Purely presentational.
pub fn humanize_feature(name: &str) -> String {
    name.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `0.873` -> `"87.3%"`.
pub fn format_probability(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}

/// Sign-explicit three-decimal rendering: `0.12` -> `"+0.120"`.
pub fn format_contribution(contribution: f64) -> String {
    format!("{:+.3}", contribution)
}
