//! Parsing of command-line measurement and label arguments into the raw
//! form the core validator consumes.

use std::collections::BTreeMap;

use anyhow::{Context, bail};

/// Parse `NAME=VALUE` arguments into the raw entry map. Values stay as
/// strings; numeric coercion is the validator's job. A repeated name
/// keeps the last value, like re-typing into the same form field.
pub fn parse_pairs(args: &[String]) -> anyhow::Result<BTreeMap<String, String>> {
    let mut raw = BTreeMap::new();
    for arg in args {
        let (name, value) = arg
            .split_once('=')
            .with_context(|| format!("expected NAME=VALUE, got {arg:?}"))?;
        if name.is_empty() {
            bail!("expected NAME=VALUE, got {arg:?}");
        }
        raw.insert(name.to_string(), value.to_string());
    }
    Ok(raw)
}

/// Parse an outcome label argument. Accepts the wire values `0`/`1` and
/// the words `benign`/`malignant`; anything else passes through as an
/// out-of-range number so the request constructor reports it as a
/// field-level error.
pub fn parse_label(arg: &str) -> i64 {
    match arg.trim().to_ascii_lowercase().as_str() {
        "benign" => 0,
        "malignant" => 1,
        other => other.parse().unwrap_or(-1),
    }
}
