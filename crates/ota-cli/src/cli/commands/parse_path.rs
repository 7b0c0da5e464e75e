//! Parse-path command: show the parameters a PLIST request path carries.

use anyhow::{bail, Result};
use ota_core::config;
use ota_core::params::{parse_parameter_path, Entry, ParameterList};

pub fn run_parse_path(path: &str, marker: Option<&str>, json: bool) -> Result<()> {
    let marker = match marker {
        Some(m) => m.to_string(),
        None => config::load_or_init()?.service_name,
    };
    let Some(params) = parse_parameter_path(Some(path), &marker)? else {
        bail!("marker segment {marker:?} not found in {path}");
    };
    tracing::debug!(path, marker = %marker, entries = params.len(), "parsed path");

    if json {
        println!("{}", serde_json::to_string(&params)?);
    } else {
        print!("{}", format_entries(&params));
    }
    Ok(())
}

/// One line per entry: `key=value`, or the bare value.
fn format_entries(params: &ParameterList) -> String {
    params
        .entries()
        .iter()
        .map(|entry| match entry {
            Entry::Pair(k, v) => format!("{k}={v}\n"),
            Entry::Value(v) => format!("{v}\n"),
        })
        .collect()
}
