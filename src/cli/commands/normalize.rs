//! Normalize command - build the uniform result record

use std::path::Path;

use anyhow::Context;
use serde_json::Value;

use super::input;
use service_result::output::{OutputMode, Render};

/// Normalize a response and optional error
pub fn normalize(
    file: Option<&str>,
    error: Option<&str>,
    error_json: Option<&str>,
    config_path: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let normalizer = input::normalizer(config_path)?;
    let response = input::read_response(file)?;

    let error = match (error, error_json) {
        (Some(message), _) => Some(Value::String(message.to_string())),
        (None, Some(json)) => {
            Some(serde_json::from_str(json).context("--error-json is not valid JSON")?)
        },
        (None, None) => None,
    };

    let result = normalizer.create_result(error, Some(response));
    result.render(mode);
    Ok(())
}
