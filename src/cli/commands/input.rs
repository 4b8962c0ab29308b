//! Shared input handling for commands

use std::io;
use std::path::Path;

use anyhow::Context;

use service_result::{Normalizer, NormalizerConfig, Response};

/// Read a response document from a file, or stdin for `None` / `"-"`
pub fn read_response(file: Option<&str>) -> anyhow::Result<Response> {
    match file {
        None | Some("-") => {
            log::debug!("reading response from stdin");
            Response::from_reader(io::stdin().lock()).context("failed to read response from stdin")
        },
        Some(path) => {
            log::debug!("reading response from {path}");
            Response::from_path(Path::new(path))
                .with_context(|| format!("failed to read response from {path}"))
        },
    }
}

/// Build a normalizer from the explicit or default config file
pub fn normalizer(config_path: Option<&Path>) -> anyhow::Result<Normalizer> {
    let config = NormalizerConfig::load_or_default(config_path).context("failed to load config")?;
    Ok(Normalizer::new(config))
}
