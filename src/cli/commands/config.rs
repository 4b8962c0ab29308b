//! Config command - show or initialize normalizer settings

use std::path::Path;

use anyhow::Context;

use crate::cli::app::ConfigAction;
use super::input;
use service_result::NormalizerConfig;
use service_result::output::OutputMode;

/// Show or initialize the configuration
pub fn config(action: ConfigAction, config_path: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => show(config_path, mode),
        ConfigAction::Init { force } => init(config_path, force),
    }
}

fn show(config_path: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let normalizer = input::normalizer(config_path)?;
    let config = normalizer.config();

    match mode {
        OutputMode::Human => print!("{}", config.to_toml_string()?),
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(config)?),
    }
    Ok(())
}

fn init(config_path: Option<&Path>, force: bool) -> anyhow::Result<()> {
    let path = config_path.map_or_else(NormalizerConfig::config_path, Path::to_path_buf);

    if path.exists() && !force {
        println!("Already initialized ({} exists).", path.display());
        println!("Use --force to overwrite.");
        return Ok(());
    }

    NormalizerConfig::default()
        .save(&path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Created {}", path.display());
    Ok(())
}
