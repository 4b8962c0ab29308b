//! Single-extractor commands

use std::path::Path;

use super::input;
use service_result::output::{FlashOutput, OutputMode, PagingOutput, Render, ValidationOutput};

/// Print the paging window of a response
pub fn paging(file: Option<&str>, config_path: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let normalizer = input::normalizer(config_path)?;
    let response = input::read_response(file)?;

    PagingOutput {
        paging: normalizer.paging(Some(&response)),
    }
    .render(mode);
    Ok(())
}

/// Print the flash message of a response
pub fn flash(file: Option<&str>, config_path: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let normalizer = input::normalizer(config_path)?;
    let response = input::read_response(file)?;

    FlashOutput {
        flash: normalizer.flash(Some(&response)),
    }
    .render(mode);
    Ok(())
}

/// Print the validation errors of a response
pub fn validation_errors(
    file: Option<&str>,
    config_path: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let normalizer = input::normalizer(config_path)?;
    let response = input::read_response(file)?;

    ValidationOutput {
        validation_errors: normalizer.validation_errors(Some(&response)),
    }
    .render(mode);
    Ok(())
}
