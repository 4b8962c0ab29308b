//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::fmt::Write as _;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::models::{Flash, Paging, ServiceResult};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Something that can be printed in either output mode
pub trait Render: Serialize {
    /// Human-readable text
    fn human(&self) -> String;

    /// Pretty-printed JSON
    fn json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Text for the given mode
    fn format(&self, mode: OutputMode) -> String {
        match mode {
            OutputMode::Human => self.human(),
            OutputMode::Json => self.json(),
        }
    }

    /// Print to stdout in the given mode
    fn render(&self, mode: OutputMode) {
        println!("{}", self.format(mode));
    }
}

fn compact(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

impl Render for ServiceResult {
    fn human(&self) -> String {
        let mut out = String::new();
        let outcome = if self.success { "success" } else { "failure" };
        let _ = writeln!(out, "Outcome: {outcome}");

        if let Some(response) = &self.response {
            let show = |code: Option<u16>| code.map_or_else(|| "-".to_string(), |c| c.to_string());
            let _ = writeln!(
                out,
                "Status: {} (statusCode {})",
                show(response.status),
                show(self.status_code)
            );
        }
        if let Some(message) = self.error_text() {
            let _ = writeln!(out, "Error: {message}");
        }
        if let Some(flash) = &self.flash {
            let _ = writeln!(out, "Flash: {flash}");
        }
        if let Some(paging) = &self.paging {
            let _ = writeln!(out, "Paging: {paging}");
        }
        if self.has_validation_errors() {
            let _ = writeln!(out, "Validation errors: {}", compact(&self.validation_errors));
        }
        match &self.body {
            Some(body) => {
                let _ = write!(out, "Body: {}", compact(body));
            },
            None => out.push_str("Body: (none)"),
        }
        out
    }
}

/// Result of a paging extraction
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PagingOutput {
    /// Extracted paging window
    pub paging: Option<Paging>,
}

impl Render for PagingOutput {
    fn human(&self) -> String {
        self.paging
            .map_or_else(|| "No paging headers.".to_string(), |paging| format!("Paging: {paging}"))
    }
}

/// Result of a flash extraction
#[derive(Debug, Clone, Serialize)]
pub struct FlashOutput {
    /// Extracted flash message
    pub flash: Option<Flash>,
}

impl Render for FlashOutput {
    fn human(&self) -> String {
        self.flash
            .as_ref()
            .map_or_else(|| "No flash message.".to_string(), |flash| format!("Flash: {flash}"))
    }
}

/// Result of a validation error extraction
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutput {
    /// Extracted validation errors
    pub validation_errors: Arc<Value>,
}

impl Render for ValidationOutput {
    fn human(&self) -> String {
        match self.validation_errors.as_ref() {
            Value::Object(fields) if fields.is_empty() => "No validation errors.".to_string(),
            Value::Object(fields) => {
                let mut out = String::from("Validation errors:");
                for (field, errors) in fields {
                    let _ = write!(out, "\n  {field}: {}", compact(errors));
                }
                out
            },
            other => format!("Validation errors: {}", compact(other)),
        }
    }
}
