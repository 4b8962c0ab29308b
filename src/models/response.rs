//! HTTP response model
//!
//! The reply handed over by an HTTP client layer. Every field is optional:
//! client layers differ in what they populate, and the normalizer treats a
//! missing field the same as a missing response.
//!
//! `status` and `statusCode` are kept as two separate attributes. `status` is
//! the one consulted for validation errors; `statusCode` is passed through
//! untouched. Both accept integral floats such as `422.0`, which some client
//! layers emit for numeric attributes.

use std::fs;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::headers::{HeaderValue, Headers};

/// Errors that can occur while reading a response document
#[derive(Debug, Error)]
pub enum InputError {
    /// IO error while reading the document
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Document is not a valid response
    #[error("invalid response document: {0}")]
    Json(#[from] serde_json::Error),
}

/// An HTTP client response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// Response payload, shared with any result built from this response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Arc<Value>>,

    /// HTTP status used for business logic (e.g. 422 detection)
    #[serde(
        default,
        deserialize_with = "integral_status",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<u16>,

    /// Status code attribute as populated by the client layer
    #[serde(
        default,
        deserialize_with = "integral_status",
        skip_serializing_if = "Option::is_none"
    )]
    pub status_code: Option<u16>,

    /// Response headers
    #[serde(default)]
    pub headers: Headers,
}

/// Read a status as `u16`, accepting integral floats (`422.0`)
#[allow(clippy::float_cmp, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn integral_status<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u16>, D::Error> {
    let Some(number) = Option::<serde_json::Number>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let status = if let Some(int) = number.as_u64() {
        u16::try_from(int).ok()
    } else {
        number
            .as_f64()
            .filter(|float| float.fract() == 0.0 && (0.0..=f64::from(u16::MAX)).contains(float))
            .map(|float| float as u16)
    };
    status
        .map(Some)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid status {number}, expected u16")))
}

impl Response {
    /// Create an empty response
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the body
    #[must_use]
    pub fn with_body(mut self, body: impl Into<Value>) -> Self {
        self.body = Some(Arc::new(body.into()));
        self
    }

    /// Set the body from an already shared value
    #[must_use]
    pub fn with_shared_body(mut self, body: Arc<Value>) -> Self {
        self.body = Some(body);
        self
    }

    /// Set the HTTP status
    #[must_use]
    pub const fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the `statusCode` attribute
    #[must_use]
    pub const fn with_status_code(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    /// Add a header
    #[must_use]
    pub fn with_header(mut self, name: &str, value: impl Into<HeaderValue>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Look up a header by name
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&HeaderValue> {
        self.headers.get(name)
    }

    /// Parse a response from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a response from a JSON reader
    pub fn from_reader(reader: impl Read) -> Result<Self, InputError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load a response from a JSON file
    pub fn from_path(path: &Path) -> Result<Self, InputError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}
