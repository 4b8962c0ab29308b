//! The normalized result record
//!
//! A `ServiceResult` is built once per call by [`crate::Normalizer`] and is
//! read-only afterwards. Its `body`, `result` and (for 422 responses)
//! `validation_errors` fields share one `Arc` with the originating response
//! rather than holding copies.

use std::sync::Arc;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

use super::{Flash, Paging, Response};

/// Key under which paging is exposed on a result body
pub const PAGING_KEY: &str = "paging";

/// A response body decorated with its paging window
///
/// The body is not modified. Serializing an object body emits its fields with
/// a `paging` entry added; any other body is emitted unchanged. Paging is
/// only attached to object and array bodies, never to scalars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagedBody {
    body: Arc<Value>,
    paging: Option<Paging>,
}

impl PagedBody {
    /// Wrap a body with an optional paging window
    #[must_use]
    pub const fn new(body: Arc<Value>, paging: Option<Paging>) -> Self {
        Self { body, paging }
    }

    /// The undecorated body
    #[must_use]
    pub const fn body(&self) -> &Arc<Value> {
        &self.body
    }

    /// The attached paging window
    #[must_use]
    pub const fn paging(&self) -> Option<&Paging> {
        self.paging.as_ref()
    }

    /// Build an owned JSON value with paging merged into object bodies
    #[must_use]
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| self.body.as_ref().clone())
    }
}

impl Serialize for PagedBody {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let Value::Object(fields) = self.body.as_ref() else {
            return self.body.serialize(serializer);
        };

        let mut map = serializer.serialize_map(None)?;
        for (key, value) in fields.iter().filter(|(key, _)| key.as_str() != PAGING_KEY) {
            map.serialize_entry(key, value)?;
        }
        if let Some(paging) = &self.paging {
            map.serialize_entry(PAGING_KEY, paging)?;
        }
        map.end()
    }
}

/// Uniform record describing the outcome of an HTTP call
///
/// Every field is always serialized; absent values become `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResult {
    /// True iff no (truthy) error was supplied
    pub success: bool,
    /// Flash notification from the response headers
    pub flash: Option<Flash>,
    /// Body of a 422 response, otherwise an empty object
    pub validation_errors: Arc<Value>,
    /// Raw response body
    pub body: Option<Arc<Value>>,
    /// Paging window from the response headers
    pub paging: Option<Paging>,
    /// Body decorated with paging
    pub result: Option<PagedBody>,
    /// The error as supplied by the caller
    pub error: Option<Value>,
    /// The error's `message`, or the error itself
    pub error_message: Option<Value>,
    /// The response as supplied by the caller
    pub response: Option<Response>,
    /// The response's `statusCode` attribute
    pub status_code: Option<u16>,
}

impl ServiceResult {
    /// Whether the call succeeded
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.success
    }

    /// Whether the validation errors carry anything
    ///
    /// The empty-object default and empty containers count as no errors.
    #[must_use]
    pub fn has_validation_errors(&self) -> bool {
        match self.validation_errors.as_ref() {
            Value::Null => false,
            Value::Object(fields) => !fields.is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::String(text) => !text.is_empty(),
            Value::Bool(_) | Value::Number(_) => true,
        }
    }

    /// Validation error entry for a field, when the 422 body is an object
    #[must_use]
    pub fn validation_error(&self, field: &str) -> Option<&Value> {
        self.validation_errors.get(field)
    }

    /// Error message rendered as text
    #[must_use]
    pub fn error_text(&self) -> Option<String> {
        self.error_message.as_ref().map(|message| match message {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })
    }
}
