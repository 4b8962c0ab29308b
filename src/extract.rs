//! Free-function API using the default configuration
//!
//! These mirror the [`Normalizer`] methods with stock header names, the 422
//! validation status and the truthy paging policy.

use std::sync::{Arc, LazyLock};

use serde_json::Value;

use crate::models::{Flash, PagedBody, Paging, Response, ServiceResult};
use crate::normalizer::Normalizer;

static DEFAULT_NORMALIZER: LazyLock<Normalizer> = LazyLock::new(Normalizer::default);

/// Build the uniform result for an error and/or response
#[must_use]
pub fn create_result(error: Option<Value>, response: Option<Response>) -> ServiceResult {
    DEFAULT_NORMALIZER.create_result(error, response)
}

/// The body of a 422 response, otherwise an empty object
#[must_use]
pub fn get_validation_errors(response: Option<&Response>) -> Arc<Value> {
    DEFAULT_NORMALIZER.validation_errors(response)
}

/// `{type, msg}` from `x-flash-type` and `x-flash-message` when both are set
#[must_use]
pub fn get_flash(response: Option<&Response>) -> Option<Flash> {
    DEFAULT_NORMALIZER.flash(response)
}

/// `{start, limit, total}` from the `x-paging-*` headers when any is non-zero
#[must_use]
pub fn get_paging(response: Option<&Response>) -> Option<Paging> {
    DEFAULT_NORMALIZER.paging(response)
}

/// The response body
#[must_use]
pub fn get_body(response: Option<&Response>) -> Option<Arc<Value>> {
    Normalizer::body(response)
}

/// The response body decorated with its paging window
#[must_use]
pub fn get_result(response: Option<&Response>) -> Option<PagedBody> {
    DEFAULT_NORMALIZER.result(response)
}

/// The response's `statusCode` attribute
#[must_use]
pub fn get_status_code(response: Option<&Response>) -> Option<u16> {
    Normalizer::status_code(response)
}

/// The error's `message`, or the error itself
#[must_use]
pub fn get_error_message(error: Option<&Value>) -> Option<Value> {
    Normalizer::error_message(error)
}

/// Convert a Rust error into an error value carrying its message
///
/// ```
/// use service_result::{create_result, error_value};
///
/// let err = std::io::Error::other("connection reset");
/// let result = create_result(Some(error_value(&err)), None);
/// assert_eq!(result.error_text().as_deref(), Some("connection reset"));
/// ```
#[must_use]
pub fn error_value(error: &dyn std::error::Error) -> Value {
    serde_json::json!({ "message": error.to_string() })
}
