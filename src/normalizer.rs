//! Result normalizer
//!
//! Turns a caller-supplied error and an HTTP response into a
//! [`ServiceResult`]. Each field is extracted independently and every
//! extractor tolerates a missing response or error, so normalization never
//! fails.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use service_result::{Normalizer, NormalizerConfig, PagingPresence, Response};
//!
//! let config = NormalizerConfig {
//!     paging_presence: PagingPresence::AnyHeader,
//!     ..NormalizerConfig::default()
//! };
//! let normalizer = Normalizer::new(config);
//!
//! let response = Response::new().with_header("x-paging-start", 0);
//! assert!(normalizer.paging(Some(&response)).is_some());
//! ```

use std::sync::Arc;

use log::{debug, trace};
use serde_json::{Map, Value};

use crate::config::{NormalizerConfig, PagingPresence};
use crate::models::{Flash, PagedBody, Paging, Response, ServiceResult};
use crate::truthy;

/// Builds [`ServiceResult`]s according to a [`NormalizerConfig`]
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    config: NormalizerConfig,
}

impl Normalizer {
    /// Create a normalizer with the given configuration
    #[must_use]
    pub const fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    #[must_use]
    pub const fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Build the uniform result for an error and/or response
    #[must_use]
    pub fn create_result(&self, error: Option<Value>, response: Option<Response>) -> ServiceResult {
        let response_ref = response.as_ref();

        let success = !truthy::is_present(error.as_ref());
        let body = Self::body(response_ref);
        let paging = self.paging(response_ref);
        let flash = self.flash(response_ref);
        let validation_errors = self.validation_errors(response_ref);
        let status_code = Self::status_code(response_ref);
        let error_message = Self::error_message(error.as_ref());
        let result = Self::merge(body.clone(), paging);

        debug!(
            "normalized response: success={success} status={:?} paging={} flash={}",
            response_ref.and_then(|r| r.status),
            paging.is_some(),
            flash.is_some()
        );

        ServiceResult {
            success,
            flash,
            validation_errors,
            body,
            paging,
            result,
            error,
            error_message,
            response,
            status_code,
        }
    }

    /// Extract the paging window from the paging headers
    ///
    /// Returns `None` unless the configured [`PagingPresence`] policy is met.
    #[must_use]
    pub fn paging(&self, response: Option<&Response>) -> Option<Paging> {
        let response = response?;
        let names = &self.config.headers;
        let read = |name: &str| response.header(name).and_then(|value| value.parse_int());

        let paging = Paging {
            start: read(&names.paging_start),
            limit: read(&names.paging_limit),
            total: read(&names.paging_total),
        };
        let present = match self.config.paging_presence {
            PagingPresence::Truthy => paging.has_truthy_field(),
            PagingPresence::AnyHeader => paging.has_any_field(),
        };
        trace!("paging headers parsed to {paging} (present={present})");

        present.then_some(paging)
    }

    /// Extract the flash message when both flash headers are set
    #[must_use]
    pub fn flash(&self, response: Option<&Response>) -> Option<Flash> {
        let response = response?;
        let names = &self.config.headers;
        let kind = response.header(&names.flash_type).filter(|v| v.is_truthy())?;
        let msg = response.header(&names.flash_message).filter(|v| v.is_truthy())?;
        trace!("flash header found: {kind}");

        Some(Flash::new(kind.as_text(), msg.as_text()))
    }

    /// The body of a validation-status response, otherwise an empty object
    ///
    /// The returned `Arc` is the response's own body, not a copy. A
    /// validation-status response without a body yields `null`.
    #[must_use]
    pub fn validation_errors(&self, response: Option<&Response>) -> Arc<Value> {
        match response {
            Some(response) if response.status == Some(self.config.validation_status) => {
                trace!("validation status {} matched", self.config.validation_status);
                response.body.clone().unwrap_or_else(|| Arc::new(Value::Null))
            },
            _ => Arc::new(Value::Object(Map::new())),
        }
    }

    /// The response body
    #[must_use]
    pub fn body(response: Option<&Response>) -> Option<Arc<Value>> {
        response.and_then(|response| response.body.clone())
    }

    /// The body decorated with this normalizer's paging window
    #[must_use]
    pub fn result(&self, response: Option<&Response>) -> Option<PagedBody> {
        Self::merge(Self::body(response), self.paging(response))
    }

    /// The response's `statusCode` attribute
    #[must_use]
    pub fn status_code(response: Option<&Response>) -> Option<u16> {
        response.and_then(|response| response.status_code)
    }

    /// The error's `message` attribute when set, otherwise the error itself
    #[must_use]
    pub fn error_message(error: Option<&Value>) -> Option<Value> {
        let error = error.filter(|error| truthy::is_truthy(error))?;
        match error.get("message") {
            Some(message) if truthy::is_truthy(message) => Some(message.clone()),
            _ => Some(error.clone()),
        }
    }

    /// Paging is only attached to object and array bodies
    fn merge(body: Option<Arc<Value>>, paging: Option<Paging>) -> Option<PagedBody> {
        body.map(|body| {
            let paging = if matches!(*body, Value::Object(_) | Value::Array(_)) {
                paging
            } else {
                None
            };
            PagedBody::new(body, paging)
        })
    }
}
