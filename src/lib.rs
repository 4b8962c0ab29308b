//! service-result - Normalize HTTP client responses into a uniform result record
//!
//! Given a caller-supplied error and/or an HTTP response, this library builds a
//! [`ServiceResult`] exposing a success flag, the body, pagination and flash
//! metadata carried in headers, 422 validation errors, and error details.
//!
//! ```
//! use serde_json::json;
//! use service_result::{Response, create_result};
//!
//! let response = Response::new()
//!     .with_status(200)
//!     .with_body(json!([1, 2, 3]))
//!     .with_header("x-paging-limit", 24);
//!
//! let result = create_result(None, Some(response));
//! assert!(result.success);
//! assert_eq!(result.paging.and_then(|p| p.limit), Some(24));
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod extract;
pub mod models;
pub mod normalizer;
pub mod output;
pub mod paths;
pub mod truthy;

pub use config::{ConfigError, HeaderNames, NormalizerConfig, PagingPresence};
pub use extract::{
    create_result, error_value, get_body, get_error_message, get_flash, get_paging, get_result,
    get_status_code, get_validation_errors,
};
pub use models::{Flash, HeaderValue, Headers, InputError, PagedBody, Paging, Response, ServiceResult};
pub use normalizer::Normalizer;
