//! Data models for service-result
//!
//! Core abstractions:
//! - Response: the HTTP client's reply (body, status, headers), consumed as input
//! - Paging / Flash: metadata extracted from response headers
//! - `ServiceResult`: the uniform record produced by the normalizer

pub mod flash;
pub mod headers;
pub mod paging;
pub mod response;
pub mod service_result;

pub use flash::Flash;
pub use headers::{HeaderValue, Headers};
pub use paging::Paging;
pub use response::{InputError, Response};
pub use service_result::{PagedBody, ServiceResult};
