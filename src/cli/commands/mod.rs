//! Command implementations

mod config;
mod extract;
mod input;
mod normalize;

pub use config::config;
pub use extract::{flash, paging, validation_errors};
pub use normalize::normalize;
