/// Shared utilities and error types
///
/// This module contains cross-cutting concerns used by all layers:
/// the common Result alias, the error taxonomy, and filesystem
/// safety helpers.
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
