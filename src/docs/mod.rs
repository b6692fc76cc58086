//! Generated API documentation
#[cfg(feature = "openapi")]
pub mod openapi;
