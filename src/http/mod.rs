//! HTTP protocol layer module
//!
//! Response building decoupled from the request handler.

pub mod response;

// Re-export commonly used builders
pub use response::build_greeting_response;
