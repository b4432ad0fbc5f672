//! Request/response specifications and HTTP dispatch for reqprobe
//!
//! This crate provides the reusable machinery of the verification suite:
//! immutable request/response specifications with pure composition, a thin
//! HTTP client over reqwest configured from the suite configuration, typed
//! response extraction, and JSON-schema validation as a first-class
//! assertion primitive.

pub mod client;
pub mod errors;
pub mod response;
pub mod schema;
pub mod spec;
pub mod types;

// Re-export main types for convenience
pub use client::ApiClient;
pub use errors::HttpError;
pub use response::ApiResponse;
pub use spec::{
    build_expectation, build_request, ConcreteExpectation, ConcreteRequest, RequestLogDetail,
    RequestOverrides, RequestSpec, ResponseLogDetail, ResponseSpec,
};
pub use types::{HttpMethod, HttpMethodError};
