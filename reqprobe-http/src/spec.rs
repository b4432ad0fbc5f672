//! Reusable request and response specifications
//!
//! A specification is an immutable bundle of the configuration many
//! scenarios share: where requests go, which content type they carry, and
//! which parts of the exchange are logged. Individual scenarios supply only
//! what varies per call through [`RequestOverrides`]. Composition is pure;
//! dispatching the built request is a separate step on
//! [`ApiClient`](crate::client::ApiClient).

use crate::errors::HttpError;
use crate::types::HttpMethod;
use serde::Serialize;
use url::Url;

/// JSON content type shared by most request specifications
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Which parts of an outgoing request are logged
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestLogDetail {
    pub uri: bool,
    pub body: bool,
}

/// Which parts of a received response are logged
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseLogDetail {
    pub status: bool,
    pub body: bool,
}

/// Immutable request configuration shared across scenarios.
///
/// Constructed once with the builder methods below and then only read.
/// All fields are private; nothing can mutate a specification after it has
/// been built, so one instance is safely shared by reference between
/// concurrently running scenarios.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    base_uri: String,
    base_path: String,
    content_type: Option<String>,
    log: RequestLogDetail,
}

impl RequestSpec {
    /// Create a specification rooted at the given base address and path
    pub fn new(base_uri: impl Into<String>, base_path: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
            base_path: base_path.into(),
            content_type: None,
            log: RequestLogDetail::default(),
        }
    }

    /// Set the default content type for requests built from this spec
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Shorthand for `application/json`
    pub fn with_json_content(self) -> Self {
        self.with_content_type(CONTENT_TYPE_JSON)
    }

    /// Log the resolved request URI
    pub fn log_uri(mut self) -> Self {
        self.log.uri = true;
        self
    }

    /// Log the outgoing request body
    pub fn log_body(mut self) -> Self {
        self.log.body = true;
        self
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn log_detail(&self) -> RequestLogDetail {
        self.log
    }
}

/// Per-call deltas merged onto a [`RequestSpec`] by [`build_request`]
#[derive(Debug, Clone)]
pub struct RequestOverrides {
    method: HttpMethod,
    path: String,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    content_type: Option<String>,
    body: Option<String>,
}

impl RequestOverrides {
    /// Create overrides for the given method and endpoint path
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            content_type: None,
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Patch, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Append a query parameter
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Append a header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Override the content type of the base specification for this call
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Serialize a payload model as the JSON request body
    pub fn json_body<T: Serialize>(mut self, body: &T) -> Result<Self, HttpError> {
        self.body = Some(serde_json::to_string(body)?);
        Ok(self)
    }

    /// Use a pre-rendered string as the request body
    pub fn raw_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// A fully resolved request description with no remaining defaults
#[derive(Debug, Clone)]
pub struct ConcreteRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub log: RequestLogDetail,
}

/// Immutable response expectations shared across scenarios
#[derive(Debug, Clone)]
pub struct ResponseSpec {
    expected_status: u16,
    log: ResponseLogDetail,
}

impl ResponseSpec {
    /// Expect the given status code
    pub fn status(expected_status: u16) -> Self {
        Self {
            expected_status,
            log: ResponseLogDetail::default(),
        }
    }

    /// Log the received status line
    pub fn log_status(mut self) -> Self {
        self.log.status = true;
        self
    }

    /// Log the received response body
    pub fn log_body(mut self) -> Self {
        self.log.body = true;
        self
    }

    pub fn expected_status(&self) -> u16 {
        self.expected_status
    }

    pub fn log_detail(&self) -> ResponseLogDetail {
        self.log
    }
}

/// Resolved expectation a response is verified against
#[derive(Debug, Clone, Copy)]
pub struct ConcreteExpectation {
    pub status: u16,
    pub log: ResponseLogDetail,
}

/// Merge a request specification with per-call overrides.
///
/// Override values win where both sides specify one. The endpoint path is
/// resolved under the spec's base path, and query pairs are percent-encoded
/// into the final URL. Pure; no I/O happens here.
pub fn build_request(
    spec: &RequestSpec,
    overrides: RequestOverrides,
) -> Result<ConcreteRequest, HttpError> {
    let mut url = Url::parse(spec.base_uri())
        .map_err(|e| HttpError::InvalidUrl(format!("{}: {}", spec.base_uri(), e)))?;

    let path = format!(
        "{}/{}",
        spec.base_path().trim_end_matches('/'),
        overrides.path.trim_start_matches('/')
    );
    url.set_path(&path);

    for (name, value) in &overrides.query {
        url.query_pairs_mut().append_pair(name, value);
    }

    let mut headers = Vec::with_capacity(overrides.headers.len() + 1);
    let content_type = overrides
        .content_type
        .as_deref()
        .or(spec.content_type());
    if let Some(content_type) = content_type {
        headers.push(("Content-Type".to_string(), content_type.to_string()));
    }
    headers.extend(overrides.headers);

    Ok(ConcreteRequest {
        method: overrides.method,
        url,
        headers,
        body: overrides.body,
        log: spec.log_detail(),
    })
}

/// Resolve the expectation a scenario verifies its response against. Pure.
pub fn build_expectation(spec: &ResponseSpec) -> ConcreteExpectation {
    ConcreteExpectation {
        status: spec.expected_status(),
        log: spec.log_detail(),
    }
}
