//! Received responses and verification

use crate::errors::HttpError;
use crate::schema;
use crate::spec::ConcreteExpectation;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// A received HTTP response.
///
/// The body is kept as raw text so a scenario can verify the status first
/// and then extract it as a typed model, a JSON value for pointer
/// assertions, or validate it against a schema document.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl ApiResponse {
    /// Verify the response against a resolved expectation.
    ///
    /// Logs status and body per the expectation's log detail, then checks
    /// the status code. A mismatch reports expected vs. actual together
    /// with the body the service returned.
    pub fn verify(&self, expectation: &ConcreteExpectation) -> Result<&Self, HttpError> {
        if expectation.log.status {
            info!("<-- {}", self.status);
        }
        if expectation.log.body {
            if self.body.is_empty() {
                info!("<-- body: <empty>");
            } else {
                info!("<-- body: {}", self.body);
            }
        }

        if self.status != expectation.status {
            return Err(HttpError::UnexpectedStatus {
                expected: expectation.status,
                actual: self.status,
                body: self.body.clone(),
            });
        }

        Ok(self)
    }

    /// Deserialize the body into a payload model.
    ///
    /// All-or-nothing: malformed JSON or a field whose JSON type disagrees
    /// with the model fails the extraction. Keys the model does not declare
    /// are ignored.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, HttpError> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Parse the body as a JSON value for pointer-based field assertions
    pub fn json_value(&self) -> Result<JsonValue, HttpError> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Validate the body against a schema document stored at the given path
    pub fn matches_schema(&self, schema_path: impl AsRef<Path>) -> Result<&Self, HttpError> {
        let body = self.json_value()?;
        schema::validate_json_with_schema_file(&body, schema_path.as_ref())?;
        Ok(self)
    }

    /// Whether the body is empty
    pub fn is_empty_body(&self) -> bool {
        self.body.is_empty()
    }
}
