//! JSON schema validation
//!
//! Checking a body's structure against an externally stored schema document
//! is a first-class assertion in this suite, used where enumerating fields
//! one by one would restate the whole document.

use crate::errors::HttpError;
use jsonschema::Draft;
use serde_json::Value as JsonValue;
use std::fs;
use std::path::Path;

/// Validate JSON data against a schema.
///
/// Compiles the schema as Draft 7 and reports every violation, joined into
/// one message, rather than stopping at the first.
pub fn validate_json(data: &JsonValue, schema: &JsonValue) -> Result<(), HttpError> {
    let validator = jsonschema::options()
        .with_draft(Draft::Draft7)
        .build(schema)
        .map_err(|e| HttpError::SchemaValidation(format!("Failed to compile schema: {}", e)))?;

    let violations: Vec<String> = validator.iter_errors(data).map(|e| e.to_string()).collect();
    if !violations.is_empty() {
        return Err(HttpError::SchemaValidation(violations.join(", ")));
    }

    Ok(())
}

/// Parse a JSON schema document from a file
pub fn parse_schema(schema_path: &Path) -> Result<JsonValue, HttpError> {
    let schema_str = fs::read_to_string(schema_path).map_err(|e| HttpError::SchemaFile {
        path: schema_path.display().to_string(),
        message: e.to_string(),
    })?;

    serde_json::from_str(&schema_str).map_err(|e| HttpError::SchemaFile {
        path: schema_path.display().to_string(),
        message: e.to_string(),
    })
}

/// Validate JSON data against a schema loaded from a file.
///
/// Convenience combining [`parse_schema`] and [`validate_json`].
pub fn validate_json_with_schema_file(data: &JsonValue, schema_path: &Path) -> Result<(), HttpError> {
    let schema = parse_schema(schema_path)?;
    validate_json(data, &schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::NamedTempFile;

    fn user_schema() -> JsonValue {
        json!({
            "type": "object",
            "properties": {
                "id": {"type": "integer"},
                "email": {"type": "string"}
            },
            "required": ["id"]
        })
    }

    #[test]
    fn test_validate_json_success() {
        let data = json!({"id": 2, "email": "janet.weaver@reqres.in"});
        assert!(validate_json(&data, &user_schema()).is_ok());
    }

    #[test]
    fn test_validate_json_reports_all_violations() {
        let data = json!({"email": 7});
        let err = validate_json(&data, &user_schema()).unwrap_err();
        match err {
            HttpError::SchemaValidation(message) => {
                // Both the missing field and the wrong type are reported
                assert!(message.contains("id"));
                assert!(message.contains("7"));
            }
            other => panic!("Expected SchemaValidation, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_schema_from_file() {
        let schema = user_schema();
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), serde_json::to_string(&schema).unwrap()).unwrap();

        let parsed = parse_schema(temp_file.path()).unwrap();
        assert_eq!(parsed, schema);
    }

    #[test]
    fn test_parse_schema_file_not_found() {
        let result = parse_schema(Path::new("nonexistent.json"));
        assert!(matches!(result, Err(HttpError::SchemaFile { .. })));
    }

    #[test]
    fn test_validate_with_schema_file() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(
            temp_file.path(),
            serde_json::to_string(&user_schema()).unwrap(),
        )
        .unwrap();

        assert!(validate_json_with_schema_file(&json!({"id": 2}), temp_file.path()).is_ok());
        assert!(validate_json_with_schema_file(&json!({"email": "x"}), temp_file.path()).is_err());
    }
}
