//! Target API configuration

use crate::error::ConfigResult;
use crate::validation::{validate_required_string, validate_url, Validatable};
use serde::{Deserialize, Serialize};

/// Configuration for the REST API under verification
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Base address of the target service
    #[serde(default = "default_base_uri")]
    pub base_uri: String,

    /// Path segment prepended to every endpoint path
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            base_uri: default_base_uri(),
            base_path: default_base_path(),
        }
    }
}

impl Validatable for TargetConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_url(&self.base_uri, "base_uri", self.domain_name())?;
        validate_required_string(&self.base_path, "base_path", self.domain_name())?;

        if !self.base_path.starts_with('/') {
            return Err(self.validation_error("base_path must start with '/'"));
        }

        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "target"
    }
}

// Default value functions
fn default_base_uri() -> String {
    "https://reqres.in".to_string()
}

fn default_base_path() -> String {
    "/api".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_config_defaults() {
        let config = TargetConfig::default();
        assert_eq!(config.base_uri, "https://reqres.in");
        assert_eq!(config.base_path, "/api");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_target_config_validation() {
        let mut config = TargetConfig::default();
        config.base_uri = "not a url".to_string();
        assert!(config.validate().is_err());

        config = TargetConfig::default();
        config.base_path = "api".to_string();
        assert!(config.validate().is_err());
    }
}
