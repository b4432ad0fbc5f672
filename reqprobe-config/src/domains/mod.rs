//! Domain-specific configuration modules

pub mod grid;
pub mod http;
pub mod logging;
pub mod target;
pub mod utils;

use crate::error::ConfigResult;
use crate::validation::Validatable;
use serde::{Deserialize, Serialize};

/// Main reqprobe configuration combining all domains
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReqprobeConfig {
    /// Target API configuration
    #[serde(default)]
    pub target: target::TargetConfig,

    /// Browser grid configuration
    #[serde(default)]
    pub grid: grid::GridConfig,

    /// HTTP client configuration
    #[serde(default)]
    pub http: http::HttpConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: logging::LoggingConfig,
}

impl ReqprobeConfig {
    /// Validate all domain configurations
    pub fn validate_all(&self) -> ConfigResult<()> {
        self.target.validate()?;
        self.grid.validate()?;
        self.http.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ReqprobeConfig::default();
        assert!(config.validate_all().is_ok());
    }
}
