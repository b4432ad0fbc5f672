//! Domain-driven configuration for the reqprobe verification suite
//!
//! This crate provides modular configuration split by functional domains,
//! with validation, defaults, and environment variable support. The suite
//! loads a single `ReqprobeConfig` once, before any scenario runs, and
//! treats it as read-only from then on.

pub mod error;
pub mod loader;
pub mod validation;

// Domain-specific configuration modules
pub mod domains;

// Re-export main types
pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;

// Re-export domain configurations
pub use domains::{
    grid::GridConfig, http::HttpConfig, logging::LoggingConfig, target::TargetConfig,
    ReqprobeConfig,
};

// Re-export utilities
pub use domains::utils::serde_duration;
