//! Configuration module for termdiff.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - Command-line overrides
//!
//! # Configuration File
//!
//! Place a `.termdiff.yaml` file in your project root or `~/.config/termdiff/`:
//!
//! ```yaml
//! diff:
//!   compare_display: false
//!   ignored_properties: [effectiveDate]
//! neighborhood:
//!   initial_layers: 1
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{
    AppConfig, AppConfigBuilder, DiffConfig, NeighborhoodConfig, OutputConfig, OutputFormat,
    DEFAULT_INITIAL_LAYERS,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError, ConfigOverrides,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
