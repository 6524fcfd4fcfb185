//! Configuration types for termdiff operations.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default radius of a freshly opened neighborhood.
pub const DEFAULT_INITIAL_LAYERS: u32 = 1;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or
/// config files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Comparison settings
    pub diff: DiffConfig,
    /// Neighborhood exploration settings
    pub neighborhood: NeighborhoodConfig,
    /// Output settings of the command-line shell
    pub output: OutputConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Count display-text differences as changes.
    pub fn compare_display(mut self, compare: bool) -> Self {
        self.config.diff.compare_display = compare;
        self
    }

    /// Exclude a property code from comparison.
    pub fn ignore_property(mut self, code: impl Into<String>) -> Self {
        self.config.diff.ignored_properties.push(code.into());
        self
    }

    /// Set the radius a neighborhood opens with.
    pub fn initial_layers(mut self, layers: u32) -> Self {
        self.config.neighborhood.initial_layers = layers;
        self
    }

    /// Set the output format.
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section types
// ============================================================================

/// How two concepts present on both sides are compared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DiffConfig {
    /// Treat differing display text as a change. Off by default: only
    /// property values decide between changed and unchanged.
    pub compare_display: bool,
    /// Property codes left out of the comparison
    pub ignored_properties: Vec<String>,
}

/// Neighborhood exploration settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct NeighborhoodConfig {
    /// Radius a session opens with (at least 1)
    pub initial_layers: u32,
}

impl Default for NeighborhoodConfig {
    fn default() -> Self {
        Self {
            initial_layers: DEFAULT_INITIAL_LAYERS,
        }
    }
}

/// Output settings of the command-line shell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Print colors as plain hex values only
    pub no_color: bool,
}

/// Output format of the command-line shell
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Summary,
    /// Full JSON document
    Json,
}
