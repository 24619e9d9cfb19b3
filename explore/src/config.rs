//! Configuration for how locations are declared.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Description given to locations that were not described.
pub const DEFAULT_DESCRIPTION: &str = "A rather generic-looking location. Nothing to see here.";

/// What `add_edge` does when an edge collides with an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EdgePolicy {
    /// Repeated edges to the same destination refine the existing edge.
    #[default]
    Merge,
    /// Like `Merge`, but an edge whose display name is already taken by any
    /// edge of the location is rejected.
    RejectDuplicateNames,
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings shared by every location a region builds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExploreConfig {
    /// Description for locations declared without one.
    pub default_description: String,

    /// Whether every location must name its region when constructed.
    pub require_region: bool,

    /// Collision handling for edges.
    pub edge_policy: EdgePolicy,
}

impl Default for ExploreConfig {
    fn default() -> Self {
        Self {
            default_description: DEFAULT_DESCRIPTION.to_string(),
            require_region: false,
            edge_policy: EdgePolicy::Merge,
        }
    }
}

impl ExploreConfig {
    /// Parse configuration from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Set the default description.
    pub fn with_default_description(mut self, description: impl Into<String>) -> Self {
        self.default_description = description.into();
        self
    }

    /// Require locations to be constructed with a region.
    pub fn with_required_region(mut self, required: bool) -> Self {
        self.require_region = required;
        self
    }

    /// Set the edge collision policy.
    pub fn with_edge_policy(mut self, policy: EdgePolicy) -> Self {
        self.edge_policy = policy;
        self
    }
}
