//! Configuration Types
//!
//! All configuration structures with sensible defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::latency::MAX_SCALE;
use crate::constants::storage::DEFAULT_DB_PATH;
use crate::engine::SimulatedLatency;
use crate::export::ExportFormat;
use crate::types::{Result, WebHuntError};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Report engine settings
    pub engine: EngineConfig,

    /// Saved-report storage settings
    pub storage: StorageConfig,

    /// Rendering defaults
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            engine: EngineConfig::default(),
            storage: StorageConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `WebHuntError::Config` on validation failure.
    pub fn validate(&self) -> Result<()> {
        let scale = self.engine.latency_scale;
        if !scale.is_finite() || !(0.0..=MAX_SCALE).contains(&scale) {
            return Err(WebHuntError::Config(format!(
                "engine.latency_scale must be between 0.0 and {}, got {}",
                MAX_SCALE, scale
            )));
        }

        if self.storage.path.as_os_str().is_empty() {
            return Err(WebHuntError::Config(
                "storage.path must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Latency derived from `engine.latency_scale`
    pub fn latency(&self) -> SimulatedLatency {
        SimulatedLatency::scaled(self.engine.latency_scale)
    }
}

// =============================================================================
// Engine Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Multiplier on simulated analysis time (0 = no pauses, 1 = real time)
    pub latency_scale: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { latency_scale: 1.0 }
    }
}

// =============================================================================
// Storage Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite file for saved reports
    pub path: PathBuf,

    /// Save every generated report without `--save`
    pub auto_save: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DB_PATH),
            auto_save: false,
        }
    }
}

// =============================================================================
// Output Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Default format when `--format` is not given
    pub format: ExportFormat,
}

// =============================================================================
// Tests
// =============================================================================
