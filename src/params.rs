//! Parameter definitions with physical units and documented semantics.
//!
//! All tunables live here with:
//! - Physical units (meters, seconds, etc.)
//! - Documented ranges and meanings
//! - A `validate` pass so bad values are rejected before a session starts

mod game;
mod ocean;
mod surfer;

use std::path::Path;

use serde::{Deserialize, Serialize};

// Re-export all types
pub use game::{FlowParams, RockParams, MAX_SPAWN_X_RANGE_M};
pub use ocean::{MeshParams, WaveParams};
pub use surfer::SurferParams;

/// Errors raised while loading or validating configuration
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Wrapper for standard I/O errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Config file is not valid JSON for `GameConfig`
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Secondary wave amplitude divides by this, so zero is not allowed
    #[error("detail_multiplier must be non-zero")]
    ZeroDetailMultiplier,
    /// A parameter was NaN or infinite
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f32 },
    /// Any other out-of-range value
    #[error("{0}")]
    Invalid(String),
}

/// Reject NaN and infinities for a named parameter
pub(crate) fn ensure_finite(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { name, value })
    }
}

/// Complete game configuration (one JSON document)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mesh: MeshParams,
    pub waves: WaveParams,
    pub surfer: SurferParams,
    pub rocks: RockParams,
    pub flow: FlowParams,

    /// RNG seed for rock placement
    pub seed: u64,
}

impl GameConfig {
    /// Load configuration from a JSON file; missing fields take their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every parameter group
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.mesh.validate()?;
        self.waves.validate()?;
        self.surfer.validate()?;
        self.rocks.validate()?;
        self.flow.validate()?;
        Ok(())
    }
}
