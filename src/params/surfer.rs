//! Surfer movement parameters.

use serde::{Deserialize, Serialize};

use super::{ensure_finite, ConfigError};

/// Player movement, play-area bounds and hover offset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurferParams {
    /// Horizontal (XZ) speed at full input (meters per second)
    pub move_speed_m_per_s: f32,

    /// Yaw smoothing rate (slerp fraction per second, clamped to 1 per step)
    pub rotation_speed: f32,

    /// Play-area bounds in world meters
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,

    /// Height kept above the sampled water surface (meters)
    pub hover_height_m: f32,

    /// Collision sphere radius (meters)
    pub radius_m: f32,
}

impl Default for SurferParams {
    fn default() -> Self {
        Self {
            move_speed_m_per_s: 8.0,
            rotation_speed: 10.0,
            min_x: -40.0,
            max_x: 40.0,
            min_z: -40.0,
            max_z: 40.0,
            hover_height_m: 0.2,
            radius_m: 0.5,
        }
    }
}

impl SurferParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_finite("move_speed_m_per_s", self.move_speed_m_per_s)?;
        ensure_finite("rotation_speed", self.rotation_speed)?;
        ensure_finite("hover_height_m", self.hover_height_m)?;
        ensure_finite("radius_m", self.radius_m)?;
        ensure_finite("min_x", self.min_x)?;
        ensure_finite("max_x", self.max_x)?;
        ensure_finite("min_z", self.min_z)?;
        ensure_finite("max_z", self.max_z)?;
        if self.min_x > self.max_x || self.min_z > self.max_z {
            return Err(ConfigError::Invalid(format!(
                "surfer bounds are inverted: x {}..{}, z {}..{}",
                self.min_x, self.max_x, self.min_z, self.max_z
            )));
        }
        Ok(())
    }
}
