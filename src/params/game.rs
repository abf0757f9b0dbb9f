//! Hazard spawning and water texture flow parameters.

use serde::{Deserialize, Serialize};

use super::{ensure_finite, ConfigError};

/// Widest allowed rock placement half-range (meters)
pub const MAX_SPAWN_X_RANGE_M: f32 = 1.0e6;

/// Rock spawning schedule, placement and motion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RockParams {
    /// Time between spawns when the game starts (seconds)
    pub initial_spawn_interval_s: f32,

    /// Fastest spawn rate allowed (seconds)
    pub minimum_spawn_interval_s: f32,

    /// Interval decrease per second of gameplay (seconds per second)
    pub difficulty_ramp_rate: f32,

    /// Z coordinate rocks appear at (meters)
    pub spawn_z_m: f32,

    /// Rocks appear with x uniformly in [-range, range] (meters)
    pub spawn_x_range_m: f32,

    /// Uniform scale range
    pub min_scale: f32,
    pub max_scale: f32,

    /// Collision radius at scale 1 (meters)
    pub base_radius_m: f32,

    /// Travel speed toward the player along -Z (meters per second)
    pub speed_m_per_s: f32,

    /// Rocks behind this Z coordinate are removed (meters)
    pub destroy_z_m: f32,
}

impl Default for RockParams {
    fn default() -> Self {
        Self {
            initial_spawn_interval_s: 2.0,
            minimum_spawn_interval_s: 0.5,
            difficulty_ramp_rate: 0.02,
            spawn_z_m: 40.0,
            spawn_x_range_m: 35.0,
            min_scale: 0.5,
            max_scale: 1.5,
            base_radius_m: 0.5,
            speed_m_per_s: 0.1,
            destroy_z_m: -50.0,
        }
    }
}

impl RockParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_finite("initial_spawn_interval_s", self.initial_spawn_interval_s)?;
        ensure_finite("minimum_spawn_interval_s", self.minimum_spawn_interval_s)?;
        ensure_finite("difficulty_ramp_rate", self.difficulty_ramp_rate)?;
        ensure_finite("spawn_z_m", self.spawn_z_m)?;
        ensure_finite("spawn_x_range_m", self.spawn_x_range_m)?;
        ensure_finite("speed_m_per_s", self.speed_m_per_s)?;
        ensure_finite("destroy_z_m", self.destroy_z_m)?;
        ensure_finite("base_radius_m", self.base_radius_m)?;
        ensure_finite("min_scale", self.min_scale)?;
        ensure_finite("max_scale", self.max_scale)?;

        // A zero interval would spawn forever within one tick
        if self.minimum_spawn_interval_s <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "minimum_spawn_interval_s must be > 0, got {}",
                self.minimum_spawn_interval_s
            )));
        }
        if !(0.0..=MAX_SPAWN_X_RANGE_M).contains(&self.spawn_x_range_m) {
            return Err(ConfigError::Invalid(format!(
                "spawn_x_range_m must be in 0..={}, got {}",
                MAX_SPAWN_X_RANGE_M, self.spawn_x_range_m
            )));
        }
        if self.min_scale > self.max_scale {
            return Err(ConfigError::Invalid(format!(
                "rock scale range is inverted: {}..{}",
                self.min_scale, self.max_scale
            )));
        }
        Ok(())
    }
}

/// Water texture scroll speed (UV units per second)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowParams {
    pub speed_u: f32,
    pub speed_v: f32,
}

impl Default for FlowParams {
    fn default() -> Self {
        Self {
            speed_u: 0.05,
            speed_v: 0.05,
        }
    }
}

impl FlowParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_finite("speed_u", self.speed_u)?;
        ensure_finite("speed_v", self.speed_v)?;
        Ok(())
    }
}
