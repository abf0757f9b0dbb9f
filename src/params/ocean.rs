//! Water surface parameters: wave shape and mesh resolution.

use serde::{Deserialize, Serialize};

use super::{ensure_finite, ConfigError};

/// Wave displacement parameters
///
/// Height at a vertex is the sum of a primary sine along X and a secondary
/// cosine along Z whose frequency and amplitude are scaled by
/// `detail_multiplier`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveParams {
    /// Phase advance rate (radians per second of simulation time)
    pub wave_speed: f32,

    /// Primary wave amplitude in meters
    pub wave_scale: f32,

    /// Spatial frequency (radians per meter)
    pub wave_frequency: f32,

    /// Secondary wave frequency multiplier and amplitude divisor.
    /// Low values give a calm, long swell; high values give chop.
    /// Must be non-zero.
    pub detail_multiplier: f32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            wave_speed: 0.4,
            wave_scale: 0.05,
            wave_frequency: 0.5,
            detail_multiplier: 0.5,
        }
    }
}

impl WaveParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_finite("wave_speed", self.wave_speed)?;
        ensure_finite("wave_scale", self.wave_scale)?;
        ensure_finite("wave_frequency", self.wave_frequency)?;
        ensure_finite("detail_multiplier", self.detail_multiplier)?;
        if self.detail_multiplier == 0.0 {
            return Err(ConfigError::ZeroDetailMultiplier);
        }
        Ok(())
    }
}

/// Water plane mesh resolution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshParams {
    /// Quads per side (vertices per side = grid_size + 1)
    pub grid_size: usize,

    /// Spacing between grid vertices in meters
    pub grid_spacing_m: f32,
}

impl Default for MeshParams {
    fn default() -> Self {
        Self {
            grid_size: 10,       // 10x10 quads, 121 vertices
            grid_spacing_m: 8.0, // 80m plane, matches the ±40m play area
        }
    }
}

impl MeshParams {
    /// Total side length of the plane in meters
    pub fn extent_m(&self) -> f32 {
        self.grid_size as f32 * self.grid_spacing_m
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::Invalid("grid_size must be > 0".to_string()));
        }
        ensure_finite("grid_spacing_m", self.grid_spacing_m)?;
        if self.grid_spacing_m <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "grid_spacing_m must be > 0, got {}",
                self.grid_spacing_m
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_detail_multiplier_rejected() {
        let params = WaveParams {
            detail_multiplier: 0.0,
            ..WaveParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::ZeroDetailMultiplier)
        ));
    }

    #[test]
    fn test_negative_detail_multiplier_allowed() {
        let params = WaveParams {
            detail_multiplier: -0.5,
            ..WaveParams::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_nan_wave_speed_rejected() {
        let params = WaveParams {
            wave_speed: f32::NAN,
            ..WaveParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::NonFinite {
                name: "wave_speed",
                ..
            })
        ));
    }

    #[test]
    fn test_mesh_extent() {
        let mesh = MeshParams::default();
        assert_eq!(mesh.extent_m(), 80.0);
        assert!(MeshParams { grid_size: 0, ..mesh }.validate().is_err());
    }
}
