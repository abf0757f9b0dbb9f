//! Water surface simulation: procedural wave heights over a fixed mesh and
//! approximate height queries against it.

mod field;
mod mesh;
mod sampler;

use glam::Vec2;

use crate::params::{ConfigError, FlowParams};

// Re-export public types
pub use field::WaveField;
pub use mesh::{PlaneMesh, Vertex};
pub use sampler::{PlaneTransform, Surface, SurfaceSampler};

/// Errors from building or querying the water surface
#[derive(thiserror::Error, Debug)]
pub enum OceanError {
    /// Mesh data is empty, absent or has out-of-range indices
    #[error("invalid mesh: {0}")]
    InvalidMesh(String),
    /// Height query against a field with no triangles
    #[error("surface query against a field with no triangles")]
    MissingGeometry,
    /// Commit target does not match the field's vertex count
    #[error("wave field has {field} vertices but mesh has {mesh}")]
    MeshMismatch { field: usize, mesh: usize },
    /// Wave parameters failed validation
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),
}

/// Scrolling UV offset for the water texture and normal map
#[derive(Debug, Clone, Default)]
pub struct WaterFlow {
    params: FlowParams,
    offset: Vec2,
}

impl WaterFlow {
    pub fn new(params: FlowParams) -> Self {
        Self {
            params,
            offset: Vec2::ZERO,
        }
    }

    /// Advance the scroll and return the offset to apply this frame
    ///
    /// The stored offset is wrapped back below 1 after it is returned, so
    /// the applied value can briefly exceed 1.
    pub fn update(&mut self, dt: f32) -> Vec2 {
        self.offset += Vec2::new(self.params.speed_u, self.params.speed_v) * dt;
        let applied = self.offset;

        if self.offset.x > 1.0 {
            self.offset.x -= 1.0;
        }
        if self.offset.y > 1.0 {
            self.offset.y -= 1.0;
        }
        applied
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }
}
