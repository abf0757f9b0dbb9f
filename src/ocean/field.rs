//! Procedural wave displacement over a fixed mesh topology.

use std::sync::Arc;

use glam::Vec2;

use super::mesh::{PlaneMesh, Vertex};
use super::OceanError;
use crate::params::{ConfigError, WaveParams};

/// Vertex heights of the water surface, recomputed every tick
///
/// Planar positions and topology are fixed at construction; only heights
/// move. `heights.len() == base_positions.len()` always holds and every
/// triangle index is a valid index into both.
#[derive(Debug, Clone)]
pub struct WaveField {
    base_positions: Vec<Vec2>,
    heights: Vec<f32>,
    triangles: Arc<[u32]>,
    params: WaveParams,
}

impl WaveField {
    /// Capture a field from mesh vertices and a shared triangle list
    pub fn new(
        vertices: &[Vertex],
        triangles: Arc<[u32]>,
        params: WaveParams,
    ) -> Result<Self, OceanError> {
        params.validate()?;

        if vertices.is_empty() {
            return Err(OceanError::InvalidMesh("mesh has no vertices".to_string()));
        }
        if triangles.len() % 3 != 0 {
            return Err(OceanError::InvalidMesh(format!(
                "index buffer length {} is not a multiple of 3",
                triangles.len()
            )));
        }
        if let Some(&bad) = triangles.iter().find(|&&i| i as usize >= vertices.len()) {
            return Err(OceanError::InvalidMesh(format!(
                "triangle index {} out of range for {} vertices",
                bad,
                vertices.len()
            )));
        }

        let base_positions = vertices
            .iter()
            .map(|v| Vec2::new(v.position[0], v.position[2]))
            .collect();
        let heights = vertices.iter().map(|v| v.position[1]).collect();

        log::debug!(
            "Wave field captured {} vertices, {} triangles",
            vertices.len(),
            triangles.len() / 3
        );

        Ok(Self {
            base_positions,
            heights,
            triangles,
            params,
        })
    }

    /// Capture a field from a mesh source, which may be absent
    pub fn from_mesh(mesh: Option<&PlaneMesh>, params: WaveParams) -> Result<Self, OceanError> {
        let mesh =
            mesh.ok_or_else(|| OceanError::InvalidMesh("no mesh supplied".to_string()))?;
        Self::new(&mesh.vertices, Arc::clone(&mesh.indices), params)
    }

    /// Recompute every vertex height for the given absolute simulation time
    ///
    /// Depends only on `time_s`, never on earlier calls, so repeated or
    /// non-monotonic times are fine.
    pub fn advance(&mut self, time_s: f32) {
        let WaveParams {
            wave_speed,
            wave_scale,
            wave_frequency,
            detail_multiplier,
        } = self.params;

        let time_offset = time_s * wave_speed;
        let detail_amplitude = wave_scale / detail_multiplier;

        for (height, base) in self.heights.iter_mut().zip(&self.base_positions) {
            let primary = (base.x * wave_frequency + time_offset).sin() * wave_scale;
            let detail = (base.y * wave_frequency * detail_multiplier
                + time_offset * detail_multiplier)
                .cos()
                * detail_amplitude;

            *height = primary + detail;
        }
    }

    /// Write current heights into the mesh and refresh its normals
    pub fn commit(&self, mesh: &mut PlaneMesh) -> Result<(), OceanError> {
        if mesh.vertices.len() != self.heights.len() {
            return Err(OceanError::MeshMismatch {
                field: self.heights.len(),
                mesh: mesh.vertices.len(),
            });
        }

        for (vertex, &height) in mesh.vertices.iter_mut().zip(&self.heights) {
            vertex.position[1] = height;
        }
        mesh.recalculate_normals();
        Ok(())
    }

    /// Replace wave parameters; invalid parameters leave the field unchanged
    pub fn set_params(&mut self, params: WaveParams) -> Result<(), ConfigError> {
        params.validate()?;
        self.params = params;
        Ok(())
    }

    pub fn params(&self) -> &WaveParams {
        &self.params
    }

    /// Planar (x, z) position of each vertex, stored as `Vec2 { x, y: z }`
    pub fn base_positions(&self) -> &[Vec2] {
        &self.base_positions
    }

    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    pub fn vertex_count(&self) -> usize {
        self.base_positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Triangles in storage order as vertex index triples
    pub fn triangles(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        self.triangles
            .chunks_exact(3)
            .map(|tri| [tri[0] as usize, tri[1] as usize, tri[2] as usize])
    }
}
