//! Water plane mesh: flat XZ grid generation and normal recalculation.

use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::params::MeshParams;

/// Vertex data for the water mesh (position + normal + UV coordinates)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    /// Vertex on the flat plane at (x, y, z) with an upward normal
    pub fn at(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: [x, y, z],
            normal: [0.0, 1.0, 0.0],
            uv: [0.0, 0.0],
        }
    }
}

/// Renderable/physics mesh the wave field reads topology from and commits
/// heights back into
#[derive(Debug, Clone)]
pub struct PlaneMesh {
    pub vertices: Vec<Vertex>,
    /// Triangle list, three indices per triangle. Shared with the wave field.
    pub indices: Arc<[u32]>,
}

impl PlaneMesh {
    /// Build a mesh from externally supplied vertices and a flat index list
    pub fn from_parts(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self {
            vertices,
            indices: indices.into(),
        }
    }

    /// Create a flat grid centred on the origin
    pub fn grid(params: &MeshParams) -> Self {
        let grid_size = params.grid_size;
        let grid_spacing = params.grid_spacing_m;
        let half_size = params.extent_m() / 2.0;

        let mut vertices = Vec::with_capacity((grid_size + 1) * (grid_size + 1));
        let mut indices = Vec::with_capacity(grid_size * grid_size * 6);

        // Generate flat XZ plane grid
        for z in 0..=grid_size {
            for x in 0..=grid_size {
                let x_pos = x as f32 * grid_spacing - half_size;
                let z_pos = z as f32 * grid_spacing - half_size;

                vertices.push(Vertex {
                    uv: [x as f32 / grid_size as f32, z as f32 / grid_size as f32],
                    ..Vertex::at(x_pos, 0.0, z_pos)
                });
            }
        }

        // Generate triangle indices (counter-clockwise winding seen from +Y)
        for z in 0..grid_size {
            for x in 0..grid_size {
                let top_left = (z * (grid_size + 1) + x) as u32;
                let top_right = top_left + 1;
                let bottom_left = ((z + 1) * (grid_size + 1) + x) as u32;
                let bottom_right = bottom_left + 1;

                indices.extend_from_slice(&[
                    top_left,
                    bottom_left,
                    top_right,
                    top_right,
                    bottom_left,
                    bottom_right,
                ]);
            }
        }

        Self::from_parts(vertices, indices)
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Recompute smooth vertex normals from the current positions
    ///
    /// Face normals are accumulated unnormalised, so larger triangles weigh
    /// more. Triangles referencing missing vertices are skipped.
    pub fn recalculate_normals(&mut self) {
        let mut accumulated = vec![Vec3::ZERO; self.vertices.len()];

        for tri in self.indices.chunks_exact(3) {
            let [i0, i1, i2] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
            let (Some(a), Some(b), Some(c)) = (
                self.vertices.get(i0),
                self.vertices.get(i1),
                self.vertices.get(i2),
            ) else {
                continue;
            };

            let p0 = Vec3::from_array(a.position);
            let p1 = Vec3::from_array(b.position);
            let p2 = Vec3::from_array(c.position);
            let face = (p1 - p0).cross(p2 - p0);

            accumulated[i0] += face;
            accumulated[i1] += face;
            accumulated[i2] += face;
        }

        for (vertex, normal) in self.vertices.iter_mut().zip(accumulated) {
            vertex.normal = normal.normalize_or_zero().to_array();
        }
    }
}
