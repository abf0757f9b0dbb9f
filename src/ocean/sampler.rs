//! Surface height queries against a wave field snapshot.

use glam::{Mat4, Vec3};

use super::field::WaveField;
use super::OceanError;

/// Placement of the water plane in the world (model matrix + inverse)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneTransform {
    local_to_world: Mat4,
    world_to_local: Mat4,
}

impl Default for PlaneTransform {
    fn default() -> Self {
        Self::from_matrix(Mat4::IDENTITY)
    }
}

impl PlaneTransform {
    pub fn from_matrix(local_to_world: Mat4) -> Self {
        Self {
            local_to_world,
            world_to_local: local_to_world.inverse(),
        }
    }

    pub fn from_translation(translation: Vec3) -> Self {
        Self::from_matrix(Mat4::from_translation(translation))
    }

    /// World-space position of the plane's local origin
    pub fn origin(&self) -> Vec3 {
        self.local_to_world.transform_point3(Vec3::ZERO)
    }

    pub fn to_local(&self, world: Vec3) -> Vec3 {
        self.world_to_local.transform_point3(world)
    }

    pub fn to_world(&self, local: Vec3) -> Vec3 {
        self.local_to_world.transform_point3(local)
    }
}

/// Approximate surface height lookup
///
/// Scans triangles in storage order and takes the first whose planar
/// bounding box contains the query (bounds inclusive). The result is the
/// plain mean of that triangle's three heights, not a barycentric blend, so
/// every point inside one box gets the same height. A point can also land in
/// a neighbouring triangle's box before its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSampler {
    /// Height returned when no triangle box contains the query
    pub fallback_height: f32,
}

impl SurfaceSampler {
    pub fn new(fallback_height: f32) -> Self {
        Self { fallback_height }
    }

    /// Sampler whose fallback is the plane's resting world height
    pub fn for_plane(plane: &PlaneTransform) -> Self {
        Self::new(plane.origin().y)
    }

    /// Index of the first triangle whose XZ bounding box contains (x, z)
    pub fn locate(&self, field: &WaveField, x: f32, z: f32) -> Option<usize> {
        self.find(field, x, z).map(|(index, _)| index)
    }

    /// Mean height of the containing triangle, in field-local space
    pub fn height_at(&self, field: &WaveField, x: f32, z: f32) -> f32 {
        self.triangle_height(field, x, z).unwrap_or(self.fallback_height)
    }

    /// Like `height_at`, but a field with no triangles is an error
    pub fn strict_height_at(&self, field: &WaveField, x: f32, z: f32) -> Result<f32, OceanError> {
        if field.triangle_count() == 0 {
            return Err(OceanError::MissingGeometry);
        }
        Ok(self.height_at(field, x, z))
    }

    /// Surface height below a world-space point, in world space
    pub fn height_at_world(&self, field: &WaveField, plane: &PlaneTransform, world: Vec3) -> f32 {
        let local = plane.to_local(world);

        match self.triangle_height(field, local.x, local.z) {
            Some(avg) => plane.to_world(Vec3::new(local.x, avg, local.z)).y,
            None => self.fallback_height,
        }
    }

    fn find(&self, field: &WaveField, x: f32, z: f32) -> Option<(usize, [usize; 3])> {
        let positions = field.base_positions();

        field.triangles().enumerate().find(|(_, [a, b, c])| {
            let (p1, p2, p3) = (positions[*a], positions[*b], positions[*c]);
            let min = p1.min(p2).min(p3);
            let max = p1.max(p2).max(p3);

            x >= min.x && x <= max.x && z >= min.y && z <= max.y
        })
    }

    fn triangle_height(&self, field: &WaveField, x: f32, z: f32) -> Option<f32> {
        let (_, [a, b, c]) = self.find(field, x, z)?;
        let heights = field.heights();
        Some((heights[a] + heights[b] + heights[c]) / 3.0)
    }
}

/// A wave field as seen from the world: field, sampler and plane placement
#[derive(Debug, Clone, Copy)]
pub struct Surface<'a> {
    pub field: &'a WaveField,
    pub sampler: &'a SurfaceSampler,
    pub plane: &'a PlaneTransform,
}

impl<'a> Surface<'a> {
    pub fn new(
        field: &'a WaveField,
        sampler: &'a SurfaceSampler,
        plane: &'a PlaneTransform,
    ) -> Self {
        Self {
            field,
            sampler,
            plane,
        }
    }

    /// World-space surface height below `world` (its y is ignored)
    pub fn height_at(&self, world: Vec3) -> f32 {
        self.sampler.height_at_world(self.field, self.plane, world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ocean::PlaneMesh;
    use crate::params::{MeshParams, WaveParams};

    fn flat_params() -> WaveParams {
        WaveParams {
            wave_scale: 0.0,
            ..WaveParams::default()
        }
    }

    fn unit_params() -> WaveParams {
        WaveParams {
            wave_speed: 0.0,
            wave_scale: 1.0,
            wave_frequency: 1.0,
            detail_multiplier: 1.0,
        }
    }

    fn unit_quad() -> PlaneMesh {
        PlaneMesh::grid(&MeshParams {
            grid_size: 1,
            grid_spacing_m: 2.0,
        })
    }

    /// 3x3 vertices at -1, 0, 1 on each axis, eight triangles
    fn small_grid() -> PlaneMesh {
        PlaneMesh::grid(&MeshParams {
            grid_size: 2,
            grid_spacing_m: 1.0,
        })
    }

    #[test]
    fn test_flat_quad_samples_zero() {
        let mut field = WaveField::from_mesh(Some(&unit_quad()), flat_params()).unwrap();
        field.advance(42.0);

        let sampler = SurfaceSampler::new(-7.0);
        assert_eq!(sampler.height_at(&field, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_height_is_mean_of_first_triangle() {
        let mut field = WaveField::from_mesh(Some(&unit_quad()), unit_params()).unwrap();
        field.advance(0.0);

        // First triangle is (top_left, bottom_left, top_right) = (0, 2, 1)
        let h = field.heights();
        let expected = (h[0] + h[2] + h[1]) / 3.0;

        let sampler = SurfaceSampler::new(0.0);
        assert_eq!(sampler.locate(&field, 0.0, 0.0), Some(0));
        assert!((sampler.height_at(&field, 0.0, 0.0) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_far_query_returns_fallback() {
        let mut field = WaveField::from_mesh(Some(&unit_quad()), unit_params()).unwrap();
        field.advance(1.0);

        let sampler = SurfaceSampler::new(3.5);
        assert_eq!(sampler.locate(&field, 1e6, 1e6), None);
        assert_eq!(sampler.height_at(&field, 1e6, 1e6), 3.5);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let field = WaveField::from_mesh(Some(&small_grid()), flat_params()).unwrap();
        let sampler = SurfaceSampler::new(0.0);

        // Exact corners and edges of the outer boundary
        assert_eq!(sampler.locate(&field, -1.0, -1.0), Some(0));
        assert_eq!(sampler.locate(&field, -1.0, 0.5), Some(4));
        assert_eq!(sampler.locate(&field, 1.0, 1.0), Some(6));
        assert_eq!(sampler.locate(&field, 1.0001, 0.0), None);
        assert_eq!(sampler.locate(&field, 0.0, -1.0001), None);
    }

    #[test]
    fn test_first_triangle_in_storage_order_wins() {
        let field = WaveField::from_mesh(Some(&small_grid()), flat_params()).unwrap();
        let sampler = SurfaceSampler::new(0.0);

        // Centre vertex touches every quad; the first quad's first triangle wins
        assert_eq!(sampler.locate(&field, 0.0, 0.0), Some(0));
        // Inside the second quad (x in 0..1, z in -1..0)
        assert_eq!(sampler.locate(&field, 0.5, -0.5), Some(2));
    }

    #[test]
    fn test_corner_and_centroid_of_one_box_agree() {
        let mut field = WaveField::from_mesh(Some(&small_grid()), unit_params()).unwrap();
        field.advance(0.3);
        let sampler = SurfaceSampler::new(0.0);

        let near_corner = sampler.height_at(&field, 0.99, -0.99);
        let near_centre = sampler.height_at(&field, 0.5, -0.5);
        assert_eq!(near_corner, near_centre);
    }

    #[test]
    fn test_sampling_does_not_mutate_field() {
        let mut field = WaveField::from_mesh(Some(&small_grid()), unit_params()).unwrap();
        field.advance(2.0);
        let before = field.heights().to_vec();

        let sampler = SurfaceSampler::new(0.0);
        for i in 0..50 {
            let t = i as f32 / 25.0 - 1.0;
            sampler.height_at(&field, t, -t);
        }
        assert_eq!(before, field.heights());
    }

    #[test]
    fn test_no_triangles_falls_back_or_errors() {
        let mesh = PlaneMesh::from_parts(unit_quad().vertices, Vec::new());
        let field = WaveField::from_mesh(Some(&mesh), unit_params()).unwrap();
        let sampler = SurfaceSampler::new(1.25);

        assert_eq!(sampler.height_at(&field, 0.0, 0.0), 1.25);
        assert!(matches!(
            sampler.strict_height_at(&field, 0.0, 0.0),
            Err(OceanError::MissingGeometry)
        ));
    }

    #[test]
    fn test_strict_height_matches_lenient_with_geometry() {
        let mut field = WaveField::from_mesh(Some(&unit_quad()), unit_params()).unwrap();
        field.advance(0.0);
        let sampler = SurfaceSampler::new(9.0);

        assert_eq!(
            sampler.strict_height_at(&field, 0.2, 0.2).unwrap(),
            sampler.height_at(&field, 0.2, 0.2)
        );
        assert_eq!(sampler.strict_height_at(&field, 5.0, 5.0).unwrap(), 9.0);
    }

    #[test]
    fn test_world_query_through_translated_plane() {
        let mut field = WaveField::from_mesh(Some(&unit_quad()), unit_params()).unwrap();
        field.advance(0.0);

        let plane = PlaneTransform::from_translation(Vec3::new(10.0, 5.0, -20.0));
        let sampler = SurfaceSampler::for_plane(&plane);
        assert_eq!(sampler.fallback_height, 5.0);

        let local = sampler.height_at(&field, 0.0, 0.0);
        let world = sampler.height_at_world(&field, &plane, Vec3::new(10.0, 100.0, -20.0));
        assert!((world - (local + 5.0)).abs() < 1e-5);

        // Outside the plane's footprint in world space
        let outside = sampler.height_at_world(&field, &plane, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(outside, 5.0);
    }

    #[test]
    fn test_world_query_through_scaled_plane() {
        let mut field = WaveField::from_mesh(Some(&small_grid()), unit_params()).unwrap();
        field.advance(0.0);

        let plane = PlaneTransform::from_matrix(Mat4::from_scale(Vec3::new(4.0, 2.0, 4.0)));
        let sampler = SurfaceSampler::for_plane(&plane);

        // World (2, _, -2) is local (0.5, _, -0.5)
        let local = sampler.height_at(&field, 0.5, -0.5);
        let world = sampler.height_at_world(&field, &plane, Vec3::new(2.0, 0.0, -2.0));
        assert!((world - local * 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_surface_view_matches_sampler() {
        let mut field = WaveField::from_mesh(Some(&small_grid()), unit_params()).unwrap();
        field.advance(1.5);
        let plane = PlaneTransform::default();
        let sampler = SurfaceSampler::for_plane(&plane);
        let surface = Surface::new(&field, &sampler, &plane);

        assert_eq!(
            surface.height_at(Vec3::new(0.25, 3.0, 0.75)),
            sampler.height_at(&field, 0.25, 0.75)
        );
    }
}
