//! Surfer movement: steering on the XZ plane and riding the wave surface.

use glam::{Quat, Vec3};

use crate::ocean::Surface;
use crate::params::SurferParams;

/// Input directions below this length do not turn the surfer
const MIN_TURN_INPUT: f32 = 0.1;

/// Steering axes for one tick, each in [-1, 1]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SteerInput {
    /// Left/right (-X/+X)
    pub horizontal: f32,
    /// Backward/forward (-Z/+Z)
    pub vertical: f32,
}

impl SteerInput {
    pub fn new(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Unit direction on the XZ plane, zero for no input
    pub fn direction(&self) -> Vec3 {
        Vec3::new(self.horizontal, 0.0, self.vertical).normalize_or_zero()
    }
}

/// Player controller that follows the sampled water height
#[derive(Debug, Clone)]
pub struct SurferController {
    params: SurferParams,
    position: Vec3,
    rotation: Quat,
    /// Last finite surface height, held when a sample goes bad
    surface_height: f32,
}

impl SurferController {
    /// Place the surfer at `start`, facing +Z
    pub fn new(params: SurferParams, start: Vec3) -> Self {
        Self {
            params,
            position: start,
            rotation: Quat::IDENTITY,
            surface_height: start.y - params.hover_height_m,
        }
    }

    /// Move, clamp to the play area, ride the surface, then turn
    pub fn step(&mut self, input: SteerInput, dt: f32, surface: &Surface) {
        let direction = input.direction();

        let mut next = self.position + direction * self.params.move_speed_m_per_s * dt;
        next.x = next.x.clamp(self.params.min_x, self.params.max_x);
        next.z = next.z.clamp(self.params.min_z, self.params.max_z);

        let sampled = surface.height_at(next);
        if sampled.is_finite() {
            self.surface_height = sampled;
        } else {
            log::warn!(
                "Non-finite surface height at ({:.2}, {:.2}), holding {:.3}",
                next.x,
                next.z,
                self.surface_height
            );
        }
        next.y = self.surface_height + self.params.hover_height_m;
        self.position = next;

        self.turn_toward(direction, dt);
    }

    fn turn_toward(&mut self, direction: Vec3, dt: f32) {
        if direction.length() < MIN_TURN_INPUT {
            return;
        }

        // Yaw that points local +Z along the movement direction
        let target = Quat::from_rotation_y(direction.x.atan2(direction.z));
        let t = (self.params.rotation_speed * dt).clamp(0.0, 1.0);
        self.rotation = self.rotation.slerp(target, t);
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Unit vector the surfer is facing
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    pub fn surface_height(&self) -> f32 {
        self.surface_height
    }

    pub fn params(&self) -> &SurferParams {
        &self.params
    }
}
