//! Rock hazards: spawn schedule, drift toward the player, collision.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::params::RockParams;

/// A single rock on the water
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rock {
    pub position: Vec3,
    /// Uniform scale applied to the base radius
    pub scale: f32,
}

impl Rock {
    pub fn radius(&self, params: &RockParams) -> f32 {
        params.base_radius_m * self.scale
    }
}

/// Time until the next spawn, given seconds since the run started
///
/// Shrinks linearly with play time and never drops below the minimum.
pub fn spawn_interval(params: &RockParams, elapsed_s: f32) -> f32 {
    let ramped = params.initial_spawn_interval_s - elapsed_s * params.difficulty_ramp_rate;
    ramped.max(params.minimum_spawn_interval_s)
}

/// Deterministic rock spawner
///
/// Spawns once at the start, then waits the interval computed at each
/// spawn instant. At most one rock comes out per update.
#[derive(Debug, Clone)]
pub struct RockSpawner {
    params: RockParams,
    rng: Pcg32,
    next_spawn_s: f32,
}

impl RockSpawner {
    pub fn new(params: RockParams, seed: u64) -> Self {
        Self {
            params,
            rng: Pcg32::seed_from_u64(seed),
            next_spawn_s: 0.0,
        }
    }

    /// Spawn the rock due by `elapsed_s` into `field`, if any
    ///
    /// Returns whether a rock was spawned. The next spawn is scheduled from
    /// `elapsed_s`, so a long gap yields one rock rather than a backlog.
    pub fn update(&mut self, elapsed_s: f32, field: &mut RockField) -> bool {
        if elapsed_s < self.next_spawn_s {
            return false;
        }

        let rock = self.roll_rock();
        log::debug!(
            "Rock spawned at x={:.2} scale={:.2} (t={:.2}s)",
            rock.position.x,
            rock.scale,
            elapsed_s
        );
        field.push(rock);

        self.next_spawn_s = elapsed_s + spawn_interval(&self.params, elapsed_s);
        true
    }

    /// Scheduled time of the next spawn
    pub fn next_spawn_s(&self) -> f32 {
        self.next_spawn_s
    }

    fn roll_rock(&mut self) -> Rock {
        let range = self.params.spawn_x_range_m;
        let x = self.rng.random_range(-range..=range);
        let scale = self
            .rng
            .random_range(self.params.min_scale..=self.params.max_scale);

        Rock {
            position: Vec3::new(x, 0.0, self.params.spawn_z_m),
            scale,
        }
    }
}

/// All live rocks
#[derive(Debug, Clone, Default)]
pub struct RockField {
    params: RockParams,
    rocks: Vec<Rock>,
}

impl RockField {
    pub fn new(params: RockParams) -> Self {
        Self {
            params,
            rocks: Vec::new(),
        }
    }

    pub fn push(&mut self, rock: Rock) {
        self.rocks.push(rock);
    }

    /// Move every rock along -Z and drop those past the destroy line,
    /// returning how many were removed
    pub fn advance(&mut self, dt: f32) -> usize {
        let step = self.params.speed_m_per_s * dt;
        for rock in &mut self.rocks {
            rock.position.z -= step;
        }

        let before = self.rocks.len();
        let destroy_z = self.params.destroy_z_m;
        self.rocks.retain(|rock| rock.position.z >= destroy_z);
        before - self.rocks.len()
    }

    /// First rock overlapping a sphere at `position` with `radius`
    pub fn hit(&self, position: Vec3, radius: f32) -> Option<&Rock> {
        self.rocks.iter().find(|rock| {
            let reach = radius + rock.radius(&self.params);
            rock.position.distance_squared(position) <= reach * reach
        })
    }

    pub fn rocks(&self) -> &[Rock] {
        &self.rocks
    }

    pub fn len(&self) -> usize {
        self.rocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rocks.is_empty()
    }
}
