//! Frame driver tying the water, the surfer and the hazards together.
//!
//! Each tick runs in a fixed order: advance the clock, recompute wave
//! heights, commit them to the mesh, move the surfer (which reads the new
//! heights), then move, spawn and test rocks.

mod rocks;
mod timer;

use glam::{Vec2, Vec3};

use crate::ocean::{
    OceanError, PlaneMesh, PlaneTransform, Surface, SurfaceSampler, WaterFlow, WaveField,
};
use crate::params::GameConfig;
use crate::surfer::{SteerInput, SurferController};

pub use rocks::{spawn_interval, Rock, RockField, RockSpawner};
pub use timer::GameTimer;

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Still surfing
    Running,
    /// Surfer hit a rock; the session no longer advances
    GameOver { survived_s: f32 },
}

/// One run of the game, owning every piece of simulation state
pub struct Session {
    mesh: PlaneMesh,
    field: WaveField,
    plane: PlaneTransform,
    sampler: SurfaceSampler,
    surfer: SurferController,
    spawner: RockSpawner,
    rocks: RockField,
    flow: WaterFlow,
    timer: GameTimer,
    outcome: TickOutcome,
    flow_offset: Vec2,
}

impl Session {
    /// Build a session on a generated grid at the world origin
    pub fn with_grid(config: GameConfig) -> Result<Self, OceanError> {
        let mesh = PlaneMesh::grid(&config.mesh);
        Self::new(config, Some(mesh), PlaneTransform::default())
    }

    /// Build a session; a missing mesh or invalid config stops here
    pub fn new(
        config: GameConfig,
        mesh: Option<PlaneMesh>,
        plane: PlaneTransform,
    ) -> Result<Self, OceanError> {
        config.validate()?;

        let mesh = mesh.ok_or_else(|| OceanError::InvalidMesh("no mesh supplied".to_string()))?;
        let field = WaveField::from_mesh(Some(&mesh), config.waves)?;
        let sampler = SurfaceSampler::for_plane(&plane);

        let start = plane.origin() + Vec3::Y * config.surfer.hover_height_m;
        let surfer = SurferController::new(config.surfer, start);

        log::info!(
            "Session ready: {} vertices, {} triangles, seed {}",
            field.vertex_count(),
            field.triangle_count(),
            config.seed
        );

        Ok(Self {
            mesh,
            field,
            plane,
            sampler,
            surfer,
            spawner: RockSpawner::new(config.rocks, config.seed),
            rocks: RockField::new(config.rocks),
            flow: WaterFlow::new(config.flow),
            timer: GameTimer::new(),
            outcome: TickOutcome::Running,
            flow_offset: Vec2::ZERO,
        })
    }

    /// Advance the whole game by `dt` seconds
    pub fn tick(&mut self, input: SteerInput, dt: f32) -> TickOutcome {
        if let TickOutcome::GameOver { .. } = self.outcome {
            return self.outcome;
        }

        self.timer.tick(dt);
        let time_s = self.timer.elapsed_s();

        self.field.advance(time_s);
        if let Err(e) = self.field.commit(&mut self.mesh) {
            // A bad frame must not stop the loop
            log::warn!("Skipping mesh commit: {}", e);
        }
        self.flow_offset = self.flow.update(dt);

        let surface = Surface::new(&self.field, &self.sampler, &self.plane);
        self.surfer.step(input, dt, &surface);

        self.rocks.advance(dt);
        self.spawner.update(time_s, &mut self.rocks);

        let surfer_pos = self.surfer.position();
        if let Some(rock) = self.rocks.hit(surfer_pos, self.surfer.params().radius_m) {
            log::info!(
                "Game over! Surfer hit a rock at ({:.2}, {:.2}) after {}s",
                rock.position.x,
                rock.position.z,
                self.timer.whole_seconds()
            );
            self.outcome = TickOutcome::GameOver { survived_s: time_s };
        }

        self.outcome
    }

    pub fn outcome(&self) -> TickOutcome {
        self.outcome
    }

    pub fn field(&self) -> &WaveField {
        &self.field
    }

    /// Mesh with the latest committed heights and normals
    pub fn mesh(&self) -> &PlaneMesh {
        &self.mesh
    }

    pub fn sampler(&self) -> &SurfaceSampler {
        &self.sampler
    }

    pub fn surfer(&self) -> &SurferController {
        &self.surfer
    }

    pub fn rocks(&self) -> &RockField {
        &self.rocks
    }

    pub fn rocks_mut(&mut self) -> &mut RockField {
        &mut self.rocks
    }

    pub fn timer(&self) -> &GameTimer {
        &self.timer
    }

    /// Water texture offset applied on the last tick
    pub fn flow_offset(&self) -> Vec2 {
        self.flow_offset
    }
}
