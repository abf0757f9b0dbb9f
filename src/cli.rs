//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::params::{ConfigError, GameConfig};
use crate::surfer::SteerInput;

/// Scripted steering for headless runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SteerScript {
    /// No input; the surfer bobs in place
    Still,
    /// Side-to-side slalom while holding forward
    Weave,
    /// Constant turn around the plane centre
    Circle,
}

impl SteerScript {
    /// Steering axes at time `time_s` into the run
    pub fn input_at(&self, time_s: f32) -> SteerInput {
        match self {
            SteerScript::Still => SteerInput::default(),
            SteerScript::Weave => SteerInput::new((time_s * 0.8).sin(), 0.25),
            SteerScript::Circle => SteerInput::new((time_s * 0.5).cos(), (time_s * 0.5).sin()),
        }
    }
}

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "Sticksurfer")]
#[command(about = "Headless wave-riding avoidance game simulation", long_about = None)]
pub struct Args {
    /// JSON config file (missing fields use defaults)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(long, value_name = "FRAMES", default_value = "3600")]
    pub frames: u32,

    /// Simulation rate (frames per second)
    #[arg(long, value_name = "FPS", default_value = "60")]
    pub fps: u32,

    /// Override the rock placement seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override the water grid resolution (quads per side)
    #[arg(long, value_name = "QUADS")]
    pub grid_size: Option<usize>,

    /// Scripted steering
    #[arg(long, value_enum, default_value = "weave")]
    pub steer: SteerScript,

    /// Log surfer state every N frames (0 disables)
    #[arg(long, value_name = "FRAMES", default_value = "60")]
    pub report_every: u32,
}

impl Args {
    /// Fixed timestep in seconds
    pub fn dt(&self) -> f32 {
        1.0 / self.fps.max(1) as f32
    }

    /// Load the config file (or defaults) and apply command-line overrides
    pub fn build_config(&self) -> Result<GameConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(grid_size) = self.grid_size {
            config.mesh.grid_size = grid_size;
        }

        config.validate()?;
        Ok(config)
    }
}
