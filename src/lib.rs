//! Sticksurfer library - wave-riding avoidance game simulation

pub mod cli;
pub mod game;
pub mod ocean;
pub mod params;
pub mod surfer;
