//! Survival clock.

/// Elapsed time since the run started
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GameTimer {
    elapsed_s: f32,
}

impl GameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one tick; negative steps are ignored
    pub fn tick(&mut self, dt: f32) {
        self.elapsed_s += dt.max(0.0);
    }

    pub fn elapsed_s(&self) -> f32 {
        self.elapsed_s
    }

    /// Elapsed time rounded down to whole seconds (what the HUD shows)
    pub fn whole_seconds(&self) -> u32 {
        self.elapsed_s.floor() as u32
    }
}
