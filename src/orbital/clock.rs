//! Simulation clock: frame delta gating and play/pause

use bevy::prelude::*;

use crate::config::SolarConfig;

/// Simulation clock resource
#[derive(Resource, Debug, Default)]
pub struct SimulationClock {
    pub paused: bool,
    /// Effective delta for the current frame; zero while paused
    pub delta_secs: f32,
    /// Simulated (unpaused) seconds since startup
    pub active_secs: f64,
}

impl SimulationClock {
    pub fn new(paused: bool) -> Self {
        Self {
            paused,
            ..default()
        }
    }

    pub fn toggle(&mut self) {
        self.paused = !self.paused;
    }

    /// Record one frame of wall time and return the delta the model may use.
    pub fn tick(&mut self, raw_delta_secs: f32, max_delta_secs: f32) -> f32 {
        self.delta_secs = if self.paused {
            0.0
        } else {
            sanitize_delta(raw_delta_secs, max_delta_secs)
        };
        self.active_secs += self.delta_secs as f64;
        self.delta_secs
    }
}

/// Negative and non-finite deltas become zero; large ones are capped.
pub fn sanitize_delta(raw: f32, max: f32) -> f32 {
    if !raw.is_finite() || raw <= 0.0 {
        return 0.0;
    }
    raw.min(max)
}

/// System to advance the simulation clock from the frame time
pub fn advance_simulation_clock(
    time: Res<Time>,
    config: Res<SolarConfig>,
    mut clock: ResMut<SimulationClock>,
) {
    clock.tick(time.delta_secs(), config.max_frame_delta_secs);
}
