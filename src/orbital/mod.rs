//! Orbital motion module
//!
//! This module handles the simulation clock, per-body speed overrides and
//! the circular orbit model that advances every body each frame.

use bevy::prelude::*;

pub mod clock;
pub mod motion;
pub mod speed;
pub mod systems;

pub use clock::{SimulationClock, advance_simulation_clock};
pub use motion::{
    MotionConstants, OrbitState, SatelliteState, advance, advance_satellite, satellite_offset,
    speed_ratio,
};
pub use speed::{MAX_SPEED, MIN_SPEED, SPEED_STEP, SpeedOverrides};
pub use systems::advance_orbits;

use crate::config::SolarConfig;

/// Plugin for orbital motion and time management
pub struct OrbitalPlugin;

impl Plugin for OrbitalPlugin {
    fn build(&self, app: &mut App) {
        let start_paused = app
            .world()
            .get_resource::<SolarConfig>()
            .is_some_and(|cfg| cfg.start_paused);

        app.insert_resource(SimulationClock::new(start_paused))
            .init_resource::<SpeedOverrides>()
            .add_systems(
                Update,
                (advance_simulation_clock, advance_orbits).chain(),
            );
    }
}
