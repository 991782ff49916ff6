//! Orbital tick systems

use bevy::prelude::*;

use crate::bodies::SolarSystem;
use crate::config::SolarConfig;
use crate::orbital::{SimulationClock, SpeedOverrides};

/// System to advance every body by the gated frame delta
pub fn advance_orbits(
    clock: Res<SimulationClock>,
    speeds: Res<SpeedOverrides>,
    config: Res<SolarConfig>,
    mut system: ResMut<SolarSystem>,
) {
    if clock.delta_secs == 0.0 {
        return;
    }
    system.tick(clock.delta_secs, &speeds, &config.motion);
}
