//! Visualization module
//!
//! This module handles scene dressing that is not part of the simulation:
//! the sun's light, orbit line gizmos and the background star field.

use bevy::prelude::*;

pub mod lighting;
pub mod orbits;
pub mod starfield;

pub use lighting::{SunLight, spawn_sun_light};
pub use orbits::{draw_orbit_lines, orbit_points};
pub use starfield::{StarField, spawn_star_field, star_positions};

/// Plugin for visualization systems
pub struct VisualizationPlugin;

impl Plugin for VisualizationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_sun_light, spawn_star_field))
            .add_systems(
                Update,
                draw_orbit_lines.after(crate::bodies::sync_body_transforms),
            );
    }
}
