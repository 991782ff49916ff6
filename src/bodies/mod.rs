//! Body module
//!
//! This module holds the body catalog, the arena of per-frame body records,
//! and the systems that spawn body entities and keep their transforms in
//! sync with the arena.

use bevy::prelude::*;

pub mod arena;
pub mod catalog;
pub mod components;
pub mod spawn;
pub mod textures;
pub mod transforms;

pub use arena::{BodyRecord, SolarSystem};
pub use catalog::{BODY_COUNT, BodyDef, BodyId, CATALOG, SatelliteDef, SatelliteKind};
pub use components::{CelestialBody, SatelliteOf};
pub use textures::PendingTextures;
pub use transforms::sync_body_transforms;

/// Plugin for body state and rendering
pub struct BodiesPlugin;

impl Plugin for BodiesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SolarSystem>()
            .init_resource::<PendingTextures>()
            .add_systems(Startup, spawn::spawn_bodies)
            .add_systems(
                Update,
                (
                    sync_body_transforms.after(crate::orbital::advance_orbits),
                    textures::attach_loaded_textures,
                ),
            );
    }
}
