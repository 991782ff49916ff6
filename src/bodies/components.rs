//! Body components for the Bevy ECS

use bevy::prelude::*;

use crate::bodies::catalog::BodyId;

/// Component marker for the sun and planet entities
#[derive(Component, Copy, Clone, Debug, PartialEq, Eq)]
pub struct CelestialBody(pub BodyId);

/// Component linking a moon or ring entity to its parent's arena record
#[derive(Component, Copy, Clone, Debug, PartialEq, Eq)]
pub struct SatelliteOf {
    pub parent: BodyId,
    /// Index into the parent's satellite list
    pub index: usize,
}
