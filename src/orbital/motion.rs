//! Circular orbit model
//!
//! Angles are accumulated in f64 and only converted to f32 when written into
//! render transforms, so long sessions keep their precision.

use bevy::math::DVec3;
use serde::{Deserialize, Serialize};

use crate::bodies::{BodyDef, SatelliteDef, SatelliteKind};
use crate::config::positive;

/// Scale constants shared by every body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConstants {
    /// Radians per second per unit of speed
    pub k_orbit: f32,
    /// Axial spin rate at zero speed (rad/s)
    pub k_spin_base: f32,
    /// Extra axial spin per unit of speed (rad/s)
    pub k_spin_factor: f32,
    /// Satellite phase rate when the parent runs at its base speed (rad/s)
    pub k_satellite: f32,
}

impl Default for MotionConstants {
    fn default() -> Self {
        Self {
            k_orbit: 0.2,
            k_spin_base: 0.5,
            k_spin_factor: 0.25,
            k_satellite: 1.2,
        }
    }
}

impl MotionConstants {
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let pick = |value: f32, fallback: f32| if positive(value) { value } else { fallback };
        Self {
            k_orbit: pick(self.k_orbit, defaults.k_orbit),
            k_spin_base: pick(self.k_spin_base, defaults.k_spin_base),
            k_spin_factor: pick(self.k_spin_factor, defaults.k_spin_factor),
            k_satellite: pick(self.k_satellite, defaults.k_satellite),
        }
    }
}

/// Per-frame state of a body.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrbitState {
    /// Orbital phase in radians, never wrapped
    pub angle: f64,
    /// Axial rotation in radians, never wrapped
    pub rotation: f64,
    /// Derived from `angle`, see [`orbit_position`]
    pub position: DVec3,
}

impl OrbitState {
    pub fn at_angle(distance: f32, angle: f64) -> Self {
        Self {
            angle,
            rotation: 0.0,
            position: orbit_position(distance, angle),
        }
    }
}

/// Position on a circular orbit in the XZ plane.
pub fn orbit_position(distance: f32, angle: f64) -> DVec3 {
    let d = distance as f64;
    DVec3::new(d * angle.cos(), 0.0, d * angle.sin())
}

/// Advance a body by one tick.
///
/// `delta_secs` must already be sanitized (finite, non-negative). A zero
/// delta returns `prev` unchanged.
pub fn advance(
    def: &BodyDef,
    prev: &OrbitState,
    delta_secs: f32,
    speed: f32,
    k: &MotionConstants,
) -> OrbitState {
    if delta_secs == 0.0 {
        return *prev;
    }

    let dt = delta_secs as f64;
    let speed = speed as f64;
    let angle = prev.angle + dt * speed * k.k_orbit as f64;
    let rotation =
        prev.rotation + dt * (k.k_spin_base as f64 + speed * k.k_spin_factor as f64);

    OrbitState {
        angle,
        rotation,
        position: orbit_position(def.distance, angle),
    }
}

/// How fast the parent currently runs relative to its base speed.
pub fn speed_ratio(def: &BodyDef, speed: f32) -> f64 {
    if def.base_speed > 0.0 {
        speed as f64 / def.base_speed as f64
    } else {
        1.0
    }
}

/// Per-frame state of a moon or ring system.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SatelliteState {
    pub phase: f64,
    /// World position; the parent position for rings
    pub position: DVec3,
}

/// Offset of a satellite from its parent for a given phase.
pub fn satellite_offset(def: &SatelliteDef, phase: f64) -> DVec3 {
    match def.kind {
        SatelliteKind::Moon { local_radius, .. } => orbit_position(local_radius, phase),
        SatelliteKind::Rings { .. } => DVec3::ZERO,
    }
}

/// Advance a satellite by one tick.
///
/// The phase is gated by the same delta as planets, so it freezes exactly
/// while paused.
pub fn advance_satellite(
    def: &SatelliteDef,
    prev: &SatelliteState,
    parent_position: DVec3,
    delta_secs: f32,
    ratio: f64,
    k: &MotionConstants,
) -> SatelliteState {
    let phase = if delta_secs == 0.0 {
        prev.phase
    } else {
        prev.phase + delta_secs as f64 * k.k_satellite as f64 * ratio
    };

    SatelliteState {
        phase,
        position: parent_position + satellite_offset(def, phase),
    }
}
