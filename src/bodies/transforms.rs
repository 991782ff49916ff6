//! Arena state to render transform conversion

use bevy::math::DVec3;
use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;
use std::f64::consts::TAU;

use crate::bodies::arena::{BodyRecord, SolarSystem};
use crate::bodies::catalog::{SatelliteDef, SatelliteKind};
use crate::bodies::components::{CelestialBody, SatelliteOf};
use crate::orbital::SatelliteState;

/// Wrap an unbounded accumulator before narrowing to f32.
fn wrapped(angle: f64) -> f32 {
    angle.rem_euclid(TAU) as f32
}

pub fn body_transform(record: &BodyRecord) -> Transform {
    Transform::from_translation(record.render_position())
        .with_rotation(Quat::from_rotation_y(wrapped(record.orbit.rotation)))
}

/// Orientation of a ring system: the annulus mesh lies in XY, so it is laid
/// into XZ, tilted about X, and spun about its own normal by `phase`.
pub fn ring_rotation(tilt_deg: f32, phase: f64) -> Quat {
    Quat::from_rotation_x(tilt_deg.to_radians() - FRAC_PI_2) * Quat::from_rotation_z(wrapped(phase))
}

pub fn satellite_transform(def: &SatelliteDef, state: &SatelliteState, parent: DVec3) -> Transform {
    let translation = state.position.as_vec3();
    match def.kind {
        // Tidal lock: face the parent.
        SatelliteKind::Moon { .. } => {
            Transform::from_translation(translation).looking_at(parent.as_vec3(), Vec3::Y)
        }
        SatelliteKind::Rings { tilt_deg, .. } => {
            Transform::from_translation(translation).with_rotation(ring_rotation(tilt_deg, state.phase))
        }
    }
}

/// System to copy arena state into entity transforms
pub fn sync_body_transforms(
    system: Res<SolarSystem>,
    mut bodies: Query<(&CelestialBody, &mut Transform), Without<SatelliteOf>>,
    mut satellites: Query<(&SatelliteOf, &mut Transform), Without<CelestialBody>>,
) {
    if !system.is_changed() {
        return;
    }

    for (body, mut transform) in &mut bodies {
        *transform = body_transform(system.get(body.0));
    }

    for (link, mut transform) in &mut satellites {
        let record = system.get(link.parent);
        let (Some(def), Some(state)) = (
            record.def.satellites.get(link.index),
            record.satellites.get(link.index),
        ) else {
            continue;
        };
        *transform = satellite_transform(def, state, record.orbit.position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::BodyId;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_flat_ring_faces_up() {
        let normal = ring_rotation(0.0, 1.3) * Vec3::Z;
        assert!((normal - Vec3::Y).length() < EPSILON, "normal = {:?}", normal);
    }

    #[test]
    fn test_ring_tilt_angle() {
        let normal = ring_rotation(26.7, 0.0) * Vec3::Z;
        let tilt = normal.angle_between(Vec3::Y).to_degrees();
        assert!((tilt - 26.7).abs() < 1e-3, "tilt = {}", tilt);
    }

    #[test]
    fn test_body_transform_uses_arena_position() {
        let system = SolarSystem::default();
        let record = system.get(BodyId::Mars);
        let transform = body_transform(record);
        assert_eq!(transform.translation, record.orbit.position.as_vec3());
    }

    #[test]
    fn test_wrapped_keeps_large_rotations_bounded() {
        let w = wrapped(1.0e7);
        assert!((0.0..std::f32::consts::TAU + EPSILON).contains(&w));
    }
}
