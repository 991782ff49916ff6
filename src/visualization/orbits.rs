//! Orbit line gizmos

use bevy::prelude::*;
use std::f32::consts::TAU;

use crate::bodies::{SatelliteKind, SolarSystem};
use crate::ui::{Theme, UIState};

const ORBIT_SEGMENTS: usize = 128;
const MOON_ORBIT_SEGMENTS: usize = 48;

/// Closed polyline of `segments` points on a circle of `radius` in the
/// orbital (XZ) plane around `center`.
pub fn orbit_points(center: Vec3, radius: f32, segments: usize) -> Vec<Vec3> {
    (0..segments)
        .map(|i| {
            let angle = i as f32 / segments as f32 * TAU;
            center + Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin())
        })
        .collect()
}

fn draw_loop(gizmos: &mut Gizmos, points: &[Vec3], color: Color) {
    for (i, start) in points.iter().enumerate() {
        let end = points[(i + 1) % points.len()];
        gizmos.line(*start, end, color);
    }
}

/// System to draw every orbit path, plus the moon's path around its planet
pub fn draw_orbit_lines(
    mut gizmos: Gizmos,
    state: Res<UIState>,
    theme: Res<Theme>,
    system: Res<SolarSystem>,
) {
    if !state.show_orbits {
        return;
    }
    let color = theme.orbit_line_color();

    for record in system.iter().filter(|r| r.def.is_orbiting()) {
        draw_loop(
            &mut gizmos,
            &orbit_points(Vec3::ZERO, record.def.distance, ORBIT_SEGMENTS),
            color,
        );

        for sat in record.def.satellites {
            if let SatelliteKind::Moon { local_radius, .. } = sat.kind {
                draw_loop(
                    &mut gizmos,
                    &orbit_points(record.render_position(), local_radius, MOON_ORBIT_SEGMENTS),
                    color.with_alpha(color.alpha() * 0.6),
                );
            }
        }
    }
}
