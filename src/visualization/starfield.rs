//! Background star field
//!
//! Stars are placed on a spherical shell around the origin from a fixed
//! seed, so every run shows the same sky.

use bevy::prelude::*;
use rand::SeedableRng;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use std::f32::consts::TAU;

use crate::config::SolarConfig;
use crate::ui::Theme;

/// Marker for the parent entity holding every star
#[derive(Component)]
pub struct StarField;

const STAR_SEED: u64 = 0x5eed_50_1a25;
const SHELL_INNER: f32 = 900.0;
const SHELL_OUTER: f32 = 1600.0;
const STAR_RADIUS: f32 = 2.0;

/// Deterministic star positions, uniformly distributed over directions and
/// at a distance in `[inner, outer)` from the origin.
pub fn star_positions(count: usize, seed: u64, inner: f32, outer: f32) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    let height = Uniform::from(-1.0f32..1.0);
    let unit = Uniform::from(0.0f32..1.0);

    (0..count)
        .map(|_| {
            let z = height.sample(&mut rng);
            let phi = unit.sample(&mut rng) * TAU;
            let distance = inner + (outer - inner) * unit.sample(&mut rng);
            let ring = (1.0 - z * z).max(0.0).sqrt();
            Vec3::new(ring * phi.cos(), z, ring * phi.sin()) * distance
        })
        .collect()
}

/// Spawn the star field as children of a single [`StarField`] entity
pub fn spawn_star_field(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<SolarConfig>,
    theme: Res<Theme>,
) {
    let mesh = meshes.add(Sphere::new(STAR_RADIUS).mesh().uv(8, 6));
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        ..default()
    });

    let positions = star_positions(config.star_count as usize, STAR_SEED, SHELL_INNER, SHELL_OUTER);
    let visibility = if theme.shows_stars() {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };

    commands
        .spawn((StarField, Transform::default(), visibility, Name::new("Star Field")))
        .with_children(|parent| {
            for position in &positions {
                parent.spawn((
                    Mesh3d(mesh.clone()),
                    MeshMaterial3d(material.clone()),
                    Transform::from_translation(*position),
                ));
            }
        });

    debug!("Spawned {} stars", positions.len());
}
