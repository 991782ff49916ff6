//! Scene lighting

use bevy::prelude::*;

use crate::bodies::BodyId;

/// Marker component for the point light at the sun's center
#[derive(Component)]
pub struct SunLight;

// Lumens; bright enough that Neptune is still lit at its orbit.
const SUN_LIGHT_INTENSITY: f32 = 5.0e7;
const SUN_LIGHT_RANGE: f32 = 500.0;

/// Spawn the sun's point light at the origin
pub fn spawn_sun_light(mut commands: Commands) {
    commands.spawn((
        PointLight {
            intensity: SUN_LIGHT_INTENSITY,
            range: SUN_LIGHT_RANGE,
            radius: BodyId::Sun.def().radius,
            shadows_enabled: false,
            ..default()
        },
        SunLight,
        Transform::from_translation(Vec3::ZERO),
        Name::new("Sun Light"),
    ));
}
