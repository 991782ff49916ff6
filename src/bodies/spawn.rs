//! Mesh and material creation for bodies and their satellites

use bevy::prelude::*;

use crate::bodies::arena::SolarSystem;
use crate::bodies::catalog::{BodyDef, BodyId, SatelliteDef, SatelliteKind};
use crate::bodies::components::{CelestialBody, SatelliteOf};
use crate::bodies::textures::PendingTextures;
use crate::bodies::transforms::{body_transform, satellite_transform};
use crate::config::SolarConfig;

const SPHERE_SECTORS: u32 = 48;
const SPHERE_STACKS: u32 = 24;

fn srgb(color: [f32; 3]) -> Color {
    Color::srgb(color[0], color[1], color[2])
}

fn body_material(def: &BodyDef) -> StandardMaterial {
    if def.id == BodyId::Sun {
        StandardMaterial {
            base_color: srgb(def.color),
            emissive: srgb(def.color).to_linear() * 6.0,
            unlit: true,
            ..default()
        }
    } else {
        StandardMaterial {
            base_color: srgb(def.color),
            perceptual_roughness: 0.9,
            metallic: 0.0,
            ..default()
        }
    }
}

fn satellite_material(def: &SatelliteDef) -> StandardMaterial {
    match def.kind {
        SatelliteKind::Moon { .. } => StandardMaterial {
            base_color: srgb(def.color),
            perceptual_roughness: 1.0,
            ..default()
        },
        SatelliteKind::Rings { .. } => StandardMaterial {
            base_color: srgb(def.color).with_alpha(0.75),
            alpha_mode: AlphaMode::Blend,
            double_sided: true,
            cull_mode: None,
            perceptual_roughness: 1.0,
            ..default()
        },
    }
}

fn satellite_mesh(def: &SatelliteDef) -> Mesh {
    match def.kind {
        SatelliteKind::Moon { radius, .. } => Sphere::new(radius)
            .mesh()
            .uv(SPHERE_SECTORS / 2, SPHERE_STACKS / 2),
        SatelliteKind::Rings {
            inner_radius,
            outer_radius,
            ..
        } => Mesh::from(Annulus::new(inner_radius, outer_radius)),
    }
}

/// Spawn one entity per body and satellite at its initial arena position.
pub fn spawn_bodies(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut pending: ResMut<PendingTextures>,
    asset_server: Res<AssetServer>,
    config: Res<SolarConfig>,
    system: Res<SolarSystem>,
) {
    for record in system.iter() {
        let def = record.def;
        let mesh = meshes.add(Sphere::new(def.radius).mesh().uv(SPHERE_SECTORS, SPHERE_STACKS));
        let material = materials.add(body_material(def));

        if config.load_textures {
            pending.request(def.name, asset_server.load(def.texture_path()), material.clone());
        }

        commands.spawn((
            Mesh3d(mesh),
            MeshMaterial3d(material),
            body_transform(record),
            Visibility::Visible,
            CelestialBody(def.id),
            Name::new(def.name),
        ));

        for (index, (sat_def, sat_state)) in def.satellites.iter().zip(&record.satellites).enumerate()
        {
            let material = materials.add(satellite_material(sat_def));
            if config.load_textures
                && let Some(path) = sat_def.texture
            {
                pending.request(sat_def.name, asset_server.load(path), material.clone());
            }

            commands.spawn((
                Mesh3d(meshes.add(satellite_mesh(sat_def))),
                MeshMaterial3d(material),
                satellite_transform(sat_def, sat_state, record.orbit.position),
                Visibility::Visible,
                SatelliteOf {
                    parent: def.id,
                    index,
                },
                Name::new(sat_def.name),
            ));
        }
    }

    info!("Spawned {} bodies", system.iter().count());
}
