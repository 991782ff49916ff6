//! Deferred texture attachment
//!
//! Materials start with their flat catalog color. A texture is attached only
//! once its image has finished loading, so a missing file never hides a body.

use bevy::asset::LoadState;
use bevy::prelude::*;

pub struct PendingTexture {
    pub label: &'static str,
    pub image: Handle<Image>,
    pub material: Handle<StandardMaterial>,
}

/// Texture requests that have not resolved yet
#[derive(Resource, Default)]
pub struct PendingTextures {
    pub items: Vec<PendingTexture>,
}

impl PendingTextures {
    pub fn request(
        &mut self,
        label: &'static str,
        image: Handle<Image>,
        material: Handle<StandardMaterial>,
    ) {
        self.items.push(PendingTexture {
            label,
            image,
            material,
        });
    }
}

/// System to swap loaded textures into their materials
pub fn attach_loaded_textures(
    asset_server: Res<AssetServer>,
    mut pending: ResMut<PendingTextures>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if pending.items.is_empty() {
        return;
    }

    pending.items.retain(|item| {
        let state = asset_server
            .get_load_state(item.image.id())
            .unwrap_or(LoadState::NotLoaded);

        if state.is_loaded() {
            if let Some(mut material) = materials.get_mut(&item.material) {
                material.base_color = Color::WHITE;
                material.base_color_texture = Some(item.image.clone());
            }
            debug!("Texture ready for {}", item.label);
            return false;
        }

        if matches!(state, LoadState::Failed(_)) {
            warn!("Texture for {} unavailable; keeping flat color", item.label);
            return false;
        }

        true
    });
}
