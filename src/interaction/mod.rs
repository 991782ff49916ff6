//! Pointer interaction module
//!
//! This module turns the cursor into a world-space ray, resolves which body
//! it touches, and drives the camera focus and hover label transitions.

use bevy::prelude::*;

use crate::bodies::{BodyId, sync_body_transforms};

pub mod focus;
pub mod hit_test;
pub mod systems;
pub mod tween;

pub use focus::{CameraFocus, HoverLabel, ease_camera_focus, fade_hover_label};
pub use hit_test::{PickRay, hit_test, pointer_ray};
pub use systems::{ClickTracker, gate_camera_input, select_on_click, update_hovered_body};

/// Body currently under the cursor, if any
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoveredBody(pub Option<BodyId>);

/// Plugin for hover, click-to-focus and their transitions
pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HoveredBody>()
            .init_resource::<CameraFocus>()
            .init_resource::<HoverLabel>()
            .add_systems(
                Update,
                (
                    gate_camera_input,
                    update_hovered_body,
                    select_on_click,
                    fade_hover_label,
                    ease_camera_focus,
                )
                    .chain()
                    .after(sync_body_transforms),
            );
    }
}
