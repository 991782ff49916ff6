//! Pointer hover and click systems

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_panorbit_camera::PanOrbitCamera;

use crate::bodies::SolarSystem;
use crate::interaction::focus::CameraFocus;
use crate::interaction::HoveredBody;
use crate::interaction::hit_test::{hit_test, pointer_ray};
use crate::ui::{MainCamera, UIState};

/// Farthest the cursor may travel between press and release for the pair to
/// count as a click rather than an orbit drag, in logical pixels.
pub const CLICK_SLOP_PX: f32 = 4.0;

/// Left-button press position, for telling clicks from drags
#[derive(Debug, Default)]
pub struct ClickTracker {
    pressed_at: Option<Vec2>,
}

impl ClickTracker {
    /// Record a press. Presses without a cursor (or over the UI) are dropped.
    pub fn press(&mut self, cursor: Option<Vec2>) {
        self.pressed_at = cursor;
    }

    /// True when the release completes a click started by [`Self::press`].
    pub fn release(&mut self, cursor: Option<Vec2>) -> bool {
        match (self.pressed_at.take(), cursor) {
            (Some(start), Some(end)) => start.distance(end) <= CLICK_SLOP_PX,
            _ => false,
        }
    }
}

/// System to resolve which body is under the cursor this frame
pub fn update_hovered_body(
    window: Single<&Window, With<PrimaryWindow>>,
    camera: Single<(&Camera, &GlobalTransform), With<MainCamera>>,
    ui_state: Res<UIState>,
    system: Res<SolarSystem>,
    mut hovered: ResMut<HoveredBody>,
) {
    let (camera, camera_transform) = *camera;

    let hit = if ui_state.pointer_over_ui {
        None
    } else {
        let viewport_min = camera
            .logical_viewport_rect()
            .map_or(Vec2::ZERO, |rect| rect.min);
        window
            .cursor_position()
            .and_then(|cursor| pointer_ray(camera, camera_transform, cursor - viewport_min))
            .and_then(|ray| hit_test(&ray, system.bounding_spheres()))
    };

    hovered.set_if_neq(HoveredBody(hit));
}

/// System to focus the camera on the hovered body when it is clicked
///
/// Selection happens on release, and only if the cursor stayed put, so
/// orbiting the camera with a drag that starts over a body leaves the focus
/// alone.
pub fn select_on_click(
    window: Single<&Window, With<PrimaryWindow>>,
    buttons: Res<ButtonInput<MouseButton>>,
    hovered: Res<HoveredBody>,
    ui_state: Res<UIState>,
    system: Res<SolarSystem>,
    mut focus: ResMut<CameraFocus>,
    mut tracker: Local<ClickTracker>,
) {
    let cursor = window.cursor_position();

    if buttons.just_pressed(MouseButton::Left) {
        tracker.press(cursor.filter(|_| !ui_state.pointer_over_ui));
    }
    if !buttons.just_released(MouseButton::Left) || !tracker.release(cursor) {
        return;
    }

    let Some(id) = hovered.0 else {
        return;
    };
    if focus.target == Some(id) {
        return;
    }

    focus.select(id, system.get(id).render_position());
    info!("Focusing camera on {}", id.def().name);
}

/// System to keep the orbit camera from reacting to drags and scrolls that
/// start over a panel
pub fn gate_camera_input(
    ui_state: Res<UIState>,
    mut cameras: Query<&mut PanOrbitCamera, With<MainCamera>>,
) {
    for mut camera in &mut cameras {
        let enabled = !ui_state.pointer_over_ui;
        if camera.enabled != enabled {
            camera.enabled = enabled;
        }
    }
}
