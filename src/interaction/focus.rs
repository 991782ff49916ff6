//! Camera focus easing and hover label fading

use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

use crate::bodies::{BodyDef, BodyId, SolarSystem};
use crate::config::SolarConfig;
use crate::interaction::tween::Tween;
use crate::ui::MainCamera;

/// Orbit camera distance used when a body is selected.
pub fn focus_radius(def: &BodyDef) -> f32 {
    def.radius * 6.0 + 4.0
}

/// Which body the camera looks at, and the eased look-at point.
#[derive(Resource, Debug)]
pub struct CameraFocus {
    pub target: Option<BodyId>,
    pub look_at: Tween<Vec3>,
    /// Orbit radius to apply on the next camera update
    pub pending_radius: Option<f32>,
}

impl Default for CameraFocus {
    fn default() -> Self {
        Self {
            target: None,
            look_at: Tween::settled(Vec3::ZERO),
            pending_radius: None,
        }
    }
}

impl CameraFocus {
    pub fn select(&mut self, id: BodyId, position: Vec3) {
        self.target = Some(id);
        self.look_at.retarget(position);
        self.pending_radius = Some(focus_radius(id.def()));
    }

    /// Ease back to the sun at the given orbit radius.
    pub fn clear(&mut self, radius: f32) {
        self.target = None;
        self.look_at.retarget(Vec3::ZERO);
        self.pending_radius = Some(radius);
    }

    /// True while the camera should be driven by this state.
    pub fn is_active(&self) -> bool {
        self.target.is_some() || !self.look_at.is_finished()
    }

    pub fn tick(&mut self, target_position: Option<Vec3>, delta_secs: f32, duration_secs: f32) {
        if let Some(position) = target_position {
            self.look_at.track(position);
        }
        self.look_at.tick(delta_secs, duration_secs);
    }
}

/// Hover label visibility with a fade in/out.
#[derive(Resource, Debug)]
pub struct HoverLabel {
    pub body: Option<BodyId>,
    pub alpha: Tween<f32>,
}

impl Default for HoverLabel {
    fn default() -> Self {
        Self {
            body: None,
            alpha: Tween::settled(0.0),
        }
    }
}

impl HoverLabel {
    pub fn tick(&mut self, hovered: Option<BodyId>, delta_secs: f32, duration_secs: f32) {
        let goal = if hovered.is_some() { 1.0 } else { 0.0 };
        if hovered.is_some() {
            self.body = hovered;
        }
        if self.alpha.to != goal {
            self.alpha.retarget(goal);
        }
        self.alpha.tick(delta_secs, duration_secs);

        if hovered.is_none() && self.alpha.is_finished() {
            self.body = None;
        }
    }

    /// Body to label and its opacity, if anything is visible.
    pub fn visible(&self) -> Option<(BodyId, f32)> {
        let alpha = self.alpha.value();
        self.body.filter(|_| alpha > 0.0).map(|id| (id, alpha))
    }
}

/// System to ease the orbit camera's look-at point towards the focused body
pub fn ease_camera_focus(
    time: Res<Time>,
    config: Res<SolarConfig>,
    system: Res<SolarSystem>,
    mut focus: ResMut<CameraFocus>,
    mut cameras: Query<&mut PanOrbitCamera, With<MainCamera>>,
) {
    if !focus.is_active() && focus.pending_radius.is_none() {
        return;
    }

    let target_position = focus.target.map(|id| system.get(id).render_position());
    focus.tick(target_position, time.delta_secs(), config.focus_transition_secs);

    let Ok(mut camera) = cameras.single_mut() else {
        return;
    };

    if let Some(radius) = focus.pending_radius.take() {
        camera.target_radius = radius;
    }

    let look_at = focus.look_at.value();
    if camera.focus != look_at {
        camera.focus = look_at;
        camera.target_focus = look_at;
        camera.force_update = true;
    }
}

/// System to fade the hover label in and out
pub fn fade_hover_label(
    time: Res<Time>,
    config: Res<SolarConfig>,
    hovered: Res<crate::interaction::HoveredBody>,
    mut label: ResMut<HoverLabel>,
) {
    label.tick(hovered.0, time.delta_secs(), config.label_fade_secs);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_eases_towards_moving_body() {
        let mut focus = CameraFocus::default();
        focus.select(BodyId::Earth, Vec3::new(16.0, 0.0, 0.0));
        assert_eq!(focus.pending_radius, Some(10.0));
        assert!(focus.is_active());

        focus.tick(Some(Vec3::new(16.0, 0.0, 0.0)), 0.6, 1.2);
        let halfway = focus.look_at.value();
        assert!((halfway - Vec3::new(8.0, 0.0, 0.0)).length() < 1e-4, "{:?}", halfway);

        // The body keeps moving; the camera ends up on its latest position.
        let moved = Vec3::new(0.0, 0.0, 16.0);
        focus.tick(Some(moved), 2.0, 1.2);
        assert_eq!(focus.look_at.value(), moved);
        assert!(focus.is_active());
    }

    #[test]
    fn test_clear_returns_to_sun() {
        let mut focus = CameraFocus::default();
        focus.select(BodyId::Mars, Vec3::new(20.0, 0.0, 0.0));
        focus.tick(Some(Vec3::new(20.0, 0.0, 0.0)), 5.0, 1.2);
        focus.clear(90.0);
        assert_eq!(focus.target, None);
        assert_eq!(focus.pending_radius, Some(90.0));
        focus.tick(None, 5.0, 1.2);
        assert_eq!(focus.look_at.value(), Vec3::ZERO);
        assert!(!focus.is_active());
    }

    #[test]
    fn test_label_fades_in_and_out() {
        let mut label = HoverLabel::default();
        assert_eq!(label.visible(), None);

        label.tick(Some(BodyId::Venus), 0.1, 0.2);
        let (id, alpha) = label.visible().unwrap();
        assert_eq!(id, BodyId::Venus);
        assert!(alpha > 0.0 && alpha < 1.0);

        label.tick(Some(BodyId::Venus), 0.2, 0.2);
        assert_eq!(label.visible(), Some((BodyId::Venus, 1.0)));

        // Still shown while fading out.
        label.tick(None, 0.1, 0.2);
        assert!(label.visible().is_some());
        label.tick(None, 0.2, 0.2);
        assert_eq!(label.visible(), None);
        assert_eq!(label.body, None);
    }

    #[test]
    fn test_label_switches_body_immediately() {
        let mut label = HoverLabel::default();
        label.tick(Some(BodyId::Venus), 1.0, 0.2);
        label.tick(Some(BodyId::Mars), 0.0, 0.2);
        assert_eq!(label.visible(), Some((BodyId::Mars, 1.0)));
    }
}
