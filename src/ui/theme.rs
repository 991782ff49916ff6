//! Applying the theme to the scene

use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;

use crate::ui::Theme;
use crate::visualization::StarField;

/// System to push the current theme into the clear color, ambient light and
/// star field visibility whenever it changes
pub fn apply_theme(
    theme: Res<Theme>,
    mut clear_color: ResMut<ClearColor>,
    mut ambient: ResMut<GlobalAmbientLight>,
    mut stars: Query<&mut Visibility, With<StarField>>,
) {
    if !theme.is_changed() {
        return;
    }

    clear_color.0 = theme.clear_color();
    ambient.brightness = theme.ambient_brightness();

    let visibility = if theme.shows_stars() {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };
    for mut star_visibility in &mut stars {
        *star_visibility = visibility;
    }

    debug!("Applied {} theme", theme.label());
}
