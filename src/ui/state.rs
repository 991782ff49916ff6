//! UI state management

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Marker for the orbit camera the scene is viewed through
#[derive(Component)]
pub struct MainCamera;

/// Main UI state resource
#[derive(Resource)]
pub struct UIState {
    pub show_controls: bool,
    pub show_info: bool,
    pub show_orbits: bool,
    pub show_labels: bool,
    /// Set during the egui pass; pointer input over a panel is not forwarded
    /// to the scene on the following frame.
    pub pointer_over_ui: bool,
}

impl Default for UIState {
    fn default() -> Self {
        Self {
            show_controls: true,
            show_info: true,
            show_orbits: true,
            show_labels: true,
            pointer_over_ui: false,
        }
    }
}

/// Light or dark presentation of the scene and panels
#[derive(Resource, Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    pub fn clear_color(self) -> Color {
        match self {
            Theme::Dark => Color::srgb(0.01, 0.01, 0.03),
            Theme::Light => Color::srgb(0.78, 0.84, 0.92),
        }
    }

    pub fn ambient_brightness(self) -> f32 {
        match self {
            Theme::Dark => 80.0,
            Theme::Light => 600.0,
        }
    }

    pub fn orbit_line_color(self) -> Color {
        match self {
            Theme::Dark => Color::srgba(0.6, 0.7, 0.9, 0.35),
            Theme::Light => Color::srgba(0.15, 0.2, 0.35, 0.6),
        }
    }

    pub fn shows_stars(self) -> bool {
        self == Theme::Dark
    }
}
