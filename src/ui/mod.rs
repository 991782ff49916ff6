//! User interface module
//!
//! This module handles UI state management, panels, theme application and
//! keyboard shortcuts for the egui-based user interface.

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::config::SolarConfig;

pub mod panels;
pub mod state;
pub mod systems;
pub mod theme;

pub use panels::PanelAction;
pub use state::{MainCamera, Theme, UIState};
pub use systems::ui_system;
pub use theme::apply_theme;

/// Plugin for user interface management
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        let theme = app
            .world()
            .get_resource::<SolarConfig>()
            .map(|cfg| cfg.theme)
            .unwrap_or_default();

        app.insert_resource(theme)
            .init_resource::<UIState>()
            .add_systems(Update, apply_theme)
            .add_systems(EguiPrimaryContextPass, ui_system);
    }
}
