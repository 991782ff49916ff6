//! UI systems for the egui interface

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::bodies::SolarSystem;
use crate::config::SolarConfig;
use crate::interaction::{CameraFocus, HoverLabel, HoveredBody};
use crate::orbital::{SimulationClock, SpeedOverrides};
use crate::ui::panels::{
    PanelAction, render_controls_panel, render_hover_label, render_info_panel, render_top_panel,
};
use crate::ui::state::{MainCamera, Theme, UIState};

/// Resources mutated by panel actions
pub struct ActionTargets<'a> {
    pub clock: &'a mut SimulationClock,
    pub speeds: &'a mut SpeedOverrides,
    pub theme: &'a mut Theme,
    pub state: &'a mut UIState,
    pub focus: &'a mut CameraFocus,
}

/// Apply one panel action or shortcut.
pub fn apply_action(
    action: PanelAction,
    targets: &mut ActionTargets,
    system: &SolarSystem,
    config: &SolarConfig,
) {
    match action {
        PanelAction::TogglePause => {
            targets.clock.toggle();
            info!(
                "Simulation {}",
                if targets.clock.paused { "paused" } else { "resumed" }
            );
        }
        PanelAction::ResetSpeeds => {
            targets.speeds.reset_all();
            info!("Reset all speeds to their base values");
        }
        PanelAction::ToggleTheme => {
            *targets.theme = targets.theme.toggled();
            info!("Switched to {} theme", targets.theme.label());
        }
        PanelAction::ToggleOrbits => {
            targets.state.show_orbits = !targets.state.show_orbits;
        }
        PanelAction::ClearFocus => {
            if targets.focus.target.is_some() {
                targets.focus.clear(config.camera_distance);
                info!("Cleared camera focus");
            }
        }
        PanelAction::Focus(id) => {
            if targets.focus.target != Some(id) {
                targets.focus.select(id, system.get(id).render_position());
                info!("Focusing camera on {}", id.def().name);
            }
        }
    }
}

fn shortcut_actions(input: &egui::InputState) -> Vec<PanelAction> {
    [
        (egui::Key::Space, PanelAction::TogglePause),
        (egui::Key::R, PanelAction::ResetSpeeds),
        (egui::Key::T, PanelAction::ToggleTheme),
        (egui::Key::O, PanelAction::ToggleOrbits),
        (egui::Key::Escape, PanelAction::ClearFocus),
    ]
    .into_iter()
    .filter(|(key, _)| input.key_pressed(*key))
    .map(|(_, action)| action)
    .collect()
}

fn egui_visuals(theme: Theme) -> egui::Visuals {
    match theme {
        Theme::Dark => egui::Visuals::dark(),
        Theme::Light => egui::Visuals::light(),
    }
}

/// Main UI system that renders all the egui panels
#[allow(clippy::too_many_arguments)]
pub fn ui_system(
    mut contexts: EguiContexts,
    camera: Single<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut state: ResMut<UIState>,
    mut clock: ResMut<SimulationClock>,
    mut speeds: ResMut<SpeedOverrides>,
    mut theme_res: ResMut<Theme>,
    mut focus: ResMut<CameraFocus>,
    hovered: Res<HoveredBody>,
    label: Res<HoverLabel>,
    system: Res<SolarSystem>,
    config: Res<SolarConfig>,
    mut applied_visuals: Local<Option<Theme>>,
) {
    let Ok(ctx) = contexts.ctx_mut() else { return };

    let theme = *theme_res;
    if *applied_visuals != Some(theme) {
        ctx.set_visuals(egui_visuals(theme));
        *applied_visuals = Some(theme);
    }

    let mut actions = if ctx.wants_keyboard_input() {
        Vec::new()
    } else {
        ctx.input(shortcut_actions)
    };

    egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
        render_top_panel(ui, &mut state, &clock, focus.target);
    });

    if state.show_controls {
        egui::SidePanel::left("controls_panel")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                render_controls_panel(
                    ui,
                    &mut speeds,
                    &clock,
                    &mut state,
                    theme,
                    focus.target,
                    &mut actions,
                );
            });
    }

    if state.show_info
        && let Some(id) = focus.target
    {
        egui::Window::new("Selection")
            .id(egui::Id::new("info_window"))
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
            .resizable(false)
            .collapsible(true)
            .show(ctx, |ui| {
                render_info_panel(ui, system.get(id), &speeds, &clock);
            });
    }

    let (camera, camera_transform) = *camera;
    if state.show_labels
        && let Some((id, alpha)) = label.visible()
        && let Ok(screen_pos) =
            camera.world_to_viewport(camera_transform, system.get(id).render_position())
    {
        render_hover_label(ctx, id, alpha, screen_pos);
    }

    let over_ui = ctx.is_pointer_over_area();
    if state.pointer_over_ui != over_ui {
        state.pointer_over_ui = over_ui;
    }
    if hovered.0.is_some() && !over_ui {
        ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    let mut theme = theme;
    let mut targets = ActionTargets {
        clock: &mut *clock,
        speeds: &mut *speeds,
        theme: &mut theme,
        state: &mut *state,
        focus: &mut *focus,
    };
    for action in actions {
        apply_action(action, &mut targets, &system, &config);
    }
    theme_res.set_if_neq(theme);
}
