//! UI panel components and utilities
use bevy::prelude::*;
use bevy_egui::egui::{self, Color32};
use std::f64::consts::TAU;

use crate::bodies::{BodyId, BodyRecord};
use crate::orbital::{MAX_SPEED, MIN_SPEED, SPEED_STEP, SimulationClock, SpeedOverrides};
use crate::ui::state::{Theme, UIState};

/// Request raised by a panel widget or shortcut, applied after the egui pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    TogglePause,
    ResetSpeeds,
    ToggleTheme,
    ToggleOrbits,
    ClearFocus,
    Focus(BodyId),
}

/// Convert Bevy Color to egui Color32
fn bevy_to_egui_color(color: Color) -> Color32 {
    let srgba = color.to_srgba();
    Color32::from_rgb(
        (srgba.red * 255.0) as u8,
        (srgba.green * 255.0) as u8,
        (srgba.blue * 255.0) as u8,
    )
}

fn body_color(id: BodyId) -> Color32 {
    let [r, g, b] = id.def().color;
    bevy_to_egui_color(Color::srgb(r, g, b))
}

/// Orbit angle wrapped to [0, 360) degrees.
pub fn angle_degrees(angle: f64) -> f64 {
    angle.rem_euclid(TAU).to_degrees()
}

/// Simulated time as `h:mm:ss`.
pub fn format_elapsed(secs: f64) -> String {
    let total = secs.max(0.0) as u64;
    format!("{}:{:02}:{:02}", total / 3600, (total / 60) % 60, total % 60)
}

pub fn render_controls_panel(
    ui: &mut egui::Ui,
    speeds: &mut SpeedOverrides,
    clock: &SimulationClock,
    state: &mut UIState,
    theme: Theme,
    focus_target: Option<BodyId>,
    actions: &mut Vec<PanelAction>,
) {
    ui.heading("Simulation");
    ui.separator();

    ui.horizontal(|ui| {
        let label = if clock.paused { "Play (Space)" } else { "Pause (Space)" };
        if ui.button(label).clicked() {
            actions.push(PanelAction::TogglePause);
        }
        if ui.button("Reset (R)").clicked() {
            actions.push(PanelAction::ResetSpeeds);
        }
    });
    ui.horizontal(|ui| {
        if ui
            .button(format!("{} theme (T)", theme.toggled().label()))
            .clicked()
        {
            actions.push(PanelAction::ToggleTheme);
        }
        if ui
            .add_enabled(focus_target.is_some(), egui::Button::new("Clear focus (Esc)"))
            .clicked()
        {
            actions.push(PanelAction::ClearFocus);
        }
    });

    ui.checkbox(&mut state.show_orbits, "Show orbits (O)");
    ui.checkbox(&mut state.show_labels, "Show hover labels");

    ui.separator();
    ui.heading("Speeds");
    ui.separator();

    egui::Grid::new("speed_grid")
        .num_columns(3)
        .striped(true)
        .show(ui, |ui| {
            for id in BodyId::ALL {
                let def = id.def();
                let name = egui::RichText::new(def.name).color(body_color(id));
                if ui
                    .selectable_label(focus_target == Some(id), name)
                    .on_hover_text("Focus camera")
                    .clicked()
                {
                    actions.push(PanelAction::Focus(id));
                }

                let mut value = speeds.get(id);
                let response = ui.add(
                    egui::Slider::new(&mut value, MIN_SPEED..=MAX_SPEED)
                        .step_by(SPEED_STEP as f64)
                        .fixed_decimals(1),
                );
                if response.changed() {
                    speeds.set_speed(id, value);
                }
                if ui
                    .add_enabled(!speeds.is_default(id), egui::Button::new("↺").small())
                    .on_hover_text("Base speed")
                    .clicked()
                {
                    speeds.set_speed(id, def.base_speed);
                }
                ui.end_row();
            }
        });

    ui.allocate_rect(ui.available_rect_before_wrap(), egui::Sense::hover());
}

pub fn render_info_panel(
    ui: &mut egui::Ui,
    record: &BodyRecord,
    speeds: &SpeedOverrides,
    clock: &SimulationClock,
) {
    let def = record.def;
    ui.heading(egui::RichText::new(def.name).color(body_color(def.id)));
    ui.separator();

    egui::Grid::new("info_grid").num_columns(2).show(ui, |ui| {
        ui.label("Distance:");
        ui.monospace(format!("{:.1}", def.distance));
        ui.end_row();

        ui.label("Radius:");
        ui.monospace(format!("{:.2}", def.radius));
        ui.end_row();

        ui.label("Speed:");
        ui.monospace(format!("{:.2}", speeds.get(def.id)));
        ui.end_row();

        ui.label("Base speed:");
        ui.monospace(format!("{:.2}", def.base_speed));
        ui.end_row();

        if def.is_orbiting() {
            ui.label("Angle:");
            ui.monospace(format!("{:.1}°", angle_degrees(record.orbit.angle)));
            ui.end_row();
        }

        ui.label("Sim time:");
        ui.monospace(format_elapsed(clock.active_secs));
        ui.end_row();
    });

    if !def.satellites.is_empty() {
        ui.separator();
        for sat in def.satellites {
            ui.label(format!("• {}", sat.name));
        }
    }
}

pub fn render_top_panel(
    ui: &mut egui::Ui,
    state: &mut UIState,
    clock: &SimulationClock,
    focus_target: Option<BodyId>,
) {
    ui.horizontal(|ui| {
        ui.strong("Solarscope");
        ui.separator();
        if clock.paused {
            ui.colored_label(Color32::from_rgb(230, 170, 60), "Paused");
        } else {
            ui.label("Running");
        }
        ui.separator();
        ui.monospace(format_elapsed(clock.active_secs));
        ui.separator();
        match focus_target {
            Some(id) => ui.colored_label(body_color(id), format!("Focus: {}", id.def().name)),
            None => ui.colored_label(Color32::GRAY, "Focus: Sun"),
        };

        ui.add_space(10.0);
        ui.separator();
        ui.label("Panels:");
        if ui
            .small_button(if state.show_controls { "Hide controls" } else { "Show controls" })
            .clicked()
        {
            state.show_controls = !state.show_controls;
        }
        if ui
            .small_button(if state.show_info { "Hide info" } else { "Show info" })
            .clicked()
        {
            state.show_info = !state.show_info;
        }
    });
    ui.allocate_rect(ui.available_rect_before_wrap(), egui::Sense::hover());
}

/// Floating name tag next to a body, faded by `alpha`.
pub fn render_hover_label(ctx: &egui::Context, id: BodyId, alpha: f32, screen_pos: Vec2) {
    let color = body_color(id).gamma_multiply(alpha.clamp(0.0, 1.0));
    let fill = Color32::from_black_alpha((180.0 * alpha.clamp(0.0, 1.0)) as u8);

    egui::Area::new(egui::Id::new("hover_label"))
        .fixed_pos(egui::pos2(screen_pos.x + 12.0, screen_pos.y - 12.0))
        .order(egui::Order::Tooltip)
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(fill)
                .inner_margin(egui::Margin::symmetric(6, 3))
                .corner_radius(4.0)
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(id.def().name).color(color).strong());
                });
        });
}
