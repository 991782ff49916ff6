use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowPlugin};
use bevy_egui::EguiPlugin;
use bevy_panorbit_camera::{PanOrbitCamera, PanOrbitCameraPlugin};

#[cfg(feature = "dev")]
use bevy::dev_tools::fps_overlay::FpsOverlayPlugin;

mod bodies;
mod config;
mod interaction;
mod orbital;
mod ui;
mod visualization;

use bodies::BodiesPlugin;
use config::SolarConfig;
use interaction::InteractionPlugin;
use orbital::OrbitalPlugin;
use ui::{MainCamera, UiPlugin};
use visualization::VisualizationPlugin;

const CAMERA_NEAR: f32 = 0.1;
const CAMERA_FAR: f32 = 5_000.0;
const CAMERA_PITCH_RAD: f32 = 0.45;

// Setup scene and cameras
pub fn setup(mut commands: Commands, config: Res<SolarConfig>) {
    let pan_orbit = PanOrbitCamera {
        focus: Vec3::ZERO,
        radius: Some(config.camera_distance),
        yaw: Some(0.0),
        pitch: Some(CAMERA_PITCH_RAD),
        force_update: true,
        ..default()
    };

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            near: CAMERA_NEAR,
            // The star field shell sits well inside this.
            far: CAMERA_FAR,
            ..default()
        }),
        pan_orbit,
        MainCamera,
        Tonemapping::TonyMcMapface,
        Transform::from_xyz(0.0, 0.0, config.camera_distance).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("Main Camera"),
    ));
}

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Solarscope".to_string(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }));

    #[cfg(feature = "dev")]
    app.add_plugins(FpsOverlayPlugin::default());

    // Loaded after DefaultPlugins so the log plugin reports where it came from.
    let config = config::load_or_default();
    app.insert_resource(ClearColor(config.theme.clear_color()))
        .insert_resource(GlobalAmbientLight {
            brightness: config.theme.ambient_brightness(),
            ..default()
        })
        .insert_resource(config);

    app.add_plugins(EguiPlugin::default());
    app.add_plugins(PanOrbitCameraPlugin);

    // Add our custom plugins
    app.add_plugins(OrbitalPlugin);
    app.add_plugins(BodiesPlugin);
    app.add_plugins(InteractionPlugin);
    app.add_plugins(UiPlugin);
    app.add_plugins(VisualizationPlugin);
    app.add_systems(Startup, setup);

    app.run();
}
