use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::picking::prelude::*;
use bevy::prelude::*;
use bevy::render::RenderPlugin;
use bevy::render::settings::{RenderCreation, WgpuSettings};
use bevy::window::{PresentMode, Window, WindowPlugin};

use bevy_feathers::FeathersPlugins;
use bevy_input_focus::directional_navigation::DirectionalNavigationPlugin;
use bevy_panorbit_camera::{PanOrbitCamera, PanOrbitCameraPlugin};

#[cfg(feature = "dev_camera")]
use bevy_camera_controller::free_camera::{FreeCamera, FreeCameraPlugin};
#[cfg(feature = "dev")]
use bevy::dev_tools::fps_overlay::FpsOverlayPlugin;

mod catalog;
mod orbital;
mod ui;
mod visualization;

// Import plugins
use orbital::OrbitalPlugin;
use ui::theme::{ThemePalette, feathers_theme};
use ui::{MainCamera, UiPlugin};
use visualization::{SceneConfig, VisualizationPlugin};

#[cfg(feature = "dev_camera")]
#[derive(Component)]
struct DevCamera;

// Setup camera
pub fn setup(mut commands: Commands, config: Res<SceneConfig>) {
    let camera = &config.camera;
    let (radius, yaw, pitch) = camera.orbit_pose();

    let pan_orbit = PanOrbitCamera {
        focus: Vec3::ZERO,
        radius: Some(radius),
        yaw: Some(yaw),
        pitch: Some(pitch),
        zoom_lower_limit: camera.min_distance,
        zoom_upper_limit: Some(camera.max_distance),
        force_update: true,
        ..default()
    };

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: camera.fov_degrees.to_radians(),
            near: 0.1,
            far: 1000.0,
            ..default()
        }),
        pan_orbit,
        MainCamera,
        Tonemapping::TonyMcMapface,
        Transform::from_translation(camera.position).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

#[cfg(feature = "dev_camera")]
fn setup_dev_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Camera {
            order: 2,
            is_active: false,
            ..default()
        },
        FreeCamera::default(),
        DevCamera,
        Transform::from_xyz(0.0, 20.0, 30.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

#[cfg(feature = "dev_camera")]
fn toggle_dev_camera(
    input: Res<ButtonInput<KeyCode>>,
    mut main_camera: Query<&mut Camera, (With<MainCamera>, Without<DevCamera>)>,
    mut dev_camera: Query<&mut Camera, With<DevCamera>>,
) {
    if !input.just_pressed(KeyCode::F2) {
        return;
    }

    if let Ok(mut main) = main_camera.single_mut()
        && let Ok(mut dev) = dev_camera.single_mut()
    {
        let dev_active = dev.is_active;
        dev.is_active = !dev_active;
        main.is_active = dev_active;
    }
}

fn main() {
    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Solar System".to_string(),
                    present_mode: PresentMode::AutoVsync,
                    ..default()
                }),
                ..default()
            })
            .set(RenderPlugin {
                render_creation: RenderCreation::Automatic(WgpuSettings { ..default() }),
                ..default()
            }),
    );

    #[cfg(feature = "dev")]
    app.add_plugins(FpsOverlayPlugin::default());

    // Starts in dark mode; `apply_theme` swaps both when the toggle is pressed.
    app.insert_resource(ClearColor(ThemePalette::DARK.background));
    app.insert_resource(feathers_theme(true));

    app.add_plugins(FeathersPlugins);
    app.add_plugins(DirectionalNavigationPlugin);

    #[cfg(feature = "dev_camera")]
    app.add_plugins(FreeCameraPlugin);

    app.add_plugins(PanOrbitCameraPlugin);
    app.add_plugins(MeshPickingPlugin);

    // Add our custom plugins
    app.add_plugins(OrbitalPlugin);
    app.add_plugins(VisualizationPlugin);
    app.add_plugins(UiPlugin);
    app.add_systems(Startup, setup);

    #[cfg(feature = "dev_camera")]
    {
        app.add_systems(Startup, setup_dev_camera);
        app.add_systems(Update, toggle_dev_camera);
    }

    app.run();
}
