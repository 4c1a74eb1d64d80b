//! Sun and scene lighting

use bevy::light::GlobalAmbientLight;
use bevy::picking::prelude::*;
use bevy::prelude::*;

use crate::catalog::{SUN_COLOR, SUN_RADIUS};
use crate::orbital::SimulationState;
use crate::visualization::config::SceneConfig;

/// Marker component for the central body
#[derive(Component)]
pub struct Sun;

/// Marker component for the point lights that make the Sun glow
#[derive(Component)]
pub struct SunGlow;

/// Startup system: spawn the Sun with its glow lights, plus ambient and fill light
pub fn spawn_sun(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<SceneConfig>,
) {
    let lighting = &config.lighting;

    commands.insert_resource(GlobalAmbientLight {
        color: Color::WHITE,
        brightness: lighting.ambient_brightness,
        ..default()
    });

    let sphere = meshes.add(Sphere::new(SUN_RADIUS).mesh().uv(32, 32));
    let material = materials.add(StandardMaterial {
        base_color: SUN_COLOR,
        unlit: true,
        ..default()
    });

    commands
        .spawn((
            Mesh3d(sphere),
            MeshMaterial3d(material),
            Transform::default(),
            Sun,
            Pickable::IGNORE,
            Name::new("Sun"),
        ))
        .with_children(|sun| {
            for spec in &lighting.sun_lights {
                sun.spawn((
                    PointLight {
                        color: spec.color,
                        intensity: spec.intensity * lighting.point_light_lumens,
                        range: spec.range,
                        ..default()
                    },
                    SunGlow,
                ));
            }
        });

    commands.spawn((
        DirectionalLight {
            illuminance: lighting.fill_light_illuminance,
            ..default()
        },
        Transform::from_translation(lighting.fill_light_position).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("Fill light"),
    ));
}

/// Spin the Sun; runs regardless of pause
pub fn spin_sun(state: Res<SimulationState>, mut sun: Query<&mut Transform, With<Sun>>) {
    for mut transform in sun.iter_mut() {
        transform.rotation = Quat::from_rotation_y(state.sun_spin());
    }
}
