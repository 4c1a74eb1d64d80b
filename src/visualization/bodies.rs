//! Orbiting bodies: spawning, per-frame transforms and hover emphasis.
//!
//! Each body is a pivot at the origin whose yaw is the orbital angle. The
//! sphere, its orbit path and (for ringed bodies) the ring system are
//! children of the pivot, so the sphere sits at a fixed `(distance, 0, 0)`
//! and orbiting is just rotating the parent.

use std::f32::consts::FRAC_PI_2;

use bevy::picking::prelude::*;
use bevy::prelude::*;

use crate::catalog::{BODY_COUNT, BodyId};
use crate::orbital::SimulationState;
use crate::visualization::config::SceneConfig;

/// Orbit pivot of a body; rotated by the orbital angle
#[derive(Component, Debug, Clone, Copy)]
pub struct BodyPivot(pub BodyId);

/// Sphere mesh of a body; spun by the self-rotation angle
#[derive(Component, Debug, Clone, Copy)]
pub struct BodyMesh(pub BodyId);

/// Flat band showing a body's orbit
#[derive(Component)]
pub struct OrbitPath;

/// Secondary ring system around a body
#[derive(Component)]
pub struct RingSystem;

/// Rotation that lays an XY-plane annulus into the XZ orbital plane
fn orbital_plane() -> Quat {
    Quat::from_rotation_x(-FRAC_PI_2)
}

/// World-space center of a body at the given orbital angle
pub fn orbit_position(id: BodyId, orbit_angle: f32) -> Vec3 {
    Quat::from_rotation_y(orbit_angle) * Vec3::new(id.body().distance, 0.0, 0.0)
}

/// Startup system: spawn every orbiting body with its orbit path
pub fn spawn_bodies(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<SceneConfig>,
) -> Result {
    let path_cfg = &config.orbit_path;
    let orbit_material = materials.add(StandardMaterial {
        base_color: path_cfg.color.with_alpha(path_cfg.opacity),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    let ring_cfg = &config.ring_system;
    let ring_material = materials.add(StandardMaterial {
        base_color: ring_cfg.color.with_alpha(ring_cfg.opacity),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    let mat_cfg = &config.planet_material;
    for id in BodyId::all() {
        let body = id.body();
        let color = body.color()?;

        let sphere = meshes.add(
            Sphere::new(body.size)
                .mesh()
                .uv(mat_cfg.sphere_sectors, mat_cfg.sphere_stacks),
        );
        let material = materials.add(StandardMaterial {
            base_color: color,
            perceptual_roughness: mat_cfg.roughness,
            metallic: mat_cfg.metallic,
            emissive: color.to_linear() * mat_cfg.emissive_intensity,
            ..default()
        });
        let orbit_mesh = meshes.add(
            Annulus::new(
                body.distance - path_cfg.half_width,
                body.distance + path_cfg.half_width,
            )
            .mesh()
            .resolution(path_cfg.segments),
        );
        let ring_mesh = body.has_ring_system.then(|| {
            meshes.add(
                Annulus::new(
                    body.size + ring_cfg.inner_offset,
                    body.size + ring_cfg.outer_offset,
                )
                .mesh()
                .resolution(ring_cfg.segments),
            )
        });

        commands
            .spawn((
                BodyPivot(id),
                Transform::default(),
                Visibility::default(),
                Name::new(format!("{} orbit", body.name)),
            ))
            .with_children(|pivot| {
                pivot.spawn((
                    Mesh3d(orbit_mesh),
                    MeshMaterial3d(orbit_material.clone()),
                    Transform::from_rotation(orbital_plane()),
                    OrbitPath,
                    Pickable::IGNORE,
                ));

                pivot
                    .spawn((
                        Mesh3d(sphere),
                        MeshMaterial3d(material),
                        Transform::from_xyz(body.distance, 0.0, 0.0),
                        BodyMesh(id),
                        Name::new(body.name),
                    ))
                    .observe(
                        move |_over: On<Pointer<Over>>, mut state: ResMut<SimulationState>| {
                            state.pointer_enter(id);
                            debug!("Hovering {}", id.body().name);
                        },
                    )
                    .observe(
                        move |_out: On<Pointer<Out>>, mut state: ResMut<SimulationState>| {
                            state.pointer_leave(id);
                        },
                    );

                // Parented to the pivot, not the sphere, so it neither spins nor grows on hover.
                if let Some(ring_mesh) = ring_mesh {
                    pivot.spawn((
                        Mesh3d(ring_mesh),
                        MeshMaterial3d(ring_material.clone()),
                        Transform::from_xyz(body.distance, 0.0, 0.0)
                            .with_rotation(orbital_plane()),
                        RingSystem,
                        Pickable::IGNORE,
                    ));
                }
            });
    }

    info!("Spawned {} orbiting bodies", BODY_COUNT);
    Ok(())
}

/// Rotate each pivot to its body's orbital angle
pub fn update_orbit_pivots(
    state: Res<SimulationState>,
    mut pivots: Query<(&BodyPivot, &mut Transform)>,
) {
    for (pivot, mut transform) in pivots.iter_mut() {
        transform.rotation = Quat::from_rotation_y(state.orbit_angle(pivot.0));
    }
}

/// Spin each sphere and scale up the hovered one
pub fn update_body_meshes(
    state: Res<SimulationState>,
    config: Res<SceneConfig>,
    mut bodies: Query<(&BodyMesh, &mut Transform)>,
) {
    let hovered = state.hovered();
    for (mesh, mut transform) in bodies.iter_mut() {
        transform.rotation = Quat::from_rotation_y(state.spin_angle(mesh.0));
        let scale = if hovered == Some(mesh.0) {
            config.hover_scale
        } else {
            1.0
        };
        transform.scale = Vec3::splat(scale);
    }
}
