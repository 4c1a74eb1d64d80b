//! Static starfield background
//!
//! Stars are generated once at startup from a fixed seed and never touched
//! again. Brightness is quantized so thousands of stars share a handful of
//! materials.

use std::f32::consts::TAU;

use bevy::picking::prelude::*;
use bevy::prelude::*;

use crate::visualization::config::{SceneConfig, StarfieldConfig};

const BRIGHTNESS_LEVELS: usize = 8;
const BASE_STAR_RADIUS: f32 = 0.035;

/// Root entity of the starfield
#[derive(Component)]
pub struct Starfield;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub position: Vec3,
    pub radius: f32,
    /// Gray level in `[0, 1]`
    pub brightness: f32,
}

/// Linear congruential generator; deterministic for a given seed
struct Lcg(u32);

impl Lcg {
    fn next_f32(&mut self) -> f32 {
        self.0 = self.0.wrapping_mul(1664525).wrapping_add(1013904223);
        (self.0 >> 8) as f32 / (1u32 << 24) as f32
    }
}

/// Scatter stars uniformly over directions in a shell `[radius, radius + depth]`.
/// Farther stars are dimmer.
pub fn generate_starfield(cfg: &StarfieldConfig) -> Vec<Star> {
    let mut rng = Lcg(cfg.seed);
    (0..cfg.count)
        .map(|_| {
            let z = rng.next_f32() * 2.0 - 1.0;
            let phi = rng.next_f32() * TAU;
            let shell = rng.next_f32();
            let r_xy = (1.0 - z * z).max(0.0).sqrt();
            let direction = Vec3::new(r_xy * phi.cos(), z, r_xy * phi.sin());
            let distance = cfg.radius + cfg.depth * shell;

            let fade = 1.0 - 0.6 * shell;
            let brightness = ((0.5 + 0.5 * rng.next_f32()) * fade).clamp(0.0, 1.0);
            let radius = BASE_STAR_RADIUS * cfg.factor * (0.5 + rng.next_f32());

            Star {
                position: direction * distance,
                radius,
                brightness,
            }
        })
        .collect()
}

fn brightness_level(brightness: f32) -> usize {
    ((brightness * BRIGHTNESS_LEVELS as f32) as usize).min(BRIGHTNESS_LEVELS - 1)
}

/// Startup system: spawn the starfield
pub fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<SceneConfig>,
) {
    let stars = generate_starfield(&config.starfield);

    let mesh = meshes.add(Sphere::new(1.0).mesh().uv(6, 4));
    let palette: Vec<Handle<StandardMaterial>> = (0..BRIGHTNESS_LEVELS)
        .map(|level| {
            let gray = (level as f32 + 0.5) / BRIGHTNESS_LEVELS as f32;
            materials.add(StandardMaterial {
                base_color: Color::srgb(gray, gray, gray),
                unlit: true,
                ..default()
            })
        })
        .collect();

    commands
        .spawn((
            Starfield,
            Transform::default(),
            Visibility::default(),
            Name::new("Starfield"),
        ))
        .with_children(|field| {
            for star in &stars {
                field.spawn((
                    Mesh3d(mesh.clone()),
                    MeshMaterial3d(palette[brightness_level(star.brightness)].clone()),
                    Transform::from_translation(star.position)
                        .with_scale(Vec3::splat(star.radius)),
                    Pickable::IGNORE,
                ));
            }
        });

    info!("Spawned starfield with {} stars", stars.len());
}
