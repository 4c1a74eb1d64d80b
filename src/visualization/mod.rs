//! Visualization module
//!
//! This module composes the 3D scene: Sun and lights, orbiting bodies with
//! their orbit paths and ring systems, and the starfield background.

use bevy::prelude::*;

use crate::orbital::SimulationTick;

pub mod bodies;
pub mod config;
pub mod lighting;
pub mod starfield;

pub use config::SceneConfig;

/// Plugin for scene composition
pub struct VisualizationPlugin;

impl Plugin for VisualizationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneConfig>()
            .add_systems(
                Startup,
                (
                    lighting::spawn_sun,
                    bodies::spawn_bodies,
                    starfield::spawn_starfield,
                ),
            )
            .add_systems(
                Update,
                (
                    bodies::update_orbit_pivots,
                    bodies::update_body_meshes,
                    lighting::spin_sun,
                )
                    .after(SimulationTick),
            );
    }
}
