//! User interface module
//!
//! This module handles the control panel, hover overlays and theme switching
//! built on feathers widgets.

use bevy::prelude::*;
use bevy::ui::UiSystems;
use bevy_panorbit_camera::PanOrbitCameraSystemSet;

use crate::orbital::SimulationTick;

pub mod panels;
pub mod systems;
pub mod theme;

pub use systems::MainCamera;

/// Plugin for user interface management
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (panels::spawn_control_panel, panels::spawn_overlays),
        )
        .add_systems(
            Update,
            (
                systems::sync_speed_sliders,
                systems::sync_speed_readouts,
                systems::sync_playback_controls,
                systems::apply_theme,
                systems::update_hover_overlays,
                systems::block_camera_over_ui,
            )
                .after(SimulationTick),
        )
        .add_systems(
            PostUpdate,
            systems::position_hover_tooltip
                .after(PanOrbitCameraSystemSet)
                .before(UiSystems::Layout),
        );
    }
}
