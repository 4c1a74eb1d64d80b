//! Orbital motion module
//!
//! This module owns the simulation state and the per-frame update that
//! advances orbital and spin angles.

use bevy::prelude::*;

pub mod motion;
pub mod state;
pub mod time;

pub use state::SimulationState;
use time::{SimulationConfig, advance_simulation};

/// System set for the per-frame simulation tick
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimulationTick;

/// Plugin for orbital motion and simulation state
pub struct OrbitalPlugin;

impl Plugin for OrbitalPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationState>()
            .init_resource::<SimulationConfig>()
            .add_systems(Update, advance_simulation.in_set(SimulationTick));
    }
}
