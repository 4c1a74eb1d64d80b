//! Frame integration for the orbital model

use bevy::prelude::*;

use crate::orbital::motion::MotionRates;
use crate::orbital::state::SimulationState;

/// How a rendered frame maps onto reference frames of the motion model
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameIntegration {
    /// Every rendered frame is one reference frame; speed depends on frame rate
    FixedTick,
    /// Elapsed time scaled to `reference_fps`; frames longer than
    /// `max_delta_secs` are clamped so a stall does not teleport the planets
    DeltaTime {
        reference_fps: f32,
        max_delta_secs: f32,
    },
}

impl FrameIntegration {
    pub fn step(&self, delta_secs: f32) -> f32 {
        match *self {
            FrameIntegration::FixedTick => 1.0,
            FrameIntegration::DeltaTime {
                reference_fps,
                max_delta_secs,
            } => delta_secs.clamp(0.0, max_delta_secs) * reference_fps,
        }
    }
}

/// Simulation configuration resource
#[derive(Resource, Debug, Clone)]
pub struct SimulationConfig {
    pub integration: FrameIntegration,
    pub rates: MotionRates,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            integration: FrameIntegration::DeltaTime {
                reference_fps: 60.0,
                max_delta_secs: 0.1,
            },
            rates: MotionRates::default(),
        }
    }
}

/// System to advance the simulation once per rendered frame
pub fn advance_simulation(
    time: Res<Time>,
    config: Res<SimulationConfig>,
    mut state: ResMut<SimulationState>,
) {
    let step = config.integration.step(time.delta_secs());
    if step <= 0.0 {
        return;
    }
    state.advance(step, &config.rates);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BodyId;

    #[test]
    fn test_fixed_tick_ignores_delta() {
        assert_eq!(FrameIntegration::FixedTick.step(0.5), 1.0);
        assert_eq!(FrameIntegration::FixedTick.step(0.0), 1.0);
    }

    #[test]
    fn test_delta_time_matches_fixed_tick_at_reference_rate() {
        let integration = SimulationConfig::default().integration;
        let step = integration.step(1.0 / 60.0);
        assert!((step - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_delta_time_clamps_stalls() {
        let integration = FrameIntegration::DeltaTime {
            reference_fps: 60.0,
            max_delta_secs: 0.1,
        };
        assert!((integration.step(3.0) - 6.0).abs() < 1e-4);
        assert_eq!(integration.step(-1.0), 0.0);
    }

    #[test]
    fn test_advance_simulation_system() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<SimulationState>()
            .insert_resource(SimulationConfig {
                integration: FrameIntegration::FixedTick,
                rates: MotionRates::default(),
            })
            .add_systems(Update, advance_simulation);

        app.update();
        app.update();

        let state = app.world().resource::<SimulationState>();
        let mercury = BodyId::new(0).unwrap();
        assert!((state.orbit_angle(mercury) - 2.0 * 4.74 * 0.01).abs() < 1e-5);
        assert!((state.sun_spin() - 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_advance_simulation_respects_pause() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<SimulationState>()
            .insert_resource(SimulationConfig {
                integration: FrameIntegration::FixedTick,
                rates: MotionRates::default(),
            })
            .add_systems(Update, advance_simulation);

        app.world_mut().resource_mut::<SimulationState>().toggle_pause();
        for _ in 0..5 {
            app.update();
        }

        let state = app.world().resource::<SimulationState>();
        for body in BodyId::all() {
            assert_eq!(state.orbit_angle(body), 0.0);
            assert!(state.spin_angle(body) > 0.0);
        }
    }
}
