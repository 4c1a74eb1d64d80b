//! Shared simulation state
//!
//! One resource owns everything the control panel writes and the scene
//! reads: speed multipliers, pause and theme flags, the hovered body and the
//! accumulated angles.

use bevy::prelude::*;

use crate::catalog::{BODIES, BODY_COUNT, BodyId};
use crate::orbital::motion::{MotionRates, advance_orbit, advance_spin};

pub const MIN_SPEED_MULTIPLIER: f32 = 0.0;
pub const MAX_SPEED_MULTIPLIER: f32 = 5.0;
pub const SPEED_MULTIPLIER_STEP: f32 = 0.1;
pub const DEFAULT_SPEED_MULTIPLIER: f32 = 1.0;

/// Clamp a requested multiplier into the slider range and snap it to the
/// slider step. Non-finite input yields `None`.
pub fn sanitize_speed_multiplier(value: f32) -> Option<f32> {
    if !value.is_finite() {
        return None;
    }
    let snapped = (value / SPEED_MULTIPLIER_STEP).round() * SPEED_MULTIPLIER_STEP;
    Some(snapped.clamp(MIN_SPEED_MULTIPLIER, MAX_SPEED_MULTIPLIER))
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SimulationState {
    speed_multipliers: [f32; BODY_COUNT],
    paused: bool,
    dark_mode: bool,
    hovered: Option<BodyId>,
    orbit_angles: [f32; BODY_COUNT],
    spin_angles: [f32; BODY_COUNT],
    sun_spin: f32,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self {
            speed_multipliers: [DEFAULT_SPEED_MULTIPLIER; BODY_COUNT],
            paused: false,
            dark_mode: true,
            hovered: None,
            orbit_angles: [0.0; BODY_COUNT],
            spin_angles: [0.0; BODY_COUNT],
            sun_spin: 0.0,
        }
    }
}

impl SimulationState {
    pub fn speed_multiplier(&self, id: BodyId) -> f32 {
        self.speed_multipliers[id.index()]
    }

    /// Returns the stored value, or `None` when the input was rejected
    pub fn set_speed_multiplier(&mut self, id: BodyId, value: f32) -> Option<f32> {
        let value = sanitize_speed_multiplier(value)?;
        self.speed_multipliers[id.index()] = value;
        Some(value)
    }

    /// Every multiplier back to 1.0; pause and theme are left alone
    pub fn reset_speeds(&mut self) {
        self.speed_multipliers = [DEFAULT_SPEED_MULTIPLIER; BODY_COUNT];
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn toggle_theme(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }

    pub fn hovered(&self) -> Option<BodyId> {
        self.hovered
    }

    /// Last enter wins when body meshes overlap
    pub fn pointer_enter(&mut self, id: BodyId) {
        self.hovered = Some(id);
    }

    /// A leave for a body that is no longer hovered is stale and ignored
    pub fn pointer_leave(&mut self, id: BodyId) {
        if self.hovered == Some(id) {
            self.hovered = None;
        }
    }

    pub fn orbit_angle(&self, id: BodyId) -> f32 {
        self.orbit_angles[id.index()]
    }

    pub fn spin_angle(&self, id: BodyId) -> f32 {
        self.spin_angles[id.index()]
    }

    pub fn sun_spin(&self) -> f32 {
        self.sun_spin
    }

    /// Advance all angles by `step` reference frames
    pub fn advance(&mut self, step: f32, rates: &MotionRates) {
        for (i, body) in BODIES.iter().enumerate() {
            self.orbit_angles[i] = advance_orbit(
                self.orbit_angles[i],
                body.base_speed,
                self.speed_multipliers[i],
                self.paused,
                rates.orbit_step,
                step,
            );
            self.spin_angles[i] = advance_spin(self.spin_angles[i], rates.planet_spin, step);
        }
        self.sun_spin = advance_spin(self.sun_spin, rates.sun_spin, step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(index: usize) -> BodyId {
        BodyId::new(index).unwrap()
    }

    #[test]
    fn test_defaults() {
        let state = SimulationState::default();
        assert!(BodyId::all().all(|b| state.speed_multiplier(b) == 1.0));
        assert!(!state.is_paused());
        assert!(state.is_dark_mode());
        assert_eq!(state.hovered(), None);
    }

    #[test]
    fn test_speed_multiplier_clamped() {
        let mut state = SimulationState::default();
        assert_eq!(state.set_speed_multiplier(id(0), 0.0), Some(0.0));
        assert_eq!(state.set_speed_multiplier(id(1), 5.0), Some(5.0));
        assert_eq!(state.set_speed_multiplier(id(2), 7.3), Some(5.0));
        assert_eq!(state.set_speed_multiplier(id(3), -1.0), Some(0.0));
        assert_eq!(state.set_speed_multiplier(id(4), f32::NAN), None);
        assert_eq!(state.speed_multiplier(id(4)), 1.0);
        for m in BodyId::all().map(|b| state.speed_multiplier(b)) {
            assert!((MIN_SPEED_MULTIPLIER..=MAX_SPEED_MULTIPLIER).contains(&m));
        }
    }

    #[test]
    fn test_speed_multiplier_snaps_to_step() {
        let mut state = SimulationState::default();
        let stored = state.set_speed_multiplier(id(0), 2.345).unwrap();
        assert!((stored - 2.3).abs() < 1e-5);
        assert_eq!(format!("{:.1}", stored), "2.3");
    }

    #[test]
    fn test_reset_leaves_pause_and_theme() {
        let mut state = SimulationState::default();
        for body in BodyId::all() {
            state.set_speed_multiplier(body, 3.7);
        }
        state.toggle_pause();
        state.toggle_theme();
        state.reset_speeds();
        assert!(BodyId::all().all(|b| state.speed_multiplier(b) == 1.0));
        assert!(state.is_paused());
        assert!(!state.is_dark_mode());
    }

    #[test]
    fn test_pause_freezes_orbits_but_not_spin() {
        let mut state = SimulationState::default();
        state.set_speed_multiplier(id(0), 5.0);
        state.advance(1.0, &MotionRates::default());
        state.toggle_pause();
        let frozen = state.clone();
        for _ in 0..100 {
            state.advance(1.0, &MotionRates::default());
        }
        for body in BodyId::all() {
            assert_eq!(state.orbit_angle(body), frozen.orbit_angle(body));
            assert_ne!(state.spin_angle(body), frozen.spin_angle(body));
        }
        assert_ne!(state.sun_spin(), frozen.sun_spin());
    }

    #[test]
    fn test_zero_multiplier_freezes_single_body() {
        let mut state = SimulationState::default();
        state.set_speed_multiplier(id(2), 0.0);
        state.advance(1.0, &MotionRates::default());
        assert_eq!(state.orbit_angle(id(2)), 0.0);
        for body in BodyId::all().filter(|b| *b != id(2)) {
            assert!(state.orbit_angle(body) > 0.0);
        }
    }

    #[test]
    fn test_doubling_multiplier_doubles_delta() {
        let rates = MotionRates::default();
        let mut base = SimulationState::default();
        let mut doubled = SimulationState::default();
        doubled.set_speed_multiplier(id(4), 2.0);
        base.advance(1.0, &rates);
        doubled.advance(1.0, &rates);
        assert!((doubled.orbit_angle(id(4)) - 2.0 * base.orbit_angle(id(4))).abs() < 1e-6);
        for body in BodyId::all().filter(|b| *b != id(4)) {
            assert_eq!(doubled.orbit_angle(body), base.orbit_angle(body));
        }
    }

    #[test]
    fn test_orbit_angles_monotonic_until_wrap() {
        let mut state = SimulationState::default();
        let mut last = state.orbit_angle(id(7));
        for _ in 0..50 {
            state.advance(1.0, &MotionRates::default());
            assert!(state.orbit_angle(id(7)) > last);
            last = state.orbit_angle(id(7));
        }
    }

    #[test]
    fn test_hover_last_enter_wins() {
        let mut state = SimulationState::default();
        state.pointer_enter(id(1));
        assert_eq!(state.hovered(), Some(id(1)));
        state.pointer_leave(id(1));
        assert_eq!(state.hovered(), None);

        state.pointer_enter(id(1));
        state.pointer_enter(id(5));
        assert_eq!(state.hovered(), Some(id(5)));
        // Stale leave from the first body.
        state.pointer_leave(id(1));
        assert_eq!(state.hovered(), Some(id(5)));
        state.pointer_leave(id(5));
        assert_eq!(state.hovered(), None);
    }

    #[test]
    fn test_theme_toggle_twice_is_identity() {
        let mut state = SimulationState::default();
        state.set_speed_multiplier(id(3), 2.5);
        state.pointer_enter(id(3));
        let before = state.clone();
        state.toggle_theme();
        state.toggle_theme();
        assert_eq!(state, before);
    }
}
