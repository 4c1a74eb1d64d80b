//! Closed-form orbital and spin update rules
//!
//! Every function here is pure. Angles are in radians and `step` is the
//! number of reference frames the current rendered frame stands for.

use std::f32::consts::TAU;

/// Orbital angle advanced per reference frame for `base_speed * multiplier == 1`
pub const ORBIT_STEP_RAD: f32 = 0.01;
/// Self-rotation of each planet per reference frame
pub const PLANET_SPIN_RAD: f32 = 0.01;
/// Self-rotation of the Sun per reference frame
pub const SUN_SPIN_RAD: f32 = 0.005;

/// Per-frame rates of the motion model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionRates {
    pub orbit_step: f32,
    pub planet_spin: f32,
    pub sun_spin: f32,
}

impl Default for MotionRates {
    fn default() -> Self {
        Self {
            orbit_step: ORBIT_STEP_RAD,
            planet_spin: PLANET_SPIN_RAD,
            sun_spin: SUN_SPIN_RAD,
        }
    }
}

/// Orbital angle covered during `step` frames
pub fn orbital_delta(base_speed: f32, multiplier: f32, orbit_step: f32, step: f32) -> f32 {
    base_speed * multiplier * orbit_step * step
}

/// Next orbital angle; a paused simulation keeps every orbit where it is
pub fn advance_orbit(
    angle: f32,
    base_speed: f32,
    multiplier: f32,
    paused: bool,
    orbit_step: f32,
    step: f32,
) -> f32 {
    if paused {
        return angle;
    }
    wrap_angle(angle + orbital_delta(base_speed, multiplier, orbit_step, step))
}

/// Next spin angle. Spin is visual only and ignores pause.
pub fn advance_spin(angle: f32, rate: f32, step: f32) -> f32 {
    wrap_angle(angle + rate * step)
}

/// Wrap into `[0, 2π)`
pub fn wrap_angle(angle: f32) -> f32 {
    angle.rem_euclid(TAU)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paused_orbit_is_frozen() {
        let angle = advance_orbit(1.25, 4.74, 5.0, true, ORBIT_STEP_RAD, 1.0);
        assert_eq!(angle, 1.25);
    }

    #[test]
    fn test_zero_multiplier_is_frozen() {
        let angle = advance_orbit(0.5, 2.98, 0.0, false, ORBIT_STEP_RAD, 1.0);
        assert_eq!(angle, 0.5);
    }

    #[test]
    fn test_delta_proportional_to_multiplier() {
        let single = orbital_delta(1.31, 1.5, ORBIT_STEP_RAD, 1.0);
        let double = orbital_delta(1.31, 3.0, ORBIT_STEP_RAD, 1.0);
        assert!((double - 2.0 * single).abs() < 1e-6);
    }

    #[test]
    fn test_reference_frame_increment() {
        // One frame of Earth at 1x covers 2.98 * 0.01 rad.
        let angle = advance_orbit(0.0, 2.98, 1.0, false, ORBIT_STEP_RAD, 1.0);
        assert!((angle - 0.0298).abs() < 1e-6);
    }

    #[test]
    fn test_angles_wrap() {
        let angle = advance_orbit(TAU - 0.01, 1.0, 5.0, false, ORBIT_STEP_RAD, 1.0);
        assert!((0.0..TAU).contains(&angle));
        assert!((angle - 0.04).abs() < 1e-4);
        assert!((wrap_angle(-0.5) - (TAU - 0.5)).abs() < 1e-6);
    }

    #[test]
    fn test_spin_advances() {
        let spin = advance_spin(0.0, SUN_SPIN_RAD, 2.0);
        assert!((spin - 0.01).abs() < 1e-6);
    }
}
