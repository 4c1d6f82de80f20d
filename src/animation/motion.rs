use crate::animation::ease::{ease_in_out_quad, eased_swing};
use std::f64::consts::{PI, TAU};

/// Cycle phase used for still images, chosen so active poses read clearly.
pub const STILL_PHASE: f64 = 0.3;

/// Per-frame animation parameters.
///
/// Everything is a pure function of the normalized clip progress, so any frame can be rendered
/// independently of the ones before it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    /// Clip progress in `[0, 1)`.
    pub progress: f64,
    /// Position within the current action cycle, `[0, 1)`.
    pub phase: f64,
    /// `ping_pong(phase)` through quadratic ease-in/out; drives human limb motion.
    pub eased: f64,
    /// Vertical hop in `[0, 1]`, peaking mid-cycle.
    pub bounce: f64,
    /// Spin angle in radians.
    pub rotation: f64,
    /// Orbit angle around the canvas centre in radians.
    pub orbit: f64,
    /// Scale factor for pulsing shapes.
    pub pulse: f64,
    /// Vertical drift for floating shapes, in `[-1, 1]`.
    pub float: f64,
    /// Scale factor for zooming shapes.
    pub zoom: f64,
}

impl Motion {
    /// Motion for a single still image.
    pub fn still() -> Self {
        let mut m = Self::at(0.0, 1.0);
        m.phase = STILL_PHASE;
        m.eased = eased_swing(STILL_PHASE);
        m.bounce = 0.0;
        m
    }

    /// Motion at `progress` through a clip that runs `cycles` action cycles.
    pub fn at(progress: f64, cycles: f64) -> Self {
        let progress = progress.clamp(0.0, 1.0);
        let phase = (progress * cycles.max(0.0)).rem_euclid(1.0);
        let eased = eased_swing(phase);
        Self {
            progress,
            phase,
            eased,
            bounce: (PI * eased).sin().max(0.0),
            rotation: TAU * progress,
            orbit: TAU * progress,
            pulse: 1.0 + 0.15 * (TAU * phase).sin(),
            float: (TAU * progress).sin(),
            zoom: 0.8 + 0.4 * ease_in_out_quad(progress),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/motion.rs"]
mod tests;
