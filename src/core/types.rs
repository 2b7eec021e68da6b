use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_GRAVITY, DEFAULT_LENGTH_1, DEFAULT_LENGTH_2, DEFAULT_MASS_1, DEFAULT_MASS_2,
    DEFAULT_TIME_STEP, INITIAL_THETA_1, INITIAL_THETA_2,
};

/// Angular state of both arms.
///
/// Angles are in radians from the downward vertical (clockwise positive).
/// Velocities and accelerations are per integration step, not per second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendulumState {
    pub theta1: f32,
    pub omega1: f32,
    pub alpha1: f32,
    pub theta2: f32,
    pub omega2: f32,
    pub alpha2: f32,
}

impl Default for PendulumState {
    fn default() -> Self {
        Self::at_rest(INITIAL_THETA_1, INITIAL_THETA_2)
    }
}

impl PendulumState {
    /// Both arms held at the given angles with zero velocity and acceleration.
    pub fn at_rest(theta1: f32, theta2: f32) -> Self {
        Self {
            theta1,
            omega1: 0.0,
            alpha1: 0.0,
            theta2,
            omega2: 0.0,
            alpha2: 0.0,
        }
    }

    /// Returns true when every component is finite.
    pub fn is_finite(&self) -> bool {
        [
            self.theta1,
            self.omega1,
            self.alpha1,
            self.theta2,
            self.omega2,
            self.alpha2,
        ]
        .iter()
        .all(|value| value.is_finite())
    }
}

/// Physical constants of the system, fixed for the lifetime of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendulumParams {
    /// Mass of the first bob, reused as its draw radius.
    pub mass1: f32,
    /// Length of the first arm in pixels.
    pub length1: f32,
    /// Mass of the second bob, reused as its draw radius.
    pub mass2: f32,
    /// Length of the second arm in pixels.
    pub length2: f32,
    pub gravity: f32,
    pub dt: f32,
}

impl Default for PendulumParams {
    fn default() -> Self {
        Self {
            mass1: DEFAULT_MASS_1,
            length1: DEFAULT_LENGTH_1,
            mass2: DEFAULT_MASS_2,
            length2: DEFAULT_LENGTH_2,
            gravity: DEFAULT_GRAVITY,
            dt: DEFAULT_TIME_STEP,
        }
    }
}

/// Screen-space positions derived from a [`PendulumState`] each frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartesianFrame {
    pub pivot: Vec2,
    pub bob1: Vec2,
    pub bob2: Vec2,
}
