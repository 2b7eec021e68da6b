use glam::Vec2;

use crate::{
    config::{SCREEN_HEIGHT, SCREEN_WIDTH},
    core::types::{CartesianFrame, PendulumParams, PendulumState},
    dynamics::{forward_kinematics, IntegrationScheme, Integrator},
};

/// Simulation container: the evolving state plus everything needed to step
/// and place it on screen.
#[derive(Debug, Clone)]
pub struct PendulumWorld {
    pub state: PendulumState,
    pub params: PendulumParams,
    /// Fixed attachment point of the first arm, in screen pixels.
    pub pivot: Vec2,
    pub integrator: Integrator,
    steps: u64,
}

impl Default for PendulumWorld {
    fn default() -> Self {
        Self::new(PendulumParams::default(), screen_center())
    }
}

impl PendulumWorld {
    /// Starts from the documented initial state.
    pub fn new(params: PendulumParams, pivot: Vec2) -> Self {
        Self::with_state(PendulumState::default(), params, pivot)
    }

    pub fn with_state(state: PendulumState, params: PendulumParams, pivot: Vec2) -> Self {
        Self {
            state,
            params,
            pivot,
            integrator: Integrator::default(),
            steps: 0,
        }
    }

    pub fn set_scheme(&mut self, scheme: IntegrationScheme) {
        self.integrator = Integrator::new(scheme);
    }

    /// Advances the simulation by one fixed step.
    pub fn step(&mut self) {
        self.integrator.step(&mut self.state, &self.params);
        self.steps += 1;
    }

    /// Screen positions for the current state.
    pub fn frame(&self) -> CartesianFrame {
        forward_kinematics(&self.state, &self.params, self.pivot)
    }

    /// Steps taken since construction.
    pub fn steps(&self) -> u64 {
        self.steps
    }
}

/// Pivot used by the windowed simulation.
pub fn screen_center() -> Vec2 {
    Vec2::new(SCREEN_WIDTH as f32 / 2.0, SCREEN_HEIGHT as f32 / 2.0)
}
