use crate::{
    core::types::{PendulumParams, PendulumState},
    utils::math::normalize_angle,
};

/// How velocity and position absorb the timestep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IntegrationScheme {
    /// `dt` is folded into the acceleration once and nowhere else:
    /// `α = dt·f(θ, ω)`, `ω += α`, `θ += ω`. This is the reference trajectory.
    #[default]
    DtFolded,
    /// Semi-implicit Euler in consistent units:
    /// `α = f(θ, ω)`, `ω += α·dt`, `θ += ω·dt`.
    Standard,
}

/// Closed-form angular accelerations of both arms, not yet scaled by `dt`.
///
/// There is no guard on the shared denominator
/// `L1·(2·M1 + M2 - M2·cos(2θ1 - 2θ2))`. Degenerate mass/length choices
/// can drive it to zero, in which case the result is infinite or NaN.
pub fn angular_accelerations(state: &PendulumState, params: &PendulumParams) -> (f32, f32) {
    let PendulumParams {
        mass1: m1,
        length1: l1,
        mass2: m2,
        length2: l2,
        gravity: g,
        ..
    } = *params;
    let (th1, th2) = (state.theta1, state.theta2);
    let (w1, w2) = (state.omega1, state.omega2);

    let delta = th1 - th2;
    let denominator = l1 * (2.0 * m1 + m2 - m2 * (2.0 * th1 - 2.0 * th2).cos());

    let numerator1 = -g * (2.0 * m1 + m2) * th1.sin()
        - m2 * g * (th1 - 2.0 * th2).sin()
        - 2.0 * delta.sin() * m2 * (w2 * w2 * l2 + w1 * w1 * l1 * delta.cos());
    let numerator2 = 2.0
        * delta.sin()
        * (w1 * w1 * l1 * (m1 + m2) + g * (m1 + m2) * th1.cos() + w2 * w2 * l2 * m2 * delta.cos());

    (numerator1 / denominator, numerator2 / denominator)
}

/// Integrator responsible for stepping the pendulum forward by one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct Integrator {
    pub scheme: IntegrationScheme,
}

impl Integrator {
    pub fn new(scheme: IntegrationScheme) -> Self {
        Self { scheme }
    }

    /// Advances `state` in place: normalize, accelerate, then velocity before position.
    pub fn step(&self, state: &mut PendulumState, params: &PendulumParams) {
        state.theta1 = normalize_angle(state.theta1);
        state.theta2 = normalize_angle(state.theta2);

        let (raw1, raw2) = angular_accelerations(state, params);

        match self.scheme {
            IntegrationScheme::DtFolded => {
                state.alpha1 = params.dt * raw1;
                state.alpha2 = params.dt * raw2;

                state.omega1 += state.alpha1;
                state.omega2 += state.alpha2;

                state.theta1 += state.omega1;
                state.theta2 += state.omega2;
            }
            IntegrationScheme::Standard => {
                state.alpha1 = raw1;
                state.alpha2 = raw2;

                state.omega1 += state.alpha1 * params.dt;
                state.omega2 += state.alpha2 * params.dt;

                state.theta1 += state.omega1 * params.dt;
                state.theta2 += state.omega2 * params.dt;
            }
        }
    }

    /// Pure form of [`Integrator::step`].
    pub fn advance(&self, state: &PendulumState, params: &PendulumParams) -> PendulumState {
        let mut next = *state;
        self.step(&mut next, params);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn hanging_pendulum_stays_at_rest() {
        let params = PendulumParams::default();
        let mut state = PendulumState::at_rest(0.0, 0.0);

        Integrator::default().step(&mut state, &params);

        assert_eq!(state, PendulumState::at_rest(0.0, 0.0));
    }

    #[test]
    fn folded_acceleration_carries_dt() {
        let params = PendulumParams::default();
        let state = PendulumState::default();
        let (raw1, raw2) = angular_accelerations(&state, &params);

        let next = Integrator::default().advance(&state, &params);

        assert_eq!(next.alpha1, params.dt * raw1);
        assert_eq!(next.alpha2, params.dt * raw2);
        assert_eq!(next.omega1, next.alpha1);
        assert_eq!(next.theta1, state.theta1 + next.omega1);
        assert_eq!(next.theta2, state.theta2 + next.omega2);
    }

    #[test]
    fn standard_scheme_scales_velocity_and_position() {
        let params = PendulumParams::default();
        let state = PendulumState::default();
        let (raw1, _) = angular_accelerations(&state, &params);

        let next = Integrator::new(IntegrationScheme::Standard).advance(&state, &params);

        assert_eq!(next.alpha1, raw1);
        assert_relative_eq!(next.omega1, raw1 * params.dt);
        assert_relative_eq!(next.theta1, state.theta1 + raw1 * params.dt * params.dt);
    }

    #[test]
    fn angles_are_normalized_before_integration() {
        let params = PendulumParams::default();
        let wrapped = PendulumState::at_rest(std::f32::consts::TAU + 0.25, 0.0);

        let next = Integrator::default().advance(&wrapped, &params);

        assert!(next.theta1.abs() < 1.0, "theta1 = {}", next.theta1);
    }
}
