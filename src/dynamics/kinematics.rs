use glam::Vec2;

use crate::core::types::{CartesianFrame, PendulumParams, PendulumState};

/// Derives bob positions from the arm angles.
///
/// Angles are measured from the downward vertical with screen Y pointing
/// down, so `x` follows `sin θ` and `y` follows `cos θ`.
pub fn bob_positions(theta1: f32, theta2: f32, length1: f32, length2: f32, pivot: Vec2) -> (Vec2, Vec2) {
    let bob1 = pivot + length1 * Vec2::new(theta1.sin(), theta1.cos());
    let bob2 = bob1 + length2 * Vec2::new(theta2.sin(), theta2.cos());
    (bob1, bob2)
}

/// Builds the full [`CartesianFrame`] for a state hanging from `pivot`.
pub fn forward_kinematics(state: &PendulumState, params: &PendulumParams, pivot: Vec2) -> CartesianFrame {
    let (bob1, bob2) = bob_positions(
        state.theta1,
        state.theta2,
        params.length1,
        params.length2,
        pivot,
    );
    CartesianFrame { pivot, bob1, bob2 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn horizontal_arms_extend_to_the_right() {
        let (bob1, bob2) = bob_positions(FRAC_PI_2, FRAC_PI_2, 100.0, 50.0, Vec2::ZERO);

        assert_relative_eq!(bob1.x, 100.0, epsilon = 1e-4);
        assert_relative_eq!(bob1.y, 0.0, epsilon = 1e-4);
        assert_relative_eq!(bob2.x, 150.0, epsilon = 1e-4);
        assert_relative_eq!(bob2.y, 0.0, epsilon = 1e-4);
    }
}
