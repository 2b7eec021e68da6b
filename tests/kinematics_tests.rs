use approx::assert_relative_eq;
use double_pendulum::*;

#[test]
fn hanging_arms_stack_straight_below_the_pivot() {
    let params = PendulumParams::default();
    let pivot = Vec2::new(640.0, 360.0);
    let state = PendulumState::at_rest(0.0, 0.0);

    let frame = forward_kinematics(&state, &params, pivot);

    assert_eq!(frame.pivot, pivot);
    assert_eq!(frame.bob1, Vec2::new(pivot.x, pivot.y + params.length1));
    assert_eq!(
        frame.bob2,
        Vec2::new(pivot.x, pivot.y + params.length1 + params.length2)
    );
}

#[test]
fn bob_distances_match_arm_lengths() {
    let pivot = Vec2::new(10.0, -4.0);
    for (theta1, theta2) in [(0.3, -1.2), (2.5, 0.7), (-3.0, 3.0)] {
        let (bob1, bob2) = bob_positions(theta1, theta2, 120.0, 80.0, pivot);

        assert_relative_eq!(bob1.distance(pivot), 120.0, epsilon = 1e-3);
        assert_relative_eq!(bob2.distance(bob1), 80.0, epsilon = 1e-3);
    }
}

#[test]
fn positive_angle_swings_right() {
    let (bob1, _) = bob_positions(0.5, 0.0, 100.0, 100.0, Vec2::ZERO);
    assert!(bob1.x > 0.0);
    assert!(bob1.y > 0.0);
}
