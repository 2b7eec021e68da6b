//! Angle helpers shared by the integrator and tests.

use std::f32::consts::TAU;

/// Wraps an angle back inside `(-2π, 2π)` once it leaves that range.
///
/// Uses truncating division so the sign of the angle is preserved:
/// `θ - trunc(θ / 2π) * 2π`. Angles already in range, and NaN, are returned
/// untouched.
pub fn normalize_angle(theta: f32) -> f32 {
    if theta.abs() > TAU {
        theta - (theta / TAU).trunc() * TAU
    } else {
        theta
    }
}
