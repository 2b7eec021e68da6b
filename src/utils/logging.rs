use log::{log_enabled, trace, warn, Level};
use std::time::Duration;

use crate::core::types::{CartesianFrame, PendulumState};

/// Dumps the per-frame state of both bobs at trace level.
pub fn trace_frame_state(state: &PendulumState, frame: &CartesianFrame) {
    if !log_enabled!(Level::Trace) {
        return;
    }
    trace!(
        "x1: {:.3}\ty1: {:.3}\tw1: {:.6}\tal1: {:.6}\tth1: {:.6}",
        frame.bob1.x,
        frame.bob1.y,
        state.omega1,
        state.alpha1,
        state.theta1
    );
    trace!(
        "x2: {:.3}\ty2: {:.3}\tw2: {:.6}\tal2: {:.6}\tth2: {:.6}",
        frame.bob2.x,
        frame.bob2.y,
        state.omega2,
        state.alpha2,
        state.theta2
    );
}

/// Warns when one pass of the frame loop ran longer than `budget_ms`.
/// Returns whether the budget was blown.
pub fn warn_if_frame_over_budget(elapsed: Duration, budget_ms: f32) -> bool {
    let elapsed_ms = elapsed.as_secs_f32() * 1000.0;
    let over = elapsed_ms > budget_ms;
    if over {
        warn!("frame took {elapsed_ms:.2} ms, budget is {budget_ms:.2} ms");
    }
    over
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_budget_is_inclusive() {
        assert!(!warn_if_frame_over_budget(Duration::from_millis(16), 16.0));
        assert!(warn_if_frame_over_budget(Duration::from_millis(17), 16.0));
        assert!(!warn_if_frame_over_budget(Duration::ZERO, 16.0));
    }
}
