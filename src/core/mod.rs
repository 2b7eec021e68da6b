//! Core value types shared by the integrator, the world, and the renderer.

pub mod types;

pub use types::{CartesianFrame, PendulumParams, PendulumState};
