//! Simulation dynamics: the per-frame integrator and coordinate derivation.

pub mod integrator;
pub mod kinematics;

pub use integrator::{angular_accelerations, IntegrationScheme, Integrator};
pub use kinematics::{bob_positions, forward_kinematics};
