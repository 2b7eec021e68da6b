//! Double Pendulum – real-time double-pendulum integrator and renderer.
//!
//! The crate is split into a headless core (state, integrator, coordinate
//! derivation, render pipeline against the [`Canvas`] trait) and a thin
//! windowed driver in [`app`].

pub mod app;
pub mod config;
pub mod core;
pub mod dynamics;
pub mod error;
pub mod render;
pub mod utils;
pub mod world;

pub use glam::Vec2;

pub use app::{RunState, Visualizer, WindowSettings};
pub use crate::core::types::{CartesianFrame, PendulumParams, PendulumState};
pub use dynamics::{
    integrator::{angular_accelerations, IntegrationScheme, Integrator},
    kinematics::{bob_positions, forward_kinematics},
};
pub use error::{Result, VisualizerError};
pub use render::{
    draw_swept_disk, sweep_chord_count, Canvas, FrameBuffer, FrameStats, Palette,
    RenderPipeline, Trail, TrailPolicy,
};
pub use utils::math::normalize_angle;
pub use world::PendulumWorld;
