//! Error types for the pendulum visualizer.
//!
//! Physics never fails: numerical degeneracy propagates as NaN through the
//! state instead of surfacing here. Only the window collaborator can fail.

use thiserror::Error;

/// Failures raised while bringing up or driving the window.
#[derive(Debug, Error)]
pub enum VisualizerError {
    /// The window (and with it the presentation surface) could not be created.
    #[error("window creation failed")]
    WindowCreation(#[source] minifb::Error),
    /// Copying the frame buffer to the window failed.
    #[error("frame presentation failed")]
    Present(#[source] minifb::Error),
}

/// Convenience alias used across the crate.
pub type Result<T, E = VisualizerError> = std::result::Result<T, E>;
