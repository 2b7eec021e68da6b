//! Global configuration constants for the double pendulum simulation.

use std::f32::consts::PI;

/// Title of the simulation window.
pub const WINDOW_TITLE: &str = "Double Pendulum";

/// Window width in pixels.
pub const SCREEN_WIDTH: usize = 1280;

/// Window height in pixels.
pub const SCREEN_HEIGHT: usize = 720;

/// Mass of the first bob. Also used as its draw radius.
pub const DEFAULT_MASS_1: f32 = 10.0;

/// Mass of the second bob. Also used as its draw radius.
pub const DEFAULT_MASS_2: f32 = 10.0;

/// Length of the first arm (pixels).
pub const DEFAULT_LENGTH_1: f32 = 150.0;

/// Length of the second arm (pixels).
pub const DEFAULT_LENGTH_2: f32 = 150.0;

/// Gravity constant.
pub const DEFAULT_GRAVITY: f32 = 9.81;

/// Integration timestep, applied once per frame.
pub const DEFAULT_TIME_STEP: f32 = 0.001;

/// Starting angle of the first arm, measured from the downward vertical.
pub const INITIAL_THETA_1: f32 = PI / 3.0;

/// Starting angle of the second arm, measured from the downward vertical.
pub const INITIAL_THETA_2: f32 = PI / 2.0;

/// Sleep between frames (milliseconds). A throttle, not a frame clock.
pub const FRAME_DELAY_MS: u64 = 2;

/// Angular increment of the chord sweep used to fill bob disks.
pub const CIRCLE_SWEEP_STEP: f32 = 0.01;

/// Frame duration above which a warning is logged.
pub const FRAME_BUDGET_MS: f32 = 16.0;

/// Number of frames between two profiler reports.
pub const PROFILE_REPORT_INTERVAL: u64 = 600;

/// Frame background color (RGBA).
pub const BACKGROUND_COLOR: [u8; 4] = [0, 0, 0, 255];

/// Rod and bob color (RGBA).
pub const PENDULUM_COLOR: [u8; 4] = [255, 255, 255, 255];

/// Trail point color (RGBA).
pub const TRAIL_COLOR: [u8; 4] = [255, 0, 0, 255];
