//! Windowed frame loop: poll, step, derive, draw, present, sleep.

use std::{
    thread,
    time::{Duration, Instant},
};

use glam::Vec2;
use log::info;
use minifb::{Key, Window, WindowOptions};

use crate::{
    config::{
        FRAME_BUDGET_MS, FRAME_DELAY_MS, PROFILE_REPORT_INTERVAL, SCREEN_HEIGHT, SCREEN_WIDTH,
        WINDOW_TITLE,
    },
    core::types::PendulumParams,
    dynamics::IntegrationScheme,
    error::{Result, VisualizerError},
    render::{FrameBuffer, RenderPipeline, TrailPolicy},
    utils::{
        logging::{trace_frame_state, warn_if_frame_over_budget},
        profiling::{FrameProfiler, PhaseTimer},
    },
    world::PendulumWorld,
};

/// Whether the frame loop should keep going. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Running,
    Stopped,
}

impl RunState {
    /// Applies one poll result.
    pub fn observe(self, quit_requested: bool) -> Self {
        match self {
            RunState::Running if quit_requested => RunState::Stopped,
            state => state,
        }
    }

    pub fn is_running(self) -> bool {
        self == RunState::Running
    }
}

/// Everything fixed at window creation.
#[derive(Debug, Clone)]
pub struct WindowSettings {
    pub title: String,
    pub width: usize,
    pub height: usize,
    pub frame_delay: Duration,
    pub params: PendulumParams,
    pub scheme: IntegrationScheme,
    pub trail_policy: TrailPolicy,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            frame_delay: Duration::from_millis(FRAME_DELAY_MS),
            params: PendulumParams::default(),
            scheme: IntegrationScheme::default(),
            trail_policy: TrailPolicy::default(),
        }
    }
}

/// Owns the window and drives the simulation one frame per iteration.
pub struct Visualizer {
    window: Window,
    canvas: FrameBuffer,
    buffer: Vec<u32>,
    world: PendulumWorld,
    pipeline: RenderPipeline,
    profiler: FrameProfiler,
    run_state: RunState,
    settings: WindowSettings,
}

impl Visualizer {
    pub fn new(settings: WindowSettings) -> Result<Self> {
        let mut window = Window::new(
            &settings.title,
            settings.width,
            settings.height,
            WindowOptions::default(),
        )
        .map_err(VisualizerError::WindowCreation)?;
        // The fixed sleep after each frame is the only throttle.
        window.set_target_fps(0);

        let pivot = Vec2::new(settings.width as f32 / 2.0, settings.height as f32 / 2.0);
        let mut world = PendulumWorld::new(settings.params, pivot);
        world.set_scheme(settings.scheme);

        info!(
            "window {}x{} \"{}\" ready, pivot at ({}, {})",
            settings.width, settings.height, settings.title, pivot.x, pivot.y
        );
        info!("parameters: {:?}", world.params);
        info!("initial state: {:?}", world.state);

        Ok(Self {
            window,
            canvas: FrameBuffer::new(settings.width as u32, settings.height as u32),
            buffer: Vec::with_capacity(settings.width * settings.height),
            world,
            pipeline: RenderPipeline::new(settings.trail_policy),
            profiler: FrameProfiler::default(),
            run_state: RunState::Running,
            settings,
        })
    }

    /// Runs until the window is closed or Escape is pressed.
    pub fn run(mut self) -> Result<()> {
        loop {
            self.poll_events();
            if !self.run_state.is_running() {
                break;
            }

            let started = Instant::now();
            self.frame()?;
            warn_if_frame_over_budget(started.elapsed(), FRAME_BUDGET_MS);

            if self.profiler.frame_count >= PROFILE_REPORT_INTERVAL {
                self.profiler.report();
                self.profiler.reset();
            }

            thread::sleep(self.settings.frame_delay);
        }

        info!(
            "stopped after {} frames, trail holds {} points",
            self.world.steps(),
            self.pipeline.trail().len()
        );
        Ok(())
    }

    fn poll_events(&mut self) {
        let quit_requested = !self.window.is_open() || self.window.is_key_down(Key::Escape);
        self.run_state = self.run_state.observe(quit_requested);
    }

    fn frame(&mut self) -> Result<()> {
        {
            let _timer = PhaseTimer::start(&mut self.profiler.physics_time);
            self.world.step();
        }

        let frame = self.world.frame();
        trace_frame_state(&self.world.state, &frame);

        {
            let _timer = PhaseTimer::start(&mut self.profiler.render_time);
            self.pipeline
                .draw_frame(&mut self.canvas, &frame, &self.world.params);
        }

        {
            let _timer = PhaseTimer::start(&mut self.profiler.present_time);
            self.canvas.write_argb(&mut self.buffer);
            self.window
                .update_with_buffer(&self.buffer, self.settings.width, self.settings.height)
                .map_err(VisualizerError::Present)?;
        }

        self.profiler.frame_count += 1;
        self.profiler.trail_len = self.pipeline.trail().len();
        Ok(())
    }
}
