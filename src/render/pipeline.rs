use image::Rgba;

use crate::{
    config::{BACKGROUND_COLOR, CIRCLE_SWEEP_STEP, PENDULUM_COLOR, TRAIL_COLOR},
    core::types::{CartesianFrame, PendulumParams},
};

use super::{
    primitives::draw_swept_disk,
    trail::{Trail, TrailPolicy},
    Canvas,
};

/// Colors used for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Rgba<u8>,
    pub pendulum: Rgba<u8>,
    pub trail: Rgba<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgba(BACKGROUND_COLOR),
            pendulum: Rgba(PENDULUM_COLOR),
            trail: Rgba(TRAIL_COLOR),
        }
    }
}

/// Draw calls issued for a single frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    pub lines: usize,
    pub points: usize,
}

/// Turns a [`CartesianFrame`] into draw calls and owns the bob trail.
#[derive(Debug, Clone)]
pub struct RenderPipeline {
    pub palette: Palette,
    pub sweep_step: f32,
    trail: Trail,
}

impl Default for RenderPipeline {
    fn default() -> Self {
        Self::new(TrailPolicy::default())
    }
}

impl RenderPipeline {
    pub fn new(policy: TrailPolicy) -> Self {
        Self {
            palette: Palette::default(),
            sweep_step: CIRCLE_SWEEP_STEP,
            trail: Trail::with_policy(policy),
        }
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Clears the canvas, draws rods and bobs, records the second bob in the
    /// trail, then redraws the whole trail on top.
    ///
    /// Bob radii are the bob masses.
    pub fn draw_frame<C>(
        &mut self,
        canvas: &mut C,
        frame: &CartesianFrame,
        params: &PendulumParams,
    ) -> FrameStats
    where
        C: Canvas + ?Sized,
    {
        let mut stats = FrameStats::default();

        canvas.set_draw_color(self.palette.background);
        canvas.clear();

        canvas.set_draw_color(self.palette.pendulum);
        canvas.draw_line(frame.pivot, frame.bob1);
        stats.lines += 1;
        stats.lines += draw_swept_disk(canvas, frame.bob1, params.mass1, self.sweep_step);
        canvas.draw_line(frame.bob1, frame.bob2);
        stats.lines += 1;
        stats.lines += draw_swept_disk(canvas, frame.bob2, params.mass2, self.sweep_step);

        self.trail.push(frame.bob2);

        canvas.set_draw_color(self.palette.trail);
        for point in self.trail.iter() {
            canvas.draw_point(point);
            stats.points += 1;
        }

        stats
    }
}
