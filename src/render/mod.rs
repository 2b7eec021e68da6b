//! Rendering: the drawing surface seam, the CPU frame buffer, and the
//! per-frame rod/bob/trail pipeline.

pub mod framebuffer;
pub mod pipeline;
pub mod primitives;
pub mod trail;

pub use framebuffer::FrameBuffer;
pub use pipeline::{FrameStats, Palette, RenderPipeline};
pub use primitives::{draw_swept_disk, sweep_chord_count};
pub use trail::{Trail, TrailPolicy};

use glam::Vec2;
use image::Rgba;

/// Drawing surface the renderer talks to.
///
/// Mirrors a stateful 2D renderer: a current draw color, then primitives that
/// use it. Implementations treat non-finite coordinates as a no-op and clip
/// anything outside the surface.
pub trait Canvas {
    /// Width and height in pixels.
    fn size(&self) -> (u32, u32);

    fn set_draw_color(&mut self, color: Rgba<u8>);

    /// Fills the whole surface with the current draw color.
    fn clear(&mut self);

    fn draw_line(&mut self, start: Vec2, end: Vec2);

    fn draw_point(&mut self, point: Vec2);
}
