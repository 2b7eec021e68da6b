use glam::Vec2;
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_line_segment_mut;

use super::Canvas;

/// CPU-side RGBA surface presented to the window once per frame.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    image: RgbaImage,
    color: Rgba<u8>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            color: Rgba([0, 0, 0, 255]),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Pixel at `(x, y)`, if inside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.image.get_pixel_checked(x, y).copied()
    }

    /// Packs the image into the window's 32-bit ARGB words, reusing `out`.
    pub fn write_argb(&self, out: &mut Vec<u32>) {
        out.clear();
        out.extend(self.image.pixels().map(|p| {
            let [r, g, b, _] = p.0;
            (255u32 << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32
        }));
    }

    /// Clips a segment to the image plus a one pixel margin, so only the
    /// visible part reaches the rasterizer.
    fn clip_to_image(&self, start: Vec2, end: Vec2) -> Option<(Vec2, Vec2)> {
        let (width, height) = self.image.dimensions();
        clip_segment(
            start,
            end,
            Vec2::splat(-1.0),
            Vec2::new(width as f32, height as f32),
        )
    }
}

/// Liang–Barsky clipping of `start..end` against the box `[min, max]`.
///
/// Runs in `f64`: endpoints millions of pixels away would otherwise lose
/// whole pixels to cancellation at the clip boundary.
fn clip_segment(start: Vec2, end: Vec2, min: Vec2, max: Vec2) -> Option<(Vec2, Vec2)> {
    if !start.is_finite() || !end.is_finite() {
        return None;
    }
    let (start, end) = (start.as_dvec2(), end.as_dvec2());
    let (min, max) = (min.as_dvec2(), max.as_dvec2());
    let delta = end - start;

    let (mut t0, mut t1) = (0.0f64, 1.0f64);
    for (p, q) in [
        (-delta.x, start.x - min.x),
        (delta.x, max.x - start.x),
        (-delta.y, start.y - min.y),
        (delta.y, max.y - start.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else if p < 0.0 {
            t0 = t0.max(q / p);
        } else {
            t1 = t1.min(q / p);
        }
        if t0 > t1 {
            return None;
        }
    }

    Some(((start + delta * t0).as_vec2(), (start + delta * t1).as_vec2()))
}

impl Canvas for FrameBuffer {
    fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn set_draw_color(&mut self, color: Rgba<u8>) {
        self.color = color;
    }

    fn clear(&mut self) {
        let color = self.color;
        for pixel in self.image.pixels_mut() {
            *pixel = color;
        }
    }

    fn draw_line(&mut self, start: Vec2, end: Vec2) {
        let Some((start, end)) = self.clip_to_image(start, end) else {
            return;
        };
        draw_line_segment_mut(&mut self.image, (start.x, start.y), (end.x, end.y), self.color);
    }

    fn draw_point(&mut self, point: Vec2) {
        if !point.is_finite() {
            return;
        }
        let (x, y) = (point.x.floor(), point.y.floor());
        let (width, height) = self.image.dimensions();
        if x < 0.0 || y < 0.0 || x >= width as f32 || y >= height as f32 {
            return;
        }
        self.image.put_pixel(x as u32, y as u32, self.color);
    }
}
