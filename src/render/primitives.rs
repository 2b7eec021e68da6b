use std::f32::consts::PI;

use glam::Vec2;

use super::Canvas;

/// Number of chords [`draw_swept_disk`] emits for a given angular step.
pub fn sweep_chord_count(step: f32) -> usize {
    if step.is_nan() || step <= 0.0 {
        return 0;
    }
    (PI / step).floor() as usize
}

/// Approximates a filled disk by sweeping a diameter across it.
///
/// For `θ = i·step` in `[0, π)` a chord is drawn from the point at angle
/// `π + θ` to the point at angle `θ`. Overlapping strokes give the fill, so
/// the cost per disk is fixed by `step`, not by `radius`. Returns the number
/// of chords drawn.
pub fn draw_swept_disk<C>(canvas: &mut C, center: Vec2, radius: f32, step: f32) -> usize
where
    C: Canvas + ?Sized,
{
    let chords = sweep_chord_count(step);
    for i in 0..chords {
        let theta = i as f32 * step;
        let start = center + radius * Vec2::new((PI + theta).cos(), (PI + theta).sin());
        let end = center + radius * Vec2::new(theta.cos(), theta.sin());
        canvas.draw_line(start, end);
    }
    chords
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::FrameBuffer;
    use image::Rgba;

    #[test]
    fn default_step_yields_314_chords() {
        assert_eq!(sweep_chord_count(0.01), 314);
    }

    #[test]
    fn degenerate_steps_draw_nothing() {
        assert_eq!(sweep_chord_count(0.0), 0);
        assert_eq!(sweep_chord_count(-0.1), 0);
        assert_eq!(sweep_chord_count(f32::NAN), 0);
    }

    #[test]
    fn swept_disk_covers_its_center_and_stays_inside() {
        let white = Rgba([255, 255, 255, 255]);
        let mut canvas = FrameBuffer::new(41, 41);
        canvas.set_draw_color(white);

        draw_swept_disk(&mut canvas, Vec2::new(20.0, 20.0), 10.0, 0.01);

        assert_eq!(canvas.pixel(20, 20), Some(white));
        assert_eq!(canvas.pixel(20, 12), Some(white));
        assert_ne!(canvas.pixel(20, 33), Some(white));
        assert_ne!(canvas.pixel(2, 2), Some(white));
    }
}
