use log::debug;
use std::time::{Duration, Instant};

/// Accumulated frame timings, reported and reset periodically.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrameProfiler {
    pub physics_time: Duration,
    pub render_time: Duration,
    pub present_time: Duration,

    pub frame_count: u64,
    pub trail_len: usize,
}

impl FrameProfiler {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Average time per frame spent in `total`, in milliseconds.
    fn average_ms(&self, total: Duration) -> f32 {
        if self.frame_count == 0 {
            return 0.0;
        }
        total.as_secs_f32() * 1000.0 / self.frame_count as f32
    }

    pub fn report(&self) {
        if self.frame_count == 0 {
            return;
        }

        debug!(
            "profile over {} frames: physics {:.3} ms, render {:.3} ms, present {:.3} ms, trail {} points",
            self.frame_count,
            self.average_ms(self.physics_time),
            self.average_ms(self.render_time),
            self.average_ms(self.present_time),
            self.trail_len
        );
    }
}

/// Charges the time until drop to one [`FrameProfiler`] phase total
/// (`physics_time`, `render_time` or `present_time`).
pub struct PhaseTimer<'a> {
    started: Instant,
    phase_total: &'a mut Duration,
}

impl<'a> PhaseTimer<'a> {
    pub fn start(phase_total: &'a mut Duration) -> Self {
        Self {
            started: Instant::now(),
            phase_total,
        }
    }
}

impl Drop for PhaseTimer<'_> {
    fn drop(&mut self) {
        *self.phase_total += self.started.elapsed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_timer_charges_only_its_own_phase() {
        let mut profiler = FrameProfiler::default();
        {
            let _timer = PhaseTimer::start(&mut profiler.render_time);
            std::thread::sleep(Duration::from_millis(1));
        }
        let first = profiler.render_time;
        {
            let _timer = PhaseTimer::start(&mut profiler.render_time);
        }

        assert!(first >= Duration::from_millis(1));
        assert!(profiler.render_time >= first);
        assert_eq!(profiler.physics_time, Duration::ZERO);
        assert_eq!(profiler.present_time, Duration::ZERO);
    }

    #[test]
    fn reset_clears_counters() {
        let mut profiler = FrameProfiler {
            frame_count: 3,
            trail_len: 3,
            ..Default::default()
        };
        profiler.physics_time += Duration::from_millis(3);

        assert!((profiler.average_ms(profiler.physics_time) - 1.0).abs() < 1e-3);
        profiler.reset();
        assert_eq!(profiler.frame_count, 0);
        assert_eq!(profiler.physics_time, Duration::ZERO);
    }
}
