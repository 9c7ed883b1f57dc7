use std::time::{Duration, Instant};

const FPS_WINDOW: Duration = Duration::from_secs(1);

pub struct FrameTimer {
    last: Instant,
    pub dt: f32,
    window_start: Instant,
    window_frames: u32,
}

impl FrameTimer {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last: now,
            dt: 0.0,
            window_start: now,
            window_frames: 0,
        }
    }

    /// Advance one frame. Returns the average frame rate once per second,
    /// `None` otherwise.
    pub fn tick(&mut self) -> Option<f32> {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> Option<f32> {
        self.dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        self.window_frames += 1;

        let elapsed = now.duration_since(self.window_start);
        if elapsed < FPS_WINDOW {
            return None;
        }
        let fps = self.window_frames as f32 / elapsed.as_secs_f32();
        self.window_start = now;
        self.window_frames = 0;
        Some(fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_fps_once_per_window() {
        let mut timer = FrameTimer::new();
        let start = timer.last;
        let step = Duration::from_millis(250);

        for i in 1..4 {
            assert_eq!(timer.tick_at(start + step * i), None);
        }
        let fps = timer.tick_at(start + step * 4).unwrap();
        assert!((fps - 4.0).abs() < 1e-3);
        assert!((timer.dt - 0.25).abs() < 1e-6);

        assert_eq!(timer.tick_at(start + step * 5), None);
    }
}
