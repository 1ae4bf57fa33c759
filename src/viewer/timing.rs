use web_time::{Duration, Instant};

/// Frame timing with FPS calculation and frame limiting.
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Weight of the newest sample (0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: Instant::now(),
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Whether enough time has passed since the last frame to render.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// When the next frame is due; the host sleeps until then.
    #[must_use]
    pub fn next_deadline(&self) -> Instant {
        self.last_frame + self.min_frame_duration
    }

    /// Minimum time between frames.
    #[must_use]
    pub fn frame_duration(&self) -> Duration {
        self.min_frame_duration
    }

    /// Call after rendering to update timing.
    pub fn end_frame(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Current FPS (smoothed).
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_always_renders() {
        let timing = FrameTiming::new(0);
        assert!(timing.should_render());
        assert_eq!(timing.frame_duration(), Duration::ZERO);
    }

    #[test]
    fn sixty_hz_frame_budget() {
        let timing = FrameTiming::new(60);
        let budget = timing.frame_duration().as_secs_f64();
        assert!((budget - 1.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn deadline_moves_with_each_frame() {
        let mut timing = FrameTiming::new(60);
        let first = timing.next_deadline();
        std::thread::sleep(Duration::from_millis(2));
        timing.end_frame();
        assert!(timing.next_deadline() > first);
    }

    #[test]
    fn smoothed_fps_moves_toward_the_measured_rate() {
        let mut timing = FrameTiming::new(0);
        std::thread::sleep(Duration::from_millis(50));
        timing.end_frame();
        // One 50 ms frame (20 fps) pulls the 60 fps seed down a little.
        assert!(timing.fps() < 60.0);
        assert!(timing.fps() > 20.0);
    }
}
