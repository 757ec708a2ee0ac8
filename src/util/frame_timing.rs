//! Frame pacing and smoothed FPS measurement.

use web_time::{Duration, Instant};

/// Frame timing with FPS calculation and optional frame limiting
#[derive(Debug)]
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
    /// Frames completed since construction
    frames: u64,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        Self {
            target_fps,
            min_frame_duration: min_frame_duration(target_fps),
            last_frame: Instant::now(),
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,
            frames: 0,
        }
    }

    /// Change the FPS target without resetting the average.
    pub fn set_target_fps(&mut self, target_fps: u32) {
        self.target_fps = target_fps;
        self.min_frame_duration = min_frame_duration(target_fps);
    }

    /// Call at the start of each frame. Returns true if enough time has passed
    /// to render.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Call after rendering to update timing.
    pub fn end_frame(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.frames += 1;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Number of frames completed.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

fn min_frame_duration(target_fps: u32) -> Duration {
    if target_fps > 0 {
        Duration::from_secs_f64(1.0 / f64::from(target_fps))
    } else {
        Duration::ZERO
    }
}
