//! Frames-per-second counter sampled on a fixed window

/// Recompute interval in seconds
const SAMPLE_WINDOW: f64 = 0.5;

/// Counts frames and refreshes the FPS value every half second
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frames: u32,
    window_start: Option<f64>,
    fps: f32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frames: 0,
            window_start: None,
            fps: 0.0,
        }
    }

    /// Records a frame at time `now` (seconds)
    pub fn tick(&mut self, now: f64) {
        let start = *self.window_start.get_or_insert(now);
        self.frames += 1;
        let elapsed = now - start;
        if elapsed >= SAMPLE_WINDOW {
            self.fps = (self.frames as f64 / elapsed) as f32;
            self.frames = 0;
            self.window_start = Some(now);
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Label as shown on screen
    pub fn label(&self) -> String {
        format!("FPS: {:.1}", self.fps)
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}
