// FPS meter: counts presented frames and reports a rate once per second.

use std::time::{Duration, Instant};

/// `frames / secs`, or 0 when no time has passed.
pub fn rate(frames: u32, elapsed: Duration) -> f32 {
    let secs = elapsed.as_secs_f32();
    if secs > 0.0 { frames as f32 / secs } else { 0.0 }
}

pub struct FpsMeter {
    window_start: Instant,
    frames: u32,
    last: f32,
}

impl FpsMeter {
    pub fn new(now: Instant) -> Self {
        Self { window_start: now, frames: 0, last: 0.0 }
    }

    /// Count one frame; returns the fresh rate when a full second has passed.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        self.frames += 1;
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < Duration::from_secs(1) {
            return None;
        }
        self.last = rate(self.frames, elapsed);
        self.frames = 0;
        self.window_start = now;
        Some(self.last)
    }

    /// Most recent completed reading.
    pub fn fps(&self) -> f32 {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_elapsed_is_zero_fps() {
        assert_eq!(rate(30, Duration::ZERO), 0.0);
        assert_eq!(rate(30, Duration::from_secs(2)), 15.0);
    }

    #[test]
    fn reports_once_per_second() {
        let t0 = Instant::now();
        let mut m = FpsMeter::new(t0);
        for i in 1..30 {
            assert_eq!(m.tick(t0 + Duration::from_millis(i * 33)), None);
        }
        let fps = m.tick(t0 + Duration::from_secs(1)).unwrap();
        assert_eq!(fps, 30.0);
        assert_eq!(m.fps(), 30.0);
    }
}
