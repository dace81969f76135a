// Moving-average cursor smoothing.
// The newest raw fingertip goes to the front of a bounded FIFO; the output
// is the per-axis mean of whatever the FIFO holds, rounded to a pixel.

use std::collections::VecDeque;

use crate::types::Point;

pub struct CursorSmoother {
    window: usize,
    history: VecDeque<Point>,
    current: Option<Point>,
}

impl CursorSmoother {
    /// `window` is K, the number of samples averaged (at least 1).
    pub fn new(window: usize) -> Self {
        let window = window.max(1);
        Self { window, history: VecDeque::with_capacity(window), current: None }
    }

    /// Push one raw sample and return the smoothed cursor.
    pub fn update(&mut self, raw: Point) -> Point {
        if self.history.len() == self.window {
            self.history.pop_back(); // oldest lives at the back
        }
        self.history.push_front(raw);

        let n = self.history.len() as f64;
        let (sx, sy) = self
            .history
            .iter()
            .fold((0i64, 0i64), |(ax, ay), p| (ax + p.x as i64, ay + p.y as i64));
        let smoothed = Point::new((sx as f64 / n).round() as i32, (sy as f64 / n).round() as i32);
        self.current = Some(smoothed);
        smoothed
    }

    /// Forget all history (hand lost, or gesture went idle).
    pub fn reset(&mut self) {
        self.history.clear();
        self.current = None;
    }

    pub fn current(&self) -> Option<Point> {
        self.current
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Raw samples, newest first.
    pub fn history(&self) -> impl Iterator<Item = &Point> {
        self.history.iter()
    }
}
