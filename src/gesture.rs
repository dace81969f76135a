//! Gesture classification and stroke continuity.
//!
//! The mode is a pure function of the current [`FingerState`]; there is no
//! hysteresis. [`StrokeTracker`] is the three-state machine on top of it:
//! it owns the stroke anchor and tells the caller what each frame means
//! for the canvas.

use crate::landmarks::FingerState;
use crate::types::Point;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Idle,
    Selecting,
    Drawing,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Idle => "IDLE",
            Mode::Selecting => "SELECT",
            Mode::Drawing => "DRAW",
        }
    }
}

/// `None` (no complete hand) is always `Idle`.
pub fn classify(fingers: Option<FingerState>) -> Mode {
    match fingers {
        Some(f) if f.index() && f.middle() => Mode::Selecting,
        Some(f) if f.index() => Mode::Drawing,
        _ => Mode::Idle,
    }
}

/// What the caller must do this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrokeAction {
    /// Nothing to draw; the smoothing history must be dropped.
    Rest,
    /// Run the palette selector.
    Select,
    /// First drawing frame: anchor placed, no segment.
    Begin(Point),
    /// Draw `from -> to`; the anchor is now `to`.
    Continue { from: Point, to: Point },
}

#[derive(Debug, Default)]
pub struct StrokeTracker {
    mode: Mode,
    anchor: Option<Point>,
}

impl StrokeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    /// Move to `next` with the smoothed `cursor` and return the frame's action.
    /// `Drawing` without a cursor degrades to `Idle`.
    pub fn advance(&mut self, next: Mode, cursor: Option<Point>) -> StrokeAction {
        let next = match (next, cursor) {
            (Mode::Drawing, None) => Mode::Idle,
            (m, _) => m,
        };
        if next != self.mode {
            log::debug!("mode {:?} -> {:?}", self.mode, next);
            self.exit();
            self.mode = next;
        }

        match (next, cursor) {
            (Mode::Drawing, Some(to)) => match self.anchor.replace(to) {
                None => StrokeAction::Begin(to),
                Some(from) => StrokeAction::Continue { from, to },
            },
            (Mode::Selecting, _) => {
                self.anchor = None;
                StrokeAction::Select
            }
            _ => {
                self.anchor = None;
                StrokeAction::Rest
            }
        }
    }

    /// Leaving any state ends the current stroke.
    fn exit(&mut self) {
        self.anchor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fingers(up: [u8; 5]) -> Option<FingerState> {
        Some(FingerState(up.map(|b| b == 1)))
    }

    #[test]
    fn classification_table() {
        assert_eq!(classify(None), Mode::Idle);
        assert_eq!(classify(fingers([0, 1, 0, 0, 0])), Mode::Drawing);
        assert_eq!(classify(fingers([1, 1, 0, 1, 1])), Mode::Drawing);
        assert_eq!(classify(fingers([0, 1, 1, 0, 0])), Mode::Selecting);
        assert_eq!(classify(fingers([1, 1, 1, 1, 1])), Mode::Selecting);
        assert_eq!(classify(fingers([0, 0, 1, 0, 0])), Mode::Idle);
        assert_eq!(classify(fingers([0, 0, 0, 0, 0])), Mode::Idle);
    }

    #[test]
    fn each_drawing_entry_starts_a_fresh_stroke() {
        let mut t = StrokeTracker::new();
        let p = |x| Some(Point::new(x, 50));

        assert_eq!(t.advance(Mode::Idle, p(0)), StrokeAction::Rest);
        assert_eq!(t.advance(Mode::Drawing, p(10)), StrokeAction::Begin(Point::new(10, 50)));
        assert_eq!(
            t.advance(Mode::Drawing, p(20)),
            StrokeAction::Continue { from: Point::new(10, 50), to: Point::new(20, 50) }
        );
        assert_eq!(t.advance(Mode::Idle, p(30)), StrokeAction::Rest);
        assert_eq!(t.anchor(), None);
        assert_eq!(t.advance(Mode::Drawing, p(40)), StrokeAction::Begin(Point::new(40, 50)));
        assert_eq!(t.anchor(), Some(Point::new(40, 50)));
    }

    #[test]
    fn selecting_breaks_the_stroke() {
        let mut t = StrokeTracker::new();
        t.advance(Mode::Drawing, Some(Point::new(1, 1)));
        assert_eq!(t.advance(Mode::Selecting, Some(Point::new(2, 2))), StrokeAction::Select);
        assert_eq!(t.anchor(), None);
        assert_eq!(t.mode(), Mode::Selecting);
        assert!(matches!(t.advance(Mode::Drawing, Some(Point::new(3, 3))), StrokeAction::Begin(_)));
    }

    #[test]
    fn drawing_without_cursor_rests() {
        let mut t = StrokeTracker::new();
        assert_eq!(t.advance(Mode::Drawing, None), StrokeAction::Rest);
        assert_eq!(t.mode(), Mode::Idle);
    }
}
