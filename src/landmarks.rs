//! Landmark Adapter: turns whatever the hand tracker reports into one
//! pixel-space [`LandmarkFrame`] per camera frame.
//!
//! The tracker itself (a hand-pose model) lives behind [`HandTracker`];
//! this module only owns coordinate conversion, single-hand selection,
//! finger-extension rules and the optional skeleton overlay.

use crate::draw::{draw_line, fill_circle};
use crate::error::Result;
use crate::types::{FrameBuffer, Point};

pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Fingertip ids, thumb first.
pub const TIP_IDS: [usize; 5] = [THUMB_TIP, INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

/// Connector pairs drawn by the diagnostic overlay.
pub const HAND_CONNECTIONS: [(usize, usize); 21] = [
    (WRIST, THUMB_CMC), (THUMB_CMC, THUMB_MCP), (THUMB_MCP, THUMB_IP), (THUMB_IP, THUMB_TIP),
    (WRIST, INDEX_MCP), (INDEX_MCP, INDEX_PIP), (INDEX_PIP, INDEX_DIP), (INDEX_DIP, INDEX_TIP),
    (INDEX_MCP, MIDDLE_MCP), (MIDDLE_MCP, MIDDLE_PIP), (MIDDLE_PIP, MIDDLE_DIP), (MIDDLE_DIP, MIDDLE_TIP),
    (MIDDLE_MCP, RING_MCP), (RING_MCP, RING_PIP), (RING_PIP, RING_DIP), (RING_DIP, RING_TIP),
    (RING_MCP, PINKY_MCP), (WRIST, PINKY_MCP), (PINKY_MCP, PINKY_PIP), (PINKY_PIP, PINKY_DIP),
    (PINKY_DIP, PINKY_TIP),
];

/// One hand as reported by a tracker: landmarks in normalized image
/// coordinates (0.0..=1.0 on both axes), ordered by landmark id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawHand {
    pub landmarks: Vec<[f32; 2]>,
}

/// Anything that can find hands in a frame (a pose model, a simulator).
pub trait HandTracker {
    /// Every hand found in `frame`; an empty vec when none is visible.
    fn detect(&mut self, frame: &FrameBuffer) -> Result<Vec<RawHand>>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Landmark {
    pub id: u8,
    pub x: i32,
    pub y: i32,
}

impl Landmark {
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Pixel-space landmarks for at most one hand; empty when no hand was seen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LandmarkFrame {
    points: Vec<Landmark>,
}

impl LandmarkFrame {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Keeps at most [`LANDMARK_COUNT`] points.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        let points = points
            .into_iter()
            .take(LANDMARK_COUNT)
            .enumerate()
            .map(|(id, p)| Landmark { id: id as u8, x: p.x, y: p.y })
            .collect();
        Self { points }
    }

    /// Scale normalized coordinates to a `width` x `height` frame
    /// (truncating toward zero, as pixel indices).
    pub fn from_raw(hand: &RawHand, width: usize, height: usize) -> Self {
        Self::from_points(hand.landmarks.iter().map(|&[nx, ny]| {
            Point::new((nx * width as f32) as i32, (ny * height as f32) as i32)
        }))
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// All 21 landmarks present.
    pub fn is_complete(&self) -> bool {
        self.points.len() == LANDMARK_COUNT
    }

    pub fn point(&self, id: usize) -> Option<Point> {
        self.points.get(id).map(Landmark::point)
    }

    pub fn landmarks(&self) -> &[Landmark] {
        &self.points
    }

    /// Finger extension, only for a complete hand.
    pub fn fingers(&self) -> Option<FingerState> {
        if !self.is_complete() {
            return None;
        }
        let p = &self.points;
        let mut up = [false; 5];
        // Thumb folds sideways: compare x against the IP joint.
        up[0] = p[THUMB_TIP].x < p[THUMB_TIP - 1].x;
        // Other fingers: tip above the PIP joint (smaller y).
        for (finger, &tip) in TIP_IDS.iter().enumerate().skip(1) {
            up[finger] = p[tip].y < p[tip - 2].y;
        }
        Some(FingerState(up))
    }
}

/// Which fingers are extended: index 0 = thumb … 4 = pinky.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FingerState(pub [bool; 5]);

impl FingerState {
    pub fn thumb(&self) -> bool { self.0[0] }
    pub fn index(&self) -> bool { self.0[1] }
    pub fn middle(&self) -> bool { self.0[2] }
    pub fn ring(&self) -> bool { self.0[3] }
    pub fn pinky(&self) -> bool { self.0[4] }
}

/// Wraps a tracker and reduces its output to a single-hand frame.
pub struct LandmarkAdapter<T> {
    tracker: T,
    overlay: bool,
}

impl<T: HandTracker> LandmarkAdapter<T> {
    pub fn new(tracker: T, overlay: bool) -> Self {
        Self { tracker, overlay }
    }

    pub fn tracker_mut(&mut self) -> &mut T {
        &mut self.tracker
    }

    /// Detect the first hand in `frame`. With the overlay enabled the
    /// skeleton is drawn onto `frame` for display.
    pub fn detect(&mut self, frame: &mut FrameBuffer) -> Result<LandmarkFrame> {
        let hands = self.tracker.detect(frame)?;
        let Some(first) = hands.first() else {
            return Ok(LandmarkFrame::empty());
        };
        let lm = LandmarkFrame::from_raw(first, frame.width, frame.height);
        if self.overlay {
            draw_overlay(frame, &lm);
        }
        Ok(lm)
    }
}

const CONNECTOR_COLOR: u32 = 0x00E0E0E0;
const JOINT_COLOR: u32 = 0x00FF0000;

/// Hand skeleton: light grey connectors with red joints.
pub fn draw_overlay(fb: &mut FrameBuffer, lm: &LandmarkFrame) {
    for &(a, b) in HAND_CONNECTIONS.iter() {
        if let (Some(pa), Some(pb)) = (lm.point(a), lm.point(b)) {
            draw_line(fb, pa, pb, CONNECTOR_COLOR);
        }
    }
    for l in lm.landmarks() {
        fill_circle(fb, l.point(), 3, JOINT_COLOR);
    }
}
