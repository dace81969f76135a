// Keyboard + mouse stand-in for a hand-pose model.
// Builds a plausible 21-point right hand (mirrored view, palm to camera)
// around a chosen index fingertip, with any set of fingers extended and
// the thumb tip placed `pinch` pixels left of the index tip.

use crate::error::Result;
use crate::landmarks::{
    FingerState, HandTracker, LANDMARK_COUNT, LandmarkFrame, RawHand, THUMB_CMC, THUMB_IP,
    THUMB_MCP, THUMB_TIP, TIP_IDS, WRIST,
};
use crate::types::{FrameBuffer, Point};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandPose {
    pub index_tip: Point,
    pub fingers: FingerState,
    pub pinch: f32, // thumb tip to index tip, pixels
}

impl HandPose {
    pub fn new(index_tip: Point, fingers: [bool; 5], pinch: f32) -> Self {
        Self { index_tip, fingers: FingerState(fingers), pinch }
    }

    /// Pixel landmarks, ordered by id.
    pub fn points(&self) -> Vec<Point> {
        let t = self.index_tip;
        let base = t.y + 200;
        let mut pts = vec![Point::default(); LANDMARK_COUNT];
        pts[WRIST] = Point::new(t.x, base);

        // Index..pinky: MCP, PIP, DIP, TIP stacked upward in one column.
        for (finger, &tip) in TIP_IDS.iter().enumerate().skip(1) {
            let col = t.x + (finger as i32 - 1) * 30;
            pts[tip - 3] = Point::new(col, base - 60);
            pts[tip - 2] = Point::new(col, base - 100);
            pts[tip - 1] = Point::new(col, base - 150);
            pts[tip] = if self.fingers.0[finger] {
                Point::new(col, t.y)
            } else {
                Point::new(col, base - 80) // curled below the PIP joint
            };
        }

        let thumb_tip = Point::new(t.x - self.pinch.round() as i32, t.y);
        // Extended thumb: tip left of the IP joint.
        let side = if self.fingers.thumb() { 25 } else { -25 };
        pts[THUMB_CMC] = Point::new(t.x - 40, base - 20);
        pts[THUMB_MCP] = Point::new(t.x - 50, base - 50);
        pts[THUMB_IP] = Point::new(thumb_tip.x + side, thumb_tip.y + 30);
        pts[THUMB_TIP] = thumb_tip;
        pts
    }

    pub fn to_frame(&self) -> LandmarkFrame {
        LandmarkFrame::from_points(self.points())
    }

    /// Normalized to pixel centres so scaling back lands on the same pixel.
    pub fn to_raw(&self, width: usize, height: usize) -> RawHand {
        let (w, h) = (width.max(1) as f32, height.max(1) as f32);
        RawHand {
            landmarks: self
                .points()
                .into_iter()
                .map(|p| [(p.x as f32 + 0.5) / w, (p.y as f32 + 0.5) / h])
                .collect(),
        }
    }
}

/// Reports whatever pose it was last given, ignoring the image.
#[derive(Debug, Default)]
pub struct SimulatedTracker {
    pose: Option<HandPose>,
}

impl SimulatedTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_pose(&mut self, pose: Option<HandPose>) {
        self.pose = pose;
    }
}

impl HandTracker for SimulatedTracker {
    fn detect(&mut self, frame: &FrameBuffer) -> Result<Vec<RawHand>> {
        Ok(self.pose.iter().map(|p| p.to_raw(frame.width, frame.height)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::{INDEX_TIP, LandmarkAdapter, MIDDLE_TIP};

    #[test]
    fn pose_round_trips_through_the_adapter() {
        let pose = HandPose::new(Point::new(600, 60), [false, true, true, false, false], 90.0);
        let mut sim = SimulatedTracker::new();
        sim.set_pose(Some(pose));
        let mut adapter = LandmarkAdapter::new(sim, false);

        let mut frame = FrameBuffer::filled(1280, 720, 0);
        let lm = adapter.detect(&mut frame).unwrap();
        assert_eq!(lm, pose.to_frame());
        assert_eq!(lm.point(INDEX_TIP), Some(Point::new(600, 60)));
        assert_eq!(lm.point(MIDDLE_TIP), Some(Point::new(630, 60)));
        assert_eq!(lm.fingers(), Some(pose.fingers));
    }

    #[test]
    fn no_pose_means_no_hand() {
        let mut adapter = LandmarkAdapter::new(SimulatedTracker::new(), true);
        let mut frame = FrameBuffer::filled(64, 48, 0x336699);
        assert!(adapter.detect(&mut frame).unwrap().is_empty());
        assert!(frame.pixels.iter().all(|&p| p == 0x336699));
    }

    #[test]
    fn thumb_sits_at_the_pinch_distance() {
        let pose = HandPose::new(Point::new(400, 300), [true, true, false, false, false], 57.0);
        let lm = pose.to_frame();
        let d = lm.point(THUMB_TIP).unwrap().distance(lm.point(INDEX_TIP).unwrap());
        assert_eq!(d, 57.0);
    }
}
