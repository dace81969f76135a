use image::{Rgb, RgbImage};
use virtual_painter::canvas::Segment;
use virtual_painter::config::{BLUE, PINK, PainterConfig};
use virtual_painter::gesture::Mode;
use virtual_painter::landmarks::LandmarkFrame;
use virtual_painter::palette::{HeaderSet, Tool};
use virtual_painter::session::Session;
use virtual_painter::sim::HandPose;
use virtual_painter::types::{FrameBuffer, Point, rgb};

const W: usize = 1280;
const H: usize = 720;

const SELECT: [bool; 5] = [false, true, true, false, false];
const DRAW: [bool; 5] = [false, true, false, false, false];
const FIST: [bool; 5] = [false; 5];

// One solid thumbnail per palette entry, in palette order.
const THUMBS: [[u8; 3]; 4] = [[255, 0, 255], [0, 100, 255], [0, 255, 0], [40, 40, 40]];

fn session() -> Session {
    let cfg = PainterConfig::default();
    let imgs: Vec<RgbImage> = THUMBS.iter().map(|&c| RgbImage::from_pixel(320, 40, Rgb(c))).collect();
    let headers = HeaderSet::from_images(&imgs, W, cfg.header_height).unwrap();
    Session::new(&cfg, W, H, headers)
}

fn pose(fingers: [bool; 5], x: i32, y: i32) -> LandmarkFrame {
    HandPose::new(Point::new(x, y), fingers, 100.0).to_frame()
}

fn blank() -> FrameBuffer {
    FrameBuffer::filled(W, H, 0)
}

#[test]
fn selecting_blue_swaps_colour_and_header() {
    let mut s = session();
    let mut live = blank();
    let (out, report) = s.process(&mut live, &pose(SELECT, 600, 60)).unwrap();

    assert_eq!(report.mode, Mode::Selecting);
    assert_eq!(report.picked, Some(Tool::Brush(BLUE)));
    assert_eq!(s.tools().tool, Tool::Brush(BLUE));
    assert_eq!(s.headers().active_index(), 1);
    // The band now shows the blue thumbnail.
    assert_eq!(out.get(10, 10), Some(rgb(0, 100, 255)));
    assert_eq!(out.get(W - 1, 124), Some(rgb(0, 100, 255)));
}

#[test]
fn selecting_outside_every_region_changes_nothing() {
    let mut s = session();
    let mut live = blank();
    let before = *s.tools();
    for x in [100, 500, 1000, 1250] {
        s.step(&mut live, &LandmarkFrame::empty());
        let r = s.step(&mut live, &pose(SELECT, x, 60));
        assert_eq!(r.picked, None, "x = {x}");
    }
    assert_eq!(*s.tools(), before);
    assert_eq!(s.headers().active_index(), 0);
}

#[test]
fn five_drawing_frames_make_four_chained_segments() {
    let mut s = session();
    let mut live = blank();

    // Raw tips chosen so the moving average lands on 100, 110, ..., 140.
    let mut segments = Vec::new();
    let mut cursors = Vec::new();
    for raw_x in [100, 120, 140, 160, 180] {
        let r = s.step(&mut live, &pose(DRAW, raw_x, 100));
        assert_eq!(r.mode, Mode::Drawing);
        assert_eq!(r.cursor, s.cursor());
        cursors.push(r.cursor.unwrap());
        segments.extend(r.segment);
    }

    let xs: Vec<i32> = cursors.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![100, 110, 120, 130, 140]);

    let ends: Vec<(i32, i32)> = segments.iter().map(|seg: &Segment| (seg.from.x, seg.to.x)).collect();
    assert_eq!(ends, vec![(100, 110), (110, 120), (120, 130), (130, 140)]);
    assert!(segments.iter().all(|seg| seg.from.y == 100 && seg.to.y == 100 && seg.color == PINK));
    assert_eq!(s.canvas().segment_count(), 4);
}

#[test]
fn first_segment_joins_the_first_two_cursors() {
    // Same run, but checking the segment emitted on frame two.
    let mut s = session();
    let mut live = blank();
    assert_eq!(s.step(&mut live, &pose(DRAW, 100, 100)).segment, None);
    let seg = s.step(&mut live, &pose(DRAW, 120, 100)).segment.unwrap();
    assert_eq!((seg.from, seg.to), (Point::new(100, 100), Point::new(110, 100)));
}

#[test]
fn idle_between_strokes_starts_a_new_one() {
    let mut s = session();
    let mut live = blank();
    let frames = [
        (FIST, 300),
        (DRAW, 300),
        (DRAW, 300),
        (FIST, 300),
        (DRAW, 500),
        (DRAW, 500),
        (FIST, 500),
    ];
    let drew: Vec<bool> = frames
        .iter()
        .map(|&(f, x)| s.step(&mut live, &pose(f, x, 400)).segment.is_some())
        .collect();

    assert_eq!(drew, vec![false, false, true, false, false, true, false]);
    assert_eq!(s.anchor(), None);
    assert_eq!(s.mode(), Mode::Idle);
    assert_eq!(s.canvas().segment_count(), 2);
}

#[test]
fn partial_hand_is_idle() {
    let mut s = session();
    let mut live = blank();
    s.step(&mut live, &pose(DRAW, 300, 300));

    let partial = LandmarkFrame::from_points(pose(DRAW, 310, 300).landmarks().iter().take(12).map(|l| l.point()));
    let r = s.step(&mut live, &partial);
    assert_eq!(r.mode, Mode::Idle);
    assert_eq!(r.cursor, None);
    assert_eq!(s.anchor(), None);
}

#[test]
fn untouched_canvas_leaves_the_camera_alone() {
    let s = session();
    let camera = FrameBuffer::filled(W, H, 0x445566);
    let out = s.compose(&camera).unwrap();
    // Everything below the header is the live frame.
    assert!(out.pixels[125 * W..].iter().all(|&p| p == 0x445566));
}
