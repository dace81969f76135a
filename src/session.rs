//! One painting session: every piece of per-session state plus the
//! per-frame pipeline that threads a [`LandmarkFrame`] through the
//! smoother, the gesture state machine, the sizer or the palette, and the
//! canvas.
//!
//! Mutation rights are split by component: only the canvas writes pixels
//! to the canvas, only the [`StrokeTracker`] moves the stroke anchor, only
//! the palette path changes the tool and header, and only the sizer path
//! changes thicknesses.

use log::debug;

use crate::canvas::{Canvas, Segment};
use crate::config::PainterConfig;
use crate::draw::{draw_circle, fill_circle, fill_rect};
use crate::error::Result;
use crate::gesture::{Mode, StrokeAction, StrokeTracker, classify};
use crate::landmarks::{INDEX_TIP, LandmarkFrame, MIDDLE_TIP, THUMB_TIP};
use crate::palette::{HeaderSet, PaletteSelector, Tool};
use crate::sizer::StrokeSizer;
use crate::smoother::CursorSmoother;
use crate::types::{FrameBuffer, Point};

/// Vertical padding of the selection preview around the two fingertips.
const SELECT_PREVIEW_PAD: i32 = 25;
const ERASER_RING: u32 = 0x00FF_FFFF;

/// Active tool plus the two independently remembered thicknesses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToolState {
    pub tool: Tool,
    pub brush_thickness: u32,
    pub eraser_thickness: u32,
}

impl ToolState {
    /// Thickness that applies to the active tool.
    pub fn thickness(&self) -> u32 {
        match self.tool {
            Tool::Brush(_) => self.brush_thickness,
            Tool::Eraser => self.eraser_thickness,
        }
    }

    fn set_thickness(&mut self, t: u32) {
        match self.tool {
            Tool::Brush(_) => self.brush_thickness = t,
            Tool::Eraser => self.eraser_thickness = t,
        }
    }
}

/// What happened during one [`Session::step`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameReport {
    pub mode: Mode,
    pub cursor: Option<Point>,
    pub segment: Option<Segment>,
    pub picked: Option<Tool>,
}

pub struct Session {
    smoother: CursorSmoother,
    stroke: StrokeTracker,
    sizer: StrokeSizer,
    palette: PaletteSelector,
    headers: HeaderSet,
    canvas: Canvas,
    tools: ToolState,
}

impl Session {
    /// A fresh session for `width` x `height` frames.
    pub fn new(cfg: &PainterConfig, width: usize, height: usize, headers: HeaderSet) -> Self {
        Self {
            smoother: CursorSmoother::new(cfg.smoothing_window),
            stroke: StrokeTracker::new(),
            sizer: StrokeSizer::new(cfg.pinch_range, cfg.brush_range, cfg.eraser_range),
            palette: PaletteSelector::new(cfg.palette.clone(), cfg.header_height),
            headers,
            canvas: Canvas::new(width, height, cfg.mask_threshold),
            tools: ToolState {
                tool: cfg.initial_tool(),
                brush_thickness: cfg.brush_thickness,
                eraser_thickness: cfg.eraser_thickness,
            },
        }
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn headers(&self) -> &HeaderSet {
        &self.headers
    }

    pub fn mode(&self) -> Mode {
        self.stroke.mode()
    }

    pub fn anchor(&self) -> Option<Point> {
        self.stroke.anchor()
    }

    pub fn cursor(&self) -> Option<Point> {
        self.smoother.current()
    }

    pub fn clear_canvas(&mut self) {
        debug!("canvas cleared ({} segments)", self.canvas.segment_count());
        self.canvas.clear();
    }

    /// Advance all state by one frame. Previews (selection rectangle,
    /// brush disc, eraser ring) are drawn onto `live`; strokes go to the
    /// canvas.
    pub fn step(&mut self, live: &mut FrameBuffer, hand: &LandmarkFrame) -> FrameReport {
        let (Some(fingers), Some(tip)) = (hand.fingers(), hand.point(INDEX_TIP)) else {
            self.smoother.reset();
            self.stroke.advance(Mode::Idle, None);
            return FrameReport::default();
        };

        let cursor = self.smoother.update(tip);
        let mut report = FrameReport { cursor: Some(cursor), ..FrameReport::default() };

        match self.stroke.advance(classify(Some(fingers)), Some(cursor)) {
            StrokeAction::Rest => {
                self.smoother.reset();
                report.cursor = None;
            }
            StrokeAction::Select => {
                report.picked = self.select(cursor);
                if let Some(middle) = hand.point(MIDDLE_TIP) {
                    fill_rect(
                        live,
                        Point::new(cursor.x, cursor.y - SELECT_PREVIEW_PAD),
                        Point::new(middle.x, middle.y + SELECT_PREVIEW_PAD),
                        self.tools.tool.paint_color(),
                    );
                }
            }
            StrokeAction::Begin(at) => {
                self.resize(hand, at);
                self.preview_brush(live, at);
            }
            StrokeAction::Continue { from, to } => {
                self.resize(hand, to);
                self.preview_brush(live, to);
                let seg = Segment {
                    from,
                    to,
                    color: self.tools.tool.paint_color(),
                    thickness: self.tools.thickness(),
                };
                self.canvas.draw_segment(seg);
                report.segment = Some(seg);
            }
        }

        report.mode = self.stroke.mode();
        report
    }

    /// Merge the canvas with `live` and lay the active header over the band.
    pub fn compose(&self, live: &FrameBuffer) -> Result<FrameBuffer> {
        self.canvas.compose(live, self.headers.active())
    }

    /// [`step`](Self::step) followed by [`compose`](Self::compose).
    pub fn process(&mut self, live: &mut FrameBuffer, hand: &LandmarkFrame) -> Result<(FrameBuffer, FrameReport)> {
        let report = self.step(live, hand);
        Ok((self.compose(live)?, report))
    }

    fn select(&mut self, cursor: Point) -> Option<Tool> {
        let entry = self.palette.select(cursor)?;
        if entry.tool != self.tools.tool {
            debug!("picked {} at ({}, {})", entry.name, cursor.x, cursor.y);
        }
        self.tools.tool = entry.tool;
        self.headers.set_active(entry.header);
        Some(entry.tool)
    }

    fn resize(&mut self, hand: &LandmarkFrame, cursor: Point) {
        if let Some(thumb) = hand.point(THUMB_TIP) {
            let t = self.sizer.size(thumb.distance(cursor), self.tools.tool);
            self.tools.set_thickness(t);
        }
    }

    fn preview_brush(&self, live: &mut FrameBuffer, at: Point) {
        let radius = (self.tools.thickness() / 2) as i32;
        match self.tools.tool {
            Tool::Brush(c) => fill_circle(live, at, radius, c),
            Tool::Eraser => draw_circle(live, at, radius, 2, ERASER_RING),
        }
    }
}
