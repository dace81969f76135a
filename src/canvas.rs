// Canvas Compositor.
// Owns the persistent stroke raster and merges it with each live frame:
// canvas pixels darker than the mask threshold let the camera through,
// everything else is drawn on top. Then the header thumbnail covers the
// top band.

use crate::draw::{blit_rows, draw_thick_line};
use crate::error::{Error, Result};
use crate::types::{Color, FrameBuffer, Point, luminance};

/// One segment appended to the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub color: Color,
    pub thickness: u32,
}

pub struct Canvas {
    buf: FrameBuffer,
    threshold: u8,
    segments: usize,
}

impl Canvas {
    /// Blank (all black) canvas the size of the video frame.
    pub fn new(width: usize, height: usize, threshold: u8) -> Self {
        Self { buf: FrameBuffer::filled(width, height, 0), threshold, segments: 0 }
    }

    /// Segments drawn since the canvas was created or last cleared.
    pub fn segment_count(&self) -> usize {
        self.segments
    }

    /// Append a stroke segment. There is no undo.
    pub fn draw_segment(&mut self, seg: Segment) {
        draw_thick_line(&mut self.buf, seg.from, seg.to, seg.thickness, seg.color);
        self.segments += 1;
    }

    /// Wipe every stroke. Only ever called on an explicit user request.
    pub fn clear(&mut self) {
        self.buf.pixels.fill(0);
        self.segments = 0;
    }

    /// True where the canvas pixel is bright enough to hide the camera.
    #[inline]
    pub fn is_drawn(&self, c: Color) -> bool {
        luminance(c) > self.threshold
    }

    /// Merge the canvas into `live` in place:
    /// `(live & !mask) | canvas`, where mask is all-ones on drawn pixels.
    pub fn compose_into(&self, live: &mut FrameBuffer) -> Result<()> {
        if !live.same_size(&self.buf) {
            return Err(Error::FrameSize(format!(
                "canvas {}x{} vs frame {}x{}",
                self.buf.width, self.buf.height, live.width, live.height
            )));
        }
        for (out, &c) in live.pixels.iter_mut().zip(&self.buf.pixels) {
            let keep = if self.is_drawn(c) { 0 } else { 0x00FF_FFFF };
            *out = (*out & keep) | c;
        }
        Ok(())
    }

    /// Compose and then overlay `header` over the top rows.
    pub fn compose(&self, live: &FrameBuffer, header: &FrameBuffer) -> Result<FrameBuffer> {
        let mut out = live.clone();
        self.compose_into(&mut out)?;
        blit_rows(&mut out, header, 0);
        Ok(out)
    }
}
