//! Palette / tool selection and the header thumbnails that go with it.
//!
//! The header band is a fixed strip at the top of the frame. Each palette
//! entry owns a horizontal pixel span of that strip; hovering the cursor
//! inside a span while in selection mode picks the entry's tool and
//! swaps the header thumbnail.

use std::fs;
use std::path::Path;

use image::RgbImage;
use image::imageops::{self, FilterType};
use log::{info, warn};

use crate::error::{Error, Result};
use crate::types::{Color, FrameBuffer, Point};

/// What a stroke does to the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tool {
    Brush(Color),
    Eraser,
}

impl Tool {
    /// Colour written into the canvas. Eraser strokes write black, which
    /// the compositor treats as empty.
    pub fn paint_color(self) -> Color {
        match self {
            Tool::Brush(c) => c,
            Tool::Eraser => 0x000000,
        }
    }

    pub fn is_eraser(self) -> bool {
        matches!(self, Tool::Eraser)
    }

    pub fn label(self) -> &'static str {
        match self {
            Tool::Brush(_) => "BRUSH",
            Tool::Eraser => "ERASER",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub x_min: i32, // exclusive
    pub x_max: i32, // exclusive
    pub tool: Tool,
    pub header: usize, // index into the HeaderSet
}

impl PaletteEntry {
    pub fn new(name: &'static str, x_min: i32, x_max: i32, tool: Tool, header: usize) -> Self {
        Self { name, x_min, x_max, tool, header }
    }

    /// Strictly inside the span.
    pub fn contains_x(&self, x: i32) -> bool {
        self.x_min < x && x < self.x_max
    }
}

/// Header thumbnails, already resized to the band so overlaying is a copy.
pub struct HeaderSet {
    frames: Vec<FrameBuffer>,
    active: usize,
}

impl HeaderSet {
    /// Hard-resize every image to `width` x `height` (aspect ignored).
    /// At least one image is required.
    pub fn from_images(images: &[RgbImage], width: usize, height: usize) -> Result<Self> {
        if images.is_empty() {
            return Err(Error::Assets("no header images to choose from".into()));
        }
        let frames = images
            .iter()
            .map(|img| {
                let resized = imageops::resize(img, width as u32, height as u32, FilterType::Triangle);
                FrameBuffer::from(&resized)
            })
            .collect();
        Ok(Self { frames, active: 0 })
    }

    /// Load every decodable image in `dir`, in sorted filename order.
    /// Unreadable files are skipped; an empty result is an error.
    pub fn load_dir(dir: &Path, width: usize, height: usize) -> Result<Self> {
        let entries = fs::read_dir(dir)
            .map_err(|e| Error::Assets(format!("Read folder {}: {e}", dir.display())))?;
        let mut paths: Vec<_> = entries
            .filter_map(|e| e.ok().map(|e| e.path()))
            .filter(|p| p.is_file())
            .collect();
        paths.sort();

        let mut images = Vec::with_capacity(paths.len());
        for path in &paths {
            match image::open(path) {
                Ok(img) => images.push(img.to_rgb8()),
                Err(e) => warn!("skipping header {}: {e}", path.display()),
            }
        }
        info!("loaded {} header image(s) from {}", images.len(), dir.display());
        Self::from_images(&images, width, height)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> &FrameBuffer {
        &self.frames[self.active]
    }

    /// Swap to thumbnail `idx`; out-of-range indices clamp to the last one.
    pub fn set_active(&mut self, idx: usize) {
        self.active = idx.min(self.frames.len() - 1);
    }
}

/// Hit-tests the cursor against the header band.
pub struct PaletteSelector {
    entries: Vec<PaletteEntry>,
    band_height: i32,
}

impl PaletteSelector {
    pub fn new(entries: Vec<PaletteEntry>, band_height: usize) -> Self {
        Self { entries, band_height: band_height as i32 }
    }

    /// The first entry whose span holds `cursor`, if the cursor is in the band.
    pub fn select(&self, cursor: Point) -> Option<&PaletteEntry> {
        if cursor.y >= self.band_height {
            return None;
        }
        self.entries.iter().find(|e| e.contains_x(cursor.x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BLUE, PainterConfig};

    fn selector() -> PaletteSelector {
        PaletteSelector::new(PainterConfig::default().palette, 125)
    }

    #[test]
    fn picks_the_bound_entry() {
        let s = selector();
        let hit = s.select(Point::new(600, 60)).unwrap();
        assert_eq!(hit.tool, Tool::Brush(BLUE));
        assert_eq!(hit.header, 1);
        assert_eq!(s.select(Point::new(1100, 10)).unwrap().tool, Tool::Eraser);
    }

    #[test]
    fn misses_gaps_edges_and_below_band() {
        let s = selector();
        assert!(s.select(Point::new(500, 60)).is_none()); // gap
        assert!(s.select(Point::new(550, 60)).is_none()); // edge is exclusive
        assert!(s.select(Point::new(600, 125)).is_none()); // first row below band
        assert!(s.select(Point::new(600, 400)).is_none());
    }

    #[test]
    fn headers_are_hard_resized_to_the_band() {
        let imgs = vec![
            RgbImage::from_pixel(64, 10, image::Rgb([255, 0, 255])),
            RgbImage::from_pixel(3, 7, image::Rgb([0, 100, 255])),
        ];
        let mut set = HeaderSet::from_images(&imgs, 200, 25).unwrap();
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
        assert_eq!((set.active().width, set.active().height), (200, 25));
        assert_eq!(set.active().get(100, 12), Some(0xFF00FF));

        set.set_active(1);
        assert_eq!(set.active().get(0, 0), Some(BLUE));
        set.set_active(9);
        assert_eq!(set.active_index(), 1);
    }

    #[test]
    fn empty_asset_set_is_fatal() {
        assert!(matches!(HeaderSet::from_images(&[], 10, 10), Err(Error::Assets(_))));
    }

    #[test]
    fn eraser_paints_black() {
        assert_eq!(Tool::Eraser.paint_color(), 0);
        assert_eq!(Tool::Brush(BLUE).paint_color(), BLUE);
        assert!(!Tool::Brush(0).is_eraser());
    }
}
