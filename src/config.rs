// Fixed configuration constants for one painting session.
// Nothing here is read from a file; two env vars may override the
// header folder and camera index at startup.

use std::path::PathBuf;

use crate::palette::{PaletteEntry, Tool};
use crate::sizer::Range;
use crate::types::rgb;

pub const PINK: u32 = rgb(255, 0, 255);
pub const BLUE: u32 = rgb(0, 100, 255);
pub const GREEN: u32 = rgb(0, 255, 0);

#[derive(Clone, Debug)]
pub struct PainterConfig {
    pub camera_index: u32,
    pub frame_width: u32,
    pub frame_height: u32,
    pub mirror: bool,            // flip frames left/right before tracking
    pub header_dir: PathBuf,
    pub header_height: usize,    // rows at the top reserved for the palette
    pub smoothing_window: usize, // K: raw fingertip samples averaged per frame
    pub mask_threshold: u8,      // canvas pixels at or below this luma count as empty
    pub brush_thickness: u32,
    pub eraser_thickness: u32,
    pub pinch_range: Range,
    pub brush_range: Range,
    pub eraser_range: Range,
    pub show_landmarks: bool,
    pub palette: Vec<PaletteEntry>,
}

impl Default for PainterConfig {
    fn default() -> Self {
        Self {
            camera_index: 0,
            frame_width: 1280,
            frame_height: 720,
            mirror: true,
            header_dir: PathBuf::from("Header"),
            header_height: 125,
            smoothing_window: 10,
            mask_threshold: 50,
            brush_thickness: 15,
            eraser_thickness: 100,
            pinch_range: Range::new(30.0, 200.0),
            brush_range: Range::new(5.0, 50.0),
            eraser_range: Range::new(10.0, 150.0),
            show_landmarks: true,
            palette: vec![
                PaletteEntry::new("Pink", 250, 450, Tool::Brush(PINK), 0),
                PaletteEntry::new("Blue", 550, 750, Tool::Brush(BLUE), 1),
                PaletteEntry::new("Green", 800, 950, Tool::Brush(GREEN), 2),
                PaletteEntry::new("Eraser", 1050, 1200, Tool::Eraser, 3),
            ],
        }
    }
}

impl PainterConfig {
    /// Defaults, then `PAINTER_HEADER_DIR` / `PAINTER_CAMERA` if set.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(dir) = std::env::var("PAINTER_HEADER_DIR") {
            cfg.header_dir = PathBuf::from(dir);
        }
        if let Ok(idx) = std::env::var("PAINTER_CAMERA") {
            match idx.parse() {
                Ok(i) => cfg.camera_index = i,
                Err(_) => log::warn!("ignoring PAINTER_CAMERA={idx:?}: not a camera index"),
            }
        }
        cfg
    }

    /// The tool active before the user picks anything (first palette entry).
    pub fn initial_tool(&self) -> Tool {
        self.palette.first().map(|e| e.tool).unwrap_or(Tool::Brush(PINK))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_is_ordered_and_disjoint() {
        let cfg = PainterConfig::default();
        for pair in cfg.palette.windows(2) {
            assert!(pair[0].x_max <= pair[1].x_min);
        }
        assert_eq!(cfg.initial_tool(), Tool::Brush(PINK));
        assert!(cfg.palette.iter().any(|e| e.tool == Tool::Eraser));
    }
}
