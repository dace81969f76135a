//! Pinch-to-size: maps the thumb-to-cursor distance onto a stroke thickness.

use crate::palette::Tool;

/// Closed interval `[min, max]` of f32.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub min: f32,
    pub max: f32,
}

impl Range {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f32 {
        self.max - self.min
    }
}

/// Clamped linear interpolation of `v` from `from` onto `to`.
/// A degenerate input range maps everything to `to.min`.
pub fn interp(v: f32, from: Range, to: Range) -> f32 {
    let span = from.span();
    if span.abs() < f32::EPSILON || !v.is_finite() {
        return to.min;
    }
    let t = ((v - from.min) / span).clamp(0.0, 1.0);
    to.min + t * to.span()
}

pub struct StrokeSizer {
    input: Range,
    brush: Range,
    eraser: Range,
}

impl StrokeSizer {
    pub fn new(input: Range, brush: Range, eraser: Range) -> Self {
        Self { input, brush, eraser }
    }

    /// Thickness for `pinch` pixels, in the output range of `tool`.
    pub fn size(&self, pinch: f32, tool: Tool) -> u32 {
        let out = match tool {
            Tool::Brush(_) => self.brush,
            Tool::Eraser => self.eraser,
        };
        interp(pinch, self.input, out).round().max(1.0) as u32
    }
}
