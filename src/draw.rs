// Window + software drawing utilities.
// Visual effects provided here:
// 1) A window that shows the composed painter frame.
// 2) Raster primitives for strokes, previews and the hand skeleton.
// 3) A tiny 5x7 bitmap font to render HUD text on top of the video.

use crate::error::Error;
use crate::types::{Color, FrameBuffer, Point};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a window sized to the camera feed.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// Q or ESC ends the session.
    pub fn quit_pressed(&self) -> bool {
        self.window.is_key_down(Key::Q) || self.window.is_key_down(Key::Escape)
    }

    /// C wipes the canvas (one shot per press).
    pub fn clear_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::C, KeyRepeat::No)
    }

    /// Current mouse position in window pixel coordinates (clamped to the window).
    pub fn mouse_pos(&self) -> Option<(usize, usize)> {
        self.window
            .get_mouse_pos(MouseMode::Clamp)
            .map(|(x, y)| (x.max(0.0) as usize, y.max(0.0) as usize))
    }

    /// Simulated "index finger up": D held or left mouse.
    pub fn draw_pose_held(&self) -> bool {
        self.window.is_key_down(Key::D) || self.window.get_mouse_down(MouseButton::Left)
    }

    /// Simulated "index + middle up": S held or right mouse.
    pub fn select_pose_held(&self) -> bool {
        self.window.is_key_down(Key::S) || self.window.get_mouse_down(MouseButton::Right)
    }

    /// Pinch adjustment this frame: wheel ticks plus `[` / `]`.
    pub fn pinch_delta(&self) -> f32 {
        let wheel = self.window.get_scroll_wheel().map(|(_, dy)| dy).unwrap_or(0.0);
        let mut keys = 0.0;
        if self.window.is_key_down(Key::LeftBracket) { keys -= 4.0; }
        if self.window.is_key_down(Key::RightBracket) { keys += 4.0; }
        wheel * 10.0 + keys
    }
}

/* ---------- Software drawing: pixels, lines, discs, rectangles ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
pub fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: Color) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Thin 1-pixel line from `a` to `b` using Bresenham.
pub fn draw_line(fb: &mut FrameBuffer, a: Point, b: Point, color: Color) {
    let (mut x0, mut y0, x1, y1) = (a.x, a.y, b.x, b.y);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        put_pixel(fb, x0, y0, color);
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
}

/// Line `thickness` pixels wide with round caps: every pixel whose centre
/// lies within thickness/2 of the segment gets `color`.
pub fn draw_thick_line(fb: &mut FrameBuffer, a: Point, b: Point, thickness: u32, color: Color) {
    if thickness <= 1 {
        draw_line(fb, a, b, color);
        return;
    }
    let r = thickness as f32 / 2.0;
    let r2 = r * r;
    let pad = r.ceil() as i32;

    // Clip the bounding box to the frame up front.
    let x_lo = (a.x.min(b.x) - pad).max(0);
    let y_lo = (a.y.min(b.y) - pad).max(0);
    let x_hi = (a.x.max(b.x) + pad).min(fb.width as i32 - 1);
    let y_hi = (a.y.max(b.y) + pad).min(fb.height as i32 - 1);

    let (ax, ay) = (a.x as f32, a.y as f32);
    let (vx, vy) = ((b.x - a.x) as f32, (b.y - a.y) as f32);
    let len2 = vx * vx + vy * vy;

    for y in y_lo..=y_hi {
        for x in x_lo..=x_hi {
            let (px, py) = (x as f32 - ax, y as f32 - ay);
            let t = if len2 > 0.0 { ((px * vx + py * vy) / len2).clamp(0.0, 1.0) } else { 0.0 };
            let (ex, ey) = (px - t * vx, py - t * vy);
            if ex * ex + ey * ey <= r2 {
                fb.pixels[y as usize * fb.width + x as usize] = color;
            }
        }
    }
}

/// Solid disc centred at `c`.
pub fn fill_circle(fb: &mut FrameBuffer, c: Point, radius: i32, color: Color) {
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                put_pixel(fb, c.x + dx, c.y + dy, color);
            }
        }
    }
}

/// Ring of width `stroke` whose outer edge sits at `radius`.
pub fn draw_circle(fb: &mut FrameBuffer, c: Point, radius: i32, stroke: i32, color: Color) {
    let outer = radius * radius;
    let inner_r = (radius - stroke).max(0);
    let inner = inner_r * inner_r;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let d2 = dx * dx + dy * dy;
            if d2 <= outer && d2 > inner {
                put_pixel(fb, c.x + dx, c.y + dy, color);
            }
        }
    }
}

/// Filled axis-aligned rectangle between two opposite corners (any order).
pub fn fill_rect(fb: &mut FrameBuffer, a: Point, b: Point, color: Color) {
    let x_lo = a.x.min(b.x).max(0);
    let y_lo = a.y.min(b.y).max(0);
    let x_hi = a.x.max(b.x).min(fb.width as i32 - 1);
    let y_hi = a.y.max(b.y).min(fb.height as i32 - 1);
    for y in y_lo..=y_hi {
        let row = y as usize * fb.width;
        for x in x_lo..=x_hi {
            fb.pixels[row + x as usize] = color;
        }
    }
}

/// Copy `src` onto `dst` with its top-left corner at row `top`, clipped.
pub fn blit_rows(dst: &mut FrameBuffer, src: &FrameBuffer, top: usize) {
    let w = src.width.min(dst.width);
    for sy in 0..src.height {
        let dy = top + sy;
        if dy >= dst.height { break; }
        let s = sy * src.width;
        let d = dy * dst.width;
        dst.pixels[d..d + w].copy_from_slice(&src.pixels[s..s + w]);
    }
}

/* ---------- 5x7 bitmap font (ASCII subset for the HUD line) ---------- */

/// Return a 5x7 glyph bitmap for a limited character set.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch.to_ascii_uppercase() {
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        // Letters for IDLE / SELECT / DRAW / BRUSH / ERASER / FPS
        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'B' => g!(0b11110,0b10001,0b10001,0b11110,0b10001,0b10001,0b11110),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'H' => g!(0b10001,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),

        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),

        _ => None,
    }
}

/// Draw a single 5x7 character at (x,y) with a 1-pixel black shadow.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: Color) {
    if let Some(rows) = glyph5x7(ch) {
        for (shift, c) in [(1, 0x00000000), (0, color)] {
            for (ry, rowbits) in rows.iter().enumerate() {
                for rx in 0..5 {
                    if (rowbits & (1 << (4 - rx))) != 0 {
                        put_pixel(fb, x + rx + shift, y + ry as i32 + shift, c);
                    }
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs; unknown characters leave a gap.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: Color) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color);
        x += 6; // 5 pixels glyph width + 1 pixel spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(fb: &FrameBuffer, color: Color) -> usize {
        fb.pixels.iter().filter(|&&p| p == color).count()
    }

    #[test]
    fn thick_line_covers_its_width() {
        let mut fb = FrameBuffer::filled(100, 100, 0);
        draw_thick_line(&mut fb, Point::new(20, 50), Point::new(80, 50), 10, 0xFF);
        assert_eq!(fb.get(50, 50), Some(0xFF));
        assert_eq!(fb.get(50, 45), Some(0xFF));
        assert_eq!(fb.get(50, 55), Some(0xFF));
        assert_eq!(fb.get(50, 57), Some(0));
        // Round cap past the end point.
        assert_eq!(fb.get(84, 50), Some(0xFF));
        assert_eq!(fb.get(90, 50), Some(0));
    }

    #[test]
    fn shapes_clip_at_the_border() {
        let mut fb = FrameBuffer::filled(10, 10, 0);
        fill_rect(&mut fb, Point::new(-5, -5), Point::new(2, 2), 1);
        assert_eq!(count(&fb, 1), 9);
        draw_thick_line(&mut fb, Point::new(-20, 5), Point::new(30, 5), 3, 2);
        fill_circle(&mut fb, Point::new(9, 9), 4, 3);
        assert_eq!(fb.pixels.len(), 100);
    }

    #[test]
    fn ring_leaves_centre_untouched() {
        let mut fb = FrameBuffer::filled(40, 40, 0);
        draw_circle(&mut fb, Point::new(20, 20), 10, 2, 0xFFFFFF);
        assert_eq!(fb.get(20, 20), Some(0));
        assert_eq!(fb.get(30, 20), Some(0xFFFFFF));
    }

    #[test]
    fn blit_copies_rows_from_the_top() {
        let mut dst = FrameBuffer::filled(4, 4, 0);
        let src = FrameBuffer::filled(4, 2, 7);
        blit_rows(&mut dst, &src, 0);
        assert_eq!(count(&dst, 7), 8);
        assert_eq!(dst.get(0, 2), Some(0));
    }
}
