//! Glyph rasterizer
//!
//! Decodes packed glyph bitmaps into pixels on any [`Canvas`] and lays out
//! strings left to right. Clipping is the canvas's job: characters left of
//! the origin are still measured and still advance the cursor.

use crate::font::Font;

/// Plotting primitive used by the rasterizer
///
/// Implementations must drop out-of-bounds coordinates silently.
pub trait Canvas {
    fn plot(&mut self, x: i16, y: i16, on: bool);
}

/// Draws text in one font
#[derive(Debug, Clone, Copy)]
pub struct Rasterizer {
    font: &'static Font,
}

impl Rasterizer {
    pub const fn new(font: &'static Font) -> Self {
        Self { font }
    }

    pub const fn font(&self) -> &'static Font {
        self.font
    }

    /// Draw one character with its origin at `(x, y)` (y is the baseline)
    ///
    /// Returns the glyph's advance width, or 0 for characters the font does
    /// not cover. The advance is returned even when every pixel was clipped.
    pub fn draw_char<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        x: i16,
        y: i16,
        c: char,
        on: bool,
    ) -> u8 {
        let glyph = match self.font.glyph(c) {
            Some(g) => g,
            None => return 0,
        };

        let mut bit = glyph.bit_offset as u32;
        let left = x + glyph.x_offset as i16;
        let top = y + glyph.y_offset as i16;
        for row in 0..glyph.height as i16 {
            for col in 0..glyph.width as i16 {
                if self.font.bit(bit) {
                    canvas.plot(left + col, top + row, on);
                }
                bit += 1;
            }
        }

        glyph.x_advance
    }

    /// Draw a string starting at `(x, y)`
    ///
    /// Nothing is drawn when `y` lies outside `[0, max_y)`. Drawing stops
    /// once the cursor reaches `max_x`. Returns the final cursor position.
    pub fn draw_string<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        x: i16,
        y: i16,
        max_x: i16,
        max_y: i16,
        s: &str,
        on: bool,
    ) -> i16 {
        if y < 0 || y >= max_y {
            return x;
        }

        let mut cursor = x;
        for c in s.chars() {
            if cursor >= max_x {
                break;
            }
            let advance = self.draw_char(canvas, cursor, y, c, on);
            cursor = cursor.saturating_add(advance as i16);
        }
        cursor
    }
}
