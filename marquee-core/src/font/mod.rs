//! Packed bitmap fonts
//!
//! Fonts use the Adafruit-GFX layout: a glyph table for a contiguous code
//! range plus one shared bitstream. A glyph's pixels start at its bit
//! offset and run row-major, MSB first, for `width * height` bits with no
//! padding between rows or glyphs.

mod fixed5x7;
mod tiny3x5;

pub use fixed5x7::FIXED_5X7;
pub use tiny3x5::TINY_3X5;

use crate::geometry::Geometry;

/// Metrics and bitstream position of one character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph {
    /// Character code
    pub code: u8,
    /// Bitmap width in pixels
    pub width: u8,
    /// Bitmap height in pixels
    pub height: u8,
    /// Horizontal offset from the cursor to the bitmap's left edge
    pub x_offset: i8,
    /// Vertical offset from the baseline to the bitmap's top edge
    pub y_offset: i8,
    /// Cursor advance after drawing
    pub x_advance: u8,
    /// First bit of this glyph in the shared bitstream
    pub bit_offset: u16,
}

impl Glyph {
    pub const fn new(
        code: u8,
        width: u8,
        height: u8,
        x_offset: i8,
        y_offset: i8,
        x_advance: u8,
        bit_offset: u16,
    ) -> Self {
        Self {
            code,
            width,
            height,
            x_offset,
            y_offset,
            x_advance,
            bit_offset,
        }
    }

    /// Number of bits this glyph occupies in the bitstream
    pub const fn bit_len(&self) -> u32 {
        self.width as u32 * self.height as u32
    }
}

/// Immutable compiled-in font
#[derive(Debug)]
pub struct Font {
    first: u8,
    last: u8,
    glyphs: &'static [Glyph],
    bitmap: &'static [u8],
    y_advance: u8,
}

impl Font {
    pub const fn new(
        first: u8,
        last: u8,
        glyphs: &'static [Glyph],
        bitmap: &'static [u8],
        y_advance: u8,
    ) -> Self {
        Self {
            first,
            last,
            glyphs,
            bitmap,
            y_advance,
        }
    }

    /// Font suited to a panel size
    pub fn for_geometry(geometry: &Geometry) -> &'static Font {
        if geometry.rows() >= 16 {
            &FIXED_5X7
        } else {
            &TINY_3X5
        }
    }

    pub const fn first(&self) -> u8 {
        self.first
    }

    pub const fn last(&self) -> u8 {
        self.last
    }

    /// Line height in pixels
    pub const fn y_advance(&self) -> u8 {
        self.y_advance
    }

    pub fn glyphs(&self) -> &'static [Glyph] {
        self.glyphs
    }

    /// Glyph for a character, if it lies in the font's range
    pub fn glyph(&self, c: char) -> Option<&'static Glyph> {
        let code = c as u32;
        if code < self.first as u32 || code > self.last as u32 {
            return None;
        }
        self.glyphs.get((code - self.first as u32) as usize)
    }

    /// Advance width of a character; 0 when the font has no glyph for it
    pub fn char_width(&self, c: char) -> u8 {
        self.glyph(c).map_or(0, |g| g.x_advance)
    }

    /// Sum of advance widths over a string
    pub fn text_width(&self, s: &str) -> u16 {
        s.chars().map(|c| self.char_width(c) as u16).sum()
    }

    /// Read one bit of the shared bitstream (MSB first within each byte)
    pub fn bit(&self, offset: u32) -> bool {
        let byte = (offset / 8) as usize;
        match self.bitmap.get(byte) {
            Some(b) => b & (0x80 >> (offset % 8)) != 0,
            None => false,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_fonts {
    //! Tiny hand-built fonts for exact-value tests

    use super::{Font, Glyph};

    static AB_GLYPHS: [Glyph; 2] = [
        // 'A': 5x7, all-zero bitmap
        Glyph::new(b'A', 5, 7, 0, -6, 6, 0),
        // 'B': 2x2 checker
        Glyph::new(b'B', 2, 2, 1, -1, 5, 35),
    ];

    // 35 zero bits for 'A', then 'B' = 1,0,0,1
    static AB_BITMAP: [u8; 5] = [0x00, 0x00, 0x00, 0x00, 0b0001_0010];

    /// Font covering 'A'..='B'
    pub static AB_FONT: Font = Font::new(b'A', b'B', &AB_GLYPHS, &AB_BITMAP, 8);
}

#[cfg(test)]
mod tests {
    use super::test_fonts::AB_FONT;
    use super::*;
    use proptest::prelude::*;

    fn check_layout(font: &Font) {
        let total_bits = font.bitmap.len() as u32 * 8;
        let mut next = 0u32;
        for (i, glyph) in font.glyphs().iter().enumerate() {
            assert_eq!(glyph.code as usize, font.first() as usize + i);
            // Glyphs are packed back to back with no padding
            assert_eq!(glyph.bit_offset as u32, next, "glyph {}", glyph.code);
            next += glyph.bit_len();
        }
        assert!(next <= total_bits);
        assert!(total_bits - next < 8);
    }

    #[test]
    fn test_builtin_font_layouts() {
        check_layout(&FIXED_5X7);
        check_layout(&TINY_3X5);
        assert_eq!(FIXED_5X7.glyphs().len(), 95);
        assert_eq!(TINY_3X5.glyphs().len(), 95);
    }

    #[test]
    fn test_fixed_font_has_fixed_advance() {
        for glyph in FIXED_5X7.glyphs() {
            assert_eq!(glyph.x_advance, 6);
            assert!(glyph.width <= 5 && glyph.height <= 7);
        }
    }

    #[test]
    fn test_missing_glyph_is_zero_width() {
        assert_eq!(FIXED_5X7.char_width('\u{7F}'), 0);
        assert_eq!(FIXED_5X7.char_width('\n'), 0);
        assert_eq!(TINY_3X5.char_width('é'), 0);
        assert!(FIXED_5X7.glyph('\u{1F600}').is_none());
    }

    #[test]
    fn test_text_width_sums_advances() {
        assert_eq!(AB_FONT.text_width("AB"), 11);
        assert_eq!(AB_FONT.text_width(""), 0);
        assert_eq!(AB_FONT.text_width("AxB"), 11);
        assert_eq!(FIXED_5X7.text_width("hello"), 30);
    }

    #[test]
    fn test_bit_reads_msb_first() {
        assert!(!AB_FONT.bit(0));
        assert!(AB_FONT.bit(35));
        assert!(!AB_FONT.bit(36));
        assert!(!AB_FONT.bit(37));
        assert!(AB_FONT.bit(38));
        // Past the end reads as unlit
        assert!(!AB_FONT.bit(10_000));
    }

    #[test]
    fn test_font_for_geometry() {
        assert!(core::ptr::eq(
            Font::for_geometry(&Geometry::MATRIX_16X16),
            &FIXED_5X7
        ));
        assert!(core::ptr::eq(
            Font::for_geometry(&Geometry::MATRIX_8X8),
            &TINY_3X5
        ));
    }

    proptest! {
        #[test]
        fn prop_text_width_is_sum_of_char_widths(s in "\\PC{0,40}") {
            let expected: u32 = s.chars().map(|c| TINY_3X5.char_width(c) as u32).sum();
            prop_assert_eq!(TINY_3X5.text_width(&s) as u32, expected);
        }
    }
}
