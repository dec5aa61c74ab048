//! Pre-baked scroll animation
//!
//! A pattern is a set of per-row bitmasks wider than the panel. Rotating
//! every row left by a shared index, then keeping the low `cols` bits,
//! scrolls the image horizontally forever with O(1) work per row.
//!
//! Patterns are stored with `0 = lit` and are inverted on read, so every
//! value leaving this module is logical (`1 = lit`).

use crate::geometry::Geometry;

/// Widest supported pattern
pub const MAX_SCROLL_WIDTH: u8 = 32;

/// A looping image wider than the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollPattern {
    rows: &'static [u32],
    width: u8,
}

impl ScrollPattern {
    /// Build a pattern from stored (`0 = lit`) rows
    ///
    /// `width` is clamped to `1..=32`.
    pub const fn new(rows: &'static [u32], width: u8) -> Self {
        let width = if width == 0 {
            1
        } else if width > MAX_SCROLL_WIDTH {
            MAX_SCROLL_WIDTH
        } else {
            width
        };
        Self { rows, width }
    }

    /// Scroll width in pixels
    pub const fn width(&self) -> u8 {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.rows.len()
    }

    fn field_mask(&self) -> u64 {
        (1u64 << self.width) - 1
    }

    /// Logical row bits, unrotated
    pub fn lit_row(&self, row: u8) -> u64 {
        match self.rows.get(row as usize) {
            Some(&stored) => !(stored as u64) & self.field_mask(),
            None => 0,
        }
    }
}

/// Smiley followed by a heart
pub static SMILEY_8X8: ScrollPattern = ScrollPattern::new(
    &[
        0xFFFF_FFFF,
        0xFFFF_99FF,
        0xDBFF_00FF,
        0xFFFF_00FF,
        0xFFFF_81FF,
        0xDBFF_C3FF,
        0xE7FF_E7FF,
        0xFFFF_FFFF,
    ],
    32,
);

/// One period of a sine wave
pub static WAVE_16X16: ScrollPattern = ScrollPattern::new(
    &[
        0xFFFF_FFFF,
        0xFFFF_FFFF,
        0xFFFF_F83F,
        0xFFFF_E7CF,
        0xFFFF_DFF7,
        0xFFFF_BFFB,
        0xFFFF_7FFD,
        0xFFFE_FFFF,
        0xFFFF_FFFE,
        0x7FFD_FFFF,
        0xBFFB_FFFF,
        0xDFF7_FFFF,
        0xE7CF_FFFF,
        0xF93F_FFFF,
        0xFEFF_FFFF,
        0xFFFF_FFFF,
    ],
    32,
);

/// Rotating view of a pattern through a panel-sized window
#[derive(Debug, Clone, Copy)]
pub struct AnimationSource {
    pattern: &'static ScrollPattern,
    index: u8,
    row_mask: u16,
}

impl AnimationSource {
    pub const fn new(pattern: &'static ScrollPattern, geometry: &Geometry) -> Self {
        Self {
            pattern,
            index: 0,
            row_mask: geometry.row_mask(),
        }
    }

    /// Built-in pattern for a panel size
    pub fn for_geometry(geometry: &Geometry) -> Self {
        let pattern = if geometry.rows() >= 16 {
            &WAVE_16X16
        } else {
            &SMILEY_8X8
        };
        Self::new(pattern, geometry)
    }

    pub const fn pattern(&self) -> &'static ScrollPattern {
        self.pattern
    }

    pub const fn index(&self) -> u8 {
        self.index
    }

    /// Jump to a rotation index (reduced modulo the scroll width)
    pub fn set_index(&mut self, index: u8) {
        self.index = index % self.pattern.width();
    }

    /// Step the rotation one pixel
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.pattern.width();
    }

    /// Logical bits shown on one panel row at the current index
    pub fn visible_row(&self, row: u8) -> u16 {
        let width = self.pattern.width() as u32;
        let idx = self.index as u32 % width;
        let bits = self.pattern.lit_row(row);

        let rotated = if idx == 0 {
            bits
        } else {
            ((bits << idx) | (bits >> (width - idx))) & self.pattern.field_mask()
        };
        (rotated as u16) & self.row_mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    static SINGLE_DOT: ScrollPattern = ScrollPattern::new(&[!0x4], 32);

    #[test]
    fn test_advance_and_rotate_wraps_field() {
        let mut anim = AnimationSource::new(&SINGLE_DOT, &Geometry::MATRIX_8X8);
        anim.set_index(29);
        anim.advance();
        assert_eq!(anim.index(), 30);
        // Bit 2 rotated left by 30 in a 32-bit field lands on bit 0
        assert_eq!(anim.visible_row(0), 0x01);
    }

    #[test]
    fn test_index_zero_is_unrotated() {
        let anim = AnimationSource::new(&SMILEY_8X8, &Geometry::MATRIX_8X8);
        for row in 0..8u8 {
            let expected = (!SMILEY_8X8.rows[row as usize] & 0xFF) as u16;
            assert_eq!(anim.visible_row(row), expected);
        }
        // Heart top row at index 0
        assert_eq!(anim.visible_row(1), 0x00);
        assert_eq!(anim.visible_row(2), 0x00);
    }

    #[test]
    fn test_smiley_scrolls_into_view() {
        let mut anim = AnimationSource::new(&SMILEY_8X8, &Geometry::MATRIX_8X8);
        // Heart occupies bits 8..16; rotating left by 24 brings it to 0..8
        anim.set_index(24);
        assert_eq!(anim.visible_row(1), 0x66);
        assert_eq!(anim.visible_row(2), 0xFF);
        assert_eq!(anim.visible_row(6), 0x18);
    }

    #[test]
    fn test_rows_past_pattern_are_dark() {
        let anim = AnimationSource::new(&SMILEY_8X8, &Geometry::MATRIX_8X8);
        assert_eq!(anim.visible_row(12), 0);
    }

    #[test]
    fn test_wave_has_one_dot_per_column() {
        let mut anim = AnimationSource::new(&WAVE_16X16, &Geometry::MATRIX_16X16);
        for index in 0..32 {
            anim.set_index(index);
            let mut union = 0u16;
            let mut total = 0;
            for row in 0..16 {
                let bits = anim.visible_row(row);
                assert_eq!(union & bits, 0);
                union |= bits;
                total += bits.count_ones();
            }
            assert_eq!(union, 0xFFFF);
            assert_eq!(total, 16);
        }
    }

    #[test]
    fn test_pattern_for_geometry() {
        let small = AnimationSource::for_geometry(&Geometry::MATRIX_8X8);
        let large = AnimationSource::for_geometry(&Geometry::MATRIX_16X16);
        assert_eq!(small.pattern(), &SMILEY_8X8);
        assert_eq!(large.pattern(), &WAVE_16X16);
    }

    proptest! {
        #[test]
        fn prop_advance_is_modulo_width(start in 0u8..32, steps in 0usize..200) {
            let mut anim = AnimationSource::new(&WAVE_16X16, &Geometry::MATRIX_16X16);
            anim.set_index(start);
            for _ in 0..steps {
                anim.advance();
            }
            prop_assert_eq!(anim.index() as usize, (start as usize + steps) % 32);
        }

        #[test]
        fn prop_full_turn_is_identity(row in 0u8..8, index in 0u8..32) {
            let mut anim = AnimationSource::new(&SMILEY_8X8, &Geometry::MATRIX_8X8);
            anim.set_index(index);
            let before = anim.visible_row(row);
            for _ in 0..32 {
                anim.advance();
            }
            prop_assert_eq!(anim.visible_row(row), before);
        }
    }
}
