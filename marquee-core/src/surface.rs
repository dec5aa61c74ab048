//! Row-bitmask pixel surfaces
//!
//! A surface stores one `u16` per row; bit `x` of row `y` is the pixel at
//! column `x`, set meaning lit. All values are logical: the active-low
//! inversion happens only when the refresh driver encodes a row for the
//! shift chain.

use crate::geometry::{Geometry, MAX_ROWS};
use crate::raster::Canvas;

/// Full set of row words, sized for the largest panel
pub type FrameRows = [u16; MAX_ROWS];

/// A geometry-sized 1bpp pixel grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surface {
    rows: FrameRows,
    geometry: Geometry,
}

impl Surface {
    /// Create a dark surface
    pub const fn new(geometry: Geometry) -> Self {
        Self {
            rows: [0; MAX_ROWS],
            geometry,
        }
    }

    pub const fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub const fn width(&self) -> i16 {
        self.geometry.cols() as i16
    }

    pub const fn height(&self) -> i16 {
        self.geometry.rows() as i16
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.rows = [0; MAX_ROWS];
    }

    /// Set one pixel
    ///
    /// Returns `true` when the coordinate is on the panel; off-panel writes
    /// are dropped.
    pub fn set_pixel(&mut self, x: i16, y: i16, on: bool) -> bool {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return false;
        }

        let mask = 1u16 << x;
        let row = &mut self.rows[y as usize];
        if on {
            *row |= mask;
        } else {
            *row &= !mask;
        }
        true
    }

    /// Read one pixel; off-panel reads are dark
    pub fn pixel(&self, x: i16, y: i16) -> bool {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return false;
        }
        self.rows[y as usize] & (1 << x) != 0
    }

    /// Row bitmask, or 0 past the last row
    pub fn row(&self, y: u8) -> u16 {
        if y >= self.geometry.rows() {
            return 0;
        }
        self.rows[y as usize]
    }

    /// Rows actually on the panel
    pub fn rows(&self) -> &[u16] {
        &self.rows[..self.geometry.rows() as usize]
    }

    /// All row words, including unused trailing rows
    pub const fn frame_rows(&self) -> &FrameRows {
        &self.rows
    }

    /// Replace contents from a full row set, masking to the panel width
    pub fn load(&mut self, rows: &FrameRows) {
        let mask = self.geometry.row_mask();
        let height = self.geometry.rows() as usize;
        for (i, (dst, src)) in self.rows.iter_mut().zip(rows.iter()).enumerate() {
            *dst = if i < height { src & mask } else { 0 };
        }
    }

    /// Number of lit pixels
    pub fn lit_count(&self) -> u32 {
        self.rows().iter().map(|r| r.count_ones()).sum()
    }
}

impl Canvas for Surface {
    fn plot(&mut self, x: i16, y: i16, on: bool) {
        self.set_pixel(x, y, on);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_maps_to_row_bit() {
        let mut s = Surface::new(Geometry::MATRIX_8X8);
        assert!(s.set_pixel(0, 0, true));
        assert!(s.set_pixel(7, 0, true));
        assert!(s.set_pixel(3, 5, true));

        assert_eq!(s.row(0), 0b1000_0001);
        assert_eq!(s.row(5), 0b0000_1000);
        assert!(s.pixel(3, 5));
        assert!(!s.pixel(4, 5));
        assert_eq!(s.lit_count(), 3);
    }

    #[test]
    fn test_clear_pixel() {
        let mut s = Surface::new(Geometry::MATRIX_16X16);
        s.set_pixel(15, 15, true);
        assert_eq!(s.row(15), 0x8000);
        s.set_pixel(15, 15, false);
        assert_eq!(s.row(15), 0);
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut s = Surface::new(Geometry::MATRIX_8X8);
        assert!(!s.set_pixel(-1, 0, true));
        assert!(!s.set_pixel(0, -1, true));
        assert!(!s.set_pixel(8, 0, true));
        assert!(!s.set_pixel(0, 8, true));
        assert_eq!(s.lit_count(), 0);
        assert!(!s.pixel(100, 100));
        assert_eq!(s.row(8), 0);
    }

    #[test]
    fn test_rows_slice_matches_geometry() {
        assert_eq!(Surface::new(Geometry::MATRIX_8X8).rows().len(), 8);
        assert_eq!(Surface::new(Geometry::MATRIX_16X16).rows().len(), 16);
    }

    #[test]
    fn test_load_masks_width_and_height() {
        let mut s = Surface::new(Geometry::MATRIX_8X8);
        let mut rows = [0xFFFFu16; MAX_ROWS];
        rows[1] = 0x0102;
        s.load(&rows);

        assert_eq!(s.row(0), 0x00FF);
        assert_eq!(s.row(1), 0x0002);
        assert_eq!(s.frame_rows()[8], 0);
        assert_eq!(s.lit_count(), 7 * 8 + 1);
    }
}
