//! Panel geometry
//!
//! One build drives either supported panel. Everything that depends on the
//! panel size (row masks, shift word widths, text placement, blanking) is
//! derived from a `Geometry` value picked at startup.

/// Largest supported row count
pub const MAX_ROWS: usize = 16;

/// Largest supported column count (rows are `u16` bitmasks)
pub const MAX_COLS: usize = 16;

/// Physical panel layout and scan tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Geometry {
    rows: u8,
    cols: u8,
    /// Dark refresh ticks inserted before each row activation
    blank_cycles: u8,
    /// Text baseline distance from the bottom edge
    text_offset_y: u8,
    /// Left offset for static and overlay text
    static_x: u8,
}

impl Geometry {
    /// 8x8 panel; blanking limits ghosting on the brighter small matrix
    pub const MATRIX_8X8: Self = Self {
        rows: 8,
        cols: 8,
        blank_cycles: 2,
        text_offset_y: 2,
        static_x: 0,
    };

    /// 16x16 panel; no blanking, every tick drives a row
    pub const MATRIX_16X16: Self = Self {
        rows: 16,
        cols: 16,
        blank_cycles: 0,
        text_offset_y: 5,
        static_x: 3,
    };

    /// Look up a preset by size
    pub const fn from_size(rows: u8, cols: u8) -> Option<Self> {
        match (rows, cols) {
            (8, 8) => Some(Self::MATRIX_8X8),
            (16, 16) => Some(Self::MATRIX_16X16),
            _ => None,
        }
    }

    /// Override the inter-row blank cycle count
    pub const fn with_blank_cycles(mut self, blank_cycles: u8) -> Self {
        self.blank_cycles = blank_cycles;
        self
    }

    pub const fn rows(&self) -> u8 {
        self.rows
    }

    pub const fn cols(&self) -> u8 {
        self.cols
    }

    pub const fn blank_cycles(&self) -> u8 {
        self.blank_cycles
    }

    /// Mask covering the `cols` low bits of a row
    pub const fn row_mask(&self) -> u16 {
        if self.cols as usize >= MAX_COLS {
            u16::MAX
        } else {
            (1u16 << self.cols) - 1
        }
    }

    /// Mask covering one select line per row
    pub const fn select_mask(&self) -> u16 {
        if self.rows as usize >= MAX_ROWS {
            u16::MAX
        } else {
            (1u16 << self.rows) - 1
        }
    }

    /// Shift word width for row data
    pub const fn data_bits(&self) -> u8 {
        self.cols
    }

    /// Shift word width for row select
    pub const fn select_bits(&self) -> u8 {
        self.rows
    }

    /// Refresh ticks needed to scan every row once
    pub const fn ticks_per_frame(&self) -> u32 {
        self.rows as u32 * (1 + self.blank_cycles as u32)
    }

    /// Text baseline row
    pub const fn baseline_y(&self) -> i16 {
        self.rows as i16 - self.text_offset_y as i16
    }

    /// Left edge for static and overlay text
    pub const fn static_x(&self) -> i16 {
        self.static_x as i16
    }
}
