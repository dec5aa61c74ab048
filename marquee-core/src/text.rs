//! Text producers
//!
//! - [`TextScroller`]: moves a message right to left one pixel per tick, looping
//! - [`StaticText`]: draws a message once at a fixed offset, only when it changed
//! - [`TempOverlay`]: a timed message that preempts either of the above

use marquee_protocol::MessageText;

use crate::font::Font;
use crate::geometry::Geometry;
use crate::raster::Rasterizer;
use crate::surface::Surface;

/// Bounded message text with its cached pixel width
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    text: MessageText,
    width: u16,
}

impl Message {
    /// Build a message, truncating to capacity at a character boundary
    pub fn new(text: &str, font: &Font) -> Self {
        let mut stored = MessageText::new();
        for c in text.chars() {
            if stored.push(c).is_err() {
                break;
            }
        }
        let width = font.text_width(&stored);
        Self {
            text: stored,
            width,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Pixel width (sum of glyph advances)
    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Continuously looping right-to-left scroll
#[derive(Debug, Clone)]
pub struct TextScroller {
    raster: Rasterizer,
    geometry: Geometry,
    message: Message,
    cursor: i16,
}

impl TextScroller {
    pub fn new(font: &'static Font, geometry: Geometry) -> Self {
        Self {
            raster: Rasterizer::new(font),
            geometry,
            message: Message::default(),
            cursor: geometry.cols() as i16,
        }
    }

    /// Replace the message and restart from the right edge
    pub fn set_message(&mut self, text: &str) {
        self.message = Message::new(text, self.raster.font());
        self.cursor = self.geometry.cols() as i16;
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    /// Left edge of the message in panel columns
    pub fn cursor(&self) -> i16 {
        self.cursor
    }

    /// Move one pixel left, wrapping once the message has left the panel
    pub fn tick(&mut self) {
        self.cursor -= 1;
        if self.cursor < -(self.message.width() as i16) {
            self.cursor = self.geometry.cols() as i16;
        }
    }

    /// Draw the message at the current cursor
    pub fn render(&self, surface: &mut Surface) {
        surface.clear();
        self.raster.draw_string(
            surface,
            self.cursor,
            self.geometry.baseline_y(),
            surface.width(),
            surface.height(),
            self.message.as_str(),
            true,
        );
    }
}

/// Message drawn once at a fixed offset
#[derive(Debug, Clone)]
pub struct StaticText {
    raster: Rasterizer,
    geometry: Geometry,
    message: Message,
    dirty: bool,
}

impl StaticText {
    pub fn new(font: &'static Font, geometry: Geometry) -> Self {
        Self {
            raster: Rasterizer::new(font),
            geometry,
            message: Message::default(),
            dirty: true,
        }
    }

    pub fn set_message(&mut self, text: &str) {
        self.message = Message::new(text, self.raster.font());
        self.dirty = true;
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    /// Force the next `render_if_dirty` to draw
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Draw if the content changed since the last draw
    ///
    /// Returns `true` when the surface was redrawn.
    pub fn render_if_dirty(&mut self, surface: &mut Surface) -> bool {
        if !self.dirty {
            return false;
        }
        surface.clear();
        self.raster.draw_string(
            surface,
            self.geometry.static_x(),
            self.geometry.baseline_y(),
            surface.width(),
            surface.height(),
            self.message.as_str(),
            true,
        );
        self.dirty = false;
        true
    }
}

/// Timed message shown on top of the base content
#[derive(Debug, Clone)]
pub struct TempOverlay {
    raster: Rasterizer,
    geometry: Geometry,
    message: Message,
    duration_ms: u32,
    started_ms: Option<u64>,
}

impl TempOverlay {
    pub fn new(font: &'static Font, geometry: Geometry, duration_ms: u32) -> Self {
        Self {
            raster: Rasterizer::new(font),
            geometry,
            message: Message::default(),
            duration_ms,
            started_ms: None,
        }
    }

    /// Show `text` starting now; a new trigger restarts the timer
    pub fn trigger(&mut self, text: &str, now_ms: u64) {
        self.message = Message::new(text, self.raster.font());
        self.started_ms = Some(now_ms);
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// True while the overlay should stay on the panel
    pub fn is_active(&self, now_ms: u64) -> bool {
        match self.started_ms {
            Some(start) => now_ms.saturating_sub(start) < self.duration_ms as u64,
            None => false,
        }
    }

    /// Drop the overlay
    pub fn dismiss(&mut self) {
        self.started_ms = None;
    }

    pub fn render(&self, surface: &mut Surface) {
        surface.clear();
        self.raster.draw_string(
            surface,
            self.geometry.static_x(),
            self.geometry.baseline_y(),
            surface.width(),
            surface.height(),
            self.message.as_str(),
            true,
        );
    }
}
