//! Content director
//!
//! Decides what the panel shows and when the main flow redraws it.
//!
//! ```text
//!            ModeSelected(m)
//!          ┌───────────────┐
//!          ▼               │
//!     ┌─────────┐  OverlayTriggered  ┌──────────────────────┐
//!     │ Base(m) │ ─────────────────▶ │ Overlay { previous } │ ◀─┐
//!     └─────────┘ ◀───────────────── └──────────────────────┘ ──┘
//!                   OverlayElapsed     ModeSelected / re-trigger
//! ```
//!
//! While an overlay is up the base producers are not ticked at all, so a
//! scrolling message resumes exactly where it was once the overlay ends.

use marquee_protocol::Request;

use crate::animation::AnimationSource;
use crate::config::SignConfig;
use crate::font::Font;
use crate::frame::{FrameStager, ScanSource};
use crate::geometry::Geometry;
use crate::text::{StaticText, TempOverlay, TextScroller};

/// Base content modes, numbered as on the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DisplayMode {
    Animation = 0,
    ScrollingText = 1,
    StaticText = 2,
}

impl DisplayMode {
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(DisplayMode::Animation),
            1 => Some(DisplayMode::ScrollingText),
            2 => Some(DisplayMode::StaticText),
            _ => None,
        }
    }

    pub const fn id(self) -> u8 {
        self as u8
    }

    /// What the refresh driver scans out in this mode
    pub const fn scan_source(self) -> ScanSource {
        match self {
            DisplayMode::Animation => ScanSource::Animation,
            DisplayMode::ScrollingText | DisplayMode::StaticText => ScanSource::Frame,
        }
    }
}

/// Director states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DirectorState {
    /// A base producer is active
    Base(DisplayMode),
    /// A temp message is up; `previous` is restored when it expires
    Overlay { previous: DisplayMode },
}

/// Inputs to the director state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DirectorEvent {
    ModeSelected(DisplayMode),
    OverlayTriggered,
    OverlayElapsed,
}

impl DirectorState {
    /// Process an event and return the next state
    pub fn transition(self, event: DirectorEvent) -> Self {
        use DirectorEvent::*;
        use DirectorState::*;

        match (self, event) {
            (Base(_), ModeSelected(mode)) => Base(mode),
            (Base(mode), OverlayTriggered) => Overlay { previous: mode },

            // Mode changes during an overlay apply once it ends
            (Overlay { .. }, ModeSelected(mode)) => Overlay { previous: mode },
            (Overlay { previous }, OverlayElapsed) => Base(previous),

            _ => self,
        }
    }

    /// Mode that is active now, or will be after the overlay
    pub fn base_mode(&self) -> DisplayMode {
        match *self {
            DirectorState::Base(mode) => mode,
            DirectorState::Overlay { previous } => previous,
        }
    }

    pub fn is_overlay(&self) -> bool {
        matches!(self, DirectorState::Overlay { .. })
    }
}

/// Scroll speed accepted on the bus
pub const MAX_SCROLL_SPEED: u8 = 100;

/// Redraw-due gate for the base producers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DrawInterval {
    min_ms: u32,
    max_ms: u32,
    interval_ms: u32,
    last_draw_ms: Option<u64>,
}

impl DrawInterval {
    /// `interval_ms` is clamped to `[min_ms, max_ms]`
    pub fn new(min_ms: u32, max_ms: u32, interval_ms: u32) -> Self {
        let max_ms = max_ms.max(min_ms);
        Self {
            min_ms,
            max_ms,
            interval_ms: interval_ms.clamp(min_ms, max_ms),
            last_draw_ms: None,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Map a 0-100 speed inversely onto `[min_ms, max_ms]`
    pub fn set_speed(&mut self, speed: u8) {
        let slowness = (MAX_SCROLL_SPEED - speed.min(MAX_SCROLL_SPEED)) as u32;
        let span = (self.max_ms - self.min_ms) as u64;
        self.interval_ms = self.min_ms + (slowness as u64 * span / 100) as u32;
    }

    pub fn is_due(&self, now_ms: u64) -> bool {
        match self.last_draw_ms {
            Some(last) => now_ms.saturating_sub(last) >= self.interval_ms as u64,
            None => true,
        }
    }

    pub fn mark_drawn(&mut self, now_ms: u64) {
        self.last_draw_ms = Some(now_ms);
    }

    /// Make the next check due immediately
    pub fn force(&mut self) {
        self.last_draw_ms = None;
    }
}

/// Errors from applying a host request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ApplyError {
    /// Mode id is not a known [`DisplayMode`]
    UnknownMode(u8),
}

/// Picks the active producer and drives it at the configured cadence
pub struct ContentDirector {
    state: DirectorState,
    interval: DrawInterval,
    animation: AnimationSource,
    scroller: TextScroller,
    static_text: StaticText,
    overlay: TempOverlay,
    display_enabled: bool,
}

impl ContentDirector {
    pub fn new(
        geometry: Geometry,
        interval: DrawInterval,
        overlay_ms: u32,
        mode: DisplayMode,
    ) -> Self {
        let font = Font::for_geometry(&geometry);
        Self {
            state: DirectorState::Base(mode),
            interval,
            animation: AnimationSource::for_geometry(&geometry),
            scroller: TextScroller::new(font, geometry),
            static_text: StaticText::new(font, geometry),
            overlay: TempOverlay::new(font, geometry, overlay_ms),
            display_enabled: true,
        }
    }

    /// Build from configuration, including the boot message
    pub fn from_config(config: &SignConfig) -> Self {
        let scroll = &config.scroll;
        let mut director = Self::new(
            config.geometry(),
            DrawInterval::new(
                scroll.min_interval_ms,
                scroll.max_interval_ms,
                scroll.interval_ms,
            ),
            config.message.overlay_ms,
            config.message.mode,
        );
        director.set_message(&config.message.text);
        director
    }

    /// Point the scan-out at the boot mode
    pub fn start(&mut self, stager: &mut FrameStager<'_>) {
        let mode = self.state.base_mode();
        stager.set_scroll_index(self.animation.index());
        stager.request_source(mode.scan_source());
        self.interval.force();
    }

    pub fn state(&self) -> DirectorState {
        self.state
    }

    pub fn interval(&self) -> &DrawInterval {
        &self.interval
    }

    pub fn scroller(&self) -> &TextScroller {
        &self.scroller
    }

    pub fn animation(&self) -> &AnimationSource {
        &self.animation
    }

    pub fn is_display_enabled(&self) -> bool {
        self.display_enabled
    }

    /// Run one main-flow step
    ///
    /// Returns `true` when a producer ran.
    pub fn poll(&mut self, now_ms: u64, stager: &mut FrameStager<'_>) -> bool {
        if self.state.is_overlay() {
            if self.overlay.is_active(now_ms) {
                return false;
            }
            self.end_overlay(stager);
        }

        if !self.interval.is_due(now_ms) {
            return false;
        }

        let drew = match self.state.base_mode() {
            DisplayMode::Animation => {
                self.animation.advance();
                stager.set_scroll_index(self.animation.index());
                true
            }
            DisplayMode::ScrollingText => {
                self.scroller.render(stager.surface_mut());
                stager.commit();
                self.scroller.tick();
                true
            }
            DisplayMode::StaticText => {
                let drew = self.static_text.render_if_dirty(stager.surface_mut());
                if drew {
                    stager.commit();
                }
                drew
            }
        };
        self.interval.mark_drawn(now_ms);
        drew
    }

    fn end_overlay(&mut self, stager: &mut FrameStager<'_>) {
        self.overlay.dismiss();
        self.state = self.state.transition(DirectorEvent::OverlayElapsed);
        self.static_text.mark_dirty();
        self.interval.force();
        stager.request_source(self.state.base_mode().scan_source());
    }

    /// Apply a decoded host request
    pub fn apply(
        &mut self,
        request: Request,
        now_ms: u64,
        stager: &mut FrameStager<'_>,
    ) -> Result<(), ApplyError> {
        match request {
            Request::SetDisplay(on) => {
                self.display_enabled = on;
                stager.set_display_enabled(on);
            }
            Request::SetMessage(text) => {
                self.set_message(&text);
                self.interval.force();
            }
            Request::SetScrollSpeed(speed) => self.interval.set_speed(speed),
            Request::SetMode(id) => {
                let mode = DisplayMode::from_id(id).ok_or(ApplyError::UnknownMode(id))?;
                self.select_mode(mode, stager);
            }
            Request::ShowTempMessage(text) => {
                self.overlay.trigger(&text, now_ms);
                self.state = self.state.transition(DirectorEvent::OverlayTriggered);
                self.overlay.render(stager.surface_mut());
                stager.commit();
                stager.request_source(ScanSource::Frame);
            }
        }
        Ok(())
    }

    fn set_message(&mut self, text: &str) {
        self.scroller.set_message(text);
        self.static_text.set_message(text);
    }

    fn select_mode(&mut self, mode: DisplayMode, stager: &mut FrameStager<'_>) {
        if self.state.base_mode() == mode {
            return;
        }
        self.state = self.state.transition(DirectorEvent::ModeSelected(mode));
        if self.state.is_overlay() {
            return;
        }
        self.static_text.mark_dirty();
        self.interval.force();
        stager.request_source(mode.scan_source());
    }
}
