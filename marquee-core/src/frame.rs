//! Tear-free frame handoff between the main flow and the refresh interrupt
//!
//! The main flow draws into a private [`Surface`] owned by [`FrameStager`].
//! `commit()` copies the finished rows into the shared [`FrameExchange`] and
//! raises the commit flag. The refresh driver checks the flag only at the
//! frame boundary and takes the whole staged frame in one critical section,
//! so the scan-out never sees rows from two different commits.
//!
//! There is no queue. A second commit before the boundary overwrites the
//! first; only the latest staged frame ever becomes visible.
//!
//! Single-writer discipline:
//! - staged rows, commit flag: written by the main flow, taken by the interrupt
//! - display flag, scroll index, requested source: main flow writes, interrupt reads

use core::cell::Cell;

use critical_section::Mutex;
use portable_atomic::{AtomicBool, AtomicU8, Ordering};

use crate::geometry::{Geometry, MAX_ROWS};
use crate::surface::{FrameRows, Surface};

/// What the refresh driver scans out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ScanSource {
    /// The last committed frame
    Frame = 0,
    /// The rotating animation pattern
    Animation = 1,
}

impl ScanSource {
    const fn from_raw(raw: u8) -> Self {
        match raw {
            1 => ScanSource::Animation,
            _ => ScanSource::Frame,
        }
    }
}

/// State shared between the main flow and the refresh interrupt
pub struct FrameExchange {
    staged: Mutex<Cell<FrameRows>>,
    commit_requested: AtomicBool,
    display_enabled: AtomicBool,
    scroll_index: AtomicU8,
    source: AtomicU8,
}

impl FrameExchange {
    /// Empty exchange: no pending commit, display on, frame source
    pub const fn new() -> Self {
        Self {
            staged: Mutex::new(Cell::new([0; MAX_ROWS])),
            commit_requested: AtomicBool::new(false),
            display_enabled: AtomicBool::new(true),
            scroll_index: AtomicU8::new(0),
            source: AtomicU8::new(ScanSource::Frame as u8),
        }
    }

    fn publish(&self, rows: &FrameRows) {
        critical_section::with(|cs| {
            self.staged.borrow(cs).set(*rows);
            self.commit_requested.store(true, Ordering::Release);
        });
    }

    /// Take the staged frame if a commit is pending
    ///
    /// Only the refresh driver calls this, and only at the frame boundary.
    pub fn take_commit(&self) -> Option<FrameRows> {
        if !self.commit_requested.load(Ordering::Acquire) {
            return None;
        }
        critical_section::with(|cs| {
            let rows = self.staged.borrow(cs).get();
            self.commit_requested.store(false, Ordering::Release);
            Some(rows)
        })
    }

    /// True while a staged frame waits for the next boundary
    pub fn commit_pending(&self) -> bool {
        self.commit_requested.load(Ordering::Acquire)
    }

    pub fn display_enabled(&self) -> bool {
        self.display_enabled.load(Ordering::Relaxed)
    }

    pub fn scroll_index(&self) -> u8 {
        self.scroll_index.load(Ordering::Relaxed)
    }

    pub fn requested_source(&self) -> ScanSource {
        ScanSource::from_raw(self.source.load(Ordering::Acquire))
    }
}

impl Default for FrameExchange {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer side of the exchange
///
/// Owned by the main flow. All writes go through plain stores, never a
/// read-modify-write on shared state.
pub struct FrameStager<'a> {
    surface: Surface,
    exchange: &'a FrameExchange,
}

impl<'a> FrameStager<'a> {
    pub fn new(exchange: &'a FrameExchange, geometry: Geometry) -> Self {
        Self {
            surface: Surface::new(geometry),
            exchange,
        }
    }

    pub fn geometry(&self) -> Geometry {
        self.surface.geometry()
    }

    pub fn exchange(&self) -> &'a FrameExchange {
        self.exchange
    }

    /// Draw surface; may be written at any time
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    pub fn clear(&mut self) {
        self.surface.clear();
    }

    /// Publish the draw surface as the next frame
    pub fn commit(&mut self) {
        self.exchange.publish(self.surface.frame_rows());
    }

    /// Select the scan-out source; latched at the next frame boundary
    pub fn request_source(&mut self, source: ScanSource) {
        self.exchange.source.store(source as u8, Ordering::Release);
    }

    /// Global output enable
    pub fn set_display_enabled(&mut self, enabled: bool) {
        self.exchange.display_enabled.store(enabled, Ordering::Relaxed);
    }

    /// Publish the animation rotation index
    pub fn set_scroll_index(&mut self, index: u8) {
        self.exchange.scroll_index.store(index, Ordering::Relaxed);
    }
}
