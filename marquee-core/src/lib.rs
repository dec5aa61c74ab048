//! Board-agnostic core of the LED sign firmware
//!
//! This crate contains everything that does not touch chip registers:
//!
//! - Panel geometry and row-bitmask surfaces
//! - Packed bitmap fonts and the glyph rasterizer
//! - Scrolling/static/overlay text producers and the scroll animation
//! - The tear-free frame exchange between main flow and refresh interrupt
//! - The refresh driver state machine (row multiplexing and blanking)
//! - The content director that picks what to draw and when
//! - Sign configuration and its TOML-subset parser

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod animation;
pub mod config;
pub mod director;
pub mod font;
pub mod frame;
pub mod geometry;
pub mod raster;
pub mod refresh;
pub mod surface;
pub mod text;

pub use animation::{AnimationSource, ScrollPattern};
pub use config::{ConfigError, SignConfig};
pub use director::{
    ApplyError, ContentDirector, DirectorEvent, DirectorState, DisplayMode, DrawInterval,
};
pub use font::{Font, Glyph};
pub use frame::{FrameExchange, FrameStager, ScanSource};
pub use geometry::Geometry;
pub use raster::{Canvas, Rasterizer};
pub use refresh::{RefreshDriver, RefreshState};
pub use surface::Surface;
pub use text::{Message, StaticText, TempOverlay, TextScroller};
