//! Sign configuration types
//!
//! Compiled-in defaults match the stock 16x16 sign. Nothing is persisted:
//! every boot starts from these values plus the embedded `sign.toml`.

use heapless::String;
use marquee_protocol::{DEFAULT_BUS_ADDRESS, MAX_MESSAGE_LEN};

use crate::director::DisplayMode;
use crate::geometry::Geometry;

/// Message shown until the host sends one
pub const DEFAULT_MESSAGE: &str = "hello";

/// Supported panel sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelSize {
    Matrix8x8,
    #[default]
    Matrix16x16,
}

/// Panel layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelConfig {
    pub size: PanelSize,
    /// Overrides the preset's inter-row blank cycles
    pub blank_cycles: Option<u8>,
}

/// Redraw cadence for scrolling text and animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScrollConfig {
    /// Interval at scroll speed 100
    pub min_interval_ms: u32,
    /// Interval at scroll speed 0
    pub max_interval_ms: u32,
    /// Interval at boot
    pub interval_ms: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            min_interval_ms: 5,
            max_interval_ms: 500,
            interval_ms: 25,
        }
    }
}

/// Boot content
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MessageConfig {
    pub text: String<MAX_MESSAGE_LEN>,
    /// How long a temp message stays up
    pub overlay_ms: u32,
    pub mode: DisplayMode,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            // The default message is far below capacity
            text: String::try_from(DEFAULT_MESSAGE).unwrap_or_default(),
            overlay_ms: 5000,
            mode: DisplayMode::ScrollingText,
        }
    }
}

/// Control bus settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusConfig {
    /// 7-bit target address
    pub address: u8,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_BUS_ADDRESS,
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// min_interval_ms is zero or above max_interval_ms
    IntervalRange,
    /// Address outside the usable 7-bit range (0x08..=0x77)
    BusAddress(u8),
    /// Overlay duration of zero
    OverlayDuration,
}

/// Complete sign configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SignConfig {
    pub panel: PanelConfig,
    pub scroll: ScrollConfig,
    pub message: MessageConfig,
    pub bus: BusConfig,
}

impl SignConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Panel geometry with any blank-cycle override applied
    pub fn geometry(&self) -> Geometry {
        let preset = match self.panel.size {
            PanelSize::Matrix8x8 => Geometry::MATRIX_8X8,
            PanelSize::Matrix16x16 => Geometry::MATRIX_16X16,
        };
        match self.panel.blank_cycles {
            Some(n) => preset.with_blank_cycles(n),
            None => preset,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let scroll = &self.scroll;
        if scroll.min_interval_ms == 0 || scroll.min_interval_ms > scroll.max_interval_ms {
            return Err(ConfigError::IntervalRange);
        }
        if !(0x08..=0x77).contains(&self.bus.address) {
            return Err(ConfigError::BusAddress(self.bus.address));
        }
        if self.message.overlay_ms == 0 {
            return Err(ConfigError::OverlayDuration);
        }
        Ok(())
    }
}
