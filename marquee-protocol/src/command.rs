//! Command decoding for host bus writes
//!
//! Opcodes:
//! - 0x00 setDisplay: 1 byte bool
//! - 0x01 setMessage: text chunk, newline or buffer-full terminated
//! - 0x02 setScrollSpeed: 1 byte, 0-100
//! - 0x03 setDisplayMode: 1 byte mode id
//! - 0x04 showTempMessage: text chunk, same framing as setMessage

use crate::assembler::{MessageAssembler, MessageText};

pub const OP_SET_DISPLAY: u8 = 0x00;
pub const OP_SET_MESSAGE: u8 = 0x01;
pub const OP_SET_SCROLL_SPEED: u8 = 0x02;
pub const OP_SET_MODE: u8 = 0x03;
pub const OP_SHOW_TEMP_MESSAGE: u8 = 0x04;

/// Errors from decoding a bus write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Write carried no payload (fewer than two bytes)
    TooShort,
    /// Opcode is not part of the command set
    UnknownOpcode(u8),
}

/// Which message a text chunk belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextTarget {
    /// Base scrolling/static message
    Base,
    /// Timed overlay message
    Overlay,
}

/// One decoded bus write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command<'a> {
    /// Enable or blank the panel output
    SetDisplay(bool),
    /// A chunk of message text
    Text { target: TextTarget, chunk: &'a [u8] },
    /// Scroll speed, 0 (slowest) to 100 (fastest); larger values clamp
    SetScrollSpeed(u8),
    /// Display mode identifier
    SetMode(u8),
}

impl<'a> Command<'a> {
    /// Parse a single bus write
    pub fn parse(write: &'a [u8]) -> Result<Self, CommandError> {
        let (&opcode, payload) = match write.split_first() {
            Some(split) if !split.1.is_empty() => split,
            _ => return Err(CommandError::TooShort),
        };

        match opcode {
            OP_SET_DISPLAY => Ok(Command::SetDisplay(payload[0] != 0)),
            OP_SET_MESSAGE => Ok(Command::Text {
                target: TextTarget::Base,
                chunk: payload,
            }),
            OP_SET_SCROLL_SPEED => Ok(Command::SetScrollSpeed(payload[0])),
            OP_SET_MODE => Ok(Command::SetMode(payload[0])),
            OP_SHOW_TEMP_MESSAGE => Ok(Command::Text {
                target: TextTarget::Overlay,
                chunk: payload,
            }),
            other => Err(CommandError::UnknownOpcode(other)),
        }
    }
}

/// A complete request ready for the content pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Request {
    /// Enable or blank the panel output
    SetDisplay(bool),
    /// Replace the base message
    SetMessage(MessageText),
    /// Set scroll speed (0-100)
    SetScrollSpeed(u8),
    /// Select the display mode
    SetMode(u8),
    /// Show a timed overlay message
    ShowTempMessage(MessageText),
}

/// Turns raw bus writes into complete requests
///
/// Keeps one assembler per text opcode so interleaved base and overlay
/// chunks never mix.
#[derive(Debug, Clone, Default)]
pub struct BusDecoder {
    base: MessageAssembler,
    overlay: MessageAssembler,
}

impl BusDecoder {
    /// Create a decoder with empty assemblers
    pub const fn new() -> Self {
        Self {
            base: MessageAssembler::new(),
            overlay: MessageAssembler::new(),
        }
    }

    /// Decode one bus write
    ///
    /// Returns `Ok(None)` while a text message is still incomplete.
    pub fn feed(&mut self, write: &[u8]) -> Result<Option<Request>, CommandError> {
        let request = match Command::parse(write)? {
            Command::SetDisplay(on) => Some(Request::SetDisplay(on)),
            Command::SetScrollSpeed(speed) => Some(Request::SetScrollSpeed(speed)),
            Command::SetMode(mode) => Some(Request::SetMode(mode)),
            Command::Text {
                target: TextTarget::Base,
                chunk,
            } => self.base.feed(chunk).map(Request::SetMessage),
            Command::Text {
                target: TextTarget::Overlay,
                chunk,
            } => self.overlay.feed(chunk).map(Request::ShowTempMessage),
        };
        Ok(request)
    }

    /// Drop any partially received text messages
    pub fn reset(&mut self) {
        self.base.reset();
        self.overlay.reset();
    }
}

/// Status byte returned for a host read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusByte(u8);

impl StatusByte {
    /// Encode the auxiliary input pin level
    pub const fn from_input(high: bool) -> Self {
        Self(high as u8)
    }

    /// Raw byte for the bus
    pub const fn to_byte(self) -> u8 {
        self.0
    }
}
