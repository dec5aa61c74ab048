//! Marquee Control-Bus Protocol
//!
//! This crate defines the command set a host uses to drive the sign over a
//! register-style bus (I2C target at address 0x13 by default). Every host
//! write starts with an opcode byte followed by its payload:
//!
//! ```text
//! ┌────────┬──────────────────────────────┐
//! │ OPCODE │ PAYLOAD                      │
//! │ 1B     │ 1B, or a chunk of text       │
//! └────────┴──────────────────────────────┘
//! ```
//!
//! Text commands may span several writes; chunks are reassembled until a
//! newline arrives or the message buffer fills. A host read returns a single
//! status byte.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod assembler;
pub mod command;

pub use assembler::{MessageAssembler, MessageText, MAX_MESSAGE_LEN};
pub use command::{BusDecoder, Command, CommandError, Request, StatusByte, TextTarget};

/// Default 7-bit bus address of the sign
pub const DEFAULT_BUS_ADDRESS: u8 = 0x13;
