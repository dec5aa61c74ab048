//! Marquee Hardware Abstraction Layer
//!
//! This crate defines the small set of hardware traits the sign core needs,
//! so the refresh engine can be driven by a real RP2040 board or by a
//! recording mock in host tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  marquee-core (RefreshDriver)           │
//! └─────────────────────────────────────────┘
//!                     │ ShiftChain
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  marquee-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │ OutputPin
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  embassy-rp   │       │  test mocks   │
//! │  (EhOutput)   │       │               │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`shift::ShiftChain`] - Serial-in/parallel-out register chain with latch

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod shift;

// Re-export key traits at crate root for convenience
pub use gpio::{EhInput, EhOutput, InputPin, OutputPin};
pub use shift::{BitBangChain, BitOrder, ShiftChain};
