//! Sign configuration
//!
//! Defaults are compiled in; the firmware overlays an embedded `sign.toml`
//! parsed by a small no_std TOML-subset reader.

pub mod toml;
pub mod types;

pub use toml::{parse_config, ParseError};
pub use types::*;
