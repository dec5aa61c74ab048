//! Minimal TOML reader for `sign.toml`
//!
//! Handles only the subset the sign needs, not the full TOML grammar.
//!
//! Supported:
//! - `[panel]`, `[scroll]`, `[message]`, `[bus]` section headers
//! - `key = value` with quoted strings, decimal or `0x` hex integers
//! - Comments (`# ...`), including after a value
//!
//! Unknown keys are ignored so older firmware accepts newer files; unknown
//! sections are rejected.

use super::types::{PanelSize, SignConfig};
use crate::director::DisplayMode;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Value has the wrong type or is out of range
    InvalidValue,
    /// String longer than its buffer
    TooLong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Panel,
    Scroll,
    Message,
    Bus,
}

/// Parse a TOML document on top of the compiled-in defaults
pub fn parse_config(input: &str) -> Result<SignConfig, ParseError> {
    let mut config = SignConfig::new();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        if let Some((key, value)) = parse_key_value(line) {
            apply_value(section, key, value, &mut config)?;
        }
    }

    Ok(config)
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "panel" => Ok(Section::Panel),
        "scroll" => Ok(Section::Scroll),
        "message" => Ok(Section::Message),
        "bus" => Ok(Section::Bus),
        _ => Err(ParseError::InvalidSection),
    }
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut SignConfig,
) -> Result<(), ParseError> {
    match (section, key) {
        (Section::Panel, "size") => config.panel.size = parse_panel_size(value)?,
        (Section::Panel, "blank_cycles") => config.panel.blank_cycles = Some(parse_int(value)?),

        (Section::Scroll, "min_interval_ms") => config.scroll.min_interval_ms = parse_int(value)?,
        (Section::Scroll, "max_interval_ms") => config.scroll.max_interval_ms = parse_int(value)?,
        (Section::Scroll, "interval_ms") => config.scroll.interval_ms = parse_int(value)?,

        (Section::Message, "text") => {
            config.message.text.clear();
            config
                .message
                .text
                .push_str(parse_string(value)?)
                .map_err(|_| ParseError::TooLong)?;
        }
        (Section::Message, "overlay_ms") => config.message.overlay_ms = parse_int(value)?,
        (Section::Message, "mode") => config.message.mode = parse_mode(value)?,

        (Section::Bus, "address") => config.bus.address = parse_int(value)?,

        _ => {}
    }
    Ok(())
}

/// Split `key = value`, dropping a trailing comment outside quotes
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    let value = match value.find('#') {
        Some(hash_pos) if value[..hash_pos].matches('"').count() % 2 == 0 => {
            value[..hash_pos].trim()
        }
        _ => value,
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn parse_string(value: &str) -> Result<&str, ParseError> {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        Ok(&value[1..value.len() - 1])
    } else {
        Err(ParseError::InvalidValue)
    }
}

/// Decimal or `0x`-prefixed hex integer
fn parse_int<T: TryFrom<u32>>(value: &str) -> Result<T, ParseError> {
    let raw = match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => value.parse::<u32>(),
    }
    .map_err(|_| ParseError::InvalidValue)?;

    T::try_from(raw).map_err(|_| ParseError::InvalidValue)
}

fn parse_panel_size(value: &str) -> Result<PanelSize, ParseError> {
    match parse_string(value)? {
        "8x8" => Ok(PanelSize::Matrix8x8),
        "16x16" => Ok(PanelSize::Matrix16x16),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Mode by name, or by the numeric id the bus uses
fn parse_mode(value: &str) -> Result<DisplayMode, ParseError> {
    if let Ok(name) = parse_string(value) {
        return match name {
            "animation" => Ok(DisplayMode::Animation),
            "scroll" => Ok(DisplayMode::ScrollingText),
            "static" => Ok(DisplayMode::StaticText),
            _ => Err(ParseError::InvalidValue),
        };
    }
    DisplayMode::from_id(parse_int(value)?).ok_or(ParseError::InvalidValue)
}
