//! Build script for marquee-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates sign.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Keep in sync with marquee_protocol::MAX_MESSAGE_LEN
const MAX_MESSAGE_LEN: usize = 159;

const KNOWN_SECTIONS: &[&str] = &["panel", "scroll", "message", "bus"];

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
}

/// Validate sign.toml at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=sign.toml");

    let config_path = Path::new("sign.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: sign.toml not found!                                     ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds sign.toml as its boot configuration.        ║\n\
            ║  Please create one in the marquee-firmware directory.            ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read sign.toml                                 ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in sign.toml                         ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_sections(&config, &mut errors);
    validate_panel(&config, &mut errors);
    validate_scroll(&config, &mut errors);
    validate_message(&config, &mut errors);
    validate_bus(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: sign.toml validation failed                              ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&errors.join("\n"))
        );
    }

    println!("cargo:warning=sign.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn validate_sections(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(table) = config.as_table() else {
        errors.push("sign.toml must be a table".to_string());
        return;
    };
    for (name, value) in table {
        if !KNOWN_SECTIONS.contains(&name.as_str()) {
            errors.push(format!("Unknown section [{}]", name));
        } else if !value.is_table() {
            errors.push(format!("'{}' must be a [section]", name));
        }
    }
}

fn integer(config: &toml::Value, section: &str, key: &str, errors: &mut Vec<String>) -> Option<i64> {
    let value = config.get(section)?.get(key)?;
    match value.as_integer() {
        Some(n) => Some(n),
        None => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            None
        }
    }
}

fn string<'a>(
    config: &'a toml::Value,
    section: &str,
    key: &str,
    errors: &mut Vec<String>,
) -> Option<&'a str> {
    let value = config.get(section)?.get(key)?;
    match value.as_str() {
        Some(s) => Some(s),
        None => {
            errors.push(format!("[{}] {} must be a quoted string", section, key));
            None
        }
    }
}

fn validate_panel(config: &toml::Value, errors: &mut Vec<String>) {
    if let Some(size) = string(config, "panel", "size", errors) {
        if size != "8x8" && size != "16x16" {
            errors.push(format!("[panel] size '{}' must be \"8x8\" or \"16x16\"", size));
        }
    }
    if let Some(n) = integer(config, "panel", "blank_cycles", errors) {
        if !(0..=255).contains(&n) {
            errors.push(format!("[panel] blank_cycles {} out of range 0-255", n));
        }
    }
}

fn validate_scroll(config: &toml::Value, errors: &mut Vec<String>) {
    let min = integer(config, "scroll", "min_interval_ms", errors).unwrap_or(5);
    let max = integer(config, "scroll", "max_interval_ms", errors).unwrap_or(500);
    let interval = integer(config, "scroll", "interval_ms", errors).unwrap_or(25);

    if min <= 0 {
        errors.push(format!("[scroll] min_interval_ms {} must be positive", min));
    }
    if min > max {
        errors.push(format!(
            "[scroll] min_interval_ms {} exceeds max_interval_ms {}",
            min, max
        ));
    }
    if interval < 0 || max > u32::MAX as i64 {
        errors.push("[scroll] intervals must fit in u32".to_string());
    }
}

fn validate_message(config: &toml::Value, errors: &mut Vec<String>) {
    if let Some(text) = string(config, "message", "text", errors) {
        if text.len() > MAX_MESSAGE_LEN {
            errors.push(format!(
                "[message] text is {} bytes, limit is {}",
                text.len(),
                MAX_MESSAGE_LEN
            ));
        }
    }
    if let Some(ms) = integer(config, "message", "overlay_ms", errors) {
        if ms <= 0 || ms > u32::MAX as i64 {
            errors.push(format!("[message] overlay_ms {} out of range", ms));
        }
    }
    if let Some(mode) = config.get("message").and_then(|m| m.get("mode")) {
        let ok = match mode {
            toml::Value::String(name) => matches!(name.as_str(), "animation" | "scroll" | "static"),
            toml::Value::Integer(id) => (0..=2).contains(id),
            _ => false,
        };
        if !ok {
            errors.push("[message] mode must be \"animation\", \"scroll\", \"static\" or 0-2".to_string());
        }
    }
}

fn validate_bus(config: &toml::Value, errors: &mut Vec<String>) {
    if let Some(address) = integer(config, "bus", "address", errors) {
        if !(0x08..=0x77).contains(&address) {
            errors.push(format!(
                "[bus] address {:#04x} outside 7-bit range 0x08-0x77",
                address
            ));
        }
    }
}
