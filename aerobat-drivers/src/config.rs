//! Pilot configuration parser
//!
//! Reads the small TOML subset a pilot needs:
//!
//! ```toml
//! [pilot]
//! course = 2              # registry id
//! tick_interval_ms = 100
//! enter_sdk_mode = true
//! ```
//!
//! Supported: one `[pilot]` section, `key = value` pairs with integer or
//! boolean values, `#` comments. Missing keys keep their defaults.

use aerobat_core::config::PilotConfig;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown section header, or a key outside any section
    InvalidSection,
    /// Key not recognised in its section
    UnknownKey,
    /// Malformed line or out-of-range value
    InvalidValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Pilot,
}

/// Parse TOML configuration into a [`PilotConfig`]
pub fn parse_config(input: &str) -> Result<PilotConfig, ParseError> {
    let mut config = PilotConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line).trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidValue)?;
        match section {
            Section::Root => return Err(ParseError::InvalidSection),
            Section::Pilot => apply_pilot_value(&mut config, key, value)?,
        }
    }

    if !config.tick_interval_valid() {
        return Err(ParseError::InvalidValue);
    }
    Ok(config)
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "pilot" => Ok(Section::Pilot),
        _ => Err(ParseError::InvalidSection),
    }
}

fn apply_pilot_value(config: &mut PilotConfig, key: &str, value: &str) -> Result<(), ParseError> {
    match key {
        "course" => config.course_id = parse_int(value)?,
        "tick_interval_ms" => config.tick_interval_ms = parse_int(value)?,
        "enter_sdk_mode" => config.enter_sdk_mode = parse_bool(value)?,
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Split `key = value`; both sides must be non-empty
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = value.trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}

fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue)
}

fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}
