//! Text formatting for frequencies, levels and timestamps.

use crate::settings::DisplaySettings;
use chrono::{DateTime, Local, TimeZone, Utc};

const FREQ_UNITS: &str = " MHz";
const LEVEL_UNITS: &str = " dB/Hz";
const LEVEL_UNITS_FANCY: &str = r" $\mathsf{dB/\sqrt{Hz}}$";

/// How unit suffixes are attached by [`format_precision`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnitStyle {
    /// Numbers only.
    Bare,
    /// Plain-text units for logs and exports.
    #[default]
    Plain,
    /// Mathtext units for on-screen plot labels.
    Fancy,
}

/// Result of [`format_precision`], tagged by which values were supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formatted {
    None,
    Frequency(String),
    Level(String),
    Both { freq: String, level: String },
}

impl Formatted {
    pub fn frequency(&self) -> Option<&str> {
        match self {
            Formatted::Frequency(freq) | Formatted::Both { freq, .. } => Some(freq),
            _ => None,
        }
    }

    pub fn level(&self) -> Option<&str> {
        match self {
            Formatted::Level(level) | Formatted::Both { level, .. } => Some(level),
            _ => None,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum TimeError {
    #[error("timestamp {0} is out of range")]
    OutOfRange(f64),
}

/// Formats a frequency (MHz) and/or level with the configured precision.
///
/// Each number is right-aligned in a field `4 + precision` characters wide.
/// Frequencies get a MHz suffix in plain and fancy styles; levels get
/// `dB/Hz` in plain style and a mathtext `dB/√Hz` label in fancy style.
///
/// # Examples
/// ```rust
/// use scan_core::{format_precision, DisplaySettings, Formatted, UnitStyle};
/// let settings = DisplaySettings { precision_freq: 3, precision_level: 1 };
/// assert_eq!(
///     format_precision(&settings, Some(100.123456), None, UnitStyle::Plain),
///     Formatted::Frequency("100.123 MHz".to_string())
/// );
/// ```
pub fn format_precision(
    settings: &DisplaySettings,
    freq: Option<f64>,
    level: Option<f64>,
    units: UnitStyle,
) -> Formatted {
    let text_freq = freq.map(|freq| {
        let prec = settings.precision_freq;
        let mut text = format!("{:width$.prec$}", freq, width = 4 + prec, prec = prec);
        if units != UnitStyle::Bare {
            text.push_str(FREQ_UNITS);
        }
        text
    });
    let text_level = level.map(|level| {
        let prec = settings.precision_level;
        let mut text = format!("{:width$.prec$}", level, width = 4 + prec, prec = prec);
        match units {
            UnitStyle::Fancy => text.push_str(LEVEL_UNITS_FANCY),
            UnitStyle::Plain => text.push_str(LEVEL_UNITS),
            UnitStyle::Bare => {}
        }
        text
    });

    match (text_freq, text_level) {
        (Some(freq), Some(level)) => Formatted::Both { freq, level },
        (Some(freq), None) => Formatted::Frequency(freq),
        (None, Some(level)) => Formatted::Level(level),
        (None, None) => Formatted::None,
    }
}

fn split_timestamp(timestamp: f64) -> Result<(i64, u32), TimeError> {
    if !timestamp.is_finite() || timestamp.abs() > i64::MAX as f64 {
        return Err(TimeError::OutOfRange(timestamp));
    }
    let secs = timestamp.floor();
    let micros = ((timestamp - secs) * 1e6).round() as u32;
    let (secs, micros) = if micros >= 1_000_000 {
        (secs as i64 + 1, 0)
    } else {
        (secs as i64, micros)
    };
    Ok((secs, micros))
}

/// Formats a Unix timestamp in local time.
///
/// Timestamps of 1 or less mean "never recorded" and render as `Unknown`.
/// With `with_date` the locale-style date and time (`%c`) is returned,
/// otherwise only `HH:MM:SS`.
pub fn format_time(timestamp: f64, with_date: bool) -> Result<String, TimeError> {
    if timestamp <= 1.0 {
        return Ok("Unknown".to_string());
    }
    let (secs, _) = split_timestamp(timestamp)?;
    let local: DateTime<Local> = Local
        .timestamp_opt(secs, 0)
        .earliest()
        .ok_or(TimeError::OutOfRange(timestamp))?;
    let pattern = if with_date { "%c" } else { "%H:%M:%S" };
    Ok(local.format(pattern).to_string())
}

/// Formats a Unix timestamp as UTC ISO-8601 with a trailing `Z`.
///
/// Microseconds are only printed when non-zero.
pub fn format_iso_time(timestamp: f64) -> Result<String, TimeError> {
    let (secs, micros) = split_timestamp(timestamp)?;
    let utc: DateTime<Utc> = DateTime::from_timestamp(secs, micros * 1_000)
        .ok_or(TimeError::OutOfRange(timestamp))?;
    let mut text = if micros == 0 {
        utc.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        utc.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    };
    text.push('Z');
    Ok(text)
}

/// Drops every non-ASCII character from `text`.
///
/// # Examples
/// ```rust
/// use scan_core::limit_to_ascii;
/// assert_eq!(limit_to_ascii("Gain 20 dB ±1"), "Gain 20 dB 1");
/// ```
pub fn limit_to_ascii(text: &str) -> String {
    text.chars().filter(char::is_ascii).collect()
}
