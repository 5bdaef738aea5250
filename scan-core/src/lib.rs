//! Support helpers for the RTL-SDR frequency scanner.
//!
//! This crate provides the plumbing the scanner front ends call into,
//! organized by category:
//! - `numeric`: Level/dB conversion, sample counts, nearest value, distances
//! - `formatting`: Frequency/level and timestamp text
//! - `paths`: Script and resource directory resolution
//! - `settings`: Display settings and scan configuration files
//! - `version`: Build timestamp persistence
//! - `serial`: Serial port enumeration

pub mod formatting;
pub mod numeric;
pub mod paths;
pub mod serial;
pub mod settings;
pub mod version;

pub use formatting::{
    format_iso_time, format_precision, format_time, limit_to_ascii, Formatted, TimeError,
    UnitStyle,
};
pub use numeric::{
    calc_real_dwell, calc_samples, db_to_level, haversine, level_to_db, limit, nearest,
    next_2_to_pow, NumericError,
};
pub use paths::{AppPaths, DeploymentMode};
pub use serial::{default_serial_port, get_serial_ports};
pub use settings::{DisplaySettings, ScanConfig, SettingsError};
pub use version::{
    get_version_timestamp, get_version_timestamp_repo, set_version_timestamp, VersionError,
    VersionTimestamp,
};
