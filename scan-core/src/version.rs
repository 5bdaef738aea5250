//! Build timestamp persistence.
//!
//! The timestamp file holds a single line with the Unix time, in seconds,
//! at which the running build was stamped. The same format is published in
//! the upstream repository so installs can check whether they are current.

use crate::formatting::{format_time, TimeError};
use crate::settings::ScanConfig;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum VersionError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid timestamp: {0}")]
    Parse(#[from] ParseIntError),
    #[error("http error: {0}")]
    Http(#[from] Box<ureq::Error>),
    #[error(transparent)]
    Time(#[from] TimeError),
}

/// A build timestamp in Unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct VersionTimestamp {
    pub seconds: i64,
}

impl VersionTimestamp {
    /// Local date and time of the stamp, or `Unknown` for unset stamps.
    pub fn display(&self) -> Result<String, TimeError> {
        format_time(self.seconds as f64, true)
    }
}

pub fn timestamp_path(dir: &Path, config: &ScanConfig) -> PathBuf {
    dir.join(&config.timestamp_file)
}

fn parse_timestamp_line(text: &str) -> Result<i64, VersionError> {
    let line = text.lines().next().unwrap_or_default();
    Ok(line.trim().parse::<i64>()?)
}

/// Writes the current Unix time to the timestamp file in `dir`.
///
/// Any existing content is replaced. Returns the seconds written.
pub fn set_version_timestamp(dir: &Path, config: &ScanConfig) -> Result<i64, VersionError> {
    let seconds = chrono::Utc::now().timestamp();
    let path = timestamp_path(dir, config);
    std::fs::write(&path, seconds.to_string())?;
    log::info!("Wrote version timestamp {seconds} to {}", path.display());
    Ok(seconds)
}

/// Reads the timestamp file in `dir`.
pub fn get_version_timestamp(
    dir: &Path,
    config: &ScanConfig,
) -> Result<VersionTimestamp, VersionError> {
    let text = std::fs::read_to_string(timestamp_path(dir, config))?;
    let seconds = parse_timestamp_line(&text)?;
    Ok(VersionTimestamp { seconds })
}

/// Fetches the published timestamp from `url`.
///
/// Blocks until the server answers; no timeout or retry is applied.
pub fn get_version_timestamp_repo(url: &str) -> Result<i64, VersionError> {
    let response = ureq::get(url).call().map_err(Box::new)?;
    let text = response.into_string()?;
    parse_timestamp_line(&text)
}
