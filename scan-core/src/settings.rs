use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_SAMPLE_RATE: f64 = 2e6;
pub const DEFAULT_TIMESTAMP_FILE: &str = "version-timestamp";
pub const DEFAULT_REPO_TIMESTAMP_URL: &str =
    "https://raw.github.com/EarToEarOak/RTLSDR-Scanner/master/src/version-timestamp";
pub const MAX_PRECISION: usize = 10;

/// Display precision used when formatting frequencies and levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub precision_freq: usize,
    pub precision_level: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            precision_freq: 3,
            precision_level: 1,
        }
    }
}

/// Values the scanner used to read from process-wide constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub sample_rate: f64,
    pub timestamp_file: String,
    pub repo_timestamp_url: String,
    #[serde(flatten)]
    pub display: DisplaySettings,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            timestamp_file: DEFAULT_TIMESTAMP_FILE.to_string(),
            repo_timestamp_url: DEFAULT_REPO_TIMESTAMP_URL.to_string(),
            display: DisplaySettings::default(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("sample_rate must be positive, got {0}")]
    SampleRate(f64),
    #[error("timestamp_file must not be empty")]
    TimestampFile,
}

pub fn validate_sample_rate(sample_rate: f64) -> Result<f64, SettingsError> {
    if sample_rate > 0.0 && sample_rate.is_finite() {
        Ok(sample_rate)
    } else {
        Err(SettingsError::SampleRate(sample_rate))
    }
}

pub fn normalize_scan_config(mut config: ScanConfig) -> Result<ScanConfig, SettingsError> {
    validate_sample_rate(config.sample_rate)?;
    if config.timestamp_file.trim().is_empty() {
        return Err(SettingsError::TimestampFile);
    }
    config.display.precision_freq = config.display.precision_freq.min(MAX_PRECISION);
    config.display.precision_level = config.display.precision_level.min(MAX_PRECISION);
    Ok(config)
}

/// Loads a JSON settings file; missing fields fall back to defaults.
pub fn load_scan_config_file(path: &Path) -> Result<ScanConfig, SettingsError> {
    let data = std::fs::read(path)?;
    let config: ScanConfig = serde_json::from_slice(&data)?;
    normalize_scan_config(config)
}

pub fn save_scan_config_file(path: &Path, config: &ScanConfig) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let data = serde_json::to_vec_pretty(config)?;
    std::fs::write(path, data)?;
    Ok(())
}
