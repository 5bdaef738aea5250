//! Script and resource directory resolution.

use std::io;
use std::path::{Path, PathBuf};

pub const RES_DIR_NAME: &str = "res";

/// How the application was started, supplied once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeploymentMode {
    /// Running from a build or source tree; paths are relative to the executable.
    #[default]
    Source,
    /// Running from a packaged bundle extracted to `bundle_dir`.
    Packaged { bundle_dir: PathBuf },
}

/// Returns the directory the application treats as its base.
pub fn script_dir(mode: &DeploymentMode) -> io::Result<PathBuf> {
    match mode {
        DeploymentMode::Source => {
            let exe = std::env::current_exe()?.canonicalize()?;
            Ok(exe
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".")))
        }
        DeploymentMode::Packaged { bundle_dir } => Ok(bundle_dir.clone()),
    }
}

/// `<script_dir>/res` when it exists, otherwise `<script_dir>/../res`.
///
/// The fallback is returned unchecked.
pub fn res_dir(script_dir: &Path) -> PathBuf {
    let local = script_dir.join(RES_DIR_NAME);
    if local.is_dir() {
        local
    } else {
        script_dir.join("..").join(RES_DIR_NAME)
    }
}

pub fn resource_path(script_dir: &Path, resource: &str) -> PathBuf {
    res_dir(script_dir).join(resource)
}

/// Paths resolved once for the lifetime of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    script_dir: PathBuf,
}

impl AppPaths {
    pub fn resolve(mode: &DeploymentMode) -> io::Result<Self> {
        Ok(Self {
            script_dir: script_dir(mode)?,
        })
    }

    pub fn from_script_dir(script_dir: impl Into<PathBuf>) -> Self {
        Self {
            script_dir: script_dir.into(),
        }
    }

    pub fn script_dir(&self) -> &Path {
        &self.script_dir
    }

    pub fn res_dir(&self) -> PathBuf {
        res_dir(&self.script_dir)
    }

    pub fn resource_path(&self, resource: &str) -> PathBuf {
        resource_path(&self.script_dir, resource)
    }
}
