use crate::utils::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_DIR_NAME: &str = "redmi-selene";
pub const DOWNLOAD_DIR_ENV: &str = "SELENE_DOWNLOAD_DIR";
pub const USER_AGENT: &str = concat!("selene-dl/", env!("CARGO_PKG_VERSION"));

/// Minimum gap between two rendered progress lines.
pub const PROGRESS_INTERVAL: Duration = Duration::from_millis(500);
pub const PROGRESS_BAR_WIDTH: usize = 40;
pub const INVALID_CHOICE_PAUSE: Duration = Duration::from_secs(1);

/// Per-run state shared by every menu action. Nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    download_dir: PathBuf,
}

impl Default for Session {
    fn default() -> Self {
        Session {
            download_dir: default_download_dir(),
        }
    }
}

impl Session {
    pub fn new(download_dir: impl Into<PathBuf>) -> Self {
        Session {
            download_dir: download_dir.into(),
        }
    }

    /// Default directory, unless `SELENE_DOWNLOAD_DIR` points elsewhere.
    pub fn from_env() -> Self {
        Self::with_override(std::env::var(DOWNLOAD_DIR_ENV).ok().as_deref())
    }

    /// Uses `dir` when it is set and not blank, expanding a leading `~`.
    pub fn with_override(dir: Option<&str>) -> Self {
        match dir.map(str::trim) {
            Some(dir) if !dir.is_empty() => {
                log::debug!("Using {DOWNLOAD_DIR_ENV}={dir}");
                Session::new(fs::expand_home(dir))
            }
            _ => Session::default(),
        }
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    pub fn set_download_dir(&mut self, dir: PathBuf) {
        self.download_dir = dir;
    }

    pub fn destination(&self, filename: &str) -> PathBuf {
        self.download_dir.join(filename)
    }
}

pub fn default_download_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(DEFAULT_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DIR_NAME))
}
