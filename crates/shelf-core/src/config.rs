//! Shell configuration

use serde::{Deserialize, Serialize};
use shelf_drag::DragConfig;
use shelf_tabs::Size;
use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Drag and detach thresholds for every tab strip
    pub drag: DragConfig,
    /// Size of windows opened without an explicit frame
    pub default_window_size: Size,
    /// Detached windows are never smaller than this
    pub min_window_size: Size,
    /// Folder shown by the first tab of a new window
    pub start_directory: PathBuf,
}

impl ShellConfig {
    pub fn new(start_directory: PathBuf) -> Self {
        Self {
            drag: DragConfig::default(),
            default_window_size: Size::new(1024.0, 700.0),
            min_window_size: Size::new(480.0, 320.0),
            start_directory,
        }
    }

    /// Parse and validate a JSON configuration document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, falling back to defaults when the file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;

        tracing::info!(path = %path.display(), "Loaded shell configuration");

        Ok(config)
    }

    /// Load from the platform config location
    pub fn load_default() -> Result<Self> {
        Self::load(&Self::config_path())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let thresholds = [self.drag.drag_threshold, self.drag.detach_threshold];
        if thresholds.iter().any(|t| !t.is_finite() || *t < 0.0) {
            return Err(CoreError::Config(
                "drag thresholds must be finite and non-negative".to_string(),
            ));
        }

        if self.drag.detach_threshold < self.drag.drag_threshold {
            return Err(CoreError::Config(format!(
                "detach threshold {} is below drag threshold {}",
                self.drag.detach_threshold, self.drag.drag_threshold
            )));
        }

        let min = self.min_window_size;
        if !(min.width > 0.0 && min.height > 0.0) {
            return Err(CoreError::Config(
                "minimum window size must be positive".to_string(),
            ));
        }

        Ok(())
    }

    /// Raise a requested window size to the configured minimum
    pub fn fit_window_size(&self, size: Size) -> Size {
        size.max(self.min_window_size)
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("shell.json")
    }

    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("shelf"))
            .unwrap_or_else(|| PathBuf::from(".shelf"))
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self::new(dirs::home_dir().unwrap_or_else(|| PathBuf::from("/")))
    }
}

mod dirs {
    use std::path::PathBuf;

    pub fn home_dir() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("USERPROFILE").ok().map(PathBuf::from)
        }
        #[cfg(not(target_os = "windows"))]
        {
            std::env::var("HOME").ok().map(PathBuf::from)
        }
    }

    pub fn config_dir() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("APPDATA").ok().map(PathBuf::from)
        }
        #[cfg(target_os = "macos")]
        {
            home_dir().map(|h| h.join("Library/Application Support"))
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        {
            std::env::var("XDG_CONFIG_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| home_dir().map(|h| h.join(".config")))
        }
    }
}
