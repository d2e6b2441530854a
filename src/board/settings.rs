//! Board configuration.
//!
//! The settings file (`config.yml`) lives outside the task directory, by
//! default at `~/.config/lanes/config.yml`, since every entry inside the
//! task directory is treated as a lane.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default location of the settings file, before tilde expansion.
pub const DEFAULT_CONFIG_PATH: &str = "~/.config/lanes/config.yml";

/// Configuration threaded through loading, saving and rendering.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// Directory holding the lane files and the optional `lanes` ordering file.
    pub tasks_dir: PathBuf,
    /// Splits a task line into description and details.
    pub separator: char,
    /// Maximum column width in the overview table.
    pub max_width: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            tasks_dir: PathBuf::from("tasks"),
            separator: '|',
            max_width: 20,
        }
    }
}

/// Errors that can occur when loading or validating settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("separator {0:?} cannot be whitespace or a backslash")]
    InvalidSeparator(char),

    #[error("max_width must be at least 3, got {0}")]
    WidthTooSmall(usize),
}

impl BoardConfig {
    /// Load settings from a file path.
    ///
    /// Returns the default config if the file doesn't exist. A leading `~`
    /// in `tasks_dir` is expanded to the home directory.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let mut config = match std::fs::read_to_string(path) {
            Ok(content) if content.trim().is_empty() => Self::default(),
            Ok(content) => serde_yaml::from_str::<BoardConfig>(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => return Err(SettingsError::Io(e)),
        };

        config.tasks_dir = expand_path(&config.tasks_dir);
        config.validate()?;
        Ok(config)
    }

    /// Ensure the values can be used by the parser and the renderer.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.separator.is_whitespace() || self.separator == '\\' {
            return Err(SettingsError::InvalidSeparator(self.separator));
        }
        // Truncation keeps `max_width - 3` characters before the dots.
        if self.max_width < 3 {
            return Err(SettingsError::WidthTooSmall(self.max_width));
        }
        Ok(())
    }

    /// Replace the task directory, e.g. from `--dir` or `LANES_DIR`.
    pub fn with_tasks_dir(mut self, dir: &Path) -> Self {
        self.tasks_dir = expand_path(dir);
        self
    }

    /// Path of the reserved ordering file.
    pub fn ordering_path(&self) -> PathBuf {
        self.tasks_dir.join(super::ORDERING_FILE)
    }

    /// Path of the file backing a lane.
    pub fn lane_path(&self, lane: &str) -> PathBuf {
        self.tasks_dir.join(lane)
    }
}

/// Resolve the settings file location, expanding `~`.
pub fn config_path(explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => expand_path(path),
        None => PathBuf::from(shellexpand::tilde(DEFAULT_CONFIG_PATH).to_string()),
    }
}

fn expand_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).to_string()),
        None => path.to_path_buf(),
    }
}
