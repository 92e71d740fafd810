//! Configuration for GCodeSim
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats, stored by default in the
//! platform-specific configuration directory.
//!
//! Configuration is organized into logical sections:
//! - Parser settings (coordinate carry-over, comment delimiter)
//! - Playback defaults (arc resolution, initial cursor position)
//! - Recent files

use crate::error::{ConfigError, SettingsError, SettingsResult};
pub use gcodesim_core::modes::CoordinateMode;
use gcodesim_core::constants::{COMMENT_CHAR, DEFAULT_ARC_SEGMENTS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Maximum number of recent files to keep in history
const DEFAULT_MAX_RECENT: usize = 10;

/// Parser settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserSettings {
    /// Coordinate carry-over behaviour
    pub coordinate_mode: CoordinateMode,
    /// Character that starts a line comment
    pub comment_char: char,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            coordinate_mode: CoordinateMode::Reset,
            comment_char: COMMENT_CHAR,
        }
    }
}

/// Playback settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Default number of vertices used to sample an arc for drawing
    pub arc_segments: u32,
    /// Show the whole program when it is first loaded
    pub start_at_end: bool,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            arc_segments: DEFAULT_ARC_SEGMENTS,
            start_at_end: false,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Parser settings
    pub parser: ParserSettings,
    /// Playback settings
    pub playback: PlaybackSettings,
    /// Recent files list
    pub recent_files: Vec<PathBuf>,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config location: `<config dir>/gcodesim/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("gcodesim").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no configuration directory on this platform".into())
            })
    }

    /// Load config from the default location, falling back to defaults if absent
    pub fn load_or_default() -> SettingsResult<Self> {
        let path = Self::default_path()?;
        if path.is_file() {
            Self::load_from_file(&path)
        } else {
            debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match Self::format_of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Self::format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.playback.arc_segments == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "playback.arc_segments".to_string(),
                value: self.playback.arc_segments.to_string(),
            });
        }

        let c = self.parser.comment_char;
        if c.is_alphanumeric() || c.is_whitespace() || c == '.' || c == '-' || c == '+' {
            return Err(ConfigError::ValueOutOfRange {
                key: "parser.comment_char".to_string(),
                value: format!("{:?}", c),
            });
        }

        Ok(())
    }

    /// Add file to recent files list
    pub fn add_recent_file(&mut self, path: PathBuf) {
        self.recent_files.retain(|f| f != &path);
        self.recent_files.insert(0, path);
        self.recent_files.truncate(DEFAULT_MAX_RECENT);
    }

    fn format_of(path: &Path) -> Result<Format, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

enum Format {
    Json,
    Toml,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::new();
        assert_eq!(config.parser.coordinate_mode, CoordinateMode::Reset);
        assert_eq!(config.parser.comment_char, ';');
        assert_eq!(config.playback.arc_segments, DEFAULT_ARC_SEGMENTS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_arc_segments_rejected() {
        let mut config = Config::new();
        config.playback.arc_segments = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange { .. })
        ));
    }

    #[test]
    fn test_alphanumeric_comment_char_rejected() {
        let mut config = Config::new();
        config.parser.comment_char = 'X';
        assert!(config.validate().is_err());
        config.parser.comment_char = '%';
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_recent_files_dedup_and_cap() {
        let mut config = Config::new();
        for i in 0..15 {
            config.add_recent_file(PathBuf::from(format!("part{}.gcode", i)));
        }
        config.add_recent_file(PathBuf::from("part10.gcode"));

        assert_eq!(config.recent_files.len(), DEFAULT_MAX_RECENT);
        assert_eq!(config.recent_files[0], PathBuf::from("part10.gcode"));
        assert_eq!(
            config
                .recent_files
                .iter()
                .filter(|p| **p == PathBuf::from("part10.gcode"))
                .count(),
            1
        );
    }

    #[test]
    fn test_coordinate_mode_serde_lowercase() {
        let json = serde_json::to_string(&CoordinateMode::Modal).unwrap();
        assert_eq!(json, "\"modal\"");
    }
}
