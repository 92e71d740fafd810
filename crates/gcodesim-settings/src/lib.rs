//! GCodeSim Settings Crate
//!
//! Handles application configuration: parser behaviour, playback defaults,
//! and the recent files list, persisted as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{Config, CoordinateMode, ParserSettings, PlaybackSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
