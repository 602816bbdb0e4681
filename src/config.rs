//! Tunable configuration.
//!
//! Values start from [`crate::constants::defaults`], are optionally
//! replaced by a TOML file and finally by command line flags.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

use crate::constants::defaults;
use crate::text::Locale;

/// How far the target jumps when the pointer gets too close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DisplacementMode {
    /// Closer pointer means a bigger jump, up to the maximum
    #[default]
    Proportional,
    /// Always jump by the maximum
    Fixed,
}

/// Repulsion and placement tunables.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EvasionConfig {
    /// Distance in columns under which the target reacts.
    pub repulsion_radius: f64,
    /// Largest displacement in percent of the viewport.
    pub max_displacement: f64,
    pub displacement: DisplacementMode,
    /// Margin in percent between the target and the viewport edges.
    pub edge_padding: f64,
    /// Height of a terminal cell relative to its width.
    pub cell_aspect: f64,
    /// Glide time of the rendered target, 0 to snap.
    pub glide_ms: u64,
}

impl Default for EvasionConfig {
    fn default() -> Self {
        Self {
            repulsion_radius: defaults::REPULSION_RADIUS,
            max_displacement: defaults::MAX_DISPLACEMENT,
            displacement: DisplacementMode::default(),
            edge_padding: defaults::EDGE_PADDING,
            cell_aspect: defaults::CELL_ASPECT,
            glide_ms: defaults::GLIDE_MS,
        }
    }
}

impl EvasionConfig {
    pub fn glide(&self) -> Duration {
        Duration::from_millis(self.glide_ms)
    }
}

/// Confirmation dialog countdown tunables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CountdownConfig {
    /// Time before the open dialog dismisses itself.
    pub duration_ms: u64,
    /// Interval between progress updates.
    pub tick_ms: u64,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            duration_ms: defaults::COUNTDOWN_MS,
            tick_ms: defaults::TICK_MS,
        }
    }
}

impl CountdownConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub locale: Locale,
    pub evasion: EvasionConfig,
    pub countdown: CountdownConfig,
}

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl Config {
    /// Platform config location, e.g. `~/.config/shybutton/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "shybutton").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Loads configuration.
    ///
    /// An explicit path must exist. Without one, the default path is used
    /// when present and built-in defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Reads and parses a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Checks that every tunable is in a usable range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let evasion = &self.evasion;
        // Infinite tunables turn the escape vector into NaN
        if !evasion.repulsion_radius.is_finite() || evasion.repulsion_radius <= 0.0 {
            return Err(invalid("repulsion_radius must be a finite number greater than 0"));
        }
        if !evasion.max_displacement.is_finite() || evasion.max_displacement < 0.0 {
            return Err(invalid("max_displacement must be a finite, non-negative number"));
        }
        if !(0.0..50.0).contains(&evasion.edge_padding) {
            return Err(invalid("edge_padding must be in [0, 50)"));
        }
        if !evasion.cell_aspect.is_finite() || evasion.cell_aspect <= 0.0 {
            return Err(invalid("cell_aspect must be a finite number greater than 0"));
        }

        let countdown = &self.countdown;
        if countdown.duration_ms == 0 {
            return Err(invalid("countdown duration_ms must be greater than 0"));
        }
        if countdown.tick_ms == 0 {
            return Err(invalid("countdown tick_ms must be greater than 0"));
        }
        if countdown.tick_ms > countdown.duration_ms {
            return Err(invalid("countdown tick_ms cannot exceed duration_ms"));
        }

        Ok(())
    }
}

fn invalid(message: &str) -> ConfigError {
    ConfigError::Invalid(message.to_string())
}
