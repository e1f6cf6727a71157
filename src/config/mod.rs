// SPDX-License-Identifier: MPL-2.0
//! Construction-time configuration for the playback controller.
//!
//! Settings are read from a `controls.toml` file and never written back:
//! the controller does not persist anything across sessions.
//!
//! # Examples
//!
//! ```
//! use media_controls::config;
//!
//! let config = config::from_toml_str("initial_volume = 60.0").unwrap();
//! assert_eq!(config.initial_volume, 60.0);
//! assert_eq!(config.skip_step_secs, config::DEFAULT_SKIP_STEP_SECS);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::{OverlayDelay, RefreshInterval, SkipStep, VolumePercent, VolumeStep};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "controls.toml";
const APP_NAME: &str = "media_controls";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Volume applied when the controller attaches (0–100).
    pub initial_volume: f64,
    /// Seconds skipped by the arrow keys.
    pub skip_step_secs: f64,
    /// Percent points applied by volume up/down.
    pub volume_step: f64,
    /// Progress refresh period while playing.
    pub progress_refresh_ms: u64,
    /// Info overlay auto-hide delay.
    pub info_overlay_ms: u64,
    pub presentation: Presentation,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_volume: DEFAULT_VOLUME_PERCENT,
            skip_step_secs: DEFAULT_SKIP_STEP_SECS,
            volume_step: DEFAULT_VOLUME_STEP_PERCENT,
            progress_refresh_ms: DEFAULT_PROGRESS_REFRESH_MS,
            info_overlay_ms: DEFAULT_INFO_OVERLAY_MS,
            presentation: Presentation::default(),
        }
    }
}

impl Config {
    #[must_use]
    pub fn initial_volume(&self) -> VolumePercent {
        VolumePercent::new(self.initial_volume)
    }

    #[must_use]
    pub fn skip_step(&self) -> SkipStep {
        SkipStep::new(self.skip_step_secs)
    }

    #[must_use]
    pub fn volume_step(&self) -> VolumeStep {
        VolumeStep::new(self.volume_step)
    }

    #[must_use]
    pub fn refresh_interval(&self) -> RefreshInterval {
        RefreshInterval::new(self.progress_refresh_ms)
    }

    #[must_use]
    pub fn overlay_delay(&self) -> OverlayDelay {
        OverlayDelay::new(self.info_overlay_ms)
    }
}

/// Inert presentation values passed through to the view layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Presentation {
    pub accent_color: String,
    pub bar_height: f32,
}

impl Default for Presentation {
    fn default() -> Self {
        Self {
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
            bar_height: DEFAULT_BAR_HEIGHT,
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the platform config directory, falling back
/// to defaults when no file exists.
pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

/// Parses a configuration from TOML text.
pub fn from_toml_str(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}

/// Reads a configuration file.
///
/// I/O failures propagate; a file that is not valid TOML yields the defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match from_toml_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            log::warn!("ignoring invalid config at {}: {err}", path.display());
            Ok(Config::default())
        }
    }
}
