use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Smallest share a split may give either child after a resize.
pub const MIN_RATIO: f32 = 0.1;

/// Ratio of a freshly inserted split.
pub const INITIAL_RATIO: f32 = 0.5;

/// Tunables for tree edits.
///
/// Read from `<config dir>/tessel/layout.json`, e.g.
/// `{ "min_ratio": 0.15 }`. Missing keys keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub min_ratio: f32,
    pub initial_ratio: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_ratio: MIN_RATIO,
            initial_ratio: INITIAL_RATIO,
        }
    }
}

impl LayoutConfig {
    /// Largest share a split may give its left/top child after a resize.
    pub fn max_ratio(&self) -> f32 {
        1.0 - self.min_ratio
    }

    /// Clamp a resized ratio into `[min_ratio, max_ratio]` of the validated
    /// config, so hand-built configs with crossed or NaN bounds still clamp.
    pub fn clamp_ratio(&self, ratio: f32) -> f32 {
        let bounds = self.validated();
        ratio.clamp(bounds.min_ratio, bounds.max_ratio())
    }

    /// Pull out-of-range values back to something usable.
    pub fn validated(self) -> Self {
        let min_ratio = if self.min_ratio.is_finite() {
            self.min_ratio.clamp(0.01, 0.49)
        } else {
            MIN_RATIO
        };
        let initial_ratio = if self.initial_ratio.is_finite() {
            self.initial_ratio.clamp(min_ratio, 1.0 - min_ratio)
        } else {
            INITIAL_RATIO
        };
        Self {
            min_ratio,
            initial_ratio,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.validated())
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// `<config dir>/tessel/layout.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tessel").join("layout.json"))
    }

    /// Load from [`LayoutConfig::default_path`], falling back to defaults.
    pub fn load_or_default() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_or_default_from(&path),
            None => {
                log::warn!("No config directory, using default layout config");
                Self::default()
            }
        }
    }

    /// Load from `path`, falling back to defaults when the file is missing
    /// or invalid.
    pub fn load_or_default_from(path: &Path) -> Self {
        if !path.exists() {
            log::warn!("No layout config at {:?}, using defaults", path);
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring layout config: {}", e);
                Self::default()
            }
        }
    }
}
