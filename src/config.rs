use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Environment variable naming a json config file to load at startup
pub const CONFIG_ENV_VAR: &str = "SKETCHPAD_CONFIG";

/// Magnitudes for the three entries of the brush size chooser
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushSizes {
    pub small: f32,
    pub medium: f32,
    pub large: f32,
}

impl Default for BrushSizes {
    fn default() -> Self {
        Self {
            small: 10.0,
            medium: 20.0,
            large: 30.0,
        }
    }
}

/// Application configuration.
///
/// Every field has a default so a partial (or missing) config file is fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Minimum displacement, in surface pixels, before a move sample is accepted
    pub jitter_tolerance: f32,
    pub brush_sizes: BrushSizes,
    /// Stroke width selected together with the line and rectangle tools
    pub shape_outline_width: f32,
    /// Stroke width before the user picks a size
    pub default_brush_width: f32,
    pub corner_radius: f32,
    /// Directory drawings are exported into
    pub save_dir: PathBuf,
    pub initial_canvas_size: [u32; 2],
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            jitter_tolerance: 4.0,
            brush_sizes: BrushSizes::default(),
            shape_outline_width: 5.0,
            default_brush_width: 12.0,
            corner_radius: 20.0,
            save_dir: default_save_dir(),
            initial_canvas_size: [800, 600],
        }
    }
}

impl SketchConfig {
    /// Load a config from a json file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&text)?;
        Ok(config)
    }

    /// Load the config named by [`CONFIG_ENV_VAR`], falling back to defaults
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        let path = PathBuf::from(path);
        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("Ignoring config {}: {}", path.display(), err);
                Self::default()
            }
        }
    }
}

fn default_save_dir() -> PathBuf {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Drawing")
}
