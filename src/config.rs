//! Editor configuration
//!
//! Stored as RON in the platform config directory
//! (`<config_dir>/blockskin/config.ron`). A missing or broken file falls back
//! to defaults; the web build always uses defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use crate::editor::MultiClick;
use crate::skin::{Rgb, SkinError};

/// Tunables for the editor surface, layout and preview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Size of one editor cell in screen pixels
    pub cell_size: f32,
    /// Horizontal offset (in cells) of the overlay layer grid from the base grid
    pub overlay_column_offset: usize,
    /// Window for repeated presses on the same cell, in milliseconds
    pub double_click_ms: f64,
    /// Jitter offsets are drawn from -range..=range
    pub jitter_range: i16,
    /// What a quick second press on the same cell does
    pub multi_click: MultiClick,
    /// Initial camera distance from the model
    pub camera_distance: f32,
    /// Colors the palette starts with
    pub palette: Vec<Rgb>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            cell_size: 17.0,
            overlay_column_offset: 33,
            double_click_ms: 1000.0,
            jitter_range: 10,
            multi_click: MultiClick::RepeatCell,
            camera_distance: 35.0,
            palette: Vec::new(),
        }
    }
}

impl EditorConfig {
    /// Parse from RON text
    pub fn from_ron(text: &str) -> Result<Self, SkinError> {
        Ok(ron::from_str(text)?)
    }

    /// Pretty RON text
    pub fn to_ron(&self) -> Result<String, SkinError> {
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .indentor("  ".to_string());
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    /// Read from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SkinError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_ron(&text)
    }

    /// Write to a file, creating parent directories
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SkinError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_ron()?)?;
        Ok(())
    }

    /// Load from `path`, falling back to defaults when missing or invalid
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                info!("loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Default location of the config file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> std::path::PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("blockskin")
            .join("config.ron")
    }

    /// Same settings, starting with `colors` as the palette
    pub fn with_palette(&self, colors: &[Rgb]) -> Self {
        Self {
            palette: colors.to_vec(),
            ..self.clone()
        }
    }

    /// Write to the default location
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_platform(&self) -> Result<(), SkinError> {
        let path = Self::default_path();
        self.save(&path)?;
        info!("saved config to {}", path.display());
        Ok(())
    }

    /// Config for this platform
    pub fn load_platform() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::load_or_default(Self::default_path())
        }
        #[cfg(target_arch = "wasm32")]
        {
            Self::default()
        }
    }
}
