//! Editor configuration.

use crate::shapes::{ColorError, SerializableColor};
use crate::snap::SnapConfig;
use kurbo::Size;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid canvas size: {width}x{height}")]
    CanvasSize { width: f64, height: f64 },
    #[error("Invalid snap threshold: {0}")]
    Threshold(f64),
    #[error("Invalid background color: {0}")]
    Background(#[from] ColorError),
}

/// Settings for an editing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Initial background, as `#rrggbb`.
    pub background: String,
    pub snap: SnapConfig,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_width: 256.0,
            canvas_height: 256.0,
            background: "#ffffff".to_string(),
            snap: SnapConfig::default(),
        }
    }
}

impl EditorConfig {
    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size_ok = |v: f64| v.is_finite() && v >= 0.0;
        if !size_ok(self.canvas_width) || !size_ok(self.canvas_height) {
            return Err(ConfigError::CanvasSize {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        if !self.snap.threshold.is_finite() || self.snap.threshold < 0.0 {
            return Err(ConfigError::Threshold(self.snap.threshold));
        }
        self.background_color()?;
        Ok(())
    }

    pub fn canvas_size(&self) -> Size {
        Size::new(self.canvas_width, self.canvas_height)
    }

    pub fn background_color(&self) -> Result<SerializableColor, ColorError> {
        SerializableColor::from_hex(&self.background)
    }
}
