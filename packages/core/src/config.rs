//! Editor configuration read at start-up
//!
//! Stored as `config.json` in the platform config directory. Every field has
//! a default, so a partial file only overrides what it names.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::background::{GradientDirection, DEFAULT_LINEAR_GRADIENT_DIRECTION, DEFAULT_NOISE};
use crate::catalog::{self, GradientPreset};
use crate::{ImprintError, ImprintResult};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// `tracing_subscriber` filter used when `RUST_LOG` is not set
    pub log_filter: String,
    /// Name of the gradient preset a new template starts with
    pub default_gradient: String,
    pub default_direction: GradientDirection,
    pub default_noise: f32,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            log_filter: "info,imprint=debug".to_string(),
            default_gradient: catalog::default_gradient().name.to_string(),
            default_direction: DEFAULT_LINEAR_GRADIENT_DIRECTION,
            default_noise: DEFAULT_NOISE,
            window_width: 1200.0,
            window_height: 800.0,
        }
    }
}

impl EditorConfig {
    /// Platform config file location
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("app", "imprint", "Imprint")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| std::env::temp_dir().join("imprint"))
            .join(CONFIG_FILE_NAME)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> ImprintResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let config: EditorConfig = serde_json::from_str(&json)?;
        config.validate()?;
        debug!("Loaded editor config from {:?}", path);
        Ok(config)
    }

    /// Load from the platform location, falling back to defaults when no file exists
    pub fn load_or_default() -> ImprintResult<Self> {
        let path = Self::default_path();
        if !path.exists() {
            info!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    pub fn save(&self, path: &Path) -> ImprintResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        info!("Saved editor config to {:?}", path);
        Ok(())
    }

    pub fn validate(&self) -> ImprintResult<()> {
        self.gradient_preset()?;
        if !(0.0..=1.0).contains(&self.default_noise) {
            return Err(ImprintError::config(format!(
                "default_noise must be between 0 and 1, got {}",
                self.default_noise
            )));
        }
        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            return Err(ImprintError::config("window size must be positive"));
        }
        Ok(())
    }

    pub fn gradient_preset(&self) -> ImprintResult<&'static GradientPreset> {
        catalog::find_gradient(&self.default_gradient).ok_or_else(|| {
            ImprintError::config(format!(
                "unknown gradient preset {:?}",
                self.default_gradient
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = EditorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_gradient, "Sunset");
        assert_eq!(config.default_direction, GradientDirection::ToTopRight);
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        let config = EditorConfig {
            default_gradient: "Ocean".to_string(),
            default_direction: GradientDirection::ToBottom,
            ..Default::default()
        };
        config.save(&path).unwrap();

        let loaded = EditorConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{"default_direction": "to left"}"#).unwrap();

        let loaded = EditorConfig::load(&path).unwrap();
        assert_eq!(loaded.default_direction, GradientDirection::ToLeft);
        assert_eq!(loaded.log_filter, EditorConfig::default().log_filter);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        std::fs::write(&path, r#"{"default_gradient": "Plaid"}"#).unwrap();
        assert!(matches!(EditorConfig::load(&path), Err(ImprintError::Config(_))));

        std::fs::write(&path, r#"{"default_noise": 2.0}"#).unwrap();
        assert!(matches!(EditorConfig::load(&path), Err(ImprintError::Config(_))));

        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            EditorConfig::load(&path),
            Err(ImprintError::Serialization(_))
        ));

        assert!(matches!(
            EditorConfig::load(&dir.path().join("missing.json")),
            Err(ImprintError::Io(_))
        ));
    }
}
