/// Application configuration
///
/// Read once at startup from `<config dir>/photo-gallery/config.json`
/// (or the path in `PHOTO_GALLERY_CONFIG`). Every field is optional; a
/// missing file means defaults, a broken one means defaults plus a warning.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{GalleryError, Result};

/// Environment variable overriding the config file location
pub const CONFIG_ENV_VAR: &str = "PHOTO_GALLERY_CONFIG";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Window and header title
    pub title: String,
    /// Open in grid mode instead of list mode
    pub start_in_grid: bool,
    /// Side of a grid tile in logical pixels
    pub grid_tile_size: f32,
    /// Height of the image in a list card
    pub list_image_height: f32,
    /// Longest side of decoded thumbnails, in pixels
    pub thumbnail_size: u32,
    pub fetch_timeout_secs: u64,
    /// Attempts per image before it is shown as unavailable
    pub max_retries: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Галерея".to_string(),
            start_in_grid: false,
            grid_tile_size: 150.0,
            list_image_height: 200.0,
            thumbnail_size: 512,
            fetch_timeout_secs: 30,
            max_retries: 3,
        }
    }
}

impl Config {
    /// Load the config from the default location, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            log::warn!("Could not determine config directory, using defaults");
            return Self::default();
        };

        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Read and parse a config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents).map_err(|e| GalleryError::Config {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Get the path where the config file should be read from
    fn config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(path));
        }

        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("photo-gallery");
        path.push("config.json");
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_original_layout() {
        let config = Config::default();
        assert_eq!(config.grid_tile_size, 150.0);
        assert_eq!(config.list_image_height, 200.0);
        assert!(!config.start_in_grid);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = Config::from_json(r#"{ "start_in_grid": true, "max_retries": 1 }"#).unwrap();

        assert!(config.start_in_grid);
        assert_eq!(config.max_retries, 1);
        assert_eq!(config.title, Config::default().title);
        assert_eq!(config.thumbnail_size, Config::default().thumbnail_size);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "title": "Photos", "grid_tile_size": 180.0 }}"#).unwrap();

        let config = Config::load_from(file.path()).unwrap();

        assert_eq!(config.title, "Photos");
        assert_eq!(config.grid_tile_size, 180.0);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, GalleryError::Config { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, GalleryError::Io(_)));
    }
}
