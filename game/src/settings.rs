use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context};
use log::info;
use serde::Deserialize;

use crate::constants::{INITIAL_LIVES, WORLD_HEIGHT, WORLD_WIDTH};

pub const CONFIG_ENV_VAR: &str = "BREAKOUT_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "breakout.toml";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH as u32,
            height: WORLD_HEIGHT as u32,
            fps: 60,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GameplaySettings {
    pub lives: u32,
    /// Fixed seed for a reproducible level; a random one is used when absent.
    pub seed: Option<u64>,
}

impl Default for GameplaySettings {
    fn default() -> Self {
        Self {
            lives: INITIAL_LIVES,
            seed: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    pub gameplay: GameplaySettings,
}

impl Settings {
    pub fn from_toml_str(raw: &str) -> anyhow::Result<Self> {
        let settings: Settings = toml::from_str(raw).context("parse settings TOML")?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read settings from {}", path.display()))?;
        Self::from_toml_str(&raw).with_context(|| format!("load settings from {}", path.display()))
    }

    /// Reads the file named by `BREAKOUT_CONFIG`, or `breakout.toml` in the
    /// working directory. Without either, the defaults are used.
    pub fn load() -> anyhow::Result<Self> {
        let path = match env::var_os(CONFIG_ENV_VAR) {
            Some(path) => PathBuf::from(path),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.exists() {
                    info!("No {} found, using default settings", DEFAULT_CONFIG_FILE);
                    return Ok(Self::default());
                }
                fallback
            }
        };

        let settings = Self::load_from(&path)?;
        info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.window.width > 0 && self.window.height > 0,
            "window size must be non-zero, got {}x{}",
            self.window.width,
            self.window.height
        );
        ensure!(self.window.fps > 0, "fps must be non-zero");
        ensure!(self.gameplay.lives > 0, "lives must be at least 1");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.window.width, 800);
        assert_eq!(settings.window.height, 600);
        assert_eq!(settings.window.fps, 60);
        assert_eq!(settings.gameplay.lives, INITIAL_LIVES);
        assert_eq!(settings.gameplay.seed, None);
    }

    #[test]
    fn test_partial_override() {
        let raw = r#"
            [window]
            width = 1080
            height = 720

            [gameplay]
            seed = 42
        "#;
        let settings = Settings::from_toml_str(raw).unwrap();

        assert_eq!(settings.window.width, 1080);
        assert_eq!(settings.window.height, 720);
        assert_eq!(settings.window.fps, 60);
        assert_eq!(settings.gameplay.lives, INITIAL_LIVES);
        assert_eq!(settings.gameplay.seed, Some(42));
    }

    #[test]
    fn test_rejects_zero_values() {
        assert!(Settings::from_toml_str("[window]\nfps = 0").is_err());
        assert!(Settings::from_toml_str("[window]\nwidth = 0").is_err());
        assert!(Settings::from_toml_str("[gameplay]\nlives = 0").is_err());
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = Settings::from_toml_str("[window\nwidth = ").unwrap_err();
        assert!(format!("{err:#}").contains("parse settings TOML"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = Settings::load_from(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("here.toml"));
    }
}
