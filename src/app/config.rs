use super::keymap::KeyConfig;
use super::state::{DEFAULT_MAX_VISIBLE, DEFAULT_TITLE};
use crate::theme::PaletteType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub guests: Option<PathBuf>,
    pub title: String,
    pub theme: PaletteType,
    pub max_visible: usize,
    pub keys: KeyConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            guests: None,
            title: DEFAULT_TITLE.to_string(),
            theme: PaletteType::CatppuccinMocha,
            max_visible: DEFAULT_MAX_VISIBLE,
            keys: KeyConfig::default(),
        }
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("seatfinder");
        path.push("config.toml");
        path
    })
}

pub fn get_log_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".cache");
        path.push("seatfinder");
        path
    })
}

/// First directory that exists or can be created for the log file:
/// `preferred`, then the system temp dir.
pub fn prepare_log_dir(preferred: Option<PathBuf>) -> Option<PathBuf> {
    preferred
        .into_iter()
        .chain(std::iter::once(std::env::temp_dir()))
        .find(|dir| std::fs::create_dir_all(dir).is_ok())
}

/// Load the config from `explicit`, or from the default location when it exists.
/// An explicit path must exist; a missing default file yields the defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match get_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(AppConfig::default()),
        },
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("reading config {}", path.display()))?;
    parse_config(&content)
        .with_context(|| format!("parsing config {}", path.display()))
}

pub fn parse_config(content: &str) -> Result<AppConfig> {
    Ok(toml::from_str(content)?)
}
