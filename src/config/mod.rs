use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const DEFAULT_TITLE: &str = "International Student Recruitment Strategy";
const DEFAULT_SUBTITLE: &str = "University of Bolton";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Branding {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_subtitle")]
    pub subtitle: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            title: default_title(),
            subtitle: default_subtitle(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    #[serde(default = "default_mouse")]
    pub mouse: bool,

    /// Width of the notes panel as a percentage of the body
    #[serde(default = "default_notes_width")]
    pub notes_width: u16,

    #[serde(default)]
    pub branding: Branding,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            mouse: default_mouse(),
            notes_width: default_notes_width(),
            branding: Branding::default(),
        }
    }
}

impl Config {
    pub fn notes_width_percent(&self) -> u16 {
        self.notes_width.clamp(20, 80)
    }
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_subtitle() -> String {
    DEFAULT_SUBTITLE.to_string()
}

fn default_tick_rate_ms() -> u64 {
    200
}

fn default_mouse() -> bool {
    true
}

fn default_notes_width() -> u16 {
    36
}

/// Load the config from the default location, falling back to defaults when
/// the file is missing or unreadable.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };
    if !path.exists() {
        return Config::default();
    }
    match load_from(&path) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "loaded config");
            config
        }
        Err(err) => {
            tracing::warn!("{err}; using defaults");
            Config::default()
        }
    }
}

pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<Config>(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("RECRUIT_DECK_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("recruit-deck").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("recruit-deck").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "recruit-deck", "recruit-deck")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("recruit-deck"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("recruit-deck"));
    }
    directories::ProjectDirs::from("io", "recruit-deck", "recruit-deck")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn log_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("recruit-deck.log"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_when_keys_missing() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.tick_rate_ms, 200);
        assert!(config.mouse);
        assert_eq!(config.notes_width, 36);
        assert_eq!(config.branding.title, DEFAULT_TITLE);
        assert_eq!(config.branding.subtitle, DEFAULT_SUBTITLE);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "tick_rate_ms = 50\nmouse = false\nnotes_width = 95\n\n[branding]\nsubtitle = \"Bolton\""
        )
        .unwrap();

        let config = load_from(file.path()).unwrap();
        assert_eq!(config.tick_rate_ms, 50);
        assert!(!config.mouse);
        assert_eq!(config.notes_width_percent(), 80);
        assert_eq!(config.branding.title, DEFAULT_TITLE);
        assert_eq!(config.branding.subtitle, "Bolton");
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(load_from(&missing), Err(ConfigError::Io { .. })));

        let bad = dir.path().join("bad.toml");
        fs::write(&bad, "tick_rate_ms = \"fast\"").unwrap();
        assert!(matches!(load_from(&bad), Err(ConfigError::Parse { .. })));
    }
}
