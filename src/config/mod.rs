use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::app::Tab;
use crate::domain::StatusFilter;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub initial_tab: Tab,
    pub status_filter: StatusFilter,
    pub tick_rate_ms: u64,
    pub log_level: String,
    pub export_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_tab: Tab::Dashboard,
            status_filter: StatusFilter::All,
            tick_rate_ms: 200,
            log_level: "info".to_string(),
            export_dir: None,
        }
    }
}

impl Config {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str::<Config>(content).context("invalid config")
    }

    pub fn export_dir(&self) -> Option<PathBuf> {
        self.export_dir.as_deref().and_then(expand_path)
    }
}

/// Load the config file. A missing file yields defaults; an unreadable or
/// malformed one is an error so the caller can surface it.
pub fn load(path_override: Option<&Path>) -> Result<Config> {
    let Some(path) = path_override.map(Path::to_path_buf).or_else(config_path) else {
        return Ok(Config::default());
    };
    if !path.exists() {
        return Ok(Config::default());
    }
    let content =
        fs::read_to_string(&path).with_context(|| format!("read config {}", path.display()))?;
    Config::parse(&content).with_context(|| format!("parse config {}", path.display()))
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("ASSYAD_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("assyad").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("assyad").join("config.toml"));
    }

    directories::ProjectDirs::from("com", "assyad", "assyad")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("assyad"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("assyad"));
    }
    directories::ProjectDirs::from("com", "assyad", "assyad")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn log_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("assyad.log"))
}

pub fn expand_path(path: &str) -> Option<PathBuf> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(rest) = trimmed.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
            return Some(home.join(rest));
        }
    }

    Some(PathBuf::from(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse(
            r#"
            initial_tab = "content"
            status_filter = "draft"
            tick_rate_ms = 100
            log_level = "debug"
            export_dir = "/tmp/assyad-exports"
            "#,
        )
        .unwrap();
        assert_eq!(config.initial_tab, Tab::Content);
        assert_eq!(config.status_filter, StatusFilter::Draft);
        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.log_level, "debug");
        assert_eq!(
            config.export_dir(),
            Some(PathBuf::from("/tmp/assyad-exports"))
        );
    }

    #[test]
    fn test_invalid_tab_is_rejected() {
        assert!(Config::parse("initial_tab = \"settings\"").is_err());
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load(Some(&dir.path().join("missing.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "initial_tab = \"media\"\n").unwrap();
        assert_eq!(load(Some(&path)).unwrap().initial_tab, Tab::Media);
    }

    #[test]
    fn test_expand_path() {
        assert_eq!(expand_path("   "), None);
        assert_eq!(expand_path("/var/x"), Some(PathBuf::from("/var/x")));
    }
}
