use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Event poll timeout in milliseconds
    pub tick_rate_ms: u64,
    /// Default log filter when RUST_LOG is unset
    pub log_level: String,
    /// Capture mouse events (disables terminal text selection)
    pub mouse_capture: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            log_level: "info".to_string(),
            mouse_capture: false,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".spring-smart"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    /// Load the user config
    ///
    /// `Ok(None)` when there is no config file; an error when the file exists
    /// but cannot be read or parsed.
    pub fn load() -> anyhow::Result<Option<Config>> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path).map(Some),
            _ => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Config> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> anyhow::Result<Config> {
        serde_json::from_str(contents)
            .map_err(|e| anyhow::anyhow!("Invalid config.json: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.log_level, "info");
        assert!(!config.mouse_capture);
    }

    #[test]
    fn test_parse_partial_uses_defaults() {
        let config = Config::parse(r#"{ "log_level": "debug" }"#).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.tick_rate_ms, 100);
    }

    #[test]
    fn test_parse_full() {
        let config =
            Config::parse(r#"{ "tick_rate_ms": 250, "log_level": "warn", "mouse_capture": true }"#)
                .unwrap();
        assert_eq!(config.tick_rate(), Duration::from_millis(250));
        assert!(config.mouse_capture);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        let err = Config::parse("{ not json").unwrap_err();
        assert!(err.to_string().starts_with("Invalid config.json"));
    }

    #[test]
    fn test_zero_tick_rate_is_clamped() {
        let config = Config {
            tick_rate_ms: 0,
            ..Config::default()
        };
        assert_eq!(config.tick_rate(), Duration::from_millis(1));
    }

    #[test]
    fn test_load_from_file() {
        let path = env::temp_dir().join(format!("spring-smart-config-{}.json", std::process::id()));
        fs::write(&path, r#"{ "tick_rate_ms": 50 }"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(config.tick_rate_ms, 50);
    }
}
