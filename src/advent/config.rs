//! # Configuration
//!
//! Stored as `config.json` next to the calendar snapshot. Missing file or missing keys
//! fall back to defaults.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `days` | `24` | Day count for a fresh calendar (clamped to 1–31) |
//! | `services` | `Netflix, Disney+, Amazon Prime, Paramount` | Suggested services |
//!
//! `days` only applies when no calendar has been saved yet; use `advent resize` to
//! change the size of an existing calendar.

use crate::calendar::{clamp_days, DEFAULT_DAYS};
use crate::error::{AdventError, Result};
use crate::model::SUGGESTED_SERVICES;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdventConfig {
    #[serde(default = "default_days")]
    pub days: u32,

    #[serde(default = "default_services")]
    pub services: Vec<String>,
}

fn default_days() -> u32 {
    DEFAULT_DAYS
}

fn default_services() -> Vec<String> {
    SUGGESTED_SERVICES.iter().map(|s| s.to_string()).collect()
}

impl Default for AdventConfig {
    fn default() -> Self {
        Self {
            days: default_days(),
            services: default_services(),
        }
    }
}

impl AdventConfig {
    pub const KEYS: [&'static str; 2] = ["days", "services"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(AdventError::Io)?;
        let config: AdventConfig =
            serde_json::from_str(&content).map_err(AdventError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(AdventError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(AdventError::Serialization)?;
        fs::write(config_path, content).map_err(AdventError::Io)?;
        Ok(())
    }

    /// Default day count, clamped to the valid range.
    pub fn default_days(&self) -> u32 {
        clamp_days(self.days)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "days" => Some(self.default_days().to_string()),
            "services" => Some(self.services.join(", ")),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "days" => {
                let days: u32 = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("Invalid day count: {}", value))?;
                self.days = clamp_days(days);
                Ok(())
            }
            "services" => {
                self.services = value
                    .split(',')
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect();
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AdventConfig::default();
        assert_eq!(config.days, 24);
        assert_eq!(
            config.services,
            vec!["Netflix", "Disney+", "Amazon Prime", "Paramount"]
        );
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = AdventConfig::load(temp.path().join("missing")).unwrap();
        assert_eq!(config, AdventConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let mut config = AdventConfig::default();
        config.set("days", "12").unwrap();
        config.save(temp.path()).unwrap();

        let loaded = AdventConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.days, 12);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), r#"{"days": 7}"#).unwrap();
        let loaded = AdventConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.days, 7);
        assert_eq!(loaded.services.len(), 4);
    }

    #[test]
    fn test_days_are_clamped() {
        let mut config = AdventConfig::default();
        config.set("days", "90").unwrap();
        assert_eq!(config.get("days").as_deref(), Some("31"));

        let hand_edited = AdventConfig {
            days: 0,
            ..Default::default()
        };
        assert_eq!(hand_edited.default_days(), 1);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = AdventConfig::default();
        assert!(config.set("days", "many").is_err());
        assert!(config.set("colour", "red").is_err());
    }

    #[test]
    fn test_set_services_list() {
        let mut config = AdventConfig::default();
        config.set("services", "Hulu, , Max").unwrap();
        assert_eq!(config.services, vec!["Hulu", "Max"]);
        assert_eq!(config.get("services").as_deref(), Some("Hulu, Max"));
    }
}
