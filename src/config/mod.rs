use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::schedule::SessionType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ClockFormat {
    #[default]
    Hour24,      // "14:30"
    Hour12,      // "2:30pm"
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_font_scale")]
    pub font_scale: f32,
    #[serde(default)]
    pub clock_format: ClockFormat,
    /// Session type preselected on startup; clicking a chip changes the
    /// active type for the session without touching this
    #[serde(default)]
    pub default_session: SessionType,
}

fn default_font_scale() -> f32 {
    1.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            font_scale: 1.0,
            clock_format: ClockFormat::Hour24,
            default_session: SessionType::Study,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path)
                .context("Failed to read config file")?;
            serde_json::from_str(&contents)
                .context("Failed to parse config file")
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        // Ensure directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "studybox", "studybox")
            .context("Could not determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.font_scale, 1.0);
        assert_eq!(config.clock_format, ClockFormat::Hour24);
        assert_eq!(config.default_session, SessionType::Study);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();

        assert_eq!(config.font_scale, 1.0);
        assert_eq!(config.clock_format, ClockFormat::Hour24);
        assert_eq!(config.default_session, SessionType::Study);
    }

    #[test]
    fn test_round_trip() {
        let config = Config {
            font_scale: 1.25,
            clock_format: ClockFormat::Hour12,
            default_session: SessionType::Exam,
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.font_scale, 1.25);
        assert_eq!(parsed.clock_format, ClockFormat::Hour12);
        assert_eq!(parsed.default_session, SessionType::Exam);
    }
}
