//! TOML-based application configuration.
//!
//! Stores presentation defaults only: the input values assumed when a
//! `predict` flag is omitted, and whether the analysis trace is shown.
//! Profile parameters are compile-time constants and are not configurable.
//!
//! Configuration is stored at `~/.config/focusmeter/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::profile::UserCategory;
use crate::scoring::{StudyType, SubjectDifficulty};

/// Config directory, honoring `FOCUSMETER_ENV=dev` for a separate dev tree.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("FOCUSMETER_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("focusmeter-dev")
    } else {
        base_dir.join("focusmeter")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::LoadFailed {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}

/// Default inputs used when a `predict` flag is omitted.
///
/// The values mirror the initial positions of the input controls: a short
/// mid-morning session with low noise and low fatigue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_category")]
    pub category: UserCategory,
    #[serde(default = "default_work_minutes")]
    pub work_minutes: u32,
    #[serde(default)]
    pub breaks_taken: u32,
    #[serde(default = "default_noise_level")]
    pub noise_level: u32,
    #[serde(default = "default_fatigue_level")]
    pub fatigue_level: u32,
    #[serde(default = "default_difficulty")]
    pub subject_difficulty: SubjectDifficulty,
    #[serde(default = "default_study_type")]
    pub study_type: StudyType,
    #[serde(default = "default_days_until_exam")]
    pub days_until_exam: u32,
}

fn default_category() -> UserCategory {
    UserCategory::General
}
fn default_work_minutes() -> u32 {
    45
}
fn default_noise_level() -> u32 {
    2
}
fn default_fatigue_level() -> u32 {
    3
}
fn default_difficulty() -> SubjectDifficulty {
    SubjectDifficulty::Easy
}
fn default_study_type() -> StudyType {
    StudyType::Revision
}
fn default_days_until_exam() -> u32 {
    15
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            category: default_category(),
            work_minutes: default_work_minutes(),
            breaks_taken: 0,
            noise_level: default_noise_level(),
            fatigue_level: default_fatigue_level(),
            subject_difficulty: default_difficulty(),
            study_type: default_study_type(),
            days_until_exam: default_days_until_exam(),
        }
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/focusmeter/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Always print the analysis trace, as if `--trace` were passed.
    #[serde(default)]
    pub show_trace: bool,
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Load from disk or return (and persist) the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Get a config value as a string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let d = &self.defaults;
        match key {
            "defaults.category" => Some(d.category.name().to_string()),
            "defaults.work_minutes" => Some(d.work_minutes.to_string()),
            "defaults.breaks_taken" => Some(d.breaks_taken.to_string()),
            "defaults.noise_level" => Some(d.noise_level.to_string()),
            "defaults.fatigue_level" => Some(d.fatigue_level.to_string()),
            "defaults.subject_difficulty" => {
                Some(format!("{:?}", d.subject_difficulty).to_lowercase())
            }
            "defaults.study_type" => match d.study_type {
                StudyType::Revision => Some("revision".to_string()),
                StudyType::NewTopic => Some("new_topic".to_string()),
            },
            "defaults.days_until_exam" => Some(d.days_until_exam.to_string()),
            "show_trace" => Some(self.show_trace.to_string()),
            _ => None,
        }
    }

    /// Set a config value by dot-separated key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value cannot be parsed.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let d = &mut self.defaults;
        match key {
            "defaults.category" => {
                d.category = UserCategory::from_str(value).map_err(invalid)?;
            }
            "defaults.work_minutes" => {
                d.work_minutes = value.parse().map_err(|_| invalid(not_a_number(value)))?;
            }
            "defaults.breaks_taken" => {
                d.breaks_taken = value.parse().map_err(|_| invalid(not_a_number(value)))?;
            }
            "defaults.noise_level" => {
                d.noise_level = value.parse().map_err(|_| invalid(not_a_number(value)))?;
            }
            "defaults.fatigue_level" => {
                d.fatigue_level = value.parse().map_err(|_| invalid(not_a_number(value)))?;
            }
            "defaults.subject_difficulty" => {
                d.subject_difficulty = SubjectDifficulty::from_str(value).map_err(invalid)?;
            }
            "defaults.study_type" => {
                d.study_type = StudyType::from_str(value).map_err(invalid)?;
            }
            "defaults.days_until_exam" => {
                d.days_until_exam = value.parse().map_err(|_| invalid(not_a_number(value)))?;
            }
            "show_trace" => {
                self.show_trace = value
                    .parse()
                    .map_err(|_| invalid(format!("cannot parse '{value}' as bool")))?;
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }
}

fn not_a_number(value: &str) -> String {
    format!("cannot parse '{value}' as number")
}
