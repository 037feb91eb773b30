use crate::error::{Result, TaskError};
use crate::model::{Priority, User};
use crate::view::ViewMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_VIEW: &str = "overview";

/// Configuration for taskdeck, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskdeckConfig {
    /// View used when `list` is run without `--view`
    #[serde(default = "default_view")]
    pub default_view: String,

    /// Priority given to new tasks when none is specified
    #[serde(default)]
    pub default_priority: Priority,

    /// Display name of the session user; falls back to `$USER`
    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub email: Option<String>,
}

fn default_view() -> String {
    DEFAULT_VIEW.to_string()
}

impl Default for TaskdeckConfig {
    fn default() -> Self {
        Self {
            default_view: default_view(),
            default_priority: Priority::default(),
            username: None,
            email: None,
        }
    }
}

/// Keys accepted by `taskdeck config <key> [value]`.
pub const CONFIG_KEYS: &[&str] = &["default-view", "default-priority", "username", "email"];

impl TaskdeckConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TaskError::Io)?;
        let config: TaskdeckConfig =
            serde_json::from_str(&content).map_err(TaskError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TaskError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TaskError::Serialization)?;
        fs::write(config_path, content).map_err(TaskError::Io)?;
        Ok(())
    }

    pub fn view_mode(&self) -> ViewMode {
        ViewMode::from_name(&self.default_view)
    }

    pub fn user(&self) -> User {
        let username = self
            .username
            .clone()
            .or_else(|| std::env::var("USER").ok())
            .unwrap_or_else(|| "anonymous".to_string());
        User::new(username, self.email.clone().unwrap_or_default())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "default-view" => Ok(self.default_view.clone()),
            "default-priority" => Ok(self.default_priority.to_string()),
            "username" => Ok(self.user().username),
            "email" => Ok(self.email.clone().unwrap_or_default()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "default-view" => {
                let mode = ViewMode::from_name(value);
                if let ViewMode::Unrecognized(name) = &mode {
                    return Err(TaskError::Config(format!("Unknown view mode: {}", name)));
                }
                self.default_view = mode.name().to_string();
            }
            "default-priority" => {
                self.default_priority = Priority::from_name(value)
                    .ok_or_else(|| TaskError::Config(format!("Unknown priority: {}", value)))?;
            }
            "username" => self.username = Some(value.to_string()),
            "email" => self.email = Some(value.to_string()),
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> TaskError {
    TaskError::Config(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TaskdeckConfig::default();
        assert_eq!(config.default_view, "overview");
        assert_eq!(config.default_priority, Priority::Medium);
        assert_eq!(config.view_mode(), ViewMode::Overview);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = TaskdeckConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, TaskdeckConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("nested");

        let mut config = TaskdeckConfig::default();
        config.set("default-view", "Week").unwrap();
        config.set("default-priority", "high").unwrap();
        config.save(&dir).unwrap();

        let loaded = TaskdeckConfig::load(&dir).unwrap();
        assert_eq!(loaded.default_view, "week");
        assert_eq!(loaded.default_priority, Priority::High);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"username": "ada"}"#,
        )
        .unwrap();
        let config = TaskdeckConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.default_view, "overview");
        assert_eq!(config.user().username, "ada");
    }

    #[test]
    fn test_rejects_unknown_values() {
        let mut config = TaskdeckConfig::default();
        assert!(config.set("default-view", "fortnight").is_err());
        assert!(config.set("default-priority", "urgent").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert!(config.get("colour").is_err());
        assert_eq!(config, TaskdeckConfig::default());
    }
}
