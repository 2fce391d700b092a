// src/config.rs

use crate::errors::{ParlorError, ParlorResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, sync::RwLock};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub theme: String,
    pub log_level: String,
    pub user_handle: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            log_level: "info".to_string(),
            user_handle: "@homoantropos".to_string(),
        }
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

pub fn initialize_config() -> ParlorResult<()> {
    let config_path = get_config_path()?;

    // If config exists, load it
    if config_path.exists() {
        let config = read_config(&config_path)?;
        *CONFIG.write().unwrap() = config;
    } else {
        // First run: write the defaults so the file is there to edit
        let config = Config::default();

        fs::create_dir_all(config_path.parent().unwrap()).map_err(|e| {
            ParlorError::config_error(format!("Failed to create config directory: {}", e))
        })?;

        let config_str = serde_json::to_string_pretty(&config)
            .map_err(|e| ParlorError::config_error(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, config_str)
            .map_err(|e| ParlorError::config_error(format!("Failed to write config file: {}", e)))?;

        *CONFIG.write().unwrap() = config;
    }

    Ok(())
}

fn read_config(path: &std::path::Path) -> ParlorResult<Config> {
    let config_str = fs::read_to_string(path)
        .map_err(|e| ParlorError::config_error(format!("Failed to read config file: {}", e)))?;

    let config: Config = serde_json::from_str(&config_str)
        .map_err(|e| ParlorError::config_error(format!("Failed to parse config: {}", e)))?;

    validate_config(&config)?;
    Ok(config)
}

fn get_config_path() -> ParlorResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| ParlorError::config_error("Could not determine home directory"))?;

    Ok(home_dir.join(".config").join("parlor").join("config.json"))
}

fn validate_config(config: &Config) -> ParlorResult<()> {
    if config.theme != "light" && config.theme != "dark" {
        return Err(ParlorError::config_error(format!(
            "theme must be 'light' or 'dark', got '{}'",
            config.theme
        )));
    }

    if config.log_level.is_empty() {
        return Err(ParlorError::config_error("log_level is required"));
    }

    if config.user_handle.is_empty() {
        return Err(ParlorError::config_error("user_handle is required"));
    }

    Ok(())
}

pub fn get_config() -> Config {
    CONFIG.read().unwrap().clone()
}

pub fn update_config(updated_config: Config) -> ParlorResult<()> {
    validate_config(&updated_config)?;

    let config_path = get_config_path()?;
    let config_str = serde_json::to_string_pretty(&updated_config)
        .map_err(|e| ParlorError::config_error(format!("Failed to serialize config: {}", e)))?;

    fs::write(&config_path, config_str)
        .map_err(|e| ParlorError::config_error(format!("Failed to write config file: {}", e)))?;

    *CONFIG.write().unwrap() = updated_config;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_read_config_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut f = fs::File::create(&path).unwrap();
        write!(
            f,
            r#"{{ "theme": "dark", "log_level": "debug", "user_handle": "@someone" }}"#
        )
        .unwrap();

        let config = read_config(&path).unwrap();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_read_config_rejects_invalid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut f = fs::File::create(&path).unwrap();
        write!(
            f,
            r#"{{ "theme": "sepia", "log_level": "info", "user_handle": "@x" }}"#
        )
        .unwrap();

        assert!(read_config(&path).is_err());
    }

    #[test]
    fn test_validate_config_valid() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_config_rejects_unknown_theme() {
        let mut config = Config::default();
        config.theme = "sepia".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_rejects_empty_log_level() {
        let mut config = Config::default();
        config.log_level = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_default_config_round_trips_through_json() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back.theme, config.theme);
        assert_eq!(back.user_handle, config.user_handle);
    }
}
