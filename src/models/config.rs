use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserConfig {
    /// Track used when a command is given no track id.
    #[serde(default)]
    pub default_track: Option<String>,
    /// Treat validation warnings as failures.
    #[serde(default)]
    pub strict: bool,
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("langdeck").join("config.json"))
}

pub fn load_config() -> UserConfig {
    match get_config_path() {
        Some(path) => load_config_from(&path),
        None => UserConfig::default(),
    }
}

pub fn load_config_from(path: &Path) -> UserConfig {
    if !path.exists() {
        return UserConfig::default();
    }

    match fs::read_to_string(path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
            debug!("Ignoring unreadable config {}: {}", path.display(), e);
            UserConfig::default()
        }),
        Err(e) => {
            debug!("Ignoring unreadable config {}: {}", path.display(), e);
            UserConfig::default()
        }
    }
}

pub fn save_config(config: &UserConfig) -> Result<(), std::io::Error> {
    let path = get_config_path().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "Could not determine home directory")
    })?;
    save_config_to(&path, config)
}

pub fn save_config_to(path: &Path, config: &UserConfig) -> Result<(), std::io::Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents = serde_json::to_string_pretty(config)?;
    fs::write(path, contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("config.json"));
        assert_eq!(config, UserConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = UserConfig {
            default_track: Some("go".to_string()),
            strict: true,
        };
        save_config_to(&path, &config).unwrap();
        assert_eq!(load_config_from(&path), config);
    }

    #[test]
    fn test_corrupt_file_gives_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_config_from(&path), UserConfig::default());
    }

    #[test]
    fn test_unreadable_path_gives_default() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_config_from(dir.path()), UserConfig::default());
    }
}
