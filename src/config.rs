//! Project configuration stored in `.taskboard/config.yaml`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TaskboardError};

const CONFIG_FILE: &str = "config.yaml";

/// Which durable store backs the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Loro,
    Sqlite,
}

impl Backend {
    pub fn file_name(&self) -> &'static str {
        match self {
            Backend::Loro => "board.loro",
            Backend::Sqlite => "board.db",
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::Loro => write!(f, "loro"),
            Backend::Sqlite => write!(f, "sqlite"),
        }
    }
}

impl std::str::FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "loro" => Ok(Backend::Loro),
            "sqlite" => Ok(Backend::Sqlite),
            _ => Err(format!("Unknown backend: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend: Backend,
    /// Snapshot output directory, relative to `.taskboard/`
    pub snapshot_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            snapshot_dir: PathBuf::from("snapshot"),
        }
    }
}

impl Config {
    /// Read `config.yaml` from `dir`. A missing file means defaults.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(&path)?;
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&raw)
            .map_err(|e| TaskboardError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn save(&self, dir: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        fs::write(dir.join(CONFIG_FILE), yaml)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.backend, Backend::Loro);
        assert_eq!(config.snapshot_dir, PathBuf::from("snapshot"));
    }

    #[test]
    fn test_missing_file_is_default() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(Config::load(tmp.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let tmp = TempDir::new().unwrap();
        let config = Config {
            backend: Backend::Sqlite,
            snapshot_dir: PathBuf::from("out"),
        };
        config.save(tmp.path()).unwrap();

        let raw = fs::read_to_string(tmp.path().join(CONFIG_FILE)).unwrap();
        assert!(raw.contains("backend: sqlite"));
        assert_eq!(Config::load(tmp.path()).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "backend: sqlite\n").unwrap();

        let config = Config::load(tmp.path()).unwrap();
        assert_eq!(config.backend, Backend::Sqlite);
        assert_eq!(config.snapshot_dir, PathBuf::from("snapshot"));
    }

    #[test]
    fn test_invalid_yaml_is_config_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "backend: [unclosed\n").unwrap();

        let result = Config::load(tmp.path());
        assert!(matches!(result, Err(TaskboardError::Config(_))));
    }

    #[test]
    fn test_backend_from_str() {
        assert_eq!("SQLite".parse::<Backend>().unwrap(), Backend::Sqlite);
        assert!("redis".parse::<Backend>().is_err());
    }
}
