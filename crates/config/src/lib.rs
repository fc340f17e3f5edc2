//! Layered configuration for the tome binary.
//!
//! Values are resolved in increasing precedence:
//!
//! 1. Built-in defaults
//! 2. `tome.toml` in the platform config directory (or an explicit path)
//! 3. Environment variables prefixed with `TOME_` (nested keys separated
//!    by `__`, e.g. `TOME_SEARCH__MAX_LIMIT=50`)

pub mod error;

use crate::error::{ErrorKind, Result};
use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const ENV_PREFIX: &str = "TOME_";
const CONFIG_FILE: &str = "tome.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub dataset: DatasetConfig,
    pub store: StoreConfig,
    pub search: SearchConfig,
}

/// Where the bulk dataset snapshot lives, if one has been downloaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub snapshot: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the SQLite library database.
    pub database: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Result count when the caller doesn't ask for one.
    pub default_limit: usize,
    /// Hard cap on the result count a caller may ask for.
    pub max_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = ProjectDirs::from("", "", "tome")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            dataset: DatasetConfig { snapshot: None },
            store: StoreConfig { database: data_dir.join("library.db") },
            search: SearchConfig { default_limit: 10, max_limit: 100 },
        }
    }
}

impl Config {
    /// Load configuration from the default file location, the environment,
    /// and built-in defaults.
    pub fn load() -> Result<Self> {
        let file = ProjectDirs::from("", "", "tome").map(|dirs| dirs.config_dir().join(CONFIG_FILE));
        Self::figment(file.as_deref()).extract::<Self>().or_raise(|| ErrorKind::Invalid)?.validated()
    }

    /// Load configuration from an explicit file instead of the default
    /// location. The file must exist.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            exn::bail!(ErrorKind::FileNotFound(path.to_path_buf()));
        }
        Self::figment(Some(path)).extract::<Self>().or_raise(|| ErrorKind::Invalid)?.validated()
    }

    fn figment(file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(file) = file {
            debug!(file = %file.display(), "layering configuration file");
            figment = figment.merge(Toml::file(file));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn validated(self) -> Result<Self> {
        if self.search.default_limit == 0 || self.search.max_limit == 0 {
            exn::bail!(ErrorKind::Invalid);
        }
        if self.search.default_limit > self.search.max_limit {
            exn::bail!(ErrorKind::Invalid);
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default().validated().unwrap();
        assert_eq!(config.search.default_limit, 10);
        assert_eq!(config.search.max_limit, 100);
        assert!(config.dataset.snapshot.is_none());
    }

    #[test]
    fn test_load_from_missing_file() {
        let error = Config::load_from("/nonexistent/tome.toml").unwrap_err();
        assert!(matches!(&*error, ErrorKind::FileNotFound(_)));
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[search]\ndefault_limit = 5\nmax_limit = 20").unwrap();
        writeln!(file, "[store]\ndatabase = \"/tmp/books.db\"").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.search.default_limit, 5);
        assert_eq!(config.search.max_limit, 20);
        assert_eq!(config.store.database, PathBuf::from("/tmp/books.db"));
    }

    #[test]
    fn test_default_limit_above_max_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[search]\ndefault_limit = 50\nmax_limit = 10").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_zero_limits_are_rejected() {
        let config = Config {
            search: SearchConfig { default_limit: 0, max_limit: 100 },
            ..Config::default()
        };
        assert!(config.validated().is_err());
    }
}
