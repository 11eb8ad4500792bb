//! Configuration stored in `.waymeet/config.toml`.
//!
//! ```toml
//! [storage]
//! backend = "file"          # memory | file | redis
//! path = "storage.json"     # relative to the .waymeet directory
//! redis_url = "${REDIS_URL}"
//! prefix = "waymeet"
//!
//! [latency]
//! enabled = true
//! scale = 1.0
//!
//! [location]
//! latitude = -23.3045
//! longitude = -51.1696
//! city = "Londrina, Brasil"
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{StoreError, StoreResult};
use crate::latency::Latency;
use crate::location::DEFAULT_LOCATION;
use crate::types::UserLocation;

pub const CONFIG_DIR: &str = ".waymeet";
pub const CONFIG_FILE: &str = "config.toml";
/// Overrides `[storage] backend`.
pub const STORAGE_ENV: &str = "WAYMEET_STORAGE";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WaymeetConfig {
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub latency: Latency,
    #[serde(default)]
    pub location: LocationSettings,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    #[default]
    File,
    Redis,
}

impl FromStr for StorageBackend {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "file" => Ok(StorageBackend::File),
            "redis" => Ok(StorageBackend::Redis),
            other => Err(StoreError::Config {
                message: format!("unknown storage backend '{other}' (expected memory, file or redis)"),
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageSettings {
    #[serde(default)]
    pub backend: StorageBackend,
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
    #[serde(default = "default_redis_url")]
    pub redis_url: String,
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: default_storage_path(),
            redis_url: default_redis_url(),
            prefix: default_prefix(),
        }
    }
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("storage.json")
}

fn default_redis_url() -> String {
    "${REDIS_URL}".to_string()
}

fn default_prefix() -> String {
    "waymeet".to_string()
}

impl StorageSettings {
    /// The Redis URL with a `${VAR}` placeholder expanded from the environment.
    pub fn resolved_redis_url(&self) -> StoreResult<String> {
        expand_env(&self.redis_url)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationSettings {
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    #[serde(default)]
    pub city: Option<String>,
}

fn default_latitude() -> f64 {
    DEFAULT_LOCATION.latitude
}

fn default_longitude() -> f64 {
    DEFAULT_LOCATION.longitude
}

impl Default for LocationSettings {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
            city: Some(DEFAULT_LOCATION.city.to_string()),
        }
    }
}

impl LocationSettings {
    pub fn to_location(&self) -> UserLocation {
        UserLocation {
            latitude: self.latitude,
            longitude: self.longitude,
            city: self.city.clone(),
        }
    }
}

/// Expand a whole-value `${VAR}` placeholder; other strings pass through.
pub fn expand_env(value: &str) -> StoreResult<String> {
    if let Some(var_name) = value.strip_prefix("${").and_then(|rest| rest.strip_suffix('}')) {
        std::env::var(var_name).map_err(|_| StoreError::Config {
            message: format!("environment variable {var_name} not set"),
        })
    } else {
        Ok(value.to_string())
    }
}

/// Where the config was found and what it says.
#[derive(Debug, Clone)]
pub struct ConfigContext {
    /// Directory holding `.waymeet`, or the start directory when none exists.
    pub root: PathBuf,
    pub config_dir: PathBuf,
    pub config_path: PathBuf,
    pub config: WaymeetConfig,
    /// Whether `config.toml` was actually read.
    pub loaded: bool,
}

impl ConfigContext {
    /// Search the current directory and its ancestors.
    pub fn find() -> StoreResult<Self> {
        let current_dir = std::env::current_dir()?;
        Self::find_from(&current_dir)
    }

    pub fn find_from(start: &Path) -> StoreResult<Self> {
        let root = start
            .ancestors()
            .find(|dir| dir.join(CONFIG_DIR).is_dir())
            .unwrap_or(start)
            .to_path_buf();
        Self::from_root(root)
    }

    pub fn from_root(root: PathBuf) -> StoreResult<Self> {
        let config_dir = root.join(CONFIG_DIR);
        let config_path = config_dir.join(CONFIG_FILE);

        let (mut config, loaded) = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: WaymeetConfig = toml::from_str(&content).map_err(|err| StoreError::Config {
                message: format!("failed to parse {}: {err}", config_path.display()),
            })?;
            (config, true)
        } else {
            (WaymeetConfig::default(), false)
        };

        if let Ok(raw) = std::env::var(STORAGE_ENV) {
            config.storage.backend = raw.parse()?;
        }

        if config.storage.path.is_relative() {
            config.storage.path = config_dir.join(&config.storage.path);
        }

        Ok(Self {
            root,
            config_dir,
            config_path,
            config,
            loaded,
        })
    }

    /// Write the current config (with the storage path made relative again).
    pub fn write_default(&self) -> StoreResult<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        let mut config = self.config.clone();
        if let Ok(relative) = config.storage.path.strip_prefix(&self.config_dir) {
            config.storage.path = relative.to_path_buf();
        }
        let toml = toml::to_string_pretty(&config).map_err(|err| StoreError::Config {
            message: format!("failed to encode config: {err}"),
        })?;
        std::fs::write(&self.config_path, toml)?;
        Ok(())
    }
}
