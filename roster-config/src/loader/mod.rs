//! Config discovery and parsing
//!
//! Evaluation order:
//! 1) an explicit path (`--config`),
//! 2) `$ROSTER_CONFIG_PATH` (TOML or JSON file),
//! 3) `$ROSTER_CONFIG_JSON` (inline JSON),
//! 4) the first of [`CANDIDATES`] present under the search root,
//! 5) defaults.
//!
//! `$ROSTER_STORAGE_DIR` then overrides `storage.dir` whatever the source.

pub mod error;

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::models::{ConfigSource, RosterConfig};
use error::ConfigLoadError;

pub const CONFIG_PATH_ENV: &str = "ROSTER_CONFIG_PATH";
pub const CONFIG_JSON_ENV: &str = "ROSTER_CONFIG_JSON";
pub const STORAGE_DIR_ENV: &str = "ROSTER_STORAGE_DIR";

/// Files looked up relative to the search root, in order
pub const CANDIDATES: &[&str] = &[
    "roster.toml",
    "roster.json",
    "config/roster.toml",
    "config/roster.json",
];

/// Loaded configuration and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLoad {
    pub config: RosterConfig,
    pub source: ConfigSource,
}

#[derive(Debug, Clone)]
enum EnvVars {
    Process,
    Fixed(HashMap<String, String>),
}

impl EnvVars {
    fn get(&self, name: &str) -> Option<String> {
        let value = match self {
            EnvVars::Process => env::var(name).ok(),
            EnvVars::Fixed(vars) => vars.get(name).cloned(),
        };
        value.filter(|v| !v.trim().is_empty())
    }
}

#[derive(Debug, Clone)]
pub struct ConfigLoader {
    explicit_path: Option<PathBuf>,
    search_root: PathBuf,
    env: EnvVars,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Loader reading the process environment and searching the working
    /// directory
    pub fn new() -> Self {
        Self {
            explicit_path: None,
            search_root: PathBuf::from("."),
            env: EnvVars::Process,
        }
    }

    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit_path = Some(path.into());
        self
    }

    pub fn with_search_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.search_root = root.into();
        self
    }

    /// Replace the process environment with `vars`
    pub fn with_env_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env = EnvVars::Fixed(
            vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        );
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let (mut config, source) = self.resolve()?;

        if let Some(dir) = self.env.get(STORAGE_DIR_ENV) {
            config.storage.dir = Some(PathBuf::from(dir));
        }
        validate(&config)?;

        debug!(?source, "loaded roster config");
        Ok(ConfigLoad { config, source })
    }

    fn resolve(&self) -> Result<(RosterConfig, ConfigSource), ConfigLoadError> {
        if let Some(path) = &self.explicit_path {
            let config = load_from_file(path)?;
            return Ok((config, ConfigSource::Explicit(path.clone())));
        }

        if let Some(path) = self.env.get(CONFIG_PATH_ENV) {
            let path = PathBuf::from(path);
            let config = load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Some(raw) = self.env.get(CONFIG_JSON_ENV) {
            let config = parse_json(&raw, CONFIG_JSON_ENV)?;
            return Ok((config, ConfigSource::EnvInline));
        }

        if let Some(path) = self.find_default_file() {
            let config = load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((RosterConfig::default(), ConfigSource::Default))
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        CANDIDATES
            .iter()
            .map(|candidate| self.search_root.join(candidate))
            .find(|path| path.is_file())
    }
}

pub fn load_from_file(path: &Path) -> Result<RosterConfig, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    let origin = path.display().to_string();

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_json(&contents, &origin),
        Some("toml") | Some("tml") => parse_toml(&contents, &origin),
        _ => parse_from_str(&contents, &origin),
    }
}

/// Parse TOML, falling back to JSON
pub fn parse_from_str(
    contents: &str,
    origin: &str,
) -> Result<RosterConfig, ConfigLoadError> {
    toml::from_str(contents).or_else(|toml| {
        serde_json::from_str(contents).map_err(|json| {
            ConfigLoadError::Unrecognized {
                origin: origin.to_string(),
                toml,
                json,
            }
        })
    })
}

fn parse_toml(
    contents: &str,
    origin: &str,
) -> Result<RosterConfig, ConfigLoadError> {
    toml::from_str(contents).map_err(|source| ConfigLoadError::Toml {
        origin: origin.to_string(),
        source,
    })
}

fn parse_json(
    contents: &str,
    origin: &str,
) -> Result<RosterConfig, ConfigLoadError> {
    serde_json::from_str(contents).map_err(|source| ConfigLoadError::Json {
        origin: origin.to_string(),
        source,
    })
}

fn validate(config: &RosterConfig) -> Result<(), ConfigLoadError> {
    if config.storage.active_sorts_key.trim().is_empty() {
        return Err(ConfigLoadError::EmptyStorageKey {
            slot: "active_sorts_key",
        });
    }
    if config.storage.field_order_key.trim().is_empty() {
        return Err(ConfigLoadError::EmptyStorageKey {
            slot: "field_order_key",
        });
    }
    config
        .sorting
        .field_order()
        .map_err(ConfigLoadError::FieldOrder)?;
    Ok(())
}
