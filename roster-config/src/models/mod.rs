use std::path::PathBuf;

use directories::ProjectDirs;
use roster_model::{FieldPriorityOrder, ModelError, SortField};
use serde::{Deserialize, Serialize};

/// Source that produced the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    /// `--config` on the command line
    Explicit(PathBuf),
    /// `$ROSTER_CONFIG_PATH`
    EnvPath(PathBuf),
    /// `$ROSTER_CONFIG_JSON`
    EnvInline,
    /// A config file found in the search root
    File(PathBuf),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RosterConfig {
    pub storage: StorageConfig,
    pub sorting: SortingConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// JSON files under `storage.dir`
    #[default]
    File,
    /// Nothing outlives the process
    Memory,
}

/// Where sort state is kept between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// State directory. Unset means the platform config directory.
    pub dir: Option<PathBuf>,
    /// Key holding the active sort criteria
    pub active_sorts_key: String,
    /// Key holding the field priority order
    pub field_order_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::File,
            dir: None,
            active_sorts_key: "clientTableSorts".to_string(),
            field_order_key: "clientTableSortOptionsOrder".to_string(),
        }
    }
}

impl StorageConfig {
    /// Configured directory, falling back to the platform config dir
    pub fn resolved_dir(&self) -> Option<PathBuf> {
        self.dir.clone().or_else(|| {
            ProjectDirs::from("", "roster", "roster")
                .map(|dirs| dirs.config_dir().to_path_buf())
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SortingConfig {
    /// Priority order used when none has been saved yet. Fields left out
    /// keep their built-in relative order after the listed ones.
    pub default_field_order: Vec<SortField>,
}

impl SortingConfig {
    pub fn field_order(&self) -> Result<FieldPriorityOrder, ModelError> {
        FieldPriorityOrder::from_partial(
            &self.default_field_order,
            &FieldPriorityOrder::default(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}
