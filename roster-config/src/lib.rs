//! Configuration library for Roster.
//!
//! Loads [`RosterConfig`] from an explicit file, the environment or a
//! config file in the working directory, and reports where it came from.

#![allow(missing_docs)]

pub mod loader;
pub mod models;

pub use loader::{ConfigLoad, ConfigLoader, error::ConfigLoadError};
pub use models::{
    ConfigSource, LogConfig, RosterConfig, SortingConfig, StorageBackend,
    StorageConfig,
};
