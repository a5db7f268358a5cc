use std::path::PathBuf;

use roster_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {origin}")]
    Toml {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config json {origin}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(
        "failed to parse config {origin}: toml error: {toml}; json error: {json}"
    )]
    Unrecognized {
        origin: String,
        toml: toml::de::Error,
        json: serde_json::Error,
    },
    #[error("invalid sorting.default_field_order: {0}")]
    FieldOrder(#[source] ModelError),
    #[error("storage key for {slot} must not be empty")]
    EmptyStorageKey { slot: &'static str },
}
