use std::fmt::{self, Display};

/// Errors produced by model constructors and free-form parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    InvalidClient(String),
    UnknownSortField(String),
    UnknownSortDirection(String),
    UnknownClientKind(String),
    UnknownClientStatus(String),
    InvalidCriterionKey(String),
    InvalidFieldOrder(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidClient(msg) => write!(f, "invalid client: {msg}"),
            ModelError::UnknownSortField(raw) => {
                write!(f, "unknown sort field '{raw}'")
            }
            ModelError::UnknownSortDirection(raw) => {
                write!(f, "unknown sort direction '{raw}' (expected asc or desc)")
            }
            ModelError::UnknownClientKind(raw) => {
                write!(f, "unknown client type '{raw}'")
            }
            ModelError::UnknownClientStatus(raw) => {
                write!(f, "unknown client status '{raw}'")
            }
            ModelError::InvalidCriterionKey(raw) => {
                write!(f, "invalid sort criterion key '{raw}'")
            }
            ModelError::InvalidFieldOrder(msg) => {
                write!(f, "invalid field order: {msg}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
