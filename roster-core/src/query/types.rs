use roster_model::{Client, ClientKind};
use std::fmt;

/// Category tab selection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategorySelector {
    /// Every client passes
    #[default]
    All,
    /// Clients whose category tag equals this value, ignoring case
    Tag(String),
}

impl CategorySelector {
    pub fn matches(&self, client: &Client) -> bool {
        match self {
            CategorySelector::All => true,
            CategorySelector::Tag(tag) => {
                client.kind.as_str().to_lowercase() == tag.to_lowercase()
            }
        }
    }
}

impl From<&str> for CategorySelector {
    fn from(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("all") {
            CategorySelector::All
        } else {
            CategorySelector::Tag(value.to_string())
        }
    }
}

impl From<ClientKind> for CategorySelector {
    fn from(kind: ClientKind) -> Self {
        CategorySelector::Tag(kind.as_str().to_string())
    }
}

impl fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategorySelector::All => f.write_str("all"),
            CategorySelector::Tag(tag) => f.write_str(tag),
        }
    }
}

/// Filter state for the client list
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClientQuery {
    pub category: CategorySelector,
    pub search: Option<String>,
}

impl ClientQuery {
    /// Search text after trimming, `None` when blank
    pub fn search_text(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    pub fn is_unfiltered(&self) -> bool {
        self.category == CategorySelector::All && self.search_text().is_none()
    }
}
