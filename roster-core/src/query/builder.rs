use super::types::*;
use roster_model::ClientKind;

/// Fluent API for building client list queries
#[derive(Debug, Clone, Default)]
pub struct ClientQueryBuilder {
    query: ClientQuery,
}

impl ClientQueryBuilder {
    /// Create a new query builder
    pub fn new() -> Self {
        Self::default()
    }

    // === Filter methods ===

    /// Filter by a category tab (`"all"` clears the filter)
    pub fn category(mut self, selector: impl Into<CategorySelector>) -> Self {
        self.query.category = selector.into();
        self
    }

    /// Filter to only show individuals
    pub fn individuals(self) -> Self {
        self.category(ClientKind::Individual)
    }

    /// Filter to only show companies
    pub fn companies(self) -> Self {
        self.category(ClientKind::Company)
    }

    // === Search methods ===

    /// Add text search over name, email and identifier
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.query.search = Some(text.into());
        self
    }

    /// Build the final query
    pub fn build(self) -> ClientQuery {
        self.query
    }
}
