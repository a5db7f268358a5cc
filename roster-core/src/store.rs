//! Read-only record store
//!
//! Populated once at startup; the filter stage and sort engine only ever
//! borrow its records.

use std::collections::HashSet;

use roster_model::{Client, ClientId, ModelError};

use crate::demo::mock_clients;

/// Immutable universe of client records
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    clients: Vec<Client>,
}

impl RecordStore {
    /// Build a store, rejecting duplicate identifiers
    pub fn new(clients: Vec<Client>) -> Result<Self, ModelError> {
        let mut seen = HashSet::with_capacity(clients.len());
        for client in &clients {
            if !seen.insert(client.id.as_str()) {
                return Err(ModelError::InvalidClient(format!(
                    "duplicate client id {}",
                    client.id
                )));
            }
        }
        Ok(Self { clients })
    }

    /// Store loaded with the demo data set
    pub fn demo() -> Self {
        Self {
            clients: mock_clients(),
        }
    }

    pub fn records(&self) -> &[Client] {
        &self.clients
    }

    pub fn get(&self, id: &ClientId) -> Option<&Client> {
        self.clients.iter().find(|client| &client.id == id)
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}
