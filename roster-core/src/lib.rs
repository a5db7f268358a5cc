//! # Roster Core
//!
//! Core library for Roster, the client list with a user-reorderable,
//! multi-criterion sort.
//!
//! ## Overview
//!
//! - **Record Store**: immutable set of client records ([`store`])
//! - **Filter Stage**: category tab and free-text search ([`query::filtering`])
//! - **Sort-Priority Engine**: active criteria, field priority and the
//!   comparator derived from both ([`engine`], [`query::sorting`])
//! - **Persistence**: sort state in a string key-value store ([`persistence`])
//! - **List Controller**: ties the above together and notifies
//!   subscribers ([`controller`])
//!
//! ## Examples
//!
//! ```
//! use roster_core::{
//!     controller::ClientListController, engine::SortPriorityEngine,
//!     persistence::MemoryStore, store::RecordStore,
//! };
//! use roster_model::{ClientKind, SortDirection, SortField};
//!
//! let mut list = ClientListController::new(
//!     RecordStore::demo(),
//!     SortPriorityEngine::new(MemoryStore::new()),
//! );
//! list.set_category(ClientKind::Company);
//! list.toggle_criterion(SortField::Name, SortDirection::Ascending);
//!
//! let names: Vec<_> = list.rows().iter().map(|c| c.name.as_str()).collect();
//! assert_eq!(names, ["Acme Corp", "Global Industries"]);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Client list controller and change subscribers
pub mod controller;

/// Demo data set
pub mod demo;

/// Sort-priority engine
pub mod engine;

/// Sort state persistence over a key-value store
pub mod persistence;

/// Filtering and sorting of client records
pub mod query;

/// Immutable record store
pub mod store;

pub use controller::{ClientListController, ClientListSubscriber};
pub use engine::{SortChange, SortPriorityEngine};
pub use persistence::{
    FileStore, KeyValueStore, MemoryStore, PersistenceError, SortStatePersistence,
};
pub use store::RecordStore;
