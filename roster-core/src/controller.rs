//! List controller: record store, filter state and sort engine behind
//! one owner, with subscribers notified whenever the visible rows change.

use std::fmt;

use roster_model::{Client, SortDirection, SortField};
use tracing::debug;

use crate::engine::{SortChange, SortPriorityEngine};
use crate::persistence::KeyValueStore;
use crate::query::{CategorySelector, ClientQuery, apply_query};
use crate::store::RecordStore;

/// Receives the ordered rows after every change to them
pub trait ClientListSubscriber {
    fn on_rows_changed(&self, rows: &[Client]);
}

impl<F> ClientListSubscriber for F
where
    F: Fn(&[Client]),
{
    fn on_rows_changed(&self, rows: &[Client]) {
        self(rows)
    }
}

pub struct ClientListController<S> {
    store: RecordStore,
    query: ClientQuery,
    engine: SortPriorityEngine<S>,
    rows: Vec<Client>,
    subscribers: Vec<Box<dyn ClientListSubscriber>>,
}

impl<S: fmt::Debug> fmt::Debug for ClientListController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientListController")
            .field("records", &self.store.len())
            .field("query", &self.query)
            .field("engine", &self.engine)
            .field("rows", &self.rows.len())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl<S: KeyValueStore> ClientListController<S> {
    pub fn new(store: RecordStore, engine: SortPriorityEngine<S>) -> Self {
        let mut controller = Self {
            store,
            query: ClientQuery::default(),
            engine,
            rows: Vec::new(),
            subscribers: Vec::new(),
        };
        controller.recompute();
        controller
    }

    /// Current ordered, filtered rows
    pub fn rows(&self) -> &[Client] {
        &self.rows
    }

    pub fn query(&self) -> &ClientQuery {
        &self.query
    }

    pub fn engine(&self) -> &SortPriorityEngine<S> {
        &self.engine
    }

    pub fn records(&self) -> &RecordStore {
        &self.store
    }

    /// Register `subscriber`; it is called once with the current rows
    pub fn subscribe(&mut self, subscriber: impl ClientListSubscriber + 'static) {
        subscriber.on_rows_changed(&self.rows);
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn set_category(&mut self, category: impl Into<CategorySelector>) {
        let category = category.into();
        if category != self.query.category {
            self.query.category = category;
            self.refresh();
        }
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = Some(search.into());
        if search != self.query.search {
            self.query.search = search;
            self.refresh();
        }
    }

    pub fn set_query(&mut self, query: ClientQuery) {
        if query != self.query {
            self.query = query;
            self.refresh();
        }
    }

    pub fn is_active(&self, field: SortField, direction: SortDirection) -> bool {
        self.engine.is_active(field, direction)
    }

    pub fn toggle_criterion(&mut self, field: SortField, direction: SortDirection) -> SortChange {
        let change = self.engine.toggle_criterion(field, direction);
        self.after(change)
    }

    pub fn remove_criterion(&mut self, field: SortField) -> SortChange {
        let change = self.engine.remove_criterion(field);
        self.after(change)
    }

    pub fn clear_all_criteria(&mut self) -> SortChange {
        let change = self.engine.clear_all_criteria();
        self.after(change)
    }

    pub fn reorder_field_priority(&mut self, field: SortField, new_index: usize) -> SortChange {
        let change = self.engine.reorder_field_priority(field, new_index);
        self.after(change)
    }

    pub fn move_field_before(&mut self, field: SortField, target: SortField) -> SortChange {
        let change = self.engine.move_field_before(field, target);
        self.after(change)
    }

    pub fn reorder_active_criteria(&mut self, key: &str, new_index: usize) -> SortChange {
        let change = self.engine.reorder_active_criteria(key, new_index);
        self.after(change)
    }

    /// Recompute the rows and notify every subscriber
    pub fn refresh(&mut self) {
        self.recompute();
        for subscriber in &self.subscribers {
            subscriber.on_rows_changed(&self.rows);
        }
    }

    fn after(&mut self, change: SortChange) -> SortChange {
        if change.requires_resort() {
            self.refresh();
        }
        change
    }

    fn recompute(&mut self) {
        let filtered = apply_query(self.store.records(), &self.query);
        self.rows = self.engine.apply(&filtered);
        debug!(
            visible = self.rows.len(),
            total = self.store.len(),
            "recomputed client rows"
        );
    }
}
