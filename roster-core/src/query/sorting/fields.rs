//! Per-field accessor table for client records
//!
//! Each [`SortField`] resolves once to a plain extraction function, so the
//! comparator never inspects record shape at runtime.

use roster_model::{Client, SortField};

use super::keys::SortValue;
use super::traits::SortableEntity;

/// Extraction function for one sortable attribute
pub type FieldAccessor = for<'a> fn(&'a Client) -> SortValue<'a>;

// Indexed by `SortField::index`, so the order follows the enum declaration.
const ACCESSORS: [FieldAccessor; SortField::COUNT] = [
    client_id,
    client_name,
    client_email,
    client_kind,
    client_status,
    client_created_at,
    client_updated_at,
];

/// Resolve the accessor for `field`
#[inline]
pub fn accessor(field: SortField) -> FieldAccessor {
    ACCESSORS[field.index()]
}

fn client_id(client: &Client) -> SortValue<'_> {
    SortValue::Text(client.id.as_str())
}

fn client_name(client: &Client) -> SortValue<'_> {
    SortValue::Text(&client.name)
}

fn client_email(client: &Client) -> SortValue<'_> {
    SortValue::Text(&client.email)
}

fn client_kind(client: &Client) -> SortValue<'_> {
    SortValue::Text(client.kind.as_str())
}

fn client_status(client: &Client) -> SortValue<'_> {
    SortValue::Text(client.status.as_str())
}

fn client_created_at(client: &Client) -> SortValue<'_> {
    SortValue::Timestamp(client.created_at)
}

fn client_updated_at(client: &Client) -> SortValue<'_> {
    SortValue::Timestamp(client.updated_at)
}

impl SortableEntity for Client {
    fn sort_value(&self, field: SortField) -> SortValue<'_> {
        accessor(field)(self)
    }
}
