//! Filter stage: narrows the record store by category tab and search text.
//!
//! Both predicates combine with AND. The output is a subsequence of the
//! input, so the relative order handed to the sort engine is store order.

use roster_model::Client;

use super::types::{CategorySelector, ClientQuery};

/// Clients matching `category` and, when non-blank, containing `search`
/// (case-insensitive) in their name, email or identifier.
pub fn filter_clients(
    records: &[Client],
    category: &CategorySelector,
    search: Option<&str>,
) -> Vec<Client> {
    let needle = search
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());

    records
        .iter()
        .filter(|client| category.matches(client))
        .filter(|client| match needle.as_deref() {
            Some(needle) => matches_search(client, needle),
            None => true,
        })
        .cloned()
        .collect()
}

/// Apply a [`ClientQuery`] to `records`
pub fn apply_query(records: &[Client], query: &ClientQuery) -> Vec<Client> {
    filter_clients(records, &query.category, query.search_text())
}

fn matches_search(client: &Client, needle: &str) -> bool {
    client.name.to_lowercase().contains(needle)
        || client.email.to_lowercase().contains(needle)
        || client.id.as_str().to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::mock_clients;
    use roster_model::ClientKind;

    fn ids(clients: &[Client]) -> Vec<&str> {
        clients.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn all_passes_every_record_in_order() {
        let clients = mock_clients();
        let filtered = filter_clients(&clients, &CategorySelector::All, None);
        assert_eq!(filtered, clients);
    }

    #[test]
    fn category_matches_case_insensitively() {
        let clients = mock_clients();
        let filtered =
            filter_clients(&clients, &CategorySelector::from("company"), None);
        assert_eq!(ids(&filtered), vec!["22", "24"]);
        assert!(filtered.iter().all(|c| c.kind == ClientKind::Company));
    }

    #[test]
    fn unknown_category_matches_nothing() {
        let clients = mock_clients();
        let filtered =
            filter_clients(&clients, &CategorySelector::from("vendor"), None);
        assert!(filtered.is_empty());
    }

    #[test]
    fn search_checks_name_email_and_id() {
        let clients = mock_clients();
        let all = CategorySelector::All;

        assert_eq!(ids(&filter_clients(&clients, &all, Some("  JANE "))), vec!["23"]);
        assert_eq!(ids(&filter_clients(&clients, &all, Some("acme.com"))), vec!["22"]);
        assert_eq!(ids(&filter_clients(&clients, &all, Some("24"))), vec!["24"]);
    }

    #[test]
    fn blank_search_is_ignored() {
        let clients = mock_clients();
        let filtered =
            filter_clients(&clients, &CategorySelector::All, Some("   "));
        assert_eq!(filtered.len(), clients.len());
    }

    #[test]
    fn predicates_combine_with_and() {
        let clients = mock_clients();
        let query = ClientQuery {
            category: CategorySelector::from(ClientKind::Individual),
            search: Some("test".into()),
        };
        assert_eq!(ids(&apply_query(&clients, &query)), vec!["21"]);

        let query = ClientQuery {
            category: CategorySelector::from(ClientKind::Company),
            search: Some("test".into()),
        };
        assert!(apply_query(&clients, &query).is_empty());
    }
}
