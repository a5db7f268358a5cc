//! Tests for the prioritized sort strategy

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use proptest::prelude::*;
    use roster_model::{
        ActiveSortList, Client, ClientId, ClientKind, ClientStatus, FieldPriorityOrder,
        SortCriterion, SortDirection, SortField, ToggleOutcome,
    };

    use crate::demo::mock_clients;
    use crate::query::sorting::{PrioritizedSort, SortCost, SortStrategy, utils::is_sorted_by};

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 1, day, 0, 0, 0).unwrap()
    }

    fn create_test_client(id: &str, name: &str) -> Client {
        Client {
            id: ClientId::new(id).unwrap(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            kind: ClientKind::Individual,
            status: ClientStatus::Active,
            created_at: at(1),
            updated_at: at(2),
        }
    }

    fn active(criteria: &[SortCriterion]) -> ActiveSortList {
        ActiveSortList::try_from(criteria.to_vec()).unwrap()
    }

    fn sorted(clients: &[Client], strategy: &PrioritizedSort) -> Vec<Client> {
        let mut out = clients.to_vec();
        strategy.sort(out.as_mut_slice());
        out
    }

    fn ids(clients: &[Client]) -> Vec<&str> {
        clients.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_single_name_criterion() {
        let clients = vec![create_test_client("2", "Bob"), create_test_client("1", "Ann")];
        let strategy = PrioritizedSort::new(
            &active(&[SortCriterion::asc(SortField::Name)]),
            &FieldPriorityOrder::default(),
        );

        let out = sorted(&clients, &strategy);
        let names: Vec<&str> = out.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Ann", "Bob"]);
        assert_eq!(SortStrategy::<Client>::cost_estimate(&strategy), SortCost::Moderate);
    }

    #[test]
    fn test_tie_broken_by_next_priority_field() {
        let clients = vec![create_test_client("5", "Sam"), create_test_client("3", "Sam")];
        let strategy = PrioritizedSort::new(
            &active(&[SortCriterion::asc(SortField::Name), SortCriterion::asc(SortField::Id)]),
            &FieldPriorityOrder::default(),
        );

        assert_eq!(ids(&sorted(&clients, &strategy)), vec!["3", "5"]);
    }

    #[test]
    fn test_priority_order_outranks_active_list_order() {
        let clients = vec![
            create_test_client("1", "Zed"),
            create_test_client("2", "Amy"),
            create_test_client("3", "Amy"),
        ];
        let criteria = active(&[
            SortCriterion::asc(SortField::Name),
            SortCriterion::desc(SortField::Id),
        ]);

        let name_first = PrioritizedSort::new(&criteria, &FieldPriorityOrder::default());
        assert_eq!(ids(&sorted(&clients, &name_first)), vec!["3", "2", "1"]);

        let mut order = FieldPriorityOrder::default();
        assert!(order.move_field(SortField::Id, 0));
        let id_first = PrioritizedSort::new(&criteria, &order);
        assert_eq!(id_first.criteria()[0].field, SortField::Id);
        assert_eq!(ids(&sorted(&clients, &id_first)), vec!["3", "2", "1"]);

        // Same criteria, only the priority differs, and the output changes
        let criteria = active(&[
            SortCriterion::asc(SortField::Name),
            SortCriterion::asc(SortField::Id),
        ]);
        let name_first = PrioritizedSort::new(&criteria, &FieldPriorityOrder::default());
        let id_first = PrioritizedSort::new(&criteria, &order);
        assert_eq!(ids(&sorted(&clients, &name_first)), vec!["2", "3", "1"]);
        assert_eq!(ids(&sorted(&clients, &id_first)), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_inactive_fields_never_participate() {
        let clients = vec![create_test_client("9", "Sam"), create_test_client("1", "Sam")];
        let mut order = FieldPriorityOrder::default();
        assert!(order.move_field(SortField::Id, 0));

        // Id ranks first but is not active: the tie keeps input order
        let strategy =
            PrioritizedSort::new(&active(&[SortCriterion::asc(SortField::Name)]), &order);
        assert_eq!(ids(&sorted(&clients, &strategy)), vec!["9", "1"]);
    }

    #[test]
    fn test_timestamp_descending() {
        let clients = mock_clients();
        let strategy = PrioritizedSort::new(
            &active(&[SortCriterion::desc(SortField::UpdatedAt)]),
            &FieldPriorityOrder::default(),
        );
        assert_eq!(ids(&sorted(&clients, &strategy)), vec!["22", "20", "24", "21", "23"]);
    }

    #[test]
    fn test_mock_clients_by_kind_then_name() {
        let clients = mock_clients();
        let strategy = PrioritizedSort::new(
            &active(&[SortCriterion::asc(SortField::Type), SortCriterion::desc(SortField::Name)]),
            &FieldPriorityOrder::default(),
        );
        // Name outranks type in the default order
        assert_eq!(ids(&sorted(&clients, &strategy)), vec!["21", "20", "23", "24", "22"]);
        assert_eq!(SortStrategy::<Client>::cost_estimate(&strategy), SortCost::Compound);
    }

    #[test]
    fn test_empty_strategy_is_identity() {
        let clients = mock_clients();
        let strategy = PrioritizedSort::new(&ActiveSortList::new(), &FieldPriorityOrder::default());
        assert!(strategy.is_empty());
        assert_eq!(sorted(&clients, &strategy), clients);
        assert_eq!(SortStrategy::<Client>::cost_estimate(&strategy), SortCost::Trivial);
    }

    fn arb_field() -> impl Strategy<Value = SortField> {
        prop::sample::select(SortField::all().to_vec())
    }

    fn arb_direction() -> impl Strategy<Value = SortDirection> {
        prop_oneof![Just(SortDirection::Ascending), Just(SortDirection::Descending)]
    }

    fn arb_client() -> impl Strategy<Value = Client> {
        (
            0u32..40,
            prop::sample::select(vec![
                "Ann", "ann", "Bob", "Émile", "Čapek", "Łukasz", "Sam", "Zoe", "10x", "9 Lives",
            ]),
            prop_oneof![Just(ClientKind::Individual), Just(ClientKind::Company)],
            prop_oneof![
                Just(ClientStatus::Active),
                Just(ClientStatus::Inactive),
                Just(ClientStatus::Pending)
            ],
            1u32..28,
            1u32..28,
        )
            .prop_map(|(id, name, kind, status, created, updated)| Client {
                id: ClientId::new(id.to_string()).unwrap(),
                name: name.to_string(),
                email: format!("{}@mail.test", name.to_lowercase()),
                kind,
                status,
                created_at: at(created),
                updated_at: at(updated),
            })
    }

    fn arb_active() -> impl Strategy<Value = ActiveSortList> {
        prop::collection::vec((arb_field(), arb_direction()), 0..6).prop_map(|toggles| {
            let mut list = ActiveSortList::new();
            for (field, direction) in toggles {
                list.toggle(field, direction);
            }
            list
        })
    }

    fn arb_order() -> impl Strategy<Value = FieldPriorityOrder> {
        prop::collection::vec((arb_field(), 0usize..10), 0..8).prop_map(|moves| {
            let mut order = FieldPriorityOrder::default();
            for (field, to) in moves {
                order.move_field(field, to);
            }
            order
        })
    }

    proptest! {
        #[test]
        fn prop_field_order_stays_a_permutation(order in arb_order()) {
            let mut fields = order.as_slice().to_vec();
            fields.sort_by_key(|f| f.index());
            prop_assert_eq!(fields, SortField::all().to_vec());
        }

        #[test]
        fn prop_sort_is_idempotent(
            clients in prop::collection::vec(arb_client(), 0..12),
            list in arb_active(),
            order in arb_order(),
        ) {
            let strategy = PrioritizedSort::new(&list, &order);
            let once = sorted(&clients, &strategy);
            let twice = sorted(&once, &strategy);
            prop_assert!(is_sorted_by(&once, |a, b| strategy.compare(a, b)));
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_sort_is_a_stable_permutation(
            clients in prop::collection::vec(arb_client(), 0..12),
            list in arb_active(),
        ) {
            let strategy = PrioritizedSort::new(&list, &FieldPriorityOrder::default());
            let out = sorted(&clients, &strategy);
            prop_assert_eq!(out.len(), clients.len());

            // Equal neighbours keep the relative order they had on input
            for pair in out.windows(2) {
                if strategy.compare(&pair[0], &pair[1]).is_eq() {
                    let first = clients.iter().position(|c| c == &pair[0]);
                    let second = clients.iter().rposition(|c| c == &pair[1]);
                    prop_assert!(first <= second);
                }
            }
        }

        #[test]
        fn prop_toggle_twice_restores_list(
            list in arb_active(),
            field in arb_field(),
            direction in arb_direction(),
        ) {
            let mut toggled = list.clone();
            let first = toggled.toggle(field, direction);
            let second = toggled.toggle(field, direction);

            match list.get(field).map(|c| c.direction) {
                None => {
                    prop_assert_eq!(
                        (first, second),
                        (ToggleOutcome::Added, ToggleOutcome::Removed)
                    );
                    prop_assert_eq!(toggled, list);
                }
                Some(current) if current == direction => {
                    // Removed, then re-appended at the end
                    prop_assert_eq!(
                        (first, second),
                        (ToggleOutcome::Removed, ToggleOutcome::Added)
                    );
                    prop_assert_eq!(toggled.len(), list.len());
                    prop_assert_eq!(toggled.position(field), Some(list.len() - 1));
                }
                Some(_) => {
                    prop_assert_eq!(
                        (first, second),
                        (ToggleOutcome::Flipped, ToggleOutcome::Removed)
                    );
                    prop_assert_eq!(toggled.len(), list.len() - 1);
                    prop_assert!(toggled.get(field).is_none());
                }
            }
        }

        #[test]
        fn prop_direction_flip_keeps_position(
            list in arb_active(),
            field in arb_field(),
            direction in arb_direction(),
        ) {
            let mut list = list;
            list.remove_field(field);
            list.toggle(field, direction);
            let position = list.position(field);

            let flipped = direction.reversed();
            prop_assert_eq!(list.toggle(field, flipped), ToggleOutcome::Flipped);
            prop_assert_eq!(list.position(field), position);
            prop_assert_eq!(list.iter().filter(|c| c.field == field).count(), 1);
            prop_assert!(list.contains(field, flipped));
            prop_assert!(!list.contains(field, direction));
        }

        #[test]
        fn prop_cleared_list_is_identity(
            clients in prop::collection::vec(arb_client(), 0..12),
            list in arb_active(),
            order in arb_order(),
        ) {
            let mut list = list;
            list.clear();
            let strategy = PrioritizedSort::new(&list, &order);
            prop_assert_eq!(sorted(&clients, &strategy), clients);
        }
    }
}
