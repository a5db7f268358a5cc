//! Sort option catalogue rendered by the presentation layer

use roster_model::{FieldPriorityOrder, SortDirection, SortField};

/// One selectable direction of a sort option, e.g. "A-Z"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortChoice {
    pub label: &'static str,
    pub direction: SortDirection,
}

/// Display metadata for a sortable field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOption {
    pub field: SortField,
    pub label: &'static str,
    pub choices: [SortChoice; 2],
}

const TEXT_CHOICES: [SortChoice; 2] = [
    SortChoice {
        label: "A-Z",
        direction: SortDirection::Ascending,
    },
    SortChoice {
        label: "Z-A",
        direction: SortDirection::Descending,
    },
];

const DATE_CHOICES: [SortChoice; 2] = [
    SortChoice {
        label: "Newest First",
        direction: SortDirection::Descending,
    },
    SortChoice {
        label: "Oldest First",
        direction: SortDirection::Ascending,
    },
];

/// Metadata for a single field
pub fn sort_option(field: SortField) -> SortOption {
    let (label, choices) = match field {
        SortField::Name => ("Name", TEXT_CHOICES),
        SortField::Id => ("Client ID", TEXT_CHOICES),
        SortField::Email => ("Email", TEXT_CHOICES),
        SortField::Type => ("Client Type", TEXT_CHOICES),
        SortField::Status => ("Status", TEXT_CHOICES),
        SortField::CreatedAt => ("Created On", DATE_CHOICES),
        SortField::UpdatedAt => ("Updated On", DATE_CHOICES),
    };
    SortOption {
        field,
        label,
        choices,
    }
}

/// All options, highest priority first
pub fn sort_options(order: &FieldPriorityOrder) -> Vec<SortOption> {
    order.iter().copied().map(sort_option).collect()
}

impl SortOption {
    /// Label of the choice matching `direction`
    pub fn choice_label(&self, direction: SortDirection) -> &'static str {
        self.choices
            .iter()
            .find(|choice| choice.direction == direction)
            .map(|choice| choice.label)
            .unwrap_or(direction.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_follow_priority_order() {
        let mut order = FieldPriorityOrder::default();
        order.move_field(SortField::UpdatedAt, 0);

        let options = sort_options(&order);
        assert_eq!(options.len(), SortField::COUNT);
        assert_eq!(options[0].label, "Updated On");
        assert_eq!(options[1].field, SortField::Name);
    }

    #[test]
    fn date_fields_offer_newest_first() {
        let option = sort_option(SortField::UpdatedAt);
        assert_eq!(option.choices[0].direction, SortDirection::Descending);
        assert_eq!(option.choice_label(SortDirection::Ascending), "Oldest First");
        assert_eq!(sort_option(SortField::Name).choice_label(SortDirection::Descending), "Z-A");
    }
}
