//! Sort criterion types shared by the engine, persistence and presentation.
//!
//! Two structures drive client ordering:
//! - [`ActiveSortList`]: which `(field, direction)` criteria are switched on,
//!   in the order the user activated them. This order is cosmetic.
//! - [`FieldPriorityOrder`]: a permutation of every [`SortField`] deciding
//!   which active criterion wins a tie-break.
//!
//! Both types keep their invariants on every constructor and mutator so a
//! value in hand is always valid.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Fields a client list can be sorted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum SortField {
    Id,
    Name,
    Email,
    Type,
    Status,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    /// Number of sortable fields
    pub const COUNT: usize = 7;

    pub fn all() -> &'static [SortField; SortField::COUNT] {
        use SortField::*;
        &[Id, Name, Email, Type, Status, CreatedAt, UpdatedAt]
    }

    /// Wire identifier used in persisted state and criterion keys
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Name => "name",
            SortField::Email => "email",
            SortField::Type => "type",
            SortField::Status => "status",
            SortField::CreatedAt => "createdAt",
            SortField::UpdatedAt => "updatedAt",
        }
    }

    /// Dense index for table lookups
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ModelError;

    /// Accepts the wire identifier plus snake/kebab spellings
    /// (`createdAt`, `created_at`, `created-at`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        SortField::all()
            .iter()
            .copied()
            .find(|field| field.as_str().to_ascii_lowercase() == normalized)
            .ok_or_else(|| ModelError::UnknownSortField(s.to_string()))
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortDirection {
    #[cfg_attr(feature = "serde", serde(rename = "asc"))]
    Ascending,
    #[cfg_attr(feature = "serde", serde(rename = "desc"))]
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn reversed(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Orient an ascending comparison result for this direction
    #[inline]
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(ModelError::UnknownSortDirection(s.to_string())),
        }
    }
}

/// A single `(field, direction)` sort criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortCriterion {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortCriterion {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn asc(field: SortField) -> Self {
        Self::new(field, SortDirection::Ascending)
    }

    pub fn desc(field: SortField) -> Self {
        Self::new(field, SortDirection::Descending)
    }

    /// Stable key identifying this criterion, e.g. `name-asc`
    pub fn key(&self) -> String {
        format!("{}-{}", self.field, self.direction)
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.field, self.direction)
    }
}

impl FromStr for SortCriterion {
    type Err = ModelError;

    /// Parses a criterion key such as `updatedAt-desc`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = s
            .trim()
            .rsplit_once('-')
            .ok_or_else(|| ModelError::InvalidCriterionKey(s.to_string()))?;
        let field = field
            .parse()
            .map_err(|_| ModelError::InvalidCriterionKey(s.to_string()))?;
        let direction = direction
            .parse()
            .map_err(|_| ModelError::InvalidCriterionKey(s.to_string()))?;
        Ok(SortCriterion::new(field, direction))
    }
}

/// Result of toggling a criterion on an [`ActiveSortList`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The field had no criterion; one was appended
    Added,
    /// The same criterion was active and has been removed
    Removed,
    /// The field was active in the other direction; replaced in place
    Flipped,
}

/// Move the element at `from` to `to`, shifting the elements in between.
///
/// Returns `false` (and leaves `items` untouched) when `from` is out of
/// range. `to` is clamped to the last index.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= items.len() {
        return false;
    }
    let to = to.min(items.len() - 1);
    if from == to {
        return true;
    }
    let moved = items.remove(from);
    items.insert(to, moved);
    true
}

/// Ordered list of active criteria, at most one per field.
///
/// List order is display order only; precedence comes from
/// [`FieldPriorityOrder`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<SortCriterion>", into = "Vec<SortCriterion>")
)]
pub struct ActiveSortList(Vec<SortCriterion>);

impl ActiveSortList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[SortCriterion] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SortCriterion> {
        self.0.iter()
    }

    /// Criterion currently active for `field`, if any
    pub fn get(&self, field: SortField) -> Option<&SortCriterion> {
        self.0.iter().find(|c| c.field == field)
    }

    pub fn position(&self, field: SortField) -> Option<usize> {
        self.0.iter().position(|c| c.field == field)
    }

    pub fn contains(&self, field: SortField, direction: SortDirection) -> bool {
        self.get(field).is_some_and(|c| c.direction == direction)
    }

    /// Activate, deactivate or flip the criterion for `field`
    pub fn toggle(
        &mut self,
        field: SortField,
        direction: SortDirection,
    ) -> ToggleOutcome {
        match self.position(field) {
            None => {
                self.0.push(SortCriterion::new(field, direction));
                ToggleOutcome::Added
            }
            Some(idx) if self.0[idx].direction == direction => {
                self.0.remove(idx);
                ToggleOutcome::Removed
            }
            Some(idx) => {
                self.0[idx] = SortCriterion::new(field, direction);
                ToggleOutcome::Flipped
            }
        }
    }

    /// Drop the criterion for `field` regardless of direction
    pub fn remove_field(&mut self, field: SortField) -> bool {
        match self.position(field) {
            Some(idx) => {
                self.0.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Move the criterion identified by `key` (`field-direction`) to
    /// `to`. Unknown keys and out-of-range targets leave the list as is.
    pub fn move_criterion(&mut self, key: &str, to: usize) -> bool {
        let Some(from) = self.0.iter().position(|c| c.key() == key) else {
            return false;
        };
        if to >= self.0.len() {
            return false;
        }
        move_item(&mut self.0, from, to)
    }
}

impl TryFrom<Vec<SortCriterion>> for ActiveSortList {
    type Error = ModelError;

    fn try_from(criteria: Vec<SortCriterion>) -> Result<Self, Self::Error> {
        let mut seen = [false; SortField::COUNT];
        for criterion in &criteria {
            let slot = &mut seen[criterion.field.index()];
            if *slot {
                return Err(ModelError::InvalidCriterionKey(format!(
                    "duplicate criterion for field {}",
                    criterion.field
                )));
            }
            *slot = true;
        }
        Ok(Self(criteria))
    }
}

impl From<ActiveSortList> for Vec<SortCriterion> {
    fn from(list: ActiveSortList) -> Self {
        list.0
    }
}

impl<'a> IntoIterator for &'a ActiveSortList {
    type Item = &'a SortCriterion;
    type IntoIter = std::slice::Iter<'a, SortCriterion>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Permutation of all [`SortField`]s; earlier fields win tie-breaks.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<SortField>", into = "Vec<SortField>")
)]
pub struct FieldPriorityOrder(Vec<SortField>);

impl FieldPriorityOrder {
    /// Fields offered by the sort menu first, then the rest in declaration
    /// order.
    pub const DEFAULT: [SortField; SortField::COUNT] = [
        SortField::Name,
        SortField::Id,
        SortField::UpdatedAt,
        SortField::Email,
        SortField::Type,
        SortField::Status,
        SortField::CreatedAt,
    ];

    /// Build an order from a possibly partial list. Fields missing from
    /// `fields` are appended in `base` order; duplicates are rejected.
    pub fn from_partial(
        fields: &[SortField],
        base: &FieldPriorityOrder,
    ) -> Result<Self, ModelError> {
        let mut seen = [false; SortField::COUNT];
        let mut order = Vec::with_capacity(SortField::COUNT);
        for field in fields {
            if seen[field.index()] {
                return Err(ModelError::InvalidFieldOrder(format!(
                    "field {field} listed more than once"
                )));
            }
            seen[field.index()] = true;
            order.push(*field);
        }
        order.extend(base.0.iter().copied().filter(|f| !seen[f.index()]));
        Ok(Self(order))
    }

    pub fn as_slice(&self) -> &[SortField] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SortField> {
        self.0.iter()
    }

    /// Priority rank of `field` (0 = highest)
    pub fn position(&self, field: SortField) -> usize {
        self.0
            .iter()
            .position(|f| *f == field)
            .unwrap_or(SortField::COUNT)
    }

    /// Rank of every field, indexed by [`SortField::index`]
    pub fn ranks(&self) -> [usize; SortField::COUNT] {
        let mut ranks = [SortField::COUNT; SortField::COUNT];
        for (rank, field) in self.0.iter().enumerate() {
            ranks[field.index()] = rank;
        }
        ranks
    }

    /// Move `field` to `to` (clamped), shifting the others
    pub fn move_field(&mut self, field: SortField, to: usize) -> bool {
        let from = self.position(field);
        move_item(&mut self.0, from, to)
    }
}

impl Default for FieldPriorityOrder {
    fn default() -> Self {
        Self(Self::DEFAULT.to_vec())
    }
}

impl TryFrom<Vec<SortField>> for FieldPriorityOrder {
    type Error = ModelError;

    fn try_from(fields: Vec<SortField>) -> Result<Self, Self::Error> {
        Self::from_partial(&fields, &Self::default())
    }
}

impl From<FieldPriorityOrder> for Vec<SortField> {
    fn from(order: FieldPriorityOrder) -> Self {
        order.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_permutation(order: &FieldPriorityOrder) -> bool {
        let mut fields = order.as_slice().to_vec();
        fields.sort();
        fields == SortField::all().to_vec()
    }

    #[test]
    fn toggle_cycles_between_added_flipped_removed() {
        let mut list = ActiveSortList::new();
        list.toggle(SortField::Id, SortDirection::Ascending);
        assert_eq!(
            list.toggle(SortField::Name, SortDirection::Ascending),
            ToggleOutcome::Added
        );
        assert_eq!(
            list.toggle(SortField::Name, SortDirection::Descending),
            ToggleOutcome::Flipped
        );
        assert_eq!(list.position(SortField::Name), Some(1));
        assert_eq!(
            list.toggle(SortField::Name, SortDirection::Descending),
            ToggleOutcome::Removed
        );
        assert_eq!(list.as_slice(), &[SortCriterion::asc(SortField::Id)]);
    }

    #[test]
    fn reversed_direction_flips_orderings() {
        let asc = SortDirection::Ascending;
        assert_eq!(asc.reversed(), SortDirection::Descending);
        assert_eq!(asc.reversed().reversed(), asc);
        assert_eq!(asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(asc.reversed().apply(Ordering::Less), Ordering::Greater);
    }

    #[test]
    fn duplicate_fields_are_rejected() {
        let result = ActiveSortList::try_from(vec![
            SortCriterion::asc(SortField::Name),
            SortCriterion::desc(SortField::Name),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn criterion_keys_round_trip() {
        let criterion = SortCriterion::desc(SortField::UpdatedAt);
        assert_eq!(criterion.key(), "updatedAt-desc");
        assert_eq!("updatedAt-desc".parse::<SortCriterion>(), Ok(criterion));
        assert_eq!(
            "created_at-asc".parse::<SortCriterion>().map(|c| c.field),
            Ok(SortField::CreatedAt)
        );
        assert!("name".parse::<SortCriterion>().is_err());
        assert!("name-up".parse::<SortCriterion>().is_err());
    }

    #[test]
    fn move_criterion_ignores_unknown_keys_and_bad_targets() {
        let mut list = ActiveSortList::try_from(vec![
            SortCriterion::asc(SortField::Name),
            SortCriterion::desc(SortField::Id),
        ])
        .unwrap();
        assert!(!list.move_criterion("email-asc", 0));
        assert!(!list.move_criterion("name-asc", 5));
        assert!(list.move_criterion("id-desc", 0));
        assert_eq!(list.as_slice()[0], SortCriterion::desc(SortField::Id));
    }

    #[test]
    fn partial_orders_are_completed_from_base() {
        let order = FieldPriorityOrder::try_from(vec![
            SortField::Status,
            SortField::Id,
        ])
        .unwrap();
        assert!(is_permutation(&order));
        assert_eq!(&order.as_slice()[..3], &[SortField::Status, SortField::Id, SortField::Name]);
    }

    #[test]
    fn duplicate_order_entries_are_rejected() {
        assert!(
            FieldPriorityOrder::try_from(vec![SortField::Id, SortField::Id])
                .is_err()
        );
    }

    #[test]
    fn move_field_keeps_permutation() {
        let mut order = FieldPriorityOrder::default();
        assert!(order.move_field(SortField::CreatedAt, 0));
        assert_eq!(order.position(SortField::CreatedAt), 0);
        assert!(order.move_field(SortField::Name, 99));
        assert_eq!(order.position(SortField::Name), SortField::COUNT - 1);
        assert!(is_permutation(&order));
    }

    #[test]
    fn ranks_match_positions() {
        let order = FieldPriorityOrder::default();
        let ranks = order.ranks();
        for field in SortField::all() {
            assert_eq!(ranks[field.index()], order.position(*field));
        }
    }

    #[test]
    fn move_item_clamps_target() {
        let mut items = vec!["a", "b", "c"];
        assert!(move_item(&mut items, 0, 10));
        assert_eq!(items, vec!["b", "c", "a"]);
        assert!(!move_item(&mut items, 3, 0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn wire_format_matches_saved_state() {
        let list = ActiveSortList::try_from(vec![
            SortCriterion::asc(SortField::Name),
            SortCriterion::desc(SortField::UpdatedAt),
        ])
        .unwrap();
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(
            json,
            r#"[{"field":"name","direction":"asc"},{"field":"updatedAt","direction":"desc"}]"#
        );

        let order: FieldPriorityOrder =
            serde_json::from_str(r#"["updatedAt","name","id"]"#).unwrap();
        assert_eq!(order.position(SortField::UpdatedAt), 0);
    }
}
