//! Module: view::derive
//! Responsibility: the pure derive pipeline (validate, search, filter,
//! stable sort) over a read-only record collection.
//! Does not own: view-state mutation, persistence, or option discovery.
//! Boundary: total over valid inputs; contract violations fail before
//! anything is applied.

use crate::{
    record::Record,
    schema::ListingSchema,
    value::{Value, canonical_cmp, order_cmp},
    view::{Direction, ViewError, ViewState},
};
use std::cmp::Ordering;

/// Compute the ordered subset of `records` described by `state`.
///
/// Pipeline order is fixed: free-text search on the schema's search
/// field, then categorical equality filters, then a stable sort under
/// the state's sort spec. Input is never mutated; identical inputs
/// yield identical output sequences. Returns either a complete derived
/// view or a [`ViewError`], never a partially applied one.
pub fn derive<'a>(
    schema: &ListingSchema,
    records: &'a [Record],
    state: &ViewState,
) -> Result<Vec<&'a Record>, ViewError> {
    validate_state(schema, state)?;

    let needle = state.search_term.to_lowercase();

    let mut view: Vec<&Record> = records
        .iter()
        .filter(|record| matches_search(schema, record, &needle))
        .filter(|record| matches_filters(record, state))
        .collect();

    let comparator = SortComparator::from_direction(state.sort.direction());
    let sort_field = state.sort.field();

    // sort_by is stable; equal-key records keep their input order
    view.sort_by(|a, b| comparator.compare_cells(a.field(sort_field), b.field(sort_field)));

    Ok(view)
}

// Check every field reference in the state against the schema before
// touching any record.
fn validate_state(schema: &ListingSchema, state: &ViewState) -> Result<(), ViewError> {
    for field in state.filters.keys() {
        let model = schema
            .field(field)
            .ok_or_else(|| ViewError::unknown_field(schema.listing(), field))?;

        if !model.kind.is_filterable() {
            return Err(ViewError::not_filterable(
                schema.listing(),
                field,
                model.kind,
            ));
        }
    }

    let sort_field = state.sort.field();
    let model = schema
        .field(sort_field)
        .ok_or_else(|| ViewError::unknown_field(schema.listing(), sort_field))?;

    if !model.kind.is_sortable() {
        return Err(ViewError::not_sortable(
            schema.listing(),
            sort_field,
            model.kind,
        ));
    }

    Ok(())
}

// Case-insensitive substring match on the designated search field.
// An empty needle retains everything; with a needle set, a record
// without a text cell in the search field cannot match.
fn matches_search(schema: &ListingSchema, record: &Record, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    record
        .field(schema.search_field())
        .and_then(Value::as_text)
        .is_some_and(|text| text.to_lowercase().contains(needle))
}

// Exact string equality per active filter; empty filter values carry
// no constraint (the UI's "any" sentinel).
fn matches_filters(record: &Record, state: &ViewState) -> bool {
    state
        .filters
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .all(|(field, value)| {
            record.field(field).and_then(Value::as_text) == Some(value.as_str())
        })
}

///
/// SortComparator
///
/// Comparator policy for the derive sort. Keeps the pipeline
/// comparator-driven instead of branching on direction at each call
/// site. Absent and null cells rank after comparable ones under either
/// direction; pairs `order_cmp` refuses (non-numeric cross-variant)
/// fall back to the canonical total order so the relation handed to
/// the sort stays a strict weak order over any collection.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct SortComparator {
    direction: Direction,
}

impl SortComparator {
    /// Construct comparator policy from the state's sort direction.
    #[must_use]
    pub(crate) const fn from_direction(direction: Direction) -> Self {
        Self { direction }
    }

    /// Compare two optional cells under this comparator's direction.
    pub(crate) fn compare_cells(self, left: Option<&Value>, right: Option<&Value>) -> Ordering {
        match (self.comparable(left), self.comparable(right)) {
            (Some(a), Some(b)) => {
                // order_cmp covers same-variant and mixed-numeric pairs;
                // anything it refuses gets the canonical total order,
                // which is rank-only across variant groups and therefore
                // agrees with the numeric widening inside them
                let ordering = order_cmp(a, b).unwrap_or_else(|| canonical_cmp(a, b));
                self.apply_direction(ordering)
            }
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }

    const fn apply_direction(self, ordering: Ordering) -> Ordering {
        match self.direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }

    #[allow(clippy::unused_self)]
    fn comparable<'a>(self, cell: Option<&'a Value>) -> Option<&'a Value> {
        cell.filter(|value| value.is_orderable())
    }
}
