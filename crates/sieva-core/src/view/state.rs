use crate::schema::ListingSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// Direction
///
/// Canonical sort direction shared by schema defaults, view state, and
/// the derive comparator.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

///
/// SortSpec
///
/// One sortable field plus a direction; the whole of the ordering
/// configuration.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SortSpec {
    field: String,
    direction: Direction,
}

impl SortSpec {
    #[must_use]
    pub fn new(field: impl Into<String>, direction: Direction) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }
}

///
/// ViewState
///
/// Pure view configuration: search term, active categorical filters,
/// and sort. Never holds records and never mutates the collection it
/// is applied to; the engine re-derives the whole view from it on
/// every change. Persisted as JSON under the schema's state key.
///
/// An empty search term means no search constraint; an absent filter
/// entry means no constraint on that field.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ViewState {
    #[serde(default)]
    pub search_term: String,

    #[serde(default)]
    pub filters: BTreeMap<String, String>,

    pub sort: SortSpec,
}

impl ViewState {
    /// The reset state for a listing: empty search, no filters, the
    /// schema's default sort.
    #[must_use]
    pub fn default_for(schema: &ListingSchema) -> Self {
        Self {
            search_term: String::new(),
            filters: BTreeMap::new(),
            sort: schema.default_sort().clone(),
        }
    }

    /// Filter value for a field, if one is active.
    #[must_use]
    pub fn filter(&self, field: &str) -> Option<&str> {
        self.filters.get(field).map(String::as_str)
    }
}
