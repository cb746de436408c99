mod builder;

pub use builder::{SchemaBuilder, SchemaError};

use crate::view::SortSpec;
use serde::Serialize;

/// Maximum length for listing field identifiers.
pub const MAX_FIELD_NAME_LEN: usize = 64;

/// Maximum number of fields allowed in a listing schema.
pub const MAX_FIELDS: usize = 32;

///
/// FieldKind
///
/// What a field is for. Kind decides which view operations may touch
/// it: categorical fields filter, text fields search, numeric and
/// timestamp fields sort.
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum FieldKind {
    Categorical,
    Numeric,
    Text,
    Timestamp,
}

impl FieldKind {
    #[must_use]
    pub const fn is_filterable(self) -> bool {
        matches!(self, Self::Categorical)
    }

    #[must_use]
    pub const fn is_searchable(self) -> bool {
        matches!(self, Self::Text)
    }

    #[must_use]
    pub const fn is_sortable(self) -> bool {
        matches!(self, Self::Numeric | Self::Timestamp)
    }
}

///
/// FieldModel
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct FieldModel {
    pub name: &'static str,
    pub kind: FieldKind,
}

///
/// ListingSchema
///
/// The fixed field enumeration for one listing. Replaces dynamic field
/// indexing: every field reference made by view state is checked here,
/// so an invalid reference surfaces at the boundary instead of
/// producing a silent no-op.
///
/// Construct via [`SchemaBuilder`]; a built schema is always valid.
///

#[derive(Clone, Debug, Serialize)]
pub struct ListingSchema {
    listing: &'static str,
    state_key: &'static str,
    fields: Vec<FieldModel>,
    search_field: &'static str,
    default_sort: SortSpec,
}

impl ListingSchema {
    pub(crate) const fn from_parts(
        listing: &'static str,
        state_key: &'static str,
        fields: Vec<FieldModel>,
        search_field: &'static str,
        default_sort: SortSpec,
    ) -> Self {
        Self {
            listing,
            state_key,
            fields,
            search_field,
            default_sort,
        }
    }

    #[must_use]
    pub const fn listing(&self) -> &'static str {
        self.listing
    }

    /// Client-local storage key for this listing's persisted view state.
    #[must_use]
    pub const fn state_key(&self) -> &'static str {
        self.state_key
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldModel> {
        self.fields.iter().find(|f| f.name == name)
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldModel] {
        &self.fields
    }

    /// Designated free-text search field. Always present and `Text`.
    #[must_use]
    pub const fn search_field(&self) -> &'static str {
        self.search_field
    }

    /// Sort applied when no view state is persisted or after a reset.
    #[must_use]
    pub const fn default_sort(&self) -> &SortSpec {
        &self.default_sort
    }

    /// Filterable fields in declaration order.
    pub fn categorical_fields(&self) -> impl Iterator<Item = &FieldModel> {
        self.fields.iter().filter(|f| f.kind.is_filterable())
    }

    /// Sortable fields in declaration order.
    pub fn sortable_fields(&self) -> impl Iterator<Item = &FieldModel> {
        self.fields.iter().filter(|f| f.kind.is_sortable())
    }
}
