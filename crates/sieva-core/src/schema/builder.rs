use crate::{
    schema::{FieldKind, FieldModel, ListingSchema, MAX_FIELD_NAME_LEN, MAX_FIELDS},
    view::{Direction, SortSpec},
};
use thiserror::Error as ThisError;

///
/// SchemaBuilder
///
/// Declarative listing-schema construction with staged validation:
/// per-field invariants first, then schema-wide invariants. `build`
/// either returns a schema every view operation can trust, or the
/// first violated rule.
///

#[derive(Debug)]
pub struct SchemaBuilder {
    listing: &'static str,
    state_key: &'static str,
    fields: Vec<FieldModel>,
    search_field: Option<&'static str>,
    default_sort: Option<(&'static str, Direction)>,
}

impl SchemaBuilder {
    #[must_use]
    pub const fn new(listing: &'static str, state_key: &'static str) -> Self {
        Self {
            listing,
            state_key,
            fields: Vec::new(),
            search_field: None,
            default_sort: None,
        }
    }

    #[must_use]
    pub fn field(mut self, name: &'static str, kind: FieldKind) -> Self {
        self.fields.push(FieldModel { name, kind });
        self
    }

    /// Declare the designated free-text search field.
    #[must_use]
    pub const fn search(mut self, name: &'static str) -> Self {
        self.search_field = Some(name);
        self
    }

    /// Declare the sort applied when no state is persisted.
    #[must_use]
    pub const fn default_sort(mut self, name: &'static str, direction: Direction) -> Self {
        self.default_sort = Some((name, direction));
        self
    }

    pub fn build(self) -> Result<ListingSchema, SchemaError> {
        // Phase 1: per-field invariants.
        self.validate_fields()?;

        // Phase 2: schema-wide invariants.
        let search_field = self.validate_search()?;
        let default_sort = self.validate_default_sort()?;

        Ok(ListingSchema::from_parts(
            self.listing,
            self.state_key,
            self.fields,
            search_field,
            default_sort,
        ))
    }

    fn validate_fields(&self) -> Result<(), SchemaError> {
        if self.listing.is_empty() {
            return Err(SchemaError::EmptyListingName);
        }
        if self.state_key.is_empty() {
            return Err(SchemaError::EmptyStateKey {
                listing: self.listing,
            });
        }
        if self.fields.len() > MAX_FIELDS {
            return Err(SchemaError::TooManyFields {
                listing: self.listing,
                count: self.fields.len(),
            });
        }

        for (index, field) in self.fields.iter().enumerate() {
            if field.name.is_empty() {
                return Err(SchemaError::EmptyFieldName {
                    listing: self.listing,
                    index,
                });
            }
            if field.name.len() > MAX_FIELD_NAME_LEN {
                return Err(SchemaError::FieldNameTooLong {
                    listing: self.listing,
                    field: field.name,
                });
            }
            if self.fields[..index].iter().any(|f| f.name == field.name) {
                return Err(SchemaError::DuplicateField {
                    listing: self.listing,
                    field: field.name,
                });
            }
        }

        Ok(())
    }

    fn validate_search(&self) -> Result<&'static str, SchemaError> {
        let name = self.search_field.ok_or(SchemaError::MissingSearchField {
            listing: self.listing,
        })?;

        let field = self
            .fields
            .iter()
            .find(|f| f.name == name)
            .ok_or(SchemaError::UnknownSearchField {
                listing: self.listing,
                field: name,
            })?;

        if !field.kind.is_searchable() {
            return Err(SchemaError::SearchFieldNotText {
                listing: self.listing,
                field: name,
            });
        }

        Ok(name)
    }

    fn validate_default_sort(&self) -> Result<SortSpec, SchemaError> {
        let (name, direction) = self
            .default_sort
            .ok_or(SchemaError::MissingDefaultSort {
                listing: self.listing,
            })?;

        let field = self
            .fields
            .iter()
            .find(|f| f.name == name)
            .ok_or(SchemaError::UnknownSortField {
                listing: self.listing,
                field: name,
            })?;

        if !field.kind.is_sortable() {
            return Err(SchemaError::SortFieldNotSortable {
                listing: self.listing,
                field: name,
            });
        }

        Ok(SortSpec::new(name, direction))
    }
}

///
/// SchemaError
///
/// One variant per construction rule; carries the listing (and field
/// where one is involved) so a violation names its source.
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SchemaError {
    #[error("{listing}: duplicate field '{field}'")]
    DuplicateField {
        listing: &'static str,
        field: &'static str,
    },

    #[error("{listing}: field at position {index} has an empty name")]
    EmptyFieldName { listing: &'static str, index: usize },

    #[error("listing name must not be empty")]
    EmptyListingName,

    #[error("{listing}: state key must not be empty")]
    EmptyStateKey { listing: &'static str },

    #[error("{listing}: field name '{field}' exceeds the identifier limit")]
    FieldNameTooLong {
        listing: &'static str,
        field: &'static str,
    },

    #[error("{listing}: no default sort declared")]
    MissingDefaultSort { listing: &'static str },

    #[error("{listing}: no search field declared")]
    MissingSearchField { listing: &'static str },

    #[error("{listing}: search field '{field}' is not a text field")]
    SearchFieldNotText {
        listing: &'static str,
        field: &'static str,
    },

    #[error("{listing}: default sort field '{field}' is not sortable")]
    SortFieldNotSortable {
        listing: &'static str,
        field: &'static str,
    },

    #[error("{listing}: {count} fields exceeds the schema limit")]
    TooManyFields { listing: &'static str, count: usize },

    #[error("{listing}: search field '{field}' is not declared")]
    UnknownSearchField {
        listing: &'static str,
        field: &'static str,
    },

    #[error("{listing}: default sort field '{field}' is not declared")]
    UnknownSortField {
        listing: &'static str,
        field: &'static str,
    },
}
