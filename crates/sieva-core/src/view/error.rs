use crate::schema::FieldKind;
use thiserror::Error as ThisError;

///
/// ViewError
///
/// Contract violations at the view boundary. Every variant is a
/// programming error in the caller: the engine fails fast and leaves
/// prior state untouched rather than silently no-opping, so the
/// integration bug surfaces at the misuse site.
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ViewError {
    #[error("{listing}: field '{field}' is {kind:?}, not a filterable categorical field")]
    NotFilterable {
        listing: &'static str,
        field: String,
        kind: FieldKind,
    },

    #[error("{listing}: field '{field}' is {kind:?}, not a sortable field")]
    NotSortable {
        listing: &'static str,
        field: String,
        kind: FieldKind,
    },

    #[error("{listing}: unknown field '{field}'")]
    UnknownField {
        listing: &'static str,
        field: String,
    },
}

impl ViewError {
    pub(crate) fn unknown_field(listing: &'static str, field: impl Into<String>) -> Self {
        Self::UnknownField {
            listing,
            field: field.into(),
        }
    }

    pub(crate) fn not_filterable(
        listing: &'static str,
        field: impl Into<String>,
        kind: FieldKind,
    ) -> Self {
        Self::NotFilterable {
            listing,
            field: field.into(),
            kind,
        }
    }

    pub(crate) fn not_sortable(
        listing: &'static str,
        field: impl Into<String>,
        kind: FieldKind,
    ) -> Self {
        Self::NotSortable {
            listing,
            field: field.into(),
            kind,
        }
    }
}
