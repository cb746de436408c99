//! Module: view::options
//! Responsibility: selectable option discovery for categorical filters.
//!
//! OPTIONS-FROM-FULL-COLLECTION: option sets always derive from the
//! entire unfiltered collection, never from the currently derived
//! subset, so narrowing one filter never removes options from another
//! filter's menu. This is deliberate UX policy, uniform across fields;
//! cross-filter narrowing would be a policy change, not a bug fix.

use crate::{
    record::Record,
    schema::ListingSchema,
    value::Value,
    view::ViewError,
};
use std::collections::BTreeSet;

/// Distinct values of a categorical field across the full collection,
/// sorted and deduplicated.
///
/// `field` must name a filterable field of `schema`; anything else is
/// a caller contract violation.
pub fn filter_options(
    schema: &ListingSchema,
    records: &[Record],
    field: &str,
) -> Result<Vec<String>, ViewError> {
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

    let options: BTreeSet<&str> = records
        .iter()
        .filter_map(|record| record.field(field))
        .filter_map(Value::as_text)
        .filter(|text| !text.is_empty())
        .collect();

    Ok(options.into_iter().map(String::from).collect())
}
