//! Ready-made schemas for the production listings. The field lists,
//! state keys, and default sorts match what the site persists and
//! renders today, so swapping the old ad-hoc page state for the engine
//! is a drop-in change.

use crate::{
    schema::{FieldKind, ListingSchema, SchemaBuilder, SchemaError},
    view::Direction,
};

/// Job-postings listing: searched by position, filtered on four
/// categorical facets, newest first by default.
pub fn careers() -> Result<ListingSchema, SchemaError> {
    SchemaBuilder::new("careers", "careersState")
        .field("position", FieldKind::Text)
        .field("category", FieldKind::Categorical)
        .field("jobType", FieldKind::Categorical)
        .field("location", FieldKind::Categorical)
        .field("region", FieldKind::Categorical)
        .field("created", FieldKind::Timestamp)
        .search("position")
        .default_sort("created", Direction::Desc)
        .build()
}

/// Product catalog: searched by product name, filtered on category,
/// cheapest first by default.
pub fn products() -> Result<ListingSchema, SchemaError> {
    SchemaBuilder::new("products", "productsState")
        .field("productName", FieldKind::Text)
        .field("category", FieldKind::Categorical)
        .field("specification", FieldKind::Text)
        .field("price", FieldKind::Numeric)
        .search("productName")
        .default_sort("price", Direction::Asc)
        .build()
}
