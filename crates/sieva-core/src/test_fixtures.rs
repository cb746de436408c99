use crate::{
    record::{Record, RecordId},
    schema::{FieldKind, ListingSchema, SchemaBuilder},
    types::Timestamp,
    view::Direction,
};

///
/// Test-only schema and collection builders shared across view tests.
/// Mirrors the production careers/products listings at fixture scale.
///

pub(crate) fn careers_schema() -> ListingSchema {
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
        .expect("careers fixture schema is valid")
}

pub(crate) fn products_schema() -> ListingSchema {
    SchemaBuilder::new("products", "productsState")
        .field("productName", FieldKind::Text)
        .field("category", FieldKind::Categorical)
        .field("price", FieldKind::Numeric)
        .search("productName")
        .default_sort("price", Direction::Asc)
        .build()
        .expect("products fixture schema is valid")
}

pub(crate) fn job(
    id: &str,
    position: &str,
    category: &str,
    created_millis: i64,
) -> Record {
    Record::new(RecordId::from(id))
        .with("position", position)
        .with("category", category)
        .with("jobType", "Full-time")
        .with("location", "Oslo")
        .with("region", "Nordics")
        .with("created", Timestamp::from_millis(created_millis))
}

pub(crate) fn product(id: &str, name: &str, category: &str, price: u64) -> Record {
    Record::new(RecordId::from(id))
        .with("productName", name)
        .with("category", category)
        .with("price", price)
}

/// Small canonical collection: three jobs, two Tech one Finance,
/// with strictly increasing created dates.
pub(crate) fn scenario_jobs() -> Vec<Record> {
    vec![
        job("j1", "Engineer", "Tech", 1_000),
        job("j2", "Engineer II", "Tech", 2_000),
        job("j3", "Analyst", "Finance", 3_000),
    ]
}
