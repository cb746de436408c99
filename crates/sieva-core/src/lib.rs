//! Core runtime for sieva: values, records, listing schemas, the derive
//! engine, and the storage/source ports consumed by view code.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod catalog;
pub mod error;
pub mod record;
pub mod schema;
pub mod source;
pub mod store;
pub mod types;
pub mod value;
pub mod view;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, stores, decoders, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        record::{Record, RecordId},
        schema::{FieldKind, ListingSchema},
        types::Timestamp,
        value::Value,
        view::{Direction, ListingController, SortSpec, ViewState},
    };
}
