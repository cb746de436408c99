//! ## Crate layout
//! - `core`: values, records, listing schemas, the derive engine, and
//!   the storage/source ports.
//! - `forms`: validation schemas for the site's submission flows.
//!
//! The `prelude` module mirrors the surface view code actually uses.

pub use sieva_core as core;
pub use sieva_forms as forms;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use core::{catalog, error::Error};

///
/// Prelude
///

pub mod prelude {
    pub use crate::core::{
        record::{Record, RecordId},
        schema::{FieldKind, ListingSchema, SchemaBuilder},
        source::{RecordSource, decode_records},
        store::{MemoryStore, StateStore},
        types::Timestamp,
        value::Value,
        view::{Direction, ListingController, SortSpec, ViewState, derive, filter_options},
    };
    pub use crate::forms::{ApplicationForm, FormReport, ProfileForm, SignInForm, SignUpForm};
}
