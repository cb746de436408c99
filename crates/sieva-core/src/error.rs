use crate::{schema::SchemaError, source::SourceError, view::ViewError};
use thiserror::Error as ThisError;

///
/// Error
///
/// Umbrella over the module error surfaces, for callers that funnel
/// everything through one result type. Module code returns the
/// specific enums directly.
///

#[derive(Clone, Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    SchemaError(#[from] SchemaError),

    #[error(transparent)]
    SourceError(#[from] SourceError),

    #[error(transparent)]
    ViewError(#[from] ViewError),
}
