mod decode;

pub use decode::decode_records;

use crate::record::Record;
use thiserror::Error as ThisError;

///
/// RecordSource
///
/// One-shot fetch port for a listing's full record collection. No
/// pagination, no partial results: either the whole collection arrives
/// or the fetch fails with a human-readable message. Retry policy, if
/// any, belongs to the implementation behind this port.
///

pub trait RecordSource {
    fn fetch(&self, listing: &str) -> Result<Vec<Record>, SourceError>;
}

///
/// SourceError
///
/// Data-unavailable conditions reported upward to the view. The engine
/// itself never retries.
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SourceError {
    #[error("failed to decode records: {message}")]
    Decode { message: String },

    #[error("failed to load records: {message}")]
    Transport { message: String },
}

impl SourceError {
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }
}
