use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

///
/// Timestamp
///
/// Milliseconds since the Unix epoch; negative values are pre-epoch.
/// Hosted-backend rows carry instants as RFC 3339 strings.
///

#[repr(transparent)]
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd,
    Serialize,
)]
pub struct Timestamp(i64);

impl Timestamp {
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    #[must_use]
    pub const fn millis(self) -> i64 {
        self.0
    }

    /// Parse an RFC 3339 instant, truncating to millisecond precision.
    pub fn from_rfc3339(s: &str) -> Result<Self, TimestampParseError> {
        let odt =
            OffsetDateTime::parse(s, &Rfc3339).map_err(|err| TimestampParseError::Invalid {
                value: s.to_string(),
                message: err.to_string(),
            })?;

        let nanos = odt.unix_timestamp_nanos();
        let millis = i64::try_from(nanos / 1_000_000).map_err(|_| {
            TimestampParseError::OutOfRange {
                value: s.to_string(),
            }
        })?;

        Ok(Self(millis))
    }

    /// Format as an RFC 3339 instant in UTC.
    ///
    /// Returns `None` for instants `time` cannot represent.
    #[must_use]
    pub fn to_rfc3339(self) -> Option<String> {
        let nanos = i128::from(self.0) * 1_000_000;
        let odt = OffsetDateTime::from_unix_timestamp_nanos(nanos).ok()?;

        odt.format(&Rfc3339).ok()
    }
}

///
/// TimestampParseError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum TimestampParseError {
    #[error("invalid rfc3339 timestamp '{value}': {message}")]
    Invalid { value: String, message: String },

    #[error("timestamp '{value}' exceeds millisecond range")]
    OutOfRange { value: String },
}
