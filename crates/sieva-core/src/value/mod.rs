mod compare;
mod rank;


pub use compare::{canonical_cmp, order_cmp, strict_order_cmp};

use crate::types::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// Value
///
/// Scalar cell type for listing records. Text cells are searchable,
/// numeric and timestamp cells are sortable; `Null` marks an absent
/// cell on a row whose schema declares the field.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Value {
    Float64(f64),
    Int(i64),
    Null,
    Text(String),
    Timestamp(Timestamp),
    Uint(u64),
}

impl Value {
    /// Text payload, if this is a text cell.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Whether this cell participates in strict ordering.
    #[must_use]
    pub const fn is_orderable(&self) -> bool {
        !matches!(self, Self::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float64(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Null => write!(f, "null"),
            Self::Text(v) => write!(f, "{v}"),
            Self::Timestamp(v) => write!(f, "{v}"),
            Self::Uint(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::Uint(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float64(v)
    }
}

impl From<Timestamp> for Value {
    fn from(v: Timestamp) -> Self {
        Self::Timestamp(v)
    }
}
