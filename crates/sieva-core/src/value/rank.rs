use crate::value::Value;

///
/// Canonical variant rank
///
/// Mixed-variant comparisons fall back to rank so the total order stays
/// deterministic regardless of how a collection mixes cell kinds.
/// Null ranks last under ascending order.
///

impl Value {
    #[must_use]
    pub(crate) const fn canonical_rank(&self) -> u8 {
        match self {
            Self::Uint(_) => 0,
            Self::Int(_) => 1,
            Self::Float64(_) => 2,
            Self::Timestamp(_) => 3,
            Self::Text(_) => 4,
            Self::Null => 5,
        }
    }
}
