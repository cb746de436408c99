use crate::value::Value;
use std::cmp::Ordering;

///
/// NumericRepr
///
/// Widened representation for cross-variant numeric comparison. JSON
/// decoding lands numbers in `Uint`/`Int`/`Float64` depending on how
/// the payload spells them, so a numeric sort field may mix variants.
///

enum NumericRepr {
    Integer(i128),
    F64(f64),
}

/// Total canonical comparator used by option discovery and diagnostics.
///
/// Ordering rules:
/// 1. Canonical variant rank
/// 2. Variant-specific comparison for same-ranked values
///
/// Mixed-variant comparisons are rank-only and must remain deterministic.
#[must_use]
pub fn canonical_cmp(left: &Value, right: &Value) -> Ordering {
    let rank = left.canonical_rank().cmp(&right.canonical_rank());
    if rank != Ordering::Equal {
        return rank;
    }

    canonical_cmp_same_rank(left, right)
}

/// Ordering comparator for the derive sort.
///
/// Same-variant cells compare strictly; mixed numeric variants widen
/// and compare by numeric value. Returns `None` for anything else;
/// the sort pipeline falls back to [`canonical_cmp`] for such pairs
/// instead of guessing a value order.
#[must_use]
pub fn order_cmp(left: &Value, right: &Value) -> Option<Ordering> {
    strict_order_cmp(left, right).or_else(|| numeric_cmp(left, right))
}

/// Strict comparator for identical orderable variants.
///
/// Returns `None` for mismatched or non-orderable variants.
#[must_use]
pub fn strict_order_cmp(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Float64(a), Value::Float64(b)) => Some(a.total_cmp(b)),
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
        (Value::Timestamp(a), Value::Timestamp(b)) => Some(a.cmp(b)),
        (Value::Uint(a), Value::Uint(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

// Widen mixed numeric variants and compare by value. Integer/float
// pairs compare through f64 with total_cmp, which is exact for the
// magnitudes listing data carries.
fn numeric_cmp(left: &Value, right: &Value) -> Option<Ordering> {
    let (left, right) = (numeric_repr(left)?, numeric_repr(right)?);

    let ordering = match (left, right) {
        (NumericRepr::Integer(a), NumericRepr::Integer(b)) => a.cmp(&b),
        (NumericRepr::F64(a), NumericRepr::F64(b)) => a.total_cmp(&b),
        #[allow(clippy::cast_precision_loss)]
        (NumericRepr::Integer(a), NumericRepr::F64(b)) => (a as f64).total_cmp(&b),
        #[allow(clippy::cast_precision_loss)]
        (NumericRepr::F64(a), NumericRepr::Integer(b)) => a.total_cmp(&(b as f64)),
    };

    Some(ordering)
}

const fn numeric_repr(value: &Value) -> Option<NumericRepr> {
    match value {
        Value::Uint(v) => Some(NumericRepr::Integer(*v as i128)),
        Value::Int(v) => Some(NumericRepr::Integer(*v as i128)),
        Value::Float64(v) => Some(NumericRepr::F64(*v)),
        _ => None,
    }
}

fn canonical_cmp_same_rank(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Float64(a), Value::Float64(b)) => a.total_cmp(b),
        (Value::Int(a), Value::Int(b)) => a.cmp(b),
        (Value::Text(a), Value::Text(b)) => a.cmp(b),
        (Value::Timestamp(a), Value::Timestamp(b)) => a.cmp(b),
        (Value::Uint(a), Value::Uint(b)) => a.cmp(b),
        (Value::Null, Value::Null) => Ordering::Equal,
        // same-rank pairs are exhaustive above; ranks differ otherwise
        _ => Ordering::Equal,
    }
}
