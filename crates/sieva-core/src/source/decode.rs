//! Module: source::decode
//! Responsibility: turn a hosted-backend JSON row array into typed
//! records under a listing schema.
//! Boundary: cells are coerced per declared field kind; rows that
//! cannot be coerced fail the whole decode (no partial collections).

use crate::{
    record::{Record, RecordId},
    schema::{FieldKind, ListingSchema},
    source::SourceError,
    types::Timestamp,
    value::Value,
};
use serde_json::Value as Json;

/// Backend object-id key carried by every row.
const ID_FIELD: &str = "objectId";

/// Decode a JSON array of row objects into records.
///
/// Only fields the schema declares are kept; anything else a row
/// carries (backend bookkeeping columns) is dropped. A declared field
/// missing from a row decodes as `Null`.
pub fn decode_records(schema: &ListingSchema, payload: &str) -> Result<Vec<Record>, SourceError> {
    let json: Json = serde_json::from_str(payload)
        .map_err(|err| SourceError::decode(format!("invalid json: {err}")))?;

    let rows = json
        .as_array()
        .ok_or_else(|| SourceError::decode("expected a top-level array of rows"))?;

    rows.iter()
        .enumerate()
        .map(|(index, row)| decode_row(schema, index, row))
        .collect()
}

fn decode_row(schema: &ListingSchema, index: usize, row: &Json) -> Result<Record, SourceError> {
    let row = row
        .as_object()
        .ok_or_else(|| SourceError::decode(format!("row {index} is not an object")))?;

    let id = row
        .get(ID_FIELD)
        .and_then(Json::as_str)
        .ok_or_else(|| SourceError::decode(format!("row {index} has no '{ID_FIELD}'")))?;

    let mut record = Record::new(RecordId::from(id));
    for field in schema.fields() {
        let value = match row.get(field.name) {
            Some(cell) => decode_cell(field.name, field.kind, cell)?,
            None => Value::Null,
        };
        record = record.with(field.name, value);
    }

    Ok(record)
}

fn decode_cell(name: &str, kind: FieldKind, cell: &Json) -> Result<Value, SourceError> {
    if cell.is_null() {
        return Ok(Value::Null);
    }

    match kind {
        FieldKind::Categorical | FieldKind::Text => cell
            .as_str()
            .map(Value::from)
            .ok_or_else(|| SourceError::decode(format!("field '{name}' is not a string"))),

        FieldKind::Numeric => decode_number(name, cell),

        FieldKind::Timestamp => {
            let raw = cell
                .as_str()
                .ok_or_else(|| SourceError::decode(format!("field '{name}' is not a timestamp")))?;

            Timestamp::from_rfc3339(raw)
                .map(Value::from)
                .map_err(|err| SourceError::decode(format!("field '{name}': {err}")))
        }
    }
}

// Preserve the narrowest representation the payload allows; the value
// comparator widens across numeric variants when sorting.
fn decode_number(name: &str, cell: &Json) -> Result<Value, SourceError> {
    if let Some(v) = cell.as_u64() {
        return Ok(Value::Uint(v));
    }
    if let Some(v) = cell.as_i64() {
        return Ok(Value::Int(v));
    }

    cell.as_f64()
        .map(Value::from)
        .ok_or_else(|| SourceError::decode(format!("field '{name}' is not numeric")))
}
