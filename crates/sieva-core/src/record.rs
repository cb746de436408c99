use crate::value::Value;
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// RecordId
///
/// Opaque identifier minted by the record source (hosted-backend object
/// id). Unique within a collection; never generated client-side.
///

#[derive(
    Clone, Debug, Deserialize, Display, Eq, From, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub struct RecordId(String);

impl RecordId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

///
/// Record
///
/// One row of a listing collection: a stable identifier plus named
/// scalar cells. Immutable once built; the derive engine only ever
/// reads records, it never rewrites a collection.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Record {
    id: RecordId,
    fields: BTreeMap<String, Value>,
}

impl Record {
    #[must_use]
    pub const fn new(id: RecordId) -> Self {
        Self {
            id,
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style cell insert, used by decoders and fixtures.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    #[must_use]
    pub const fn id(&self) -> &RecordId {
        &self.id
    }

    /// Cell lookup by schema field name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_cells() {
        let record = Record::new(RecordId::from("a1"))
            .with("position", "Engineer")
            .with("price", 100_u64);

        assert_eq!(record.id().as_str(), "a1");
        assert_eq!(record.field("position"), Some(&Value::Text("Engineer".into())));
        assert_eq!(record.field("price"), Some(&Value::Uint(100)));
        assert_eq!(record.field("missing"), None);
    }

    #[test]
    fn later_with_wins() {
        let record = Record::new(RecordId::from("a1"))
            .with("category", "Tech")
            .with("category", "Finance");

        assert_eq!(record.field("category"), Some(&Value::Text("Finance".into())));
    }
}
