use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// FormReport
///
/// Per-field issue aggregation for one validation pass. Field order and
/// per-field message order are deterministic: fields iterate
/// alphabetically, messages in rule-application order.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FormReport {
    issues: BTreeMap<&'static str, Vec<String>>,
}

impl FormReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.issues.entry(field).or_default().push(message.into());
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Issues for one field, empty when the field passed.
    #[must_use]
    pub fn field(&self, field: &str) -> &[String] {
        self.issues.get(field).map_or(&[], Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[String])> {
        self.issues
            .iter()
            .map(|(field, messages)| (*field, messages.as_slice()))
    }

    /// Consume the report, failing when any issue was collected.
    pub fn into_result(self) -> Result<(), FormError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(FormError { report: self })
        }
    }
}

///
/// FormError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("form validation failed on {} field(s)", report.issues.len())]
pub struct FormError {
    pub report: FormReport,
}
