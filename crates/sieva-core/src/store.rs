use std::{cell::RefCell, collections::BTreeMap};
use thiserror::Error as ThisError;

///
/// StateStore
///
/// Client-local durable key/value port for persisted view state. The
/// production implementation wraps the browser's local storage; the
/// engine treats writes as best-effort and never surfaces a failed one
/// to the user.
///

pub trait StateStore {
    /// Read a persisted payload, `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a payload. Best-effort; the caller ignores failures.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

///
/// StoreError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("state store write failed: {message}")]
pub struct StoreError {
    pub message: String,
}

///
/// MemoryStore
///
/// In-memory `StateStore` for tests and headless use. Interior
/// mutability keeps the port's `&self` surface identical to the
/// browser-backed implementation.
///

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());

        Ok(())
    }
}
