// ============================================================================
// Record Store Interface
// Contract for the external persistence collaborator
// ============================================================================
//
// The core performs no file I/O of its own. A presentation layer that wants
// durable history (or a phone-book-style record list) supplies a store; the
// only requirement is whole-collection round-trip fidelity.

use std::fmt;

/// Errors a record store can surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Stored bytes could not be decoded back into records
    Corrupt(String),
    /// Backend-specific failure (disk, database, ...)
    Backend(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Corrupt(detail) => write!(f, "corrupt record data: {}", detail),
            StoreError::Backend(detail) => write!(f, "storage backend failure: {}", detail),
        }
    }
}

impl std::error::Error for StoreError {}

/// Persistence contract for an ordered collection of records.
///
/// `load_all` after `save_all` must reproduce the saved collection in
/// order; no particular byte layout is mandated.
pub trait RecordStore<R> {
    /// Replace the stored collection with `records`.
    fn save_all(&mut self, records: &[R]) -> Result<(), StoreError>;

    /// Load the whole stored collection, oldest first.
    fn load_all(&self) -> Result<Vec<R>, StoreError>;
}

/// In-memory store, the reference implementation used in tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore<R> {
    records: Vec<R>,
}

impl<R> InMemoryStore<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Clone> RecordStore<R> for InMemoryStore<R> {
    fn save_all(&mut self, records: &[R]) -> Result<(), StoreError> {
        self.records = records.to_vec();
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<R>, StoreError> {
        Ok(self.records.clone())
    }
}

/// Store that serializes the collection to an owned JSON buffer.
///
/// A presentation layer can hand the buffer to whatever byte sink it owns;
/// the core stays free of file I/O.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Default)]
pub struct JsonStore {
    buffer: String,
}

#[cfg(feature = "serde")]
impl JsonStore {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// The serialized collection as JSON.
    pub fn as_json(&self) -> &str {
        &self.buffer
    }

    /// Rebuild a store around previously exported JSON.
    pub fn from_json(json: impl Into<String>) -> Self {
        Self {
            buffer: json.into(),
        }
    }
}

#[cfg(feature = "serde")]
impl<R> RecordStore<R> for JsonStore
where
    R: serde::Serialize + serde::de::DeserializeOwned,
{
    fn save_all(&mut self, records: &[R]) -> Result<(), StoreError> {
        self.buffer = serde_json::to_string(records)
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<R>, StoreError> {
        if self.buffer.is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&self.buffer).map_err(|e| StoreError::Corrupt(e.to_string()))
    }
}
