// ============================================================================
// Interfaces Module
// Contracts the core exposes to external collaborators
// ============================================================================

mod record_store;

pub use record_store::{InMemoryStore, RecordStore, StoreError};

#[cfg(feature = "serde")]
pub use record_store::JsonStore;
