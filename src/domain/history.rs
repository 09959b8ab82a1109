// ============================================================================
// Conversion History
// Immutable conversion records and their insertion-ordered log
// ============================================================================

use crate::numeric::Radix;
use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One completed conversion, created exactly once per successful execute.
///
/// Records are never mutated or removed individually; the owning history
/// only ever bulk-clears.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConversionRecord {
    /// Unique record identifier
    pub id: Uuid,

    /// Base the input was typed in
    pub source_radix: Radix,

    /// Base the result was rendered in
    pub target_radix: Radix,

    /// Input numeral string as typed
    pub source_text: String,

    /// Converted numeral string
    pub result_text: String,

    /// Creation timestamp
    pub timestamp: DateTime<Utc>,
}

impl ConversionRecord {
    pub fn new(
        source_radix: Radix,
        target_radix: Radix,
        source_text: String,
        result_text: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            source_radix,
            target_radix,
            source_text,
            result_text,
            timestamp: Utc::now(),
        }
    }
}

impl fmt::Display for ConversionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} (base {}) -> {} (base {})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.source_text,
            self.source_radix,
            self.result_text,
            self.target_radix,
        )
    }
}

/// Append-only, insertion-ordered log of conversion records.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConversionHistory {
    records: Vec<ConversionRecord>,
}

impl ConversionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn push(&mut self, record: ConversionRecord) {
        self.records.push(record);
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record by insertion index.
    pub fn get(&self, index: usize) -> Option<&ConversionRecord> {
        self.records.get(index)
    }

    /// Most recent record.
    pub fn last(&self) -> Option<&ConversionRecord> {
        self.records.last()
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[ConversionRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConversionRecord> {
        self.records.iter()
    }

    /// Remove every record. The only mutation besides append.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl<'a> IntoIterator for &'a ConversionHistory {
    type Item = &'a ConversionRecord;
    type IntoIter = std::slice::Iter<'a, ConversionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
