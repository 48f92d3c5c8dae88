use std::collections::HashSet;
use std::sync::Arc;

use crate::errors::CoreError;

use super::record::TransactionRecord;

/// The full, read-only table of transaction records.
///
/// Loaded once per process and shared between sessions. Cloning is cheap:
/// rows live behind an `Arc` and are never mutated after construction.
/// Every accessor that hands rows to callers returns an owned copy.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Arc<[TransactionRecord]>,
}

impl Dataset {
    pub fn new(records: Vec<TransactionRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// All records in source order (borrowed, read-only).
    #[must_use]
    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Unique customer ids in first-occurrence order.
    #[must_use]
    pub fn customer_ids(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|r| seen.insert(r.customer_id.as_str()))
            .map(|r| r.customer_id.clone())
            .collect()
    }

    #[must_use]
    pub fn has_customer(&self, customer_id: &str) -> bool {
        self.records.iter().any(|r| r.customer_id == customer_id)
    }

    /// Owned copy of every record of one customer, in source order.
    #[must_use]
    pub fn customer_records(&self, customer_id: &str) -> Vec<TransactionRecord> {
        self.records
            .iter()
            .filter(|r| r.customer_id == customer_id)
            .cloned()
            .collect()
    }

    /// Display name of a customer, taken from their first record.
    pub fn customer_name(&self, customer_id: &str) -> Result<String, CoreError> {
        self.records
            .iter()
            .find(|r| r.customer_id == customer_id)
            .map(|r| r.customer_name.clone())
            .ok_or_else(|| CoreError::CustomerNotFound(customer_id.to_string()))
    }
}

impl From<Vec<TransactionRecord>> for Dataset {
    fn from(records: Vec<TransactionRecord>) -> Self {
        Self::new(records)
    }
}
