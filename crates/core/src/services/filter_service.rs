use crate::models::record::TransactionRecord;
use crate::models::selection::{Dimension, Selection};

/// Restricts the dataset to the rows matching a selection.
///
/// Pure business logic with no I/O and no state.
pub struct FilterService;

impl FilterService {
    pub fn new() -> Self {
        Self
    }

    /// Rows of `selection.customer_id` matching every concrete dimension.
    ///
    /// Wildcard dimensions don't restrict. The result keeps source order and
    /// is an owned copy: callers may mutate it freely without touching the
    /// dataset or other views. No match yields an empty Vec, never an error.
    pub fn filter_records(
        &self,
        records: &[TransactionRecord],
        selection: &Selection,
    ) -> Vec<TransactionRecord> {
        let subset: Vec<TransactionRecord> = records
            .iter()
            .filter(|r| Self::matches(r, selection))
            .cloned()
            .collect();

        log::debug!(
            "filter: customer={} bank={} sector={} year={} -> {} rows",
            selection.customer_id,
            selection.bank.label(Dimension::Bank),
            selection.sector.label(Dimension::Sector),
            selection.year.label(Dimension::Year),
            subset.len()
        );

        subset
    }

    /// Whether a record belongs to the selection.
    #[must_use]
    pub fn matches(record: &TransactionRecord, selection: &Selection) -> bool {
        record.customer_id == selection.customer_id
            && Dimension::CANONICAL
                .iter()
                .all(|&dim| selection.filter(dim).matches(&record.dimension_value(dim)))
    }
}

impl Default for FilterService {
    fn default() -> Self {
        Self::new()
    }
}
