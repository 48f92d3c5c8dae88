use crate::errors::CoreError;
use crate::models::aggregate::AggregateResult;
use crate::models::record::TransactionRecord;
use crate::models::selection::{Dimension, Selection};
use crate::services::grouping::group_by;

/// Computes the seven summary indicators for a selection.
///
/// Every combination of wildcard/concrete dimensions goes through the same
/// path: group the customer's records by the concrete dimensions (canonical
/// order bank, sector, year), then pick the group whose key equals the
/// selected values. With no concrete dimension the whole customer set is
/// one group.
///
/// Per metric: sum of transaction, deposited and to-be-paid values; mean of
/// both ratings and of the amortization time; count of records.
pub struct AggregationService;

impl AggregationService {
    pub fn new() -> Self {
        Self
    }

    /// Aggregate the customer's records for `selection`.
    ///
    /// `customer_records` should hold the customer's full record set (any rows
    /// of other customers are ignored). A selection whose group has no rows is
    /// reported as `CoreError::NoDataForSelection`, never as zeros.
    pub fn compute_aggregates(
        &self,
        customer_records: &[TransactionRecord],
        selection: &Selection,
    ) -> Result<AggregateResult, CoreError> {
        let key = selection.grouping_key();
        let dimensions: Vec<Dimension> = key.iter().map(|(dim, _)| *dim).collect();
        let values: Vec<&str> = key.iter().map(|(_, v)| *v).collect();

        let groups = group_by(
            customer_records
                .iter()
                .filter(|r| r.customer_id == selection.customer_id),
            &dimensions,
        );

        let group = groups.iter().find(|g| g.has_key(&values)).ok_or_else(|| {
            log::warn!(
                "aggregation: no group for customer {} with key {:?}",
                selection.customer_id,
                key
            );
            Self::lookup_miss(selection)
        })?;

        let mut totals = Totals::default();
        for record in &group.rows {
            totals.add(record);
        }

        log::debug!(
            "aggregation: customer {} grouped by {:?} -> {} groups, {} rows selected",
            selection.customer_id,
            dimensions,
            groups.len(),
            totals.count
        );

        totals
            .finish()
            .ok_or_else(|| Self::lookup_miss(selection))
    }

    fn lookup_miss(selection: &Selection) -> CoreError {
        CoreError::NoDataForSelection {
            customer_id: selection.customer_id.clone(),
            bank: selection.bank.label(Dimension::Bank),
            sector: selection.sector.label(Dimension::Sector),
            year: selection.year.label(Dimension::Year),
        }
    }
}

impl Default for AggregationService {
    fn default() -> Self {
        Self::new()
    }
}

/// Running sums over one group.
#[derive(Debug, Default)]
struct Totals {
    transactions: f64,
    deposits: f64,
    to_be_paid: f64,
    rate_agency: f64,
    rate_bank: f64,
    amortization: f64,
    count: u64,
}

impl Totals {
    fn add(&mut self, record: &TransactionRecord) {
        self.transactions += record.transaction_value;
        self.deposits += record.deposited_value;
        self.to_be_paid += record.to_be_paid;
        self.rate_agency += record.rate_agency;
        self.rate_bank += record.rate_bank;
        self.amortization += record.time_amortization;
        self.count += 1;
    }

    /// Sums and the amortization mean are truncated toward zero; rating means
    /// keep full precision. `None` for an empty group (means are undefined).
    fn finish(self) -> Option<AggregateResult> {
        if self.count == 0 {
            return None;
        }
        let n = self.count as f64;
        Some(AggregateResult {
            transactions_sum: self.transactions.trunc() as i64,
            deposits_sum: self.deposits.trunc() as i64,
            avg_rate_agency: self.rate_agency / n,
            avg_rate_bank: self.rate_bank / n,
            avg_amortization_time: (self.amortization / n).trunc() as i64,
            to_be_paid_sum: self.to_be_paid.trunc() as i64,
            operations_count: self.count,
        })
    }
}
