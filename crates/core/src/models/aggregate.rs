use serde::{Deserialize, Serialize};

/// The seven summary indicators for one selection.
///
/// Sums and the count are truncated to integers; rating means keep their
/// fractional part (rounding is a presentation concern).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Sum of `transaction_value`
    pub transactions_sum: i64,

    /// Sum of `deposited_value`
    pub deposits_sum: i64,

    /// Mean of `rate_agency`
    pub avg_rate_agency: f64,

    /// Mean of `rate_bank`
    pub avg_rate_bank: f64,

    /// Mean of `time_amortization`, truncated to whole months
    pub avg_amortization_time: i64,

    /// Sum of `to_be_paid`
    pub to_be_paid_sum: i64,

    /// Number of records in the group
    pub operations_count: u64,
}

/// Display strings for the seven indicator widgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorStrings {
    pub transactions: String,
    pub deposits: String,
    pub avg_rate_agency: String,
    pub avg_rate_bank: String,
    pub avg_amortization_time: String,
    pub to_be_paid: String,
    pub operations: String,
}
