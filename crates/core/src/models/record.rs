use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::selection::Dimension;

/// One operation/transaction belonging to a bank customer.
///
/// The year is never stored: `year()` derives it from `approval_date`
/// so the two can't disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Row identifier, unique per record
    pub id: u64,

    /// Customer identity (always text, even if the source column is numeric)
    pub customer_id: String,

    pub customer_name: String,

    pub bank_name: String,

    pub sector_name: String,

    /// Date the operation was approved (daily granularity)
    pub approval_date: NaiveDate,

    pub transaction_value: f64,

    pub deposited_value: f64,

    pub to_be_paid: f64,

    /// Rating given by the rating agency
    pub rate_agency: f64,

    /// Rating given by the bank
    pub rate_bank: f64,

    /// Amortization time in months
    pub time_amortization: f64,
}

impl TransactionRecord {
    /// Year of `approval_date`, as the text label used for grouping and dropdowns.
    #[must_use]
    pub fn year(&self) -> String {
        self.approval_date.year().to_string()
    }

    /// Value of this record for a filterable dimension.
    #[must_use]
    pub fn dimension_value(&self, dimension: Dimension) -> std::borrow::Cow<'_, str> {
        match dimension {
            Dimension::Bank => self.bank_name.as_str().into(),
            Dimension::Sector => self.sector_name.as_str().into(),
            Dimension::Year => self.year().into(),
        }
    }
}
