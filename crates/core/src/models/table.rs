use serde::{Deserialize, Serialize};

/// Column headers of the customer data table (and the report table).
pub const TABLE_COLUMNS: [&str; 6] = [
    "ide",
    "approval_date",
    "transaction_value",
    "deposited_value",
    "sector_name4",
    "bank_name",
];

/// One row of the customer data table, with the date already cast to text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub id: u64,
    pub approval_date: String,
    pub transaction_value: f64,
    pub deposited_value: f64,
    pub sector_name: String,
    pub bank_name: String,
}

impl TableRow {
    /// Cell texts in `TABLE_COLUMNS` order.
    #[must_use]
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.approval_date.clone(),
            self.transaction_value.to_string(),
            self.deposited_value.to_string(),
            self.sector_name.clone(),
            self.bank_name.clone(),
        ]
    }
}
