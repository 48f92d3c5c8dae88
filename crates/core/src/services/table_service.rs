use crate::models::record::TransactionRecord;
use crate::models::table::TableRow;

/// Projects a filtered subset onto the customer data table columns.
pub struct TableService;

impl TableService {
    pub fn new() -> Self {
        Self
    }

    /// One row per record, dates cast to ISO text (`YYYY-MM-DD`).
    /// Reads the subset only; the records themselves are left untouched.
    pub fn table_rows(&self, subset: &[TransactionRecord]) -> Vec<TableRow> {
        subset
            .iter()
            .map(|r| TableRow {
                id: r.id,
                approval_date: r.approval_date.format("%Y-%m-%d").to_string(),
                transaction_value: r.transaction_value,
                deposited_value: r.deposited_value,
                sector_name: r.sector_name.clone(),
                bank_name: r.bank_name.clone(),
            })
            .collect()
    }
}

impl Default for TableService {
    fn default() -> Self {
        Self::new()
    }
}
