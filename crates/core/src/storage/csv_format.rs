use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::models::record::TransactionRecord;

/// Column names required in the source table.
pub const REQUIRED_COLUMNS: [&str; 12] = [
    "ide",
    "bank_name",
    "customer_id",
    "customer_name",
    "transaction_value",
    "deposited_value",
    "to_be_paid",
    "approval_date",
    "sector_name4",
    "rate_JUCAS",
    "rate_bank",
    "time_amortization",
];

/// One row as it appears in the source table. Extra columns are ignored.
#[derive(Debug, Serialize, Deserialize)]
struct SourceRow {
    ide: u64,
    bank_name: String,
    customer_id: String,
    customer_name: String,
    transaction_value: f64,
    deposited_value: f64,
    to_be_paid: f64,
    approval_date: String,
    sector_name4: String,
    #[serde(rename = "rate_JUCAS")]
    rate_jucas: f64,
    rate_bank: f64,
    time_amortization: f64,
}

impl SourceRow {
    fn into_record(self, row: usize, date_format: &str) -> Result<TransactionRecord, CoreError> {
        let approval_date = NaiveDate::parse_from_str(self.approval_date.trim(), date_format)
            .map_err(|e| CoreError::InvalidRecord {
                row,
                message: format!(
                    "approval_date '{}' does not match format '{date_format}': {e}",
                    self.approval_date
                ),
            })?;

        for (column, value) in [
            ("transaction_value", self.transaction_value),
            ("deposited_value", self.deposited_value),
            ("to_be_paid", self.to_be_paid),
            ("rate_JUCAS", self.rate_jucas),
            ("rate_bank", self.rate_bank),
            ("time_amortization", self.time_amortization),
        ] {
            if !value.is_finite() {
                return Err(CoreError::InvalidRecord {
                    row,
                    message: format!("{column} must be a finite number, got {value}"),
                });
            }
        }

        Ok(TransactionRecord {
            id: self.ide,
            customer_id: self.customer_id,
            customer_name: self.customer_name,
            bank_name: self.bank_name,
            sector_name: self.sector_name4,
            approval_date,
            transaction_value: self.transaction_value,
            deposited_value: self.deposited_value,
            to_be_paid: self.to_be_paid,
            rate_agency: self.rate_jucas,
            rate_bank: self.rate_bank,
            time_amortization: self.time_amortization,
        })
    }

    fn from_record(record: &TransactionRecord, date_format: &str) -> Self {
        Self {
            ide: record.id,
            bank_name: record.bank_name.clone(),
            customer_id: record.customer_id.clone(),
            customer_name: record.customer_name.clone(),
            transaction_value: record.transaction_value,
            deposited_value: record.deposited_value,
            to_be_paid: record.to_be_paid,
            approval_date: record.approval_date.format(date_format).to_string(),
            sector_name4: record.sector_name.clone(),
            rate_jucas: record.rate_agency,
            rate_bank: record.rate_bank,
            time_amortization: record.time_amortization,
        }
    }
}

/// Decode CSV bytes into records, in file order.
///
/// Fails on the first malformed row; `row` in the error is 1-based and
/// doesn't count the header.
pub fn read_records(data: &[u8], date_format: &str) -> Result<Vec<TransactionRecord>, CoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(data);

    let headers = reader.headers()?.clone();
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .collect();
    if !missing.is_empty() {
        return Err(CoreError::InvalidFileFormat(format!(
            "Missing required columns: {}",
            missing.join(", ")
        )));
    }

    let mut records = Vec::new();
    for (i, row) in reader.deserialize::<SourceRow>().enumerate() {
        let row_number = i + 1;
        let source = row.map_err(|e| CoreError::InvalidRecord {
            row: row_number,
            message: e.to_string(),
        })?;
        records.push(source.into_record(row_number, date_format)?);
    }

    Ok(records)
}

/// Encode records as CSV bytes, in the same layout `read_records` accepts.
pub fn write_records(records: &[TransactionRecord], date_format: &str) -> Result<Vec<u8>, CoreError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if records.is_empty() {
        writer.write_record(REQUIRED_COLUMNS)?;
    }
    for record in records {
        writer.serialize(SourceRow::from_record(record, date_format))?;
    }
    writer
        .into_inner()
        .map_err(|e| CoreError::Serialization(format!("Failed to flush CSV writer: {e}")))
}
