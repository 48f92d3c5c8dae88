use std::collections::HashSet;

use crate::errors::CoreError;
use crate::models::dataset::Dataset;
use crate::models::settings::DashboardSettings;

use super::csv_format;

/// Loads the source table into an immutable `Dataset`.
///
/// Flow: CSV bytes → rows → type checks (dates, numbers, unique ids) → Dataset.
/// Malformed rows are rejected here so the engines can assume valid records.
pub struct DatasetLoader;

impl DatasetLoader {
    /// Decode a dataset from raw CSV bytes.
    pub fn load_from_bytes(data: &[u8], settings: &DashboardSettings) -> Result<Dataset, CoreError> {
        let records = csv_format::read_records(data, &settings.date_format)?;

        let mut seen = HashSet::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            if !seen.insert(record.id) {
                log::warn!("loader: duplicate row id {} at row {}", record.id, i + 1);
                return Err(CoreError::InvalidRecord {
                    row: i + 1,
                    message: format!("duplicate ide {}", record.id),
                });
            }
        }

        let dataset = Dataset::new(records);
        log::info!(
            "loader: loaded {} records for {} customers",
            dataset.len(),
            dataset.customer_ids().len()
        );
        Ok(dataset)
    }

    /// Load a dataset from a CSV file on disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &str, settings: &DashboardSettings) -> Result<Dataset, CoreError> {
        let bytes = std::fs::read(path)?;
        Self::load_from_bytes(&bytes, settings)
    }
}
