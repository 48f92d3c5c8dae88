use serde::Serialize;

use crate::errors::CoreError;
use crate::models::dataset::Dataset;
use crate::models::settings::DashboardSettings;
use crate::storage::csv_format;

/// Produces the downloadable files of the dashboard.
pub struct ExportService;

impl ExportService {
    pub fn new() -> Self {
        Self
    }

    /// Every source record of one customer as a spreadsheet (CSV) file.
    ///
    /// Ignores bank/sector/year filters. Uses the loader's own layout, so the
    /// file loads back with the same customer ids and row count.
    pub fn export_customer_csv(
        &self,
        dataset: &Dataset,
        customer_id: &str,
        settings: &DashboardSettings,
    ) -> Result<Vec<u8>, CoreError> {
        let records = dataset.customer_records(customer_id);
        if records.is_empty() {
            return Err(CoreError::CustomerNotFound(customer_id.to_string()));
        }
        log::debug!("export: {} rows for customer {customer_id}", records.len());
        csv_format::write_records(&records, &settings.date_format)
    }

    /// Name of the spreadsheet file for a customer.
    #[must_use]
    pub fn spreadsheet_file_name(customer_id: &str) -> String {
        format!("{customer_id}.csv")
    }

    /// Pretty JSON of any computed view.
    pub fn export_view_json<T: Serialize>(&self, view: &T) -> Result<String, CoreError> {
        serde_json::to_string_pretty(view)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize view to JSON: {e}")))
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new()
    }
}
