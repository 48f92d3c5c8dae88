use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

use super::chart::Resolution;

/// Largest accepted `rating_decimals`.
const MAX_RATING_DECIMALS: u8 = 6;

/// Dashboard configuration. Every field falls back to its default when
/// missing from the JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Suffix appended to monetary indicators (e.g., "R$").
    pub currency_suffix: String,

    /// Suffix appended to the amortization indicator.
    pub amortization_unit: String,

    /// Decimal places shown for rating averages. Applied at display/export time only.
    pub rating_decimals: u8,

    /// Initial bucket width of the values-over-time chart.
    pub default_resolution: Resolution,

    /// Customer shown when a session starts. `None` = first customer in the dataset.
    pub initial_customer: Option<String>,

    /// chrono format string of `approval_date` in the source table.
    pub date_format: String,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            currency_suffix: "R$".to_string(),
            amortization_unit: "Months".to_string(),
            rating_decimals: 1,
            default_resolution: Resolution::Monthly,
            initial_customer: None,
            date_format: "%d/%m/%Y".to_string(),
        }
    }
}

impl DashboardSettings {
    /// Parse and validate settings from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: DashboardSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize settings: {e}")))
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.rating_decimals > MAX_RATING_DECIMALS {
            return Err(CoreError::ValidationError(format!(
                "rating_decimals must be at most {MAX_RATING_DECIMALS}, got {}",
                self.rating_decimals
            )));
        }
        if self.date_format.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "date_format must not be empty".into(),
            ));
        }
        Ok(())
    }
}
