use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::aggregate::{AggregateResult, IndicatorStrings};
use super::chart::{Resolution, StackedBarChart, TimeSeries};
use super::options::{DimensionOptions, DropdownUpdate};
use super::selection::{Dimension, DimensionFilter, Selection};
use super::table::TableRow;

/// Per-session filter state: the selection plus the dropdown lists on screen.
///
/// Owned by whoever serves the session; the dataset itself stays shared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSession {
    pub selection: Selection,
    pub options: DimensionOptions,

    /// Bucket width of the values-over-time chart
    #[serde(default)]
    pub resolution: Resolution,
}

impl DashboardSession {
    /// Apply a dropdown update: replace every `Some` list and value, keep the rest.
    pub fn apply_update(&mut self, update: &DropdownUpdate) {
        if let Some(banks) = &update.bank_options {
            self.options.banks = banks.clone();
        }
        if let Some(sectors) = &update.sector_options {
            self.options.sectors = sectors.clone();
        }
        if let Some(years) = &update.year_options {
            self.options.years = years.clone();
        }
        if let Some(bank) = &update.bank_value {
            self.selection.bank = DimensionFilter::from_label(Dimension::Bank, bank);
        }
        if let Some(sector) = &update.sector_value {
            self.selection.sector = DimensionFilter::from_label(Dimension::Sector, sector);
        }
        if let Some(year) = &update.year_value {
            self.selection.year = DimensionFilter::from_label(Dimension::Year, year);
        }
    }
}

/// Aggregates plus their display strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indicators {
    pub values: AggregateResult,
    pub display: IndicatorStrings,
}

/// Everything the dashboard renders after one filter-apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub selection: Selection,

    pub customer_name: String,

    pub table: Vec<TableRow>,

    pub operations_chart: StackedBarChart,

    pub values_chart: TimeSeries,

    pub histogram: Vec<NaiveDate>,

    /// `None` when the selection has no matching group; the widgets show a
    /// blank state instead of zeros.
    pub indicators: Option<Indicators>,
}
