pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use models::{
    aggregate::AggregateResult,
    chart::{Resolution, TimeSeries},
    dataset::Dataset,
    options::{DimensionOptions, DropdownTrigger, DropdownUpdate},
    record::TransactionRecord,
    report::CustomerReport,
    selection::{Dimension, DimensionFilter, Selection},
    session::{DashboardSession, DashboardView, Indicators},
    settings::DashboardSettings,
};
use services::{
    aggregation_service::AggregationService, chart_service::ChartService,
    export_service::ExportService, filter_service::FilterService,
    options_service::OptionsService, report_service::ReportService,
    table_service::TableService,
};
use storage::loader::DatasetLoader;

use errors::CoreError;

/// Main entry point for the bank dashboard core library.
///
/// Holds the shared read-only dataset, the settings and the stateless
/// engines. Per-user filter state lives in `DashboardSession`, which callers
/// own and pass in, so one `BankDashboard` can serve any number of sessions.
#[must_use]
pub struct BankDashboard {
    dataset: Dataset,
    settings: DashboardSettings,
    filter_service: FilterService,
    options_service: OptionsService,
    aggregation_service: AggregationService,
    chart_service: ChartService,
    table_service: TableService,
    report_service: ReportService,
    export_service: ExportService,
}

impl std::fmt::Debug for BankDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BankDashboard")
            .field("records", &self.dataset.len())
            .field("settings", &self.settings)
            .finish()
    }
}

impl Clone for BankDashboard {
    fn clone(&self) -> Self {
        Self::build(self.dataset.clone(), self.settings.clone())
    }
}

impl BankDashboard {
    /// Wrap an already loaded dataset.
    pub fn new(dataset: Dataset, settings: DashboardSettings) -> Result<Self, CoreError> {
        settings.validate()?;
        Ok(Self::build(dataset, settings))
    }

    /// Load the dataset from CSV bytes.
    /// Use this when the host handles file I/O.
    pub fn load_from_bytes(data: &[u8], settings: DashboardSettings) -> Result<Self, CoreError> {
        settings.validate()?;
        let dataset = DatasetLoader::load_from_bytes(data, &settings)?;
        Ok(Self::build(dataset, settings))
    }

    /// Load the dataset from a CSV file on disk (native only, not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &str, settings: DashboardSettings) -> Result<Self, CoreError> {
        settings.validate()?;
        let dataset = DatasetLoader::load_from_file(path, &settings)?;
        Ok(Self::build(dataset, settings))
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    /// Options of the customer dropdown, in dataset order.
    #[must_use]
    pub fn customer_ids(&self) -> Vec<String> {
        self.dataset.customer_ids()
    }

    // ── Sessions & Dropdowns ────────────────────────────────────────

    /// Start a session on the configured initial customer (or the first one
    /// in the dataset), with every dimension on its wildcard and the chart on
    /// the configured default resolution.
    pub fn start_session(&self) -> Result<DashboardSession, CoreError> {
        let customer_id = match &self.settings.initial_customer {
            Some(id) => {
                self.ensure_customer(id)?;
                id.clone()
            }
            None => self
                .dataset
                .customer_ids()
                .into_iter()
                .next()
                .ok_or_else(|| CoreError::ValidationError("Dataset has no records".into()))?,
        };

        let options = self.derive_options(&customer_id, &DimensionFilter::All);
        Ok(DashboardSession {
            selection: Selection::for_customer(customer_id),
            options,
            resolution: self.settings.default_resolution,
        })
    }

    /// Option lists for a customer, optionally restricted to one sector.
    #[must_use]
    pub fn derive_options(&self, customer_id: &str, sector: &DimensionFilter) -> DimensionOptions {
        self.options_service
            .derive_options(self.dataset.records(), customer_id, sector)
    }

    /// Customer selector changed: every list is recomputed and bank, sector
    /// and year go back to their wildcards.
    pub fn change_customer(
        &self,
        session: &mut DashboardSession,
        customer_id: &str,
    ) -> Result<DropdownUpdate, CoreError> {
        self.ensure_customer(customer_id)?;
        session.selection.customer_id = customer_id.to_string();
        Ok(self.cascade(session, DropdownTrigger::Customer))
    }

    /// Sector selector changed (label may be the "All Sectors" sentinel).
    pub fn change_sector(&self, session: &mut DashboardSession, sector: &str) -> DropdownUpdate {
        session.selection.sector = DimensionFilter::from_label(Dimension::Sector, sector);
        self.cascade(session, DropdownTrigger::Sector)
    }

    /// Bank selector changed (label may be the "All Banks" sentinel).
    pub fn change_bank(&self, session: &mut DashboardSession, bank: &str) -> DropdownUpdate {
        session.selection.bank = DimensionFilter::from_label(Dimension::Bank, bank);
        self.cascade(session, DropdownTrigger::Bank)
    }

    /// Year selector changed. Year is the innermost dropdown: nothing is recomputed.
    pub fn change_year(&self, session: &mut DashboardSession, year: &str) {
        session.selection.year = DimensionFilter::from_label(Dimension::Year, year);
    }

    // ── Filtering & Aggregation ─────────────────────────────────────

    /// Rows matching a selection, as an owned copy in dataset order.
    #[must_use]
    pub fn filter_records(&self, selection: &Selection) -> Vec<TransactionRecord> {
        self.filter_service
            .filter_records(self.dataset.records(), selection)
    }

    /// The seven summary metrics for a selection.
    pub fn aggregates(&self, selection: &Selection) -> Result<AggregateResult, CoreError> {
        self.aggregation_service
            .compute_aggregates(self.dataset.records(), selection)
    }

    /// Run one filter pass and one aggregation pass for the session's selection.
    ///
    /// A selection without a matching group still yields a view (empty table,
    /// empty charts) with `indicators: None`.
    pub fn apply(&self, session: &DashboardSession) -> Result<DashboardView, CoreError> {
        let selection = &session.selection;
        let customer_name = self.dataset.customer_name(&selection.customer_id)?;
        let subset = self.filter_records(selection);

        let indicators = match self.aggregates(selection) {
            Ok(values) => Some(Indicators {
                display: self.report_service.format_indicators(&values, &self.settings),
                values,
            }),
            Err(CoreError::NoDataForSelection { .. }) => None,
            Err(e) => return Err(e),
        };

        Ok(DashboardView {
            selection: selection.clone(),
            customer_name,
            table: self.table_service.table_rows(&subset),
            operations_chart: self.chart_service.operations_by_bank_and_sector(&subset),
            values_chart: self.chart_service.values_over_time(&subset, session.resolution)?,
            histogram: self.chart_service.operations_histogram(&subset),
            indicators,
        })
    }

    /// The values-over-time chart of the session's selection at its resolution.
    pub fn values_chart(&self, session: &DashboardSession) -> Result<TimeSeries, CoreError> {
        let subset = self.filter_records(&session.selection);
        self.chart_service.values_over_time(&subset, session.resolution)
    }

    /// Resolution menu changed ("Sum Yearly", "Sum Monthly", ...): only the
    /// values-over-time chart is recomputed.
    pub fn change_resolution(
        &self,
        session: &mut DashboardSession,
        label: &str,
    ) -> Result<TimeSeries, CoreError> {
        session.resolution = Resolution::from_label(label);
        self.values_chart(session)
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Fixed-layout report of the session's current selection.
    /// Fails with `NoDataForSelection` when there is nothing to report.
    pub fn customer_report(&self, session: &DashboardSession) -> Result<CustomerReport, CoreError> {
        let selection = &session.selection;
        let customer_name = self.dataset.customer_name(&selection.customer_id)?;
        let aggregate = self.aggregates(selection)?;
        let indicators = self.report_service.format_indicators(&aggregate, &self.settings);
        let rows = self.table_service.table_rows(&self.filter_records(selection));

        Ok(self.report_service.build_customer_report(
            &customer_name,
            &selection.customer_id,
            &indicators,
            &rows,
        ))
    }

    /// Spreadsheet (CSV) of every record of the session's customer.
    pub fn customer_spreadsheet(&self, session: &DashboardSession) -> Result<Vec<u8>, CoreError> {
        self.export_service.export_customer_csv(
            &self.dataset,
            &session.selection.customer_id,
            &self.settings,
        )
    }

    /// JSON snapshot of a computed view.
    pub fn view_to_json(&self, view: &DashboardView) -> Result<String, CoreError> {
        self.export_service.export_view_json(view)
    }

    // ── Internal ────────────────────────────────────────────────────

    fn cascade(&self, session: &mut DashboardSession, trigger: DropdownTrigger) -> DropdownUpdate {
        let update = self
            .options_service
            .cascade(self.dataset.records(), &trigger, &session.selection);
        session.apply_update(&update);
        update
    }

    fn ensure_customer(&self, customer_id: &str) -> Result<(), CoreError> {
        if self.dataset.has_customer(customer_id) {
            Ok(())
        } else {
            Err(CoreError::CustomerNotFound(customer_id.to_string()))
        }
    }

    fn build(dataset: Dataset, settings: DashboardSettings) -> Self {
        Self {
            dataset,
            settings,
            filter_service: FilterService::new(),
            options_service: OptionsService::new(),
            aggregation_service: AggregationService::new(),
            chart_service: ChartService::new(),
            table_service: TableService::new(),
            report_service: ReportService::new(),
            export_service: ExportService::new(),
        }
    }
}
