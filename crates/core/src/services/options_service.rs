use crate::models::options::{DimensionOptions, DropdownTrigger, DropdownUpdate};
use crate::models::record::TransactionRecord;
use crate::models::selection::{Dimension, DimensionFilter, Selection};
use crate::services::grouping::unique_values;

/// Derives the option lists of the cascading bank/sector/year dropdowns.
///
/// Customer is the outermost selector, then sector, then bank; year is
/// terminal and never triggers a recompute.
pub struct OptionsService;

impl OptionsService {
    pub fn new() -> Self {
        Self
    }

    /// Option lists from the customer's records, optionally restricted to one sector.
    pub fn derive_options(
        &self,
        records: &[TransactionRecord],
        customer_id: &str,
        sector: &DimensionFilter,
    ) -> DimensionOptions {
        let rows: Vec<&TransactionRecord> = records
            .iter()
            .filter(|r| r.customer_id == customer_id && sector.matches(&r.sector_name))
            .collect();

        DimensionOptions {
            banks: Self::with_wildcard(Dimension::Bank, unique_values(rows.iter().copied(), Dimension::Bank)),
            sectors: Self::with_wildcard(
                Dimension::Sector,
                unique_values(rows.iter().copied(), Dimension::Sector),
            ),
            years: Self::with_wildcard(Dimension::Year, unique_values(rows.iter().copied(), Dimension::Year)),
        }
    }

    /// Recompute the dropdowns after `trigger` changed.
    ///
    /// `selection` must already hold the new value of the changed selector.
    /// - Customer: every list recomputed from the customer's records; bank,
    ///   sector and year reset to their wildcards.
    /// - Sector: bank and year lists recomputed from customer (+ sector if
    ///   concrete); bank and year reset; sector left as selected.
    /// - Bank: only the year list recomputed, from customer + sector + bank
    ///   (each if concrete); year reset; bank and sector lists left as is.
    pub fn cascade(
        &self,
        records: &[TransactionRecord],
        trigger: &DropdownTrigger,
        selection: &Selection,
    ) -> DropdownUpdate {
        let update = match trigger {
            DropdownTrigger::Customer => {
                let options =
                    self.derive_options(records, &selection.customer_id, &DimensionFilter::All);
                DropdownUpdate {
                    bank_options: Some(options.banks),
                    sector_options: Some(options.sectors),
                    year_options: Some(options.years),
                    bank_value: Some(Dimension::Bank.wildcard_label().to_string()),
                    sector_value: Some(Dimension::Sector.wildcard_label().to_string()),
                    year_value: Some(Dimension::Year.wildcard_label().to_string()),
                }
            }
            DropdownTrigger::Sector => {
                let options =
                    self.derive_options(records, &selection.customer_id, &selection.sector);
                DropdownUpdate {
                    bank_options: Some(options.banks),
                    sector_options: None,
                    year_options: Some(options.years),
                    bank_value: Some(Dimension::Bank.wildcard_label().to_string()),
                    sector_value: None,
                    year_value: Some(Dimension::Year.wildcard_label().to_string()),
                }
            }
            DropdownTrigger::Bank => {
                let years = unique_values(
                    records.iter().filter(|r| {
                        r.customer_id == selection.customer_id
                            && selection.sector.matches(&r.sector_name)
                            && selection.bank.matches(&r.bank_name)
                    }),
                    Dimension::Year,
                );
                DropdownUpdate {
                    year_options: Some(Self::with_wildcard(Dimension::Year, years)),
                    year_value: Some(Dimension::Year.wildcard_label().to_string()),
                    ..DropdownUpdate::default()
                }
            }
        };

        log::debug!(
            "dropdowns: {trigger} changed for customer {}",
            selection.customer_id
        );

        update
    }

    /// Prepend the dimension's "All X" sentinel.
    fn with_wildcard(dimension: Dimension, values: Vec<String>) -> Vec<String> {
        let mut list = Vec::with_capacity(values.len() + 1);
        list.push(dimension.wildcard_label().to_string());
        list.extend(values);
        list
    }
}

impl Default for OptionsService {
    fn default() -> Self {
        Self::new()
    }
}
