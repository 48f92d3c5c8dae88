use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::errors::CoreError;
use crate::models::chart::{
    BankSeries, Resolution, SectorBar, StackedBarChart, TimeSeries, TimeSeriesPoint,
};
use crate::models::record::TransactionRecord;
use crate::models::selection::Dimension;
use crate::services::grouping::group_by;

/// Generates chart-ready data sets from a filtered subset.
///
/// The core computes all the numbers; the frontend only renders.
/// Every function takes the subset produced by the filter engine.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Operation counts per sector, one stacked series per bank.
    ///
    /// Banks and sectors come in first-occurrence order, then each bank's
    /// bars are sorted largest count first (ties keep that order).
    pub fn operations_by_bank_and_sector(&self, subset: &[TransactionRecord]) -> StackedBarChart {
        let series: Vec<BankSeries> = group_by(subset, &[Dimension::Bank])
            .into_iter()
            .map(|bank_group| {
                let mut bars: Vec<SectorBar> = group_by(bank_group.rows.iter().copied(), &[Dimension::Sector])
                    .into_iter()
                    .map(|g| SectorBar {
                        sector: g.key.concat(),
                        count: g.rows.len() as u64,
                    })
                    .collect();
                bars.sort_by(|a, b| b.count.cmp(&a.count));
                BankSeries {
                    bank: bank_group.key.concat(),
                    bars,
                }
            })
            .collect();

        let y_max = group_by(subset, &[Dimension::Sector])
            .iter()
            .map(|g| g.rows.len() as u64)
            .max()
            .unwrap_or(0);

        StackedBarChart { series, y_max }
    }

    /// Transaction and deposit sums per period.
    ///
    /// Periods are contiguous from the earliest to the latest record, labelled
    /// by their last day, and zero-filled when empty. Each period's sums are
    /// truncated to integers.
    pub fn values_over_time(
        &self,
        subset: &[TransactionRecord],
        resolution: Resolution,
    ) -> Result<TimeSeries, CoreError> {
        let (Some(first), Some(last)) = (
            subset.iter().map(|r| r.approval_date).min(),
            subset.iter().map(|r| r.approval_date).max(),
        ) else {
            return Ok(TimeSeries {
                resolution,
                points: Vec::new(),
            });
        };

        let bucketing = Bucketing::new(resolution, first);

        let mut sums: BTreeMap<i64, (f64, f64)> = BTreeMap::new();
        for record in subset {
            let entry = sums
                .entry(bucketing.bucket_of(record.approval_date))
                .or_insert((0.0, 0.0));
            entry.0 += record.transaction_value;
            entry.1 += record.deposited_value;
        }

        let first_bucket = bucketing.bucket_of(first);
        let last_bucket = bucketing.bucket_of(last);

        let mut points = Vec::new();
        for bucket in first_bucket..=last_bucket {
            let period_end = bucketing.period_end(bucket).ok_or_else(|| {
                CoreError::ValidationError(format!("Period {bucket} is outside the calendar range"))
            })?;
            let (transactions, deposits) = sums.get(&bucket).copied().unwrap_or((0.0, 0.0));
            points.push(TimeSeriesPoint {
                period_end,
                transactions: transactions.trunc() as i64,
                deposits: deposits.trunc() as i64,
            });
        }

        Ok(TimeSeries { resolution, points })
    }

    /// Approval dates of the subset, in subset order (histogram input).
    pub fn operations_histogram(&self, subset: &[TransactionRecord]) -> Vec<NaiveDate> {
        subset.iter().map(|r| r.approval_date).collect()
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps dates to integer period indices for one resolution.
///
/// Monthly and yearly periods are calendar-aligned. Quarterly periods are
/// 3-month windows anchored at the month of the earliest date.
struct Bucketing {
    resolution: Resolution,
    anchor_month: i64,
}

impl Bucketing {
    fn new(resolution: Resolution, earliest: NaiveDate) -> Self {
        Self {
            resolution,
            anchor_month: month_index(earliest),
        }
    }

    fn bucket_of(&self, date: NaiveDate) -> i64 {
        match self.resolution {
            Resolution::Yearly => i64::from(date.year()),
            Resolution::Quarterly => (month_index(date) - self.anchor_month).div_euclid(3),
            Resolution::Monthly => month_index(date),
            Resolution::Daily => i64::from(date.num_days_from_ce()),
        }
    }

    fn period_end(&self, bucket: i64) -> Option<NaiveDate> {
        match self.resolution {
            Resolution::Yearly => NaiveDate::from_ymd_opt(i32::try_from(bucket).ok()?, 12, 31),
            Resolution::Quarterly => month_end(self.anchor_month + bucket * 3 + 2),
            Resolution::Monthly => month_end(bucket),
            Resolution::Daily => NaiveDate::from_num_days_from_ce_opt(i32::try_from(bucket).ok()?),
        }
    }
}

/// Months since year 0 (January of year 0 = 0).
fn month_index(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

/// Last day of the month with the given index.
fn month_end(month_index: i64) -> Option<NaiveDate> {
    let next = month_index + 1;
    let year = i32::try_from(next.div_euclid(12)).ok()?;
    let month = u32::try_from(next.rem_euclid(12)).ok()? + 1;
    NaiveDate::from_ymd_opt(year, month, 1)?.pred_opt()
}
