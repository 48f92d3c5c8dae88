use crate::models::aggregate::{AggregateResult, IndicatorStrings};
use crate::models::report::CustomerReport;
use crate::models::settings::DashboardSettings;
use crate::models::table::{TableRow, TABLE_COLUMNS};

/// Turns raw aggregates into display strings and the fixed report layout.
///
/// This is the only place rating averages get rounded.
pub struct ReportService;

impl ReportService {
    pub fn new() -> Self {
        Self
    }

    /// Display strings of the seven indicator widgets.
    ///
    /// Sums get thousands separators and the currency suffix, ratings are
    /// rounded to `rating_decimals`, amortization carries its unit.
    pub fn format_indicators(
        &self,
        aggregate: &AggregateResult,
        settings: &DashboardSettings,
    ) -> IndicatorStrings {
        let money = |value: i64| format!("{} {}", group_thousands(value), settings.currency_suffix);
        let rating = |value: f64| format!("{:.*}", usize::from(settings.rating_decimals), value);

        IndicatorStrings {
            transactions: money(aggregate.transactions_sum),
            deposits: money(aggregate.deposits_sum),
            avg_rate_agency: rating(aggregate.avg_rate_agency),
            avg_rate_bank: rating(aggregate.avg_rate_bank),
            avg_amortization_time: format!(
                "{} {}",
                aggregate.avg_amortization_time, settings.amortization_unit
            ),
            to_be_paid: money(aggregate.to_be_paid_sum),
            operations: aggregate.operations_count.to_string(),
        }
    }

    /// Assemble the customer report from already formatted indicators.
    pub fn build_customer_report(
        &self,
        customer_name: &str,
        customer_id: &str,
        indicators: &IndicatorStrings,
        rows: &[TableRow],
    ) -> CustomerReport {
        CustomerReport {
            customer_id: customer_id.to_string(),
            title: format!("Customer Name: {customer_name}  -  Customer ID: {customer_id}"),
            summary_lines: vec![
                format!(
                    "Transactions Sum: {}  -  Deposits Sum: {}  -  Avg Agency Rating: {}  -  Avg Bank Rating: {}",
                    indicators.transactions,
                    indicators.deposits,
                    indicators.avg_rate_agency,
                    indicators.avg_rate_bank
                ),
                format!(
                    "Avg Amortization Time: {}  -  To be Paid Sum: {}  -  Operations Count: {}",
                    indicators.avg_amortization_time, indicators.to_be_paid, indicators.operations
                ),
            ],
            header: TABLE_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: rows.iter().map(TableRow::cells).collect(),
        }
    }
}

impl Default for ReportService {
    fn default() -> Self {
        Self::new()
    }
}

/// `1234567` -> `"1,234,567"`.
fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
