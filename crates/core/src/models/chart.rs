use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Operation counts per sector, stacked by bank.
///
/// The core computes all the numbers; the frontend only renders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedBarChart {
    /// One series per bank, in first-occurrence order
    pub series: Vec<BankSeries>,

    /// Tallest stack: the largest per-sector total across all banks
    pub y_max: u64,
}

/// The bars contributed by one bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankSeries {
    pub bank: String,

    /// Sector bars, largest count first
    pub bars: Vec<SectorBar>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorBar {
    pub sector: String,
    pub count: u64,
}

/// Bucket width for the values-over-time chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Resolution {
    Yearly,
    Quarterly,
    #[default]
    Monthly,
    Daily,
}

impl Resolution {
    /// Parse the resolution menu label ("Sum Yearly", "Sum Monthly", …).
    /// Unknown labels fall back to monthly, like the menu's default.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Sum Yearly" => Resolution::Yearly,
            "Sum Quarterly" => Resolution::Quarterly,
            "Sum Daily" => Resolution::Daily,
            _ => Resolution::Monthly,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Resolution::Yearly => "Sum Yearly",
            Resolution::Quarterly => "Sum Quarterly",
            Resolution::Monthly => "Sum Monthly",
            Resolution::Daily => "Sum Daily",
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Transaction and deposit sums per period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub resolution: Resolution,

    /// Contiguous periods, oldest first; empty periods carry zeros
    pub points: Vec<TimeSeriesPoint>,
}

impl TimeSeries {
    /// A single period can't be drawn as a line; render markers instead.
    #[must_use]
    pub fn is_single_point(&self) -> bool {
        self.points.len() == 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// Last day of the period (used as its label)
    pub period_end: NaiveDate,

    pub transactions: i64,

    pub deposits: i64,
}
