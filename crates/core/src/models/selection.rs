use serde::{Deserialize, Serialize};

/// Dropdown label meaning "do not restrict by bank".
pub const ALL_BANKS: &str = "All Banks";

/// Dropdown label meaning "do not restrict by sector".
pub const ALL_SECTORS: &str = "All Sectors";

/// Dropdown label meaning "do not restrict by year".
pub const ALL_YEARS: &str = "All Years";

/// A wildcardable filter dimension.
///
/// The declaration order is the canonical grouping order:
/// bank, then sector, then year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    Bank,
    Sector,
    Year,
}

impl Dimension {
    /// All dimensions in canonical order.
    pub const CANONICAL: [Dimension; 3] = [Dimension::Bank, Dimension::Sector, Dimension::Year];

    /// The "All X" sentinel label shown in this dimension's dropdown.
    #[must_use]
    pub fn wildcard_label(self) -> &'static str {
        match self {
            Dimension::Bank => ALL_BANKS,
            Dimension::Sector => ALL_SECTORS,
            Dimension::Year => ALL_YEARS,
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::Bank => write!(f, "Bank"),
            Dimension::Sector => write!(f, "Sector"),
            Dimension::Year => write!(f, "Year"),
        }
    }
}

/// Selection value for one dimension: the wildcard or one concrete value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DimensionFilter {
    #[default]
    All,
    Only(String),
}

impl DimensionFilter {
    /// Parse a dropdown label; the dimension's sentinel maps to `All`.
    pub fn from_label(dimension: Dimension, label: &str) -> Self {
        if label == dimension.wildcard_label() {
            DimensionFilter::All
        } else {
            DimensionFilter::Only(label.to_string())
        }
    }

    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, DimensionFilter::All)
    }

    /// The concrete value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            DimensionFilter::All => None,
            DimensionFilter::Only(v) => Some(v),
        }
    }

    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            DimensionFilter::All => true,
            DimensionFilter::Only(v) => v == candidate,
        }
    }

    /// Label for display: the concrete value or the dimension's sentinel.
    #[must_use]
    pub fn label(&self, dimension: Dimension) -> String {
        match self {
            DimensionFilter::All => dimension.wildcard_label().to_string(),
            DimensionFilter::Only(v) => v.clone(),
        }
    }
}

/// The active filter state of one dashboard session.
///
/// `customer_id` is always concrete; bank, sector and year may be wildcards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub customer_id: String,
    pub bank: DimensionFilter,
    pub sector: DimensionFilter,
    pub year: DimensionFilter,
}

impl Selection {
    /// Selection of one customer with every dimension set to its wildcard.
    pub fn for_customer(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            bank: DimensionFilter::All,
            sector: DimensionFilter::All,
            year: DimensionFilter::All,
        }
    }

    /// Build a selection from the four dropdown labels.
    pub fn from_labels(customer_id: &str, bank: &str, sector: &str, year: &str) -> Self {
        Self {
            customer_id: customer_id.to_string(),
            bank: DimensionFilter::from_label(Dimension::Bank, bank),
            sector: DimensionFilter::from_label(Dimension::Sector, sector),
            year: DimensionFilter::from_label(Dimension::Year, year),
        }
    }

    #[must_use]
    pub fn with_bank(mut self, bank: impl Into<String>) -> Self {
        self.bank = DimensionFilter::Only(bank.into());
        self
    }

    #[must_use]
    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = DimensionFilter::Only(sector.into());
        self
    }

    #[must_use]
    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = DimensionFilter::Only(year.into());
        self
    }

    #[must_use]
    pub fn filter(&self, dimension: Dimension) -> &DimensionFilter {
        match dimension {
            Dimension::Bank => &self.bank,
            Dimension::Sector => &self.sector,
            Dimension::Year => &self.year,
        }
    }

    /// The grouping key: every concrete dimension with its value, in canonical order.
    ///
    /// Empty when all three dimensions are wildcards.
    #[must_use]
    pub fn grouping_key(&self) -> Vec<(Dimension, &str)> {
        Dimension::CANONICAL
            .iter()
            .filter_map(|&dim| self.filter(dim).value().map(|v| (dim, v)))
            .collect()
    }
}
