use serde::{Deserialize, Serialize};

/// Option lists for the three dependent dropdowns.
///
/// Each list starts with its dimension's "All X" sentinel, followed by the
/// unique values in first-occurrence order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionOptions {
    pub banks: Vec<String>,
    pub sectors: Vec<String>,
    pub years: Vec<String>,
}

/// Which selector changed and triggered an option recompute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropdownTrigger {
    Customer,
    Sector,
    Bank,
}

impl std::fmt::Display for DropdownTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DropdownTrigger::Customer => write!(f, "Customer"),
            DropdownTrigger::Sector => write!(f, "Sector"),
            DropdownTrigger::Bank => write!(f, "Bank"),
        }
    }
}

/// Result of a cascading dropdown recompute.
///
/// `Some` means "replace this output", `None` means "leave it as is".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownUpdate {
    pub bank_options: Option<Vec<String>>,
    pub sector_options: Option<Vec<String>>,
    pub year_options: Option<Vec<String>>,

    pub bank_value: Option<String>,
    pub sector_value: Option<String>,
    pub year_value: Option<String>,
}

impl DropdownUpdate {
    /// True when the update leaves every output untouched.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self == &DropdownUpdate::default()
    }
}
