use thiserror::Error;

/// Unified error type for the entire bank-dashboard-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Dataset / File ──────────────────────────────────────────────
    #[error("Invalid file format: {0}")]
    InvalidFileFormat(String),

    #[error("Invalid record at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    #[error("File I/O error: {0}")]
    FileIO(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    /// A concrete bank/sector/year combination has no matching group.
    /// Distinct from a legitimate zero-valued metric.
    #[error("No data for customer {customer_id} with bank '{bank}', sector '{sector}', year '{year}'")]
    NoDataForSelection {
        customer_id: String,
        bank: String,
        sector: String,
        year: String,
    },

    #[error("Validation failed: {0}")]
    ValidationError(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<csv::Error> for CoreError {
    fn from(e: csv::Error) -> Self {
        match e.kind() {
            csv::ErrorKind::Io(_) => CoreError::FileIO(e.to_string()),
            csv::ErrorKind::Deserialize { pos, err } => CoreError::InvalidRecord {
                // Line 1 is the header, so data rows start at line 2.
                row: pos
                    .as_ref()
                    .map(|p| p.line().saturating_sub(1) as usize)
                    .unwrap_or(0),
                message: err.to_string(),
            },
            _ => CoreError::InvalidFileFormat(e.to_string()),
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
