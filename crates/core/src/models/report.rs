use serde::{Deserialize, Serialize};

/// Fixed-layout customer report, ready for a PDF writer.
///
/// Holds text only: the writer lays out `title`, then `summary_lines`,
/// then `header` and `rows` as a bordered table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerReport {
    pub customer_id: String,

    /// "Customer Name: … - Customer ID: …"
    pub title: String,

    /// The two indicator lines under the title
    pub summary_lines: Vec<String>,

    pub header: Vec<String>,

    pub rows: Vec<Vec<String>>,
}

impl CustomerReport {
    /// Name of the file the report is written to.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.pdf", self.customer_id)
    }
}
