use crate::state::data_model::{self, Row};

/// Immutable snapshot of the fetched rows plus the label schema used to
/// recognize header-echo rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowStore {
    rows: Vec<Row>,
    labels: Vec<String>,
}

impl RowStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stored rows entirely. Rows that echo the label schema
    /// back as data are dropped silently; some sources repeat the header
    /// row and that is not controllable upstream.
    pub fn load(&mut self, raw_rows: Vec<Row>, labels: Vec<String>) {
        self.rows = raw_rows
            .into_iter()
            .filter(|row| !is_header_echo(row, &labels))
            .collect();
        self.labels = labels;
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A row is a header echo only when every declared label maps to itself.
fn is_header_echo(row: &Row, labels: &[String]) -> bool {
    !labels.is_empty() && labels.iter().all(|label| data_model::cell(row, label) == label)
}
