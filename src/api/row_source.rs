use indexmap::IndexSet;

use crate::core::Row;
use crate::error::{ChartError, ChartResult};

/// Data provider consumed by the dashboard.
///
/// Row order is part of the contract: charts list projects in exactly the
/// order `rows` returns them.
pub trait RowSource {
    fn rows(&self) -> &[Row];

    /// Distinct managers, first one is the startup selection.
    fn managers(&self) -> Vec<String>;
}

/// Distinct managers in order of first appearance.
#[must_use]
pub fn distinct_managers(rows: &[Row]) -> Vec<String> {
    rows.iter()
        .map(|row| row.manager.as_str())
        .collect::<IndexSet<&str>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Row source backed by an already merged, in-memory row set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryRowSource {
    rows: Vec<Row>,
}

impl InMemoryRowSource {
    #[must_use]
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Reads a JSON array of rows.
    pub fn from_json_str(json: &str) -> ChartResult<Self> {
        let rows: Vec<Row> = serde_json::from_str(json)
            .map_err(|err| ChartError::InvalidData(format!("failed to parse rows json: {err}")))?;
        Ok(Self::new(rows))
    }

    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
    }
}

impl RowSource for InMemoryRowSource {
    fn rows(&self) -> &[Row] {
        &self.rows
    }

    fn managers(&self) -> Vec<String> {
        distinct_managers(&self.rows)
    }
}
