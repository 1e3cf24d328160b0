use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// The selected manager owns no project rows.
    #[error("selection has no project rows")]
    EmptySelection,

    /// A configured chart column is absent from a row.
    #[error("column `{column}` is missing from project `{project_code}`")]
    MissingColumn {
        column: String,
        project_code: String,
    },

    /// A series does not carry exactly one value per category.
    #[error("series `{series}` has {actual} values but the chart has {expected} categories")]
    DataShape {
        series: String,
        expected: usize,
        actual: usize,
    },

    #[error("data provider returned no managers")]
    NoManagers,

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl ChartError {
    /// Returns `true` for errors the dashboard recovers from by drawing an
    /// empty chart.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::EmptySelection)
    }
}
