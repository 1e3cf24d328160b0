use crate::core::{Category, Row};
use crate::error::{ChartError, ChartResult};

/// Formats the x-axis label for one project row.
#[must_use]
pub fn category_label(row: &Row) -> String {
    format!("{}\n{}", row.project_name, row.project_code)
}

/// Builds one category per row, keeping the upstream row order.
pub fn build_categories(rows: &[Row]) -> ChartResult<Vec<Category>> {
    if rows.is_empty() {
        return Err(ChartError::EmptySelection);
    }

    Ok(rows
        .iter()
        .enumerate()
        .map(|(index, row)| Category::new(category_label(row), index))
        .collect())
}

/// Keeps the rows owned by `manager`, in provider order.
#[must_use]
pub fn filter_rows_by_manager(rows: &[Row], manager: &str) -> Vec<Row> {
    rows.iter()
        .filter(|row| row.manager == manager)
        .cloned()
        .collect()
}
