use crate::core::{Row, Series};
use crate::error::{ChartError, ChartResult};

/// Extracts one series per column name, values aligned with `rows`.
///
/// Series `i` gets `color_index = i`; the palette wraps it when drawing.
pub fn extract_series<S: AsRef<str>>(rows: &[Row], columns: &[S]) -> ChartResult<Vec<Series>> {
    columns
        .iter()
        .enumerate()
        .map(|(position, column)| -> ChartResult<Series> {
            let column = column.as_ref();
            let values = rows
                .iter()
                .map(|row| -> ChartResult<f64> {
                    let value = row.metric(column).ok_or_else(|| ChartError::MissingColumn {
                        column: column.to_owned(),
                        project_code: row.project_code.clone(),
                    })?;
                    if !value.is_finite() {
                        return Err(ChartError::InvalidData(format!(
                            "column `{column}` of project `{}` must be finite",
                            row.project_code
                        )));
                    }
                    Ok(value)
                })
                .collect::<ChartResult<Vec<f64>>>()?;
            Ok(Series::new(column, position, values))
        })
        .collect()
}
