use std::collections::HashSet;

use tracing::warn;

use crate::error::{ChartError, ChartResult};

use super::{ChartKind, DashboardConfig};

pub(super) fn validate_dashboard_config(config: &DashboardConfig) -> ChartResult<()> {
    let palette = config.parse_palette()?;
    let geometry = config.geometry.validate()?;

    if !config.viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: config.viewport.width,
            height: config.viewport.height,
        });
    }

    for kind in ChartKind::ALL {
        let chart = config.chart_kind(kind);
        if chart.columns.is_empty() {
            return Err(ChartError::InvalidConfig(format!(
                "chart kind `{kind:?}` must list at least one column"
            )));
        }
        if chart.columns.len() > palette.len() {
            return Err(ChartError::InvalidConfig(format!(
                "chart kind `{kind:?}` has {} series but the palette only has {} colors",
                chart.columns.len(),
                palette.len()
            )));
        }

        let mut seen = HashSet::with_capacity(chart.columns.len());
        for column in &chart.columns {
            if column.trim().is_empty() {
                return Err(ChartError::InvalidConfig(format!(
                    "chart kind `{kind:?}` has a blank column name"
                )));
            }
            if !seen.insert(column.as_str()) {
                return Err(ChartError::InvalidConfig(format!(
                    "chart kind `{kind:?}` lists column `{column}` twice"
                )));
            }
        }

        if geometry.is_degenerate_for(chart.columns.len()) {
            warn!(
                ?kind,
                series = chart.columns.len(),
                tick_step = geometry.tick_step,
                group_gap = geometry.group_gap,
                bar_gap = geometry.bar_gap,
                "bar gap leaves no room for bars; chart will draw zero-width bars"
            );
        }
    }

    Ok(())
}
