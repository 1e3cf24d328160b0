use serde::{Deserialize, Serialize};

use crate::core::ChartSpec;
use crate::error::{ChartError, ChartResult};

/// Spacing constants shared by every grouped-bar chart.
///
/// All values are in category units: category `c` starts at `c * tick_step`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub tick_step: f64,
    pub group_gap: f64,
    pub bar_gap: f64,
}

impl Default for BarGeometry {
    fn default() -> Self {
        Self {
            tick_step: 3.0,
            group_gap: 0.5,
            bar_gap: 0.1,
        }
    }
}

impl BarGeometry {
    #[must_use]
    pub const fn new(tick_step: f64, group_gap: f64, bar_gap: f64) -> Self {
        Self {
            tick_step,
            group_gap,
            bar_gap,
        }
    }

    /// Width available to one category's bar cluster.
    #[must_use]
    pub fn group_width(self) -> f64 {
        self.tick_step - self.group_gap
    }

    /// Checks the spacing invariants that keep groups from overlapping.
    ///
    /// A `bar_gap` wider than the bar span is accepted: it yields zero-width
    /// bars, not a failure.
    pub fn validate(self) -> ChartResult<Self> {
        for (name, value) in [
            ("tick_step", self.tick_step),
            ("group_gap", self.group_gap),
            ("bar_gap", self.bar_gap),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidConfig(format!(
                    "bar geometry `{name}` must be finite"
                )));
            }
        }
        if self.tick_step <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "bar geometry `tick_step` must be > 0".to_owned(),
            ));
        }
        if self.tick_step <= self.group_gap {
            return Err(ChartError::InvalidConfig(
                "bar geometry `tick_step` must be > `group_gap`".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Returns `true` when `series_count` bars per group leave no room for
    /// a positive bar width.
    #[must_use]
    pub fn is_degenerate_for(self, series_count: usize) -> bool {
        series_count > 0 && self.group_width() / series_count as f64 - self.bar_gap <= 0.0
    }
}

/// Horizontal positions for every bar and tick of one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionPlan {
    pub category_count: usize,
    pub series_count: usize,
    pub group_width: f64,
    /// Center-to-center distance between neighbouring bars of one group.
    pub bar_span: f64,
    /// Visual bar thickness, never negative.
    pub bar_width: f64,
    /// `c * tick_step` for each category.
    pub group_origins: Vec<f64>,
    /// Tick under the middle of each bar cluster.
    pub tick_positions: Vec<f64>,
}

impl PositionPlan {
    /// Center of the bar for `(series, category)`.
    #[must_use]
    pub fn bar_x(&self, series: usize, category: usize) -> Option<f64> {
        if series >= self.series_count {
            return None;
        }
        self.group_origins
            .get(category)
            .map(|origin| origin + series as f64 * self.bar_span)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.category_count == 0
    }

    /// Places every value of `spec`, series by series, categories in order.
    pub fn place_bars(&self, spec: &ChartSpec) -> ChartResult<Vec<PlacedBar>> {
        spec.validate()?;
        if spec.categories.len() != self.category_count || spec.series.len() != self.series_count
        {
            return Err(ChartError::InvalidData(format!(
                "position plan is {}x{} but chart spec is {}x{}",
                self.series_count,
                self.category_count,
                spec.series.len(),
                spec.categories.len()
            )));
        }

        let mut bars = Vec::with_capacity(self.series_count * self.category_count);
        for (series_index, series) in spec.series.iter().enumerate() {
            for (category, value) in spec.categories.iter().zip(&series.values) {
                let origin = self.group_origins[category.index];
                bars.push(PlacedBar {
                    x: origin + series_index as f64 * self.bar_span,
                    width: self.bar_width,
                    value: *value,
                    label: category.label.clone(),
                    series_index,
                    category_index: category.index,
                });
            }
        }
        Ok(bars)
    }
}

/// One bar ready to draw. `x` is the bar center, `label` its category label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedBar {
    pub x: f64,
    pub width: f64,
    pub value: f64,
    pub label: String,
    pub series_index: usize,
    pub category_index: usize,
}

/// Computes grouped-bar positions.
///
/// `series_count` must be at least one; zero categories yield an empty plan.
pub fn layout(
    category_count: usize,
    series_count: usize,
    geometry: BarGeometry,
) -> ChartResult<PositionPlan> {
    let geometry = geometry.validate()?;
    if series_count == 0 {
        return Err(ChartError::InvalidConfig(
            "grouped bar layout needs at least one series".to_owned(),
        ));
    }

    let group_width = geometry.group_width();
    let bar_span = group_width / series_count as f64;
    let bar_width = (bar_span - geometry.bar_gap).max(0.0);
    let tick_offset = (group_width - bar_span) / 2.0;

    let group_origins: Vec<f64> = (0..category_count)
        .map(|category| category as f64 * geometry.tick_step)
        .collect();
    let tick_positions = group_origins
        .iter()
        .map(|origin| origin + tick_offset)
        .collect();

    Ok(PositionPlan {
        category_count,
        series_count,
        group_width,
        bar_span,
        bar_width,
        group_origins,
        tick_positions,
    })
}
