use tracing::trace;

use crate::core::{ChartSpec, PlacedBar, PositionPlan};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawingSurface, Palette, TextAnchor};

/// Draws one grouped-bar chart onto a `DrawingSurface`.
///
/// Holds only the palette; nothing is carried from one call to the next.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRenderer {
    palette: Palette,
}

impl ChartRenderer {
    #[must_use]
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Color used for a series' bars and its legend swatch.
    #[must_use]
    pub fn series_color(&self, color_index: usize) -> Color {
        self.palette.color(color_index)
    }

    /// Draws title, bars with value labels, category ticks and the legend.
    ///
    /// The y axis carries no scale: values are read from the bar labels.
    pub fn render<S: DrawingSurface + ?Sized>(
        &self,
        spec: &ChartSpec,
        plan: &PositionPlan,
        title: &str,
        surface: &mut S,
    ) -> ChartResult<()> {
        let bars = plan.place_bars(spec)?;
        self.render_placed(spec, plan, &bars, title, surface)
    }

    /// Same as `render` for bars already placed with `plan`.
    pub fn render_placed<S: DrawingSurface + ?Sized>(
        &self,
        spec: &ChartSpec,
        plan: &PositionPlan,
        bars: &[PlacedBar],
        title: &str,
        surface: &mut S,
    ) -> ChartResult<()> {
        spec.validate()?;
        let expected = spec.series.len() * spec.categories.len();
        if bars.len() != expected {
            return Err(ChartError::InvalidData(format!(
                "got {} placed bars for a {}x{} chart",
                bars.len(),
                spec.series.len(),
                spec.categories.len()
            )));
        }
        surface.set_title(title)?;

        for bar in bars {
            let series = spec.series.get(bar.series_index).ok_or_else(|| {
                ChartError::InvalidData(format!(
                    "placed bar refers to missing series {}",
                    bar.series_index
                ))
            })?;
            let color = self.series_color(series.color_index);
            surface.draw_rect(bar.x, 0.0, bar.value, bar.width, color)?;
            surface.draw_text(
                bar.x,
                bar.value,
                &format_value_label(bar.value),
                TextAnchor::BOTTOM_CENTER,
            )?;
        }

        surface.set_x_ticks(&plan.tick_positions, &spec.category_labels())?;
        surface.hide_y_axis_labels()?;

        let colors: Vec<Color> = spec
            .series
            .iter()
            .map(|series| self.series_color(series.color_index))
            .collect();
        let labels: Vec<String> = spec.series.iter().map(|series| series.name.clone()).collect();
        surface.draw_legend(&colors, &labels)?;

        trace!(title, bars = bars.len(), "rendered grouped bar chart");
        Ok(())
    }
}

/// Literal value shown above a bar.
#[must_use]
pub fn format_value_label(value: f64) -> String {
    if value == 0.0 {
        // Avoid "-0".
        return "0".to_owned();
    }
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::format_value_label;

    #[test]
    fn value_labels_use_shortest_literal_form() {
        assert_eq!(format_value_label(12.0), "12");
        assert_eq!(format_value_label(12.5), "12.5");
        assert_eq!(format_value_label(-3.25), "-3.25");
        assert_eq!(format_value_label(-0.0), "0");
    }
}
