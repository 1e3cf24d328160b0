mod chart_renderer;
mod frame;
mod null_renderer;
mod primitives;

pub use chart_renderer::{ChartRenderer, format_value_label};
pub use frame::ChartFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, LegendEntry, Palette, RectPrimitive, TextAnchor, TextHAlign, TextPrimitive,
    TextVAlign, TickPrimitive,
};

use crate::error::ChartResult;

/// Drawing capability a chart is rendered onto.
///
/// Coordinates are chart units: x as produced by the grouped-bar layout,
/// y as the raw metric value. Mapping to pixels belongs to the surface.
pub trait DrawingSurface {
    /// Fills a bar centered on `x` spanning `y0..y1`.
    fn draw_rect(&mut self, x: f64, y0: f64, y1: f64, width: f64, color: Color) -> ChartResult<()>;

    fn draw_text(&mut self, x: f64, y: f64, text: &str, anchor: TextAnchor) -> ChartResult<()>;

    /// Replaces the x-axis ticks. `positions` and `labels` pair up by index.
    fn set_x_ticks(&mut self, positions: &[f64], labels: &[String]) -> ChartResult<()>;

    fn hide_y_axis_labels(&mut self) -> ChartResult<()>;

    fn draw_legend(&mut self, colors: &[Color], labels: &[String]) -> ChartResult<()>;

    fn set_title(&mut self, title: &str) -> ChartResult<()>;
}

/// Contract implemented by every chart panel backend.
///
/// Panels receive a finished `ChartFrame`, so drawing code stays isolated from
/// row filtering and layout.
pub trait Renderer {
    /// Tears down whatever the panel currently shows.
    fn clear(&mut self) -> ChartResult<()>;

    fn render(&mut self, frame: &ChartFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
