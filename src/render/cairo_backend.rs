use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::core::{LinearScale, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    ChartFrame, Color, LegendEntry, Renderer, TextAnchor, TextHAlign, TextVAlign,
};

const MARGIN_LEFT_PX: f64 = 28.0;
const MARGIN_RIGHT_PX: f64 = 16.0;
const MARGIN_TOP_PX: f64 = 36.0;
const MARGIN_BOTTOM_PX: f64 = 52.0;
const LABEL_FONT_PX: f64 = 10.0;
const TITLE_FONT_PX: f64 = 14.0;
const LEGEND_SWATCH_PX: f64 = 12.0;
const LEGEND_PADDING_PX: f64 = 6.0;
const VALUE_HEADROOM_RATIO: f64 = 0.12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub rects_drawn: usize,
    pub texts_drawn: usize,
    pub ticks_drawn: usize,
    pub legend_entries_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(&mut self, context: &Context, frame: &ChartFrame)
    -> ChartResult<()>;
}

/// Cairo + Pango panel backend.
///
/// Chart units from the frame are mapped onto the plot area with two
/// `LinearScale`s: x spans every bar edge and tick, y spans zero and every
/// bar end plus headroom for the value labels.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    viewport: Viewport,
    clear_color: Color,
    text_color: Color,
    axis_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(viewport: Viewport) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let width = i32::try_from(viewport.width)
            .map_err(|_| ChartError::InvalidData("viewport width overflows i32".to_owned()))?;
        let height = i32::try_from(viewport.height)
            .map_err(|_| ChartError::InvalidData("viewport height overflows i32".to_owned()))?;

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            viewport,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            text_color: Color::rgb(0.0, 0.0, 0.0),
            axis_color: Color::rgb(0.25, 0.25, 0.25),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    pub fn write_png<W: std::io::Write>(&self, writer: &mut W) -> ChartResult<()> {
        self.surface
            .write_to_png(writer)
            .map_err(|err| ChartError::InvalidData(format!("failed to write png: {err}")))
    }

    fn paint_background(&self, context: &Context) -> ChartResult<()> {
        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))
    }

    fn render_with_context(&mut self, context: &Context, frame: &ChartFrame) -> ChartResult<()> {
        frame.validate()?;
        self.paint_background(context)?;

        let plot_left = MARGIN_LEFT_PX;
        let plot_right = f64::from(self.viewport.width) - MARGIN_RIGHT_PX;
        let plot_top = MARGIN_TOP_PX;
        let plot_bottom = f64::from(self.viewport.height) - MARGIN_BOTTOM_PX;
        if plot_right <= plot_left || plot_bottom <= plot_top {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        let (x_start, x_end) = x_domain(frame);
        let (y_start, y_end) = y_domain(frame);
        let x_scale = LinearScale::new(x_start, x_end, plot_left, plot_right)?;
        let y_scale = LinearScale::new(y_start, y_end, plot_bottom, plot_top)?;
        let mut stats = CairoRenderStats::default();

        apply_color(context, self.axis_color);
        context.set_line_width(1.0);
        context.rectangle(plot_left, plot_top, plot_right - plot_left, plot_bottom - plot_top);
        let zero_y = y_scale.domain_to_pixel(0.0)?;
        context.move_to(plot_left, zero_y);
        context.line_to(plot_right, zero_y);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke axes", err))?;

        for rect in &frame.rects {
            let left = x_scale.domain_to_pixel(rect.left())?;
            let right = x_scale.domain_to_pixel(rect.right())?;
            let y0 = y_scale.domain_to_pixel(rect.y0)?;
            let y1 = y_scale.domain_to_pixel(rect.y1)?;
            context.rectangle(left, y0.min(y1), right - left, (y1 - y0).abs());
            apply_color(context, rect.color);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill bar", err))?;
            stats.rects_drawn += 1;
        }

        for text in &frame.texts {
            let x = x_scale.domain_to_pixel(text.x)?;
            let y = y_scale.domain_to_pixel(text.y)?;
            self.show_text(context, &text.text, x, y, text.anchor, LABEL_FONT_PX);
            stats.texts_drawn += 1;
        }

        let tick_anchor = TextAnchor::new(TextHAlign::Center, TextVAlign::Top);
        for tick in &frame.x_ticks {
            let x = x_scale.domain_to_pixel(tick.position)?;
            apply_color(context, self.axis_color);
            context.move_to(x, plot_bottom);
            context.line_to(x, plot_bottom + 3.0);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke tick", err))?;
            self.show_text(
                context,
                &tick.label,
                x,
                plot_bottom + 4.0,
                tick_anchor,
                LABEL_FONT_PX,
            );
            stats.ticks_drawn += 1;
        }

        if frame.y_axis_labels_visible {
            let anchor = TextAnchor::new(TextHAlign::Right, TextVAlign::Middle);
            for value in [y_start, y_end] {
                let y = y_scale.domain_to_pixel(value)?;
                self.show_text(
                    context,
                    &format!("{value:.0}"),
                    plot_left - 4.0,
                    y,
                    anchor,
                    LABEL_FONT_PX,
                );
            }
        }

        if let Some(title) = &frame.title {
            let x = f64::from(self.viewport.width) / 2.0;
            let anchor = TextAnchor::new(TextHAlign::Center, TextVAlign::Top);
            self.show_text(context, title, x, 8.0, anchor, TITLE_FONT_PX);
        }

        stats.legend_entries_drawn = self.draw_legend(context, &frame.legend, plot_right, plot_top)?;

        self.last_stats = stats;
        Ok(())
    }

    fn draw_legend(
        &self,
        context: &Context,
        entries: &[LegendEntry],
        plot_right: f64,
        plot_top: f64,
    ) -> ChartResult<usize> {
        if entries.is_empty() {
            return Ok(0);
        }

        let label_width = entries
            .iter()
            .map(|entry| text_size(context, &entry.label, LABEL_FONT_PX).0)
            .fold(0.0_f64, f64::max);
        let row_height = LEGEND_SWATCH_PX + LEGEND_PADDING_PX;
        let box_width = LEGEND_PADDING_PX * 3.0 + LEGEND_SWATCH_PX + label_width;
        let box_height = LEGEND_PADDING_PX + row_height * entries.len() as f64;
        let box_left = plot_right - box_width - LEGEND_PADDING_PX;
        let box_top = plot_top + LEGEND_PADDING_PX;

        context.rectangle(box_left, box_top, box_width, box_height);
        apply_color(context, Color::rgba(1.0, 1.0, 1.0, 0.8));
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill legend", err))?;
        apply_color(context, self.axis_color);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke legend", err))?;

        let label_anchor = TextAnchor::new(TextHAlign::Left, TextVAlign::Middle);
        for (row, entry) in entries.iter().enumerate() {
            let top = box_top + LEGEND_PADDING_PX + row as f64 * row_height;
            let swatch_left = box_left + LEGEND_PADDING_PX;
            context.rectangle(swatch_left, top, LEGEND_SWATCH_PX, LEGEND_SWATCH_PX);
            apply_color(context, entry.color);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill legend swatch", err))?;
            self.show_text(
                context,
                &entry.label,
                swatch_left + LEGEND_SWATCH_PX + LEGEND_PADDING_PX,
                top + LEGEND_SWATCH_PX / 2.0,
                label_anchor,
                LABEL_FONT_PX,
            );
        }
        Ok(entries.len())
    }

    fn show_text(
        &self,
        context: &Context,
        text: &str,
        x: f64,
        y: f64,
        anchor: TextAnchor,
        font_size_px: f64,
    ) {
        let layout = text_layout(context, text, font_size_px);
        let (width, height) = layout.pixel_size();
        let (width, height) = (f64::from(width), f64::from(height));
        let left = match anchor.h_align {
            TextHAlign::Left => x,
            TextHAlign::Center => x - width / 2.0,
            TextHAlign::Right => x - width,
        };
        let top = match anchor.v_align {
            TextVAlign::Top => y,
            TextVAlign::Middle => y - height / 2.0,
            TextVAlign::Bottom => y - height,
        };

        apply_color(context, self.text_color);
        context.move_to(left, top);
        pangocairo::functions::show_layout(context, &layout);
    }
}

impl Renderer for CairoRenderer {
    fn clear(&mut self) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.paint_background(&context)?;
        self.last_stats = CairoRenderStats::default();
        Ok(())
    }

    fn render(&mut self, frame: &ChartFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &ChartFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn x_domain(frame: &ChartFrame) -> (f64, f64) {
    let edges = frame
        .rects
        .iter()
        .flat_map(|rect| [rect.left(), rect.right()])
        .chain(frame.x_ticks.iter().map(|tick| tick.position));
    let (min, max) = min_max(edges).unwrap_or((0.0, 1.0));
    let span = max - min;
    let pad = if span > 0.0 { span * 0.05 } else { 0.5 };
    (min - pad, max + pad)
}

fn y_domain(frame: &ChartFrame) -> (f64, f64) {
    let ends = frame
        .rects
        .iter()
        .flat_map(|rect| [rect.y0, rect.y1])
        .chain(std::iter::once(0.0));
    let (min, max) = min_max(ends).unwrap_or((0.0, 1.0));
    let span = max - min;
    if span <= 0.0 {
        return (min, min + 1.0);
    }
    let headroom = span * VALUE_HEADROOM_RATIO;
    let bottom = if min < 0.0 { min - headroom } else { min };
    (bottom, max + headroom)
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, value| match acc {
        None => Some((value, value)),
        Some((min, max)) => Some((min.min(value), max.max(value))),
    })
}

fn text_layout(context: &Context, text: &str, font_size_px: f64) -> pango::Layout {
    let layout = pangocairo::functions::create_layout(context);
    let font_description = FontDescription::from_string(&format!("Sans {font_size_px}"));
    layout.set_font_description(Some(&font_description));
    layout.set_alignment(pango::Alignment::Center);
    layout.set_text(text);
    layout
}

fn text_size(context: &Context, text: &str, font_size_px: f64) -> (f64, f64) {
    let (width, height) = text_layout(context, text, font_size_px).pixel_size();
    (f64::from(width), f64::from(height))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}

#[cfg(test)]
mod tests {
    use super::{x_domain, y_domain};
    use crate::render::{ChartFrame, Color, DrawingSurface};

    #[test]
    fn y_domain_keeps_zero_and_adds_label_headroom() {
        let mut frame = ChartFrame::new();
        frame
            .draw_rect(0.0, 0.0, 50.0, 0.5, Color::rgb(0.0, 0.0, 0.0))
            .expect("rect");
        let (bottom, top) = y_domain(&frame);
        assert_eq!(bottom, 0.0);
        assert!((top - 56.0).abs() <= 1e-9);
    }

    #[test]
    fn empty_frame_gets_unit_domains() {
        let frame = ChartFrame::new();
        assert_eq!(y_domain(&frame), (0.0, 1.0));
        let (start, end) = x_domain(&frame);
        assert!(start < end);
    }
}
