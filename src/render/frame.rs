use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, DrawingSurface, LegendEntry, RectPrimitive, TextAnchor, TextPrimitive, TickPrimitive,
};

/// Backend-agnostic record of one chart draw pass.
///
/// `ChartFrame` is itself a `DrawingSurface`: charts are drawn into a frame
/// off-screen and the finished frame is handed to a panel in one step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartFrame {
    pub title: Option<String>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
    pub x_ticks: Vec<TickPrimitive>,
    pub y_axis_labels_visible: bool,
    pub legend: Vec<LegendEntry>,
}

impl Default for ChartFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartFrame {
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            rects: Vec::new(),
            texts: Vec::new(),
            x_ticks: Vec::new(),
            y_axis_labels_visible: true,
            legend: Vec::new(),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        for rect in &self.rects {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        for tick in &self.x_ticks {
            if !tick.position.is_finite() {
                return Err(ChartError::InvalidData(
                    "tick position must be finite".to_owned(),
                ));
            }
        }
        for entry in &self.legend {
            entry.color.validate()?;
        }
        Ok(())
    }

    /// `true` when no bars or value labels were drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty() && self.texts.is_empty()
    }

    /// Draws the recorded content onto another surface.
    pub fn replay<S: DrawingSurface + ?Sized>(&self, surface: &mut S) -> ChartResult<()> {
        if let Some(title) = &self.title {
            surface.set_title(title)?;
        }
        for rect in &self.rects {
            surface.draw_rect(rect.x, rect.y0, rect.y1, rect.width, rect.color)?;
        }
        for text in &self.texts {
            surface.draw_text(text.x, text.y, &text.text, text.anchor)?;
        }
        let positions: Vec<f64> = self.x_ticks.iter().map(|tick| tick.position).collect();
        let labels: Vec<String> = self.x_ticks.iter().map(|tick| tick.label.clone()).collect();
        surface.set_x_ticks(&positions, &labels)?;
        if !self.y_axis_labels_visible {
            surface.hide_y_axis_labels()?;
        }
        let colors: Vec<Color> = self.legend.iter().map(|entry| entry.color).collect();
        let legend_labels: Vec<String> =
            self.legend.iter().map(|entry| entry.label.clone()).collect();
        surface.draw_legend(&colors, &legend_labels)
    }
}

impl DrawingSurface for ChartFrame {
    fn draw_rect(&mut self, x: f64, y0: f64, y1: f64, width: f64, color: Color) -> ChartResult<()> {
        let rect = RectPrimitive::new(x, y0, y1, width, color);
        rect.validate()?;
        self.rects.push(rect);
        Ok(())
    }

    fn draw_text(&mut self, x: f64, y: f64, text: &str, anchor: TextAnchor) -> ChartResult<()> {
        let text = TextPrimitive::new(text, x, y, anchor);
        text.validate()?;
        self.texts.push(text);
        Ok(())
    }

    fn set_x_ticks(&mut self, positions: &[f64], labels: &[String]) -> ChartResult<()> {
        if positions.len() != labels.len() {
            return Err(ChartError::InvalidData(format!(
                "got {} tick positions for {} tick labels",
                positions.len(),
                labels.len()
            )));
        }
        self.x_ticks = positions
            .iter()
            .zip(labels)
            .map(|(position, label)| TickPrimitive {
                position: *position,
                label: label.clone(),
            })
            .collect();
        Ok(())
    }

    fn hide_y_axis_labels(&mut self) -> ChartResult<()> {
        self.y_axis_labels_visible = false;
        Ok(())
    }

    fn draw_legend(&mut self, colors: &[Color], labels: &[String]) -> ChartResult<()> {
        if colors.len() != labels.len() {
            return Err(ChartError::InvalidData(format!(
                "got {} legend colors for {} legend labels",
                colors.len(),
                labels.len()
            )));
        }
        self.legend = colors
            .iter()
            .zip(labels)
            .map(|(color, label)| LegendEntry {
                color: *color,
                label: label.clone(),
            })
            .collect();
        Ok(())
    }

    fn set_title(&mut self, title: &str) -> ChartResult<()> {
        self.title = Some(title.to_owned());
        Ok(())
    }
}
