use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    ChartSpec, PlacedBar, PositionPlan, Row, build_categories, extract_series, layout,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{ChartFrame, ChartRenderer, DrawingSurface};

use super::{ChartKind, DashboardConfig};

/// One chart kind built for one row set, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssembledChart {
    pub kind: ChartKind,
    pub title: String,
    pub spec: ChartSpec,
    pub plan: PositionPlan,
    pub bars: Vec<PlacedBar>,
}

impl AssembledChart {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spec.categories.is_empty()
    }
}

/// Turns filtered rows into the dashboard's two chart kinds.
#[derive(Debug, Clone)]
pub struct ChartAssembler {
    config: DashboardConfig,
    renderer: ChartRenderer,
}

impl ChartAssembler {
    /// Validates `config` and prepares the palette.
    pub fn new(config: DashboardConfig) -> ChartResult<Self> {
        config.validate()?;
        let renderer = ChartRenderer::new(config.parse_palette()?);
        Ok(Self { config, renderer })
    }

    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &ChartRenderer {
        &self.renderer
    }

    /// Builds the categories and series of `kind` from `rows`.
    ///
    /// An empty row set yields a spec with no categories and empty series.
    pub fn build_spec(&self, kind: ChartKind, rows: &[Row]) -> ChartResult<ChartSpec> {
        let chart = self.config.chart_kind(kind);
        let categories = match build_categories(rows) {
            Ok(categories) => categories,
            Err(ChartError::EmptySelection) => {
                debug!(?kind, "no project rows; building empty chart");
                return ChartSpec::empty(chart.columns.as_slice(), self.config.geometry);
            }
            Err(err) => return Err(err),
        };
        let series = extract_series(rows, chart.columns.as_slice())?;
        ChartSpec::new(categories, series, self.config.geometry)
    }

    /// Builds spec, position plan and placed bars for `kind`.
    pub fn build_chart(&self, kind: ChartKind, rows: &[Row]) -> ChartResult<AssembledChart> {
        let spec = self.build_spec(kind, rows)?;
        let plan = layout(spec.categories.len(), spec.series.len(), spec.geometry)?;
        let bars = plan.place_bars(&spec)?;
        debug!(
            ?kind,
            categories = spec.categories.len(),
            series = spec.series.len(),
            bars = bars.len(),
            "assembled chart"
        );

        Ok(AssembledChart {
            kind,
            title: self.config.chart_kind(kind).title.clone(),
            spec,
            plan,
            bars,
        })
    }

    pub fn render<S: DrawingSurface + ?Sized>(
        &self,
        chart: &AssembledChart,
        surface: &mut S,
    ) -> ChartResult<()> {
        self.renderer
            .render_placed(&chart.spec, &chart.plan, &chart.bars, &chart.title, surface)
    }

    /// Renders `chart` off-screen into a fresh frame.
    pub fn render_frame(&self, chart: &AssembledChart) -> ChartResult<ChartFrame> {
        let mut frame = ChartFrame::new();
        self.render(chart, &mut frame)?;
        frame.validate()?;
        Ok(frame)
    }
}
