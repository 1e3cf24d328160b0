use serde::{Deserialize, Serialize};

use crate::core::{BarGeometry, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Palette;

use super::validation::validate_dashboard_config;

/// The two fixed chart configurations of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    WorkHours,
    ProjectStatus,
}

impl ChartKind {
    pub const ALL: [Self; 2] = [Self::WorkHours, Self::ProjectStatus];
}

/// Legend columns and title of one chart kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartKindConfig {
    pub columns: Vec<String>,
    pub title: String,
}

impl ChartKindConfig {
    #[must_use]
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>, title: impl Into<String>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            title: title.into(),
        }
    }
}

/// Static dashboard configuration, set once at startup.
///
/// Serializable so hosts can ship it next to their data files; every field
/// falls back to the stock dashboard when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Series colors as `#rrggbb`, by series position.
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
    #[serde(default)]
    pub geometry: BarGeometry,
    #[serde(default = "default_work_hours")]
    pub work_hours: ChartKindConfig,
    #[serde(default = "default_project_status")]
    pub project_status: ChartKindConfig,
    /// Pixel size of each chart panel.
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            geometry: BarGeometry::default(),
            work_hours: default_work_hours(),
            project_status: default_project_status(),
            viewport: default_viewport(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json_str(json: &str) -> ChartResult<Self> {
        serde_json::from_str(json)
            .map_err(|err| ChartError::InvalidConfig(format!("failed to parse config json: {err}")))
    }

    pub fn to_json_string_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| ChartError::InvalidConfig(format!("failed to encode config json: {err}")))
    }

    #[must_use]
    pub fn with_geometry(mut self, geometry: BarGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    #[must_use]
    pub fn with_palette<S: Into<String>>(mut self, palette: impl IntoIterator<Item = S>) -> Self {
        self.palette = palette.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_chart_kind(mut self, kind: ChartKind, chart: ChartKindConfig) -> Self {
        match kind {
            ChartKind::WorkHours => self.work_hours = chart,
            ChartKind::ProjectStatus => self.project_status = chart,
        }
        self
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn chart_kind(&self, kind: ChartKind) -> &ChartKindConfig {
        match kind {
            ChartKind::WorkHours => &self.work_hours,
            ChartKind::ProjectStatus => &self.project_status,
        }
    }

    pub fn parse_palette(&self) -> ChartResult<Palette> {
        Palette::from_hex(self.palette.as_slice())
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_dashboard_config(self)
    }
}

fn default_palette() -> Vec<String> {
    ["#1f77b4", "#ff7f0e", "#2ca02c"]
        .into_iter()
        .map(str::to_owned)
        .collect()
}

fn default_work_hours() -> ChartKindConfig {
    ChartKindConfig::new(
        ["declared hours", "confirmed hours", "delta"],
        "Work hours this month",
    )
}

fn default_project_status() -> ChartKindConfig {
    ChartKindConfig::new(
        [
            "completion this month",
            "total progress",
            "completion before this month",
        ],
        "Project completion this month",
    )
}

fn default_viewport() -> Viewport {
    Viewport::new(600, 400)
}
