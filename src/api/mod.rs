mod chart_assembler;
mod dashboard_config;
mod row_source;
mod selection_controller;
mod validation;

pub use chart_assembler::{AssembledChart, ChartAssembler};
pub use dashboard_config::{ChartKind, ChartKindConfig, DashboardConfig};
pub use row_source::{InMemoryRowSource, RowSource, distinct_managers};
pub use selection_controller::{
    ControllerState, DashboardCharts, SelectionController, SelectionEvent, rebuild_charts,
};
