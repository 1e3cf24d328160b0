//! manager-charts: grouped-bar dashboard engine.
//!
//! Rows from a data provider are filtered to one project manager, turned into
//! categories and series, laid out as grouped bars and drawn onto two chart
//! panels (work hours and project status). Panels and drawing backends are
//! pluggable through the `render::Renderer` and `render::DrawingSurface`
//! traits.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartAssembler, ChartKind, DashboardConfig, SelectionController};
pub use error::{ChartError, ChartResult};
