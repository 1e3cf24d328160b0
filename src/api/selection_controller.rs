use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::{Row, filter_rows_by_manager};
use crate::error::{ChartError, ChartResult};
use crate::render::{ChartFrame, Renderer};

use super::{AssembledChart, ChartAssembler, ChartKind, DashboardConfig, RowSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControllerState {
    Idle,
    Rebuilding,
}

/// A user picked a manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionEvent {
    pub manager: String,
}

impl SelectionEvent {
    #[must_use]
    pub fn new(manager: impl Into<String>) -> Self {
        Self {
            manager: manager.into(),
        }
    }
}

/// Both charts built for one manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardCharts {
    pub manager: String,
    pub work_hours: AssembledChart,
    pub project_status: AssembledChart,
}

impl DashboardCharts {
    #[must_use]
    pub fn chart(&self, kind: ChartKind) -> &AssembledChart {
        match kind {
            ChartKind::WorkHours => &self.work_hours,
            ChartKind::ProjectStatus => &self.project_status,
        }
    }
}

/// Builds both dashboard charts for `manager` without touching any panel.
pub fn rebuild_charts(
    manager: &str,
    rows: &[Row],
    assembler: &ChartAssembler,
) -> ChartResult<DashboardCharts> {
    let filtered = filter_rows_by_manager(rows, manager);
    if filtered.is_empty() {
        warn!(manager, "selected manager has no project rows");
    }

    Ok(DashboardCharts {
        manager: manager.to_owned(),
        work_hours: assembler.build_chart(ChartKind::WorkHours, &filtered)?,
        project_status: assembler.build_chart(ChartKind::ProjectStatus, &filtered)?,
    })
}

/// Owns the current manager selection and the two chart panels.
///
/// Every selection change rebuilds both charts in memory first; panels are
/// only cleared and redrawn once both charts and frames are ready. If a panel
/// fails while presenting, both panels get the previously presented frames
/// back, so a failed rebuild leaves both showing the previous selection.
pub struct SelectionController<S: RowSource, R: Renderer> {
    source: S,
    assembler: ChartAssembler,
    work_hours_panel: R,
    project_status_panel: R,
    selection: String,
    state: ControllerState,
    charts: Option<DashboardCharts>,
    /// Work-hours and project-status frames currently on the panels.
    presented: Option<[ChartFrame; 2]>,
}

impl<S: RowSource, R: Renderer> SelectionController<S, R> {
    /// Validates `config`, selects the first manager and renders once.
    pub fn start(
        source: S,
        config: DashboardConfig,
        work_hours_panel: R,
        project_status_panel: R,
    ) -> ChartResult<Self> {
        let assembler = ChartAssembler::new(config)?;
        let selection = source
            .managers()
            .into_iter()
            .next()
            .ok_or(ChartError::NoManagers)?;
        info!(manager = %selection, rows = source.rows().len(), "starting dashboard");

        let mut controller = Self {
            source,
            assembler,
            work_hours_panel,
            project_status_panel,
            selection: selection.clone(),
            state: ControllerState::Rebuilding,
            charts: None,
            presented: None,
        };
        controller.rebuild(SelectionEvent::new(selection))?;
        Ok(controller)
    }

    #[must_use]
    pub fn selection(&self) -> &str {
        &self.selection
    }

    #[must_use]
    pub fn state(&self) -> ControllerState {
        self.state
    }

    #[must_use]
    pub fn managers(&self) -> Vec<String> {
        self.source.managers()
    }

    #[must_use]
    pub fn charts(&self) -> Option<&DashboardCharts> {
        self.charts.as_ref()
    }

    #[must_use]
    pub fn assembler(&self) -> &ChartAssembler {
        &self.assembler
    }

    #[must_use]
    pub fn panel(&self, kind: ChartKind) -> &R {
        match kind {
            ChartKind::WorkHours => &self.work_hours_panel,
            ChartKind::ProjectStatus => &self.project_status_panel,
        }
    }

    #[must_use]
    pub fn into_panels(self) -> (R, R) {
        (self.work_hours_panel, self.project_status_panel)
    }

    /// Selection callback for UI controls.
    pub fn on_selection_changed(
        &mut self,
        manager: impl Into<String>,
    ) -> ChartResult<&DashboardCharts> {
        self.rebuild(SelectionEvent::new(manager))
    }

    /// Redraws the current selection, e.g. after the row set changed.
    pub fn refresh(&mut self) -> ChartResult<&DashboardCharts> {
        let event = SelectionEvent::new(self.selection.clone());
        self.rebuild(event)
    }

    /// Rebuilds both panels for `event.manager`.
    ///
    /// On error neither panel nor the current selection changes.
    pub fn rebuild(&mut self, event: SelectionEvent) -> ChartResult<&DashboardCharts> {
        self.state = ControllerState::Rebuilding;
        debug!(manager = %event.manager, "rebuilding dashboard");

        let result = self.rebuild_panels(&event.manager);
        self.state = ControllerState::Idle;
        let charts = result.inspect_err(|err| {
            warn!(manager = %event.manager, error = %err, "dashboard rebuild aborted");
        })?;

        self.selection = event.manager;
        Ok(&*self.charts.insert(charts))
    }

    fn rebuild_panels(&mut self, manager: &str) -> ChartResult<DashboardCharts> {
        let charts = rebuild_charts(manager, self.source.rows(), &self.assembler)?;
        let frames = [
            self.assembler.render_frame(&charts.work_hours)?,
            self.assembler.render_frame(&charts.project_status)?,
        ];

        if let Err(err) = self.present(&frames) {
            self.restore_presented();
            return Err(err);
        }
        self.presented = Some(frames);
        debug!(
            manager,
            work_hours_bars = charts.work_hours.bars.len(),
            project_status_bars = charts.project_status.bars.len(),
            "dashboard panels presented"
        );
        Ok(charts)
    }

    fn present(&mut self, frames: &[ChartFrame; 2]) -> ChartResult<()> {
        for (panel, frame) in [&mut self.work_hours_panel, &mut self.project_status_panel]
            .into_iter()
            .zip(frames)
        {
            panel.clear()?;
            panel.render(frame)?;
        }
        Ok(())
    }

    /// Puts the last successfully presented frames back on both panels.
    ///
    /// Before the first successful present both panels are left cleared.
    fn restore_presented(&mut self) {
        let panels = [&mut self.work_hours_panel, &mut self.project_status_panel];
        for (position, panel) in panels.into_iter().enumerate() {
            let restored = panel.clear().and_then(|()| match &self.presented {
                Some(frames) => panel.render(&frames[position]),
                None => Ok(()),
            });
            if let Err(err) = restored {
                warn!(panel = position, error = %err, "failed to restore previous chart frame");
            }
        }
    }
}
