use crate::error::ChartResult;
use crate::render::{ChartFrame, Renderer};

/// Headless panel used by tests and by hosts without a drawing backend.
///
/// It validates every frame it receives and keeps the last one so callers can
/// inspect what a real panel would show.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub current: Option<ChartFrame>,
    pub clear_count: usize,
    pub render_count: usize,
}

impl NullRenderer {
    #[must_use]
    pub fn current(&self) -> Option<&ChartFrame> {
        self.current.as_ref()
    }
}

impl Renderer for NullRenderer {
    fn clear(&mut self) -> ChartResult<()> {
        self.current = None;
        self.clear_count += 1;
        Ok(())
    }

    fn render(&mut self, frame: &ChartFrame) -> ChartResult<()> {
        frame.validate()?;
        self.current = Some(frame.clone());
        self.render_count += 1;
        Ok(())
    }
}
