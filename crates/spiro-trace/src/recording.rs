//! A surface that only records the commands it receives.

use slotmap::SlotMap;
use spiro_core::{Result, SpiroError};
use spiro_geometry::Color;
use spiro_math::Point2;

use crate::surface::{PenId, RenderingSurface};

/// One call made against a [`RenderingSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    MoveTo(Point2),
    LineTo(Point2),
    SetColor(Color),
    ShowCursor,
    HideCursor,
    Clear,
}

/// Headless surface keeping an ordered log of draw commands per pen.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    cursors: SlotMap<PenId, bool>,
    log: Vec<(PenId, DrawCommand)>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> &[(PenId, DrawCommand)] {
        &self.log
    }

    pub fn commands_for(&self, pen: PenId) -> impl Iterator<Item = &DrawCommand> + '_ {
        self.log
            .iter()
            .filter(move |(p, _)| *p == pen)
            .map(|(_, cmd)| cmd)
    }

    /// Number of `LineTo` commands issued by `pen`.
    pub fn line_count(&self, pen: PenId) -> usize {
        self.commands_for(pen)
            .filter(|cmd| matches!(cmd, DrawCommand::LineTo(_)))
            .count()
    }

    pub fn pen_count(&self) -> usize {
        self.cursors.len()
    }

    /// Drop the recorded log, keeping pens and cursor state.
    pub fn take_log(&mut self) -> Vec<(PenId, DrawCommand)> {
        std::mem::take(&mut self.log)
    }

    fn record(&mut self, pen: PenId, cmd: DrawCommand) -> Result<()> {
        let visible = self
            .cursors
            .get_mut(pen)
            .ok_or_else(|| SpiroError::Surface(format!("unknown pen {pen:?}")))?;
        match cmd {
            DrawCommand::ShowCursor => *visible = true,
            DrawCommand::HideCursor => *visible = false,
            _ => {}
        }
        self.log.push((pen, cmd));
        Ok(())
    }
}

impl RenderingSurface for RecordingSurface {
    fn create_pen(&mut self) -> PenId {
        self.cursors.insert(true)
    }

    fn remove_pen(&mut self, pen: PenId) -> Result<()> {
        self.cursors
            .remove(pen)
            .map(|_| ())
            .ok_or_else(|| SpiroError::Surface(format!("unknown pen {pen:?}")))
    }

    fn move_to(&mut self, pen: PenId, at: Point2) -> Result<()> {
        self.record(pen, DrawCommand::MoveTo(at))
    }

    fn line_to(&mut self, pen: PenId, to: Point2) -> Result<()> {
        self.record(pen, DrawCommand::LineTo(to))
    }

    fn set_color(&mut self, pen: PenId, color: Color) -> Result<()> {
        self.record(pen, DrawCommand::SetColor(color))
    }

    fn show_cursor(&mut self, pen: PenId) -> Result<()> {
        self.record(pen, DrawCommand::ShowCursor)
    }

    fn hide_cursor(&mut self, pen: PenId) -> Result<()> {
        self.record(pen, DrawCommand::HideCursor)
    }

    fn is_cursor_visible(&self, pen: PenId) -> Result<bool> {
        self.cursors
            .get(pen)
            .copied()
            .ok_or_else(|| SpiroError::Surface(format!("unknown pen {pen:?}")))
    }

    fn clear(&mut self, pen: PenId) -> Result<()> {
        self.record(pen, DrawCommand::Clear)
    }
}
