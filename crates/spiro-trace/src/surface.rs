use spiro_core::Result;
use spiro_geometry::Color;
use spiro_math::Point2;

slotmap::new_key_type! {
    /// Handle to one pen (stroke owner plus cursor glyph) on a surface.
    pub struct PenId;
}

/// Anything that can draw pen strokes in centre-origin surface coordinates.
///
/// A single surface is shared by every tracer. Tracers borrow it mutably for
/// the duration of one call, so all drawing happens on the thread driving
/// the animation.
pub trait RenderingSurface {
    fn create_pen(&mut self) -> PenId;

    /// Drop `pen` together with its strokes and cursor glyph.
    fn remove_pen(&mut self, pen: PenId) -> Result<()>;

    /// Lift the pen and place it at `at`, starting a new stroke.
    fn move_to(&mut self, pen: PenId, at: Point2) -> Result<()>;

    /// Draw a segment from the pen's position to `to`.
    fn line_to(&mut self, pen: PenId, to: Point2) -> Result<()>;

    fn set_color(&mut self, pen: PenId, color: Color) -> Result<()>;

    fn show_cursor(&mut self, pen: PenId) -> Result<()>;

    fn hide_cursor(&mut self, pen: PenId) -> Result<()>;

    fn is_cursor_visible(&self, pen: PenId) -> Result<bool>;

    /// Erase every stroke drawn by `pen`. Other pens are untouched.
    fn clear(&mut self, pen: PenId) -> Result<()>;
}
