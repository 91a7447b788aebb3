use serde::Serialize;
use slotmap::SlotMap;
use spiro_core::{Result, SpiroError};
use spiro_geometry::Color;
use spiro_math::{Aabb2, Point2, Viewport};
use spiro_trace::{PenId, RenderingSurface};
use tracing::debug;

/// A polyline drawn in one colour without lifting the pen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stroke {
    pub color: Color,
    pub points: Vec<Point2>,
}

impl Stroke {
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }
}

#[derive(Debug, Clone)]
struct Pen {
    color: Color,
    position: Point2,
    cursor_visible: bool,
    strokes: Vec<Stroke>,
}

impl Pen {
    fn start_stroke(&mut self) {
        self.strokes.push(Stroke {
            color: self.color,
            points: vec![self.position],
        });
    }
}

/// In-memory drawing surface, centre-origin and y-up
pub struct Canvas {
    viewport: Viewport,
    background: Color,
    pens: SlotMap<PenId, Pen>,
}

impl Canvas {
    /// Create an empty canvas of the given pixel size
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_background(width, height, Color::WHITE)
    }

    pub fn with_background(width: u32, height: u32, background: Color) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            background,
            pens: SlotMap::with_key(),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn pen_count(&self) -> usize {
        self.pens.len()
    }

    /// Every stroke on the canvas, pen by pen in creation order
    pub fn strokes(&self) -> impl Iterator<Item = &Stroke> + '_ {
        self.pens.values().flat_map(|pen| pen.strokes.iter())
    }

    /// Strokes drawn by one pen
    pub fn pen_strokes(&self, pen: PenId) -> Result<&[Stroke]> {
        Ok(self.pen(pen)?.strokes.as_slice())
    }

    /// Total line segments across all strokes
    pub fn segment_count(&self) -> usize {
        self.strokes().map(Stroke::segment_count).sum()
    }

    /// Compute the bounding box of everything drawn
    pub fn bounds(&self) -> Option<Aabb2> {
        let points: Vec<Point2> = self
            .strokes()
            .flat_map(|s| s.points.iter().copied())
            .collect();
        Aabb2::from_points(&points)
    }

    /// Positions and colours of the cursor glyphs currently shown
    pub fn visible_cursors(&self) -> Vec<(Point2, Color)> {
        self.pens
            .values()
            .filter(|pen| pen.cursor_visible)
            .map(|pen| (pen.position, pen.color))
            .collect()
    }

    fn pen(&self, id: PenId) -> Result<&Pen> {
        self.pens
            .get(id)
            .ok_or_else(|| SpiroError::Surface(format!("no pen {id:?} on canvas")))
    }

    fn pen_mut(&mut self, id: PenId) -> Result<&mut Pen> {
        self.pens
            .get_mut(id)
            .ok_or_else(|| SpiroError::Surface(format!("no pen {id:?} on canvas")))
    }
}

impl RenderingSurface for Canvas {
    fn create_pen(&mut self) -> PenId {
        let id = self.pens.insert(Pen {
            color: Color::BLACK,
            position: Point2::ZERO,
            cursor_visible: true,
            strokes: Vec::new(),
        });
        debug!(pen = ?id, "pen created");
        id
    }

    fn remove_pen(&mut self, pen: PenId) -> Result<()> {
        self.pens
            .remove(pen)
            .map(|_| ())
            .ok_or_else(|| SpiroError::Surface(format!("no pen {pen:?} on canvas")))
    }

    fn move_to(&mut self, pen: PenId, at: Point2) -> Result<()> {
        let pen = self.pen_mut(pen)?;
        pen.position = at;
        pen.start_stroke();
        Ok(())
    }

    fn line_to(&mut self, pen: PenId, to: Point2) -> Result<()> {
        let pen = self.pen_mut(pen)?;
        if pen.strokes.is_empty() {
            pen.start_stroke();
        }
        pen.position = to;
        if let Some(stroke) = pen.strokes.last_mut() {
            stroke.points.push(to);
        }
        Ok(())
    }

    fn set_color(&mut self, pen: PenId, color: Color) -> Result<()> {
        let pen = self.pen_mut(pen)?;
        pen.color = color;
        let open_is_empty = pen.strokes.last().map(|s| s.points.len() < 2);
        match open_is_empty {
            // Nothing drawn yet in the open stroke, recolour it in place.
            Some(true) => {
                if let Some(stroke) = pen.strokes.last_mut() {
                    stroke.color = color;
                }
            }
            Some(false) => pen.start_stroke(),
            None => {}
        }
        Ok(())
    }

    fn show_cursor(&mut self, pen: PenId) -> Result<()> {
        self.pen_mut(pen)?.cursor_visible = true;
        Ok(())
    }

    fn hide_cursor(&mut self, pen: PenId) -> Result<()> {
        self.pen_mut(pen)?.cursor_visible = false;
        Ok(())
    }

    fn is_cursor_visible(&self, pen: PenId) -> Result<bool> {
        Ok(self.pen(pen)?.cursor_visible)
    }

    fn clear(&mut self, pen: PenId) -> Result<()> {
        self.pen_mut(pen)?.strokes.clear();
        Ok(())
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(800, 600)
    }
}
