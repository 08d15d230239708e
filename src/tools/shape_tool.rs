use crate::canvas::{Canvas, Color};
use crate::geometry::Point;

use super::{DragSession, StrokeStyle, Tool, ToolOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rectangle,
    Line,
    Circle,
}

/// Outlines a shape from the drag anchor to the pointer.
///
/// While dragging, the outline is drawn on a scratch copy of the canvas and
/// returned as a preview. Only pointer-up writes to the canvas itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeTool {
    shape: Shape,
}

impl ShapeTool {
    pub const fn new(shape: Shape) -> Self {
        Self { shape }
    }

    /// Draw the outline for a drag ending at `pos`. Returns false if the
    /// session has nothing to draw (a line without a recorded start).
    fn rasterize(&self, canvas: &mut Canvas, session: &DragSession, pos: Point, color: Color) -> bool {
        match self.shape {
            Shape::Rectangle => canvas.stroke_rect(session.anchor, pos, color),
            Shape::Circle => {
                let radius = session.anchor.distance_to(pos);
                canvas.stroke_circle(session.anchor, radius, color);
            }
            Shape::Line => match session.line_start {
                Some(start) => canvas.draw_line(start, pos, color),
                None => return false,
            },
        }
        true
    }
}

impl Tool for ShapeTool {
    fn name(&self) -> &'static str {
        match self.shape {
            Shape::Rectangle => "Rectangle",
            Shape::Line => "Line",
            Shape::Circle => "Circle",
        }
    }

    fn on_pointer_move(
        &self,
        pos: Point,
        session: &DragSession,
        canvas: &mut Canvas,
        style: &StrokeStyle,
    ) -> ToolOutcome {
        let mut scratch = canvas.clone();
        if self.rasterize(&mut scratch, session, pos, style.color) {
            ToolOutcome::Preview(scratch)
        } else {
            ToolOutcome::Idle
        }
    }

    fn on_pointer_up(
        &self,
        pos: Point,
        session: &DragSession,
        canvas: &mut Canvas,
        style: &StrokeStyle,
    ) -> ToolOutcome {
        if self.rasterize(canvas, session, pos, style.color) {
            log::info!("Committed {} ending at {:?}", self.name(), pos);
            ToolOutcome::Committed
        } else {
            ToolOutcome::Idle
        }
    }
}
