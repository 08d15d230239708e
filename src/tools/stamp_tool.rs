use crate::canvas::Canvas;
use crate::geometry::Point;

use super::{DragSession, StrokeStyle, Tool, ToolOutcome};

/// Which configured radius a stamp tool paints with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StampRadius {
    Brush,
    Pen,
}

/// Paints a filled disc straight onto the canvas for every pointer sample.
///
/// Samples are not interpolated, so a fast drag leaves gaps between discs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StampTool {
    radius: StampRadius,
}

impl StampTool {
    pub const fn new(radius: StampRadius) -> Self {
        Self { radius }
    }

    pub fn radius(&self, style: &StrokeStyle) -> u32 {
        match self.radius {
            StampRadius::Brush => style.brush_radius,
            StampRadius::Pen => style.pen_radius,
        }
    }

    fn stamp(&self, pos: Point, canvas: &mut Canvas, style: &StrokeStyle) -> ToolOutcome {
        canvas.fill_disc(pos, self.radius(style), style.color);
        ToolOutcome::Painted
    }
}

impl Tool for StampTool {
    fn name(&self) -> &'static str {
        match self.radius {
            StampRadius::Brush => "Brush",
            StampRadius::Pen => "Pen",
        }
    }

    fn on_pointer_move(
        &self,
        pos: Point,
        _session: &DragSession,
        canvas: &mut Canvas,
        style: &StrokeStyle,
    ) -> ToolOutcome {
        self.stamp(pos, canvas, style)
    }

    fn on_pointer_up(
        &self,
        pos: Point,
        _session: &DragSession,
        canvas: &mut Canvas,
        style: &StrokeStyle,
    ) -> ToolOutcome {
        self.stamp(pos, canvas, style)
    }
}
