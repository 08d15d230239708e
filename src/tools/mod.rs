use crate::canvas::{Canvas, Color};
use crate::geometry::Point;

/// Color and radii applied to the next stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrokeStyle {
    pub color: Color,
    pub brush_radius: u32,
    pub pen_radius: u32,
}

/// Ephemeral state of one pointer drag, from pointer-down to pointer-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    /// Where the pointer went down
    pub anchor: Point,
    /// Start of a line; only recorded when the line tool was active at pointer-down
    pub line_start: Option<Point>,
}

impl DragSession {
    pub const fn new(anchor: Point, line_start: Option<Point>) -> Self {
        Self { anchor, line_start }
    }
}

/// What a tool did with a pointer event
#[derive(Debug)]
pub enum ToolOutcome {
    /// Nothing to draw
    Idle,
    /// Pixels were written to the canvas
    Painted,
    /// A scratch copy of the canvas with the candidate shape on it
    Preview(Canvas),
    /// A shape was written to the canvas
    Committed,
}

/// Tool trait defines how a drawing tool reacts to a drag in progress
pub trait Tool {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    /// Handle pointer movement while the pointer is held down.
    fn on_pointer_move(
        &self,
        pos: Point,
        session: &DragSession,
        canvas: &mut Canvas,
        style: &StrokeStyle,
    ) -> ToolOutcome;

    /// Handle pointer release, finalizing the drag.
    fn on_pointer_up(
        &self,
        pos: Point,
        session: &DragSession,
        canvas: &mut Canvas,
        style: &StrokeStyle,
    ) -> ToolOutcome;
}

mod shape_tool;
pub use shape_tool::{Shape, ShapeTool};

mod stamp_tool;
pub use stamp_tool::{StampRadius, StampTool};

/// The selectable drawing tools
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    Brush,
    Pen,
    Rectangle,
    Line,
    Circle,
}

impl ToolKind {
    pub const ALL: [ToolKind; 5] = [
        Self::Brush,
        Self::Pen,
        Self::Rectangle,
        Self::Line,
        Self::Circle,
    ];

    /// Lower-case name as it appears on a toolbar label
    pub const fn name(self) -> &'static str {
        match self {
            Self::Brush => "brush",
            Self::Pen => "pen",
            Self::Rectangle => "rectangle",
            Self::Line => "line",
            Self::Circle => "circle",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub const fn tool(self) -> ToolType {
        match self {
            Self::Brush => ToolType::Stamp(StampTool::new(StampRadius::Brush)),
            Self::Pen => ToolType::Stamp(StampTool::new(StampRadius::Pen)),
            Self::Rectangle => ToolType::Shape(ShapeTool::new(Shape::Rectangle)),
            Self::Line => ToolType::Shape(ShapeTool::new(Shape::Line)),
            Self::Circle => ToolType::Shape(ShapeTool::new(Shape::Circle)),
        }
    }
}

/// Enum representing all available tool implementations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolType {
    Stamp(StampTool),
    Shape(ShapeTool),
}

impl Tool for ToolType {
    fn name(&self) -> &'static str {
        match self {
            Self::Stamp(tool) => tool.name(),
            Self::Shape(tool) => tool.name(),
        }
    }

    fn on_pointer_move(
        &self,
        pos: Point,
        session: &DragSession,
        canvas: &mut Canvas,
        style: &StrokeStyle,
    ) -> ToolOutcome {
        match self {
            Self::Stamp(tool) => tool.on_pointer_move(pos, session, canvas, style),
            Self::Shape(tool) => tool.on_pointer_move(pos, session, canvas, style),
        }
    }

    fn on_pointer_up(
        &self,
        pos: Point,
        session: &DragSession,
        canvas: &mut Canvas,
        style: &StrokeStyle,
    ) -> ToolOutcome {
        match self {
            Self::Stamp(tool) => tool.on_pointer_up(pos, session, canvas, style),
            Self::Shape(tool) => tool.on_pointer_up(pos, session, canvas, style),
        }
    }
}
