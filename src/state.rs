use crate::canvas::{BACKGROUND, Canvas, Color};
use crate::config::EditorSettings;
use crate::geometry::Point;
use crate::palette::PaletteColor;
use crate::tools::{DragSession, StrokeStyle, Tool, ToolKind, ToolOutcome};

/// Whether a pointer drag is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Everything the paint editor mutates: the canvas, tool settings and the
/// current drag. Pointer handlers take `&mut self`; nothing is global.
///
/// A drag can be started with no tool selected (for example right after
/// Clear). Such a session is kept until pointer-up but draws nothing.
#[derive(Debug)]
pub struct EditorState {
    canvas: Canvas,
    tool: Option<ToolKind>,
    style: StrokeStyle,
    drag: DragState,
    /// Shape preview of the current drag, replaced on every move
    preview: Option<Canvas>,
}

impl EditorState {
    pub fn new(settings: &EditorSettings) -> Self {
        Self {
            canvas: Canvas::new(settings.width, settings.height),
            tool: None,
            style: StrokeStyle {
                color: PaletteColor::Black.rgb(),
                brush_radius: settings.brush_radius,
                pen_radius: settings.pen_radius,
            },
            drag: DragState::Idle,
            preview: None,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn tool(&self) -> Option<ToolKind> {
        self.tool
    }

    pub fn color(&self) -> Color {
        self.style.color
    }

    pub fn brush_radius(&self) -> u32 {
        self.style.brush_radius
    }

    pub fn pen_radius(&self) -> u32 {
        self.style.pen_radius
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.drag, DragState::Dragging(_))
    }

    pub fn preview(&self) -> Option<&Canvas> {
        self.preview.as_ref()
    }

    /// The raster to present this frame: the shape preview while one exists,
    /// otherwise the canvas.
    pub fn frame(&self) -> &Canvas {
        self.preview.as_ref().unwrap_or(&self.canvas)
    }

    pub fn clear(&mut self) {
        log::info!("Clearing canvas");
        self.canvas.fill(BACKGROUND);
        self.tool = None;
        self.preview = None;
    }

    pub fn set_color(&mut self, color: Color) {
        log::info!("Color set to {:?}", color.0);
        self.style.color = color;
    }

    pub fn set_brush_radius(&mut self, radius: u32) {
        log::info!("Brush radius set to {}", radius);
        self.style.brush_radius = radius;
    }

    pub fn set_tool(&mut self, tool: Option<ToolKind>) {
        log::info!("Tool selected: {:?}", tool);
        self.tool = tool;
    }

    /// Pointer-down on the canvas area
    pub fn begin_drag(&mut self, pos: Point) {
        let line_start = (self.tool == Some(ToolKind::Line)).then_some(pos);
        log::debug!("Drag started at {:?} with tool {:?}", pos, self.tool);
        self.drag = DragState::Dragging(DragSession::new(pos, line_start));
        self.preview = None;
    }

    /// Pointer-move. Ignored unless a drag is in progress.
    pub fn drag_to(&mut self, pos: Point) {
        let DragState::Dragging(session) = self.drag else {
            return;
        };
        let Some(kind) = self.tool else {
            return;
        };

        match kind
            .tool()
            .on_pointer_move(pos, &session, &mut self.canvas, &self.style)
        {
            ToolOutcome::Preview(preview) => self.preview = Some(preview),
            ToolOutcome::Idle | ToolOutcome::Painted | ToolOutcome::Committed => {}
        }
    }

    /// Pointer-up. Finalizes the stroke or shape and always ends the drag.
    pub fn end_drag(&mut self, pos: Point) {
        let DragState::Dragging(session) = std::mem::take(&mut self.drag) else {
            return;
        };
        self.preview = None;

        if let Some(kind) = self.tool {
            let outcome = kind
                .tool()
                .on_pointer_up(pos, &session, &mut self.canvas, &self.style);
            log::debug!("Drag ended at {:?}: {:?}", pos, outcome);
        }
    }
}
