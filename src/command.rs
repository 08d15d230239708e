use crate::palette::PaletteColor;
use crate::state::EditorState;
use crate::tools::ToolKind;

/// Actions triggered by toolbar buttons, decoded once from the button label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    /// Wipe the canvas to the background color and deselect the tool
    Clear,
    SetColor(PaletteColor),
    /// Paint with the background color from now on
    Eraser,
    /// Set the brush radius. The pen radius is never changed by size buttons.
    SetBrushSize(u32),
    SelectTool(ToolKind),
}

impl ToolbarAction {
    /// Decode a button label. Matching ignores case; unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        let action = label.trim().to_lowercase();

        if action == "clear" {
            return Some(Self::Clear);
        }
        if action == "eraser" {
            return Some(Self::Eraser);
        }
        if let Some(size) = action.strip_prefix("size") {
            return size
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|size| *size > 0)
                .map(Self::SetBrushSize);
        }
        if let Some(kind) = ToolKind::from_name(&action) {
            return Some(Self::SelectTool(kind));
        }
        // White is only reachable through the eraser button
        PaletteColor::from_name(&action)
            .filter(|color| *color != PaletteColor::White)
            .map(Self::SetColor)
    }

    pub fn execute(self, state: &mut EditorState) {
        match self {
            Self::Clear => state.clear(),
            Self::SetColor(color) => state.set_color(color.rgb()),
            Self::Eraser => state.set_color(PaletteColor::White.rgb()),
            Self::SetBrushSize(size) => state.set_brush_radius(size),
            Self::SelectTool(kind) => state.set_tool(Some(kind)),
        }
    }
}
