use egui::{Context, Key, Sense};

use crate::command::ToolbarAction;
use crate::config::EditorSettings;
use crate::input::{InputEvent, InputHandler};
use crate::panels::Toolbar;
use crate::state::EditorState;
use crate::texture_manager::TextureManager;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorOutcome {
    Continue,
    Exit,
}

/// The paint editor screen: routes pointer events either to the toolbar or
/// to the active drawing tool.
pub struct PaintEditor {
    state: EditorState,
    toolbar: Toolbar,
    /// Pointer-down above this row goes to the toolbar, never to a tool
    band_height: i32,
    input: InputHandler,
    textures: TextureManager,
}

impl PaintEditor {
    pub fn new(settings: &EditorSettings) -> Self {
        let button = &settings.button;
        Self {
            state: EditorState::new(settings),
            toolbar: Toolbar::editor(button),
            band_height: 2 * button.height + 2 * button.margin,
            input: InputHandler::default(),
            textures: TextureManager::new("canvas"),
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    pub fn band_height(&self) -> i32 {
        self.band_height
    }

    pub fn handle_event(&mut self, event: &InputEvent) -> EditorOutcome {
        match *event {
            InputEvent::KeyDown { key: Key::Escape } => return EditorOutcome::Exit,
            InputEvent::PointerDown { pos, .. } if pos.y < self.band_height => {
                // Clicks in the toolbar band never start a drag, even between buttons
                if let Some(button) = self.toolbar.hit_test(pos) {
                    match ToolbarAction::from_label(button.label) {
                        Some(action) => {
                            log::debug!("Toolbar action: {:?}", action);
                            action.execute(&mut self.state);
                        }
                        None => log::warn!("Ignoring unknown toolbar label: {}", button.label),
                    }
                }
            }
            InputEvent::PointerDown { pos, .. } => self.state.begin_drag(pos),
            InputEvent::PointerMove { pos } => self.state.drag_to(pos),
            InputEvent::PointerUp { pos, .. } => self.state.end_drag(pos),
            InputEvent::KeyDown { .. } => {}
        }
        EditorOutcome::Continue
    }

    /// Handle every event in order, stopping at Escape
    pub fn handle_events(&mut self, events: &[InputEvent]) -> EditorOutcome {
        for event in events {
            if self.handle_event(event) == EditorOutcome::Exit {
                return EditorOutcome::Exit;
            }
        }
        EditorOutcome::Continue
    }

    /// Render one frame, then poll this frame's input
    pub fn show(&mut self, ctx: &Context) -> EditorOutcome {
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::drag());
                let origin = response.rect.min;
                self.input.set_origin(origin);

                let frame = self.state.frame();
                let texture = self.textures.texture_for(frame, ui.ctx());
                super::paint_raster(&painter, texture, origin, frame.width(), frame.height());
                self.toolbar.paint(&painter, origin);
            });

        let events = self.input.process_input(ctx);
        self.handle_events(&events)
    }
}
