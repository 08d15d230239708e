use std::time::Duration;

use crate::config::Settings;
use crate::screens::{EditorOutcome, LandingOutcome, LandingScreen, PaintEditor};

pub const LANDING_TITLE: &str = "Landing Page";
pub const EDITOR_TITLE: &str = "Paint";

/// The screen currently owning the window
enum Screen {
    Landing(LandingScreen),
    Editor(Box<PaintEditor>),
}

/// What the current frame asks the window to do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    None,
    OpenEditor,
    Close,
}

impl From<LandingOutcome> for Transition {
    fn from(outcome: LandingOutcome) -> Self {
        match outcome {
            LandingOutcome::Stay => Self::None,
            LandingOutcome::StartEditor => Self::OpenEditor,
            LandingOutcome::Exit => Self::Close,
        }
    }
}

impl From<EditorOutcome> for Transition {
    fn from(outcome: EditorOutcome) -> Self {
        match outcome {
            EditorOutcome::Continue => Self::None,
            EditorOutcome::Exit => Self::Close,
        }
    }
}

pub struct PaintApp {
    settings: Settings,
    screen: Screen,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        log::info!("Showing landing screen");
        Self {
            screen: Screen::Landing(LandingScreen::new(&settings.landing)),
            settings,
        }
    }

    fn open_editor(&mut self, ctx: &egui::Context) {
        let editor = &self.settings.editor;
        log::info!("Opening paint editor ({}x{})", editor.width, editor.height);

        ctx.send_viewport_cmd(egui::ViewportCommand::Title(EDITOR_TITLE.to_owned()));
        ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(
            editor.width as f32,
            editor.height as f32,
        )));
        self.screen = Screen::Editor(Box::new(PaintEditor::new(editor)));
    }
}

impl eframe::App for PaintApp {
    /// Called each frame: render the current screen, then act on its input.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let transition = match &mut self.screen {
            Screen::Landing(landing) => Transition::from(landing.show(ctx)),
            Screen::Editor(editor) => Transition::from(editor.show(ctx)),
        };

        match transition {
            Transition::None => {}
            Transition::OpenEditor => self.open_editor(ctx),
            Transition::Close => {
                log::info!("Closing window");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }

        // Keep polling even without input
        ctx.request_repaint_after(Duration::from_millis(self.settings.frame_interval_ms));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EditorSettings, LandingSettings};
    use crate::geometry::Point;
    use crate::input::InputEvent;

    fn click(pos: Point) -> [InputEvent; 2] {
        let modifiers = egui::Modifiers::default();
        [
            InputEvent::PointerDown { pos, modifiers },
            InputEvent::PointerUp { pos, modifiers },
        ]
    }

    #[test]
    fn test_landing_outcomes_map_to_transitions() {
        assert_eq!(Transition::from(LandingOutcome::Stay), Transition::None);
        assert_eq!(
            Transition::from(LandingOutcome::StartEditor),
            Transition::OpenEditor
        );
        assert_eq!(Transition::from(LandingOutcome::Exit), Transition::Close);
    }

    #[test]
    fn test_editor_outcomes_map_to_transitions() {
        assert_eq!(Transition::from(EditorOutcome::Continue), Transition::None);
        assert_eq!(Transition::from(EditorOutcome::Exit), Transition::Close);
    }

    #[test]
    fn test_start_then_escape_closes() {
        let mut landing = LandingScreen::new(&LandingSettings::default());
        let start = landing.toolbar().buttons()[0].rect.center();
        assert_eq!(
            Transition::from(landing.handle_events(&click(start))),
            Transition::OpenEditor
        );

        let mut editor = PaintEditor::new(&EditorSettings::default());
        let escape = [InputEvent::KeyDown {
            key: egui::Key::Escape,
        }];
        assert_eq!(
            Transition::from(editor.handle_events(&escape)),
            Transition::Close
        );
    }
}
