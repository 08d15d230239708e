use egui::{Align2, Color32, Context, FontId, Key, Sense};
use image::Rgb;

use crate::canvas::Canvas;
use crate::config::LandingSettings;
use crate::geometry::Point;
use crate::input::{InputEvent, InputHandler};
use crate::panels::{LANDING_LABELS, Toolbar};
use crate::texture_manager::TextureManager;

pub const TITLE: &str = "Welcome to the Paint Editor!";

/// Baseline of the title, in pixels from the top
const TITLE_BASELINE: f32 = 100.0;
const TITLE_FONT_SIZE: f32 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingOutcome {
    Stay,
    StartEditor,
    Exit,
}

/// Vertical gradient: blue fades from 255 at the top towards 0 at the bottom
pub fn gradient_background(width: u32, height: u32) -> Canvas {
    let mut canvas = Canvas::new(width, height);
    let last_x = width as i32 - 1;
    for row in 0..height {
        let blue = 255 - (255 * u64::from(row) / u64::from(height)) as u8;
        canvas.draw_line(
            Point::new(0, row as i32),
            Point::new(last_x, row as i32),
            Rgb([150, 200, blue]),
        );
    }
    canvas
}

pub struct LandingScreen {
    background: Canvas,
    toolbar: Toolbar,
    input: InputHandler,
    textures: TextureManager,
}

impl LandingScreen {
    pub fn new(settings: &LandingSettings) -> Self {
        Self {
            background: gradient_background(settings.width, settings.height),
            toolbar: Toolbar::landing(
                &LANDING_LABELS,
                &settings.button,
                settings.width,
                settings.height,
            ),
            input: InputHandler::default(),
            textures: TextureManager::new("landing"),
        }
    }

    pub fn background(&self) -> &Canvas {
        &self.background
    }

    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    pub fn handle_event(&self, event: &InputEvent) -> LandingOutcome {
        match event {
            InputEvent::KeyDown { key: Key::Escape } => LandingOutcome::Exit,
            InputEvent::PointerDown { pos, .. } => match self.toolbar.hit_test(*pos) {
                Some(button) => {
                    log::info!("Button clicked: {}", button.label);
                    match button.label {
                        "Start Paint Editor" => LandingOutcome::StartEditor,
                        "Exit" => LandingOutcome::Exit,
                        _ => LandingOutcome::Stay,
                    }
                }
                None => LandingOutcome::Stay,
            },
            _ => LandingOutcome::Stay,
        }
    }

    /// Handle every event in order, stopping at the first that leaves the screen
    pub fn handle_events(&self, events: &[InputEvent]) -> LandingOutcome {
        events
            .iter()
            .map(|event| self.handle_event(event))
            .find(|outcome| *outcome != LandingOutcome::Stay)
            .unwrap_or(LandingOutcome::Stay)
    }

    /// Render one frame, then poll this frame's input
    pub fn show(&mut self, ctx: &Context) -> LandingOutcome {
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
                let origin = response.rect.min;
                self.input.set_origin(origin);

                let texture = self.textures.texture_for(&self.background, ui.ctx());
                super::paint_raster(
                    &painter,
                    texture,
                    origin,
                    self.background.width(),
                    self.background.height(),
                );

                painter.text(
                    origin + egui::vec2(self.background.width() as f32 / 2.0, TITLE_BASELINE),
                    Align2::CENTER_BOTTOM,
                    TITLE,
                    FontId::proportional(TITLE_FONT_SIZE),
                    Color32::BLACK,
                );
                self.toolbar.paint(&painter, origin);
            });

        let events = self.input.process_input(ctx);
        self.handle_events(&events)
    }
}
