#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod command;
pub mod components;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod palette;
pub mod panels;
pub mod screens;
pub mod state;
pub mod texture_manager;
pub mod tools;

pub use app::PaintApp;
pub use canvas::Canvas;
pub use command::ToolbarAction;
pub use config::Settings;
pub use error::{AppError, AppResult, ConfigError};
pub use input::InputEvent;
pub use screens::{EditorOutcome, LandingOutcome, LandingScreen, PaintEditor};
pub use state::EditorState;
pub use tools::{Tool, ToolKind};

/// Open the landing window and run until the window closes.
///
/// Window-creation failures are returned as [`AppError::Display`].
pub fn run(settings: Settings) -> AppResult<()> {
    let landing = &settings.landing;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(app::LANDING_TITLE)
            .with_inner_size([landing.width as f32, landing.height as f32])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "paint_editor",
        native_options,
        Box::new(move |cc| Ok(Box::new(PaintApp::new(cc, settings)))),
    )?;

    log::info!("Window closed");
    Ok(())
}
