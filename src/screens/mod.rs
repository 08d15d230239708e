//! The two screens shown one after the other: landing, then the editor.

mod editor;
mod landing;

pub use editor::{EditorOutcome, PaintEditor};
pub use landing::{LandingOutcome, LandingScreen, TITLE, gradient_background};

use egui::{Color32, Painter, Pos2, Rect, TextureId, pos2};

/// Draw a raster texture at one point per pixel, top-left at `origin`
fn paint_raster(painter: &Painter, texture: TextureId, origin: Pos2, width: u32, height: u32) {
    let rect = Rect::from_min_size(origin, egui::vec2(width as f32, height as f32));
    let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
    painter.image(texture, rect, uv, Color32::WHITE);
}
