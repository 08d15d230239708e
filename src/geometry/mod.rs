//! Integer pixel geometry shared by the raster canvas and the toolbar.

mod hit_testing;

pub use hit_testing::ButtonRect;

/// A position in canvas pixel coordinates. May lie outside the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`, truncated toward zero.
    pub fn distance_to(self, other: Point) -> u32 {
        let dx = f64::from(other.x) - f64::from(self.x);
        let dy = f64::from(other.y) - f64::from(self.y);
        (dx * dx + dy * dy).sqrt() as u32
    }

    /// Convert a screen position into pixel coordinates relative to `origin`.
    /// One canvas pixel is drawn as one egui point.
    pub fn from_screen(pos: egui::Pos2, origin: egui::Pos2) -> Self {
        Self {
            x: (pos.x - origin.x).floor() as i32,
            y: (pos.y - origin.y).floor() as i32,
        }
    }
}
