use image::{Rgb, RgbImage};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::geometry::Point;

/// Pixel color. Channels are stored in R, G, B order everywhere in the crate.
pub type Color = Rgb<u8>;

/// Color of an empty canvas, also used by the eraser
pub const BACKGROUND: Color = Rgb([255, 255, 255]);

// Source of unique revision numbers, so that a scratch copy never shares a
// revision with the canvas it was cloned from once either is modified.
static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

fn next_revision() -> u64 {
    NEXT_REVISION.fetch_add(1, Ordering::Relaxed)
}

/// A fixed-size RGB raster.
///
/// Every drawing primitive clips to the buffer, so callers may pass pointer
/// coordinates that lie outside the canvas.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: RgbImage,
    revision: u64,
}

impl Canvas {
    /// Creates a canvas filled with [`BACKGROUND`]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbImage::from_pixel(width, height, BACKGROUND),
            revision: next_revision(),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Changes whenever the pixels change
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if self.in_bounds(x, y) {
            Some(*self.pixels.get_pixel(x as u32, y as u32))
        } else {
            None
        }
    }

    /// Number of pixels that differ from `color`
    pub fn count_not(&self, color: Color) -> usize {
        self.pixels.pixels().filter(|p| **p != color).count()
    }

    pub fn fill(&mut self, color: Color) {
        for pixel in self.pixels.pixels_mut() {
            *pixel = color;
        }
        self.touch();
    }

    /// Filled disc of `radius` around `center`. Radius 0 paints one pixel.
    pub fn fill_disc(&mut self, center: Point, radius: u32, color: Color) {
        let r = i64::from(radius);
        let r_sq = r * r;
        let (cx, cy) = (i64::from(center.x), i64::from(center.y));

        let min_x = (cx - r).max(0);
        let max_x = (cx + r).min(i64::from(self.width()) - 1);
        let min_y = (cy - r).max(0);
        let max_y = (cy + r).min(i64::from(self.height()) - 1);

        for y in min_y..=max_y {
            let dy = y - cy;
            for x in min_x..=max_x {
                let dx = x - cx;
                if dx * dx + dy * dy <= r_sq {
                    self.pixels.put_pixel(x as u32, y as u32, color);
                }
            }
        }
        self.touch();
    }

    /// 1 px outline of the axis-aligned rectangle with opposite corners `a` and `b`
    pub fn stroke_rect(&mut self, a: Point, b: Point, color: Color) {
        let (left, right) = (a.x.min(b.x), a.x.max(b.x));
        let (top, bottom) = (a.y.min(b.y), a.y.max(b.y));

        self.hline(left, right, top, color);
        self.hline(left, right, bottom, color);
        self.vline(left, top, bottom, color);
        self.vline(right, top, bottom, color);
        self.touch();
    }

    /// 1 px outline of a circle, midpoint algorithm
    pub fn stroke_circle(&mut self, center: Point, radius: u32, color: Color) {
        let r = i64::from(radius);
        let (cx, cy) = (i64::from(center.x), i64::from(center.y));

        let mut x = r;
        let mut y = 0i64;
        let mut err = 1 - r;
        while x >= y {
            for (px, py) in [
                (cx + x, cy + y),
                (cx + y, cy + x),
                (cx - y, cy + x),
                (cx - x, cy + y),
                (cx - x, cy - y),
                (cx - y, cy - x),
                (cx + y, cy - x),
                (cx + x, cy - y),
            ] {
                self.put(px, py, color);
            }

            y += 1;
            if err < 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x) + 1;
            }
        }
        self.touch();
    }

    /// 1 px line segment including both endpoints, Bresenham
    pub fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        let (mut x, mut y) = (i64::from(from.x), i64::from(from.y));
        let (x1, y1) = (i64::from(to.x), i64::from(to.y));
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.put(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
        self.touch();
    }

    /// Snapshot in the layout egui textures expect
    pub fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgb(
            [self.width() as usize, self.height() as usize],
            self.pixels.as_raw(),
        )
    }

    fn hline(&mut self, x0: i32, x1: i32, y: i32, color: Color) {
        if y < 0 || y >= self.height() as i32 {
            return;
        }
        let start = x0.max(0);
        let end = x1.min(self.width() as i32 - 1);
        for x in start..=end {
            self.pixels.put_pixel(x as u32, y as u32, color);
        }
    }

    fn vline(&mut self, x: i32, y0: i32, y1: i32, color: Color) {
        if x < 0 || x >= self.width() as i32 {
            return;
        }
        let start = y0.max(0);
        let end = y1.min(self.height() as i32 - 1);
        for y in start..=end {
            self.pixels.put_pixel(x as u32, y as u32, color);
        }
    }

    fn put(&mut self, x: i64, y: i64, color: Color) {
        if x >= 0 && y >= 0 && x < i64::from(self.width()) && y < i64::from(self.height()) {
            self.pixels.put_pixel(x as u32, y as u32, color);
        }
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height()
    }

    fn touch(&mut self) {
        self.revision = next_revision();
    }
}
