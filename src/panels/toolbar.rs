use egui::{Painter, Pos2};

use crate::components::{ButtonStyle, draw_button};
use crate::config::ButtonSettings;
use crate::geometry::{ButtonRect, Point};

/// Editor toolbar labels, one slice per row, left to right
pub const EDITOR_ROWS: [&[&str]; 2] = [
    &[
        "Clear", "Black", "Red", "Green", "Blue", "Yellow", "pink", "Eraser",
    ],
    &[
        "Size 1",
        "Size 2",
        "Size 3",
        "Size 4",
        "Size 5",
        "Brush",
        "Pen",
        "Rectangle",
        "Line",
        "Circle",
    ],
];

/// Landing screen labels, top to bottom
pub const LANDING_LABELS: [&str; 2] = ["Start Paint Editor", "Exit"];

/// A labelled hit target. Read-only once laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub rect: ButtonRect,
}

/// A fixed set of buttons sharing one size and style
#[derive(Debug, Clone)]
pub struct Toolbar {
    buttons: Vec<Button>,
    rounding: f32,
    style: ButtonStyle,
}

impl Toolbar {
    /// Lay out the editor toolbar: row `r`, cell `i` sits at
    /// `(margin + i * (width + margin), margin + r * (height + margin))`.
    pub fn editor(settings: &ButtonSettings) -> Self {
        let ButtonSettings {
            width,
            height,
            margin,
            ..
        } = *settings;

        let buttons = EDITOR_ROWS
            .iter()
            .enumerate()
            .flat_map(move |(row, labels)| {
                labels.iter().enumerate().map(move |(i, &label)| Button {
                    label,
                    rect: ButtonRect::new(
                        margin + i as i32 * (width + margin),
                        margin + row as i32 * (height + margin),
                        width,
                        height,
                    ),
                })
            })
            .collect();

        Self::new(buttons, settings)
    }

    /// Lay out a vertical stack of buttons centered in a `width` x `height` window
    pub fn landing(
        labels: &[&'static str],
        settings: &ButtonSettings,
        width: u32,
        height: u32,
    ) -> Self {
        let count = labels.len() as i32;
        let x = (width as i32 - settings.width) / 2;
        let stack_height = settings.height * count + settings.margin * (count - 1).max(0);
        let y = (height as i32 - stack_height) / 2;

        let buttons = labels
            .iter()
            .enumerate()
            .map(|(i, &label)| Button {
                label,
                rect: ButtonRect::new(
                    x,
                    y + i as i32 * (settings.height + settings.margin),
                    settings.width,
                    settings.height,
                ),
            })
            .collect();

        Self::new(buttons, settings)
    }

    fn new(buttons: Vec<Button>, settings: &ButtonSettings) -> Self {
        Self {
            buttons,
            rounding: settings.radius as f32,
            style: ButtonStyle::default(),
        }
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// The button under `pos`, if any. Bounds are inclusive.
    pub fn hit_test(&self, pos: Point) -> Option<&Button> {
        self.buttons.iter().find(|button| button.rect.contains(pos))
    }

    /// Draw every button, with the pixel grid anchored at `origin`
    pub fn paint(&self, painter: &Painter, origin: Pos2) {
        for button in &self.buttons {
            draw_button(
                painter,
                button.rect.to_egui(origin),
                self.rounding,
                button.label,
                &self.style,
            );
        }
    }
}
