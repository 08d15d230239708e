use egui::{Context, Key, Modifiers, PointerButton, Pos2};

use crate::geometry::Point;

/// Input events delivered to a screen, in pixel coordinates of its raster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary button was pressed
    PointerDown { pos: Point, modifiers: Modifiers },
    /// Pointer moved, with or without the button held
    PointerMove { pos: Point },
    /// Primary button was released
    PointerUp { pos: Point, modifiers: Modifiers },
    /// Key was pressed (repeats excluded)
    KeyDown { key: Key },
}

/// Handles converting raw egui input into our domain-specific InputEvents
#[derive(Debug, Clone)]
pub struct InputHandler {
    /// Screen position of the raster's top-left pixel
    origin: Pos2,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(Pos2::ZERO)
    }
}

impl InputHandler {
    pub fn new(origin: Pos2) -> Self {
        Self { origin }
    }

    /// Update the raster origin (e.g. after the panel moved)
    pub fn set_origin(&mut self, origin: Pos2) {
        self.origin = origin;
    }

    /// Drain this frame's egui events, keeping their order
    pub fn process_input(&self, ctx: &Context) -> Vec<InputEvent> {
        ctx.input(|input| self.translate(&input.events))
    }

    pub fn translate(&self, events: &[egui::Event]) -> Vec<InputEvent> {
        events
            .iter()
            .filter_map(|event| match event {
                egui::Event::PointerMoved(pos) => Some(InputEvent::PointerMove {
                    pos: Point::from_screen(*pos, self.origin),
                }),
                egui::Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed,
                    modifiers,
                } => {
                    let pos = Point::from_screen(*pos, self.origin);
                    let modifiers = *modifiers;
                    Some(if *pressed {
                        InputEvent::PointerDown { pos, modifiers }
                    } else {
                        InputEvent::PointerUp { pos, modifiers }
                    })
                }
                egui::Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    ..
                } => Some(InputEvent::KeyDown { key: *key }),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button(pos: Pos2, button: PointerButton, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn test_translate_keeps_order_and_offsets() {
        let handler = InputHandler::new(egui::pos2(4.0, 2.0));
        let events = [
            button(egui::pos2(14.0, 102.0), PointerButton::Primary, true),
            egui::Event::PointerMoved(egui::pos2(24.5, 112.0)),
            button(egui::pos2(24.5, 112.0), PointerButton::Primary, false),
        ];

        assert_eq!(
            handler.translate(&events),
            vec![
                InputEvent::PointerDown {
                    pos: Point::new(10, 100),
                    modifiers: Modifiers::NONE
                },
                InputEvent::PointerMove {
                    pos: Point::new(20, 110)
                },
                InputEvent::PointerUp {
                    pos: Point::new(20, 110),
                    modifiers: Modifiers::NONE
                },
            ]
        );
    }

    #[test]
    fn test_secondary_button_ignored() {
        let handler = InputHandler::default();
        let events = [button(egui::pos2(1.0, 1.0), PointerButton::Secondary, true)];
        assert!(handler.translate(&events).is_empty());
    }

    #[test]
    fn test_key_repeat_ignored() {
        let handler = InputHandler::default();
        let key = |pressed, repeat| egui::Event::Key {
            key: Key::Escape,
            physical_key: None,
            pressed,
            repeat,
            modifiers: Modifiers::NONE,
        };
        let events = [key(true, false), key(true, true), key(false, false)];
        assert_eq!(
            handler.translate(&events),
            vec![InputEvent::KeyDown { key: Key::Escape }]
        );
    }
}
