use egui::{Align2, Color32, FontId, Painter, Rect, Stroke, vec2};

/// Visual style shared by every button on both screens
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonStyle {
    pub shadow_offset: f32,
    pub shadow: Color32,
    pub fill: Color32,
    pub border: Stroke,
    pub label: Color32,
    pub font_size: f32,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            shadow_offset: 5.0,
            shadow: Color32::from_rgb(150, 150, 150),
            // Steel blue
            fill: Color32::from_rgb(70, 130, 180),
            border: Stroke::new(2.0, Color32::BLACK),
            label: Color32::WHITE,
            font_size: 15.0,
        }
    }
}

/// Draw a flat button: offset shadow, fill, border, then the centered label.
///
/// Returns the bounds of the laid-out label.
pub fn draw_button(
    painter: &Painter,
    rect: Rect,
    rounding: f32,
    label: &str,
    style: &ButtonStyle,
) -> Rect {
    let shadow = rect.translate(vec2(style.shadow_offset, style.shadow_offset));
    painter.rect_filled(shadow, rounding, style.shadow);
    painter.rect_filled(rect, rounding, style.fill);
    painter.rect_stroke(rect, rounding, style.border);

    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        label,
        FontId::proportional(style.font_size),
        style.label,
    )
}
