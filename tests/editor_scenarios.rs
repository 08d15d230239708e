use egui::{Key, Modifiers};
use image::Rgb;
use paint_editor::canvas::{BACKGROUND, Color};
use paint_editor::config::EditorSettings;
use paint_editor::geometry::Point;
use paint_editor::palette::PaletteColor;
use paint_editor::state::DragState;
use paint_editor::{EditorOutcome, InputEvent, PaintEditor, ToolKind};

const BLACK: Color = Rgb([0, 0, 0]);
const RED: Color = Rgb([255, 0, 0]);

fn editor() -> PaintEditor {
    PaintEditor::new(&EditorSettings::default())
}

fn down(x: i32, y: i32) -> InputEvent {
    InputEvent::PointerDown {
        pos: Point::new(x, y),
        modifiers: Modifiers::NONE,
    }
}

fn moved(x: i32, y: i32) -> InputEvent {
    InputEvent::PointerMove {
        pos: Point::new(x, y),
    }
}

fn up(x: i32, y: i32) -> InputEvent {
    InputEvent::PointerUp {
        pos: Point::new(x, y),
        modifiers: Modifiers::NONE,
    }
}

/// Click the center of the toolbar button with this label
fn click(editor: &mut PaintEditor, label: &str) {
    let center = editor
        .toolbar()
        .buttons()
        .iter()
        .find(|button| button.label == label)
        .map(|button| button.rect.center())
        .unwrap_or_else(|| panic!("no button labelled {label}"));
    assert_eq!(
        editor.handle_event(&down(center.x, center.y)),
        EditorOutcome::Continue
    );
    editor.handle_event(&up(center.x, center.y));
}

fn drag(editor: &mut PaintEditor, path: &[(i32, i32)]) {
    let (first, rest) = path.split_first().unwrap();
    editor.handle_event(&down(first.0, first.1));
    for &(x, y) in rest {
        editor.handle_event(&moved(x, y));
    }
    let last = path.last().unwrap();
    editor.handle_event(&up(last.0, last.1));
}

#[test]
fn test_line_scenario_draws_exactly_one_red_line() {
    let mut editor = editor();
    click(&mut editor, "Line");
    click(&mut editor, "Red");

    drag(&mut editor, &[(100, 200), (180, 240), (300, 200)]);

    let canvas = editor.state().canvas();
    for x in 100..=300 {
        assert_eq!(canvas.pixel(x, 200), Some(RED), "pixel at x={x}");
    }
    assert_eq!(canvas.count_not(BACKGROUND), 201);
}

#[test]
fn test_eraser_over_black_line_restores_background() {
    let mut editor = editor();
    click(&mut editor, "Line");
    drag(&mut editor, &[(100, 300), (200, 300)]);
    assert_eq!(editor.state().canvas().pixel(150, 300), Some(BLACK));

    click(&mut editor, "Eraser");
    click(&mut editor, "Size 4");
    click(&mut editor, "Brush");
    assert_eq!(editor.state().color(), BACKGROUND);

    let path: Vec<(i32, i32)> = (100..=200).step_by(4).map(|x| (x, 300)).collect();
    drag(&mut editor, &path);

    assert_eq!(editor.state().canvas().count_not(BACKGROUND), 0);
}

#[test]
fn test_clear_resets_canvas_and_tool() {
    let mut editor = editor();
    click(&mut editor, "Blue");
    click(&mut editor, "Brush");
    drag(&mut editor, &[(400, 400), (420, 410), (500, 500)]);
    click(&mut editor, "Circle");
    drag(&mut editor, &[(600, 600), (650, 650)]);
    assert!(editor.state().canvas().count_not(BACKGROUND) > 0);

    click(&mut editor, "Clear");

    assert_eq!(editor.state().canvas().count_not(BACKGROUND), 0);
    assert_eq!(editor.state().tool(), None);
    // Color survives a clear
    assert_eq!(editor.state().color(), PaletteColor::Blue.rgb());
}

#[test]
fn test_shape_moves_never_touch_canvas() {
    for label in ["Rectangle", "Circle", "Line"] {
        let mut editor = editor();
        click(&mut editor, label);
        let revision = editor.state().canvas().revision();

        editor.handle_event(&down(300, 300));
        for step in 1..20 {
            editor.handle_event(&moved(300 + step * 10, 300 + step * 5));
            assert_eq!(editor.state().canvas().revision(), revision, "{label}");
            assert!(editor.state().preview().is_some(), "{label}");
        }
        assert_eq!(editor.state().canvas().count_not(BACKGROUND), 0);

        editor.handle_event(&up(500, 400));
        assert_ne!(editor.state().canvas().revision(), revision, "{label}");
        let committed = editor.state().canvas().revision();

        // A stray pointer-up after the session ended commits nothing
        editor.handle_event(&up(520, 420));
        assert_eq!(editor.state().canvas().revision(), committed, "{label}");
    }
}

#[test]
fn test_brush_paints_one_disc_per_event() {
    let mut editor = editor();
    click(&mut editor, "Brush");
    click(&mut editor, "Size 2");

    // Samples far apart so that discs do not touch
    editor.handle_event(&down(200, 200));
    assert_eq!(editor.state().canvas().count_not(BACKGROUND), 0);

    editor.handle_event(&moved(300, 200));
    let one_disc = editor.state().canvas().count_not(BACKGROUND);
    // Radius 2 disc: 13 pixels
    assert_eq!(one_disc, 13);

    editor.handle_event(&moved(400, 200));
    assert_eq!(editor.state().canvas().count_not(BACKGROUND), 2 * one_disc);

    editor.handle_event(&up(500, 200));
    assert_eq!(editor.state().canvas().count_not(BACKGROUND), 3 * one_disc);
    assert_eq!(editor.state().canvas().pixel(500, 202), Some(BLACK));
    assert_eq!(editor.state().canvas().pixel(500, 203), Some(BACKGROUND));
}

#[test]
fn test_pen_uses_pen_radius() {
    let mut editor = editor();
    click(&mut editor, "Size 5");
    click(&mut editor, "Pen");
    drag(&mut editor, &[(300, 300), (300, 300)]);

    let canvas = editor.state().canvas();
    assert_eq!(canvas.pixel(303, 300), Some(BLACK));
    assert_eq!(canvas.pixel(304, 300), Some(BACKGROUND));
}

#[test]
fn test_size_buttons_change_brush_only() {
    let mut editor = editor();
    let pen = editor.state().pen_radius();
    for n in 1..=5 {
        click(&mut editor, &format!("Size {n}"));
        assert_eq!(editor.state().brush_radius(), n);
        assert_eq!(editor.state().pen_radius(), pen);
    }
}

#[test]
fn test_circle_commit_radius_is_truncated_distance() {
    let mut editor = editor();
    click(&mut editor, "Circle");
    // distance from (400,400) to (410,407) is ~12.2
    drag(&mut editor, &[(400, 400), (450, 450), (410, 407)]);

    let canvas = editor.state().canvas();
    assert_eq!(canvas.pixel(412, 400), Some(BLACK));
    assert_eq!(canvas.pixel(388, 400), Some(BLACK));
    assert_eq!(canvas.pixel(400, 412), Some(BLACK));
    assert_eq!(canvas.pixel(413, 400), Some(BACKGROUND));
    // Nothing from the preview at radius ~70 was kept
    assert_eq!(canvas.pixel(470, 400), Some(BACKGROUND));
}

#[test]
fn test_rectangle_commit_uses_anchor_and_release() {
    let mut editor = editor();
    click(&mut editor, "Green");
    click(&mut editor, "Rectangle");
    drag(&mut editor, &[(300, 300), (600, 600), (350, 320)]);

    let canvas = editor.state().canvas();
    let green = PaletteColor::Green.rgb();
    assert_eq!(canvas.pixel(300, 300), Some(green));
    assert_eq!(canvas.pixel(350, 320), Some(green));
    assert_eq!(canvas.pixel(325, 310), Some(BACKGROUND));
    // 51 x 21 outline
    assert_eq!(canvas.count_not(BACKGROUND), 2 * 51 + 2 * 19);
}

#[test]
fn test_toolbar_band_never_starts_a_drag() {
    let mut editor = editor();
    click(&mut editor, "Brush");
    assert_eq!(editor.band_height(), 76);

    // Between buttons and far right of the band: no action, no drag
    for (x, y) in [(92, 20), (1100, 20), (1100, 75)] {
        editor.handle_event(&down(x, y));
        assert_eq!(editor.state().drag(), &DragState::Idle);
        editor.handle_event(&moved(x + 5, y + 100));
        editor.handle_event(&up(x + 5, y + 100));
    }
    assert_eq!(editor.state().canvas().count_not(BACKGROUND), 0);

    // First row below the band does start one
    editor.handle_event(&down(1100, 76));
    assert!(editor.state().is_drawing());
}

#[test]
fn test_drag_without_tool_is_a_dead_session() {
    let mut editor = editor();
    assert_eq!(editor.state().tool(), None);

    editor.handle_event(&down(300, 300));
    assert!(editor.state().is_drawing());
    editor.handle_event(&moved(350, 350));
    editor.handle_event(&up(400, 400));

    assert!(!editor.state().is_drawing());
    assert!(editor.state().preview().is_none());
    assert_eq!(editor.state().canvas().count_not(BACKGROUND), 0);
}

#[test]
fn test_drawing_off_canvas_is_clipped() {
    let mut editor = editor();
    click(&mut editor, "Brush");
    drag(&mut editor, &[(1190, 890), (1190, 890), (1250, 950), (-40, 2000)]);
    click(&mut editor, "Circle");
    drag(&mut editor, &[(600, 450), (5000, 5000)]);

    assert_eq!(editor.state().canvas().pixel(1190, 890), Some(BLACK));
}

#[test]
fn test_escape_exits_editor() {
    let mut editor = editor();
    let events = [
        down(300, 300),
        InputEvent::KeyDown { key: Key::A },
        InputEvent::KeyDown { key: Key::Escape },
        up(300, 300),
    ];
    assert_eq!(editor.handle_events(&events), EditorOutcome::Exit);
    // Events after Escape are not processed
    assert!(editor.state().is_drawing());
}

#[test]
fn test_tool_selection_through_toolbar() {
    let mut editor = editor();
    for kind in ToolKind::ALL {
        let label = editor
            .toolbar()
            .buttons()
            .iter()
            .find(|button| button.label.eq_ignore_ascii_case(kind.name()))
            .map(|button| button.label)
            .unwrap();
        click(&mut editor, label);
        assert_eq!(editor.state().tool(), Some(kind));
    }
}
