#![warn(clippy::all, rust_2018_idioms)]

fn main() -> Result<(), paint_editor::AppError> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let settings = paint_editor::Settings::load()?;
    paint_editor::run(settings)
}
