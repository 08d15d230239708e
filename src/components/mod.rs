mod button;

pub use button::{ButtonStyle, draw_button};
