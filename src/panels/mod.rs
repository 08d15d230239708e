mod toolbar;

pub use toolbar::{Button, EDITOR_ROWS, LANDING_LABELS, Toolbar};
