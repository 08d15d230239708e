use image::Rgb;

use crate::canvas::{BACKGROUND, Color};

/// The fixed colors offered by the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteColor {
    Black,
    Red,
    Green,
    Blue,
    Yellow,
    White,
    Pink,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 7] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::White,
        Self::Pink,
    ];

    pub const fn rgb(self) -> Color {
        match self {
            Self::Black => Rgb([0, 0, 0]),
            Self::Red => Rgb([255, 0, 0]),
            Self::Green => Rgb([0, 255, 0]),
            Self::Blue => Rgb([0, 0, 255]),
            Self::Yellow => Rgb([255, 255, 0]),
            Self::White => BACKGROUND,
            Self::Pink => Rgb([255, 192, 203]),
        }
    }

    /// Lower-case name as it appears on a toolbar label
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::White => "white",
            Self::Pink => "pink",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.name() == name)
    }
}
