use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

/// Environment variable naming an optional JSON settings file
pub const CONFIG_ENV_VAR: &str = "PAINT_EDITOR_CONFIG";

/// Largest accepted window or canvas side, in pixels
pub const MAX_WINDOW_SIDE: u32 = 16384;
/// Largest accepted button dimension, margin, rounding or stroke radius
pub const MAX_BUTTON_SIDE: u32 = 4096;
/// Largest accepted frame interval
pub const MAX_FRAME_INTERVAL_MS: u64 = 1000;

/// Geometry shared by every button drawn on one screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonSettings {
    pub width: i32,
    pub height: i32,
    pub margin: i32,
    /// Corner rounding in pixels
    pub radius: i32,
}

/// A partial `button` object; missing keys keep the screen's own defaults.
#[derive(Deserialize)]
struct ButtonOverrides {
    width: Option<i32>,
    height: Option<i32>,
    margin: Option<i32>,
    radius: Option<i32>,
}

impl ButtonOverrides {
    fn apply(self, base: ButtonSettings) -> ButtonSettings {
        ButtonSettings {
            width: self.width.unwrap_or(base.width),
            height: self.height.unwrap_or(base.height),
            margin: self.margin.unwrap_or(base.margin),
            radius: self.radius.unwrap_or(base.radius),
        }
    }
}

fn landing_button<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ButtonSettings, D::Error> {
    let overrides = ButtonOverrides::deserialize(deserializer)?;
    Ok(overrides.apply(LandingSettings::default().button))
}

fn editor_button<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ButtonSettings, D::Error> {
    let overrides = ButtonOverrides::deserialize(deserializer)?;
    Ok(overrides.apply(EditorSettings::default().button))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingSettings {
    pub width: u32,
    pub height: u32,
    #[serde(deserialize_with = "landing_button")]
    pub button: ButtonSettings,
}

impl Default for LandingSettings {
    fn default() -> Self {
        Self {
            width: 600,
            height: 500,
            button: ButtonSettings {
                width: 250,
                height: 50,
                margin: 20,
                radius: 10,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Canvas width, which is also the editor window width
    pub width: u32,
    pub height: u32,
    #[serde(deserialize_with = "editor_button")]
    pub button: ButtonSettings,
    pub brush_radius: u32,
    pub pen_radius: u32,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 900,
            button: ButtonSettings {
                width: 80,
                height: 30,
                margin: 8,
                radius: 5,
            },
            brush_radius: 4,
            pen_radius: 3,
        }
    }
}

/// Every tunable constant of the application.
///
/// Missing fields fall back to their defaults when deserializing, so a
/// settings file only needs to name the values it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub landing: LandingSettings,
    pub editor: EditorSettings,
    /// Upper bound on the time between two frames of the render/poll loop
    pub frame_interval_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            landing: LandingSettings::default(),
            editor: EditorSettings::default(),
            frame_interval_ms: 16,
        }
    }
}

impl Settings {
    /// Load settings from the file named by [`CONFIG_ENV_VAR`], or defaults if unset.
    ///
    /// A missing file only logs a warning; a malformed one is an error.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_path(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::warn!(
                "Settings file {} not found, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let json = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loading settings from {}", path.display());
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the editor cannot lay out or allocate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn in_range(field: &'static str, value: i64, max: u32) -> Result<(), ConfigError> {
            if value <= 0 {
                Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("must be positive, got {value}"),
                })
            } else if value > i64::from(max) {
                Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("must be at most {max}, got {value}"),
                })
            } else {
                Ok(())
            }
        }

        fn button(fields: [&'static str; 3], button: &ButtonSettings) -> Result<(), ConfigError> {
            let [width, height, margin] = fields;
            in_range(width, button.width.into(), MAX_BUTTON_SIDE)?;
            in_range(height, button.height.into(), MAX_BUTTON_SIDE)?;
            // Inclusive hit-testing needs at least one pixel between neighbouring buttons
            in_range(margin, button.margin.into(), MAX_BUTTON_SIDE)?;
            Ok(())
        }

        in_range("landing.width", self.landing.width.into(), MAX_WINDOW_SIDE)?;
        in_range("landing.height", self.landing.height.into(), MAX_WINDOW_SIDE)?;
        button(
            ["landing.button.width", "landing.button.height", "landing.button.margin"],
            &self.landing.button,
        )?;
        in_range("editor.width", self.editor.width.into(), MAX_WINDOW_SIDE)?;
        in_range("editor.height", self.editor.height.into(), MAX_WINDOW_SIDE)?;
        button(
            ["editor.button.width", "editor.button.height", "editor.button.margin"],
            &self.editor.button,
        )?;
        in_range("editor.brush_radius", self.editor.brush_radius.into(), MAX_BUTTON_SIDE)?;
        in_range("editor.pen_radius", self.editor.pen_radius.into(), MAX_BUTTON_SIDE)?;

        // Zero would turn the repaint loop into a busy loop
        if !(1..=MAX_FRAME_INTERVAL_MS).contains(&self.frame_interval_ms) {
            return Err(ConfigError::InvalidValue {
                field: "frame_interval_ms",
                reason: format!(
                    "must be between 1 and {MAX_FRAME_INTERVAL_MS}, got {}",
                    self.frame_interval_ms
                ),
            });
        }

        for (field, radius) in [
            ("landing.button.radius", self.landing.button.radius),
            ("editor.button.radius", self.editor.button.radius),
        ] {
            if !(0..=MAX_BUTTON_SIDE as i32).contains(&radius) {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("must be between 0 and {MAX_BUTTON_SIDE}, got {radius}"),
                });
            }
        }
        Ok(())
    }
}
