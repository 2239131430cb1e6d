// File: crates/lakechart-core/src/theme.rs
// Summary: Color presets for chart rendering.

use crate::types::Color;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub tick_label: Color,
    pub title: Color,
}

impl Theme {
    /// White page, black axes, purple series.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::rgb(255, 255, 255),
            axis_line: Color::rgb(0, 0, 0),
            axis_label: Color::rgb(0, 0, 0),
            tick_label: Color::rgb(0, 0, 0),
            title: Color::rgb(0, 0, 0),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(18, 18, 20),
            axis_line: Color::rgb(180, 180, 190),
            axis_label: Color::rgb(235, 235, 245),
            tick_label: Color::rgb(150, 150, 160),
            title: Color::rgb(235, 235, 245),
        }
    }
}

/// Return the built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::light()
}
