// File: crates/lakechart-core/src/mark.rs
// Summary: Renderer-agnostic drawable primitives and the scene that holds them.

use crate::types::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Debug)]
pub struct TextMark {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub anchor: Anchor,
    pub font_size: f64,
    /// Rotation in degrees about the origin, applied before x/y (the y-axis
    /// label positions itself in rotated coordinates).
    pub rotate: Option<f64>,
    pub color: Color,
}

#[derive(Clone, Debug)]
pub struct LineMark {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: Color,
    pub width: f64,
}

/// The connecting line of one series: gap-split polyline segments.
#[derive(Clone, Debug)]
pub struct PathMark {
    pub class: String,
    pub id: String,
    pub segments: Vec<Vec<(f64, f64)>>,
    pub stroke: Color,
    pub stroke_width: f64,
    pub blend_multiply: bool,
}

/// One point marker per record, with its tooltip text.
#[derive(Clone, Debug)]
pub struct CircleMark {
    pub class: String,
    pub id: String,
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: Color,
    pub fill_opacity: f64,
    pub tooltip: String,
}

#[derive(Clone, Debug)]
pub enum Mark {
    Text(TextMark),
    Line(LineMark),
    Path(PathMark),
    Circle(CircleMark),
}

/// Ordered list of primitives, consumed in order by a rendering backend.
/// The background color only matters to raster backends; the SVG document
/// itself stays transparent like the page the original rendered into.
#[derive(Clone, Debug)]
pub struct Scene {
    pub marks: Vec<Mark>,
    pub background: Color,
}

impl Default for Scene {
    fn default() -> Self {
        Self { marks: Vec::new(), background: Color::rgb(255, 255, 255) }
    }
}

impl Scene {
    pub fn push(&mut self, mark: Mark) {
        self.marks.push(mark);
    }

    pub fn circles(&self) -> impl Iterator<Item = &CircleMark> {
        self.marks.iter().filter_map(|m| match m {
            Mark::Circle(c) => Some(c),
            _ => None,
        })
    }

    pub fn paths(&self) -> impl Iterator<Item = &PathMark> {
        self.marks.iter().filter_map(|m| match m {
            Mark::Path(p) => Some(p),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextMark> {
        self.marks.iter().filter_map(|m| match m {
            Mark::Text(t) => Some(t),
            _ => None,
        })
    }
}
