// File: crates/lakechart-core/src/record.rs
// Summary: Observation records and the series model binding them to a visual style.

use crate::types::Color;

/// One observation: a year and its measured surface area, if any.
/// A missing value is a gap in the line, not an error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataRecord {
    pub year: i32,
    pub surface_area: Option<f64>,
}

impl DataRecord {
    pub const fn new(year: i32, surface_area: Option<f64>) -> Self {
        Self { year, surface_area }
    }
}

/// A named record sequence bound to a visual style.
///
/// `id` doubles as the mark class and the toggle key; `id_prefix` feeds the
/// element ids the backend emits (`{prefix}Line`, `{prefix}Circle`).
/// Record order is trusted as chronological; no sort is performed.
#[derive(Clone, Debug)]
pub struct Series {
    pub id: String,
    pub label: String,
    pub id_prefix: String,
    pub color: Color,
    pub stroke_width: f64,
    pub marker_radius: f64,
    pub fill_opacity: f64,
    pub records: Vec<DataRecord>,
}

impl Series {
    pub fn new(id: impl Into<String>, records: Vec<DataRecord>) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            id_prefix: "purple".to_string(),
            color: Color::rgb(128, 0, 128),
            stroke_width: 1.0,
            marker_radius: 6.0,
            fill_opacity: 0.5,
            records,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    /// Min/max year over the records, or None when the series is empty.
    pub fn year_extent(&self) -> Option<(i32, i32)> {
        let mut it = self.records.iter();
        let first = it.next()?;
        let mut min = first.year;
        let mut max = first.year;
        for r in it {
            min = min.min(r.year);
            max = max.max(r.year);
        }
        Some((min, max))
    }
}
