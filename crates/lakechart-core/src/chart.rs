// File: crates/lakechart-core/src/chart.rs
// Summary: Chart model and scene construction (title, axes, line path, point markers).

use thiserror::Error;

use crate::axis::{self, Axis};
use crate::line;
use crate::mark::{Anchor, CircleMark, LineMark, Mark, PathMark, Scene, TextMark};
use crate::record::Series;
use crate::scale;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

/// Tick line length in pixels.
const TICK_LEN: f64 = 6.0;
/// Target tick count per axis.
const TICK_COUNT: usize = 6;
/// Axis tick label font size.
const TICK_FONT: f64 = 10.0;

/// Per-render configuration, constructed once and passed explicitly to all
/// drawing steps; nothing is read from ambient globals.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, insets: Insets::default() }
    }
}

impl RenderOptions {
    /// Inner plot width: the x scale's full pixel range.
    pub fn plot_width(&self) -> f64 {
        ((self.width - self.insets.hsum() as i32) as f64).max(1.0)
    }

    /// Inner plot height: the y scale's full pixel range.
    pub fn plot_height(&self) -> f64 {
        ((self.height - self.insets.vsum() as i32) as f64).max(1.0)
    }
}

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("chart has no series")]
    NoSeries,
    #[error("series '{0}' has no records")]
    EmptySeries(String),
}

pub struct Chart {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub series: Vec<Series>,
    pub theme: Theme,
}

impl Chart {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            series: Vec::new(),
            theme: Theme::light(),
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Build the drawable scene in append order: title, bottom axis, left
    /// axis, rotated y label, then one path and one circle per record for
    /// each series. One synchronous pass; callers re-render from scratch.
    pub fn build_scene(&self, opts: &RenderOptions) -> Result<Scene, SceneError> {
        if self.series.is_empty() {
            return Err(SceneError::NoSeries);
        }
        let mut extent: Option<(i32, i32)> = None;
        for s in &self.series {
            let (lo, hi) = s
                .year_extent()
                .ok_or_else(|| SceneError::EmptySeries(s.id.clone()))?;
            extent = Some(match extent {
                Some((a, b)) => (a.min(lo), b.max(hi)),
                None => (lo, hi),
            });
        }
        let extent = match extent {
            Some(e) => e,
            None => return Err(SceneError::NoSeries),
        };

        let pw = opts.plot_width();
        let ph = opts.plot_height();
        let x = scale::x_scale(extent, pw);
        let y = scale::y_scale(ph);

        let mut scene = Scene { background: self.theme.background, ..Scene::default() };

        // Title, centered over the plot and sized from the top inset.
        scene.push(Mark::Text(TextMark {
            x: pw * 0.5,
            y: opts.insets.top as f64 * 0.1,
            text: self.title.clone(),
            anchor: Anchor::Middle,
            font_size: opts.insets.top as f64 * 0.4,
            rotate: None,
            color: self.theme.title,
        }));

        self.push_bottom_axis(&mut scene, &x, pw, ph);
        self.push_left_axis(&mut scene, &y, ph);

        // Rotated y-axis label; coordinates are in the rotated frame.
        scene.push(Mark::Text(TextMark {
            x: -ph / 2.0,
            y: -(opts.insets.right as f64) * 0.7,
            text: self.y_axis.label.clone(),
            anchor: Anchor::Middle,
            font_size: opts.insets.right as f64 / 4.0,
            rotate: Some(-90.0),
            color: self.theme.axis_label,
        }));

        for s in &self.series {
            scene.push(Mark::Path(PathMark {
                class: s.id.clone(),
                id: format!("{}Line", s.id_prefix),
                segments: line::segments(&s.records, &x, &y),
                stroke: s.color,
                stroke_width: s.stroke_width,
                blend_multiply: true,
            }));

            // One circle per record, gaps included: a missing value gets a
            // non-finite center the backend drops at write time.
            for r in &s.records {
                let cy = match r.surface_area {
                    Some(v) => y.scale(v),
                    None => f64::NAN,
                };
                let value = match r.surface_area {
                    Some(v) => format!("{:.2}", round2(v)),
                    None => "NaN".to_string(),
                };
                scene.push(Mark::Circle(CircleMark {
                    class: s.id.clone(),
                    id: format!("{}Circle", s.id_prefix),
                    cx: x.scale(r.year as f64),
                    cy,
                    r: s.marker_radius,
                    fill: s.color,
                    fill_opacity: s.fill_opacity,
                    tooltip: format!("{} {}: {}", r.year, s.label, value),
                }));
            }
        }

        Ok(scene)
    }

    fn push_bottom_axis(&self, scene: &mut Scene, x: &scale::LinearScale, pw: f64, ph: f64) {
        scene.push(Mark::Line(LineMark {
            x1: 0.0,
            y1: ph,
            x2: pw,
            y2: ph,
            stroke: self.theme.axis_line,
            width: 1.0,
        }));
        let (d0, d1) = x.domain();
        for t in axis::ticks(d0, d1, TICK_COUNT) {
            let tx = x.scale(t);
            scene.push(Mark::Line(LineMark {
                x1: tx,
                y1: ph,
                x2: tx,
                y2: ph + TICK_LEN,
                stroke: self.theme.axis_line,
                width: 1.0,
            }));
            scene.push(Mark::Text(TextMark {
                x: tx,
                y: ph + TICK_LEN + TICK_FONT + 2.0,
                text: self.x_axis.format_tick(t),
                anchor: Anchor::Middle,
                font_size: TICK_FONT,
                rotate: None,
                color: self.theme.tick_label,
            }));
        }
    }

    fn push_left_axis(&self, scene: &mut Scene, y: &scale::LinearScale, ph: f64) {
        scene.push(Mark::Line(LineMark {
            x1: 0.0,
            y1: 0.0,
            x2: 0.0,
            y2: ph,
            stroke: self.theme.axis_line,
            width: 1.0,
        }));
        let (d0, d1) = y.domain();
        for t in axis::ticks(d0, d1, TICK_COUNT) {
            let ty = y.scale(t);
            scene.push(Mark::Line(LineMark {
                x1: -TICK_LEN,
                y1: ty,
                x2: 0.0,
                y2: ty,
                stroke: self.theme.axis_line,
                width: 1.0,
            }));
            scene.push(Mark::Text(TextMark {
                x: -TICK_LEN - 3.0,
                y: ty + TICK_FONT * 0.35,
                text: self.y_axis.format_tick(t),
                anchor: Anchor::End,
                font_size: TICK_FONT,
                rotate: None,
                color: self.theme.tick_label,
            }));
        }
    }
}

/// Round to 2 decimals with ties away from zero; `{:.2}` alone rounds ties
/// to even (a 40.125 tooltip would read 40.12).
fn round2(v: f64) -> f64 {
    let s = v * 100.0;
    let r = if s >= 0.0 { (s + 0.5).floor() } else { (s - 0.5).ceil() };
    r / 100.0
}
