// File: crates/lakechart-svg/src/lib.rs
// Summary: SVG serializer for lakechart scenes, with PNG rasterization via resvg.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use lakechart_core::mark::{Anchor, CircleMark, LineMark, Mark, PathMark, TextMark};
use lakechart_core::{RenderOptions, Scene};

pub struct SvgRenderer;

impl SvgRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Serialize the scene in mark order: one `<svg>` root sized from the
    /// options, one translated container group, then each mark as it was
    /// appended.
    pub fn render(&self, scene: &Scene, opts: &RenderOptions) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
            opts.width, opts.height
        );
        let _ = writeln!(
            out,
            r#"<g class="container" transform="translate({},{})">"#,
            opts.insets.left, opts.insets.top
        );
        for mark in &scene.marks {
            match mark {
                Mark::Text(t) => write_text(&mut out, t),
                Mark::Line(l) => write_line(&mut out, l),
                Mark::Path(p) => write_path(&mut out, p),
                Mark::Circle(c) => write_circle(&mut out, c),
            }
        }
        out.push_str("</g>\n</svg>\n");
        out
    }

    pub fn write_svg(
        &self,
        scene: &Scene,
        opts: &RenderOptions,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.render(scene, opts))
            .with_context(|| format!("failed to write SVG to {}", path.display()))?;
        Ok(())
    }

    /// Rasterize the serialized scene to a PNG over a white background.
    pub fn write_png(
        &self,
        scene: &Scene,
        opts: &RenderOptions,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        let path = path.as_ref();
        let svg = self.render(scene, opts);

        let tree = resvg::usvg::Tree::from_str(&svg, &resvg::usvg::Options::default())
            .context("failed to parse generated SVG")?;

        let mut pixmap = tiny_skia::Pixmap::new(opts.width as u32, opts.height as u32)
            .context("failed to create pixmap")?;
        let bg = scene.background;
        pixmap.fill(tiny_skia::Color::from_rgba8(bg.r, bg.g, bg.b, 255));

        resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        pixmap
            .save_png(path)
            .with_context(|| format!("failed to save PNG to {}", path.display()))?;
        Ok(())
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// ---- element writers --------------------------------------------------------

fn write_text(out: &mut String, t: &TextMark) {
    let transform = match t.rotate {
        Some(deg) => format!(r#" transform="rotate({})""#, fmt(deg)),
        None => String::new(),
    };
    let _ = writeln!(
        out,
        r#"<text{} x="{}" y="{}" text-anchor="{}" font-family="sans-serif" font-size="{}" fill="{}">{}</text>"#,
        transform,
        fmt(t.x),
        fmt(t.y),
        anchor_name(t.anchor),
        fmt(t.font_size),
        t.color.hex(),
        escape(&t.text),
    );
}

fn write_line(out: &mut String, l: &LineMark) {
    let _ = writeln!(
        out,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
        fmt(l.x1),
        fmt(l.y1),
        fmt(l.x2),
        fmt(l.y2),
        l.stroke.hex(),
        fmt(l.width),
    );
}

fn write_path(out: &mut String, p: &PathMark) {
    let style = if p.blend_multiply {
        r#" style="mix-blend-mode: multiply""#
    } else {
        ""
    };
    let _ = writeln!(
        out,
        r#"<path class="{}" id="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linejoin="round"{} d="{}"/>"#,
        escape(&p.class),
        escape(&p.id),
        p.stroke.hex(),
        fmt(p.stroke_width),
        style,
        path_data(&p.segments),
    );
}

fn write_circle(out: &mut String, c: &CircleMark) {
    // Degraded records carry non-finite centers; they simply do not render.
    if !c.cx.is_finite() || !c.cy.is_finite() {
        return;
    }
    let _ = writeln!(
        out,
        r#"<circle class="{}" id="{}" cx="{}" cy="{}" r="{}" fill="{}" fill-opacity="{}"><title>{}</title></circle>"#,
        escape(&c.class),
        escape(&c.id),
        fmt(c.cx),
        fmt(c.cy),
        fmt(c.r),
        c.fill.hex(),
        fmt(c.fill_opacity),
        escape(&c.tooltip),
    );
}

/// `M x y L x y ...` per segment; segments stay disjoint.
fn path_data(segments: &[Vec<(f64, f64)>]) -> String {
    let mut d = String::new();
    for seg in segments {
        for (i, &(x, y)) in seg.iter().enumerate() {
            if !d.is_empty() {
                d.push(' ');
            }
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(d, "{}{} {}", cmd, fmt(x), fmt(y));
        }
    }
    d
}

fn anchor_name(a: Anchor) -> &'static str {
    match a {
        Anchor::Start => "start",
        Anchor::Middle => "middle",
        Anchor::End => "end",
    }
}

/// Shortest attribute form with at most 2 decimal places, so output stays
/// stable and diffable.
fn fmt(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let mut s = format!("{:.2}", round2(v));
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/// Round to 2 decimals with ties away from zero; `{:.2}` alone rounds ties
/// to even (40.125 would become 40.12).
fn round2(v: f64) -> f64 {
    let s = v * 100.0;
    let r = if s >= 0.0 { (s + 0.5).floor() } else { (s - 0.5).ceil() };
    r / 100.0
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
