// File: crates/lakechart-core/src/axis.rs
// Summary: Axis model with nice-step tick generation and label formatting.

/// How tick values become label text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFormat {
    /// Plain integers, no thousands separators (year axis).
    Integer,
    /// Default numeric formatting: integers plain, otherwise shortest float.
    Default,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub format: TickFormat,
}

impl Axis {
    pub fn new(label: impl Into<String>, format: TickFormat) -> Self {
        Self { label: label.into(), format }
    }

    pub fn default_x() -> Self {
        Self::new("", TickFormat::Integer)
    }

    pub fn default_y() -> Self {
        Self::new("Area", TickFormat::Default)
    }

    pub fn format_tick(&self, v: f64) -> String {
        match self.format {
            TickFormat::Integer => format!("{:.0}", v),
            TickFormat::Default => {
                if (v - v.round()).abs() < 1e-9 {
                    format!("{:.0}", v)
                } else {
                    format!("{}", v)
                }
            }
        }
    }
}

/// Nice-step tick values (1/2/5 x 10^k) inside `[min, max]`, aiming for
/// roughly `count` ticks.
pub fn ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || count == 0 {
        return Vec::new();
    }
    let span = max - min;
    if span.abs() < 1e-12 {
        return vec![min];
    }
    let raw = span / count as f64;
    let mag = 10f64.powf(raw.abs().log10().floor());
    let norm = raw / mag;
    let step = if norm < 1.5 {
        1.0
    } else if norm < 3.0 {
        2.0
    } else if norm < 7.0 {
        5.0
    } else {
        10.0
    } * mag;

    let start = (min / step).ceil() * step;
    let mut out = Vec::new();
    let mut i = 0u32;
    loop {
        let v = start + step * i as f64;
        if v > max + step * 1e-9 {
            break;
        }
        out.push(v);
        i += 1;
    }
    out
}
