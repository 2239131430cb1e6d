// File: crates/lakechart-core/src/scale.rs
// Summary: Linear domain->range scale transforms for the two chart axes.

/// Fixed vertical domain: surface area is treated as a percentage-style unit.
/// Values outside it clip or render off-canvas with no error.
pub const Y_DOMAIN: (f64, f64) = (0.0, 100.0);

/// Maps a data-domain value to a pixel-range coordinate.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let (d0, mut d1) = domain;
        // Degenerate domains would divide by zero downstream.
        if (d1 - d0).abs() < 1e-12 {
            d1 = d0 + 1.0;
        }
        Self { d0, d1, r0: range.0, r1: range.1 }
    }

    #[inline]
    pub fn scale(&self, v: f64) -> f64 {
        self.r0 + (v - self.d0) / (self.d1 - self.d0) * (self.r1 - self.r0)
    }

    pub fn domain(&self) -> (f64, f64) { (self.d0, self.d1) }
    pub fn range(&self) -> (f64, f64) { (self.r0, self.r1) }
}

/// Horizontal scale: the year extent across `[0, plot_width]`.
pub fn x_scale(extent: (i32, i32), plot_width: f64) -> LinearScale {
    LinearScale::new((extent.0 as f64, extent.1 as f64), (0.0, plot_width))
}

/// Vertical scale: fixed `[0, 100]` domain across `[plot_height, 0]`,
/// inverted so larger areas render higher.
pub fn y_scale(plot_height: f64) -> LinearScale {
    LinearScale::new(Y_DOMAIN, (plot_height, 0.0))
}
